//! RG-009: Generator configuration (`resgen.yaml`).
//!
//! Every field is optional. The defaults reproduce the stock banner and the
//! `ResourceFactory` class name that runtime code includes.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Options controlling the generated source/header pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Name of the generated registry class
    #[serde(default = "default_class_name")]
    pub class_name: String,

    /// Comment lines placed under the `<file> - AUTOGENERATED RESOURCE FILE` line
    #[serde(default = "default_banner")]
    pub banner: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            class_name: default_class_name(),
            banner: default_banner(),
        }
    }
}

fn default_class_name() -> String {
    "ResourceFactory".to_string()
}

fn default_banner() -> Vec<String> {
    vec![
        "Copyright (C) 2016 David \"Davee\" Morgan".to_string(),
        String::new(),
        "This software may be modified and distributed under the terms".to_string(),
        "of the MIT license.  See the LICENSE file for details.".to_string(),
    ]
}

/// Parse a config from YAML text and validate it.
pub fn parse_config(yaml: &str) -> Result<GeneratorConfig, String> {
    let config: GeneratorConfig =
        serde_yaml_ng::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
    validate_config(&config)?;
    Ok(config)
}

/// Load a config file from disk.
pub fn load_config(path: &Path) -> Result<GeneratorConfig, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    parse_config(&content).map_err(|e| format!("{}: {}", path.display(), e))
}

/// Load `path` when given, defaults otherwise.
pub fn load_or_default(path: Option<&Path>) -> Result<GeneratorConfig, String> {
    match path {
        Some(p) => load_config(p),
        None => Ok(GeneratorConfig::default()),
    }
}

fn validate_config(config: &GeneratorConfig) -> Result<(), String> {
    if !super::ident::is_identifier(&config.class_name) {
        return Err(format!(
            "class_name '{}' is not a valid identifier",
            config.class_name
        ));
    }
    if let Some(line) = config.banner.iter().find(|l| l.contains("*/") || l.contains('\n')) {
        return Err(format!("banner line {:?} would break the comment block", line));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rg009_empty_yaml_gives_defaults() {
        let config = parse_config("{}").unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.class_name, "ResourceFactory");
        assert_eq!(config.banner.len(), 4);
    }

    #[test]
    fn test_rg009_custom_values() {
        let yaml = r#"
class_name: Assets
banner:
  - Copyright (C) 2026 Example Corp
"#;
        let config = parse_config(yaml).unwrap();
        assert_eq!(config.class_name, "Assets");
        assert_eq!(config.banner, vec!["Copyright (C) 2026 Example Corp"]);
    }

    #[test]
    fn test_rg009_rejects_bad_class_name() {
        let err = parse_config("class_name: 9lives").unwrap_err();
        assert!(err.contains("9lives"));
    }

    #[test]
    fn test_rg009_rejects_comment_terminator() {
        assert!(parse_config("banner: ['oops */ int x;']").is_err());
    }

    #[test]
    fn test_rg009_rejects_unknown_field() {
        let err = parse_config("namespace: foo").unwrap_err();
        assert!(err.contains("YAML parse error"));
    }

    #[test]
    fn test_rg009_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resgen.yaml");
        std::fs::write(&path, "class_name: Blobs\n").unwrap();
        let config = load_or_default(Some(&path)).unwrap();
        assert_eq!(config.class_name, "Blobs");
        assert_eq!(config.banner, default_banner());
    }

    #[test]
    fn test_rg009_load_missing_file() {
        let err = load_config(Path::new("/nonexistent/resgen.yaml")).unwrap_err();
        assert!(err.contains("failed to read"));
    }

    #[test]
    fn test_rg009_no_path_gives_defaults() {
        assert_eq!(load_or_default(None).unwrap(), GeneratorConfig::default());
    }
}
