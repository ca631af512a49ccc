//! RG-004: Packer - raw files into a resource map.
//!
//! Each input becomes one entry:
//! - key: `rsc:/<path as given>`
//! - identifier: the sanitized path
//! - definition: `static const char <identifier>[] = { 0x.., ... };`

use super::types::{resource_key, render_resource_map, PackedResource, ResourceMap};
use super::{hexlit, ident, output};
use std::path::{Path, PathBuf};

/// Pack one file's bytes under the given path string.
pub fn pack_bytes(path: &str, bytes: &[u8]) -> Result<(String, PackedResource), String> {
    if bytes.is_empty() {
        tracing::warn!(path = %path, "empty input, emitting a zero-length array initializer");
    }
    let identifier = ident::identifier_for_path(path)?;
    let definition = hexlit::array_definition(&identifier, bytes);
    Ok((
        resource_key(path),
        PackedResource {
            identifier,
            definition,
            legacy: false,
        },
    ))
}

/// Read and pack a single input file.
pub fn pack_file(path: &Path) -> Result<(String, PackedResource), String> {
    let bytes =
        std::fs::read(path).map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    let name = path
        .to_str()
        .ok_or_else(|| format!("{} is not valid UTF-8, cannot form a resource key", path.display()))?;
    tracing::debug!(path = %name, bytes = bytes.len(), "packing resource");
    pack_bytes(name, &bytes)
}

/// Pack inputs in order. A repeated path replaces the earlier entry.
pub fn pack_files(inputs: &[PathBuf]) -> Result<ResourceMap, String> {
    let mut map = ResourceMap::new();
    for input in inputs {
        let (key, entry) = pack_file(input)?;
        if map.insert(key.clone(), entry).is_some() {
            tracing::warn!(key = %key, "input listed more than once, keeping last");
        }
    }
    Ok(map)
}

/// Expand glob patterns among the inputs.
///
/// An argument naming an existing path is always taken literally, even when
/// it contains `*`, `?` or `[`. Only arguments that do not exist are globbed.
pub fn expand_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, String> {
    let mut expanded = Vec::with_capacity(inputs.len());
    for input in inputs {
        let raw = input.to_string_lossy();
        if input.exists() || !raw.contains(['*', '?', '[']) {
            expanded.push(input.clone());
            continue;
        }
        let paths = glob::glob(&raw).map_err(|e| format!("invalid pattern '{}': {}", raw, e))?;
        let mut matches = Vec::new();
        for entry in paths {
            let path = entry.map_err(|e| format!("cannot read match for '{}': {}", raw, e))?;
            if path.is_file() {
                matches.push(path);
            }
        }
        if matches.is_empty() {
            return Err(format!("pattern '{}' matched no files", raw));
        }
        matches.sort();
        expanded.extend(matches);
    }
    Ok(expanded)
}

/// Pack all inputs and write the JSON map to `output`. Returns the entry count.
pub fn pack(output: &Path, inputs: &[PathBuf]) -> Result<usize, String> {
    let inputs = expand_inputs(inputs)?;
    let map = pack_files(&inputs)?;
    let json = render_resource_map(&map)?;
    output::write_output(output, &json)?;
    Ok(map.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::parse_resource_map;

    #[test]
    fn test_rg004_pack_bytes() {
        let (key, entry) = pack_bytes("foo.bin", &[0x41, 0x00, 0xFF]).unwrap();
        assert_eq!(key, "rsc:/foo.bin");
        assert_eq!(entry.identifier, "foobin");
        assert!(entry.definition.contains("0x41, 0x0, 0xff"));
        assert_eq!(
            entry.definition,
            "static const char foobin[] = { 0x41, 0x0, 0xff };"
        );
    }

    #[test]
    fn test_rg004_pack_empty_file() {
        let (key, entry) = pack_bytes("empty.bin", &[]).unwrap();
        assert_eq!(key, "rsc:/empty.bin");
        assert_eq!(entry.definition, "static const char emptybin[] = {  };");
        let (id, bytes) = hexlit::parse_definition(&entry.definition).unwrap();
        assert_eq!(id, "emptybin");
        assert!(bytes.is_empty());
    }

    #[test]
    fn test_rg004_literal_bracket_name_wins_over_glob() {
        let dir = tempfile::tempdir().unwrap();
        let literal = dir.path().join("x[1].bin");
        let sibling = dir.path().join("x1.bin");
        std::fs::write(&literal, [0xAAu8]).unwrap();
        std::fs::write(&sibling, [0xBBu8]).unwrap();

        let expanded = expand_inputs(std::slice::from_ref(&literal)).unwrap();
        assert_eq!(expanded, vec![literal.clone()]);

        let map = pack_files(&expanded).unwrap();
        let key = format!("rsc:/{}", literal.display());
        assert_eq!(map.len(), 1);
        assert!(map[key.as_str()].definition.contains("{ 0xaa }"));
    }

    #[test]
    fn test_rg004_literal_bracket_name_alone() {
        let dir = tempfile::tempdir().unwrap();
        let literal = dir.path().join("sprite[1].png");
        std::fs::write(&literal, "s").unwrap();
        assert_eq!(
            expand_inputs(std::slice::from_ref(&literal)).unwrap(),
            vec![literal]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_rg004_non_utf8_path_is_rejected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OsStr::from_bytes(b"bad\xffname.bin"));
        if std::fs::write(&path, "x").is_err() {
            // filesystem refuses non-UTF-8 names
            return;
        }
        let err = pack_file(&path).unwrap_err();
        assert!(err.contains("not valid UTF-8"));
    }

    #[test]
    fn test_rg004_pack_rejects_unnameable_path() {
        assert!(pack_bytes("1234", &[1]).is_err());
    }

    #[test]
    fn test_rg004_pack_missing_file() {
        let result = pack_file(Path::new("/nonexistent/resource.bin"));
        assert!(result.unwrap_err().contains("cannot read"));
    }

    #[test]
    fn test_rg004_pack_writes_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("foo.bin");
        std::fs::write(&input, [0x41u8, 0x00, 0xFF]).unwrap();
        let out = dir.path().join("build").join("res.json");

        let count = pack(&out, std::slice::from_ref(&input)).unwrap();
        assert_eq!(count, 1);

        let map = parse_resource_map(&std::fs::read_to_string(&out).unwrap()).unwrap();
        let key = format!("rsc:/{}", input.display());
        let entry = &map[key.as_str()];
        assert!(entry.definition.contains("0x41, 0x0, 0xff"));
        assert_eq!(entry.identifier, ident::sanitize(&input.to_string_lossy()));
    }

    #[test]
    fn test_rg004_pack_preserves_argument_order() {
        let dir = tempfile::tempdir().unwrap();
        let b = dir.path().join("b.txt");
        let a = dir.path().join("a.txt");
        std::fs::write(&b, "b").unwrap();
        std::fs::write(&a, "a").unwrap();

        let map = pack_files(&[b.clone(), a.clone(), b.clone()]).unwrap();
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(
            keys,
            vec![
                format!("rsc:/{}", b.display()),
                format!("rsc:/{}", a.display())
            ]
        );
    }

    #[test]
    fn test_rg004_expand_glob() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.png"), "b").unwrap();
        std::fs::write(dir.path().join("a.png"), "a").unwrap();
        std::fs::write(dir.path().join("c.txt"), "c").unwrap();
        let pattern = dir.path().join("*.png");

        let expanded = expand_inputs(&[pattern]).unwrap();
        assert_eq!(
            expanded,
            vec![dir.path().join("a.png"), dir.path().join("b.png")]
        );
    }

    #[test]
    fn test_rg004_expand_glob_no_match() {
        let dir = tempfile::tempdir().unwrap();
        let pattern = dir.path().join("*.wav");
        let err = expand_inputs(&[pattern]).unwrap_err();
        assert!(err.contains("matched no files"));
    }

    #[test]
    fn test_rg004_plain_paths_pass_through() {
        let inputs = vec![PathBuf::from("missing.bin")];
        assert_eq!(expand_inputs(&inputs).unwrap(), inputs);
    }
}
