//! RG-007: C++ source/header rendering.
//!
//! The source file holds the byte arrays (file-local) and the registry
//! initializer list; the header declares the record type and `find()`.
//! Rendering is pure: the same map and config always give the same text.

use super::config::GeneratorConfig;
use super::ident;
use super::types::ResourceMap;
use std::path::Path;

/// Rendered source/header pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPair {
    pub source: String,
    pub header: String,
}

/// Render both files for a validated resource map.
pub fn render(
    source_path: &Path,
    header_path: &Path,
    map: &ResourceMap,
    config: &GeneratorConfig,
) -> GeneratedPair {
    GeneratedPair {
        source: render_source(source_path, header_path, map, config),
        header: render_header(header_path, config),
    }
}

/// Render the `.cpp` file.
pub fn render_source(
    source_path: &Path,
    header_path: &Path,
    map: &ResourceMap,
    config: &GeneratorConfig,
) -> String {
    let class = &config.class_name;
    let mut buffers = Vec::with_capacity(map.len());
    let mut initialisations = Vec::with_capacity(map.len());
    for (key, entry) in map {
        buffers.push(format!("\t{}", entry.definition));
        initialisations.push(format!(
            "\t\t{{ \"{}\", {{ {}, sizeof({}) }} }}",
            escape_cpp_string(key),
            entry.identifier,
            entry.identifier
        ));
    }

    let mut lines = banner(&file_name(source_path), config);
    lines.push(String::new());
    lines.push(format!("#include \"{}\"", escape_cpp_string(&file_name(header_path))));
    lines.push(String::new());
    lines.push("namespace {".to_string());
    lines.push(buffers.join("\n"));
    lines.push("}".to_string());
    lines.push(String::new());
    lines.push(format!(
        "{class}::{class}(std::unordered_map<std::string, Resource> resources)"
    ));
    lines.push("\t: m_resources(resources)".to_string());
    lines.push("{".to_string());
    lines.push("}".to_string());
    lines.push(String::new());
    lines.push(format!("{class} *{class}::instance(void)"));
    lines.push("{".to_string());
    lines.push(format!("\tstatic {class} factory("));
    lines.push("\t\t// initialisations go here".to_string());
    lines.push("\t{".to_string());
    lines.push(initialisations.join(",\n"));
    lines.push("\t});".to_string());
    lines.push(String::new());
    lines.push("\treturn &factory;".to_string());
    lines.push("}".to_string());
    lines.push(String::new());
    lines.join("\n")
}

/// Render the `.hpp` file.
pub fn render_header(header_path: &Path, config: &GeneratorConfig) -> String {
    let class = &config.class_name;
    let name = file_name(header_path);
    let guard = format!("AUTOGEN_{}_RESOURCE_H", ident::sanitize(&name));

    let ifndef = format!("#ifndef {guard}");
    let define = format!("#define {guard}");
    let endif = format!("#endif // {guard}");
    let class_decl = format!("class {class}");
    let ctor_decl = format!("\t{class}(std::unordered_map<std::string, Resource> resources);");
    let instance_decl = format!("\tstatic {class} *instance(void);");

    let mut lines = banner(&name, config);
    lines.extend(
        [
            "",
            ifndef.as_str(),
            define.as_str(),
            "",
            "#include <unordered_map>",
            "#include <string>",
            "",
            class_decl.as_str(),
            "{",
            "public:",
            "\tstruct Resource",
            "\t{",
            "\t\tconst char *data;",
            "\t\tunsigned int size;",
            "\t};",
            "",
            "public:",
            "\tstatic const Resource *find(const std::string& name)",
            "\t{",
            "\t\tauto it = instance()->m_resources.find(name);",
            "",
            "\t\tif (it == instance()->m_resources.end())",
            "\t\t\treturn nullptr;",
            "",
            "\t\treturn &(it->second);",
            "\t}",
            "",
            "private:",
            ctor_decl.as_str(),
            instance_decl.as_str(),
            "",
            "private:",
            "\tstd::unordered_map<std::string, Resource> m_resources;",
            "};",
            "",
            endif.as_str(),
            "",
        ]
        .map(String::from),
    );
    lines.join("\n")
}

/// Comment block opening every generated file.
fn banner(name: &str, config: &GeneratorConfig) -> Vec<String> {
    let mut lines = vec![
        "/*".to_string(),
        format!(" * {} - AUTOGENERATED RESOURCE FILE", name),
    ];
    if !config.banner.is_empty() {
        lines.push(" *".to_string());
    }
    for line in &config.banner {
        if line.is_empty() {
            lines.push(" *".to_string());
        } else {
            lines.push(format!(" * {}", line));
        }
    }
    lines.push(" */".to_string());
    lines
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Escape text for a C++ narrow string literal.
pub fn escape_cpp_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out
}
