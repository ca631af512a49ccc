//! RG-001: Intermediate types shared by the packer and the generator.
//!
//! A packed resource map is a flat JSON object keyed by `rsc:/<path>`. Each
//! value carries the identifier chosen at pack time next to the array
//! definition that declares it, so the generator never has to re-derive it.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Prefix of every resource key. Runtime lookups use the same prefix.
pub const RESOURCE_PREFIX: &str = "rsc:/";

/// Build the resource key for an input path, exactly as given.
pub fn resource_key(path: &str) -> String {
    format!("{}{}", RESOURCE_PREFIX, path)
}

/// Order-preserving key → packed resource map.
pub type ResourceMap = IndexMap<String, PackedResource>;

/// One entry of the intermediate JSON format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackedResource {
    /// Buffer name used in the generated source
    pub identifier: String,

    /// `static const char <identifier>[] = { ... };`
    pub definition: String,

    /// Entry came from a plain-string value; identifier was derived from the key
    #[serde(skip)]
    pub legacy: bool,
}

/// Wire shapes accepted when reading a resource map.
#[derive(Deserialize)]
#[serde(untagged)]
enum PackedRepr {
    Tagged {
        identifier: String,
        definition: String,
    },
    Legacy(String),
}

impl<'de> Deserialize<'de> for PackedResource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match PackedRepr::deserialize(deserializer)? {
            PackedRepr::Tagged {
                identifier,
                definition,
            } => PackedResource {
                identifier,
                definition,
                legacy: false,
            },
            PackedRepr::Legacy(definition) => PackedResource {
                identifier: String::new(),
                definition,
                legacy: true,
            },
        })
    }
}

/// Parse a resource map from JSON text.
///
/// Legacy entries get their identifier from the key with the 5-character
/// `rsc:/` prefix removed, the way the original JSON producers named them.
pub fn parse_resource_map(json: &str) -> Result<ResourceMap, String> {
    let mut map: ResourceMap =
        serde_json::from_str(json).map_err(|e| format!("JSON parse error: {}", e))?;
    for (key, entry) in map.iter_mut() {
        if entry.legacy {
            entry.identifier = super::ident::identifier_for_key(key);
        }
    }
    Ok(map)
}

/// Serialize a resource map as pretty JSON (insertion order).
pub fn render_resource_map(map: &ResourceMap) -> Result<String, String> {
    let mut json =
        serde_json::to_string_pretty(map).map_err(|e| format!("serialize error: {}", e))?;
    json.push('\n');
    Ok(json)
}
