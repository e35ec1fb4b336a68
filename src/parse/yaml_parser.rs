use std::io::Read;
use tracing::trace;
use yaml_rust::{Yaml, YamlLoader};

use super::node::{NestedNode, Scalar};
use crate::error::{BundleError, Result};

/// Adapter from YAML text to [`NestedNode`] trees.
///
/// Every YAML document in the input becomes one tree, in input order.
/// Aliases are already expanded by the loader, so trees never share nodes.
pub struct YamlParser;

impl YamlParser {
    pub fn parse_str(text: &str) -> Result<Vec<NestedNode>> {
        let docs = YamlLoader::load_from_str(text).map_err(|e| BundleError::malformed(e.to_string()))?;
        trace!(documents = docs.len(), "parsed YAML input");
        docs.into_iter().map(to_node).collect()
    }

    /// Parse a UTF-8 byte stream. The stream is consumed to the end.
    pub fn parse_reader<R: Read>(mut reader: R) -> Result<Vec<NestedNode>> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::parse_bytes(&bytes)
    }

    pub fn parse_bytes(bytes: &[u8]) -> Result<Vec<NestedNode>> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| BundleError::malformed(format!("input is not valid UTF-8: {}", e)))?;
        Self::parse_str(text.strip_prefix('\u{feff}').unwrap_or(text))
    }

    /// Parse a character stream
    pub fn parse_chars<I: IntoIterator<Item = char>>(chars: I) -> Result<Vec<NestedNode>> {
        let text: String = chars.into_iter().collect();
        Self::parse_str(&text)
    }
}

fn to_node(yaml: Yaml) -> Result<NestedNode> {
    let node = match yaml {
        Yaml::Hash(hash) => NestedNode::Mapping(
            hash.into_iter()
                .map(|(key, value)| Ok((to_node(key)?.to_string(), to_node(value)?)))
                .collect::<Result<_>>()?,
        ),
        Yaml::Array(items) => NestedNode::Sequence(items.into_iter().map(to_node).collect::<Result<_>>()?),
        Yaml::String(s) => NestedNode::Scalar(Scalar::String(s)),
        Yaml::Integer(i) => NestedNode::Scalar(Scalar::Integer(i)),
        Yaml::Boolean(b) => NestedNode::Scalar(Scalar::Bool(b)),
        Yaml::Real(text) => match parse_real(&text) {
            Some(x) => NestedNode::Scalar(Scalar::Float(x)),
            None => NestedNode::Scalar(Scalar::String(text)),
        },
        Yaml::Null => NestedNode::Scalar(Scalar::Null),
        // The loader expands aliases, so one left over is an unresolved anchor
        Yaml::Alias(id) => return Err(BundleError::malformed(format!("unresolved alias #{}", id))),
        // A tagged scalar whose text does not fit the tag, e.g. `!!int abc`
        Yaml::BadValue => {
            return Err(BundleError::malformed(
                "value could not be constructed for its tag",
            ))
        }
    };
    Ok(node)
}

fn parse_real(text: &str) -> Option<f64> {
    match text {
        ".inf" | ".Inf" | ".INF" | "+.inf" | "+.Inf" | "+.INF" => Some(f64::INFINITY),
        "-.inf" | "-.Inf" | "-.INF" => Some(f64::NEG_INFINITY),
        ".nan" | ".NaN" | ".NAN" => Some(f64::NAN),
        _ => text.parse().ok(),
    }
}
