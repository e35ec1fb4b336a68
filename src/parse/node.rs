use serde::Serialize;
use std::fmt;

/// A scalar value as the YAML parser typed it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl Scalar {
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => f.write_str("null"),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Integer(i) => write!(f, "{}", i),
            // Debug keeps the fractional part, so 1.0 does not collapse to "1"
            Scalar::Float(x) => write!(f, "{:?}", x),
            Scalar::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::String(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::String(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Integer(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

/// One node of a parsed document.
///
/// Mapping entries keep their input order and may repeat a key; the
/// flattener decides what a repeated key means.
#[derive(Debug, Clone, PartialEq)]
pub enum NestedNode {
    Scalar(Scalar),
    Sequence(Vec<NestedNode>),
    Mapping(Vec<(String, NestedNode)>),
}

impl NestedNode {
    pub fn scalar(value: impl Into<Scalar>) -> Self {
        NestedNode::Scalar(value.into())
    }

    pub fn mapping<K: Into<String>>(entries: impl IntoIterator<Item = (K, NestedNode)>) -> Self {
        NestedNode::Mapping(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn sequence(items: impl IntoIterator<Item = NestedNode>) -> Self {
        NestedNode::Sequence(items.into_iter().collect())
    }

    /// Short name of the node shape, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            NestedNode::Scalar(_) => "scalar",
            NestedNode::Sequence(_) => "sequence",
            NestedNode::Mapping(_) => "mapping",
        }
    }
}

/// Renders scalars as-is and containers in YAML flow style (`[a, b]`, `{k: v}`)
impl fmt::Display for NestedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NestedNode::Scalar(s) => write!(f, "{}", s),
            NestedNode::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            NestedNode::Mapping(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("}")
            }
        }
    }
}
