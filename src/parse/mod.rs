pub mod node;
pub mod yaml_parser;

pub use node::{NestedNode, Scalar};
pub use yaml_parser::YamlParser;
