use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::str::FromStr;

use crate::config::FlattenOptions;
use crate::error::{BundleError, Result};
use crate::flatten::flatten_documents_with;
use crate::parse::{Scalar, YamlParser};

/// Value stored under one flat key
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FlatValue {
    Scalar(Scalar),
    Sequence(Vec<String>),
}

impl FlatValue {
    pub fn kind(&self) -> &'static str {
        match self {
            FlatValue::Scalar(_) => "scalar",
            FlatValue::Sequence(_) => "sequence",
        }
    }
}

impl From<Scalar> for FlatValue {
    fn from(value: Scalar) -> Self {
        FlatValue::Scalar(value)
    }
}

impl From<Vec<String>> for FlatValue {
    fn from(value: Vec<String>) -> Self {
        FlatValue::Sequence(value)
    }
}

/// Immutable flat key/value store produced by one flattening pass.
///
/// There is no mutation API: build a new store instead. All data is owned,
/// so a store can be shared between threads without locking.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EntryStore {
    entries: HashMap<String, FlatValue>,
}

impl EntryStore {
    pub(crate) fn from_entries(entries: HashMap<String, FlatValue>) -> Self {
        Self { entries }
    }

    /// Parse YAML text and flatten every document into one store
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Self::from_yaml_str_with(text, FlattenOptions::default())
    }

    pub fn from_yaml_str_with(text: &str, options: FlattenOptions) -> Result<Self> {
        flatten_documents_with(&YamlParser::parse_str(text)?, options)
    }

    /// Parse a UTF-8 byte stream. The reader is dropped before returning.
    pub fn from_yaml_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_yaml_reader_with(reader, FlattenOptions::default())
    }

    pub fn from_yaml_reader_with<R: Read>(reader: R, options: FlattenOptions) -> Result<Self> {
        flatten_documents_with(&YamlParser::parse_reader(reader)?, options)
    }

    /// Parse a character stream
    pub fn from_yaml_chars<I: IntoIterator<Item = char>>(chars: I) -> Result<Self> {
        Self::from_yaml_chars_with(chars, FlattenOptions::default())
    }

    pub fn from_yaml_chars_with<I: IntoIterator<Item = char>>(
        chars: I,
        options: FlattenOptions,
    ) -> Result<Self> {
        flatten_documents_with(&YamlParser::parse_chars(chars)?, options)
    }

    pub fn get(&self, key: &str) -> Result<&FlatValue> {
        self.entries
            .get(key)
            .ok_or_else(|| BundleError::key_not_found(key))
    }

    pub fn as_scalar(&self, key: &str) -> Result<&Scalar> {
        match self.get(key)? {
            FlatValue::Scalar(scalar) => Ok(scalar),
            other => Err(BundleError::type_mismatch(key, "scalar", other.kind())),
        }
    }

    /// String form of a scalar entry; numbers and booleans are rendered as parsed
    pub fn as_scalar_string(&self, key: &str) -> Result<String> {
        self.as_scalar(key).map(|scalar| scalar.to_string())
    }

    pub fn as_string_sequence(&self, key: &str) -> Result<&[String]> {
        match self.get(key)? {
            FlatValue::Sequence(items) => Ok(items),
            other => Err(BundleError::type_mismatch(key, "sequence", other.kind())),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> HashSet<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FlatValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromStr for EntryStore {
    type Err = BundleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_yaml_str(s)
    }
}
