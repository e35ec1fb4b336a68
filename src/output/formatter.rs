use colored::Colorize;
use std::collections::BTreeMap;

use crate::resolve::Bundle;
use crate::store::FlatValue;

/// Formatter for printing bundle entries as text or JSON
pub struct EntryFormatter {
    color: bool,
}

impl EntryFormatter {
    /// Create a formatter without terminal colors
    pub fn new() -> Self {
        Self { color: false }
    }

    /// Highlight keys in bold when `color` is set
    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    /// Format every effective entry of a bundle as `key = value`, sorted by key
    pub fn format_entries(&self, bundle: &Bundle) -> String {
        let mut output = String::new();
        for (key, value) in bundle.entries() {
            let key = if self.color {
                key.bold().to_string()
            } else {
                key.to_string()
            };
            output.push_str(&format!("{} = {}\n", key, Self::inline_value(value)));
        }
        output
    }

    /// Format one value: a scalar on one line, sequence items one per line
    pub fn format_value(&self, value: &FlatValue) -> String {
        match value {
            FlatValue::Scalar(scalar) => format!("{}\n", scalar),
            FlatValue::Sequence(items) => items.iter().map(|item| format!("{}\n", item)).collect(),
        }
    }

    /// Format the effective entries as a pretty-printed JSON object
    pub fn format_json(&self, bundle: &Bundle) -> serde_json::Result<String> {
        let map: BTreeMap<&str, &FlatValue> = bundle.entries().into_iter().collect();
        let mut json = serde_json::to_string_pretty(&map)?;
        json.push('\n');
        Ok(json)
    }

    fn inline_value(value: &FlatValue) -> String {
        match value {
            FlatValue::Scalar(scalar) => scalar.to_string(),
            FlatValue::Sequence(items) => format!("[{}]", items.join(", ")),
        }
    }
}

impl Default for EntryFormatter {
    fn default() -> Self {
        Self::new()
    }
}
