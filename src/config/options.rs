use super::formats::DEFAULT_FORMATS;

/// Knobs for the flattening pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlattenOptions {
    /// Also emit `key[i]` entries for every sequence element (off by default)
    pub index_keys: bool,
}

impl FlattenOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_index_keys(mut self, index_keys: bool) -> Self {
        self.index_keys = index_keys;
        self
    }
}

/// Options for locale resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    pub formats: Vec<String>,
    pub parent_chain: bool,
    pub flatten: FlattenOptions,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolveOptions {
    pub fn new() -> Self {
        Self {
            formats: DEFAULT_FORMATS.iter().map(|f| f.to_string()).collect(),
            parent_chain: true,
            flatten: FlattenOptions::default(),
        }
    }

    pub fn with_formats<S: Into<String>>(mut self, formats: impl IntoIterator<Item = S>) -> Self {
        self.formats = formats.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_parent_chain(mut self, parent_chain: bool) -> Self {
        self.parent_chain = parent_chain;
        self
    }

    pub fn with_index_keys(mut self, index_keys: bool) -> Self {
        self.flatten = self.flatten.with_index_keys(index_keys);
        self
    }
}
