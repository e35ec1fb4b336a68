use thiserror::Error;

/// Error type for bundle parsing, lookup and resolution
#[derive(Debug, Error)]
pub enum BundleError {
    /// A required argument was empty or otherwise unusable
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// The YAML parser rejected the document text
    #[error("Malformed YAML document: {reason}\n\nTip: Verify the YAML syntax is correct")]
    MalformedDocument { reason: String },

    /// The document parsed but has a shape that cannot be flattened
    #[error("Unsupported document format: {reason}")]
    Format { reason: String },

    /// The flat key is not present in the store (or anywhere in its parent chain)
    #[error("Key '{key}' not found")]
    KeyNotFound { key: String },

    /// The key exists but holds a value of a different shape
    #[error("Key '{key}' holds a {found}, expected a {expected}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    /// No candidate resource exists for any locale variant and format
    #[error("No bundle found for base name '{base_name}' and locale '{locale}'.\n\nTried: {tried}")]
    BundleNotFound {
        base_name: String,
        locale: String,
        tried: String,
    },

    /// A candidate resource exists but could not be turned into a store
    #[error("Failed to load bundle resource {name}: {source}")]
    BundleLoadError {
        name: String,
        #[source]
        source: Box<BundleError>,
    },

    /// IO error while acquiring or reading a resource
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BundleError {
    /// Create an InvalidArgument error
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Create a MalformedDocument error from the parser's message
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedDocument {
            reason: reason.into(),
        }
    }

    /// Create a Format error
    pub fn format(reason: impl Into<String>) -> Self {
        Self::Format {
            reason: reason.into(),
        }
    }

    /// Create a KeyNotFound error
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    /// Create a TypeMismatch error
    pub fn type_mismatch(key: impl Into<String>, expected: &'static str, found: &'static str) -> Self {
        Self::TypeMismatch {
            key: key.into(),
            expected,
            found,
        }
    }

    /// Create a BundleNotFound error listing every candidate name that was probed
    pub fn bundle_not_found(
        base_name: impl Into<String>,
        locale: impl Into<String>,
        tried: &[String],
    ) -> Self {
        Self::BundleNotFound {
            base_name: base_name.into(),
            locale: locale.into(),
            tried: tried.join(", "),
        }
    }

    /// Wrap a parse or flatten failure of the resource `name`
    pub fn load_error(name: impl Into<String>, source: BundleError) -> Self {
        Self::BundleLoadError {
            name: name.into(),
            source: Box::new(source),
        }
    }

    /// Whether this error means "nothing under that key", the only miss a parent bundle may answer
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound { .. })
    }
}

/// Result type alias for BundleError
pub type Result<T> = std::result::Result<T, BundleError>;
