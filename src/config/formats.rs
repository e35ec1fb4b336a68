use crate::error::{BundleError, Result};

/// Formats probed when the caller does not supply a list, in priority order
pub const DEFAULT_FORMATS: &[&str] = &["yaml", "yml"];

/// Normalize a format name: trims whitespace and a leading dot, lowercases.
///
/// `".YML"` and `"yml"` name the same format.
pub fn normalize_format(format: &str) -> String {
    let trimmed = format.trim();
    trimmed.strip_prefix('.').unwrap_or(trimmed).to_lowercase()
}

/// Normalize a caller-supplied format list, rejecting empty lists and empty names.
///
/// Duplicates are dropped, keeping the first occurrence so the priority order holds.
pub fn normalize_formats<S: AsRef<str>>(formats: &[S]) -> Result<Vec<String>> {
    if formats.is_empty() {
        return Err(BundleError::invalid_argument(
            "formats",
            "at least one format is required",
        ));
    }

    let mut normalized: Vec<String> = Vec::with_capacity(formats.len());
    for format in formats {
        let format = normalize_format(format.as_ref());
        if format.is_empty() {
            return Err(BundleError::invalid_argument(
                "formats",
                "format names must not be empty",
            ));
        }
        if !normalized.contains(&format) {
            normalized.push(format);
        }
    }
    Ok(normalized)
}
