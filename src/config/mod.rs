pub mod formats;
pub mod options;

pub use formats::{normalize_format, normalize_formats, DEFAULT_FORMATS};
pub use options::{FlattenOptions, ResolveOptions};
