//! Flattened YAML resource bundles with locale fallback.
//!
//! A YAML document is parsed into a [`NestedNode`] tree and flattened into
//! an immutable [`EntryStore`] addressed by dot-joined keys:
//!
//! ```
//! use yaml_bundle::EntryStore;
//!
//! let store = EntryStore::from_yaml_str(
//!     "fruits:\n  apple: Apple\ncolors:\n  - Red\n  - Purple\n",
//! )
//! .unwrap();
//! assert_eq!(store.as_scalar_string("fruits.apple").unwrap(), "Apple");
//! assert_eq!(store.as_string_sequence("colors").unwrap(), &["Red", "Purple"]);
//! ```
//!
//! A [`Resolver`] picks the most specific resource for a [`Locale`] from a
//! [`ResourceLoader`] and links the less specific ones as parents:
//!
//! ```
//! use yaml_bundle::{Locale, MemoryLoader, Resolver};
//!
//! let loader = MemoryLoader::new()
//!     .with("messages.yaml", "greeting: Hello\nfarewell: Bye")
//!     .with("messages_ja.yml", "greeting: Konnichiwa");
//! let bundle = Resolver::new(loader)
//!     .resolve("messages", &Locale::parse("ja_JP").unwrap())
//!     .unwrap();
//! assert_eq!(bundle.as_scalar_string("greeting").unwrap(), "Konnichiwa");
//! assert_eq!(bundle.as_scalar_string("farewell").unwrap(), "Bye");
//! ```

pub mod config;
pub mod error;
pub mod flatten;
pub mod locale;
pub mod output;
pub mod parse;
pub mod resolve;
pub mod store;

pub use config::{FlattenOptions, ResolveOptions, DEFAULT_FORMATS};
pub use error::{BundleError, Result};
pub use flatten::{flatten, flatten_documents, flatten_documents_with, flatten_with};
pub use locale::{candidate_name, Locale};
pub use parse::{NestedNode, Scalar, YamlParser};
pub use resolve::{
    resolve, Bundle, DirLoader, MemoryLoader, ResourceLoader, Resolver, StoreFactory, YamlFactory,
};
pub use store::{EntryStore, FlatValue};
