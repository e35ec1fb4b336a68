//! Locale resolution: pick the most specific available resource for a
//! locale and turn it into an [`EntryStore`] or a chained [`Bundle`].
//!
//! Candidates are probed variant by variant (most specific first) and, for
//! each variant, format by format in the caller's order. A missing resource
//! moves on to the next candidate. A resource that exists but cannot be
//! parsed stops the search with [`BundleError::BundleLoadError`].

pub mod bundle;
pub mod loader;

use std::io::Read;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::{normalize_formats, FlattenOptions, ResolveOptions};
use crate::error::{BundleError, Result};
use crate::locale::{candidate_name, Locale};
use crate::store::EntryStore;

pub use bundle::Bundle;
pub use loader::{DirLoader, MemoryLoader, ResourceLoader};

/// Turns the raw bytes of a found resource into a store
pub trait StoreFactory {
    fn create(&self, bytes: &[u8]) -> Result<EntryStore>;
}

impl<F> StoreFactory for F
where
    F: Fn(&[u8]) -> Result<EntryStore>,
{
    fn create(&self, bytes: &[u8]) -> Result<EntryStore> {
        self(bytes)
    }
}

/// YAML parse followed by flattening
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlFactory {
    options: FlattenOptions,
}

impl YamlFactory {
    pub fn new(options: FlattenOptions) -> Self {
        Self { options }
    }
}

impl StoreFactory for YamlFactory {
    fn create(&self, bytes: &[u8]) -> Result<EntryStore> {
        EntryStore::from_yaml_reader_with(bytes, self.options)
    }
}

/// Resolve the first available store for `locale`, without parent chaining.
///
/// Uses the YAML factory with default flatten options.
pub fn resolve<S, L>(base_name: &str, locale: &Locale, formats: &[S], loader: &L) -> Result<EntryStore>
where
    S: AsRef<str>,
    L: ResourceLoader + ?Sized,
{
    let formats = normalize_formats(formats)?;
    let resolver = Resolver::with_options(
        LoaderRef(loader),
        ResolveOptions::new().with_formats(formats),
    );
    resolver.resolve_store(base_name, locale)
}

/// Composes a [`ResourceLoader`] and a [`StoreFactory`] with resolve options
pub struct Resolver<L, F = YamlFactory> {
    loader: L,
    factory: F,
    options: ResolveOptions,
}

impl<L: ResourceLoader> Resolver<L, YamlFactory> {
    pub fn new(loader: L) -> Self {
        Self::with_options(loader, ResolveOptions::default())
    }

    pub fn with_options(loader: L, options: ResolveOptions) -> Self {
        Self {
            loader,
            factory: YamlFactory::new(options.flatten),
            options,
        }
    }
}

impl<L: ResourceLoader, F: StoreFactory> Resolver<L, F> {
    /// Replace the factory used for found resources
    pub fn with_factory<G: StoreFactory>(self, factory: G) -> Resolver<L, G> {
        Resolver {
            loader: self.loader,
            factory,
            options: self.options,
        }
    }

    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Store of the most specific locale variant that has a resource
    pub fn resolve_store(&self, base_name: &str, locale: &Locale) -> Result<EntryStore> {
        self.resolve_first(base_name, locale).map(|(_, _, store)| store)
    }

    /// Bundle of the most specific available variant, linked to the bundles
    /// of every less specific variant that has a resource when parent
    /// chaining is enabled.
    pub fn resolve(&self, base_name: &str, locale: &Locale) -> Result<Bundle> {
        let (position, found, store) = self.resolve_first(base_name, locale)?;
        let bundle = Bundle::new(found, store);
        if !self.options.parent_chain {
            return Ok(bundle);
        }

        let formats = normalize_formats(self.options.formats.as_slice())?;
        let mut tried = Vec::new();
        let mut parents = Vec::new();
        for variant in locale.variant_chain().into_iter().skip(position + 1) {
            if let Some(store) = self.load_variant(base_name, &variant, &formats, &mut tried)? {
                parents.push(Bundle::new(variant, store));
            }
        }

        let parent = parents
            .into_iter()
            .rev()
            .fold(None::<Arc<Bundle>>, |parent, bundle| {
                Some(Arc::new(match parent {
                    Some(parent) => bundle.with_parent(parent),
                    None => bundle,
                }))
            });

        Ok(match parent {
            Some(parent) => bundle.with_parent(parent),
            None => bundle,
        })
    }

    fn resolve_first(&self, base_name: &str, locale: &Locale) -> Result<(usize, Locale, EntryStore)> {
        if base_name.trim().is_empty() {
            return Err(BundleError::invalid_argument(
                "base_name",
                "must not be empty",
            ));
        }
        let formats = normalize_formats(self.options.formats.as_slice())?;

        let mut tried = Vec::new();
        for (position, variant) in locale.variant_chain().into_iter().enumerate() {
            if let Some(store) = self.load_variant(base_name, &variant, &formats, &mut tried)? {
                return Ok((position, variant, store));
            }
        }

        Err(BundleError::bundle_not_found(base_name, locale.to_string(), &tried))
    }

    /// First format of `variant` that exists, or `None` when none does
    fn load_variant(
        &self,
        base_name: &str,
        variant: &Locale,
        formats: &[String],
        tried: &mut Vec<String>,
    ) -> Result<Option<EntryStore>> {
        for format in formats {
            let name = candidate_name(base_name, variant, format);
            debug!(candidate = %name, "probing bundle candidate");

            let Some(bytes) = self.read_candidate(&name)? else {
                tried.push(name);
                continue;
            };

            let store = self
                .factory
                .create(&bytes)
                .map_err(|e| BundleError::load_error(&name, e))?;
            info!(candidate = %name, locale = %variant, entries = store.len(), "loaded bundle");
            return Ok(Some(store));
        }
        Ok(None)
    }

    fn read_candidate(&self, name: &str) -> Result<Option<Vec<u8>>> {
        let Some(mut reader) = self.loader.open(name)? else {
            return Ok(None);
        };
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Some(bytes))
    }
}

struct LoaderRef<'a, L: ?Sized>(&'a L);

impl<L: ResourceLoader + ?Sized> ResourceLoader for LoaderRef<'_, L> {
    fn open(&self, name: &str) -> std::io::Result<Option<Box<dyn Read + '_>>> {
        self.0.open(name)
    }
}
