use std::collections::HashSet;
use std::sync::Arc;

use crate::error::{BundleError, Result};
use crate::locale::Locale;
use crate::parse::Scalar;
use crate::store::{EntryStore, FlatValue};

/// A resolved store for one locale, optionally linked to the store of a
/// less specific locale.
///
/// Lookups that miss in this store are forwarded to the parent. A key that
/// exists with the wrong shape is an error right away; the parent is not
/// asked.
#[derive(Debug, Clone)]
pub struct Bundle {
    locale: Locale,
    store: EntryStore,
    parent: Option<Arc<Bundle>>,
}

impl Bundle {
    pub fn new(locale: Locale, store: EntryStore) -> Self {
        Self {
            locale,
            store,
            parent: None,
        }
    }

    pub fn with_parent(mut self, parent: Arc<Bundle>) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    pub fn parent(&self) -> Option<&Bundle> {
        self.parent.as_deref()
    }

    /// This bundle followed by its ancestors, most specific first
    pub fn chain(&self) -> impl Iterator<Item = &Bundle> {
        std::iter::successors(Some(self), |bundle| bundle.parent())
    }

    pub fn get(&self, key: &str) -> Result<&FlatValue> {
        for bundle in self.chain() {
            match bundle.store.get(key) {
                Ok(value) => return Ok(value),
                Err(e) if e.is_key_not_found() => continue,
                Err(e) => return Err(e),
            }
        }
        Err(BundleError::key_not_found(key))
    }

    pub fn as_scalar(&self, key: &str) -> Result<&Scalar> {
        match self.get(key)? {
            FlatValue::Scalar(scalar) => Ok(scalar),
            other => Err(BundleError::type_mismatch(key, "scalar", other.kind())),
        }
    }

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
        self.chain().any(|bundle| bundle.store.contains_key(key))
    }

    /// Keys of this bundle and all of its ancestors
    pub fn keys(&self) -> HashSet<&str> {
        self.chain().flat_map(|bundle| bundle.store.keys()).collect()
    }

    /// Effective entries: for each key, the value the most specific bundle holds
    pub fn entries(&self) -> Vec<(&str, &FlatValue)> {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();
        for bundle in self.chain() {
            for (key, value) in bundle.store.iter() {
                if seen.insert(key) {
                    entries.push((key, value));
                }
            }
        }
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Bundle {
        let root = Bundle::new(
            Locale::ROOT,
            EntryStore::from_yaml_str("greeting: Hello\nfarewell: Bye\ncolors: [Red]").unwrap(),
        );
        Bundle::new(
            Locale::new("ja", "", ""),
            EntryStore::from_yaml_str("greeting: Konnichiwa\ncolors: Aka").unwrap(),
        )
        .with_parent(Arc::new(root))
    }

    #[test]
    fn test_child_value_shadows_parent() {
        assert_eq!(chain().as_scalar_string("greeting").unwrap(), "Konnichiwa");
    }

    #[test]
    fn test_miss_is_forwarded_to_parent() {
        let bundle = chain();
        assert_eq!(bundle.as_scalar_string("farewell").unwrap(), "Bye");
        assert!(matches!(
            bundle.get("unknown"),
            Err(BundleError::KeyNotFound { .. })
        ));
    }

    #[test]
    fn test_type_mismatch_is_not_forwarded() {
        assert!(matches!(
            chain().as_string_sequence("colors"),
            Err(BundleError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_miss_in_every_store_names_the_key() {
        let err = chain().get("missing.key").unwrap_err();
        assert!(err.is_key_not_found());
        assert!(err.to_string().contains("missing.key"));
    }

    #[test]
    fn test_keys_union() {
        let bundle = chain();
        let keys = bundle.keys();
        assert_eq!(keys.len(), 3);
        assert!(keys.contains("farewell"));
    }

    #[test]
    fn test_chain_order() {
        let bundle = chain();
        let locales: Vec<String> = bundle.chain().map(|b| b.locale().to_string()).collect();
        assert_eq!(locales, vec!["ja", "root"]);
    }

    #[test]
    fn test_entries_prefer_most_specific() {
        let bundle = chain();
        let entries = bundle.entries();
        let keys: Vec<&str> = entries.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["colors", "farewell", "greeting"]);
        assert_eq!(entries[2].1, &FlatValue::Scalar(Scalar::from("Konnichiwa")));
    }

    #[test]
    fn test_bundle_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Bundle>();
    }
}
