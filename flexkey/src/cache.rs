//! Memoization of `CaseCatalog`s keyed by raw string.
//!
//! Resolving the same requested key repeatedly (every access to a column by a
//! non-exact name, for instance) rebuilds the same catalog each time. A
//! resolver may hold a `CatalogCache` to share one catalog per raw string.
//! Output is identical with or without a cache.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use log::{debug, trace};

use crate::catalog::CaseCatalog;

/// Bounded, thread-safe map from raw string to its catalog.
///
/// When full, the whole map is flushed before the next insert.
#[derive(Debug)]
pub struct CatalogCache {
    capacity: usize,
    entries: RwLock<HashMap<String, Arc<CaseCatalog>>>,
}

impl CatalogCache {
    /// Create a cache holding at most `capacity` catalogs (minimum 1).
    pub fn new(capacity: usize) -> CatalogCache {
        CatalogCache {
            capacity: capacity.max(1),
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Return the cached catalog for `raw`, building and storing it on a miss.
    ///
    /// A poisoned lock degrades to building without caching.
    pub fn get_or_build(&self, raw: &str) -> Arc<CaseCatalog> {
        if let Ok(entries) = self.entries.read()
            && let Some(hit) = entries.get(raw)
        {
            trace!("catalog cache hit for '{raw}'");
            return Arc::clone(hit);
        }

        let catalog = Arc::new(CaseCatalog::build(raw));
        if let Ok(mut entries) = self.entries.write() {
            if entries.len() >= self.capacity && !entries.contains_key(raw) {
                debug!("catalog cache full ({} entries), flushing", entries.len());
                entries.clear();
            }
            entries.insert(raw.to_string(), Arc::clone(&catalog));
        }
        catalog
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }
}
