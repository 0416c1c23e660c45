//! Key Resolution Module
//!
//! Purpose: callers hold a collection of real keys (table columns, config
//! entries) and receive a requested key that may be spelled in a different
//! naming convention. Resolution maps the request onto one available key.
//!
//! The policy is fixed:
//! - a verbatim match always wins, keeping the key exactly as the caller wrote it
//! - otherwise the request's `CaseCatalog` is walked in the resolver's
//!   convention order, and the first rendering present among the available
//!   keys is returned
//! - if nothing matches, the error lists every rendering that was tried
//!
//! Conventions that render identically (pascalcase/capitalcase, for one) only
//! repeat an earlier attempt, so they never change which key is returned.

use std::collections::HashSet;
use std::sync::Arc;

use flexkey_data::{Convention, ResolverDef};
use log::debug;
use thiserror::Error;
use variantly::Variantly;

use crate::cache::CatalogCache;
use crate::catalog::CaseCatalog;

/// How a requested key was matched to an available key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Variantly)]
pub enum MatchKind {
    /// The requested key was present verbatim.
    Exact,
    /// The requested key's rendering in this convention was present.
    Converted(Convention),
}

/// A successfully resolved key, borrowed from the caller's key collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub key: &'a str,
    pub matched: MatchKind,
}

/// Failure to map a requested key onto any available key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("key '{requested}' (or any recognized variant) not found in keys {available:?} but tried {tried:?}")]
    KeyNotFound {
        requested: String,
        available: Vec<String>,
        tried: Vec<String>,
    },
}

impl ResolveError {
    pub(crate) fn key_not_found(requested: &str, available: &[&str], tried: Vec<String>) -> ResolveError {
        ResolveError::KeyNotFound {
            requested: requested.to_string(),
            available: available.iter().map(|k| (*k).to_string()).collect(),
            tried,
        }
    }

    /// The key that could not be resolved.
    pub fn requested(&self) -> &str {
        match self {
            ResolveError::KeyNotFound { requested, .. } => requested,
        }
    }

    /// Snapshot of the available keys at the time of the failure.
    pub fn available(&self) -> &[String] {
        match self {
            ResolveError::KeyNotFound { available, .. } => available,
        }
    }

    /// Every rendering attempted, in the order tried.
    pub fn tried(&self) -> &[String] {
        match self {
            ResolveError::KeyNotFound { tried, .. } => tried,
        }
    }
}

/// Resolves requested keys against available keys using an ordered list of conventions.
#[derive(Debug)]
pub struct KeyResolver {
    conventions: Vec<Convention>,
    cache: Option<CatalogCache>,
}

impl Default for KeyResolver {
    /// All sixteen conventions in declaration order, no cache.
    fn default() -> Self {
        Self {
            conventions: Convention::ALL.to_vec(),
            cache: None,
        }
    }
}

impl KeyResolver {
    pub fn new() -> KeyResolver {
        KeyResolver::default()
    }

    /// A resolver that tries only `conventions`, in the given order.
    pub fn with_conventions(conventions: impl IntoIterator<Item = Convention>) -> KeyResolver {
        KeyResolver {
            conventions: conventions.into_iter().collect(),
            cache: None,
        }
    }

    /// Attach a catalog cache holding up to `capacity` entries.
    #[must_use]
    pub fn with_cache(mut self, capacity: usize) -> KeyResolver {
        self.cache = Some(CatalogCache::new(capacity));
        self
    }

    /// Build a resolver from a (validated) configuration definition.
    pub fn from_def(def: &ResolverDef) -> KeyResolver {
        let resolver = KeyResolver::with_conventions(def.effective_conventions());
        if def.cache.enabled {
            resolver.with_cache(def.cache.capacity)
        } else {
            resolver
        }
    }

    /// The conventions tried, in tie-break order.
    pub fn conventions(&self) -> &[Convention] {
        &self.conventions
    }

    pub fn cache(&self) -> Option<&CatalogCache> {
        self.cache.as_ref()
    }

    /// The catalog for `raw`, served from the cache when one is attached.
    pub fn catalog(&self, raw: &str) -> Arc<CaseCatalog> {
        match &self.cache {
            Some(cache) => cache.get_or_build(raw),
            None => Arc::new(CaseCatalog::build(raw)),
        }
    }

    /// Resolve `requested` against `available`.
    ///
    /// # Errors
    /// Returns `ResolveError::KeyNotFound` when neither the key itself nor any of
    /// its renderings is among `available`.
    pub fn resolve<'a, I, K>(&self, requested: &str, available: I) -> Result<Resolution<'a>, ResolveError>
    where
        I: IntoIterator<Item = &'a K>,
        K: AsRef<str> + ?Sized + 'a,
    {
        let keys: Vec<&'a str> = available.into_iter().map(|k| k.as_ref()).collect();

        if let Some(key) = keys.iter().copied().find(|key| *key == requested) {
            return Ok(Resolution {
                key,
                matched: MatchKind::Exact,
            });
        }

        let lookup: HashSet<&'a str> = keys.iter().copied().collect();
        let catalog = self.catalog(requested);
        let mut tried = Vec::with_capacity(self.conventions.len());
        for conv in &self.conventions {
            let variant = catalog.get(*conv);
            if let Some(key) = lookup.get(variant).copied() {
                debug!("resolved key '{requested}' to '{key}' via {conv}");
                return Ok(Resolution {
                    key,
                    matched: MatchKind::Converted(*conv),
                });
            }
            tried.push(variant.to_string());
        }

        Err(ResolveError::key_not_found(requested, &keys, tried))
    }
}

/// Resolve `requested` against `available` with the default resolver.
///
/// ```
/// use flexkey::resolve;
///
/// let columns = ["Age Group", "Name"];
/// assert_eq!(resolve("age_group", &columns).unwrap().key, "Age Group");
/// assert_eq!(resolve("Name", &columns).unwrap().key, "Name");
/// assert_eq!(resolve("height", &columns).unwrap_err().tried().len(), 16);
/// ```
///
/// # Errors
/// Returns `ResolveError::KeyNotFound` when no rendering of `requested` is available.
pub fn resolve<'a, I, K>(requested: &str, available: I) -> Result<Resolution<'a>, ResolveError>
where
    I: IntoIterator<Item = &'a K>,
    K: AsRef<str> + ?Sized + 'a,
{
    KeyResolver::default().resolve(requested, available)
}
