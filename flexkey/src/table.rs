//! Flexible key access for tabular collaborators.
//!
//! The table itself is not owned by this crate. Anything that can list its key
//! names and fetch a value by exact key implements `KeyedTable`; wrapping it in
//! a `FlexTable` makes key access tolerant of naming-convention differences:
//! exact lookups go straight through, misses are resolved with a `KeyResolver`
//! and retried with the resolved key.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use log::{debug, warn};

use crate::resolve::{KeyResolver, MatchKind, ResolveError};

/// A keyed collection (columns of a table, entries of a record) with exact-key access.
pub trait KeyedTable {
    type Value: ?Sized;

    /// Current key names, in the table's own order.
    fn keys(&self) -> Vec<&str>;

    /// Fetch a value by its exact key.
    fn get_exact(&self, key: &str) -> Option<&Self::Value>;
}

impl<V, S: BuildHasher> KeyedTable for HashMap<String, V, S> {
    type Value = V;

    fn keys(&self) -> Vec<&str> {
        HashMap::keys(self).map(String::as_str).collect()
    }

    fn get_exact(&self, key: &str) -> Option<&V> {
        self.get(key)
    }
}

impl<V> KeyedTable for BTreeMap<String, V> {
    type Value = V;

    fn keys(&self) -> Vec<&str> {
        BTreeMap::keys(self).map(String::as_str).collect()
    }

    fn get_exact(&self, key: &str) -> Option<&V> {
        self.get(key)
    }
}

/// Ordered columns, e.g. `vec![("Age Group".into(), ages), ("Name".into(), names)]`.
impl<V> KeyedTable for Vec<(String, V)> {
    type Value = V;

    fn keys(&self) -> Vec<&str> {
        self.iter().map(|(key, _)| key.as_str()).collect()
    }

    fn get_exact(&self, key: &str) -> Option<&V> {
        self.iter().find(|(k, _)| k == key).map(|(_, value)| value)
    }
}

/// Decorator adding convention-tolerant key access to a `KeyedTable`.
#[derive(Debug)]
pub struct FlexTable<T> {
    table: T,
    resolver: KeyResolver,
}

impl<T: KeyedTable> FlexTable<T> {
    /// Wrap `table` with the default resolver.
    pub fn new(table: T) -> FlexTable<T> {
        FlexTable::with_resolver(table, KeyResolver::default())
    }

    pub fn with_resolver(table: T, resolver: KeyResolver) -> FlexTable<T> {
        FlexTable { table, resolver }
    }

    /// Fetch a value by `key`, falling back to a convention variant of it.
    ///
    /// # Errors
    /// Returns `ResolveError::KeyNotFound`, listing the table's keys and every
    /// variant tried, when no variant of `key` is present.
    pub fn get(&self, key: &str) -> Result<&T::Value, ResolveError> {
        if let Some(value) = self.table.get_exact(key) {
            return Ok(value);
        }

        let keys = self.table.keys();
        let resolution = self.resolver.resolve(key, &keys).inspect_err(|err| {
            warn!("{err}");
        })?;
        if let MatchKind::Converted(conv) = resolution.matched {
            debug!("table access '{key}' served by column '{}' ({conv})", resolution.key);
        }
        self.table
            .get_exact(resolution.key)
            .ok_or_else(|| ResolveError::key_not_found(key, &keys, Vec::new()))
    }

    /// The table key `key` resolves to, without fetching the value.
    ///
    /// # Errors
    /// Returns `ResolveError::KeyNotFound` when no variant of `key` is present.
    pub fn resolve_key(&self, key: &str) -> Result<String, ResolveError> {
        let keys = self.table.keys();
        self.resolver
            .resolve(key, &keys)
            .map(|resolution| resolution.key.to_string())
    }

    /// True when `key` or one of its variants is present.
    pub fn contains(&self, key: &str) -> bool {
        self.resolve_key(key).is_ok()
    }

    pub fn resolver(&self) -> &KeyResolver {
        &self.resolver
    }

    pub fn inner(&self) -> &T {
        &self.table
    }

    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.table
    }

    pub fn into_inner(self) -> T {
        self.table
    }
}

impl<T: KeyedTable> From<T> for FlexTable<T> {
    fn from(table: T) -> Self {
        FlexTable::new(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flexkey_data::Convention;

    fn frame() -> FlexTable<Vec<(String, Vec<i64>)>> {
        FlexTable::new(vec![
            ("Age Group".to_string(), vec![25, 30, 45]),
            ("Name".to_string(), vec![1, 2, 3]),
        ])
    }

    #[test]
    fn exact_and_variant_keys_reach_the_same_column() {
        let table = frame();
        for key in [
            "Age Group",
            "age group",
            "age-group",
            "age_group",
            "AGE_GROUP",
            "AgeGroup",
            "ageGroup",
            "AGE.GROUP",
        ] {
            assert_eq!(table.get(key).unwrap(), &vec![25, 30, 45], "key {key:?}");
        }
        assert_eq!(table.get("NAME").unwrap(), &vec![1, 2, 3]);
    }

    #[test]
    fn missing_key_error_enumerates_columns_and_variants() {
        let err = frame().get("height").unwrap_err();
        assert_eq!(err.available(), ["Age Group".to_string(), "Name".to_string()]);
        assert_eq!(err.tried().len(), 16);
        assert!(err.to_string().starts_with("key 'height' (or any recognized variant) not found"));
    }

    #[test]
    fn resolve_key_and_contains() {
        let table = frame();
        assert_eq!(table.resolve_key("age.group").unwrap(), "Age Group");
        assert!(table.contains("name"));
        assert!(!table.contains("weight"));
    }

    #[test]
    fn custom_resolver_limits_fallbacks() {
        let resolver = KeyResolver::with_conventions([Convention::SnakeCase]);
        let table = FlexTable::with_resolver(frame().into_inner(), resolver);
        assert!(table.get("AgeGroup").is_err());
        assert!(table.get("Age Group").is_ok());
    }

    #[test]
    fn works_over_std_maps() {
        let mut map = HashMap::new();
        map.insert("created_at".to_string(), "2024-01-01");
        let table = FlexTable::from(map);
        assert_eq!(*table.get("createdAt").unwrap(), "2024-01-01");

        let mut tree = BTreeMap::new();
        tree.insert("userId".to_string(), 7u32);
        let mut table = FlexTable::from(tree);
        assert_eq!(*table.get("user_id").unwrap(), 7);
        table.inner_mut().insert("user_name".to_string(), 8);
        assert_eq!(*table.get("UserName").unwrap(), 8);
    }
}
