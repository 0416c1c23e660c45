//! Case Catalog Module
//!
//! A `CaseCatalog` holds the rendering of one raw string under every
//! `Convention`. All sixteen entries are computed eagerly from a single
//! normalization, and the catalog never changes after it is built.

use flexkey_data::Convention;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::normalize::{WordSequence, normalize};
use crate::render::render;

/// Every convention's rendering of a single raw string, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseCatalog {
    words: WordSequence,
    // indexed by `Convention as usize`, which follows `Convention::ALL`
    entries: Vec<(Convention, String)>,
}

impl CaseCatalog {
    /// Normalize `raw` once and render it under every convention.
    pub fn build(raw: &str) -> CaseCatalog {
        CaseCatalog::from_words(normalize(raw))
    }

    /// Build a catalog from an already normalized word sequence.
    pub fn from_words(words: WordSequence) -> CaseCatalog {
        let entries = Convention::ALL
            .into_iter()
            .map(|conv| (conv, render(&words, conv)))
            .collect();
        CaseCatalog { words, entries }
    }

    /// The word sequence the catalog was rendered from.
    pub fn words(&self) -> &WordSequence {
        &self.words
    }

    /// The rendering for `convention`. Every convention is always present.
    pub fn get(&self, convention: Convention) -> &str {
        &self.entries[convention as usize].1
    }

    /// Iterate `(convention, rendering)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Convention, &str)> + '_ {
        self.entries.iter().map(|(conv, text)| (*conv, text.as_str()))
    }

    /// All renderings in declaration order, duplicates included.
    pub fn variants(&self) -> Vec<&str> {
        self.entries.iter().map(|(_, text)| text.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Serializes as a map of convention name to rendering, in declaration order.
impl Serialize for CaseCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (conv, text) in &self.entries {
            map.serialize_entry(conv.name(), text)?;
        }
        map.end()
    }
}
