//! Normalizer Module
//!
//! Splits an identifier-like string into the ordered words every naming
//! convention is rendered from. Only ASCII letters and digits survive; every
//! other character (underscores, hyphens, dots, whitespace, non-ASCII) is a
//! word separator. A lowercase letter or digit followed by an uppercase letter
//! also marks a word boundary, but runs of capitals are never split, so
//! `"PDFBox"` stays a single word.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SEPARATOR_RUN: Regex = Regex::new(r"[^a-zA-Z0-9]+").expect("invalid separator pattern");
    static ref CAMEL_BOUNDARY: Regex = Regex::new(r"([a-z0-9])([A-Z])").expect("invalid camel boundary pattern");
}

/// Ordered, non-empty ASCII alphanumeric words extracted from a raw string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WordSequence {
    words: Vec<String>,
}

impl WordSequence {
    /// The words, in input order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }

    /// The normalized string: words joined by single spaces, original casing kept.
    pub fn joined(&self) -> String {
        self.words.join(" ")
    }
}

impl fmt::Display for WordSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}

impl<'a> IntoIterator for &'a WordSequence {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Split `raw` into its `WordSequence`.
///
/// Empty or all-punctuation input yields an empty sequence.
pub fn normalize(raw: &str) -> WordSequence {
    // punctuation and whitespace runs become a single space
    let spaced = SEPARATOR_RUN.replace_all(raw, " ");
    // "ageGroup" -> "age Group"; the uppercase half of a match is never the
    // lowercase/digit half of the next one, so non-overlapping matches suffice
    let split = CAMEL_BOUNDARY.replace_all(&spaced, "$1 $2");
    let words = split.split_whitespace().map(str::to_string).collect();
    WordSequence { words }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words_of(raw: &str) -> Vec<String> {
        normalize(raw).words().to_vec()
    }

    #[test]
    fn separators_collapse_to_word_breaks() {
        assert_eq!(words_of("age-group"), vec!["age", "group"]);
        assert_eq!(words_of("AGE_GROUP"), vec!["AGE", "GROUP"]);
        assert_eq!(words_of("  user..id//v2 "), vec!["user", "id", "v2"]);
        assert_eq!(words_of("a\t\nb"), vec!["a", "b"]);
    }

    #[test]
    fn camel_boundaries_split_after_lowercase_or_digit() {
        assert_eq!(words_of("AgeGroup"), vec!["Age", "Group"]);
        assert_eq!(words_of("ageGroup"), vec!["age", "Group"]);
        assert_eq!(words_of("version2Beta"), vec!["version2", "Beta"]);
        assert_eq!(words_of("aBcD"), vec!["a", "Bc", "D"]);
    }

    #[test]
    fn capital_runs_are_never_split() {
        assert_eq!(words_of("PDFBox"), vec!["PDFBox"]);
        assert_eq!(words_of("HTTPServer"), vec!["HTTPServer"]);
        assert_eq!(words_of("parseHTTPResponse"), vec!["parse", "HTTPResponse"]);
    }

    #[test]
    fn empty_and_punctuation_only_inputs_yield_no_words() {
        assert!(normalize("").is_empty());
        assert!(normalize("___---...").is_empty());
        assert!(normalize("   ").is_empty());
        assert_eq!(normalize("").joined(), "");
    }

    #[test]
    fn non_ascii_characters_act_as_separators() {
        assert_eq!(words_of("naïve_name"), vec!["na", "ve", "name"]);
        assert_eq!(words_of("größe"), vec!["gr", "e"]);
    }

    #[test]
    fn words_recover_every_alphanumeric_character_in_order() {
        for raw in ["Age Group", "x-Ray_2go.Now", "PDFBox__v10", "??", "aB1cD2"] {
            let seq = normalize(raw);
            let expected: String = raw.chars().filter(char::is_ascii_alphanumeric).collect();
            let concatenated: String = seq.iter().map(String::as_str).collect();
            assert_eq!(concatenated, expected, "input {raw:?}");
            assert!(seq.iter().all(|w| !w.is_empty() && w.chars().all(|c| c.is_ascii_alphanumeric())));
        }
    }

    #[test]
    fn normalizing_the_joined_form_is_idempotent() {
        for raw in ["AgeGroup", "age-group", "x1Y2z3", "PDFBox", "", "a b  c"] {
            let once = normalize(raw);
            let twice = normalize(&once.joined());
            assert_eq!(once, twice, "input {raw:?}");
        }
    }

    #[test]
    fn display_matches_joined() {
        let seq = normalize("created_atUtc");
        assert_eq!(seq.to_string(), "created at Utc");
        assert_eq!(seq.len(), 3);
    }
}
