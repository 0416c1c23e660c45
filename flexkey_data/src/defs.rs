use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default number of catalogs a resolver cache holds before it is flushed.
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

/// A named, deterministic rendering style for a word sequence.
///
/// Variant order is the declaration order used as the tie-break when
/// resolving keys, so it must not be rearranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    /// `age group`
    LowerCase,
    /// `AGE GROUP`
    UpperCase,
    /// `ageGroup`
    CamelCase,
    /// `AgeGroup`
    PascalCase,
    /// `age_group`
    SnakeCase,
    /// `age-group`
    KebabCase,
    /// `AGE_GROUP`
    ConstantCase,
    /// `age.group`
    DotCase,
    /// `age/group`
    PathCase,
    /// `Age group`
    SentenceCase,
    /// `Age Group`
    TitleCase,
    /// `Age-Group`
    HeaderCase,
    /// `aGe GrOuP`
    MockingCase,
    /// Alias of [`Convention::PascalCase`].
    CapitalCase,
    /// Alias of [`Convention::KebabCase`].
    ParamCase,
    /// Alias of [`Convention::LowerCase`].
    NoCase,
}

impl Convention {
    /// Every convention, in declaration order.
    pub const ALL: [Convention; 16] = [
        Convention::LowerCase,
        Convention::UpperCase,
        Convention::CamelCase,
        Convention::PascalCase,
        Convention::SnakeCase,
        Convention::KebabCase,
        Convention::ConstantCase,
        Convention::DotCase,
        Convention::PathCase,
        Convention::SentenceCase,
        Convention::TitleCase,
        Convention::HeaderCase,
        Convention::MockingCase,
        Convention::CapitalCase,
        Convention::ParamCase,
        Convention::NoCase,
    ];

    /// Canonical lowercase name, e.g. `"snakecase"`.
    pub fn name(self) -> &'static str {
        match self {
            Convention::LowerCase => "lowercase",
            Convention::UpperCase => "uppercase",
            Convention::CamelCase => "camelcase",
            Convention::PascalCase => "pascalcase",
            Convention::SnakeCase => "snakecase",
            Convention::KebabCase => "kebabcase",
            Convention::ConstantCase => "constantcase",
            Convention::DotCase => "dotcase",
            Convention::PathCase => "pathcase",
            Convention::SentenceCase => "sentencecase",
            Convention::TitleCase => "titlecase",
            Convention::HeaderCase => "headercase",
            Convention::MockingCase => "mockingcase",
            Convention::CapitalCase => "capitalcase",
            Convention::ParamCase => "paramcase",
            Convention::NoCase => "nocase",
        }
    }

    /// True for the conventions that always render identically to another one.
    pub fn is_alias(self) -> bool {
        self.canonical() != self
    }

    /// The convention an alias duplicates; non-aliases map to themselves.
    pub fn canonical(self) -> Convention {
        match self {
            Convention::CapitalCase => Convention::PascalCase,
            Convention::ParamCase => Convention::KebabCase,
            Convention::NoCase => Convention::LowerCase,
            other => other,
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownConvention(pub String);

impl fmt::Display for UnknownConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown naming convention '{}'", self.0)
    }
}

impl std::error::Error for UnknownConvention {}

impl FromStr for Convention {
    type Err = UnknownConvention;

    /// Accepts canonical names in any case, ignoring `-`, `_` and spaces
    /// (so `"snake_case"` and `"Kebab-Case"` both parse).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squashed: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Convention::ALL
            .into_iter()
            .find(|conv| conv.name() == squashed)
            .ok_or_else(|| UnknownConvention(s.to_string()))
    }
}

/// Resolver configuration, usually read from a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverDef {
    /// Conventions tried during resolution, in tie-break order.
    pub conventions: Vec<Convention>,
    /// Drop alias conventions from the try-list.
    pub skip_aliases: bool,
    pub cache: CacheDef,
}

impl Default for ResolverDef {
    fn default() -> Self {
        Self {
            conventions: Convention::ALL.to_vec(),
            skip_aliases: false,
            cache: CacheDef::default(),
        }
    }
}

impl ResolverDef {
    /// The conventions a resolver built from this definition will try, in order.
    pub fn effective_conventions(&self) -> Vec<Convention> {
        self.conventions
            .iter()
            .copied()
            .filter(|conv| !(self.skip_aliases && conv.is_alias()))
            .collect()
    }
}

/// Catalog memoization settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheDef {
    pub enabled: bool,
    pub capacity: usize,
}

impl Default for CacheDef {
    fn default() -> Self {
        Self {
            enabled: false,
            capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}
