use std::collections::HashSet;
use std::fmt;

use crate::*;

/// Validation error for a malformed `ResolverDef`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateConvention { convention: Convention },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateConvention { convention } => {
                write!(f, "duplicate convention '{convention}'")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate basic invariants of a `ResolverDef`.
///
/// ```
/// use flexkey_data::{CacheDef, Convention, ResolverDef, validate_resolver};
///
/// assert!(validate_resolver(&ResolverDef::default()).is_empty());
///
/// let def = ResolverDef {
///     conventions: vec![Convention::SnakeCase, Convention::SnakeCase],
///     skip_aliases: false,
///     cache: CacheDef { enabled: true, capacity: 0 },
/// };
/// assert_eq!(validate_resolver(&def).len(), 2);
/// ```
pub fn validate_resolver(def: &ResolverDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut seen = HashSet::new();
    for conv in &def.conventions {
        if !seen.insert(*conv) {
            errors.push(ValidationError::DuplicateConvention { convention: *conv });
        }
    }

    if def.conventions.is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "convention list is empty".to_string(),
        });
    } else if def.effective_conventions().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "convention list holds only aliases but skip_aliases is set".to_string(),
        });
    }

    if def.cache.enabled && def.cache.capacity == 0 {
        errors.push(ValidationError::InvalidValue {
            context: "cache enabled with zero capacity".to_string(),
        });
    }

    errors
}
