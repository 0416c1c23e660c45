//! Resolver configuration loader.
//!
//! A `ResolverDef` chooses which conventions participate in resolution (and in
//! what order) and whether catalogs are memoized. It is read from TOML:
//!
//! ```toml
//! conventions = ["snakecase", "camelcase", "kebabcase"]
//! skip_aliases = false
//!
//! [cache]
//! enabled = true
//! capacity = 256
//! ```
//!
//! Every field is optional; an empty file gives the default definition.

use anyhow::{Context, Result, bail};
use flexkey_data::{ResolverDef, validate_resolver};
use log::{info, warn};
use std::fs;
use std::path::Path;

use crate::resolve::KeyResolver;

/// Loads a resolver definition from a TOML file, falling back to defaults on error.
///
/// # Logging
/// - `info!` on successful load
/// - `warn!` when falling back to the default definition
pub fn load_resolver_def(toml_path: &Path) -> ResolverDef {
    match try_load_resolver_def(toml_path) {
        Ok(def) => {
            info!(
                "resolver config loaded from '{}' ({} conventions, cache {})",
                toml_path.display(),
                def.effective_conventions().len(),
                if def.cache.enabled { "on" } else { "off" }
            );
            def
        },
        Err(e) => {
            warn!(
                "Could not load resolver config from '{}': {:#}. Using defaults.",
                toml_path.display(),
                e
            );
            ResolverDef::default()
        },
    }
}

/// Attempts to load a resolver definition from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read, parsed, or fails validation.
pub fn try_load_resolver_def(toml_path: &Path) -> Result<ResolverDef> {
    let text = fs::read_to_string(toml_path)
        .with_context(|| format!("reading resolver config from '{}'", toml_path.display()))?;
    parse_resolver_def(&text).with_context(|| format!("loading resolver config from '{}'", toml_path.display()))
}

/// Parse and validate a resolver definition from TOML text.
///
/// # Errors
/// Returns an error on malformed TOML, unknown convention names, or any
/// validation failure (all failures are listed in one message).
pub fn parse_resolver_def(text: &str) -> Result<ResolverDef> {
    let def: ResolverDef = toml::from_str(text).context("parsing resolver config TOML")?;
    let errors = validate_resolver(&def);
    if errors.is_empty() {
        return Ok(def);
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("resolver config validation failed:\n{details}");
}

/// Build a `KeyResolver` from the TOML file at `toml_path`, or the default resolver.
pub fn load_resolver(toml_path: &Path) -> KeyResolver {
    KeyResolver::from_def(&load_resolver_def(toml_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flexkey_data::Convention;
    use std::io::Write;

    #[test]
    fn parse_empty_text_gives_defaults() {
        assert_eq!(parse_resolver_def("").unwrap(), ResolverDef::default());
    }

    #[test]
    fn parse_accepts_custom_order() {
        let def = parse_resolver_def(r#"conventions = ["kebabcase", "snakecase"]"#).unwrap();
        assert_eq!(def.conventions, vec![Convention::KebabCase, Convention::SnakeCase]);
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = parse_resolver_def(r#"conventions = ["snake_case"]"#).unwrap_err();
        assert!(format!("{err:#}").contains("parsing resolver config TOML"));
    }

    #[test]
    fn parse_aggregates_validation_errors() {
        let err = parse_resolver_def(
            r#"
            conventions = ["dotcase", "dotcase"]
            [cache]
            enabled = true
            capacity = 0
            "#,
        )
        .unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("resolver config validation failed:"));
        assert!(message.contains("- duplicate convention 'dotcase'"));
        assert!(message.contains("- invalid value (cache enabled with zero capacity)"));
    }

    #[test]
    fn load_reads_file_and_builds_resolver() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "conventions = [\"pathcase\"]\n[cache]\nenabled = true\ncapacity = 4").unwrap();

        let def = try_load_resolver_def(file.path()).unwrap();
        assert_eq!(def.conventions, vec![Convention::PathCase]);

        let resolver = load_resolver(file.path());
        assert_eq!(resolver.conventions(), [Convention::PathCase]);
        assert!(resolver.cache().is_some());
        assert_eq!(resolver.resolve("Age Group", &["age/group"]).unwrap().key, "age/group");
    }

    #[test]
    fn load_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("flexkey.toml");
        assert!(try_load_resolver_def(&missing).is_err());
        assert_eq!(load_resolver_def(&missing), ResolverDef::default());

        let bad = dir.path().join("bad.toml");
        fs::write(&bad, "conventions = 3").unwrap();
        assert_eq!(load_resolver_def(&bad), ResolverDef::default());
    }
}
