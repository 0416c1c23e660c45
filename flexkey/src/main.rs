#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** flexkey **
//! Print the naming-convention catalog of keys, or resolve keys against a key list.

use flexkey::config::try_load_resolver_def;
use flexkey::{CaseCatalog, KeyResolver, MatchKind};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use serde::Serialize;

use log::info;

use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "usage: flexkey [--config FILE] [--json] [--keys k1,k2,...] KEY...";

/// Parsed command line.
#[derive(Debug, Default, PartialEq)]
struct Args {
    config: Option<PathBuf>,
    json: bool,
    keys: Option<Vec<String>>,
    requested: Vec<String>,
    help: bool,
}

/// One key's catalog, as printed with `--json`.
#[derive(Serialize)]
struct CatalogReport<'a> {
    key: &'a str,
    words: &'a [String],
    catalog: &'a CaseCatalog,
}

fn parse_args(raw: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut args = Args::default();
    let mut raw = raw.into_iter();
    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "-h" | "--help" => args.help = true,
            "--json" => args.json = true,
            "--config" => {
                let path = raw.next().context("--config needs a file path")?;
                args.config = Some(PathBuf::from(path));
            },
            "--keys" => {
                let list = raw.next().context("--keys needs a comma-separated list")?;
                args.keys = Some(list.split(',').map(str::to_string).collect());
            },
            flag if flag.starts_with("--") => bail!("unknown option '{flag}'\n{USAGE}"),
            _ => args.requested.push(arg),
        }
    }
    Ok(args)
}

fn print_catalogs(resolver: &KeyResolver, args: &Args) -> Result<ExitCode> {
    let catalogs: Vec<_> = args.requested.iter().map(|key| (key, resolver.catalog(key))).collect();

    if args.json {
        let reports: Vec<_> = catalogs
            .iter()
            .map(|(key, catalog)| CatalogReport {
                key: key.as_str(),
                words: catalog.words().words(),
                catalog: &**catalog,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(ExitCode::SUCCESS);
    }

    for (key, catalog) in &catalogs {
        println!("{} (words: {})", key.bold(), catalog.words().words().join(", "));
        for (conv, text) in catalog.iter() {
            println!("  {:<14}{}", conv.name().bright_blue(), text);
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Resolve each requested key, printing the outcome. Returns the number of failures.
fn resolve_all(resolver: &KeyResolver, keys: &[String], requested: &[String]) -> usize {
    let mut failures = 0usize;
    for key in requested {
        match resolver.resolve(key, keys) {
            Ok(found) => {
                let how = match found.matched {
                    MatchKind::Exact => "exact".to_string(),
                    MatchKind::Converted(conv) => format!("via {conv}"),
                };
                println!("{key} -> {} ({how})", found.key.bright_green());
            },
            Err(err) => {
                failures += 1;
                println!("{}", err.to_string().red());
            },
        }
    }
    info!("{} of {} keys resolved", requested.len() - failures, requested.len());
    failures
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let args = parse_args(std::env::args().skip(1))?;
    if args.help || args.requested.is_empty() {
        println!("{USAGE}");
        return Ok(if args.help { ExitCode::SUCCESS } else { ExitCode::FAILURE });
    }

    let resolver = match &args.config {
        Some(path) => KeyResolver::from_def(&try_load_resolver_def(path).context("while loading --config")?),
        None => KeyResolver::default(),
    };

    match &args.keys {
        Some(keys) => {
            let failures = resolve_all(&resolver, keys, &args.requested);
            Ok(if failures == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        },
        None => print_catalogs(&resolver, &args),
    }
}
