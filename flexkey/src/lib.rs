#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const FLEXKEY_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod cache;
pub mod catalog;
pub mod config;
pub mod normalize;
pub mod render;
pub mod resolve;
pub mod table;

// Re-exports for convenience
pub use catalog::CaseCatalog;
pub use flexkey_data::{Convention, ResolverDef};
pub use normalize::{WordSequence, normalize};
pub use render::{convert, render};
pub use resolve::{KeyResolver, MatchKind, Resolution, ResolveError, resolve};
pub use table::{FlexTable, KeyedTable};
