//! Scripture Search - Search Query Compiler
//!
//! Compiles structured search configurations (match mode, plurals,
//! synonyms, proximity and inclusion/exclusion terms) into a single
//! executable pattern with a complexity score and volume estimate.

pub mod config;
pub mod core;

#[cfg(test)]
mod tests;

pub use crate::core::query::{
    compile, GeneratedQuery, MatchMode, ProximityRule, QueryCompiler, QueryError, QueryResult,
    SearchConfiguration, VolumeEstimate,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
