//! Search Query Compiler
//!
//! Turns a structured [`SearchConfiguration`] into a single executable
//! pattern plus a risk assessment.
//!
//! ## Architecture
//!
//! ```text
//! SearchConfiguration (+ ExpandedSynonyms, resolved by the caller)
//!        │
//!        ▼
//! ┌──────────────────────────────┐
//! │  1. Constraint lookaheads    │  (?=.*\bsaved\b)(?!.*\bworks\b)
//! └──────────────┬───────────────┘
//!                ▼
//! ┌──────────────────────────────┐
//! │  2. Proximity union          │  \bfear\b[^0-9A-Za-z_]+(?:…){0,3}\bnot\b
//! │     or main match pattern    │  \b(?:love|charity)s?\b
//! └──────────────┬───────────────┘
//!                ▼
//! ┌──────────────────────────────┐
//! │  3. Complexity + volume      │  score 0-100, safe..extreme
//! └──────────────┬───────────────┘
//!                ▼
//!          GeneratedQuery
//! ```
//!
//! Every piece of user text enters a pattern through
//! [`PatternFragment::literal`], which escapes it.

pub mod complexity;
pub mod compiler;
pub mod config;
pub mod constraints;
pub mod error;
pub mod fragment;
pub mod matching;
pub mod presets;
pub mod proximity;
pub mod synonyms;
pub mod volume;

// Re-export primary types
pub use compiler::{
    compile, CompiledMatcher, GeneratedQuery, PatternFlags, QueryCompiler, QueryPattern,
    BROAD_QUERY_WARNING, EXTREME_VOLUME_WARNING,
};
pub use config::{MatchMode, ProximityRule, SearchConfiguration, SearchScope, Testament};
pub use error::{QueryError, QueryResult};
pub use fragment::{escape_text, PatternFragment};
pub use presets::SearchPreset;
pub use synonyms::{resolve_synonyms, ExpandedSynonyms, SynonymExpander, SynonymMap, SynonymSet};
pub use volume::VolumeEstimate;
