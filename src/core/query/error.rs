//! Query Compiler Error Types

use thiserror::Error;

/// Errors that can occur while compiling a search configuration.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Search text is empty and no proximity rule was given")]
    EmptyQuery,

    #[error("Pattern compilation failed for `{pattern}`: {message}")]
    PatternCompilation { pattern: String, message: String },

    #[error("Synonym lookup failed: {0}")]
    SynonymLookup(String),

    #[error("Synonym config parse failed: {0}")]
    SynonymParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias for query compilation
pub type QueryResult<T> = Result<T, QueryError>;
