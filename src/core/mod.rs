pub mod logging;

// Search query compiler: match modes, synonyms, proximity and constraint terms
pub mod query;
