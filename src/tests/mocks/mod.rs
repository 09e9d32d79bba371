//! Mock implementations for testing
//!
//! Mocks for the lexical data service boundary, built with mockall.

use async_trait::async_trait;
use mockall::mock;

use crate::core::query::{QueryResult, SynonymExpander};

mock! {
    pub Expander {}

    #[async_trait]
    impl SynonymExpander for Expander {
        async fn expand_synonyms(&self, word: &str, limit: usize) -> QueryResult<Vec<String>>;
    }
}
