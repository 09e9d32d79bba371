//! Synonym Expansion
//!
//! The compiler never performs lookups itself. Callers resolve synonym
//! sets through a [`SynonymExpander`] (one awaited call per word) and
//! hand the resulting [`ExpandedSynonyms`] to the compiler.

use std::collections::BTreeMap;
use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::config::SearchConfiguration;
use super::error::{QueryError, QueryResult};

/// Lexical data service supplying synonyms for a single word.
#[async_trait]
pub trait SynonymExpander: Send + Sync {
    /// Return at most `limit` synonyms for `word`, excluding the word itself.
    async fn expand_synonyms(&self, word: &str, limit: usize) -> QueryResult<Vec<String>>;
}

/// Synonyms resolved for one word of the search text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymSet {
    pub word: String,
    pub synonyms: Vec<String>,
}

/// Per-word synonym sets, in the order the words appear in the text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandedSynonyms {
    sets: Vec<SynonymSet>,
}

impl ExpandedSynonyms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the synonyms resolved for `word`.
    pub fn insert(&mut self, word: impl Into<String>, synonyms: Vec<String>) {
        self.sets.push(SynonymSet {
            word: word.into(),
            synonyms,
        });
    }

    pub fn sets(&self) -> &[SynonymSet] {
        &self.sets
    }

    pub fn is_empty(&self) -> bool {
        self.sets.iter().all(|set| set.synonyms.is_empty())
    }

    /// Flatten into one alternation list.
    ///
    /// Each word contributes at most `limit_per_word` entries. Blank
    /// entries, duplicates and entries equal to `text` are dropped;
    /// first-seen order is kept.
    pub fn flatten(&self, limit_per_word: usize, text: &str) -> Vec<String> {
        let mut flattened: Vec<String> = Vec::new();

        for set in &self.sets {
            for synonym in set.synonyms.iter().take(limit_per_word) {
                let synonym = synonym.trim();
                if synonym.is_empty() || synonym == text {
                    continue;
                }
                if !flattened.iter().any(|existing| existing == synonym) {
                    flattened.push(synonym.to_string());
                }
            }
        }

        flattened
    }
}

impl FromIterator<(String, Vec<String>)> for ExpandedSynonyms {
    fn from_iter<T: IntoIterator<Item = (String, Vec<String>)>>(iter: T) -> Self {
        let mut expanded = Self::new();
        for (word, synonyms) in iter {
            expanded.insert(word, synonyms);
        }
        expanded
    }
}

/// Resolve synonyms for every word of `config.text`, sequentially.
///
/// Returns an empty set when the configuration does not ask for
/// synonyms. Results longer than `limit` are truncated.
pub async fn resolve_synonyms(
    expander: &dyn SynonymExpander,
    config: &SearchConfiguration,
    limit: usize,
) -> QueryResult<ExpandedSynonyms> {
    let mut expanded = ExpandedSynonyms::new();
    if !config.include_synonyms || limit == 0 {
        return Ok(expanded);
    }

    for word in config.text.split_whitespace() {
        let mut synonyms = expander.expand_synonyms(word, limit).await?;
        if synonyms.len() > limit {
            warn!(
                word,
                returned = synonyms.len(),
                limit,
                "Synonym service exceeded limit, truncating"
            );
            synonyms.truncate(limit);
        }
        debug!(word, count = synonyms.len(), "Resolved synonyms");
        expanded.insert(word, synonyms);
    }

    Ok(expanded)
}

/// In-memory synonym dictionary supporting multi-way and one-way groups.
///
/// # Multi-way synonyms
/// All terms in a group are interchangeable:
/// - "love" ↔ "charity"
///
/// # One-way synonyms
/// Source expands to targets but not reverse:
/// - "lord" → ["god", "master"] (but "master" doesn't expand to "lord")
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SynonymMap {
    multi_way: Vec<Vec<String>>,
    one_way: BTreeMap<String, Vec<String>>,
}

impl SynonymMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a TOML file.
    pub fn from_toml_file(path: &Path) -> QueryResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load from a TOML string.
    ///
    /// Expected format:
    /// ```toml
    /// [multi_way]
    /// love = ["charity", "affection"]
    ///
    /// [one_way]
    /// lord = ["god", "master"]
    /// ```
    pub fn from_toml_str(content: &str) -> QueryResult<Self> {
        #[derive(Deserialize)]
        struct TomlSynonyms {
            #[serde(default)]
            multi_way: BTreeMap<String, Vec<String>>,
            #[serde(default)]
            one_way: BTreeMap<String, Vec<String>>,
        }

        let parsed: TomlSynonyms =
            toml::from_str(content).map_err(|e| QueryError::SynonymParse(e.to_string()))?;

        let mut map = SynonymMap::new();
        for (key, values) in parsed.multi_way {
            let mut group = vec![key.as_str()];
            group.extend(values.iter().map(String::as_str));
            map.add_multi_way(&group);
        }
        for (source, targets) in parsed.one_way {
            let targets: Vec<&str> = targets.iter().map(String::as_str).collect();
            map.add_one_way(&source, &targets);
        }

        Ok(map)
    }

    /// Add a group of interchangeable terms.
    pub fn add_multi_way(&mut self, terms: &[&str]) {
        let mut group: Vec<String> = Vec::new();
        for term in terms {
            let lower = term.trim().to_lowercase();
            if !lower.is_empty() && !group.contains(&lower) {
                group.push(lower);
            }
        }
        if group.len() > 1 {
            self.multi_way.push(group);
        }
    }

    /// Add a one-way mapping from `source` to `targets`.
    pub fn add_one_way(&mut self, source: &str, targets: &[&str]) {
        let entry = self.one_way.entry(source.trim().to_lowercase()).or_default();
        for target in targets {
            let lower = target.trim().to_lowercase();
            if !lower.is_empty() && !entry.contains(&lower) {
                entry.push(lower);
            }
        }
    }

    /// Synonyms of `term` (never including the term itself), at most `limit`.
    pub fn synonyms_of(&self, term: &str, limit: usize) -> Vec<String> {
        let term_lower = term.trim().to_lowercase();
        let mut synonyms: Vec<String> = Vec::new();

        let grouped = self
            .multi_way
            .iter()
            .filter(|group| group.contains(&term_lower))
            .flatten();
        let directed = self.one_way.get(&term_lower).into_iter().flatten();

        for candidate in grouped.chain(directed) {
            if synonyms.len() >= limit {
                break;
            }
            if *candidate != term_lower && !synonyms.contains(candidate) {
                synonyms.push(candidate.clone());
            }
        }

        synonyms
    }

    pub fn group_count(&self) -> usize {
        self.multi_way.len() + self.one_way.len()
    }
}

#[async_trait]
impl SynonymExpander for SynonymMap {
    async fn expand_synonyms(&self, word: &str, limit: usize) -> QueryResult<Vec<String>> {
        Ok(self.synonyms_of(word, limit))
    }
}
