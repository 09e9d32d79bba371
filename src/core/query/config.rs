//! Search Configuration
//!
//! The immutable input to the query compiler. Field names serialize in
//! camelCase so presets and UI state keep their familiar shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Smallest number of intervening words a proximity rule may allow.
pub const MIN_PROXIMITY_DISTANCE: i64 = 1;
/// Largest number of intervening words a proximity rule may allow.
pub const MAX_PROXIMITY_DISTANCE: i64 = 30;
/// Synonym cap used when a configuration does not set one.
pub const DEFAULT_MAX_SYNONYMS_PER_WORD: usize = 10;

/// Where within a word or text unit the search term must appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchMode {
    #[default]
    Contains,
    StartsWith,
    EndsWith,
    WholeWord,
    WordStartsWith,
    WordEndsWith,
}

impl MatchMode {
    /// Human-readable label used in query descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            MatchMode::Contains => "Contains",
            MatchMode::StartsWith => "Starts with",
            MatchMode::EndsWith => "Ends with",
            MatchMode::WholeWord => "Whole word",
            MatchMode::WordStartsWith => "Word starts with",
            MatchMode::WordEndsWith => "Word ends with",
        }
    }
}

/// Two terms that must appear in order within a bounded number of words.
///
/// The rule is directional: `word1` must precede `word2`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProximityRule {
    pub word1: String,
    pub word2: String,
    /// Maximum intervening words. Out-of-range values are clamped, never rejected.
    pub max_distance: i64,
}

impl ProximityRule {
    pub fn new(word1: impl Into<String>, word2: impl Into<String>, max_distance: i64) -> Self {
        Self {
            word1: word1.into(),
            word2: word2.into(),
            max_distance: clamp_distance(max_distance),
        }
    }

    /// The intervening-word bound, always within `[1, 30]`.
    pub fn distance(&self) -> u32 {
        clamp_distance(self.max_distance) as u32
    }

    /// Whether both operands carry non-blank text.
    pub fn is_usable(&self) -> bool {
        !self.word1.trim().is_empty() && !self.word2.trim().is_empty()
    }
}

/// Clamp a proximity distance into `[MIN_PROXIMITY_DISTANCE, MAX_PROXIMITY_DISTANCE]`.
pub fn clamp_distance(distance: i64) -> i64 {
    distance.clamp(MIN_PROXIMITY_DISTANCE, MAX_PROXIMITY_DISTANCE)
}

/// Testament filter applied by the executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Testament {
    Old,
    New,
}

/// Scope filters forwarded untouched to the search executor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchScope {
    pub translations: Vec<String>,
    pub testament: Option<Testament>,
    pub books: Vec<String>,
    /// Morphology filters (`pos`, `tense`, `number`, ...) for the executor.
    pub morphology: BTreeMap<String, String>,
}

/// A complete, user-facing search request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchConfiguration {
    /// Primary search text; may be blank only when proximity rules are present.
    pub text: String,
    pub match_mode: MatchMode,
    pub case_insensitive: bool,
    /// Informational only; `match_mode` decides the generated pattern.
    pub exact_phrase: bool,
    pub include_plurals: bool,
    pub include_synonyms: bool,
    /// Per-word synonym cap. `None` falls back to the compiler default.
    pub max_synonyms_per_word: Option<usize>,
    pub must_contain: Vec<String>,
    pub must_not_contain: Vec<String>,
    pub proximity_rules: Vec<ProximityRule>,
    #[serde(flatten)]
    pub scope: SearchScope,
}

impl Default for SearchConfiguration {
    fn default() -> Self {
        Self {
            text: String::new(),
            match_mode: MatchMode::default(),
            case_insensitive: true,
            exact_phrase: false,
            include_plurals: false,
            include_synonyms: false,
            max_synonyms_per_word: None,
            must_contain: Vec::new(),
            must_not_contain: Vec::new(),
            proximity_rules: Vec::new(),
            scope: SearchScope::default(),
        }
    }
}

impl SearchConfiguration {
    /// Plain text search with the given match mode.
    pub fn text(text: impl Into<String>, match_mode: MatchMode) -> Self {
        Self {
            text: text.into(),
            match_mode,
            ..Default::default()
        }
    }

    /// Proximity-only search built from the given rules.
    pub fn proximity(rules: Vec<ProximityRule>) -> Self {
        Self {
            proximity_rules: rules,
            ..Default::default()
        }
    }

    pub fn with_plurals(mut self) -> Self {
        self.include_plurals = true;
        self
    }

    pub fn with_synonyms(mut self, max_per_word: usize) -> Self {
        self.include_synonyms = true;
        self.max_synonyms_per_word = Some(max_per_word);
        self
    }

    pub fn case_sensitive(mut self) -> Self {
        self.case_insensitive = false;
        self
    }

    pub fn must_contain<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.must_contain.extend(terms.into_iter().map(Into::into));
        self
    }

    pub fn must_not_contain<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.must_not_contain.extend(terms.into_iter().map(Into::into));
        self
    }

    pub fn with_scope(mut self, scope: SearchScope) -> Self {
        self.scope = scope;
        self
    }

    /// Usable proximity rules with their distances clamped.
    pub fn usable_proximity_rules(&self) -> Vec<ProximityRule> {
        self.proximity_rules
            .iter()
            .filter(|rule| rule.is_usable())
            .map(|rule| {
                ProximityRule::new(rule.word1.trim(), rule.word2.trim(), rule.max_distance)
            })
            .collect()
    }

    /// Whether this configuration can produce a query at all.
    pub fn has_search_input(&self) -> bool {
        !self.text.trim().is_empty() || self.proximity_rules.iter().any(ProximityRule::is_usable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_clamped() {
        assert_eq!(ProximityRule::new("a", "b", 0).distance(), 1);
        assert_eq!(ProximityRule::new("a", "b", -7).distance(), 1);
        assert_eq!(ProximityRule::new("a", "b", 12).distance(), 12);
        assert_eq!(ProximityRule::new("a", "b", 500).distance(), 30);
    }

    #[test]
    fn test_deserialized_distance_is_clamped_on_read() {
        let rule: ProximityRule =
            serde_json::from_str(r#"{"word1":"fear","word2":"not","maxDistance":99}"#).unwrap();
        assert_eq!(rule.max_distance, 99);
        assert_eq!(rule.distance(), 30);
    }

    #[test]
    fn test_camel_case_round_trip() {
        let json = r#"{
            "text": "grace",
            "matchMode": "wholeWord",
            "includePlurals": true,
            "mustContain": ["saved"],
            "mustNotContain": ["works"],
            "translations": ["KJV"],
            "testament": "new"
        }"#;
        let config: SearchConfiguration = serde_json::from_str(json).unwrap();
        assert_eq!(config.match_mode, MatchMode::WholeWord);
        assert!(config.include_plurals);
        assert!(config.case_insensitive);
        assert_eq!(config.must_contain, vec!["saved"]);
        assert_eq!(config.scope.translations, vec!["KJV"]);
        assert_eq!(config.scope.testament, Some(Testament::New));
    }

    #[test]
    fn test_search_input_detection() {
        assert!(!SearchConfiguration::default().has_search_input());
        assert!(!SearchConfiguration::text("   ", MatchMode::Contains).has_search_input());
        assert!(SearchConfiguration::text("love", MatchMode::Contains).has_search_input());

        let blank_rule = SearchConfiguration::proximity(vec![ProximityRule::new("", "not", 3)]);
        assert!(!blank_rule.has_search_input());
        assert!(blank_rule.usable_proximity_rules().is_empty());
    }

    #[test]
    fn test_usable_rules_are_trimmed() {
        let config = SearchConfiguration::proximity(vec![ProximityRule {
            word1: " fear ".to_string(),
            word2: "not".to_string(),
            max_distance: 45,
        }]);
        let rules = config.usable_proximity_rules();
        assert_eq!(rules[0].word1, "fear");
        assert_eq!(rules[0].max_distance, 30);
    }
}
