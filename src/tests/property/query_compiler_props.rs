//! Property-based tests for the Query Compiler
//!
//! Tests invariants:
//! - Compilation is deterministic
//! - Text full of metacharacters matches only itself
//! - Proximity distance is always within [1, 30]
//! - Complexity score never exceeds 100
//! - Whitespace-only text without rules is rejected

use proptest::prelude::*;

use crate::core::query::complexity::score_complexity;
use crate::core::query::{compile, MatchMode, ProximityRule, QueryError, SearchConfiguration};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

fn arb_match_mode() -> impl Strategy<Value = MatchMode> {
    prop_oneof![
        Just(MatchMode::Contains),
        Just(MatchMode::StartsWith),
        Just(MatchMode::EndsWith),
        Just(MatchMode::WholeWord),
        Just(MatchMode::WordStartsWith),
        Just(MatchMode::WordEndsWith),
    ]
}

/// Words with no pattern syntax
fn arb_word() -> impl Strategy<Value = String> {
    "[a-z]{1,12}"
}

/// Text containing at least one pattern metacharacter
fn arb_metachar_text() -> impl Strategy<Value = String> {
    r"[a-z]{0,6}[.*+?()\[\]{}|^$\\][a-z.*+?()\[\]{}|^$\\]{0,16}"
}

fn arb_config() -> impl Strategy<Value = SearchConfiguration> {
    (
        "[a-z ]{1,20}",
        arb_match_mode(),
        any::<bool>(),
        any::<bool>(),
        prop::collection::vec(arb_word(), 0..3),
        prop::collection::vec(arb_word(), 0..3),
    )
        .prop_map(|(text, mode, plurals, case_insensitive, must, must_not)| {
            let mut config = SearchConfiguration::text(text, mode)
                .must_contain(must)
                .must_not_contain(must_not);
            config.include_plurals = plurals;
            config.case_insensitive = case_insensitive;
            config
        })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_compilation_is_deterministic(config in arb_config()) {
        match (compile(&config, None), compile(&config, None)) {
            (Ok(first), Ok(second)) => {
                prop_assert_eq!(first.pattern.as_str(), second.pattern.as_str());
                prop_assert_eq!(&first.description, &second.description);
                prop_assert_eq!(first.complexity_score, second.complexity_score);
                prop_assert_eq!(first.volume_estimate, second.volume_estimate);
                prop_assert_eq!(first, second);
            }
            (Err(QueryError::EmptyQuery), Err(QueryError::EmptyQuery)) => {}
            (first, second) => prop_assert!(false, "diverged: {:?} vs {:?}", first, second),
        }
    }

    #[test]
    fn prop_metacharacters_match_literally(text in arb_metachar_text()) {
        let config = SearchConfiguration::text(text.clone(), MatchMode::Contains).case_sensitive();
        let query = compile(&config, None).unwrap();

        let haystack = format!("before {} after", text);
        prop_assert!(query.pattern.is_match(&haystack));
        prop_assert!(!query.pattern.is_match("plain words only"));
    }

    #[test]
    fn prop_distance_always_clamped(distance in any::<i64>()) {
        let rule = ProximityRule {
            word1: "fear".to_string(),
            word2: "not".to_string(),
            max_distance: distance,
        };
        prop_assert!((1..=30).contains(&rule.distance()));

        let query = compile(&SearchConfiguration::proximity(vec![rule.clone()]), None).unwrap();
        let bound = format!("{{0,{}}}", rule.distance());
        prop_assert!(query.pattern.as_str().contains(&bound));
    }

    #[test]
    fn prop_complexity_bounded(pattern in ".{0,400}") {
        prop_assert!(score_complexity(&pattern) <= 100);
    }

    #[test]
    fn prop_blank_text_rejected(text in "[ \t\n]{0,8}", mode in arb_match_mode()) {
        let result = compile(&SearchConfiguration::text(text, mode), None);
        prop_assert!(matches!(result, Err(QueryError::EmptyQuery)));
    }
}
