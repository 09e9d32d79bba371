//! Match Pattern Builder
//!
//! Builds the core word-match fragment for a match mode, with optional
//! plural suffix and synonym alternation.

use super::config::MatchMode;
use super::fragment::PatternFragment;

/// Build the main match fragment.
///
/// `text` and every synonym are escaped, unioned into one non-capturing
/// group when synonyms are present, suffixed with `s?` when plurals are
/// requested, and finally wrapped for `mode`.
pub fn build_match_pattern(
    text: &str,
    mode: MatchMode,
    include_plurals: bool,
    synonyms: &[String],
) -> PatternFragment {
    let mut alternatives = vec![PatternFragment::literal(text)];
    alternatives.extend(synonyms.iter().map(|s| PatternFragment::literal(s)));

    let mut fragment = PatternFragment::alternation(alternatives);
    if include_plurals {
        fragment = fragment.then(&PatternFragment::syntax("s?"));
    }

    apply_mode(fragment, mode)
}

fn apply_mode(fragment: PatternFragment, mode: MatchMode) -> PatternFragment {
    match mode {
        MatchMode::Contains => fragment,
        MatchMode::StartsWith => fragment.wrap("^", ""),
        MatchMode::EndsWith => fragment.wrap("", "$"),
        MatchMode::WholeWord => fragment.wrap(r"\b", r"\b"),
        MatchMode::WordStartsWith => fragment.wrap(r"\b", r"\w*"),
        MatchMode::WordEndsWith => fragment.wrap(r"\w*", r"\b"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use rstest::rstest;

    fn matches(pattern: &PatternFragment, haystack: &str) -> bool {
        Regex::new(pattern.as_str()).unwrap().is_match(haystack)
    }

    #[rstest]
    #[case(MatchMode::Contains, "light", "light")]
    #[case(MatchMode::StartsWith, "light", "^light")]
    #[case(MatchMode::EndsWith, "light", "light$")]
    #[case(MatchMode::WholeWord, "light", r"\blight\b")]
    #[case(MatchMode::WordStartsWith, "light", r"\blight\w*")]
    #[case(MatchMode::WordEndsWith, "light", r"\w*light\b")]
    fn test_mode_wrappers(#[case] mode: MatchMode, #[case] text: &str, #[case] expected: &str) {
        assert_eq!(build_match_pattern(text, mode, false, &[]).as_str(), expected);
    }

    #[rstest]
    #[case(MatchMode::Contains, "the delight of it", true)]
    #[case(MatchMode::StartsWith, "light of the world", true)]
    #[case(MatchMode::StartsWith, "the light", false)]
    #[case(MatchMode::EndsWith, "walk in the light", true)]
    #[case(MatchMode::EndsWith, "light shines", false)]
    #[case(MatchMode::WholeWord, "the light shines", true)]
    #[case(MatchMode::WholeWord, "delight", false)]
    #[case(MatchMode::WordStartsWith, "lightning flashed", true)]
    #[case(MatchMode::WordStartsWith, "delight", false)]
    #[case(MatchMode::WordEndsWith, "great delight", true)]
    #[case(MatchMode::WordEndsWith, "lightning", false)]
    fn test_mode_semantics(#[case] mode: MatchMode, #[case] haystack: &str, #[case] expected: bool) {
        let pattern = build_match_pattern("light", mode, false, &[]);
        assert_eq!(matches(&pattern, haystack), expected);
    }

    #[test]
    fn test_plural_suffix() {
        let pattern = build_match_pattern("lamp", MatchMode::WholeWord, true, &[]);
        assert_eq!(pattern.as_str(), r"\blamps?\b");
        assert!(matches(&pattern, "a lamp unto my feet"));
        assert!(matches(&pattern, "the lamps were lit"));
        assert!(!matches(&pattern, "by the lamppost"));
    }

    #[test]
    fn test_synonym_alternation() {
        let synonyms = vec!["charity".to_string(), "affection".to_string()];
        let pattern = build_match_pattern("love", MatchMode::WholeWord, true, &synonyms);
        assert_eq!(pattern.as_str(), r"\b(?:love|charity|affection)s?\b");
        assert!(matches(&pattern, "have not charity"));
        assert!(matches(&pattern, "brotherly loves"));
    }

    #[test]
    fn test_synonyms_are_escaped() {
        let synonyms = vec!["a.b".to_string()];
        let pattern = build_match_pattern("x", MatchMode::Contains, false, &synonyms);
        assert_eq!(pattern.as_str(), r"(?:x|a\.b)");
        assert!(!matches(&pattern, "acb"));
    }
}
