//! Proximity Pattern Builder
//!
//! Builds bounded-distance, directional two-word patterns of the form
//! `\bW1\b\W+(?:\w+\W+){0,D}\bW2\b`, with the gap's word classes
//! spelled out as ASCII so that long unions stay small once compiled.

use super::config::ProximityRule;
use super::fragment::PatternFragment;

/// ASCII `\W+`.
const SEPARATOR_RUN: &str = "[^0-9A-Za-z_]+";
/// One intervening word (ASCII `\w+`) and the separator after it.
const GAP_WORD: &str = "[0-9A-Za-z_]+[^0-9A-Za-z_]+";

/// Build the fragment for a single rule: `word1`, then at most
/// `rule.distance()` intervening words, then `word2`.
pub fn build_proximity_pattern(rule: &ProximityRule) -> PatternFragment {
    let first = PatternFragment::literal(&rule.word1).wrap(r"\b", r"\b");
    let second = PatternFragment::literal(&rule.word2).wrap(r"\b", r"\b");
    let gap = PatternFragment::syntax(GAP_WORD).repeat(0, rule.distance());

    PatternFragment::concat([&first, &PatternFragment::syntax(SEPARATOR_RUN), &gap, &second])
}

/// OR several rules together; the query matches when any rule matches.
pub fn build_proximity_union(rules: &[ProximityRule]) -> PatternFragment {
    PatternFragment::alternation(rules.iter().map(build_proximity_pattern).collect())
}

/// Short description such as `"fear" within 3 words of "not"`.
pub fn describe_rule(rule: &ProximityRule) -> String {
    let unit = if rule.distance() == 1 { "word" } else { "words" };
    format!(
        "\"{}\" within {} {} of \"{}\"",
        rule.word1,
        rule.distance(),
        unit,
        rule.word2
    )
}
