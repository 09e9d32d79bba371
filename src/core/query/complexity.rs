//! Complexity Scorer
//!
//! A cheap static proxy for backtracking risk. It never blocks
//! compilation; the compiler only uses it to attach a warning.

/// Points per quantifier character (`*`, `+`, `?`).
pub const QUANTIFIER_WEIGHT: f64 = 10.0;
/// Points per opening group.
pub const GROUP_WEIGHT: f64 = 5.0;
/// Points per lookahead marker (`(?=` or `(?!`).
pub const LOOKAHEAD_WEIGHT: f64 = 15.0;
/// Points per byte of pattern length.
pub const LENGTH_WEIGHT: f64 = 0.1;
/// Upper bound of the score.
pub const MAX_COMPLEXITY: u8 = 100;
/// Scores strictly above this get a warning by default.
pub const DEFAULT_WARNING_THRESHOLD: u8 = 80;

/// Score an assembled pattern on a 0-100 scale.
pub fn score_complexity(pattern: &str) -> u8 {
    let quantifiers = pattern
        .chars()
        .filter(|c| matches!(c, '*' | '+' | '?'))
        .count();
    let groups = pattern.matches('(').count();
    let lookaheads = pattern.matches("(?=").count() + pattern.matches("(?!").count();

    let score = quantifiers as f64 * QUANTIFIER_WEIGHT
        + groups as f64 * GROUP_WEIGHT
        + lookaheads as f64 * LOOKAHEAD_WEIGHT
        + pattern.len() as f64 * LENGTH_WEIGHT;

    score.round().clamp(0.0, MAX_COMPLEXITY as f64) as u8
}
