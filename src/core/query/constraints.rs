//! Constraint Compiler
//!
//! Turns must-contain and must-not-contain term lists into zero-width
//! lookahead assertions, plus the per-term word matchers used to
//! evaluate them.

use super::fragment::PatternFragment;

/// Compiled constraint terms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    /// `(?=.*\bT\b)` for each required term, then `(?!.*\bT\b)` for each excluded one.
    pub lookaheads: PatternFragment,
    /// `\bT\b` for each required term, in input order.
    pub required: Vec<PatternFragment>,
    /// `\bT\b` for each excluded term, in input order.
    pub excluded: Vec<PatternFragment>,
}

/// Build lookaheads for the given term lists. Blank terms are skipped.
pub fn compile_constraints(must_contain: &[String], must_not_contain: &[String]) -> ConstraintSet {
    let required = word_fragments(must_contain);
    let excluded = word_fragments(must_not_contain);

    let positive = required
        .iter()
        .map(|term| term.clone().wrap("(?=.*", ")"));
    let negative = excluded
        .iter()
        .map(|term| term.clone().wrap("(?!.*", ")"));
    let assertions: Vec<PatternFragment> = positive.chain(negative).collect();

    ConstraintSet {
        lookaheads: PatternFragment::concat(&assertions),
        required,
        excluded,
    }
}

fn word_fragments(terms: &[String]) -> Vec<PatternFragment> {
    terms
        .iter()
        .map(|term| term.trim())
        .filter(|term| !term.is_empty())
        .map(|term| PatternFragment::literal(term).wrap(r"\b", r"\b"))
        .collect()
}
