//! Query Assembler
//!
//! Orchestrates the builders into one [`GeneratedQuery`]: constraint
//! lookaheads first, then either the proximity union or the main match
//! fragment, followed by scoring, volume estimation and matcher
//! construction.

use std::fmt;
use std::ops::Range;

use regex::{Regex, RegexBuilder};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use tracing::{debug, warn};

use crate::config::CompilerSettings;

use super::complexity::score_complexity;
use super::config::{SearchConfiguration, SearchScope};
use super::constraints::{compile_constraints, ConstraintSet};
use super::error::{QueryError, QueryResult};
use super::fragment::PatternFragment;
use super::matching::build_match_pattern;
use super::proximity::{build_proximity_union, describe_rule};
use super::synonyms::{resolve_synonyms, ExpandedSynonyms, SynonymExpander};
use super::volume::{estimate_volume, VolumeEstimate};

/// Warning attached when the volume estimate is `extreme`.
pub const EXTREME_VOLUME_WARNING: &str =
    "This search will match a very large share of the text. Add more specific terms or narrow the scope before running it.";

/// Warning attached for `high` volume or a complexity score above threshold.
pub const BROAD_QUERY_WARNING: &str =
    "This search may be slow or return many results. Consider narrowing it down.";

// ============================================================================
// Pattern Flags
// ============================================================================

/// Flags the executor applies alongside the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PatternFlags {
    pub case_insensitive: bool,
    /// Always set: the executor collects every match in a text unit.
    pub global: bool,
}

impl PatternFlags {
    fn for_config(config: &SearchConfiguration) -> Self {
        Self {
            case_insensitive: config.case_insensitive,
            global: true,
        }
    }
}

impl fmt::Display for PatternFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.global {
            f.write_str("g")?;
        }
        if self.case_insensitive {
            f.write_str("i")?;
        }
        Ok(())
    }
}

// ============================================================================
// Compiled Matcher
// ============================================================================

/// Executable form of a compiled query.
///
/// The body is matched with a linear-time engine. Must/must-not
/// constraints are checked against the whole text unit with their own
/// word matchers rather than by evaluating lookaheads.
#[derive(Debug, Clone)]
pub struct CompiledMatcher {
    body: Regex,
    required: Vec<Regex>,
    excluded: Vec<Regex>,
}

impl CompiledMatcher {
    fn build(
        body: &PatternFragment,
        constraints: &ConstraintSet,
        flags: PatternFlags,
        size_limit: usize,
    ) -> Result<Self, regex::Error> {
        let build = |fragment: &PatternFragment| {
            RegexBuilder::new(fragment.as_str())
                .case_insensitive(flags.case_insensitive)
                .size_limit(size_limit)
                .build()
        };

        Ok(Self {
            body: build(body)?,
            required: constraints.required.iter().map(&build).collect::<Result<_, _>>()?,
            excluded: constraints.excluded.iter().map(&build).collect::<Result<_, _>>()?,
        })
    }

    fn constraints_hold(&self, text: &str) -> bool {
        self.required.iter().all(|re| re.is_match(text))
            && !self.excluded.iter().any(|re| re.is_match(text))
    }

    /// Whether `text` satisfies the query.
    pub fn is_match(&self, text: &str) -> bool {
        self.constraints_hold(text) && self.body.is_match(text)
    }

    /// Byte ranges of every match in `text`, for highlighting.
    pub fn find_spans(&self, text: &str) -> Vec<Range<usize>> {
        if !self.constraints_hold(text) {
            return Vec::new();
        }
        self.body.find_iter(text).map(|m| m.range()).collect()
    }
}

/// The compiled pattern: source text, flags and executable matcher.
#[derive(Debug, Clone)]
pub struct QueryPattern {
    source: String,
    flags: PatternFlags,
    matcher: CompiledMatcher,
}

impl QueryPattern {
    /// The assembled pattern, lookaheads included.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> PatternFlags {
        self.flags
    }

    pub fn matcher(&self) -> &CompiledMatcher {
        &self.matcher
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }

    pub fn find_spans(&self, text: &str) -> Vec<Range<usize>> {
        self.matcher.find_spans(text)
    }
}

impl PartialEq for QueryPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.flags == other.flags
    }
}

impl Eq for QueryPattern {}

impl fmt::Display for QueryPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

impl Serialize for QueryPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("QueryPattern", 2)?;
        state.serialize_field("source", &self.source)?;
        state.serialize_field("flags", &self.flags.to_string())?;
        state.end()
    }
}

// ============================================================================
// Generated Query
// ============================================================================

/// Output of a successful compilation, consumed once by the executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuery {
    pub pattern: QueryPattern,
    pub description: String,
    /// 0-100 backtracking-risk proxy.
    pub complexity_score: u8,
    pub volume_estimate: VolumeEstimate,
    pub warning: Option<String>,
    /// Scope filters forwarded verbatim for the executor.
    pub scope: SearchScope,
}

// ============================================================================
// Query Compiler
// ============================================================================

/// Stateless compiler from [`SearchConfiguration`] to [`GeneratedQuery`].
#[derive(Debug, Clone, Default)]
pub struct QueryCompiler {
    settings: CompilerSettings,
}

impl QueryCompiler {
    pub fn new(settings: CompilerSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &CompilerSettings {
        &self.settings
    }

    /// Per-word synonym cap for `config`.
    pub fn synonym_limit(&self, config: &SearchConfiguration) -> usize {
        config
            .max_synonyms_per_word
            .unwrap_or(self.settings.default_max_synonyms_per_word)
    }

    /// Resolve synonyms through `expander`, then compile.
    pub async fn compile_with_synonyms(
        &self,
        config: &SearchConfiguration,
        expander: &dyn SynonymExpander,
    ) -> QueryResult<GeneratedQuery> {
        let synonyms = resolve_synonyms(expander, config, self.synonym_limit(config)).await?;
        self.compile(config, Some(&synonyms))
    }

    /// Compile `config` into an executable query.
    ///
    /// `synonyms` is only consulted when `config.include_synonyms` is set
    /// and the main text pattern (not proximity) is emitted.
    pub fn compile(
        &self,
        config: &SearchConfiguration,
        synonyms: Option<&ExpandedSynonyms>,
    ) -> QueryResult<GeneratedQuery> {
        if !config.has_search_input() {
            return Err(QueryError::EmptyQuery);
        }

        let text = config.text.trim();
        let rules = config.usable_proximity_rules();
        let constraints = compile_constraints(&config.must_contain, &config.must_not_contain);
        let mut clauses: Vec<String> = Vec::new();

        let body = if !rules.is_empty() {
            clauses.push(
                rules
                    .iter()
                    .map(describe_rule)
                    .collect::<Vec<_>>()
                    .join(" or "),
            );
            build_proximity_union(&rules)
        } else {
            let expanded = match synonyms {
                Some(synonyms) if config.include_synonyms => {
                    synonyms.flatten(self.synonym_limit(config), text)
                }
                _ => Vec::new(),
            };

            clauses.push(format!("{} \"{}\"", config.match_mode.label(), text));
            if config.include_plurals {
                clauses.push("including plurals".to_string());
            }
            if !expanded.is_empty() {
                let noun = if expanded.len() == 1 { "synonym" } else { "synonyms" };
                clauses.push(format!("with {} {}", expanded.len(), noun));
            }

            build_match_pattern(text, config.match_mode, config.include_plurals, &expanded)
        };

        if let Some(clause) = term_clause("must contain", &config.must_contain) {
            clauses.push(clause);
        }
        if let Some(clause) = term_clause("must not contain", &config.must_not_contain) {
            clauses.push(clause);
        }

        let source = PatternFragment::concat([&constraints.lookaheads, &body]).into_string();
        let flags = PatternFlags::for_config(config);
        let complexity_score = score_complexity(&source);
        let volume_estimate = estimate_volume(&source, text);
        let warning = self.warning_for(complexity_score, volume_estimate);

        let matcher = CompiledMatcher::build(&body, &constraints, flags, self.settings.regex_size_limit)
            .map_err(|e| QueryError::PatternCompilation {
                pattern: source.clone(),
                message: e.to_string(),
            })?;

        debug!(
            pattern = %source,
            flags = %flags,
            complexity_score,
            volume = %volume_estimate,
            "Compiled search query"
        );
        if let Some(ref message) = warning {
            warn!(complexity_score, volume = %volume_estimate, "{}", message);
        }

        Ok(GeneratedQuery {
            pattern: QueryPattern {
                source,
                flags,
                matcher,
            },
            description: clauses.join(", "),
            complexity_score,
            volume_estimate,
            warning,
            scope: config.scope.clone(),
        })
    }

    fn warning_for(&self, complexity_score: u8, volume: VolumeEstimate) -> Option<String> {
        if volume == VolumeEstimate::Extreme {
            Some(EXTREME_VOLUME_WARNING.to_string())
        } else if volume.needs_warning()
            || complexity_score > self.settings.complexity_warning_threshold
        {
            Some(BROAD_QUERY_WARNING.to_string())
        } else {
            None
        }
    }
}

/// Compile with default settings.
pub fn compile(
    config: &SearchConfiguration,
    synonyms: Option<&ExpandedSynonyms>,
) -> QueryResult<GeneratedQuery> {
    QueryCompiler::default().compile(config, synonyms)
}

fn term_clause(label: &str, terms: &[String]) -> Option<String> {
    let quoted: Vec<String> = terms
        .iter()
        .map(|term| term.trim())
        .filter(|term| !term.is_empty())
        .map(|term| format!("\"{term}\""))
        .collect();

    if quoted.is_empty() {
        None
    } else {
        Some(format!("{label} {}", quoted.join(", ")))
    }
}
