//! Pattern Fragments
//!
//! A [`PatternFragment`] is a piece of pattern text that is known to be
//! safe to splice into a larger pattern. User text can only become a
//! fragment through [`PatternFragment::literal`], which escapes every
//! metacharacter; everything else is fixed syntax owned by this crate.

use std::fmt;

/// Escape user text for literal inclusion in a pattern.
///
/// Every pattern metacharacter is backslash-escaped; nothing else changes.
pub fn escape_text(text: &str) -> String {
    regex::escape(text)
}

/// Opaque, composable piece of a compiled pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PatternFragment(String);

impl PatternFragment {
    /// The empty fragment.
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// A fragment matching `text` literally.
    pub fn literal(text: &str) -> Self {
        Self(escape_text(text))
    }

    /// Fixed pattern syntax. Never call this with user-controlled text.
    pub(crate) fn syntax(syntax: &'static str) -> Self {
        Self(syntax.to_string())
    }

    /// Non-capturing alternation `(?:a|b|...)` of the given fragments.
    ///
    /// A single fragment is returned unchanged.
    pub(crate) fn alternation(mut fragments: Vec<PatternFragment>) -> Self {
        match fragments.len() {
            0 => Self::empty(),
            1 => fragments.remove(0),
            _ => {
                let joined = fragments
                    .iter()
                    .map(PatternFragment::as_str)
                    .collect::<Vec<_>>()
                    .join("|");
                Self(format!("(?:{joined})"))
            }
        }
    }

    /// Append `other` to this fragment.
    pub(crate) fn then(mut self, other: &PatternFragment) -> Self {
        self.0.push_str(&other.0);
        self
    }

    /// Surround this fragment with fixed syntax.
    pub(crate) fn wrap(self, prefix: &'static str, suffix: &'static str) -> Self {
        Self(format!("{prefix}{}{suffix}", self.0))
    }

    /// Repeat this fragment as a group between `min` and `max` times.
    pub(crate) fn repeat(self, min: u32, max: u32) -> Self {
        Self(format!("(?:{}){{{min},{max}}}", self.0))
    }

    /// Concatenate fragments in order.
    pub(crate) fn concat<'a>(fragments: impl IntoIterator<Item = &'a PatternFragment>) -> Self {
        fragments
            .into_iter()
            .fold(Self::empty(), |acc, fragment| acc.then(fragment))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PatternFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
