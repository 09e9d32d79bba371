//! Volume Estimator
//!
//! Classifies how many hits a compiled query is likely to produce,
//! without ever running it. Rules are checked in order and the first
//! match wins:
//!
//! | # | Condition                                 | Estimate   |
//! |---|-------------------------------------------|------------|
//! | 1 | text empty or whitespace                  | `extreme`  |
//! | 2 | text is 1 character                       | `high`     |
//! | 3 | text is 2 characters                      | `moderate` |
//! | 4 | text is a stop word                       | `extreme`  |
//! | 5 | pattern has `.*` or `.+`                  | `high`     |
//! | 6 | pattern has more than 3 `?`               | `moderate` |
//! | 7 | otherwise                                 | `safe`     |

use std::fmt;

use serde::{Deserialize, Serialize};

/// More `?` markers than this makes a pattern `moderate`.
pub const OPTIONAL_MARKER_LIMIT: usize = 3;

/// Words common enough that searching for them alone floods the results.
const STOP_WORDS: &[&str] = &[
    // Articles
    "a", "an", "the",
    // Pronouns
    "i", "you", "he", "she", "it", "we", "they",
    "me", "him", "her", "us", "them",
    "my", "your", "his", "its", "our", "their",
    "this", "that", "these", "those",
    "who", "whom", "whose", "which", "what",
    "thee", "thou", "thy", "thine", "ye",
    // Conjunctions
    "and", "or", "but", "nor", "so", "yet", "for",
    "because", "although", "while", "if", "unless",
    // Verbs (common)
    "is", "are", "was", "were", "be", "been", "being",
    "have", "has", "had", "having", "hath",
    "do", "does", "did", "doing", "doth",
    "will", "would", "could", "should", "may", "might", "must",
    "can", "shall", "said", "saith", "came", "come",
];

/// Predicted result cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeEstimate {
    Safe,
    Moderate,
    High,
    Extreme,
}

impl VolumeEstimate {
    pub fn as_str(&self) -> &'static str {
        match self {
            VolumeEstimate::Safe => "safe",
            VolumeEstimate::Moderate => "moderate",
            VolumeEstimate::High => "high",
            VolumeEstimate::Extreme => "extreme",
        }
    }

    /// Whether the caller should be warned before running the query.
    pub fn needs_warning(&self) -> bool {
        matches!(self, VolumeEstimate::High | VolumeEstimate::Extreme)
    }
}

impl fmt::Display for VolumeEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check if a word is a stop word.
pub fn is_stop_word(word: &str) -> bool {
    let lower = word.trim().to_lowercase();
    STOP_WORDS.contains(&lower.as_str())
}

/// Estimate result volume for `pattern` compiled from `text`.
pub fn estimate_volume(pattern: &str, text: &str) -> VolumeEstimate {
    let trimmed = text.trim();

    match trimmed.chars().count() {
        0 => return VolumeEstimate::Extreme,
        1 => return VolumeEstimate::High,
        2 => return VolumeEstimate::Moderate,
        _ => {}
    }

    if is_stop_word(trimmed) {
        return VolumeEstimate::Extreme;
    }

    if pattern.contains(".*") || pattern.contains(".+") {
        return VolumeEstimate::High;
    }

    if pattern.matches('?').count() > OPTIONAL_MARKER_LIMIT {
        return VolumeEstimate::Moderate;
    }

    VolumeEstimate::Safe
}
