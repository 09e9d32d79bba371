//! Search Presets
//!
//! Ready-made search configurations. Presets are plain data: the compiler
//! treats them exactly like a configuration built by hand.

use super::config::{MatchMode, ProximityRule, SearchConfiguration};

/// A named, described search configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPreset {
    pub name: &'static str,
    pub description: &'static str,
    pub config: SearchConfiguration,
}

/// The fixed preset catalog, in display order.
pub fn catalog() -> Vec<SearchPreset> {
    vec![
        SearchPreset {
            name: "fear-not",
            description: "\"Fear\" followed closely by \"not\"",
            config: SearchConfiguration::proximity(vec![ProximityRule::new("fear", "not", 3)]),
        },
        SearchPreset {
            name: "grace-through-faith",
            description: "Grace alongside faith, without works",
            config: SearchConfiguration::text("grace", MatchMode::WholeWord)
                .must_contain(["faith"])
                .must_not_contain(["works"]),
        },
        SearchPreset {
            name: "kingdom-of-heaven",
            description: "\"Kingdom\" near \"heaven\" or \"God\"",
            config: SearchConfiguration::proximity(vec![
                ProximityRule::new("kingdom", "heaven", 2),
                ProximityRule::new("kingdom", "God", 2),
            ]),
        },
        SearchPreset {
            name: "lamps-and-lights",
            description: "Lamps and lights, singular or plural",
            config: SearchConfiguration::text("lamp", MatchMode::WholeWord)
                .with_plurals()
                .must_contain(["light"]),
        },
        SearchPreset {
            name: "love-and-synonyms",
            description: "Love, including synonyms such as charity",
            config: SearchConfiguration::text("love", MatchMode::WordStartsWith).with_synonyms(5),
        },
        SearchPreset {
            name: "in-the-beginning",
            description: "Verses opening with \"In the beginning\"",
            config: SearchConfiguration::text("In the beginning", MatchMode::StartsWith),
        },
    ]
}

/// Look up a preset by name.
pub fn find(name: &str) -> Option<SearchPreset> {
    catalog().into_iter().find(|preset| preset.name == name)
}
