use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use unicode_normalization::UnicodeNormalization;

use crate::models::{Concern, Emotion, RegionMetrics};

pub const DEFAULT_CONCERN_LIMIT: usize = 5;
pub const FALLBACK_CONCERN_LIMIT: usize = 3;

static ANXIETY: &[&str] = &[
    "layoffs",
    "unemployment",
    "crime",
    "recession fears",
    "job security",
    "inflation",
    "financial crisis",
    "market crash",
];
static HOPE: &[&str] = &["good news", "breakthrough", "market rally", "opportunity", "recovery"];
static STRESS: &[&str] = &[
    "cost of living",
    "housing costs",
    "gas prices",
    "rent prices",
    "taxes",
    "student debt",
    "healthcare costs",
];
static FEAR: &[&str] = &[
    "crime",
    "financial crisis",
    "market crash",
    "layoffs",
    "homelessness",
    "recession fears",
    "border crisis",
];
static DEPRESSION: &[&str] = &[
    "unemployment",
    "layoffs",
    "crime",
    "homelessness",
    "student debt",
    "healthcare costs",
    "inflation",
];

fn driver_table() -> &'static HashMap<Emotion, HashSet<&'static str>> {
    use once_cell::sync::Lazy;
    static TABLE: Lazy<HashMap<Emotion, HashSet<&'static str>>> = Lazy::new(|| {
        [
            (Emotion::Anxiety, ANXIETY),
            (Emotion::Hope, HOPE),
            (Emotion::Stress, STRESS),
            (Emotion::Fear, FEAR),
            (Emotion::Depression, DEPRESSION),
        ]
        .into_iter()
        .map(|(e, words)| (e, words.iter().copied().collect()))
        .collect()
    });
    &TABLE
}

/// Lowercase concern names that drive `emotion`.
pub fn drivers_for(emotion: Emotion) -> &'static HashSet<&'static str> {
    &driver_table()[&emotion]
}

fn normalize_name(s: &str) -> String {
    s.nfc().collect::<String>().to_lowercase()
}

pub fn is_driver(concern_name: &str, emotion: Emotion) -> bool {
    drivers_for(emotion).contains(normalize_name(concern_name).as_str())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionKind {
    /// Concerns that drive the emotion, strongest first.
    Matched,
    /// Nothing matched; the region's general top concerns instead.
    Fallback,
    /// The region has no concerns at all.
    Unavailable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConcernSelection<'a> {
    pub kind: SelectionKind,
    pub concerns: Vec<&'a Concern>,
}

impl ConcernSelection<'_> {
    pub fn is_fallback(&self) -> bool {
        self.kind == SelectionKind::Fallback
    }
}

/// Concerns of `region` that drive `emotion`, sorted by value descending
/// (stable, so source order breaks ties) and capped at `limit`.
pub fn relevant_concerns(
    region: &RegionMetrics,
    emotion: Emotion,
    limit: usize,
) -> ConcernSelection<'_> {
    if region.top_concerns.is_empty() {
        return ConcernSelection {
            kind: SelectionKind::Unavailable,
            concerns: Vec::new(),
        };
    }

    let mut matched: Vec<&Concern> = region
        .top_concerns
        .iter()
        .filter(|c| is_driver(&c.name, emotion))
        .collect();

    if matched.is_empty() {
        return ConcernSelection {
            kind: SelectionKind::Fallback,
            concerns: region
                .top_concerns
                .iter()
                .take(FALLBACK_CONCERN_LIMIT)
                .collect(),
        };
    }

    matched.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
    matched.truncate(limit);

    ConcernSelection {
        kind: SelectionKind::Matched,
        concerns: matched,
    }
}
