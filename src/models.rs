use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::PulseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Anxiety,
    Hope,
    Stress,
    Fear,
    Depression,
}

impl Emotion {
    pub const ALL: [Emotion; 5] = [
        Emotion::Anxiety,
        Emotion::Hope,
        Emotion::Stress,
        Emotion::Fear,
        Emotion::Depression,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Anxiety => "anxiety",
            Emotion::Hope => "hope",
            Emotion::Stress => "stress",
            Emotion::Fear => "fear",
            Emotion::Depression => "depression",
        }
    }

    /// Capitalized display name, e.g. "Anxiety".
    pub fn label(self) -> &'static str {
        match self {
            Emotion::Anxiety => "Anxiety",
            Emotion::Hope => "Hope",
            Emotion::Stress => "Stress",
            Emotion::Fear => "Fear",
            Emotion::Depression => "Depression",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Emotion::Anxiety => "😰",
            Emotion::Hope => "💚",
            Emotion::Stress => "😓",
            Emotion::Fear => "😨",
            Emotion::Depression => "😔",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = PulseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Emotion::ALL
            .into_iter()
            .find(|e| e.as_str() == wanted)
            .ok_or_else(|| PulseError::UnknownEmotion(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concern {
    pub name: String,
    pub value: f64, // 0..100 search-interest intensity
    pub related_searches: Vec<String>,
}

/// Per-region metrics after normalization; absent numbers are already 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionMetrics {
    pub anxiety: f64,
    pub hope: f64,
    pub stress: f64,
    pub fear: f64,
    pub depression: f64,
    pub velocity: f64,
    pub velocity_percent: f64,
    pub time_delta_hours: Option<f64>,
    pub top_concerns: Vec<Concern>, // ranked by the source, order preserved
}

impl RegionMetrics {
    pub fn emotion(&self, emotion: Emotion) -> f64 {
        match emotion {
            Emotion::Anxiety => self.anxiety,
            Emotion::Hope => self.hope,
            Emotion::Stress => self.stress,
            Emotion::Fear => self.fear,
            Emotion::Depression => self.depression,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentDataset {
    pub regions: BTreeMap<String, RegionMetrics>,
    pub last_updated: Option<String>,
}

impl SentimentDataset {
    pub fn region(&self, name: &str) -> Option<&RegionMetrics> {
        self.regions.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NationalAverages {
    pub anxiety: f64,
    pub hope: f64,
    pub stress: f64,
    pub region_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emotion_parse_is_case_insensitive() {
        assert_eq!("Anxiety".parse::<Emotion>().unwrap(), Emotion::Anxiety);
        assert_eq!(" DEPRESSION ".parse::<Emotion>().unwrap(), Emotion::Depression);
        assert!(matches!(
            "joy".parse::<Emotion>(),
            Err(PulseError::UnknownEmotion(_))
        ));
    }

    #[test]
    fn region_emotion_lookup() {
        let r = RegionMetrics {
            anxiety: 1.0,
            hope: 2.0,
            stress: 3.0,
            fear: 4.0,
            depression: 5.0,
            ..Default::default()
        };
        let values: Vec<f64> = Emotion::ALL.iter().map(|&e| r.emotion(e)).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }
}
