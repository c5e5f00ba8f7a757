//! Plain result values handed from the core to whatever renders them.

use chrono::{DateTime, NaiveDateTime};
use chrono_tz::Tz;
use serde::Serialize;

use crate::drivers::{relevant_concerns, SelectionKind};
use crate::models::{Emotion, NationalAverages, RegionMetrics};
use crate::narrative;
use crate::severity::TrendIcon;
use crate::velocity::{describe, VelocityReading};

const TRENDS_EXPLORE: &str = "https://trends.google.com/trends/explore";
const DISPLAY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

#[derive(Debug, Clone, Serialize)]
pub struct RegionReport {
    pub region: String,
    pub narrative: String,
    pub emotions: Vec<EmotionReading>,
    pub velocity: VelocityReading,
    pub comparison: NationalComparison,
    pub trending: Vec<TrendingConcern>,
    pub observation: Option<ObservationWindow>,
}

impl RegionReport {
    pub fn emotion(&self, emotion: Emotion) -> f64 {
        self.emotions
            .iter()
            .find(|r| r.emotion == emotion)
            .map(|r| r.value)
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmotionReading {
    pub emotion: Emotion,
    pub value: f64,
}

/// Region minus national mean, unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NationalComparison {
    pub anxiety_delta: f64,
    pub hope_delta: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendingConcern {
    pub rank: usize,
    pub name: String,
    pub value: f64,
    pub icon: TrendIcon,
    pub related_searches: Vec<String>,
    pub trends_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionBreakdown {
    pub emotion: Emotion,
    pub kind: SelectionKind,
    pub entries: Vec<BreakdownEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownEntry {
    pub name: String,
    pub value: f64,
    pub intensity: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObservationWindow {
    pub last_updated: String,
    pub hours: f64,
}

impl ObservationWindow {
    pub fn text(&self) -> String {
        format!(
            "Last updated: {}\nData collected over {:.1} hours",
            self.last_updated, self.hours
        )
    }
}

pub fn build_report(
    region_name: &str,
    region: &RegionMetrics,
    national: &NationalAverages,
    last_updated: Option<&str>,
    tz: Tz,
) -> RegionReport {
    let emotions = Emotion::ALL
        .iter()
        .map(|&emotion| EmotionReading {
            emotion,
            value: region.emotion(emotion),
        })
        .collect();

    let trending = region
        .top_concerns
        .iter()
        .enumerate()
        .map(|(i, c)| TrendingConcern {
            rank: i + 1,
            name: c.name.clone(),
            value: c.value,
            icon: TrendIcon::classify(c.value),
            related_searches: c.related_searches.clone(),
            trends_url: trends_url(&c.name),
        })
        .collect();

    let observation = region.time_delta_hours.map(|hours| ObservationWindow {
        last_updated: format_last_updated(last_updated, tz),
        hours,
    });

    RegionReport {
        region: region_name.to_string(),
        narrative: narrative::generate(region_name, region, national),
        emotions,
        velocity: describe(region.velocity, region.velocity_percent),
        comparison: NationalComparison {
            anxiety_delta: region.anxiety - national.anxiety,
            hope_delta: region.hope - national.hope,
        },
        trending,
        observation,
    }
}

pub fn build_breakdown(region: &RegionMetrics, emotion: Emotion, limit: usize) -> EmotionBreakdown {
    let selection = relevant_concerns(region, emotion, limit);
    EmotionBreakdown {
        emotion,
        kind: selection.kind,
        entries: selection
            .concerns
            .into_iter()
            .map(|c| BreakdownEntry {
                name: c.name.clone(),
                value: c.value,
                intensity: TrendIcon::classify(c.value).breakdown_intensity(),
            })
            .collect(),
    }
}

pub fn trends_url(concern: &str) -> String {
    let q: String = url::form_urlencoded::byte_serialize(concern.as_bytes()).collect();
    format!("{}?geo=US&q={}", TRENDS_EXPLORE, q)
}

/// RFC 3339 stamps are shifted into `tz`; naive ISO stamps are taken as
/// already local. Anything unparseable is shown verbatim.
pub fn format_last_updated(raw: Option<&str>, tz: Tz) -> String {
    let Some(raw) = raw else {
        return "Unknown".to_string();
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&tz).format(DISPLAY_FORMAT).to_string();
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return naive.format(DISPLAY_FORMAT).to_string();
        }
    }
    raw.to_string()
}
