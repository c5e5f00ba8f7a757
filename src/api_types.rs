use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw shape of `sentiment_results.json` as written by the collectors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiSentimentResults {
    #[serde(default)]
    pub state_data: BTreeMap<String, ApiStateData>,
    #[serde(default)]
    pub last_updated: Option<String>, // "2025-10-18T08:06:19.780796" (ISO-8601-ish)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiStateData {
    #[serde(default)]
    pub anxiety: Option<f64>,
    #[serde(default)]
    pub hope: Option<f64>,
    #[serde(default)]
    pub stress: Option<f64>,
    #[serde(default)]
    pub fear: Option<f64>,
    #[serde(default)]
    pub depression: Option<f64>,
    #[serde(default)]
    pub velocity: Option<f64>,         // signed anxiety change over the window
    #[serde(default)]
    pub velocity_percent: Option<f64>, // signed percent counterpart
    #[serde(default)]
    pub time_delta_hours: Option<f64>,
    #[serde(default)]
    pub top_concerns: Vec<ApiConcern>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConcern {
    #[serde(default)]
    pub concern: String,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub related_searches: Vec<String>,
}
