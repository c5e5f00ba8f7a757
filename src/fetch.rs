use reqwest::Client;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};
use url::Url;

use crate::api_types::{ApiConcern, ApiSentimentResults, ApiStateData};
use crate::error::{PulseError, Result};
use crate::models::{Concern, RegionMetrics, SentimentDataset};

/// Where the sentiment dataset lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Http(Url),
}

impl DataSource {
    /// `http(s)://` strings become URLs, anything else is a local path.
    pub fn parse(s: &str) -> Self {
        match Url::parse(s) {
            Ok(u) if matches!(u.scheme(), "http" | "https") => DataSource::Http(u),
            _ => DataSource::File(PathBuf::from(s)),
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(p) => write!(f, "{}", p.display()),
            DataSource::Http(u) => write!(f, "{}", u),
        }
    }
}

/// Load and normalize the dataset once. Any failure is a `DatasetLoad`.
pub async fn fetch_dataset(client: &Client, source: &DataSource) -> Result<SentimentDataset> {
    let start = std::time::Instant::now();
    debug!("Fetching dataset - source={}", source);

    let bytes = match source {
        DataSource::File(path) => tokio::fs::read(path)
            .await
            .map_err(|e| PulseError::load(source.to_string(), e))?,
        DataSource::Http(url) => {
            let resp = client
                .get(url.clone())
                .send()
                .await
                .map_err(|e| PulseError::load(source.to_string(), e))?
                .error_for_status()
                .map_err(|e| PulseError::load(source.to_string(), e))?;
            resp.bytes()
                .await
                .map_err(|e| PulseError::load(source.to_string(), e))?
                .to_vec()
        }
    };

    let dataset = parse_dataset(&bytes).map_err(|e| match e {
        PulseError::DatasetLoad { cause, .. } => PulseError::load(source.to_string(), cause),
        other => other,
    })?;

    info!(
        "Dataset fetch completed - source={}, duration={:.2}s, regions={}",
        source,
        start.elapsed().as_secs_f32(),
        dataset.regions.len()
    );
    Ok(dataset)
}

pub fn parse_dataset(bytes: &[u8]) -> Result<SentimentDataset> {
    let api: ApiSentimentResults =
        serde_json::from_slice(bytes).map_err(|e| PulseError::load("<memory>", e))?;
    Ok(normalize_dataset(api))
}

/// Absent numbers become 0, concern names are trimmed and unnamed concerns
/// dropped; order is kept.
pub fn normalize_dataset(api: ApiSentimentResults) -> SentimentDataset {
    let regions = api
        .state_data
        .into_iter()
        .map(|(name, s)| (name, normalize_region(s)))
        .collect();

    SentimentDataset {
        regions,
        last_updated: api.last_updated,
    }
}

fn normalize_region(s: ApiStateData) -> RegionMetrics {
    RegionMetrics {
        anxiety: s.anxiety.unwrap_or(0.0),
        hope: s.hope.unwrap_or(0.0),
        stress: s.stress.unwrap_or(0.0),
        fear: s.fear.unwrap_or(0.0),
        depression: s.depression.unwrap_or(0.0),
        velocity: s.velocity.unwrap_or(0.0),
        velocity_percent: s.velocity_percent.unwrap_or(0.0),
        time_delta_hours: s.time_delta_hours,
        top_concerns: s.top_concerns.into_iter().filter_map(normalize_concern).collect(),
    }
}

fn normalize_concern(c: ApiConcern) -> Option<Concern> {
    let name = c.concern.trim();
    if name.is_empty() {
        return None;
    }
    Some(Concern {
        name: name.to_string(),
        value: c.value.unwrap_or(0.0),
        related_searches: c.related_searches,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_kind_from_string() {
        assert!(matches!(
            DataSource::parse("https://example.org/sentiment_results.json"),
            DataSource::Http(_)
        ));
        assert_eq!(
            DataSource::parse("data/sentiment_results.json"),
            DataSource::File(PathBuf::from("data/sentiment_results.json"))
        );
        // a Windows drive letter parses as a URL scheme but is still a path
        assert!(matches!(DataSource::parse("C:/data/x.json"), DataSource::File(_)));
    }

    #[test]
    fn missing_fields_become_zero() {
        let json = br#"{
            "state_data": {
                "Ohio": { "anxiety": 61, "top_concerns": [
                    { "concern": " layoffs ", "value": 80, "related_searches": ["ohio layoffs"] },
                    { "concern": "taxes" }
                ]},
                "Utah": {}
            },
            "last_updated": "2025-10-18T08:06:19"
        }"#;
        let ds = parse_dataset(json).unwrap();
        let ohio = ds.region("Ohio").unwrap();
        assert_eq!(ohio.anxiety, 61.0);
        assert_eq!(ohio.hope, 0.0);
        assert_eq!(ohio.velocity, 0.0);
        assert_eq!(ohio.time_delta_hours, None);
        assert_eq!(ohio.top_concerns[0].name, "layoffs");
        assert_eq!(ohio.top_concerns[1].value, 0.0);
        assert_eq!(ds.region("Utah").unwrap(), &RegionMetrics::default());
        assert_eq!(ds.last_updated.as_deref(), Some("2025-10-18T08:06:19"));
    }

    #[test]
    fn unnamed_concerns_are_dropped() {
        let json = br#"{
            "state_data": {
                "Ohio": { "top_concerns": [
                    { "value": 90 },
                    { "concern": "   ", "value": 80 },
                    { "concern": "crime", "value": 70 }
                ]}
            }
        }"#;
        let ds = parse_dataset(json).unwrap();
        let ohio = ds.region("Ohio").unwrap();
        let names: Vec<&str> = ohio.top_concerns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["crime"]);
    }

    #[test]
    fn malformed_json_is_a_load_failure() {
        assert!(matches!(
            parse_dataset(b"{ not json"),
            Err(PulseError::DatasetLoad { .. })
        ));
    }
}
