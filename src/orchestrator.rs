use chrono_tz::Tz;
use reqwest::Client;
use tracing::{debug, error, info, warn};
use xxhash_rust::xxh3::xxh3_64;

use crate::averages;
use crate::error::{PulseError, Result};
use crate::fetch::{fetch_dataset, DataSource};
use crate::models::{Emotion, NationalAverages, SentimentDataset};
use crate::report::{build_breakdown, build_report, EmotionBreakdown, RegionReport};

fn fingerprint(dataset: &SentimentDataset) -> u64 {
    // BTreeMap keys serialize in a stable order
    let bytes = serde_json::to_vec(dataset).unwrap_or_default();
    xxh3_64(&bytes)
}

/// A loaded dataset plus the national averages derived from it.
///
/// Averages are computed once on construction and replaced as a whole
/// when the dataset changes.
#[derive(Debug, Clone)]
pub struct Session {
    dataset: SentimentDataset,
    averages: NationalAverages,
    fingerprint: u64,
    tz: Tz,
}

impl Session {
    pub fn new(dataset: SentimentDataset, tz: Tz) -> Result<Self> {
        let averages = averages::compute(&dataset)?;
        let fingerprint = fingerprint(&dataset);
        debug!("Session ready - regions={}, fingerprint={:016x}", dataset.regions.len(), fingerprint);
        Ok(Self {
            dataset,
            averages,
            fingerprint,
            tz,
        })
    }

    pub fn dataset(&self) -> &SentimentDataset {
        &self.dataset
    }

    pub fn averages(&self) -> &NationalAverages {
        &self.averages
    }

    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    pub fn region_names(&self) -> impl Iterator<Item = &str> {
        self.dataset.regions.keys().map(String::as_str)
    }

    /// Swap in a new dataset. Returns `Ok(false)` when the content is
    /// identical and the cached averages were kept.
    pub fn replace_dataset(&mut self, dataset: SentimentDataset) -> Result<bool> {
        let fp = fingerprint(&dataset);
        if fp == self.fingerprint {
            debug!("Dataset unchanged - fingerprint={:016x}", fp);
            return Ok(false);
        }
        *self = Session::new(dataset, self.tz)?;
        info!(
            "National averages recomputed - regions={}, anxiety={:.1}",
            self.averages.region_count, self.averages.anxiety
        );
        Ok(true)
    }

    /// Everything the renderer needs for one region selection.
    pub fn select(&self, region_name: &str) -> Result<RegionReport> {
        let region = self.dataset.region(region_name).ok_or_else(|| {
            debug!("Selection ignored - region={} not in dataset", region_name);
            PulseError::MissingRegion(region_name.to_string())
        })?;
        Ok(build_report(
            region_name,
            region,
            &self.averages,
            self.dataset.last_updated.as_deref(),
            self.tz,
        ))
    }

    pub fn breakdown(&self, region_name: &str, emotion: Emotion, limit: usize) -> Result<EmotionBreakdown> {
        let region = self
            .dataset
            .region(region_name)
            .ok_or_else(|| PulseError::MissingRegion(region_name.to_string()))?;
        Ok(build_breakdown(region, emotion, limit))
    }
}

/// Load state of the dataset. A failed load is explicit rather than an
/// indefinitely pending one.
#[derive(Debug)]
pub enum Pulse {
    Ready(Session),
    Failed(PulseError),
}

impl Pulse {
    /// One-shot load; a failure is logged here, once, and remembered.
    pub async fn load(client: &Client, source: &DataSource, tz: Tz) -> Self {
        match fetch_dataset(client, source).await.and_then(|ds| Session::new(ds, tz)) {
            Ok(session) => {
                info!(
                    "Pulse ready - source={}, regions={}",
                    source,
                    session.averages().region_count
                );
                Pulse::Ready(session)
            }
            Err(e) => {
                error!("Error loading sentiment data - source={}, error={}", source, e);
                Pulse::Failed(e)
            }
        }
    }

    /// Reload from `source`. A failure leaves an existing session in place.
    pub async fn reload(&mut self, client: &Client, source: &DataSource, tz: Tz) -> Result<bool> {
        let dataset = match fetch_dataset(client, source).await {
            Ok(ds) => ds,
            Err(e) => {
                warn!("Reload failed, keeping previous state - source={}, error={}", source, e);
                return Err(e);
            }
        };
        match self {
            Pulse::Ready(session) => session.replace_dataset(dataset),
            Pulse::Failed(_) => {
                *self = Pulse::Ready(Session::new(dataset, tz)?);
                Ok(true)
            }
        }
    }

    pub fn session(&self) -> Result<&Session> {
        match self {
            Pulse::Ready(s) => Ok(s),
            Pulse::Failed(e) => Err(PulseError::NotLoaded(e.to_string())),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Pulse::Ready(_))
    }

    pub fn select(&self, region_name: &str) -> Result<RegionReport> {
        self.session()?.select(region_name)
    }
}
