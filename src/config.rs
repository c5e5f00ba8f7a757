use chrono_tz::Tz;
use tracing::debug;

use crate::drivers::DEFAULT_CONCERN_LIMIT;
use crate::error::{PulseError, Result};
use crate::fetch::DataSource;
use crate::models::Emotion;
use crate::render::{BreakdownToggles, PresentationMode};

pub const ENV_DATA: &str = "PULSE_DATA";
pub const ENV_TZ: &str = "PULSE_TZ";
pub const DEFAULT_DATA: &str = "sentiment_results.json";
pub const DEFAULT_TZ: Tz = chrono_tz::America::New_York;

/// Settings as given on the command line; `None` falls through to the
/// environment, then to defaults.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub source: Option<String>,
    pub tz: Option<String>,
    pub mode: Option<PresentationMode>,
    pub expand: Vec<Emotion>,
    pub concern_limit: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct PulseConfig {
    pub source: DataSource,
    pub tz: Tz,
    pub mode: PresentationMode,
    pub toggles: BreakdownToggles,
    pub concern_limit: usize,
}

impl PulseConfig {
    pub fn resolve(overrides: ConfigOverrides) -> Result<Self> {
        Self::resolve_with(overrides, |k| std::env::var(k).ok())
    }

    /// Precedence: CLI > env var > default.
    pub fn resolve_with(overrides: ConfigOverrides, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let source = overrides
            .source
            .or_else(|| env(ENV_DATA))
            .unwrap_or_else(|| DEFAULT_DATA.to_string());

        let tz = match overrides.tz.or_else(|| env(ENV_TZ)) {
            Some(name) => name
                .parse::<Tz>()
                .map_err(|e| PulseError::InvalidConfig(format!("timezone '{}': {}", name, e)))?,
            None => DEFAULT_TZ,
        };

        let mut toggles = BreakdownToggles::default();
        for e in overrides.expand {
            if !toggles.is_visible(e) {
                toggles.toggle(e);
            }
        }

        let cfg = PulseConfig {
            source: DataSource::parse(&source),
            tz,
            mode: overrides.mode.unwrap_or_default(),
            toggles,
            concern_limit: overrides.concern_limit.unwrap_or(DEFAULT_CONCERN_LIMIT),
        };
        debug!(
            "Config resolved - source={}, tz={}, mode={:?}, concern_limit={}",
            cfg.source, cfg.tz, cfg.mode, cfg.concern_limit
        );
        Ok(cfg)
    }
}
