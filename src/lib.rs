//! # human_pulse
//!
//! Regional emotional-sentiment analytics over search-interest data.
//!
//! A dataset of per-region emotion scores, anxiety velocity and trending
//! concerns is loaded once; national averages are derived from it and every
//! region selection then yields a [`RegionReport`]: a short narrative,
//! emotion values, the gap to the national average, ranked concerns with
//! severity icons and on-demand "what's driving this emotion" breakdowns.
//!
//! ```rust,ignore
//! let client = reqwest::Client::new();
//! let pulse = Pulse::load(&client, &DataSource::parse("sentiment_results.json"), chrono_tz::UTC).await;
//! let report = pulse.select("Ohio")?;
//! println!("{}", report.narrative);
//! ```

pub mod api_types;
pub mod averages;
pub mod config;
pub mod drivers;
pub mod error;
pub mod fetch;
pub mod models;
pub mod narrative;
pub mod orchestrator;
pub mod render;
pub mod report;
pub mod severity;
pub mod velocity;

pub use error::{PulseError, Result};
pub use fetch::DataSource;
pub use models::{Concern, Emotion, NationalAverages, RegionMetrics, SentimentDataset};
pub use orchestrator::{Pulse, Session};
pub use report::{EmotionBreakdown, RegionReport};
