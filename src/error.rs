use thiserror::Error;

/// Errors surfaced by the sentiment core.
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `DatasetLoad` | The dataset could not be read, fetched or decoded |
/// | `EmptyDataset` | The dataset has no regions to average over |
/// | `NotLoaded` | A region is selected while no dataset is available |
/// | `MissingRegion` | A selection names a region absent from the dataset |
/// | `UnknownEmotion` | An emotion name does not parse |
/// | `InvalidConfig` | A CLI or environment setting is unusable |
#[derive(Debug, Error)]
pub enum PulseError {
    #[error("dataset load failed for {location}: {cause}")]
    DatasetLoad { location: String, cause: String },

    #[error("dataset contains no regions")]
    EmptyDataset,

    #[error("dataset not loaded: {0}")]
    NotLoaded(String),

    #[error("region '{0}' not found in dataset")]
    MissingRegion(String),

    #[error("unknown emotion: {0}")]
    UnknownEmotion(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl PulseError {
    pub(crate) fn load(location: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        PulseError::DatasetLoad {
            location: location.into(),
            cause: cause.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PulseError>;
