use tracing::debug;

use crate::error::{PulseError, Result};
use crate::models::{NationalAverages, SentimentDataset};

/// Arithmetic mean of anxiety, hope and stress over every region.
///
/// Missing fields were normalized to 0 at load time, so such regions pull the
/// mean down rather than dropping out of the denominator.
pub fn compute(dataset: &SentimentDataset) -> Result<NationalAverages> {
    let n = dataset.regions.len();
    if n == 0 {
        return Err(PulseError::EmptyDataset);
    }

    let (mut anxiety, mut hope, mut stress) = (0.0f64, 0.0f64, 0.0f64);
    for r in dataset.regions.values() {
        anxiety += r.anxiety;
        hope += r.hope;
        stress += r.stress;
    }

    let avg = NationalAverages {
        anxiety: anxiety / n as f64,
        hope: hope / n as f64,
        stress: stress / n as f64,
        region_count: n,
    };
    debug!(
        "National averages - regions={}, anxiety={:.1}, hope={:.1}, stress={:.1}",
        n, avg.anxiety, avg.hope, avg.stress
    );
    Ok(avg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RegionMetrics;

    fn dataset(rows: &[(&str, f64, f64, f64)]) -> SentimentDataset {
        SentimentDataset {
            regions: rows
                .iter()
                .map(|&(name, anxiety, hope, stress)| {
                    (
                        name.to_string(),
                        RegionMetrics {
                            anxiety,
                            hope,
                            stress,
                            ..Default::default()
                        },
                    )
                })
                .collect(),
            last_updated: None,
        }
    }

    #[test]
    fn means_each_field() {
        let ds = dataset(&[("Ohio", 60.0, 30.0, 50.0), ("Texas", 40.0, 50.0, 70.0)]);
        let avg = compute(&ds).unwrap();
        assert_eq!(avg.anxiety, 50.0);
        assert_eq!(avg.hope, 40.0);
        assert_eq!(avg.stress, 60.0);
        assert_eq!(avg.region_count, 2);
    }

    #[test]
    fn zeroed_region_stays_in_denominator() {
        let ds = dataset(&[("Ohio", 90.0, 0.0, 0.0), ("Utah", 0.0, 0.0, 0.0), ("Iowa", 0.0, 0.0, 0.0)]);
        assert_eq!(compute(&ds).unwrap().anxiety, 30.0);
    }

    #[test]
    fn empty_dataset_is_an_error() {
        assert!(matches!(
            compute(&SentimentDataset::default()),
            Err(PulseError::EmptyDataset)
        ));
    }
}
