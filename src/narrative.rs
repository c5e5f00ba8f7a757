use itertools::Itertools;
use tracing::debug;

use crate::models::{NationalAverages, RegionMetrics};

const VELOCITY_NOTABLE: f64 = 5.0;
const VELOCITY_SPIKE: f64 = 10.0;
const NATIONAL_GAP: f64 = 5.0;
const CONCERN_EXTREME: f64 = 70.0;

/// Round half toward +inf, the way the map front-end has always rounded.
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

fn velocity_clause(region: &RegionMetrics) -> String {
    let v = region.velocity;
    if v.abs() >= VELOCITY_NOTABLE {
        if v > 0.0 {
            let verb = if v >= VELOCITY_SPIKE { "SPIKED" } else { "jumped" };
            let hours = region
                .time_delta_hours
                .filter(|h| *h != 0.0 && !h.is_nan())
                .unwrap_or(1.0);
            format!("Anxiety {} {} points in the last {} hours", verb, v.abs(), hours)
        } else {
            format!("Anxiety dropped {} points - cooling down", v.abs())
        }
    } else {
        "Emotional levels stable".to_string()
    }
}

fn national_clause(region: &RegionMetrics, national: &NationalAverages) -> Option<String> {
    let diff = region.anxiety - national.anxiety;
    if diff.abs() < NATIONAL_GAP || diff.is_nan() {
        return None;
    }
    let comparison = if diff > 0.0 { "more anxious" } else { "calmer" };
    Some(format!(
        "{} pts {} than national average",
        round_half_up(diff.abs()),
        comparison
    ))
}

fn concern_clause(region: &RegionMetrics) -> Option<String> {
    let top = region.top_concerns.first()?;
    (top.value >= CONCERN_EXTREME).then(|| format!("\"{}\" searches are extremely high", top.name))
}

/// Short multi-clause summary: velocity, national gap, top concern.
/// Only the velocity clause is always present.
pub fn generate(region_name: &str, region: &RegionMetrics, national: &NationalAverages) -> String {
    let parts: Vec<String> = std::iter::once(velocity_clause(region))
        .chain(national_clause(region, national))
        .chain(concern_clause(region))
        .collect();

    debug!("Narrative composed - region={}, clauses={}", region_name, parts.len());
    format!("{}.", parts.iter().join(". "))
}
