//! Two independent 0..100 severity scales.
//!
//! `TrendIcon` is the 4-bucket scale shown next to trending concerns
//! (30/50/70 boundaries). `LegendBand` is the 5-bucket scale printed in the
//! "how to read these numbers" legend (20/40/60/80 boundaries). The two are
//! not reconciled; neither clamps its input.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendIcon {
    Minimal,
    Low,
    Medium,
    High,
}

impl TrendIcon {
    pub fn classify(value: f64) -> Self {
        if value >= 70.0 {
            TrendIcon::High
        } else if value >= 50.0 {
            TrendIcon::Medium
        } else if value >= 30.0 {
            TrendIcon::Low
        } else {
            TrendIcon::Minimal
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            TrendIcon::High => "🔴",
            TrendIcon::Medium => "🟡",
            TrendIcon::Low => "🟢",
            TrendIcon::Minimal => "⚪",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TrendIcon::High => "High",
            TrendIcon::Medium => "Medium",
            TrendIcon::Low => "Low",
            TrendIcon::Minimal => "Minimal",
        }
    }

    /// Three-tier label used inside emotion breakdowns, where anything
    /// under 50 reads as low.
    pub fn breakdown_intensity(self) -> &'static str {
        match self {
            TrendIcon::High => "🔴 High",
            TrendIcon::Medium => "🟡 Medium",
            TrendIcon::Low | TrendIcon::Minimal => "🟢 Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendBand {
    Minimal,
    Low,
    Moderate,
    High,
    Peak,
}

impl LegendBand {
    pub const ALL: [LegendBand; 5] = [
        LegendBand::Minimal,
        LegendBand::Low,
        LegendBand::Moderate,
        LegendBand::High,
        LegendBand::Peak,
    ];

    pub fn classify(value: f64) -> Self {
        if value <= 20.0 {
            LegendBand::Minimal
        } else if value <= 40.0 {
            LegendBand::Low
        } else if value <= 60.0 {
            LegendBand::Moderate
        } else if value <= 80.0 {
            LegendBand::High
        } else {
            LegendBand::Peak
        }
    }

    pub fn range(self) -> &'static str {
        match self {
            LegendBand::Minimal => "0-20",
            LegendBand::Low => "21-40",
            LegendBand::Moderate => "41-60",
            LegendBand::High => "61-80",
            LegendBand::Peak => "81-100",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LegendBand::Minimal => "Minimal concern",
            LegendBand::Low => "Low concern",
            LegendBand::Moderate => "Moderate concern",
            LegendBand::High => "High concern",
            LegendBand::Peak => "Peak concern",
        }
    }
}
