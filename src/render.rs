// src/render.rs
use clap::ValueEnum;
use std::collections::BTreeSet;

use crate::drivers::SelectionKind;
use crate::models::Emotion;
use crate::narrative::round_half_up;
use crate::report::{EmotionBreakdown, RegionReport};
use crate::severity::{LegendBand, TrendIcon};
use crate::velocity::Direction;

/// The two popup variants that sit on top of the same report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PresentationMode {
    /// All five emotions; anxiety and hope expand into a driver breakdown.
    #[default]
    Breakdown,
    /// Anxiety and hope only, followed by the static score legend.
    Legend,
}

impl PresentationMode {
    pub fn emotions(self) -> &'static [Emotion] {
        match self {
            PresentationMode::Breakdown => &Emotion::ALL,
            PresentationMode::Legend => &[Emotion::Anxiety, Emotion::Hope],
        }
    }

    pub fn is_expandable(self, emotion: Emotion) -> bool {
        self == PresentationMode::Breakdown && matches!(emotion, Emotion::Anxiety | Emotion::Hope)
    }
}

/// Which emotion breakdowns are currently shown. Toggling twice hides again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreakdownToggles {
    visible: BTreeSet<Emotion>,
}

impl BreakdownToggles {
    /// Flip visibility; returns whether the breakdown is now shown.
    pub fn toggle(&mut self, emotion: Emotion) -> bool {
        if !self.visible.remove(&emotion) {
            self.visible.insert(emotion);
            true
        } else {
            false
        }
    }

    pub fn is_visible(&self, emotion: Emotion) -> bool {
        self.visible.contains(&emotion)
    }

    pub fn visible(&self) -> impl Iterator<Item = Emotion> + '_ {
        self.visible.iter().copied()
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn comparison_line(label: &str, delta: f64) -> String {
    let (sign, word) = if delta > 0.0 { ("+", "higher") } else { ("", "lower") };
    format!("{}: {}{} pts {}", label, sign, round_half_up(delta), word)
}

pub fn render_breakdown(b: &EmotionBreakdown) -> String {
    let mut out = String::new();
    out.push_str(&format!("What's Driving {}:\n", b.emotion.label()));
    match b.kind {
        SelectionKind::Matched => {
            for e in &b.entries {
                out.push_str(&format!("  - {} {} ({})\n", e.intensity, e.name, e.value));
            }
        }
        SelectionKind::Fallback => {
            out.push_str(&format!("  No specific {}-related concerns detected.\n", b.emotion));
            out.push_str("  Top concerns in general:\n");
            for e in &b.entries {
                out.push_str(&format!("  - {}: {}\n", e.name, e.value));
            }
        }
        SelectionKind::Unavailable => out.push_str("  No detailed breakdown available\n"),
    }
    out
}

pub fn render_legend() -> String {
    let mut out = String::from("## How to Read These Numbers\n");
    out.push_str("Scores are 0-100:\n");
    for band in LegendBand::ALL {
        out.push_str(&format!("- {} = {}\n", band.range(), band.label()));
    }
    out.push_str(&format!(
        "\nIcons: {} High • {} Medium • {} Low\n",
        TrendIcon::High.glyph(),
        TrendIcon::Medium.glyph(),
        TrendIcon::Low.glyph()
    ));
    out.push_str("These show search interest, not absolute numbers. Higher = more people searching.\n");
    out
}

/// Text popup for one region. `breakdowns` holds whichever emotion details
/// the caller chose to show; they are printed under their emotion.
pub fn render_region(r: &RegionReport, mode: PresentationMode, breakdowns: &[EmotionBreakdown]) -> String {
    let mut md = String::new();
    md.push_str(&format!("# {}\n", r.region));
    md.push_str(&format!("{}\n\n", r.narrative));

    md.push_str("## Emotional Snapshot\n");
    for &emotion in mode.emotions() {
        let marker = if mode.is_expandable(emotion) { " [+]" } else { "" };
        md.push_str(&format!(
            "- {} {}: {}{}",
            emotion.emoji(),
            emotion.label(),
            r.emotion(emotion),
            marker
        ));
        if emotion == Emotion::Anxiety && r.velocity.direction != Direction::Stable {
            md.push_str(&format!("  {}", r.velocity.indicator()));
        }
        md.push('\n');
        if let Some(b) = breakdowns.iter().find(|b| b.emotion == emotion) {
            md.push_str(&render_breakdown(b));
        }
    }
    md.push('\n');

    if !r.trending.is_empty() {
        md.push_str("## What's Trending\n");
        for t in &r.trending {
            md.push_str(&format!("{} {}. {} — {}\n", t.icon.glyph(), t.rank, capitalize(&t.name), t.value));
            if !t.related_searches.is_empty() {
                md.push_str("   What people are actually searching:\n");
                for s in &t.related_searches {
                    md.push_str(&format!("   • {}\n", s));
                }
            }
            md.push_str(&format!("   Google Trends: {}\n", t.trends_url));
        }
        md.push('\n');
    }

    md.push_str("## Comparison\n");
    md.push_str("vs. National Average:\n");
    md.push_str(&format!("{}\n", comparison_line("Anxiety", r.comparison.anxiety_delta)));
    md.push_str(&format!("{}\n\n", comparison_line("Hope", r.comparison.hope_delta)));

    if mode == PresentationMode::Legend {
        md.push_str(&render_legend());
        md.push('\n');
    }

    if let Some(w) = &r.observation {
        md.push_str(&format!("{}\n", w.text()));
    }

    md
}

/// One line per region: name and narrative.
pub fn render_overview<'a>(rows: impl IntoIterator<Item = &'a RegionReport>) -> String {
    let mut out = String::new();
    for r in rows {
        out.push_str(&format!("- **{}** — {}\n", r.region, r.narrative));
    }
    out
}
