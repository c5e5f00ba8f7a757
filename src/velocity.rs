use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Stable,
    Rising,
    Falling,
}

impl Direction {
    pub fn label(self) -> &'static str {
        match self {
            Direction::Stable => "Stable",
            Direction::Rising => "Rising",
            Direction::Falling => "Falling",
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Direction::Stable => "→",
            Direction::Rising => "↑",
            Direction::Falling => "↓",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VelocityReading {
    pub direction: Direction,
    pub magnitude_label: &'static str,
    pub display_velocity: f64,
    pub display_percent: f64,
}

impl VelocityReading {
    /// "→ Stable", or "↑ Rising (+12 pts, +8%)" with explicit signs.
    pub fn indicator(&self) -> String {
        match self.direction {
            Direction::Stable => format!("{} {}", self.direction.arrow(), self.magnitude_label),
            _ => format!(
                "{} {} ({} pts, {}%)",
                self.direction.arrow(),
                self.magnitude_label,
                signed(self.display_velocity),
                signed(self.display_percent)
            ),
        }
    }
}

/// Classify a velocity/percent pair. Zero (the normalized form of an absent
/// velocity) is stable regardless of the percent.
pub fn describe(velocity: f64, velocity_percent: f64) -> VelocityReading {
    let direction = if velocity == 0.0 || velocity.is_nan() {
        Direction::Stable
    } else if velocity > 0.0 {
        Direction::Rising
    } else {
        Direction::Falling
    };

    VelocityReading {
        direction,
        magnitude_label: direction.label(),
        display_velocity: velocity,
        display_percent: velocity_percent,
    }
}

/// Render a number with a leading "+" when positive.
pub fn signed(v: f64) -> String {
    if v > 0.0 {
        format!("+{}", v)
    } else {
        format!("{}", v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0.0, 0.0, Direction::Stable)]
    #[test_case(0.0, 15.0, Direction::Stable)]
    #[test_case(12.0, 8.0, Direction::Rising)]
    #[test_case(-3.0, -2.0, Direction::Falling)]
    fn direction_from_velocity(v: f64, pct: f64, expected: Direction) {
        assert_eq!(describe(v, pct).direction, expected);
    }

    #[test]
    fn indicator_text() {
        assert_eq!(describe(0.0, 0.0).indicator(), "→ Stable");
        assert_eq!(describe(12.0, 8.0).indicator(), "↑ Rising (+12 pts, +8%)");
        assert_eq!(describe(-3.0, -2.5).indicator(), "↓ Falling (-3 pts, -2.5%)");
    }

    #[test]
    fn percent_sign_is_independent() {
        // a rising velocity with a zero percent shows no plus on the percent
        assert_eq!(describe(4.0, 0.0).indicator(), "↑ Rising (+4 pts, 0%)");
    }

    #[test]
    fn label_matches_direction() {
        assert_eq!(describe(12.0, 20.0).magnitude_label, "Rising");
        assert_eq!(describe(-12.0, -20.0).magnitude_label, "Falling");
    }
}
