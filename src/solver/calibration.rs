use serde::{Deserialize, Serialize};

/// Degrees to radians as the game model was tuned with it. Not `to_radians()`.
pub const DEGREES_TO_RADIANS: f64 = 0.01745329;

/// Shots at or above this power overshoot the game's power bar.
pub const POWER_CAP: f64 = 100.0;

pub const DEFAULT_GRAVITY: f64 = -297.0; // found by trial until shots landed
pub const DEFAULT_VELOCITY_TO_POWER: f64 = 0.0518718; // slope of the power/time line
pub const DEFAULT_MIN_ANGLE_DEG: i32 = 60;
pub const DEFAULT_MAX_ANGLE_DEG: i32 = 87;

/// How one shot is picked when several angles are playable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionRule {
    /// Sort by distance of the power's fraction from .500 and take the last
    /// entry, i.e. the one furthest from .500. Matches the shots the overlay
    /// has always printed.
    #[default]
    Literal,
    /// Take the power whose fraction is closest to .500.
    NearestHalf,
}

impl SelectionRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionRule::Literal => "literal",
            SelectionRule::NearestHalf => "nearest-half",
        }
    }
}

/// Curve-fit constants of the game's shot model. Built once at start-up and
/// only ever read afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Calibration {
    pub gravity: f64,
    pub velocity_to_power: f64,
    pub angles: Vec<i32>,
    pub selection: SelectionRule,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            velocity_to_power: DEFAULT_VELOCITY_TO_POWER,
            angles: (DEFAULT_MIN_ANGLE_DEG..=DEFAULT_MAX_ANGLE_DEG).collect(),
            selection: SelectionRule::default(),
        }
    }
}

impl Calibration {
    pub fn with_selection(mut self, selection: SelectionRule) -> Self {
        self.selection = selection;
        self
    }

    /// Checks the constants describe a usable model.
    pub fn validate(&self) -> Result<(), String> {
        if !self.gravity.is_finite() || self.gravity >= 0.0 {
            return Err(format!(
                "gravity must be a finite negative number, got {}",
                self.gravity
            ));
        }
        if !self.velocity_to_power.is_finite() || self.velocity_to_power <= 0.0 {
            return Err(format!(
                "velocity_to_power must be a finite positive number, got {}",
                self.velocity_to_power
            ));
        }
        if self.angles.is_empty() {
            return Err("angle table is empty".to_string());
        }
        if let Some(bad) = self.angles.iter().find(|a| **a <= 0 || **a >= 90) {
            return Err(format!(
                "angle {bad} is outside the open range (0, 90) degrees"
            ));
        }
        if let Some(pair) = self.angles.windows(2).find(|w| w[0] >= w[1]) {
            return Err(format!(
                "angle table must be strictly ascending, found {} before {}",
                pair[0], pair[1]
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Calibration, SelectionRule};

    #[test]
    fn default_table_spans_sixty_to_eighty_seven() {
        let calibration = Calibration::default();
        assert_eq!(calibration.angles.len(), 28);
        assert_eq!(calibration.angles.first(), Some(&60));
        assert_eq!(calibration.angles.last(), Some(&87));
        assert!(calibration.angles.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(calibration.selection, SelectionRule::Literal);
        calibration.validate().expect("defaults should validate");
    }

    #[test]
    fn rejects_positive_gravity() {
        let calibration = Calibration {
            gravity: 9.8,
            ..Calibration::default()
        };
        let err = calibration.validate().expect_err("should fail");
        assert!(err.contains("gravity"));
    }

    #[test]
    fn rejects_right_angle() {
        let calibration = Calibration {
            angles: vec![60, 90],
            ..Calibration::default()
        };
        let err = calibration.validate().expect_err("should fail");
        assert!(err.contains("angle 90"));
    }

    #[test]
    fn rejects_unordered_or_repeated_angles() {
        let repeated = Calibration {
            angles: vec![60, 70, 70, 84],
            ..Calibration::default()
        };
        let err = repeated.validate().expect_err("should fail");
        assert!(err.contains("found 70 before 70"), "{err}");

        let descending = Calibration {
            angles: vec![84, 60],
            ..Calibration::default()
        };
        assert!(descending.validate().is_err());
    }

    #[test]
    fn rejects_empty_table() {
        let calibration = Calibration {
            angles: vec![],
            ..Calibration::default()
        };
        assert!(calibration.validate().is_err());
    }
}
