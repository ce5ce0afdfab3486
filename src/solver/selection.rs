use log::debug;
use serde::{Deserialize, Serialize};

use super::ballistics::{Displacement, power_for_angle};
use super::calibration::{Calibration, POWER_CAP, SelectionRule};
use super::error::ShotError;

/// Absorbs binary representation error so 12.501 reads as digits 501.
const DIGIT_EPSILON: f64 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShotCandidate {
    pub angle: i32,
    pub power: f64,
}

impl ShotCandidate {
    pub fn rounded(self) -> Self {
        Self {
            angle: self.angle,
            power: round_to_hundredths(self.power),
        }
    }
}

/// Outcome of one table angle, playable or not.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleEvaluation {
    pub angle: i32,
    pub power: Result<f64, ShotError>,
}

impl AngleEvaluation {
    pub fn playable(&self) -> bool {
        matches!(self.power, Ok(power) if power < POWER_CAP)
    }
}

pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// First three digits after the decimal point, 0..=999.
pub fn fractional_digits(power: f64) -> u32 {
    let digits = (power.fract().abs() * 1000.0 + DIGIT_EPSILON).trunc();
    digits.clamp(0.0, 999.0) as u32
}

fn distance_from_half(power: f64) -> u32 {
    fractional_digits(power).abs_diff(500)
}

/// Every table angle in order, including the ones that failed or overshoot.
pub fn evaluate_angles(
    displacement: Displacement,
    calibration: &Calibration,
) -> Vec<AngleEvaluation> {
    calibration
        .angles
        .iter()
        .map(|&angle| AngleEvaluation {
            angle,
            power: power_for_angle(displacement, angle, calibration),
        })
        .collect()
}

/// Playable candidates in table order.
pub fn enumerate_candidates(
    displacement: Displacement,
    calibration: &Calibration,
) -> Vec<ShotCandidate> {
    evaluate_angles(displacement, calibration)
        .into_iter()
        .filter_map(|evaluation| match evaluation.power {
            Ok(power) if power < POWER_CAP => Some(ShotCandidate {
                angle: evaluation.angle,
                power,
            }),
            Ok(power) => {
                debug!("dropping {} deg: power {power:.2} over cap", evaluation.angle);
                None
            }
            Err(err) => {
                debug!("dropping {} deg: {err}", evaluation.angle);
                None
            }
        })
        .collect()
}

/// Picks one candidate and rounds its power to two decimals.
///
/// `Literal` ranks candidates by how far the power's fraction sits from .500
/// and keeps the last of that ascending order: the furthest one, and among
/// equals the latest in table order. `NearestHalf` keeps the closest one,
/// earliest in table order on ties.
pub fn select_optimal(
    candidates: &[ShotCandidate],
    rule: SelectionRule,
) -> Result<ShotCandidate, ShotError> {
    let picked = match rule {
        // max_by_key yields the last maximum, same as a stable sort + last.
        SelectionRule::Literal => candidates
            .iter()
            .max_by_key(|candidate| distance_from_half(candidate.power)),
        SelectionRule::NearestHalf => candidates
            .iter()
            .min_by_key(|candidate| distance_from_half(candidate.power)),
    };

    let best = picked.copied().ok_or(ShotError::NoFeasibleShot)?.rounded();
    debug!(
        "selected {} deg at power {:.2} ({} rule, {} candidates)",
        best.angle,
        best.power,
        rule.as_str(),
        candidates.len()
    );
    Ok(best)
}
