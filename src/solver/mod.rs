//! Angle/power solver for the game's curve-fit shot model.
//!
//! Everything here is a pure function of a [`Displacement`] and a
//! [`Calibration`]; callers own all state.

mod ballistics;
mod calibration;
mod error;
mod selection;

pub use ballistics::{
    Displacement, ScreenPoint, launch_velocity, power_for_angle, sample_trajectory,
    trajectory_at_time, velocity_components,
};
pub use calibration::{
    Calibration, DEFAULT_GRAVITY, DEFAULT_MAX_ANGLE_DEG, DEFAULT_MIN_ANGLE_DEG,
    DEFAULT_VELOCITY_TO_POWER, DEGREES_TO_RADIANS, POWER_CAP, SelectionRule,
};
pub use error::ShotError;
pub use selection::{
    AngleEvaluation, ShotCandidate, enumerate_candidates, evaluate_angles, fractional_digits,
    round_to_hundredths, select_optimal,
};

/// Best playable shot for `displacement`, power rounded to two decimals.
pub fn solve(
    displacement: Displacement,
    calibration: &Calibration,
) -> Result<ShotCandidate, ShotError> {
    let candidates = enumerate_candidates(displacement, calibration);
    select_optimal(&candidates, calibration.selection)
}

/// Playable candidates with powers rounded for display.
pub fn shot_options(displacement: Displacement, calibration: &Calibration) -> Vec<ShotCandidate> {
    enumerate_candidates(displacement, calibration)
        .into_iter()
        .map(ShotCandidate::rounded)
        .collect()
}
