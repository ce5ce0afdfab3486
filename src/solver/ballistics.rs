use serde::{Deserialize, Serialize};

use super::calibration::{Calibration, DEGREES_TO_RADIANS};
use super::error::ShotError;

/// A point in the input coordinate space (screen pixels, y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Distance from the launch point to the target. `dx` is never negative and
/// `dy` is positive when the target sits above the launch point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Displacement {
    pub dx: f64,
    pub dy: f64,
}

impl Displacement {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx: dx.abs(), dy }
    }

    pub fn between(start: ScreenPoint, end: ScreenPoint) -> Self {
        Self {
            dx: (end.x - start.x).abs(),
            dy: -(end.y - start.y),
        }
    }
}

/// Power needed to land on `displacement` when launching at `angle_deg`.
///
/// Solves `dy = dx*tan(a) + g*dx^2 / (2*v^2*cos(a)^2)` for `v`, then scales
/// the velocity into power units. The ratio under the root is taken as an
/// absolute value so targets above the launch tangent still produce a power.
pub fn power_for_angle(
    displacement: Displacement,
    angle_deg: i32,
    calibration: &Calibration,
) -> Result<f64, ShotError> {
    let Displacement { dx, dy } = displacement;
    // Both clicks on one vertical line: no arc at any angle.
    if dx == 0.0 {
        return Err(ShotError::DivisionByZero { angle: angle_deg });
    }

    let radians = f64::from(angle_deg) * DEGREES_TO_RADIANS;
    let numerator = -calibration.gravity * dx * dx;
    let denominator = 2.0 * radians.cos().powi(2) * (radians.tan() * dx - dy);
    if denominator == 0.0 {
        return Err(ShotError::DivisionByZero { angle: angle_deg });
    }

    let radicand = (numerator / denominator).abs();
    let power = (-2.0 / (calibration.gravity * calibration.velocity_to_power)) * radicand.sqrt();
    if !power.is_finite() {
        return Err(ShotError::InvalidRadicand { angle: angle_deg });
    }
    Ok(power)
}

/// Launch velocity, in displacement units per second, behind a power value.
pub fn launch_velocity(power: f64, calibration: &Calibration) -> f64 {
    -power * calibration.gravity * calibration.velocity_to_power / 2.0
}

pub fn velocity_components(angle_deg: i32, power: f64, calibration: &Calibration) -> (f64, f64) {
    let theta = f64::from(angle_deg) * DEGREES_TO_RADIANS;
    let speed = launch_velocity(power, calibration);
    (speed * theta.cos(), speed * theta.sin())
}

/// Position relative to the launch point, y up.
pub fn trajectory_at_time(
    angle_deg: i32,
    power: f64,
    calibration: &Calibration,
    time_s: f64,
) -> (f64, f64) {
    let (vx, vy) = velocity_components(angle_deg, power, calibration);
    let x = vx * time_s;
    let y = (vy * time_s) + (0.5 * calibration.gravity * time_s * time_s);
    (x, y)
}

/// Samples the arc from the launch point until it has travelled `range`
/// horizontally.
pub fn sample_trajectory(
    angle_deg: i32,
    power: f64,
    calibration: &Calibration,
    range: f64,
    samples: usize,
) -> Vec<(f64, f64)> {
    let (vx, _) = velocity_components(angle_deg, power, calibration);
    if vx <= 0.0 || !vx.is_finite() || range <= 0.0 {
        return vec![(0.0, 0.0)];
    }

    let time_of_flight_s = range / vx;
    let sample_count = samples.max(2);
    (0..=sample_count)
        .map(|i| {
            let t = (i as f64 * time_of_flight_s) / sample_count as f64;
            trajectory_at_time(angle_deg, power, calibration, t)
        })
        .collect()
}
