use log::info;

use crate::solver::{
    Calibration, Displacement, ScreenPoint, ShotCandidate, ShotError, shot_options, solve,
};

/// Two-click aiming gesture owned by the front-end.
#[derive(Clone, Debug, Default)]
pub struct GestureState {
    start: Option<ScreenPoint>,
    end: Option<ScreenPoint>,
    solution: Option<Result<ShotCandidate, ShotError>>,
}

impl GestureState {
    pub fn new() -> Self {
        Self::default()
    }

    /// First press marks the launch point, second marks the target. Returns
    /// whether the press was used.
    pub fn press(&mut self, point: ScreenPoint) -> bool {
        if self.start.is_none() {
            info!("launch point at ({:.0}, {:.0})", point.x, point.y);
            self.start = Some(point);
            return true;
        }
        if self.end.is_none() {
            info!("target point at ({:.0}, {:.0})", point.x, point.y);
            self.end = Some(point);
            return true;
        }
        false
    }

    pub fn start(&self) -> Option<ScreenPoint> {
        self.start
    }

    pub fn end(&self) -> Option<ScreenPoint> {
        self.end
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    pub fn displacement(&self) -> Option<Displacement> {
        Some(Displacement::between(self.start?, self.end?))
    }

    /// Solves once per gesture; later calls return the cached outcome.
    pub fn solution(
        &mut self,
        calibration: &Calibration,
    ) -> Option<Result<ShotCandidate, ShotError>> {
        if self.solution.is_none() {
            let displacement = self.displacement()?;
            let outcome = solve(displacement, calibration);
            match outcome {
                Ok(shot) => info!(
                    "dx {:.0}, dy {:.0} -> {} deg at power {:.2}",
                    displacement.dx, displacement.dy, shot.angle, shot.power
                ),
                Err(err) => info!("dx {:.0}, dy {:.0} -> {err}", displacement.dx, displacement.dy),
            }
            self.solution = Some(outcome);
        }
        self.solution
    }

    pub fn options(&self, calibration: &Calibration) -> Vec<ShotCandidate> {
        self.displacement()
            .map(|displacement| shot_options(displacement, calibration))
            .unwrap_or_default()
    }

    pub fn reset(&mut self) {
        self.start = None;
        self.end = None;
        self.solution = None;
    }
}
