//! Finds the launch angle and power that carry a shot between two marked
//! screen points under the game's curve-fit trajectory model.

pub mod chart;
pub mod config;
pub mod gesture;
pub mod logging;
pub mod solver;

pub use gesture::GestureState;
pub use solver::{
    Calibration, Displacement, ScreenPoint, SelectionRule, ShotCandidate, ShotError, solve,
};
