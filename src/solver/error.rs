use std::error::Error;
use std::fmt;

/// Failures of the shot solver. The per-angle variants are recovered inside
/// enumeration; only `NoFeasibleShot` reaches callers of `solve`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShotError {
    DivisionByZero { angle: i32 },
    InvalidRadicand { angle: i32 },
    NoFeasibleShot,
}

impl fmt::Display for ShotError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ShotError::DivisionByZero { angle } => {
                write!(f, "degenerate trajectory at {angle} deg (division by zero)")
            }
            ShotError::InvalidRadicand { angle } => {
                write!(f, "no real launch velocity at {angle} deg")
            }
            ShotError::NoFeasibleShot => write!(f, "no valid shot"),
        }
    }
}

impl Error for ShotError {}
