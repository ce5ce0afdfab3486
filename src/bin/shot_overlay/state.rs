use shot_finder::solver::Calibration;
use shot_finder::GestureState;

pub(crate) struct OverlayRuntime {
    pub(crate) calibration: Calibration,
    pub(crate) gesture: GestureState,
    pub(crate) show_arc: bool,
}

impl OverlayRuntime {
    pub(crate) fn new(calibration: Calibration) -> Self {
        Self {
            calibration,
            gesture: GestureState::new(),
            show_arc: true,
        }
    }
}
