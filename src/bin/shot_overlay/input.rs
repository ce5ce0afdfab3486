use macroquad::prelude::*;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) press: Option<Vec2>,
    pub(crate) reset: bool,
    pub(crate) toggle_arc: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            press: self.press.or(other.press),
            reset: self.reset || other.reset,
            toggle_arc: self.toggle_arc || other.toggle_arc,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        press: None,
        reset: is_key_pressed(KeyCode::R) || is_key_pressed(KeyCode::Escape),
        toggle_arc: is_key_pressed(KeyCode::A),
    }
}

/// Left clicks outside the reset button mark gesture points.
pub(crate) fn pointer_actions(mouse_screen: Vec2, reset_button: Rect) -> FrameActions {
    let pressed = is_mouse_button_pressed(MouseButton::Left);
    FrameActions {
        press: (pressed && !reset_button.contains(mouse_screen)).then_some(mouse_screen),
        reset: pressed && reset_button.contains(mouse_screen),
        toggle_arc: false,
    }
}
