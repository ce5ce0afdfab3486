use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1000;
pub const INITIAL_WINDOW_HEIGHT: i32 = 1000;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const OVERLAY_BG: Color = Color::new(0.0, 0.0, 0.0, 0.0);
pub const CURSOR_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);
pub const LAUNCH_COLOR: Color = Color::new(0.0, 0.8, 0.2, 1.0);
pub const TARGET_COLOR: Color = Color::new(0.95, 0.15, 0.15, 1.0);
pub const ARC_COLOR: Color = Color::new(1.0, 1.0, 1.0, 0.55);
pub const PANEL_BG: Color = Color::new(0.05, 0.06, 0.08, 0.75);

pub const CROSSHAIR_RADIUS: f32 = 15.0;
pub const CROSSHAIR_THICKNESS: f32 = 1.5;
pub const SHOT_LABEL_OFFSET: f32 = 30.0;
pub const SHOT_LABEL_FONT_SIZE: u16 = 30;

pub const PANEL_X: f32 = 16.0;
pub const PANEL_Y: f32 = 16.0;
pub const PANEL_W: f32 = 170.0;
pub const PANEL_LINE_H: f32 = 20.0;
pub const PANEL_FONT_SIZE: u16 = 18;

pub const RESET_BUTTON_W: f32 = 110.0;
pub const RESET_BUTTON_H: f32 = 40.0;
pub const RESET_BUTTON_MARGIN: f32 = 16.0;

pub const ARC_SAMPLES: usize = 96;
