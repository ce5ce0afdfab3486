use log::warn;
use macroquad::miniquad::conf::Platform;
use macroquad::prelude::*;

use shot_finder::config::load_calibration;
use shot_finder::solver::{Calibration, ScreenPoint};

use crate::constants::{
    ARC_COLOR, CURSOR_COLOR, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, LAUNCH_COLOR,
    MSAA_SAMPLES, OVERLAY_BG, TARGET_COLOR, UI_FONT_PATH,
};
use crate::hud::{
    draw_hint, draw_options_panel, draw_reset_button, draw_shot_label, reset_button_rect,
};
use crate::input::{hotkey_actions, pointer_actions};
use crate::render::{draw_crosshair, draw_path, shot_arc, to_screen};
use crate::state::OverlayRuntime;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Shot Finder".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        platform: Platform {
            framebuffer_alpha: true,
            ..Default::default()
        },
        ..Default::default()
    }
}

fn startup_calibration() -> Calibration {
    match load_calibration(None) {
        Ok(calibration) => calibration,
        Err(err) => {
            warn!("{err}. Falling back to built-in calibration.");
            Calibration::default()
        }
    }
}

pub(crate) async fn run() {
    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            warn!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    let mut state = OverlayRuntime::new(startup_calibration());

    loop {
        let screen_w = screen_width();
        let screen_h = screen_height();
        let mouse = mouse_position();
        let mouse_screen = vec2(mouse.0, mouse.1);
        let reset_rect = reset_button_rect(screen_w);

        let actions = hotkey_actions().merge(pointer_actions(mouse_screen, reset_rect));
        if actions.reset {
            state.gesture.reset();
        }
        if actions.toggle_arc {
            state.show_arc = !state.show_arc;
        }
        if let Some(press) = actions.press {
            state
                .gesture
                .press(ScreenPoint::new(f64::from(press.x), f64::from(press.y)));
        }

        clear_background(OVERLAY_BG);
        draw_crosshair(mouse_screen, CURSOR_COLOR);
        if let Some(start) = state.gesture.start() {
            draw_crosshair(to_screen(start), LAUNCH_COLOR);
        }
        if let Some(end) = state.gesture.end() {
            draw_crosshair(to_screen(end), TARGET_COLOR);
        }

        let waiting_for = match (state.gesture.start(), state.gesture.end()) {
            (None, _) => Some("launch point"),
            (Some(_), None) => Some("target point"),
            _ => None,
        };

        if let (Some(start), Some(end)) = (state.gesture.start(), state.gesture.end()) {
            if let Some(solution) = state.gesture.solution(&state.calibration) {
                if let (Ok(shot), true) = (solution, state.show_arc) {
                    let arc = shot_arc(start, end, shot.angle, shot.power, &state.calibration);
                    draw_path(&arc, 2.0, ARC_COLOR);
                }
                draw_shot_label(to_screen(start), solution, ui_font.as_ref());

                let options = state.gesture.options(&state.calibration);
                let selected = solution.ok().map(|shot| shot.angle);
                draw_options_panel(&options, selected, ui_font.as_ref());
            }
        }

        draw_reset_button(reset_rect, mouse_screen, ui_font.as_ref());
        draw_hint(screen_h, waiting_for, ui_font.as_ref());

        next_frame().await;
    }
}
