use macroquad::prelude::*;

use shot_finder::solver::{ShotCandidate, ShotError};

use crate::constants::{
    PANEL_BG, PANEL_FONT_SIZE, PANEL_LINE_H, PANEL_W, PANEL_X, PANEL_Y, RESET_BUTTON_H,
    RESET_BUTTON_MARGIN, RESET_BUTTON_W, SHOT_LABEL_FONT_SIZE, SHOT_LABEL_OFFSET,
};
use crate::render::draw_ui_text;

pub(crate) fn reset_button_rect(screen_w: f32) -> Rect {
    Rect::new(
        screen_w - RESET_BUTTON_W - RESET_BUTTON_MARGIN,
        RESET_BUTTON_MARGIN,
        RESET_BUTTON_W,
        RESET_BUTTON_H,
    )
}

pub(crate) fn shot_label(solution: Result<ShotCandidate, ShotError>) -> String {
    match solution {
        Ok(shot) => format!("{:.2} @ {} deg", shot.power, shot.angle),
        Err(err) => err.to_string(),
    }
}

/// Power and angle next to the launch crosshair.
pub(crate) fn draw_shot_label(
    launch: Vec2,
    solution: Result<ShotCandidate, ShotError>,
    font: Option<&Font>,
) {
    let color = if solution.is_ok() { WHITE } else { ORANGE };
    draw_ui_text(
        &shot_label(solution),
        launch.x + SHOT_LABEL_OFFSET,
        launch.y + SHOT_LABEL_OFFSET,
        SHOT_LABEL_FONT_SIZE,
        color,
        font,
    );
}

/// "Angle | Power" list of every playable option.
pub(crate) fn draw_options_panel(
    options: &[ShotCandidate],
    selected: Option<i32>,
    font: Option<&Font>,
) {
    let rows = options.len().max(1) as f32 + 2.0;
    draw_rectangle(
        PANEL_X,
        PANEL_Y,
        PANEL_W,
        rows * PANEL_LINE_H + 8.0,
        PANEL_BG,
    );

    let mut y = PANEL_Y + PANEL_LINE_H;
    draw_ui_text("Angle | Power", PANEL_X + 10.0, y, PANEL_FONT_SIZE, WHITE, font);
    y += PANEL_LINE_H * 1.5;

    if options.is_empty() {
        draw_ui_text("none", PANEL_X + 10.0, y, PANEL_FONT_SIZE, LIGHTGRAY, font);
        return;
    }
    for option in options {
        let color = if Some(option.angle) == selected {
            GREEN
        } else {
            LIGHTGRAY
        };
        draw_ui_text(
            &format!("({}, {:.2})", option.angle, option.power),
            PANEL_X + 10.0,
            y,
            PANEL_FONT_SIZE,
            color,
            font,
        );
        y += PANEL_LINE_H;
    }
}

pub(crate) fn draw_hint(screen_h: f32, waiting_for: Option<&str>, font: Option<&Font>) {
    let text = match waiting_for {
        Some(step) => format!("Click the {step} | R reset | A toggle arc"),
        None => "R reset | A toggle arc".to_string(),
    };
    draw_ui_text(&text, PANEL_X, screen_h - 16.0, 18, LIGHTGRAY, font);
}

pub(crate) fn draw_reset_button(button_rect: Rect, mouse_screen: Vec2, font: Option<&Font>) {
    let hovered = button_rect.contains(mouse_screen);
    let fill = if hovered {
        Color::from_rgba(37, 99, 235, 255)
    } else {
        Color::from_rgba(29, 78, 216, 255)
    };
    draw_rectangle(
        button_rect.x,
        button_rect.y,
        button_rect.w,
        button_rect.h,
        fill,
    );
    draw_rectangle_lines(
        button_rect.x,
        button_rect.y,
        button_rect.w,
        button_rect.h,
        2.0,
        WHITE,
    );

    let label = "Reset";
    let size = measure_text(label, font, 24, 1.0);
    draw_ui_text(
        label,
        button_rect.x + ((button_rect.w - size.width) * 0.5),
        button_rect.y + ((button_rect.h + size.height) * 0.5) - 3.0,
        24,
        WHITE,
        font,
    );
}
