use macroquad::prelude::*;

use shot_finder::solver::{Calibration, ScreenPoint, sample_trajectory};

use crate::constants::{ARC_SAMPLES, CROSSHAIR_RADIUS, CROSSHAIR_THICKNESS};

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn to_screen(point: ScreenPoint) -> Vec2 {
    vec2(point.x as f32, point.y as f32)
}

pub(crate) fn draw_crosshair(center: Vec2, color: Color) {
    let r = CROSSHAIR_RADIUS;
    draw_circle_lines(center.x, center.y, r, CROSSHAIR_THICKNESS, color);
    draw_line(
        center.x - r,
        center.y,
        center.x + r,
        center.y,
        CROSSHAIR_THICKNESS,
        color,
    );
    draw_line(
        center.x,
        center.y - r,
        center.x,
        center.y + r,
        CROSSHAIR_THICKNESS,
        color,
    );
}

/// Screen-space arc from `start` toward `end` for the given shot. The model
/// works with y up and a non-negative range, so the samples are flipped back
/// into screen orientation here.
pub(crate) fn shot_arc(
    start: ScreenPoint,
    end: ScreenPoint,
    angle_deg: i32,
    power: f64,
    calibration: &Calibration,
) -> Vec<Vec2> {
    let direction = if end.x >= start.x { 1.0 } else { -1.0 };
    let range = (end.x - start.x).abs();
    sample_trajectory(angle_deg, power, calibration, range, ARC_SAMPLES)
        .into_iter()
        .map(|(x, y)| vec2((start.x + direction * x) as f32, (start.y - y) as f32))
        .collect()
}

pub(crate) fn draw_path(points: &[Vec2], thickness: f32, color: Color) {
    for segment in points.windows(2) {
        draw_line(
            segment[0].x,
            segment[0].y,
            segment[1].x,
            segment[1].y,
            thickness,
            color,
        );
    }
}
