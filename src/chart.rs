//! Power-by-angle chart export.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use crate::solver::{AngleEvaluation, Calibration, Displacement, POWER_CAP, evaluate_angles, solve};

pub const CHART_WIDTH: u32 = 960;
pub const CHART_HEIGHT: u32 = 540;

const ANGLE_PADDING_DEG: f64 = 1.0;
const POWER_PADDING_RATIO: f64 = 0.10;
// Steep angles can ask for absurd powers; don't let them flatten the chart.
const MAX_POWER_SPAN: f64 = 2.0 * POWER_CAP;

/// (angle, power) for every angle that produced a power, over the cap or not.
pub fn chart_series(evaluations: &[AngleEvaluation]) -> Vec<(i32, f64)> {
    evaluations
        .iter()
        .filter_map(|e| e.power.ok().map(|power| (e.angle, power)))
        .collect()
}

/// Axis ranges `(angle_min, angle_max, power_max)`; the power axis always
/// shows the cap.
pub fn chart_window(series: &[(i32, f64)]) -> (f64, f64, f64) {
    let (min_angle, max_angle) = series.iter().fold((f64::MAX, f64::MIN), |(lo, hi), (a, _)| {
        (lo.min(f64::from(*a)), hi.max(f64::from(*a)))
    });
    let (min_angle, max_angle) = if series.is_empty() {
        (0.0, 90.0)
    } else {
        (min_angle, max_angle)
    };

    let raw_max_power = series.iter().fold(0.0f64, |acc, (_, p)| acc.max(*p));
    let power_span = raw_max_power.clamp(POWER_CAP, MAX_POWER_SPAN);

    (
        min_angle - ANGLE_PADDING_DEG,
        max_angle + ANGLE_PADDING_DEG,
        power_span * (1.0 + POWER_PADDING_RATIO),
    )
}

/// Renders the candidate table as an SVG chart: playable powers in blue,
/// overshooting ones in red, the cap as a red line and the selected shot in
/// green.
pub fn write_power_chart(
    path: &Path,
    displacement: Displacement,
    calibration: &Calibration,
) -> Result<(), Box<dyn Error>> {
    let evaluations = evaluate_angles(displacement, calibration);
    let series = chart_series(&evaluations);
    let (x_lo, x_hi, y_hi) = chart_window(&series);

    let root = SVGBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!(
                "Power by angle (dx {:.0}, dy {:.0})",
                displacement.dx, displacement.dy
            ),
            ("sans-serif", 24),
        )
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(56)
        .build_cartesian_2d(x_lo..x_hi, 0f64..y_hi)?;

    chart
        .configure_mesh()
        .x_desc("Angle (deg)")
        .y_desc("Power")
        .draw()?;

    chart.draw_series(LineSeries::new(
        vec![(x_lo, POWER_CAP), (x_hi, POWER_CAP)],
        &RED,
    ))?;
    chart.draw_series(LineSeries::new(
        series.iter().map(|&(angle, power)| (f64::from(angle), power)),
        &BLUE,
    ))?;
    chart.draw_series(series.iter().map(|&(angle, power)| {
        let style = if power < POWER_CAP {
            BLUE.filled()
        } else {
            RED.filled()
        };
        Circle::new((f64::from(angle), power), 4, style)
    }))?;

    if let Ok(best) = solve(displacement, calibration) {
        chart.draw_series(std::iter::once(Circle::new(
            (f64::from(best.angle), best.power),
            7,
            GREEN.filled(),
        )))?;
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{chart_series, chart_window, write_power_chart};
    use crate::solver::{Calibration, Displacement, evaluate_angles};

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    #[test]
    fn series_keeps_over_cap_angles() {
        let evaluations = evaluate_angles(Displacement::new(400.0, 100.0), &Calibration::default());
        let series = chart_series(&evaluations);
        assert_eq!(series.len(), 28);
        assert_eq!(series[0].0, 60);
        assert_eq!(series[27].0, 87);
    }

    #[test]
    fn series_skips_failed_angles() {
        let evaluations = evaluate_angles(Displacement::new(0.0, 50.0), &Calibration::default());
        assert!(chart_series(&evaluations).is_empty());
    }

    #[test]
    fn window_pads_angles_and_clamps_power() {
        let (lo, hi, top) = chart_window(&[(60, 52.0), (87, 139.3)]);
        assert_close(lo, 59.0, 1e-12);
        assert_close(hi, 88.0, 1e-12);
        assert_close(top, 139.3 * 1.1, 1e-9);

        let (_, _, top) = chart_window(&[(60, 20.0)]);
        assert_close(top, 110.0, 1e-9);

        let (_, _, top) = chart_window(&[(60, 5000.0)]);
        assert_close(top, 220.0, 1e-9);
    }

    #[test]
    fn empty_window_spans_quarter_circle() {
        let (lo, hi, top) = chart_window(&[]);
        assert_close(lo, -1.0, 1e-12);
        assert_close(hi, 91.0, 1e-12);
        assert_close(top, 110.0, 1e-9);
    }

    #[test]
    fn unwritable_chart_path_is_an_error() {
        let result = write_power_chart(
            Path::new("/nonexistent/shot_finder/chart.svg"),
            Displacement::new(400.0, 100.0),
            &Calibration::default(),
        );
        assert!(result.is_err());
    }
}
