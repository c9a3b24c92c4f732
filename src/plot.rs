use std::ops::Range;
use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;

// ---------------------------------------------------------------------------
// Chart rendering – plotters bitmap backend, one PNG per call
// ---------------------------------------------------------------------------

/// A labeled point series for the error comparison chart.
pub struct Curve {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

impl Curve {
    pub fn new(label: &str, points: Vec<(f64, f64)>) -> Self {
        Curve {
            label: label.to_string(),
            points,
        }
    }
}

const SERIES_COLORS: [RGBColor; 3] = [BLUE, RED, GREEN];

/// Render the solver error comparison: one log-log curve per method, with a
/// legend box naming the methods. Inputs are already log-transformed.
pub fn render_error_comparison(out_path: &Path, curves: &[Curve]) -> Result<()> {
    let (x_range, y_range) =
        padded_ranges(curves.iter().flat_map(|c| c.points.iter().copied()));

    let root = BitMapBackend::new(out_path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Comparison of L2 errors for different solvers",
            ("sans-serif", 24),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc("log time-step")
        .y_desc("log error")
        .draw()?;

    for (i, curve) in curves.iter().enumerate() {
        let color = SERIES_COLORS[i % SERIES_COLORS.len()];
        chart
            .draw_series(LineSeries::new(curve.points.iter().copied(), &color))?
            .label(curve.label.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Render a Van der Pol phase portrait (velocity against position) as a
/// single curve. `mu` is the damping parameter, shown in the title.
pub fn render_phase_portrait(out_path: &Path, points: &[(f64, f64)], mu: f64) -> Result<()> {
    let (x_range, y_range) = padded_ranges(points.iter().copied());

    let root = BitMapBackend::new(out_path, (900, 900)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Van der Pol oscillator (Runge-Kutta 4th Order) mu={mu}"),
            ("sans-serif", 24),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    chart.configure_mesh().x_desc("x").y_desc("y").draw()?;

    chart.draw_series(LineSeries::new(points.iter().copied(), &BLUE))?;

    root.present()?;
    Ok(())
}

// -- Axis helpers --

fn padded_ranges(points: impl Iterator<Item = (f64, f64)>) -> (Range<f64>, Range<f64>) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for (x, y) in points {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    (pad_span(x_min, x_max), pad_span(y_min, y_max))
}

/// 5% padding on each side; degenerate or empty input falls back to a unit
/// span so the chart builder always gets a valid range.
fn pad_span(min: f64, max: f64) -> Range<f64> {
    if !min.is_finite() || !max.is_finite() {
        return -1.0..1.0;
    }
    let span = max - min;
    if span.abs() < 1e-12 {
        return (min - 0.5)..(max + 0.5);
    }
    let pad = span * 0.05;
    (min - pad)..(max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_span_widens_by_five_percent() {
        let r = pad_span(0.0, 10.0);
        assert!((r.start - -0.5).abs() < 1e-12);
        assert!((r.end - 10.5).abs() < 1e-12);
    }

    #[test]
    fn pad_span_handles_degenerate_input() {
        let r = pad_span(3.0, 3.0);
        assert_eq!(r, 2.5..3.5);
        let r = pad_span(f64::INFINITY, f64::NEG_INFINITY);
        assert_eq!(r, -1.0..1.0);
    }

    #[test]
    fn padded_ranges_covers_all_curves() {
        let pts = [(-2.0, 1.0), (4.0, -3.0)];
        let (xr, yr) = padded_ranges(pts.iter().copied());
        assert!(xr.start < -2.0 && xr.end > 4.0);
        assert!(yr.start < -3.0 && yr.end > 1.0);
    }
}
