//! SVG pie chart of the point distribution.
//!
//! Rendered with Plotters' `SVGBackend`, which writes labels as `<text>`
//! elements and so needs no font backend.

use std::path::Path;

use plotters::element::Pie;
use plotters::prelude::*;

use crate::error::AppError;

/// Chart canvas size in pixels.
pub const CHART_SIZE: (u32, u32) = (700, 700);

/// Slice colors, cycled when there are more slices than entries.
pub(crate) const PALETTE: [RGBColor; 8] = [
    RGBColor(66, 133, 244),
    RGBColor(219, 68, 55),
    RGBColor(244, 180, 0),
    RGBColor(15, 157, 88),
    RGBColor(171, 71, 188),
    RGBColor(0, 172, 193),
    RGBColor(255, 112, 67),
    RGBColor(158, 157, 36),
];

/// Draw a pie chart with one slice per `(label, value)` pair.
///
/// Fails when there is nothing positive to draw.
pub fn write_pie_chart(path: &Path, values: &[(String, f64)]) -> Result<(), AppError> {
    let total: f64 = values.iter().map(|(_, v)| *v).sum();
    if values.is_empty() || !(total > 0.0) {
        return Err(AppError::runtime("Nothing to chart: no assignments with points."));
    }

    let labels: Vec<String> = values.iter().map(|(l, _)| l.clone()).collect();
    let sizes: Vec<f64> = values.iter().map(|(_, v)| *v).collect();
    let colors: Vec<RGBColor> = (0..values.len()).map(|i| PALETTE[i % PALETTE.len()]).collect();

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| AppError::runtime(format!("Failed to draw chart: {e}")))?;

    let (w, h) = root.dim_in_pixel();
    let center = (w as i32 / 2, h as i32 / 2);
    let radius = f64::from(w.min(h)) * 0.35;

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(-90.0);
    pie.label_style(("sans-serif", 18).into_font().color(&BLACK));
    pie.percentages(("sans-serif", 14).into_font().color(&WHITE));

    root.draw(&pie)
        .map_err(|e| AppError::runtime(format!("Failed to draw chart: {e}")))?;
    root.present().map_err(|e| {
        AppError::runtime(format!("Failed to write chart '{}': {e}", path.display()))
    })?;

    tracing::info!(path = %path.display(), slices = values.len(), "wrote chart");
    Ok(())
}
