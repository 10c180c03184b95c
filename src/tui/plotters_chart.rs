//! Plotters-powered distribution chart widget for Ratatui.
//!
//! One bar per assignment, labeled with its short label. Plotters output is
//! drawn into the Ratatui buffer through `plotters-ratatui-backend`, using the
//! same palette as the exported SVG pie chart.

use plotters::prelude::*;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color as TuiColor, Style},
    widgets::Widget,
};

use crate::io::chart::PALETTE;

/// A render-only chart description; all values are computed by the caller.
pub struct DistributionChart<'a> {
    /// `(short label, points)` pairs in input order.
    pub values: &'a [(String, f64)],
}

impl<'a> Widget for DistributionChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Plotters may fail to lay out a chart in a tiny area; show a hint instead.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(TuiColor::Yellow),
            );
            return;
        }

        let max = self.values.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
        if self.values.is_empty() || !(max > 0.0) {
            return;
        }
        let n = self.values.len() as f64;
        let y1 = max * 1.15;

        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                // Terminal cells are low-res, so keep label areas compact.
                .set_label_area_size(LabelAreaPosition::Left, 6)
                .set_label_area_size(LabelAreaPosition::Bottom, 1)
                .build_cartesian_2d(0.0..n, 0.0..y1)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_labels(0)
                .y_labels(4)
                .y_label_formatter(&|v| format!("{v:.0}"))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .draw()?;

            chart.draw_series(self.values.iter().enumerate().map(|(i, (_, v))| {
                let x = i as f64;
                Rectangle::new(
                    [(x + 0.15, 0.0), (x + 0.85, *v)],
                    PALETTE[i % PALETTE.len()].filled(),
                )
            }))?;

            let label_style = ("sans-serif", 10).into_font().color(&WHITE);
            chart.draw_series(self.values.iter().enumerate().map(|(i, (label, v))| {
                Text::new(label.clone(), (i as f64 + 0.15, *v + max * 0.1), label_style.clone())
            }))?;

            Ok(())
        });

        widget.render(area, buf);
    }
}
