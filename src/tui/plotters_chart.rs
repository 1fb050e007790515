//! Plotters-powered bar chart widget for Ratatui.
//!
//! Plotters output is rendered into the Ratatui buffer using
//! `plotters-ratatui-backend`.

use plotters::prelude::*;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color as TuiColor, Style},
    widgets::Widget,
};

use crate::domain::Locale;
use crate::plot::ChartBar;
use crate::report::format::compact_axis;

/// Render-only description of the key-figures chart.
///
/// Bounds are computed by [`value_bounds`] outside the render call.
pub struct ValuationBarChart<'a> {
    pub bars: &'a [ChartBar],
    /// Y bounds (currency units).
    pub y_bounds: [f64; 2],
    pub locale: Locale,
    /// Axis and label color.
    pub axis_color: RGBColor,
    /// Fill for positive bars; the last bar (estimated value) uses `highlight`.
    pub fill: RGBColor,
    pub highlight: RGBColor,
    pub negative: RGBColor,
}

impl<'a> Widget for ValuationBarChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Plotters may fail to lay out a chart in a tiny area; show a hint instead.
        if area.width < 20 || area.height < 8 {
            buf.set_string(area.x, area.y, "…", Style::default().fg(TuiColor::Yellow));
            return;
        }

        let [y0, y1] = self.y_bounds;
        if self.bars.is_empty() || !(y0.is_finite() && y1.is_finite()) || y1 <= y0 {
            return;
        }
        let x1 = self.bars.len() as f64;
        let locale = self.locale;
        let last = self.bars.len() - 1;

        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                .set_label_area_size(LabelAreaPosition::Left, 7)
                .set_label_area_size(LabelAreaPosition::Bottom, 1)
                .build_cartesian_2d(0.0..x1, y0..y1)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_labels(0)
                .y_labels(5)
                .y_label_formatter(&|v| compact_axis(*v, locale))
                .label_style(("sans-serif", 10).into_font().color(&self.axis_color))
                .axis_style(&self.axis_color)
                .draw()?;

            chart.draw_series(self.bars.iter().enumerate().map(|(i, bar)| {
                let color = if bar.value < 0.0 {
                    self.negative
                } else if i == last {
                    self.highlight
                } else {
                    self.fill
                };
                let x = i as f64;
                Rectangle::new([(x + 0.15, 0.0), (x + 0.85, bar.value)], color.filled())
            }))?;

            Ok(())
        });

        widget.render(area, buf);
    }
}

/// Y range covering every bar and zero, padded 10% at the far end(s).
pub fn value_bounds(bars: &[ChartBar]) -> [f64; 2] {
    let (mut lo, mut hi) = (0.0_f64, 0.0_f64);
    for bar in bars.iter().filter(|b| b.value.is_finite()) {
        lo = lo.min(bar.value);
        hi = hi.max(bar.value);
    }
    if hi <= lo {
        return [0.0, 1.0];
    }
    let pad = (hi - lo) * 0.1;
    [if lo < 0.0 { lo - pad } else { 0.0 }, if hi > 0.0 { hi + pad } else { 0.0 }]
}
