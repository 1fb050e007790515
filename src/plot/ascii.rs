//! Horizontal bar chart for terminal output.
//!
//! Fixed-width and deterministic, so it works in golden tests and in the
//! plain-text report. Negative values are drawn with `░`.

use crate::domain::Locale;
use crate::plot::ChartBar;
use crate::report::format::compact_axis;

const FILL: char = '█';
const FILL_NEGATIVE: char = '░';

/// Render `bars` with the longest bar spanning `width` columns.
pub fn render_bar_chart(bars: &[ChartBar], width: usize, locale: Locale) -> String {
    let width = width.max(10);
    let label_width = bars.iter().map(|b| b.label.chars().count()).max().unwrap_or(0);
    let max_abs = bars
        .iter()
        .map(|b| b.value.abs())
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);

    let mut out = String::new();
    for bar in bars {
        let pad = label_width - bar.label.chars().count();
        let fill = if bar.value < 0.0 { FILL_NEGATIVE } else { FILL };
        let len = bar_length(bar.value, max_abs, width);

        out.push_str(&bar.label);
        out.extend(std::iter::repeat_n(' ', pad));
        out.push_str(" │");
        out.extend(std::iter::repeat_n(fill, len));
        out.push(' ');
        out.push_str(&compact_axis(bar.value, locale));
        out.push('\n');
    }
    out
}

fn bar_length(value: f64, max_abs: f64, width: usize) -> usize {
    if !value.is_finite() || max_abs <= 0.0 {
        return 0;
    }
    let len = (value.abs() / max_abs * width as f64).round();
    (len as usize).min(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(label: &str, value: f64) -> ChartBar {
        ChartBar {
            label: label.to_string(),
            value,
        }
    }

    #[test]
    fn bar_chart_golden_snapshot() {
        let bars = vec![
            bar("Revenue", 1_000_000.0),
            bar("EBITDA", 250_000.0),
            bar("Estimated Value", 1_500_000.0),
        ];
        let txt = render_bar_chart(&bars, 30, Locale::En);
        let expected = concat!(
            "Revenue         │████████████████████ 1.0M\n",
            "EBITDA          │█████ 250K\n",
            "Estimated Value │██████████████████████████████ 1.5M\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn negative_and_zero_bars() {
        let bars = vec![bar("a", -500.0), bar("b", 1_000.0), bar("c", 0.0)];
        let txt = render_bar_chart(&bars, 10, Locale::En);
        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines[0], "a │░░░░░ -500");
        assert_eq!(lines[1], "b │██████████ 1K");
        assert_eq!(lines[2], "c │ 0");
    }

    #[test]
    fn all_zero_series_draws_no_bars() {
        let txt = render_bar_chart(&[bar("x", 0.0)], 20, Locale::Ar);
        assert_eq!(txt, "x │ ٠\n");
    }
}
