//! Reporting: narratives, summaries, number formatting, and the terminal view
//! of a finished valuation.

pub mod explain;
pub mod format;
pub mod summary;

use crate::data::{find_country, find_currency, find_sector, method_info};
use crate::domain::{Locale, ScalarField, ValuationRequest, ValuationResult};
use crate::i18n::{self, Msg};
use crate::plot::{chart_series, render_bar_chart};
use crate::report::format::{format_currency, format_integer, format_percent, format_ratio};

/// Render a finished valuation for the terminal.
///
/// `chart_width` adds the key-figures bar chart when set.
pub fn format_result(
    request: &ValuationRequest,
    result: &ValuationResult,
    locale: Locale,
    chart_width: Option<usize>,
) -> String {
    let t = |msg| i18n::text(locale, msg);
    let mut out = String::new();

    let title = t(Msg::ReportTitle);
    out.push_str(title);
    out.push('\n');
    out.push_str(&"=".repeat(title.chars().count()));
    out.push('\n');

    for (label, value) in request_details(request, locale) {
        out.push_str(&labeled(locale, label, value));
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&labeled(
        locale,
        Msg::EstimatedValue,
        format_currency(result.estimated_value, &result.currency_code, locale),
    ));
    out.push('\n');

    if let Some(used) = &result.dcf_inputs_used {
        section(&mut out, t(Msg::DcfInputsTitle));
        let na = || t(Msg::NotAvailable).to_string();
        let rate = |v: Option<f64>| v.map(|v| format_percent(v, locale, 1, 1)).unwrap_or_else(na);
        let rows = [
            (
                Msg::ProjectionYears,
                used.projection_years
                    .map(|y| format_integer(f64::from(y), locale))
                    .unwrap_or_else(na),
            ),
            (Msg::DiscountRate, rate(used.discount_rate)),
            (Msg::TerminalGrowthRate, rate(used.terminal_growth_rate)),
        ];
        for (label, value) in rows {
            out.push_str(&format!("• {}\n", labeled(locale, label, value)));
        }
    }

    if let Some(benchmarks) = &result.benchmarks_used {
        section(&mut out, t(Msg::BenchmarksTitle));
        for (field, value) in benchmarks.supplied() {
            out.push_str(&format!(
                "• {}\n",
                labeled(locale, field.into(), benchmark_value(field, value, locale))
            ));
        }
    }

    section(&mut out, t(Msg::SummaryTitle));
    out.push_str(result.summary.get(locale));
    out.push('\n');

    if let Some(width) = chart_width {
        section(&mut out, t(Msg::ChartTitle));
        out.push_str(&render_bar_chart(&chart_series(request, result, locale), width, locale));
    }

    section(&mut out, t(Msg::CalculationDetails));
    out.push_str(&render_explanation_plain(result.explanation.get(locale)));
    out.push('\n');

    out.push('\n');
    out.push_str(t(Msg::IfrsNote));
    out.push('\n');
    out
}

/// Company, country, sector, method, and currency rows (localized names).
pub fn request_details(request: &ValuationRequest, locale: Locale) -> Vec<(Msg, String)> {
    let country = find_country(&request.country_code)
        .map(|c| c.display_name(locale).to_string())
        .unwrap_or_else(|| request.country_code.clone());
    let sector = find_sector(&request.sector_id)
        .map(|s| s.display_name(locale).to_string())
        .unwrap_or_else(|| request.sector_id.clone());
    let currency = find_currency(&request.currency_code)
        .map(|c| format!("{} ({})", c.display_name(locale), c.symbol_for(locale)))
        .unwrap_or_else(|| request.currency_code.clone());

    vec![
        (Msg::CompanyName, request.company_name.trim().to_string()),
        (Msg::Country, country),
        (Msg::Sector, sector),
        (Msg::Method, method_info(request.method).display_name(locale).to_string()),
        (Msg::Currency, currency),
    ]
}

/// Benchmarks are percentages or plain multiples.
pub fn benchmark_value(field: ScalarField, value: f64, locale: Locale) -> String {
    if field.is_percentage() {
        format_percent(value, locale, 1, 2)
    } else {
        format_ratio(value, locale)
    }
}

/// Strip the narrative markup for plain-text output.
///
/// `**heading**` loses its asterisks, `- ` items become bullets and `  - `
/// items become indented sub-bullets.
pub fn render_explanation_plain(narrative: &str) -> String {
    narrative
        .lines()
        .map(|line| {
            if let Some(rest) = line.strip_prefix("  - ") {
                format!("    ◦ {rest}")
            } else if let Some(rest) = line.strip_prefix("- ") {
                format!("  • {rest}")
            } else if let Some(heading) = line.strip_prefix("**").and_then(|l| l.strip_suffix("**")) {
                heading.to_string()
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn labeled(locale: Locale, label: Msg, value: String) -> String {
    i18n::tr(
        locale,
        Msg::LabeledValue,
        &[("label", i18n::text(locale, label).to_string()), ("value", value)],
    )
}

fn section(out: &mut String, title: &str) {
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(&"-".repeat(title.chars().count()));
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_rendering_strips_markup() {
        let narrative = "Intro\n\n**Step 1: Net Assets**\n- Total Assets: $2\n  - nested";
        assert_eq!(
            render_explanation_plain(narrative),
            "Intro\n\nStep 1: Net Assets\n  • Total Assets: $2\n    ◦ nested"
        );
    }

    #[test]
    fn benchmark_values_use_percent_only_for_rates() {
        assert_eq!(benchmark_value(ScalarField::SectorGrowthRate, 3.5, Locale::En), "3.5%");
        assert_eq!(benchmark_value(ScalarField::IndustryPeRatio, 12.0, Locale::En), "12");
        assert_eq!(benchmark_value(ScalarField::IndustryPeRatio, 6.25, Locale::Ar), "٦٫٢٥");
    }
}
