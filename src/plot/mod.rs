//! Chart series for a computed valuation.
//!
//! The same bars feed the ASCII chart (`ascii`), the TUI chart widget, and
//! the report export.

pub mod ascii;

pub use ascii::render_bar_chart;

use serde::Serialize;

use crate::domain::{Locale, MethodId, ScalarField, ValuationRequest, ValuationResult};
use crate::i18n::{self, Msg};
use crate::report::format::format_integer;

/// One labeled bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBar {
    pub label: String,
    pub value: f64,
}

/// Bars shown next to a result.
///
/// - DCF: one bar per projected FCF year, then the estimated value
/// - otherwise: revenue, EBITDA, estimated value
///
/// Absent figures are drawn as zero.
pub fn chart_series(request: &ValuationRequest, result: &ValuationResult, locale: Locale) -> Vec<ChartBar> {
    let financials = &request.financials;
    let mut bars = Vec::new();

    match result.method {
        MethodId::Dcf => {
            let fcf = financials
                .dcf
                .as_ref()
                .map(|d| d.projected_fcf.as_slice())
                .unwrap_or_default();
            for (i, value) in fcf.iter().enumerate() {
                let year = format_integer((i + 1) as f64, locale);
                bars.push(ChartBar {
                    label: i18n::tr(locale, Msg::ChartFcfYear, &[("year", year)]),
                    value: value.unwrap_or(0.0),
                });
            }
        }
        _ => {
            for field in [ScalarField::Revenue, ScalarField::Ebitda] {
                bars.push(ChartBar {
                    label: i18n::text(locale, field.into()).to_string(),
                    value: financials.get(field).unwrap_or(0.0),
                });
            }
        }
    }

    bars.push(ChartBar {
        label: i18n::text(locale, Msg::EstimatedValue).to_string(),
        value: result.estimated_value,
    });
    bars
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Bilingual, BookTrace, DcfInput, FinancialInput, FloorCheck, Trace};

    fn result(method: MethodId, value: f64) -> ValuationResult {
        ValuationResult {
            estimated_value: value,
            currency_code: "USD".to_string(),
            method,
            summary: Bilingual::from_fn(|_| String::new()),
            explanation: Bilingual::from_fn(|_| String::new()),
            dcf_inputs_used: None,
            benchmarks_used: None,
            trace: Trace::Book(BookTrace {
                total_assets: 0.0,
                total_liabilities: 0.0,
                book_value: 0.0,
                floor: FloorCheck {
                    minimum: 1_000.0,
                    applied: false,
                },
                final_value: value,
            }),
        }
    }

    fn request(method: MethodId, financials: FinancialInput) -> ValuationRequest {
        ValuationRequest {
            company_name: "Acme".to_string(),
            country_code: "US".to_string(),
            sector_id: "retail".to_string(),
            method,
            currency_code: "USD".to_string(),
            financials,
        }
    }

    #[test]
    fn non_dcf_series_defaults_missing_figures_to_zero() {
        let req = request(
            MethodId::Multiples,
            FinancialInput {
                revenue: Some(1_000_000.0),
                ..FinancialInput::default()
            },
        );
        let bars = chart_series(&req, &result(MethodId::Multiples, 800_000.0), Locale::En);
        let labels: Vec<&str> = bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["Revenue", "EBITDA", "Estimated Value"]);
        assert_eq!(bars[1].value, 0.0);
        assert_eq!(bars[2].value, 800_000.0);
    }

    #[test]
    fn dcf_series_lists_each_year_then_value() {
        let req = request(
            MethodId::Dcf,
            FinancialInput {
                dcf: Some(DcfInput {
                    projection_years: Some(2),
                    projected_fcf: vec![Some(100.0), None],
                    discount_rate: Some(10.0),
                    terminal_growth_rate: Some(2.0),
                }),
                ..FinancialInput::default()
            },
        );
        let bars = chart_series(&req, &result(MethodId::Dcf, 50_000.0), Locale::Ar);
        assert_eq!(bars.len(), 3);
        assert_eq!(bars[0].label, "تدفق س١");
        assert_eq!(bars[1].value, 0.0);
        assert_eq!(bars[2].label, "القيمة المقدرة");
    }
}
