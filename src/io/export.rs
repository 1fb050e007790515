//! Export a finished valuation.
//!
//! - JSON document: request, result, chart series, generation timestamp
//! - plain-text report: paginated, one page header per page, `n / N` footer,
//!   pages separated by a form feed

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::app::pipeline::RunOutput;
use crate::domain::{Bilingual, Locale, ValuationRequest, ValuationResult};
use crate::error::AppError;
use crate::i18n::{self, Msg};
use crate::plot::ChartBar;
use crate::report::format::{format_integer, localize_digits};
use crate::report::format_result;

/// Content lines per text-report page (header and footer not counted).
pub const PAGE_LINES: usize = 48;
/// Bar chart width embedded in the text report.
pub const REPORT_CHART_WIDTH: usize = 40;

const FORM_FEED: char = '\u{000C}';

/// JSON export schema.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDocument<'a> {
    pub tool: &'static str,
    pub generated_at: DateTime<Utc>,
    pub request: &'a ValuationRequest,
    pub result: &'a ValuationResult,
    pub chart: Bilingual<Vec<ChartBar>>,
}

impl<'a> ReportDocument<'a> {
    pub fn new(run: &'a RunOutput, generated_at: DateTime<Utc>) -> Self {
        Self {
            tool: "valuate",
            generated_at,
            request: &run.request,
            result: &run.result,
            chart: Bilingual::from_fn(|locale| run.chart(locale)),
        }
    }
}

/// Write the JSON report document.
pub fn write_report_json(path: &Path, run: &RunOutput, generated_at: DateTime<Utc>) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create report JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, &ReportDocument::new(run, generated_at))
        .map_err(|e| AppError::new(2, format!("Failed to write report JSON: {e}")))?;

    info!(path = %path.display(), "report JSON written");
    Ok(())
}

/// Write the paginated text report in one locale.
pub fn write_text_report(
    path: &Path,
    run: &RunOutput,
    locale: Locale,
    generated_at: DateTime<Utc>,
) -> Result<(), AppError> {
    let text = render_text_report(run, locale, generated_at, PAGE_LINES);
    let mut file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create report '{}': {e}", path.display())))?;
    file.write_all(text.as_bytes())
        .map_err(|e| AppError::new(2, format!("Failed to write report: {e}")))?;

    info!(path = %path.display(), locale = %locale, "text report written");
    Ok(())
}

/// Render the text report, `page_lines` content lines per page.
pub fn render_text_report(
    run: &RunOutput,
    locale: Locale,
    generated_at: DateTime<Utc>,
    page_lines: usize,
) -> String {
    let page_lines = page_lines.max(1);
    let timestamp = localize_digits(&generated_at.format("%Y-%m-%d %H:%M UTC").to_string(), locale);

    let mut body = i18n::tr(locale, Msg::GeneratedAt, &[("timestamp", timestamp)]);
    body.push_str("\n\n");
    body.push_str(&format_result(&run.request, &run.result, locale, Some(REPORT_CHART_WIDTH)));

    let lines: Vec<&str> = body.lines().collect();
    let chunks: Vec<&[&str]> = lines.chunks(page_lines).collect();
    let total = chunks.len();
    let header = format!(
        "{} | {}",
        i18n::text(locale, Msg::ReportTitle),
        run.request.company_name.trim()
    );

    let pages: Vec<String> = chunks
        .iter()
        .enumerate()
        .map(|(i, chunk)| {
            let mut page = String::new();
            page.push_str(&header);
            page.push_str("\n\n");
            for line in *chunk {
                page.push_str(line);
                page.push('\n');
            }
            page.push('\n');
            page.push_str(&i18n::tr(
                locale,
                Msg::PageFooter,
                &[
                    ("page", format_integer((i + 1) as f64, locale)),
                    ("total", format_integer(total as f64, locale)),
                ],
            ));
            page.push('\n');
            page
        })
        .collect();

    pages.join(&FORM_FEED.to_string())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::app::pipeline::run_valuation;
    use crate::domain::{FinancialInput, MethodId};

    fn run() -> RunOutput {
        run_valuation(
            ValuationRequest {
                company_name: "Acme".to_string(),
                country_code: "US".to_string(),
                sector_id: "retail".to_string(),
                method: MethodId::Multiples,
                currency_code: "USD".to_string(),
                financials: FinancialInput {
                    revenue: Some(1_000_000.0),
                    ebitda: Some(250_000.0),
                    ..FinancialInput::default()
                },
            },
            Locale::En,
        )
        .unwrap()
    }

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap()
    }

    #[test]
    fn json_export_contains_request_result_and_chart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        write_report_json(&path, &run(), at()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(doc["tool"], "valuate");
        assert_eq!(doc["generatedAt"], "2026-03-14T09:30:00Z");
        assert_eq!(doc["request"]["companyName"], "Acme");
        assert_eq!(doc["result"]["estimatedValue"], 800_000.0);
        assert_eq!(doc["chart"]["en"][2]["label"], "Estimated Value");
        assert_eq!(doc["chart"]["ar"].as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn text_report_is_paginated_with_footers() {
        let txt = render_text_report(&run(), Locale::En, at(), 10);
        let pages: Vec<&str> = txt.split(FORM_FEED).collect();
        assert!(pages.len() > 1);

        let total = pages.len();
        for (i, page) in pages.iter().enumerate() {
            assert!(page.starts_with("Company Valuation Report | Acme\n\n"));
            assert!(page.trim_end().ends_with(&format!("{} / {total}", i + 1)));
        }
        assert!(pages[0].contains("Generated: 2026-03-14 09:30 UTC"));
        assert!(txt.contains("Estimated Value: $800,000"));
    }

    #[test]
    fn arabic_text_report_localizes_footer_digits() {
        let txt = render_text_report(&run(), Locale::Ar, at(), PAGE_LINES);
        assert!(txt.contains("٢٠٢٦-٠٣-١٤"));
        let first = txt.split(FORM_FEED).next().unwrap();
        assert!(first.trim_end().starts_with("تقرير تقييم الشركة | Acme"));
        assert!(first.trim_end().contains("١ / "));
    }

    #[test]
    fn text_report_file_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        write_text_report(&path, &run(), Locale::En, at()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("Calculation Details"));
    }
}
