//! Shared valuation pipeline used by the CLI, the wizard, and the TUI.
//!
//! request -> strict validation -> engine -> narratives + summary -> result
//!
//! Front-ends only decide how to present the [`ValuationResult`].

use tracing::info;

use crate::domain::{DcfInputsUsed, Locale, MethodId, ValuationRequest, ValuationResult};
use crate::engine::{self, validate::validate_request};
use crate::error::{AppError, ValuationError};
use crate::plot::{ChartBar, chart_series};
use crate::report::{explain, summary};

/// Everything a front-end needs to display one valuation.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub request: ValuationRequest,
    pub result: ValuationResult,
}

impl RunOutput {
    pub fn chart(&self, locale: Locale) -> Vec<ChartBar> {
        chart_series(&self.request, &self.result, locale)
    }
}

/// Validate and compute a request, producing both narratives.
pub fn valuate(request: &ValuationRequest) -> Result<ValuationResult, ValuationError> {
    validate_request(request)?;

    let financials = &request.financials;
    let computation = engine::compute(request.method, financials, &request.currency_code)?;

    let explanation = explain::build(
        &computation.trace,
        &explain::ExplainContext {
            currency_code: &request.currency_code,
            financials,
        },
    );
    let summary = summary::build(request, computation.estimated_value);

    let dcf_inputs_used = match (request.method, &financials.dcf) {
        (MethodId::Dcf, Some(dcf)) => Some(DcfInputsUsed {
            projection_years: dcf.projection_years,
            discount_rate: dcf.discount_rate,
            terminal_growth_rate: dcf.terminal_growth_rate,
        }),
        _ => None,
    };
    let benchmarks_used = Some(financials.benchmarks.clone()).filter(|b| !b.is_empty());

    info!(
        method = %request.method,
        value = computation.estimated_value,
        currency = %request.currency_code,
        "valuation complete"
    );

    Ok(ValuationResult {
        estimated_value: computation.estimated_value,
        currency_code: request.currency_code.clone(),
        method: request.method,
        summary,
        explanation,
        dcf_inputs_used,
        benchmarks_used,
        trace: computation.trace,
    })
}

/// Run the pipeline for a front-end, localizing a rejection message.
pub fn run_valuation(request: ValuationRequest, locale: Locale) -> Result<RunOutput, AppError> {
    let result = valuate(&request).map_err(|err| {
        tracing::warn!(error = %err, "request rejected");
        AppError::validation(&err, locale)
    })?;
    Ok(RunOutput { request, result })
}
