//! Valuation engine.
//!
//! Given a method selector and a financial-input bundle, produce the estimated
//! value plus a [`Trace`] of every intermediate figure. The engine is a pure
//! function of its inputs: it performs no I/O and keeps no state.
//!
//! - `dcf`: discounted cash flow with terminal value and liquidity discount
//! - `book`: net assets
//! - `multiples`: comparable companies and market multiples
//! - `validate`: required-field checks (engine level and strict form level)

pub mod book;
pub mod dcf;
pub mod multiples;
pub mod validate;

use tracing::{debug, warn};

use crate::data::find_currency;
use crate::domain::{FinancialInput, FloorCheck, MethodId, Trace};
use crate::error::ValuationError;

/// Engine output: the reported value and how it was reached.
#[derive(Debug, Clone, PartialEq)]
pub struct Computation {
    pub estimated_value: f64,
    pub trace: Trace,
}

/// Compute a valuation.
///
/// Fails when a field the method requires is missing or non-finite, or when
/// `currency_code` is not a known currency. Degenerate inputs (growth at or
/// above the discount rate, values under the minimum) are not errors; they are
/// recorded in the trace.
pub fn compute(
    method: MethodId,
    financials: &FinancialInput,
    currency_code: &str,
) -> Result<Computation, ValuationError> {
    if find_currency(currency_code).is_none() {
        return Err(ValuationError::UnknownCurrency(currency_code.to_string()));
    }
    validate::check_required(method, financials)?;

    let trace = match method {
        MethodId::Dcf => Trace::Dcf(dcf::compute(financials)?),
        MethodId::Book => Trace::Book(book::compute(financials)?),
        MethodId::Comps | MethodId::Multiples => Trace::Multiple(multiples::compute(method, financials)?),
    };

    let floor = trace.floor();
    debug!(
        method = %method,
        value = trace.final_value(),
        floor_applied = floor.applied,
        "valuation computed"
    );

    Ok(Computation {
        estimated_value: trace.final_value(),
        trace,
    })
}

/// Round to the nearest integer, ties toward +∞ (`2.5 -> 3`, `-2.5 -> -2`).
pub fn round_half_up(x: f64) -> f64 {
    let f = x.floor();
    if x - f >= 0.5 { f + 1.0 } else { f }
}

/// Clamp `rounded` to the method's minimum; the floor counts as applied when
/// `raw` is below it. A non-finite `raw` (overflowed inputs) is rejected.
pub(crate) fn apply_floor(method: MethodId, raw: f64, rounded: f64) -> Result<(f64, FloorCheck), ValuationError> {
    if !raw.is_finite() {
        warn!(method = %method, raw, "valuation overflowed");
        return Err(ValuationError::NonFiniteResult(method));
    }
    let minimum = method.floor();
    let applied = raw < minimum;
    let value = if applied { minimum } else { rounded.max(minimum) };
    Ok((value, FloorCheck { minimum, applied }))
}
