//! Input validation.
//!
//! Two levels:
//!
//! - [`check_required`]: what the engine needs to produce a number. DCF rates
//!   and individual FCF entries may be missing here (documented defaults).
//! - [`validate_request`]: the form's submit check. Everything the form marks
//!   as required must be filled in, including every DCF rate and FCF entry.

use crate::data::{find_country, find_currency, find_sector, required_inputs};
use crate::domain::{
    DcfField, DcfInput, FinancialInput, InputField, MAX_PROJECTION_YEARS, MethodId, ScalarField,
    ValuationRequest,
};
use crate::error::ValuationError;

/// Engine-level check for `method`.
pub fn check_required(method: MethodId, financials: &FinancialInput) -> Result<(), ValuationError> {
    for field in ScalarField::FINANCIALS.iter().chain(ScalarField::BENCHMARKS.iter()) {
        if let Some(v) = financials.get(*field) {
            if !v.is_finite() {
                return Err(ValuationError::NonFiniteField(*field));
            }
        }
    }

    for &input in required_inputs(method) {
        match input {
            InputField::DcfInputs => {
                check_dcf_block(financials.dcf.as_ref())?;
            }
            InputField::BenchmarkInputs => {}
            other => {
                if let Some(field) = other.scalar() {
                    require(method, financials, field)?;
                }
            }
        }
    }
    Ok(())
}

/// Strict form-level check run before the pipeline computes anything.
pub fn validate_request(request: &ValuationRequest) -> Result<(), ValuationError> {
    if request.company_name.trim().is_empty() {
        return Err(ValuationError::EmptyCompanyName);
    }
    if find_country(&request.country_code).is_none() {
        return Err(ValuationError::UnknownCountry(request.country_code.clone()));
    }
    if find_sector(&request.sector_id).is_none() {
        return Err(ValuationError::UnknownSector(request.sector_id.clone()));
    }
    if find_currency(&request.currency_code).is_none() {
        return Err(ValuationError::UnknownCurrency(request.currency_code.clone()));
    }

    let financials = &request.financials;
    check_required(request.method, financials)?;

    if request.method == MethodId::Dcf {
        let dcf = check_dcf_block(financials.dcf.as_ref())?;
        if dcf.discount_rate.is_none() {
            return Err(ValuationError::MissingDcfField(DcfField::DiscountRate));
        }
        if dcf.terminal_growth_rate.is_none() {
            return Err(ValuationError::MissingDcfField(DcfField::TerminalGrowthRate));
        }

        let expected = dcf.projection_years.unwrap_or(0) as usize;
        if dcf.projected_fcf.len() != expected {
            return Err(ValuationError::ProjectedFcfLength {
                expected,
                actual: dcf.projected_fcf.len(),
            });
        }
        if let Some(i) = dcf.projected_fcf.iter().position(Option::is_none) {
            return Err(ValuationError::MissingProjectedFcf { year: i + 1 });
        }
    }
    Ok(())
}

/// Fetch a required scalar, rejecting missing or non-finite values.
pub(crate) fn require(
    method: MethodId,
    financials: &FinancialInput,
    field: ScalarField,
) -> Result<f64, ValuationError> {
    match financials.get(field) {
        Some(v) if v.is_finite() => Ok(v),
        Some(_) => Err(ValuationError::NonFiniteField(field)),
        None => Err(ValuationError::MissingField {
            method,
            field: input_field_for(field),
        }),
    }
}

fn input_field_for(field: ScalarField) -> InputField {
    match field {
        ScalarField::Revenue => InputField::Revenue,
        ScalarField::Ebitda => InputField::Ebitda,
        ScalarField::NetIncome => InputField::NetIncome,
        ScalarField::TotalAssets => InputField::TotalAssets,
        ScalarField::TotalLiabilities => InputField::TotalLiabilities,
        _ => InputField::BenchmarkInputs,
    }
}

/// Structural DCF checks shared by both levels.
pub(crate) fn check_dcf_block(dcf: Option<&DcfInput>) -> Result<&DcfInput, ValuationError> {
    let dcf = dcf.ok_or(ValuationError::MissingDcfInputs)?;
    let years = dcf
        .projection_years
        .ok_or(ValuationError::MissingDcfField(DcfField::ProjectionYears))?;
    if !(1..=MAX_PROJECTION_YEARS).contains(&years) {
        return Err(ValuationError::ProjectionYearsOutOfRange(years));
    }

    if let Some(rate) = dcf.discount_rate {
        if !rate.is_finite() {
            return Err(ValuationError::NonFiniteDcfField(DcfField::DiscountRate));
        }
        if rate <= -100.0 {
            return Err(ValuationError::DiscountRateOutOfRange(rate));
        }
    }
    if let Some(rate) = dcf.terminal_growth_rate {
        if !rate.is_finite() {
            return Err(ValuationError::NonFiniteDcfField(DcfField::TerminalGrowthRate));
        }
    }
    for (i, v) in dcf.projected_fcf.iter().enumerate().take(years as usize) {
        if let Some(v) = v {
            if !v.is_finite() {
                return Err(ValuationError::NonFiniteProjectedFcf { year: i + 1 });
            }
        }
    }
    Ok(dcf)
}
