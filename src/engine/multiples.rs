//! Comparable companies and market multiples.
//!
//! The first matching rule supplies `base` and `multiplier`; the result is
//! `max(10 000, round(base * multiplier))`. Absent optional figures count as 0.

use tracing::{debug, info};

use crate::domain::{FinancialInput, MethodId, MultipleRule, MultipleTrace, ScalarField};
use crate::engine::{apply_floor, round_half_up, validate::require};
use crate::error::ValuationError;

/// Heuristic comps base: share of revenue counted.
pub const HEURISTIC_REVENUE_WEIGHT: f64 = 0.2;
/// Heuristic comps multiplier.
pub const HEURISTIC_MULTIPLIER: f64 = 1.1;
/// Revenue multiplier when no industry revenue multiple is supplied.
pub const DEFAULT_REVENUE_MULTIPLIER: f64 = 0.8;

pub fn compute(method: MethodId, financials: &FinancialInput) -> Result<MultipleTrace, ValuationError> {
    let figure = |field| financials.get(field).unwrap_or(0.0);
    let b = &financials.benchmarks;

    let (rule, base_value, multiplier) = match method {
        MethodId::Comps => {
            let ebitda = require(method, financials, ScalarField::Ebitda)?;
            let net_income = figure(ScalarField::NetIncome);
            match (b.industry_pe_ratio, b.industry_ev_ebitda_multiple) {
                (Some(pe), _) if net_income > 0.0 => (MultipleRule::CompsPe, net_income, pe),
                (_, Some(ev_ebitda)) if ebitda > 0.0 => (MultipleRule::CompsEvEbitda, ebitda, ev_ebitda),
                _ => {
                    let base = figure(ScalarField::Revenue) * HEURISTIC_REVENUE_WEIGHT + ebitda
                        - figure(ScalarField::TotalLiabilities);
                    (MultipleRule::CompsHeuristic, base, HEURISTIC_MULTIPLIER)
                }
            }
        }
        _ => {
            let revenue = require(MethodId::Multiples, financials, ScalarField::Revenue)?;
            match b.industry_revenue_multiple {
                Some(multiple) if revenue > 0.0 => (MultipleRule::MultiplesRevenue, revenue, multiple),
                _ => (MultipleRule::MultiplesDefault, revenue, DEFAULT_REVENUE_MULTIPLIER),
            }
        }
    };

    if !rule.is_user_multiple() {
        info!(?rule, "no usable industry multiple; default rule applied");
    }

    let calculated_value = base_value * multiplier;
    let (final_value, floor) = apply_floor(method, calculated_value, round_half_up(calculated_value))?;
    debug!(?rule, base_value, multiplier, calculated_value, final_value, "multiple valuation");

    Ok(MultipleTrace {
        method,
        rule,
        base_value,
        multiplier,
        calculated_value,
        floor,
        final_value,
    })
}
