//! Discounted cash flow.
//!
//! ```text
//! PV_i  = FCF_i / (1 + wacc)^i                      i = 1..n
//! TV    = FCF_n (1 + g) / (wacc - g)                 if wacc > g
//!       = FCF_n * 10                                 otherwise
//! EV    = Σ PV_i + TV / (1 + wacc)^n
//! value = max(50 000, round(EV * 0.8))
//! ```
//!
//! A user-supplied sector growth rate replaces `g`. A country risk premium is
//! carried into the trace for the narrative but never changes `wacc`.

use tracing::{debug, info};

use crate::domain::{
    DcfTrace, DiscountedCashFlow, FinancialInput, LastFcfSource, MethodId, RateSource, TerminalValueMethod,
};
use crate::engine::{apply_floor, round_half_up, validate::check_dcf_block};
use crate::error::ValuationError;

/// 20% liquidity/marketability haircut for a private company.
pub const LIQUIDITY_DISCOUNT_FACTOR: f64 = 0.8;
/// Percent, used when no discount rate was entered.
pub const DEFAULT_DISCOUNT_RATE_PCT: f64 = 10.0;
/// Percent, used when no terminal growth rate was entered.
pub const DEFAULT_TERMINAL_GROWTH_PCT: f64 = 2.0;
/// Terminal value multiple of final-year FCF when `wacc <= g`.
pub const FALLBACK_TERMINAL_MULTIPLE: f64 = 10.0;
/// Annual growth used to estimate a missing final-year FCF.
pub const LAST_FCF_ESTIMATE_GROWTH: f64 = 0.02;
/// Base grown into a final-year FCF when no usable FCF was entered.
pub const LAST_FCF_SEED: f64 = 100_000.0;

pub fn compute(financials: &FinancialInput) -> Result<DcfTrace, ValuationError> {
    let dcf = check_dcf_block(financials.dcf.as_ref())?;
    let years = dcf.projection_years.unwrap_or(1);

    let (discount_rate_pct, discount_rate_source) = match dcf.discount_rate {
        Some(rate) => (rate, RateSource::Entered),
        None => (DEFAULT_DISCOUNT_RATE_PCT, RateSource::Default),
    };
    let (terminal_growth_pct, terminal_growth_source) =
        match (financials.benchmarks.sector_growth_rate, dcf.terminal_growth_rate) {
            (Some(sector), _) => (sector, RateSource::SectorGrowthOverride),
            (None, Some(entered)) => (entered, RateSource::Entered),
            (None, None) => (DEFAULT_TERMINAL_GROWTH_PCT, RateSource::Default),
        };
    let wacc = discount_rate_pct / 100.0;
    let g = terminal_growth_pct / 100.0;

    let fcf_at = |year: u32| -> Option<f64> { dcf.projected_fcf.get(year as usize - 1).copied().flatten() };

    let cash_flows: Vec<DiscountedCashFlow> = (1..=years)
        .map(|year| {
            let fcf = fcf_at(year);
            let discount_factor = (1.0 + wacc).powi(year as i32);
            DiscountedCashFlow {
                year,
                fcf,
                discount_factor,
                present_value: fcf.unwrap_or(0.0) / discount_factor,
            }
        })
        .collect();
    let pv_projected_fcf_sum: f64 = cash_flows.iter().map(|cf| cf.present_value).sum();

    // Zero counts as "not entered" for the final-year figure.
    let usable = |v: Option<f64>| v.filter(|x| *x != 0.0);
    let (last_fcf_base, last_fcf_source) = match (usable(fcf_at(years)), usable(fcf_at(1))) {
        (Some(last), _) => (last, LastFcfSource::FinalYear),
        (None, Some(first)) => (first, LastFcfSource::GrownFromFirstYear),
        (None, None) => (LAST_FCF_SEED, LastFcfSource::GrownFromSeed),
    };
    let last_fcf = match last_fcf_source {
        LastFcfSource::FinalYear => last_fcf_base,
        _ => {
            info!(source = ?last_fcf_source, "final-year FCF estimated");
            last_fcf_base * (1.0 + LAST_FCF_ESTIMATE_GROWTH).powi(years as i32 - 1)
        }
    };

    let (terminal_value, terminal_method) = if wacc > g {
        (last_fcf * (1.0 + g) / (wacc - g), TerminalValueMethod::GordonGrowth)
    } else {
        info!(wacc, g, "growth not below discount rate; terminal value fallback");
        (last_fcf * FALLBACK_TERMINAL_MULTIPLE, TerminalValueMethod::FallbackMultiple)
    };
    let pv_terminal_value = terminal_value / (1.0 + wacc).powi(years as i32);

    let enterprise_value = pv_projected_fcf_sum + pv_terminal_value;
    let discounted_ev = enterprise_value * LIQUIDITY_DISCOUNT_FACTOR;
    let (final_value, floor) = apply_floor(MethodId::Dcf, discounted_ev, round_half_up(discounted_ev))?;

    debug!(
        pv_projected_fcf_sum,
        terminal_value,
        pv_terminal_value,
        enterprise_value,
        discounted_ev,
        final_value,
        "dcf figures"
    );

    Ok(DcfTrace {
        projection_years: years,
        discount_rate_pct,
        discount_rate_source,
        wacc,
        entered_terminal_growth_pct: dcf.terminal_growth_rate,
        terminal_growth_pct,
        terminal_growth_source,
        terminal_growth: g,
        country_risk_premium_pct: financials.benchmarks.country_risk_premium,
        cash_flows,
        pv_projected_fcf_sum,
        last_fcf,
        last_fcf_source,
        last_fcf_base,
        terminal_value,
        terminal_method,
        pv_terminal_value,
        enterprise_value,
        liquidity_discount_factor: LIQUIDITY_DISCOUNT_FACTOR,
        discounted_ev,
        floor,
        final_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    use crate::domain::{Benchmarks, DcfInput};

    fn inputs(years: u32, fcf: &[Option<f64>], rate: Option<f64>, growth: Option<f64>) -> FinancialInput {
        FinancialInput {
            dcf: Some(DcfInput {
                projection_years: Some(years),
                projected_fcf: fcf.to_vec(),
                discount_rate: rate,
                terminal_growth_rate: growth,
            }),
            ..FinancialInput::default()
        }
    }

    #[test]
    fn three_year_projection() {
        let fin = inputs(
            3,
            &[Some(100_000.0), Some(110_000.0), Some(121_000.0)],
            Some(10.0),
            Some(2.0),
        );
        let t = compute(&fin).unwrap();

        let pv_sum = 100_000.0 / 1.1 + 110_000.0 / 1.21 + 121_000.0 / 1.331;
        assert_relative_eq!(t.pv_projected_fcf_sum, pv_sum, max_relative = 1e-12);
        assert_eq!(t.terminal_method, TerminalValueMethod::GordonGrowth);
        assert_relative_eq!(t.terminal_value, 121_000.0 * 1.02 / 0.08, max_relative = 1e-12);
        assert_relative_eq!(t.pv_terminal_value, t.terminal_value / 1.331, max_relative = 1e-12);
        assert_relative_eq!(t.discounted_ev, (pv_sum + t.pv_terminal_value) * 0.8, max_relative = 1e-12);
        assert_eq!(t.final_value, round_half_up(t.discounted_ev));
        assert!(!t.floor.applied);
    }

    #[test]
    fn fallback_when_growth_not_below_rate() {
        let fin = inputs(2, &[Some(50_000.0), Some(60_000.0)], Some(5.0), Some(5.0));
        let t = compute(&fin).unwrap();
        assert_eq!(t.terminal_method, TerminalValueMethod::FallbackMultiple);
        assert_eq!(t.terminal_value, 600_000.0);
    }

    #[test]
    fn floor_binds_for_tiny_cash_flows() {
        let fin = inputs(1, &[Some(1.0)], Some(50.0), Some(40.0));
        let t = compute(&fin).unwrap();
        assert_eq!(t.final_value, 50_000.0);
        assert!(t.floor.applied);
    }

    #[test]
    fn sector_growth_replaces_terminal_growth() {
        let mut fin = inputs(1, &[Some(100_000.0)], Some(12.0), Some(2.0));
        fin.benchmarks = Benchmarks {
            sector_growth_rate: Some(4.0),
            ..Benchmarks::default()
        };
        let t = compute(&fin).unwrap();
        assert_eq!(t.terminal_growth_source, RateSource::SectorGrowthOverride);
        assert_eq!(t.entered_terminal_growth_pct, Some(2.0));
        assert_relative_eq!(t.terminal_value, 100_000.0 * 1.04 / 0.08, max_relative = 1e-12);
    }

    #[test]
    fn risk_premium_does_not_change_value() {
        let base = inputs(2, &[Some(80_000.0), Some(90_000.0)], Some(10.0), Some(2.0));
        let mut with_premium = base.clone();
        with_premium.benchmarks.country_risk_premium = Some(3.0);

        let a = compute(&base).unwrap();
        let b = compute(&with_premium).unwrap();
        assert_eq!(a.final_value, b.final_value);
        assert_eq!(b.country_risk_premium_pct, Some(3.0));
    }

    #[test]
    fn missing_rates_use_defaults() {
        let fin = inputs(1, &[Some(100_000.0)], None, None);
        let t = compute(&fin).unwrap();
        assert_eq!(t.discount_rate_source, RateSource::Default);
        assert_eq!(t.terminal_growth_source, RateSource::Default);
        assert_eq!(t.discount_rate_pct, 10.0);
        assert_eq!(t.terminal_growth_pct, 2.0);
    }

    #[test]
    fn missing_final_year_is_grown_from_year_one() {
        let fin = inputs(3, &[Some(100_000.0), Some(50_000.0), None], Some(10.0), Some(2.0));
        let t = compute(&fin).unwrap();
        assert_eq!(t.last_fcf_source, LastFcfSource::GrownFromFirstYear);
        assert_relative_eq!(t.last_fcf, 100_000.0 * 1.02_f64.powi(2), max_relative = 1e-12);
        // The missing year still discounts as zero.
        assert_eq!(t.cash_flows[2].present_value, 0.0);
    }

    #[test]
    fn zero_final_year_without_year_one_uses_seed() {
        let fin = inputs(2, &[None, Some(0.0)], Some(10.0), Some(2.0));
        let t = compute(&fin).unwrap();
        assert_eq!(t.last_fcf_source, LastFcfSource::GrownFromSeed);
        assert_relative_eq!(t.last_fcf, 102_000.0, max_relative = 1e-12);
    }

    #[test]
    fn entries_beyond_horizon_are_ignored() {
        let short = inputs(1, &[Some(100_000.0)], Some(10.0), Some(2.0));
        let long = inputs(1, &[Some(100_000.0), Some(9e9)], Some(10.0), Some(2.0));
        assert_eq!(compute(&short).unwrap().final_value, compute(&long).unwrap().final_value);
    }
}
