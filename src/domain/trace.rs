//! Intermediate figures recorded by the engine.
//!
//! A trace is the single source both narratives are rendered from, so the two
//! languages can differ only in wording and number formatting.

use serde::{Deserialize, Serialize};

use crate::domain::MethodId;

/// Where an effective rate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RateSource {
    /// Entered on the form.
    Entered,
    /// Not entered; the documented default was used.
    Default,
    /// Replaced by the user-supplied sector growth rate.
    SectorGrowthOverride,
}

/// How the final-year cash flow used for the terminal value was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LastFcfSource {
    FinalYear,
    /// Year 1 grown at 2% per year.
    GrownFromFirstYear,
    /// Year 1 was also unavailable; a fixed seed grown at 2% per year.
    GrownFromSeed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TerminalValueMethod {
    /// `TV = FCF_n * (1 + g) / (wacc - g)`.
    GordonGrowth,
    /// `TV = FCF_n * 10` when `wacc <= g`.
    FallbackMultiple,
}

/// Outcome of the method's minimum-value rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorCheck {
    pub minimum: f64,
    pub applied: bool,
}

/// One discounted projection year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountedCashFlow {
    pub year: u32,
    /// As entered; `None` is discounted as zero.
    pub fcf: Option<f64>,
    pub discount_factor: f64,
    pub present_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DcfTrace {
    pub projection_years: u32,
    /// Percent, as used.
    pub discount_rate_pct: f64,
    pub discount_rate_source: RateSource,
    /// Decimal discount rate.
    pub wacc: f64,
    /// Percent, as entered on the form (may be overridden).
    pub entered_terminal_growth_pct: Option<f64>,
    /// Percent, as used for the terminal value.
    pub terminal_growth_pct: f64,
    pub terminal_growth_source: RateSource,
    /// Decimal terminal growth.
    pub terminal_growth: f64,
    /// Narrative only.
    pub country_risk_premium_pct: Option<f64>,
    pub cash_flows: Vec<DiscountedCashFlow>,
    pub pv_projected_fcf_sum: f64,
    pub last_fcf: f64,
    pub last_fcf_source: LastFcfSource,
    /// Figure grown to estimate `last_fcf` (equals `last_fcf` for `FinalYear`).
    pub last_fcf_base: f64,
    pub terminal_value: f64,
    pub terminal_method: TerminalValueMethod,
    pub pv_terminal_value: f64,
    pub enterprise_value: f64,
    pub liquidity_discount_factor: f64,
    pub discounted_ev: f64,
    pub floor: FloorCheck,
    pub final_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookTrace {
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub book_value: f64,
    pub floor: FloorCheck,
    pub final_value: f64,
}

/// Which multiple rule fired (first match wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MultipleRule {
    /// Net income × user P/E.
    CompsPe,
    /// EBITDA × user EV/EBITDA.
    CompsEvEbitda,
    /// `(revenue * 0.2 + ebitda - liabilities) * 1.1`.
    CompsHeuristic,
    /// Revenue × user revenue multiple.
    MultiplesRevenue,
    /// Revenue × 0.8.
    MultiplesDefault,
}

impl MultipleRule {
    /// Whether the multiplier came from a user-supplied benchmark.
    pub fn is_user_multiple(self) -> bool {
        matches!(
            self,
            MultipleRule::CompsPe | MultipleRule::CompsEvEbitda | MultipleRule::MultiplesRevenue
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultipleTrace {
    pub method: MethodId,
    pub rule: MultipleRule,
    pub base_value: f64,
    pub multiplier: f64,
    pub calculated_value: f64,
    pub floor: FloorCheck,
    pub final_value: f64,
}

/// Engine output for one method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Trace {
    Dcf(DcfTrace),
    Book(BookTrace),
    Multiple(MultipleTrace),
}

impl Trace {
    pub fn method(&self) -> MethodId {
        match self {
            Trace::Dcf(_) => MethodId::Dcf,
            Trace::Book(_) => MethodId::Book,
            Trace::Multiple(t) => t.method,
        }
    }

    pub fn final_value(&self) -> f64 {
        match self {
            Trace::Dcf(t) => t.final_value,
            Trace::Book(t) => t.final_value,
            Trace::Multiple(t) => t.final_value,
        }
    }

    pub fn floor(&self) -> FloorCheck {
        match self {
            Trace::Dcf(t) => t.floor,
            Trace::Book(t) => t.floor,
            Trace::Multiple(t) => t.floor,
        }
    }
}
