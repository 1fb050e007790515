//! Shared domain types.
//!
//! These types are kept plain and serializable so they can be:
//!
//! - built from CLI flags, a JSON file, or the prompt wizard
//! - passed through the engine unchanged
//! - exported to JSON alongside the computed result

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::domain::trace::Trace;
use crate::error::ValuationError;

/// Upper bound on projection years accepted for a DCF.
pub const MAX_PROJECTION_YEARS: u32 = 10;

/// Supported narrative locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Ar,
}

/// Text direction implied by a locale (layout hint for front-ends).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ar];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    pub fn direction(self) -> TextDirection {
        match self {
            Locale::En => TextDirection::Ltr,
            Locale::Ar => TextDirection::Rtl,
        }
    }

    /// The other supported locale.
    pub fn toggled(self) -> Locale {
        match self {
            Locale::En => Locale::Ar,
            Locale::Ar => Locale::En,
        }
    }

    /// Parse a language tag leniently (`en`, `EN`, `en-US`, `ar_EG`, ...).
    pub fn parse(tag: &str) -> Option<Locale> {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Locale::En),
            "ar" => Some(Locale::Ar),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A value produced once per supported locale.
///
/// Both halves are always present: the front-end may switch languages on an
/// already-computed result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bilingual<T> {
    pub en: T,
    pub ar: T,
}

impl<T> Bilingual<T> {
    pub fn from_fn(mut f: impl FnMut(Locale) -> T) -> Self {
        Self {
            en: f(Locale::En),
            ar: f(Locale::Ar),
        }
    }

    pub fn get(&self, locale: Locale) -> &T {
        match locale {
            Locale::En => &self.en,
            Locale::Ar => &self.ar,
        }
    }
}

/// Valuation method selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MethodId {
    /// Discounted cash flow.
    Dcf,
    /// Net assets (book value).
    Book,
    /// Comparable companies (P/E or EV/EBITDA).
    Comps,
    /// Market multiples (revenue multiple).
    Multiples,
}

impl MethodId {
    pub const ALL: [MethodId; 4] = [MethodId::Dcf, MethodId::Book, MethodId::Comps, MethodId::Multiples];

    pub fn id(self) -> &'static str {
        match self {
            MethodId::Dcf => "dcf",
            MethodId::Book => "book",
            MethodId::Comps => "comps",
            MethodId::Multiples => "multiples",
        }
    }

    /// Minimum value the method will ever report.
    pub fn floor(self) -> f64 {
        match self {
            MethodId::Dcf => 50_000.0,
            MethodId::Book => 1_000.0,
            MethodId::Comps | MethodId::Multiples => 10_000.0,
        }
    }

    /// Benchmark overrides the method reads (the rest are ignored).
    pub fn benchmark_fields(self) -> &'static [ScalarField] {
        match self {
            MethodId::Dcf => &[ScalarField::CountryRiskPremium, ScalarField::SectorGrowthRate],
            MethodId::Book => &[],
            MethodId::Comps => &[ScalarField::IndustryPeRatio, ScalarField::IndustryEvEbitdaMultiple],
            MethodId::Multiples => &[ScalarField::IndustryRevenueMultiple],
        }
    }
}

impl fmt::Display for MethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for MethodId {
    type Err = ValuationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        MethodId::ALL
            .into_iter()
            .find(|m| m.id() == needle)
            .ok_or_else(|| ValuationError::UnknownMethod(s.to_string()))
    }
}

/// Input groups a method declares as required (drives the form and validation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputField {
    Revenue,
    Ebitda,
    NetIncome,
    TotalAssets,
    TotalLiabilities,
    DcfInputs,
    BenchmarkInputs,
}

impl InputField {
    /// The scalar field behind a plain numeric input, if any.
    pub fn scalar(self) -> Option<ScalarField> {
        match self {
            InputField::Revenue => Some(ScalarField::Revenue),
            InputField::Ebitda => Some(ScalarField::Ebitda),
            InputField::NetIncome => Some(ScalarField::NetIncome),
            InputField::TotalAssets => Some(ScalarField::TotalAssets),
            InputField::TotalLiabilities => Some(ScalarField::TotalLiabilities),
            InputField::DcfInputs | InputField::BenchmarkInputs => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            InputField::Revenue => "revenue",
            InputField::Ebitda => "ebitda",
            InputField::NetIncome => "netIncome",
            InputField::TotalAssets => "totalAssets",
            InputField::TotalLiabilities => "totalLiabilities",
            InputField::DcfInputs => "dcfInputs",
            InputField::BenchmarkInputs => "benchmarkInputs",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Plain numeric fields of [`FinancialInput`], including benchmark overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScalarField {
    Revenue,
    Ebitda,
    NetIncome,
    TotalAssets,
    TotalLiabilities,
    CountryRiskPremium,
    SectorGrowthRate,
    IndustryPeRatio,
    IndustryEvEbitdaMultiple,
    IndustryRevenueMultiple,
}

impl ScalarField {
    pub const FINANCIALS: [ScalarField; 5] = [
        ScalarField::Revenue,
        ScalarField::Ebitda,
        ScalarField::NetIncome,
        ScalarField::TotalAssets,
        ScalarField::TotalLiabilities,
    ];

    pub const BENCHMARKS: [ScalarField; 5] = [
        ScalarField::CountryRiskPremium,
        ScalarField::SectorGrowthRate,
        ScalarField::IndustryPeRatio,
        ScalarField::IndustryEvEbitdaMultiple,
        ScalarField::IndustryRevenueMultiple,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ScalarField::Revenue => "revenue",
            ScalarField::Ebitda => "ebitda",
            ScalarField::NetIncome => "netIncome",
            ScalarField::TotalAssets => "totalAssets",
            ScalarField::TotalLiabilities => "totalLiabilities",
            ScalarField::CountryRiskPremium => "countryRiskPremium",
            ScalarField::SectorGrowthRate => "sectorGrowthRate",
            ScalarField::IndustryPeRatio => "industryPeRatio",
            ScalarField::IndustryEvEbitdaMultiple => "industryEvEbitdaMultiple",
            ScalarField::IndustryRevenueMultiple => "industryRevenueMultiple",
        }
    }

    /// Percentages are displayed with a percent sign; ratios are plain numbers.
    pub fn is_percentage(self) -> bool {
        matches!(self, ScalarField::CountryRiskPremium | ScalarField::SectorGrowthRate)
    }
}

impl fmt::Display for ScalarField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Numeric fields of [`DcfInput`] (the projected FCF list is addressed by index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DcfField {
    ProjectionYears,
    DiscountRate,
    TerminalGrowthRate,
}

impl DcfField {
    pub fn key(self) -> &'static str {
        match self {
            DcfField::ProjectionYears => "projectionYears",
            DcfField::DiscountRate => "discountRate",
            DcfField::TerminalGrowthRate => "terminalGrowthRate",
        }
    }
}

impl fmt::Display for DcfField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// DCF-specific inputs.
///
/// Rates are percentages as entered (`10` means 10%).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DcfInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projection_years: Option<u32>,
    #[serde(default, alias = "projectedFCF")]
    pub projected_fcf: Vec<Option<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal_growth_rate: Option<f64>,
}

/// Optional user-supplied market benchmarks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Benchmarks {
    /// Percent. Narrative only; never folded into the discount rate.
    #[serde(default, alias = "userCountryRiskPremium", skip_serializing_if = "Option::is_none")]
    pub country_risk_premium: Option<f64>,
    /// Percent. Replaces the terminal growth rate when present.
    #[serde(default, alias = "userSectorGrowthRate", skip_serializing_if = "Option::is_none")]
    pub sector_growth_rate: Option<f64>,
    #[serde(default, alias = "userIndustryPERatio", skip_serializing_if = "Option::is_none")]
    pub industry_pe_ratio: Option<f64>,
    #[serde(default, alias = "userIndustryEVEBITDAMultiple", skip_serializing_if = "Option::is_none")]
    pub industry_ev_ebitda_multiple: Option<f64>,
    #[serde(default, alias = "userIndustryRevenueMultiple", skip_serializing_if = "Option::is_none")]
    pub industry_revenue_multiple: Option<f64>,
}

impl Benchmarks {
    pub fn is_empty(&self) -> bool {
        ScalarField::BENCHMARKS.iter().all(|&f| self.get(f).is_none())
    }

    /// Supplied overrides in display order.
    pub fn supplied(&self) -> Vec<(ScalarField, f64)> {
        ScalarField::BENCHMARKS
            .iter()
            .filter_map(|&f| self.get(f).map(|v| (f, v)))
            .collect()
    }

    fn get(&self, field: ScalarField) -> Option<f64> {
        match field {
            ScalarField::CountryRiskPremium => self.country_risk_premium,
            ScalarField::SectorGrowthRate => self.sector_growth_rate,
            ScalarField::IndustryPeRatio => self.industry_pe_ratio,
            ScalarField::IndustryEvEbitdaMultiple => self.industry_ev_ebitda_multiple,
            ScalarField::IndustryRevenueMultiple => self.industry_revenue_multiple,
            _ => None,
        }
    }
}

/// Financial figures collected by the form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ebitda: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_income: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_assets: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_liabilities: Option<f64>,
    #[serde(default, alias = "dcfSpecifics", skip_serializing_if = "Option::is_none")]
    pub dcf: Option<DcfInput>,
    #[serde(flatten)]
    pub benchmarks: Benchmarks,
}

impl FinancialInput {
    pub fn get(&self, field: ScalarField) -> Option<f64> {
        match field {
            ScalarField::Revenue => self.revenue,
            ScalarField::Ebitda => self.ebitda,
            ScalarField::NetIncome => self.net_income,
            ScalarField::TotalAssets => self.total_assets,
            ScalarField::TotalLiabilities => self.total_liabilities,
            other => self.benchmarks.get(other),
        }
    }

    pub(crate) fn slot_mut(&mut self, field: ScalarField) -> &mut Option<f64> {
        match field {
            ScalarField::Revenue => &mut self.revenue,
            ScalarField::Ebitda => &mut self.ebitda,
            ScalarField::NetIncome => &mut self.net_income,
            ScalarField::TotalAssets => &mut self.total_assets,
            ScalarField::TotalLiabilities => &mut self.total_liabilities,
            ScalarField::CountryRiskPremium => &mut self.benchmarks.country_risk_premium,
            ScalarField::SectorGrowthRate => &mut self.benchmarks.sector_growth_rate,
            ScalarField::IndustryPeRatio => &mut self.benchmarks.industry_pe_ratio,
            ScalarField::IndustryEvEbitdaMultiple => &mut self.benchmarks.industry_ev_ebitda_multiple,
            ScalarField::IndustryRevenueMultiple => &mut self.benchmarks.industry_revenue_multiple,
        }
    }
}

/// One form submission.
///
/// The original form's key names (`country`, `sector`, `valuationMethod`,
/// `currency`) are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationRequest {
    pub company_name: String,
    #[serde(alias = "country")]
    pub country_code: String,
    #[serde(alias = "sector")]
    pub sector_id: String,
    #[serde(alias = "valuationMethod", alias = "methodId")]
    pub method: MethodId,
    #[serde(alias = "currency")]
    pub currency_code: String,
    #[serde(default)]
    pub financials: FinancialInput,
}

/// DCF inputs echoed back as entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DcfInputsUsed {
    pub projection_years: Option<u32>,
    pub discount_rate: Option<f64>,
    pub terminal_growth_rate: Option<f64>,
}

/// The computed valuation. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationResult {
    pub estimated_value: f64,
    pub currency_code: String,
    pub method: MethodId,
    pub summary: Bilingual<String>,
    pub explanation: Bilingual<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dcf_inputs_used: Option<DcfInputsUsed>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benchmarks_used: Option<Benchmarks>,
    pub trace: Trace,
}
