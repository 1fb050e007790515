//! Bilingual string tables.
//!
//! Every user-facing string is a [`Msg`] key. Each locale table is an
//! exhaustive `match`, so adding a key without translating it does not compile.
//! Templates use `{name}` placeholders filled by [`render`].

mod ar;
mod en;

use crate::domain::{DcfField, InputField, Locale, ScalarField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Msg {
    // Form labels.
    CompanyName,
    Country,
    Sector,
    Method,
    Currency,
    Revenue,
    Ebitda,
    NetIncome,
    TotalAssets,
    TotalLiabilities,
    DcfInputs,
    BenchmarkInputs,
    CountryRiskPremium,
    SectorGrowthRate,
    IndustryPeRatio,
    IndustryEvEbitdaMultiple,
    IndustryRevenueMultiple,
    ProjectionYears,
    DiscountRate,
    TerminalGrowthRate,
    FcfYearLabel,

    // Validation messages.
    ErrCompanyName,
    ErrRequiredField,
    ErrInvalidField,
    ErrProjectionYears,
    ErrFcfCount,
    ErrDiscountRate,
    ErrUnknownCode,
    ErrInvalidNumber,
    ErrValueOverflow,

    // Narrative: shared.
    Intro,
    InputsHeader,
    StepHeader,
    LabeledValue,
    UserSupplied,
    FinalValueDesc,
    FloorNote,
    DataSourceNote,

    // Narrative: DCF.
    DcfIntro,
    DcfWaccTitle,
    DcfWaccText,
    DcfRiskPremiumNote,
    DcfFcfTitle,
    DcfFcfText,
    DcfProjectionPeriod,
    DcfDiscountRateItem,
    DcfTerminalGrowthItem,
    DefaultRateNote,
    SectorGrowthOverride,
    DcfFcfList,
    DcfFcfYearItem,
    DcfStepPvFcf,
    DcfPvSumDesc,
    DcfPvYear,
    DcfStepTerminal,
    DcfLastFcfDesc,
    LastFcfGrownNote,
    LastFcfSeedNote,
    TvGordon,
    TvFallback,
    DcfStepPvTerminal,
    DcfPvTerminalDesc,
    DcfStepEv,
    DcfEvDesc,
    DcfStepLiquidity,
    DcfLiquidityDesc,
    StepFinal,

    // Narrative: book value.
    BookIntro,
    BookStepNet,
    BookNetDesc,

    // Narrative: comps / multiples.
    CompsIntro,
    MultiplesIntro,
    OtherStepBase,
    RulePe,
    RuleEvEbitda,
    RuleHeuristic,
    RuleRevenue,
    RuleMultiplesDefault,
    OtherStepCalc,
    OtherCalcDesc,

    // Summary paragraph.
    Summary,

    // Result display and export.
    ReportTitle,
    EstimatedValue,
    SummaryTitle,
    CalculationDetails,
    DcfInputsTitle,
    BenchmarksTitle,
    ChartTitle,
    IfrsNote,
    PageFooter,
    GeneratedAt,
    NotAvailable,

    // Chart series labels.
    ChartFcfYear,

    // Interactive front-ends.
    TuiHelp,
    TuiExported,
    TuiExportFailed,
    PromptChoose,
    PromptOptional,
    PromptInvalidChoice,
    PromptRetry,
}

/// Look up the template for `msg` in `locale`.
pub fn text(locale: Locale, msg: Msg) -> &'static str {
    match locale {
        Locale::En => en::text(msg),
        Locale::Ar => ar::text(msg),
    }
}

/// Substitute `{name}` placeholders in one pass.
///
/// Unknown placeholders are left as written; substituted values are never
/// re-scanned.
pub fn render(template: &str, args: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };
        let key = &after[..close];
        match args.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push('{');
                out.push_str(key);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    out
}

/// Shorthand for `render(text(locale, msg), args)`.
pub fn tr(locale: Locale, msg: Msg, args: &[(&str, String)]) -> String {
    render(text(locale, msg), args)
}

impl From<ScalarField> for Msg {
    fn from(field: ScalarField) -> Self {
        match field {
            ScalarField::Revenue => Msg::Revenue,
            ScalarField::Ebitda => Msg::Ebitda,
            ScalarField::NetIncome => Msg::NetIncome,
            ScalarField::TotalAssets => Msg::TotalAssets,
            ScalarField::TotalLiabilities => Msg::TotalLiabilities,
            ScalarField::CountryRiskPremium => Msg::CountryRiskPremium,
            ScalarField::SectorGrowthRate => Msg::SectorGrowthRate,
            ScalarField::IndustryPeRatio => Msg::IndustryPeRatio,
            ScalarField::IndustryEvEbitdaMultiple => Msg::IndustryEvEbitdaMultiple,
            ScalarField::IndustryRevenueMultiple => Msg::IndustryRevenueMultiple,
        }
    }
}

impl From<DcfField> for Msg {
    fn from(field: DcfField) -> Self {
        match field {
            DcfField::ProjectionYears => Msg::ProjectionYears,
            DcfField::DiscountRate => Msg::DiscountRate,
            DcfField::TerminalGrowthRate => Msg::TerminalGrowthRate,
        }
    }
}

impl From<InputField> for Msg {
    fn from(field: InputField) -> Self {
        match field {
            InputField::Revenue => Msg::Revenue,
            InputField::Ebitda => Msg::Ebitda,
            InputField::NetIncome => Msg::NetIncome,
            InputField::TotalAssets => Msg::TotalAssets,
            InputField::TotalLiabilities => Msg::TotalLiabilities,
            InputField::DcfInputs => Msg::DcfInputs,
            InputField::BenchmarkInputs => Msg::BenchmarkInputs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_substitutes_every_occurrence() {
        let out = render("{a} + {a} = {b}", &[("a", "1".to_string()), ("b", "2".to_string())]);
        assert_eq!(out, "1 + 1 = 2");
    }

    #[test]
    fn render_leaves_unknown_and_unclosed_placeholders() {
        assert_eq!(render("x {missing} y", &[]), "x {missing} y");
        assert_eq!(render("open { brace", &[]), "open { brace");
    }

    #[test]
    fn render_does_not_rescan_values() {
        let out = render("{a}", &[("a", "{b}".to_string()), ("b", "no".to_string())]);
        assert_eq!(out, "{b}");
    }

    #[test]
    fn arabic_templates_keep_placeholders_in_sync() {
        let keys = [
            Msg::DcfPvYear,
            Msg::TvGordon,
            Msg::TvFallback,
            Msg::DcfLiquidityDesc,
            Msg::Summary,
            Msg::OtherCalcDesc,
            Msg::RuleHeuristic,
            Msg::SectorGrowthOverride,
        ];
        for msg in keys {
            let mut en_keys = placeholders(text(Locale::En, msg));
            let mut ar_keys = placeholders(text(Locale::Ar, msg));
            en_keys.sort();
            ar_keys.sort();
            en_keys.dedup();
            ar_keys.dedup();
            assert_eq!(en_keys, ar_keys, "{msg:?}");
        }
    }

    fn placeholders(template: &str) -> Vec<String> {
        template
            .split('{')
            .skip(1)
            .filter_map(|s| s.split_once('}').map(|(k, _)| k.to_string()))
            .collect()
    }
}
