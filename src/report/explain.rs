//! Step-by-step calculation narratives.
//!
//! One renderer, parameterized by locale, turns a [`Trace`] into text. Both
//! languages are rendered from the same trace, so they can only differ in
//! wording and number formatting.
//!
//! Line conventions:
//!
//! - `**text**` is a heading
//! - `- text` is a first-level item
//! - `  - text` is a second-level item

use crate::data::method_info;
use crate::domain::{
    Bilingual, BookTrace, DcfTrace, FinancialInput, LastFcfSource, Locale, MethodId, MultipleRule,
    MultipleTrace, RateSource, ScalarField, TerminalValueMethod, Trace,
};
use crate::engine::dcf::{FALLBACK_TERMINAL_MULTIPLE, LAST_FCF_ESTIMATE_GROWTH};
use crate::engine::multiples::HEURISTIC_REVENUE_WEIGHT;
use crate::i18n::{self, Msg};
use crate::report::format::{
    format_currency, format_decimal, format_integer, format_number, format_optional_currency, format_percent,
    format_ratio,
};

/// What the narrative needs besides the trace.
#[derive(Debug, Clone, Copy)]
pub struct ExplainContext<'a> {
    pub currency_code: &'a str,
    pub financials: &'a FinancialInput,
}

/// Render both narratives.
pub fn build(trace: &Trace, ctx: &ExplainContext<'_>) -> Bilingual<String> {
    Bilingual::from_fn(|locale| render(trace, ctx, locale))
}

/// Render the narrative for one locale.
pub fn render(trace: &Trace, ctx: &ExplainContext<'_>, locale: Locale) -> String {
    let mut n = Narrative::new(locale, ctx.currency_code);

    let method = trace.method();
    n.line(n.tr(
        Msg::Intro,
        &[("method", method_info(method).display_name(locale).to_string())],
    ));
    n.line(n.t(match method {
        MethodId::Dcf => Msg::DcfIntro,
        MethodId::Book => Msg::BookIntro,
        MethodId::Comps => Msg::CompsIntro,
        MethodId::Multiples => Msg::MultiplesIntro,
    }));
    n.blank();

    match trace {
        Trace::Dcf(t) => dcf(&mut n, t),
        Trace::Book(t) => book(&mut n, t),
        Trace::Multiple(t) => multiple(&mut n, t, ctx.financials),
    }

    n.step(Msg::StepFinal);
    n.line(n.tr(Msg::FinalValueDesc, &[("value", n.money(trace.final_value()))]));
    let floor = trace.floor();
    if floor.applied {
        n.line(n.tr(Msg::FloorNote, &[("floor", n.money(floor.minimum))]));
    }
    n.blank();
    let note = n.t(Msg::DataSourceNote);
    n.out.push_str(note);
    n.out
}

fn dcf(n: &mut Narrative<'_>, t: &DcfTrace) {
    n.heading(n.t(Msg::DcfWaccTitle));
    n.line(n.t(Msg::DcfWaccText));
    if let Some(premium) = t.country_risk_premium_pct {
        n.line(n.tr(Msg::DcfRiskPremiumNote, &[("value", n.pct(premium))]));
    }
    n.blank();

    n.heading(n.t(Msg::DcfFcfTitle));
    n.line(n.t(Msg::DcfFcfText));
    n.blank();

    n.heading(n.t(Msg::InputsHeader));
    n.item(n.tr(
        Msg::DcfProjectionPeriod,
        &[("value", format_integer(t.projection_years as f64, n.locale))],
    ));
    n.item(n.with_default_note(
        n.tr(Msg::DcfDiscountRateItem, &[("value", n.pct(t.discount_rate_pct))]),
        t.discount_rate_source,
        t.discount_rate_pct,
    ));
    n.item(n.with_default_note(
        n.tr(Msg::DcfTerminalGrowthItem, &[("value", n.pct(t.terminal_growth_pct))]),
        t.terminal_growth_source,
        t.terminal_growth_pct,
    ));
    if t.terminal_growth_source == RateSource::SectorGrowthOverride {
        let entered = match t.entered_terminal_growth_pct {
            Some(v) => n.pct(v),
            None => n.t(Msg::NotAvailable).to_string(),
        };
        n.sub_item(n.tr(
            Msg::SectorGrowthOverride,
            &[("value", n.pct(t.terminal_growth_pct)), ("entered", entered)],
        ));
    }
    n.item(n.t(Msg::DcfFcfList));
    for cf in &t.cash_flows {
        n.sub_item(n.tr(
            Msg::DcfFcfYearItem,
            &[
                ("year", format_integer(cf.year as f64, n.locale)),
                ("value", format_optional_currency(cf.fcf, n.currency, n.locale)),
            ],
        ));
    }

    n.step(Msg::DcfStepPvFcf);
    n.line(n.tr(Msg::DcfPvSumDesc, &[("pv_sum", n.money(t.pv_projected_fcf_sum))]));
    for cf in &t.cash_flows {
        n.sub_item(n.tr(
            Msg::DcfPvYear,
            &[
                ("year", format_integer(cf.year as f64, n.locale)),
                ("fcf", format_optional_currency(cf.fcf, n.currency, n.locale)),
                ("wacc", n.rate(t.wacc)),
                ("pv", n.money(cf.present_value)),
            ],
        ));
    }

    n.step(Msg::DcfStepTerminal);
    n.line(n.tr(Msg::DcfLastFcfDesc, &[("last_fcf", n.money(t.last_fcf))]));
    let estimate_note = match t.last_fcf_source {
        LastFcfSource::FinalYear => None,
        LastFcfSource::GrownFromFirstYear => Some(Msg::LastFcfGrownNote),
        LastFcfSource::GrownFromSeed => Some(Msg::LastFcfSeedNote),
    };
    if let Some(msg) = estimate_note {
        n.line(n.tr(
            msg,
            &[
                ("base", n.money(t.last_fcf_base)),
                ("growth", n.pct(LAST_FCF_ESTIMATE_GROWTH * 100.0)),
                ("periods", format_integer(t.projection_years as f64 - 1.0, n.locale)),
            ],
        ));
    }
    let tv_line = match t.terminal_method {
        TerminalValueMethod::GordonGrowth => n.tr(
            Msg::TvGordon,
            &[
                ("last_fcf", n.money(t.last_fcf)),
                ("g", n.rate(t.terminal_growth)),
                ("wacc", n.rate(t.wacc)),
                ("tv", n.money(t.terminal_value)),
            ],
        ),
        TerminalValueMethod::FallbackMultiple => n.tr(
            Msg::TvFallback,
            &[
                ("last_fcf", n.money(t.last_fcf)),
                ("multiple", format_ratio(FALLBACK_TERMINAL_MULTIPLE, n.locale)),
                ("tv", n.money(t.terminal_value)),
            ],
        ),
    };
    n.sub_item(tv_line);

    n.step(Msg::DcfStepPvTerminal);
    n.line(n.tr(
        Msg::DcfPvTerminalDesc,
        &[
            ("tv", n.money(t.terminal_value)),
            ("wacc", n.rate(t.wacc)),
            ("years", format_integer(t.projection_years as f64, n.locale)),
            ("pv_tv", n.money(t.pv_terminal_value)),
        ],
    ));

    n.step(Msg::DcfStepEv);
    n.line(n.tr(
        Msg::DcfEvDesc,
        &[
            ("pv_sum", n.money(t.pv_projected_fcf_sum)),
            ("pv_tv", n.money(t.pv_terminal_value)),
            ("ev", n.money(t.enterprise_value)),
        ],
    ));

    n.step(Msg::DcfStepLiquidity);
    n.line(n.tr(
        Msg::DcfLiquidityDesc,
        &[
            ("pct", n.pct((1.0 - t.liquidity_discount_factor) * 100.0)),
            ("factor", format_ratio(t.liquidity_discount_factor, n.locale)),
            ("ev", n.money(t.enterprise_value)),
            ("discounted_ev", n.money(t.discounted_ev)),
        ],
    ));
}

fn book(n: &mut Narrative<'_>, t: &BookTrace) {
    n.heading(n.t(Msg::InputsHeader));
    n.item(n.labeled(Msg::TotalAssets, n.money(t.total_assets)));
    n.item(n.labeled(Msg::TotalLiabilities, n.money(t.total_liabilities)));

    n.step(Msg::BookStepNet);
    n.line(n.tr(
        Msg::BookNetDesc,
        &[
            ("assets", n.money(t.total_assets)),
            ("liabilities", n.money(t.total_liabilities)),
            ("book", n.money(t.book_value)),
        ],
    ));
}

fn multiple(n: &mut Narrative<'_>, t: &MultipleTrace, financials: &FinancialInput) {
    n.heading(n.t(Msg::InputsHeader));
    let mut shown = vec![ScalarField::Revenue, ScalarField::Ebitda];
    if t.method == MethodId::Comps {
        shown.extend([ScalarField::NetIncome, ScalarField::TotalLiabilities]);
    }
    for field in shown {
        if let Some(v) = financials.get(field) {
            n.item(n.labeled(Msg::from(field), n.money(v)));
        }
    }
    // Every supplied industry multiple is listed, including ones this method ignores.
    for field in ScalarField::BENCHMARKS.into_iter().filter(|f| !f.is_percentage()) {
        if let Some(v) = financials.get(field) {
            let value = if field.is_percentage() { n.pct(v) } else { format_ratio(v, n.locale) };
            n.item(format!(
                "{} {}",
                n.labeled(Msg::from(field), value),
                n.t(Msg::UserSupplied)
            ));
        }
    }

    n.step(Msg::OtherStepBase);
    let rule_msg = match t.rule {
        MultipleRule::CompsPe => Msg::RulePe,
        MultipleRule::CompsEvEbitda => Msg::RuleEvEbitda,
        MultipleRule::CompsHeuristic => Msg::RuleHeuristic,
        MultipleRule::MultiplesRevenue => Msg::RuleRevenue,
        MultipleRule::MultiplesDefault => Msg::RuleMultiplesDefault,
    };
    let multiple = n.multiplier(t);
    n.line(n.tr(
        rule_msg,
        &[
            ("base", n.money(t.base_value)),
            ("multiple", multiple.clone()),
            ("weight", format_ratio(HEURISTIC_REVENUE_WEIGHT, n.locale)),
        ],
    ));

    n.step(Msg::OtherStepCalc);
    n.line(n.tr(
        Msg::OtherCalcDesc,
        &[
            ("base", n.money(t.base_value)),
            ("multiple", multiple),
            ("value", n.money(t.calculated_value)),
        ],
    ));
}

/// Line-oriented writer with locale-bound formatting helpers.
struct Narrative<'a> {
    locale: Locale,
    currency: &'a str,
    out: String,
    steps: usize,
}

impl<'a> Narrative<'a> {
    fn new(locale: Locale, currency: &'a str) -> Self {
        Self {
            locale,
            currency,
            out: String::new(),
            steps: 0,
        }
    }

    fn t(&self, msg: Msg) -> &'static str {
        i18n::text(self.locale, msg)
    }

    fn tr(&self, msg: Msg, args: &[(&str, String)]) -> String {
        i18n::tr(self.locale, msg, args)
    }

    fn labeled(&self, label: Msg, value: String) -> String {
        self.tr(Msg::LabeledValue, &[("label", self.t(label).to_string()), ("value", value)])
    }

    fn with_default_note(&self, line: String, source: RateSource, value: f64) -> String {
        match source {
            RateSource::Default => format!(
                "{line} {}",
                self.tr(Msg::DefaultRateNote, &[("value", self.pct(value))])
            ),
            _ => line,
        }
    }

    fn money(&self, v: f64) -> String {
        format_currency(v, self.currency, self.locale)
    }

    fn pct(&self, v: f64) -> String {
        format_percent(v, self.locale, 1, 2)
    }

    fn rate(&self, v: f64) -> String {
        format_decimal(v, self.locale, 4)
    }

    /// User multiples as entered; built-in multipliers with one decimal.
    fn multiplier(&self, t: &MultipleTrace) -> String {
        if t.rule.is_user_multiple() {
            format_ratio(t.multiplier, self.locale)
        } else {
            format_number(t.multiplier, self.locale, 1, 2)
        }
    }

    fn line(&mut self, s: impl AsRef<str>) {
        self.out.push_str(s.as_ref());
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn heading(&mut self, s: impl AsRef<str>) {
        self.out.push_str("**");
        self.out.push_str(s.as_ref());
        self.out.push_str("**\n");
    }

    fn step(&mut self, title: Msg) {
        self.steps += 1;
        let header = self.tr(
            Msg::StepHeader,
            &[
                ("n", format_integer(self.steps as f64, self.locale)),
                ("title", self.t(title).to_string()),
            ],
        );
        self.blank();
        self.heading(header);
    }

    fn item(&mut self, s: impl AsRef<str>) {
        self.out.push_str("- ");
        self.line(s);
    }

    fn sub_item(&mut self, s: impl AsRef<str>) {
        self.out.push_str("  - ");
        self.line(s);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Benchmarks, DcfInput};
    use crate::engine;

    fn explain(method: MethodId, financials: &FinancialInput, currency: &str) -> Bilingual<String> {
        let c = engine::compute(method, financials, currency).unwrap();
        let ctx = ExplainContext {
            currency_code: currency,
            financials,
        };
        build(&c.trace, &ctx)
    }

    #[test]
    fn book_narrative_golden() {
        let fin = FinancialInput {
            total_assets: Some(2_000_000.0),
            total_liabilities: Some(500_000.0),
            ..FinancialInput::default()
        };
        let text = explain(MethodId::Book, &fin, "USD");

        let expected = "\
This valuation was prepared using the Book Value method.
The Book Value method values the company at its net assets: what remains after all liabilities are deducted from total assets.

**Inputs Used**
- Total Assets: $2,000,000
- Total Liabilities: $500,000

**Step 1: Net Assets**
$2,000,000 - $500,000 = $1,500,000

**Step 2: Final Value**
Estimated value: $1,500,000
";
        assert!(text.en.starts_with(expected), "{}", text.en);
        assert!(text.en.ends_with(i18n::text(Locale::En, Msg::DataSourceNote)));
        assert!(!text.en.contains("minimum value"));
    }

    #[test]
    fn dcf_floor_is_noted_in_both_languages() {
        let fin = FinancialInput {
            dcf: Some(DcfInput {
                projection_years: Some(1),
                projected_fcf: vec![Some(1.0)],
                discount_rate: Some(50.0),
                terminal_growth_rate: Some(40.0),
            }),
            ..FinancialInput::default()
        };
        let text = explain(MethodId::Dcf, &fin, "USD");
        assert!(text.en.contains("(A minimum value of $50,000 was applied"));
        assert!(text.ar.contains("٥٠٬٠٠٠ $"));
        assert!(text.en.contains("Gordon Growth Model: $1 × (1 + 0.4000) / (0.5000 - 0.4000) = $14"));
    }

    #[test]
    fn dcf_fallback_and_sector_growth_are_named() {
        let fin = FinancialInput {
            dcf: Some(DcfInput {
                projection_years: Some(2),
                projected_fcf: vec![Some(500_000.0), Some(600_000.0)],
                discount_rate: Some(8.0),
                terminal_growth_rate: Some(2.0),
            }),
            benchmarks: Benchmarks {
                sector_growth_rate: Some(9.0),
                country_risk_premium: Some(2.5),
                ..Benchmarks::default()
            },
            ..FinancialInput::default()
        };
        let text = explain(MethodId::Dcf, &fin, "SAR");
        assert!(text.en.contains("- Terminal growth rate: 9.0%"));
        assert!(text.en.contains(
            "  - (User-supplied sector growth rate of 9.0% replaces the entered terminal growth rate of 2.0%.)"
        ));
        assert!(text.en.contains("Fallback used: SAR 600,000 × 10 = SAR 6,000,000"));
        assert!(text.en.contains("(User-supplied country risk premium: 2.5%."));
        assert!(text.en.contains("**Step 6: Final Value**"));
        assert!(text.ar.contains("**الخطوة ٦: القيمة النهائية**"));
    }

    #[test]
    fn default_rates_are_flagged() {
        let fin = FinancialInput {
            dcf: Some(DcfInput {
                projection_years: Some(1),
                projected_fcf: vec![Some(200_000.0)],
                discount_rate: None,
                terminal_growth_rate: None,
            }),
            ..FinancialInput::default()
        };
        let text = explain(MethodId::Dcf, &fin, "USD");
        assert!(text.en.contains("- Discount rate (WACC): 10.0% (not entered; default of 10.0% used)"));
        assert!(text.en.contains("- Terminal growth rate: 2.0% (not entered; default of 2.0% used)"));
    }

    #[test]
    fn comps_lists_benchmarks_as_user_supplied() {
        let fin = FinancialInput {
            ebitda: Some(250_000.0),
            benchmarks: Benchmarks {
                industry_ev_ebitda_multiple: Some(6.0),
                industry_revenue_multiple: Some(3.0),
                ..Benchmarks::default()
            },
            ..FinancialInput::default()
        };
        let text = explain(MethodId::Comps, &fin, "USD");
        assert!(text.en.contains("- Industry EV/EBITDA Multiple: 6 (user-supplied)"));
        assert!(text.en.contains("- Industry Revenue Multiple: 3 (user-supplied)"));
        assert!(!text.en.contains("Country Risk Premium"));
        assert!(text.en.contains("$250,000 × 6 = $1,500,000"));
    }

    #[test]
    fn comps_heuristic_names_the_revenue_weight() {
        let fin = FinancialInput {
            revenue: Some(1_000_000.0),
            ebitda: Some(100_000.0),
            ..FinancialInput::default()
        };
        let text = explain(MethodId::Comps, &fin, "USD");
        assert!(text.en.contains("(revenue × 0.2 + EBITDA - total liabilities) of $300,000"));
        assert!(text.ar.contains("(الإيرادات × ٠٫٢ + "));
    }

    #[test]
    fn heuristic_multiplier_keeps_one_decimal() {
        let fin = FinancialInput {
            revenue: Some(1_000_000.0),
            ..FinancialInput::default()
        };
        let text = explain(MethodId::Multiples, &fin, "USD");
        assert!(text.en.contains("default multiplier of 0.8."));
        assert!(text.ar.contains("٠٫٨"));
    }

    #[test]
    fn arabic_figures_use_arabic_digits_only() {
        let fin = FinancialInput {
            dcf: Some(DcfInput {
                projection_years: Some(3),
                projected_fcf: vec![Some(120_000.0), Some(130_000.0), Some(140_000.0)],
                discount_rate: Some(11.5),
                terminal_growth_rate: Some(2.5),
            }),
            benchmarks: Benchmarks {
                country_risk_premium: Some(1.25),
                ..Benchmarks::default()
            },
            ..FinancialInput::default()
        };
        let text = explain(MethodId::Dcf, &fin, "SAR");
        assert!(!text.ar.chars().any(|c| c.is_ascii_digit()), "{}", text.ar);
        assert!(text.en.chars().all(|c| !('\u{0660}'..='\u{0669}').contains(&c)));
    }

    #[test]
    fn rendering_is_deterministic() {
        let fin = FinancialInput {
            revenue: Some(750_000.0),
            ..FinancialInput::default()
        };
        assert_eq!(
            explain(MethodId::Multiples, &fin, "EUR"),
            explain(MethodId::Multiples, &fin, "EUR")
        );
    }
}
