//! Interactive form on the terminal.
//!
//! Walks the same steps as the form: company, country, sector, method,
//! currency, then the inputs the chosen method shows. Lists are answered by
//! number; numbers accept grouping and Arabic-Indic digits. `q` cancels.
//!
//! Reader and writer are generic so the flow can be driven from tests.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::data::{COUNTRIES, CURRENCIES, METHODS, SECTORS};
use crate::domain::{
    DcfField, FieldUpdate, FinancialInput, InputField, Locale, MAX_PROJECTION_YEARS, ValuationRequest, parse_field_value,
};
use crate::error::{AppError, ValuationError};
use crate::i18n::{self, Msg};
use crate::report::format::{format_integer, localize_digits};

pub struct Wizard<R, W> {
    input: R,
    output: W,
    locale: Locale,
}

impl<R: BufRead, W: Write> Wizard<R, W> {
    pub fn new(input: R, output: W, locale: Locale) -> Self {
        Self { input, output, locale }
    }

    /// Collect one request. Field-level problems are re-asked; the finished
    /// request still goes through the pipeline's validation.
    pub fn run(mut self) -> Result<ValuationRequest, AppError> {
        let locale = self.locale;

        let company_name = self.ask_company()?;
        let country = self.choose(Msg::Country, COUNTRIES, |c| c.display_name(locale).to_string(), None)?;
        let sector = self.choose(Msg::Sector, SECTORS, |s| s.display_name(locale).to_string(), None)?;
        let method = self.choose(
            Msg::Method,
            &METHODS,
            |m| format!("{} - {}", m.display_name(locale), m.display_description(locale)),
            None,
        )?;
        let default_currency = CURRENCIES.iter().position(|c| c.code == country.default_currency);
        let currency = self.choose(
            Msg::Currency,
            CURRENCIES,
            |c| format!("{} ({})", c.display_name(locale), c.symbol_for(locale)),
            default_currency,
        )?;

        let mut financials = FinancialInput::default();
        for &field in method.inputs {
            match field {
                InputField::DcfInputs => self.ask_dcf(&mut financials)?,
                InputField::BenchmarkInputs => {
                    for &benchmark in method.id.benchmark_fields() {
                        let value = self.ask_number(i18n::text(locale, benchmark.into()), false)?;
                        self.apply(&mut financials, FieldUpdate::Scalar(benchmark, value))?;
                    }
                }
                other => {
                    if let Some(scalar) = other.scalar() {
                        let value = self.ask_number(i18n::text(locale, scalar.into()), method.is_required(other))?;
                        self.apply(&mut financials, FieldUpdate::Scalar(scalar, value))?;
                    }
                }
            }
        }

        debug!(method = %method.id, country = country.code, "wizard complete");
        Ok(ValuationRequest {
            company_name,
            country_code: country.code.to_string(),
            sector_id: sector.id.to_string(),
            method: method.id,
            currency_code: currency.code.to_string(),
            financials,
        })
    }

    fn ask_company(&mut self) -> Result<String, AppError> {
        loop {
            let answer = self.prompt(&format!("{}: ", self.t(Msg::CompanyName)))?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            self.say(&ValuationError::EmptyCompanyName.localized(self.locale))?;
        }
    }

    fn ask_dcf(&mut self, financials: &mut FinancialInput) -> Result<(), AppError> {
        let years = loop {
            let value = self.ask_number(self.t(Msg::ProjectionYears), true)?;
            match value {
                Some(v) if v.fract() == 0.0 && (1.0..=f64::from(MAX_PROJECTION_YEARS)).contains(&v) => break v,
                _ => self.say(&self.retry_text(&ValuationError::ProjectionYearsOutOfRange(0)))?,
            }
        };
        self.apply(financials, FieldUpdate::Dcf(DcfField::ProjectionYears, Some(years)))?;

        for field in [DcfField::DiscountRate, DcfField::TerminalGrowthRate] {
            let value = self.ask_number(self.t(field.into()), true)?;
            self.apply(financials, FieldUpdate::Dcf(field, value))?;
        }

        for index in 0..years as usize {
            let year = format_integer((index + 1) as f64, self.locale);
            let label = i18n::tr(self.locale, Msg::FcfYearLabel, &[("year", year)]);
            let value = self.ask_number(&label, true)?;
            self.apply(financials, FieldUpdate::ProjectedFcfAt { index, value })?;
        }
        Ok(())
    }

    /// Ask for a number until the answer parses; `required` re-asks on empty.
    fn ask_number(&mut self, label: &str, required: bool) -> Result<Option<f64>, AppError> {
        let prompt = if required {
            format!("{label}: ")
        } else {
            format!("{label} {}: ", self.t(Msg::PromptOptional))
        };
        loop {
            let answer = self.prompt(&prompt)?;
            match parse_field_value(&answer) {
                Ok(None) if required => {
                    let msg = i18n::tr(self.locale, Msg::ErrRequiredField, &[("field", label.to_string())]);
                    self.say(&msg)?;
                }
                Ok(value) => return Ok(value),
                Err(err) => {
                    let msg = self.retry_text(&err);
                    self.say(&msg)?;
                }
            }
        }
    }

    /// Numbered choice from a catalog table. With a default, an empty answer picks it.
    fn choose<'t, T>(
        &mut self,
        label: Msg,
        items: &'t [T],
        display: impl Fn(&T) -> String,
        default: Option<usize>,
    ) -> Result<&'t T, AppError> {
        let mut listing = String::new();
        for (idx, item) in items.iter().enumerate() {
            let marker = if Some(idx) == default { "*" } else { " " };
            let number = localize_digits(&format!("{:>3}", idx + 1), self.locale);
            listing.push_str(&format!("{marker}{number}) {}\n", display(item)));
        }
        self.write(&listing)?;

        let prompt = format!(
            "{}: ",
            i18n::tr(
                self.locale,
                Msg::PromptChoose,
                &[
                    ("label", self.t(label).to_string()),
                    ("max", format_integer(items.len() as f64, self.locale)),
                ],
            )
        );
        loop {
            let answer = self.prompt(&prompt)?;
            if answer.is_empty() {
                if let Some(idx) = default {
                    return Ok(&items[idx]);
                }
            }
            let choice = parse_field_value(&answer).ok().flatten();
            match choice {
                Some(n) if n.fract() == 0.0 && n >= 1.0 && (n as usize) <= items.len() => {
                    return Ok(&items[n as usize - 1]);
                }
                _ => self.say(self.t(Msg::PromptInvalidChoice))?,
            }
        }
    }

    fn apply(&self, financials: &mut FinancialInput, update: FieldUpdate) -> Result<(), AppError> {
        financials
            .apply(update)
            .map_err(|err| AppError::validation(&err, self.locale))
    }

    fn retry_text(&self, err: &ValuationError) -> String {
        i18n::tr(self.locale, Msg::PromptRetry, &[("error", err.localized(self.locale))])
    }

    fn t(&self, msg: Msg) -> &'static str {
        i18n::text(self.locale, msg)
    }

    fn prompt(&mut self, text: &str) -> Result<String, AppError> {
        self.write(text)?;
        let mut line = String::new();
        let bytes = self
            .input
            .read_line(&mut line)
            .map_err(|e| AppError::new(2, format!("Failed to read input: {e}")))?;
        if bytes == 0 {
            return Err(AppError::new(2, "No input received. Use `valuate value` to pass flags instead."));
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            return Err(AppError::new(2, "Canceled."));
        }
        Ok(line.to_string())
    }

    fn say(&mut self, text: &str) -> Result<(), AppError> {
        self.write(&format!("{text}\n"))
    }

    fn write(&mut self, text: &str) -> Result<(), AppError> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|()| self.output.flush())
            .map_err(|e| AppError::new(2, format!("Failed to write prompt: {e}")))
    }
}
