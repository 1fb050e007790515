//! Command-line parsing for the valuation calculator.
//!
//! Argument parsing and request assembly live here; the valuation itself is in
//! `engine` and is reached through `app::pipeline`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::Theme;
use crate::data::default_currency_for;
use crate::domain::{
    DcfField, FieldUpdate, FinancialInput, Locale, MethodId, ScalarField, ValuationRequest, parse_field_value,
};
use crate::error::{AppError, ValuationError};
use crate::io::read_request_json;

pub mod wizard;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "valuate", version, about = "Bilingual (English/Arabic) business valuation calculator")]
pub struct Cli {
    /// Log level used when RUST_LOG is not set.
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Value a company from flags or a request JSON file and print the report.
    Value(ValueArgs),
    /// Answer the form step by step on the terminal.
    Wizard(WizardArgs),
    /// Value a request and browse the result in the terminal UI.
    Tui(TuiArgs),
    /// List countries, currencies, sectors, and methods.
    Catalog(CatalogArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Which narrative(s) to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LangChoice {
    En,
    Ar,
    Both,
}

impl LangChoice {
    pub fn locales(self) -> &'static [Locale] {
        match self {
            LangChoice::En => &[Locale::En],
            LangChoice::Ar => &[Locale::Ar],
            LangChoice::Both => &Locale::ALL,
        }
    }
}

impl From<Locale> for LangChoice {
    fn from(locale: Locale) -> Self {
        match locale {
            Locale::En => LangChoice::En,
            Locale::Ar => LangChoice::Ar,
        }
    }
}

/// The form, as flags.
///
/// Numbers are read as text so grouped (`1,000`) and Arabic-Indic input is
/// accepted. With `--input`, flags override the file's values.
#[derive(Debug, Clone, Args)]
pub struct FormArgs {
    /// Request JSON file to start from.
    #[arg(short = 'i', long, value_name = "JSON")]
    pub input: Option<PathBuf>,

    #[arg(long, required_unless_present = "input")]
    pub company: Option<String>,

    /// Country code (SA, AE, EG, ...).
    #[arg(long, required_unless_present = "input")]
    pub country: Option<String>,

    /// Sector id (technology, retail, ...).
    #[arg(long, required_unless_present = "input")]
    pub sector: Option<String>,

    #[arg(short = 'm', long, value_enum, required_unless_present = "input")]
    pub method: Option<MethodId>,

    /// Currency code; defaults to the country's currency.
    #[arg(long)]
    pub currency: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub revenue: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub ebitda: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub net_income: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub total_assets: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub total_liabilities: Option<String>,

    /// DCF projection years (1-10). Defaults to the number of `--fcf` values.
    #[arg(long)]
    pub projection_years: Option<String>,

    /// DCF discount rate (WACC), percent.
    #[arg(long, allow_hyphen_values = true)]
    pub discount_rate: Option<String>,

    /// DCF terminal growth rate, percent.
    #[arg(long, allow_hyphen_values = true)]
    pub terminal_growth: Option<String>,

    /// Projected free cash flow per year, comma-separated.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub fcf: Vec<String>,

    /// Country risk premium, percent (shown in the narrative only).
    #[arg(long, allow_hyphen_values = true)]
    pub country_risk_premium: Option<String>,

    /// Sector growth rate, percent (replaces the terminal growth rate).
    #[arg(long, allow_hyphen_values = true)]
    pub sector_growth: Option<String>,

    /// Industry P/E ratio.
    #[arg(long)]
    pub pe_ratio: Option<String>,

    /// Industry EV/EBITDA multiple.
    #[arg(long)]
    pub ev_ebitda: Option<String>,

    /// Industry revenue multiple.
    #[arg(long)]
    pub revenue_multiple: Option<String>,
}

impl FormArgs {
    /// Assemble the request: the `--input` file (if any), then each flag.
    ///
    /// Rejected flag values are reported in `locale`.
    pub fn build_request(&self, locale: Locale) -> Result<ValuationRequest, AppError> {
        let mut request = match &self.input {
            Some(path) => read_request_json(path)?,
            None => ValuationRequest {
                company_name: String::new(),
                country_code: String::new(),
                sector_id: String::new(),
                method: MethodId::Dcf,
                currency_code: String::new(),
                financials: FinancialInput::default(),
            },
        };

        if let Some(company) = &self.company {
            request.company_name = company.clone();
        }
        if let Some(country) = &self.country {
            request.country_code = country.trim().to_ascii_uppercase();
        }
        if let Some(sector) = &self.sector {
            request.sector_id = sector.trim().to_ascii_lowercase();
        }
        if let Some(method) = self.method {
            request.method = method;
        }
        match &self.currency {
            Some(currency) => request.currency_code = currency.trim().to_ascii_uppercase(),
            None if request.currency_code.is_empty() => {
                if let Some(currency) = default_currency_for(&request.country_code) {
                    request.currency_code = currency.code.to_string();
                }
            }
            None => {}
        }

        let reject = |err: ValuationError| AppError::validation(&err, locale);
        for update in self.updates().map_err(reject)? {
            request.financials.apply(update).map_err(reject)?;
        }
        Ok(request)
    }

    /// Flag values as typed field updates, in application order.
    pub fn updates(&self) -> Result<Vec<FieldUpdate>, ValuationError> {
        let mut updates = Vec::new();

        let scalars = [
            (ScalarField::Revenue, &self.revenue),
            (ScalarField::Ebitda, &self.ebitda),
            (ScalarField::NetIncome, &self.net_income),
            (ScalarField::TotalAssets, &self.total_assets),
            (ScalarField::TotalLiabilities, &self.total_liabilities),
            (ScalarField::CountryRiskPremium, &self.country_risk_premium),
            (ScalarField::SectorGrowthRate, &self.sector_growth),
            (ScalarField::IndustryPeRatio, &self.pe_ratio),
            (ScalarField::IndustryEvEbitdaMultiple, &self.ev_ebitda),
            (ScalarField::IndustryRevenueMultiple, &self.revenue_multiple),
        ];
        for (field, raw) in scalars {
            if let Some(raw) = raw {
                updates.push(FieldUpdate::Scalar(field, parse_field_value(raw)?));
            }
        }

        let years = match &self.projection_years {
            Some(raw) => parse_field_value(raw)?,
            None if !self.fcf.is_empty() => Some(self.fcf.len() as f64),
            None => None,
        };
        if years.is_some() || self.projection_years.is_some() {
            updates.push(FieldUpdate::Dcf(DcfField::ProjectionYears, years));
        }
        if let Some(raw) = &self.discount_rate {
            updates.push(FieldUpdate::Dcf(DcfField::DiscountRate, parse_field_value(raw)?));
        }
        if let Some(raw) = &self.terminal_growth {
            updates.push(FieldUpdate::Dcf(DcfField::TerminalGrowthRate, parse_field_value(raw)?));
        }
        for (index, raw) in self.fcf.iter().enumerate() {
            updates.push(FieldUpdate::ProjectedFcfAt {
                index,
                value: parse_field_value(raw)?,
            });
        }
        Ok(updates)
    }
}

/// Options for `valuate value`.
#[derive(Debug, Clone, Args)]
pub struct ValueArgs {
    #[command(flatten)]
    pub form: FormArgs,

    /// Narrative language(s) to print; defaults to VALUATE_LANG or English.
    #[arg(short = 'l', long, value_enum)]
    pub lang: Option<LangChoice>,

    /// Print the key-figures bar chart.
    #[arg(long)]
    pub chart: bool,

    /// Bar chart width (columns).
    #[arg(long, default_value_t = 40)]
    pub width: usize,

    /// Export request, result, and chart series to JSON.
    #[arg(long, value_name = "JSON")]
    pub export_json: Option<PathBuf>,

    /// Export a paginated text report (first selected language).
    #[arg(long, value_name = "TXT")]
    pub export_report: Option<PathBuf>,
}

/// Options for `valuate wizard`.
#[derive(Debug, Clone, Args)]
pub struct WizardArgs {
    /// Prompt and report language; defaults to VALUATE_LANG or English.
    #[arg(short = 'l', long, value_enum)]
    pub lang: Option<Locale>,

    /// Print the key-figures bar chart.
    #[arg(long)]
    pub chart: bool,

    /// Open the result in the terminal UI instead of printing it.
    #[arg(long)]
    pub tui: bool,
}

/// Options for `valuate tui`.
#[derive(Debug, Clone, Args)]
pub struct TuiArgs {
    #[command(flatten)]
    pub form: FormArgs,

    #[arg(short = 'l', long, value_enum)]
    pub lang: Option<Locale>,

    #[arg(long, value_enum)]
    pub theme: Option<Theme>,
}

/// Options for `valuate catalog`.
#[derive(Debug, Clone, Args)]
pub struct CatalogArgs {
    #[arg(short = 'l', long, value_enum)]
    pub lang: Option<Locale>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    fn value_args(cli: Cli) -> ValueArgs {
        match cli.command {
            Command::Value(args) => args,
            other => panic!("expected value subcommand, got {other:?}"),
        }
    }

    #[test]
    fn book_flags_build_request_with_default_currency() {
        let args = value_args(parse(&[
            "valuate",
            "value",
            "--company",
            "Acme",
            "--country",
            "sa",
            "--sector",
            "Retail",
            "--method",
            "book",
            "--total-assets",
            "٢٠٠٠٠٠٠",
            "--total-liabilities",
            "500000",
        ]));
        let req = args.form.build_request(Locale::En).unwrap();
        assert_eq!(req.country_code, "SA");
        assert_eq!(req.sector_id, "retail");
        assert_eq!(req.currency_code, "SAR");
        assert_eq!(req.financials.total_assets, Some(2_000_000.0));
        assert_eq!(req.financials.total_liabilities, Some(500_000.0));
    }

    #[test]
    fn fcf_list_sets_projection_years() {
        let args = value_args(parse(&[
            "valuate", "value", "--company", "Acme", "--country", "US", "--sector", "technology", "--method", "dcf",
            "--discount-rate", "10", "--terminal-growth", "2", "--fcf", "100000,-5000,120000",
        ]));
        let req = args.form.build_request(Locale::En).unwrap();
        let dcf = req.financials.dcf.unwrap();
        assert_eq!(dcf.projection_years, Some(3));
        assert_eq!(dcf.projected_fcf, vec![Some(100_000.0), Some(-5_000.0), Some(120_000.0)]);
        assert_eq!(dcf.discount_rate, Some(10.0));
    }

    #[test]
    fn more_fcf_values_than_years_is_an_error() {
        let args = value_args(parse(&[
            "valuate", "value", "--company", "Acme", "--country", "US", "--sector", "technology", "--method", "dcf",
            "--projection-years", "1", "--fcf", "1,2",
        ]));
        let err = args.form.build_request(Locale::En).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn rejected_flags_are_reported_in_the_chosen_language() {
        let args = value_args(parse(&[
            "valuate", "value", "--company", "Acme", "--country", "US", "--sector", "retail", "--method",
            "multiples", "--revenue", "lots",
        ]));
        let err = args.form.build_request(Locale::Ar).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "«lots» ليس رقماً صالحاً.");
    }

    #[test]
    fn invalid_number_is_rejected() {
        let args = value_args(parse(&[
            "valuate", "value", "--company", "Acme", "--country", "US", "--sector", "retail", "--method",
            "multiples", "--revenue", "lots",
        ]));
        let err = args.form.updates().unwrap_err();
        assert_eq!(err, ValuationError::InvalidNumber("lots".to_string()));
    }

    #[test]
    fn form_fields_are_required_without_input_file() {
        assert!(Cli::try_parse_from(["valuate", "value", "--company", "Acme"]).is_err());
        assert!(Cli::try_parse_from(["valuate", "value", "--input", "req.json"]).is_ok());
    }

    #[test]
    fn global_log_level_defaults_to_warn() {
        let cli = parse(&["valuate", "catalog", "--log-level", "debug"]);
        assert_eq!(cli.log_level, LogLevel::Debug);
        let cli = parse(&["valuate", "catalog"]);
        assert_eq!(cli.log_level, LogLevel::Warn);
    }
}
