//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads preferences and sets up logging
//! - builds a request (flags, JSON file, or the wizard)
//! - runs the valuation pipeline
//! - prints reports/charts, writes optional exports, or opens the TUI

use std::io;

use chrono::Utc;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cli::{CatalogArgs, Command, LangChoice, TuiArgs, ValueArgs, WizardArgs, wizard::Wizard};
use crate::config::Preferences;
use crate::data::{COUNTRIES, CURRENCIES, METHODS, SECTORS};
use crate::domain::Locale;
use crate::error::AppError;
use crate::i18n::{self, Msg};

pub mod pipeline;

use pipeline::RunOutput;

/// Entry point for the `valuate` binary.
pub fn run() -> Result<(), AppError> {
    // Bare `valuate` starts the wizard and `valuate --company ...` means
    // `valuate value --company ...`; clap needs the subcommand spelled out.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);
    init_tracing(cli.log_level.as_filter_str());

    let prefs = Preferences::from_env();

    match cli.command {
        Command::Value(args) => handle_value(args, prefs),
        Command::Wizard(args) => handle_wizard(args, prefs),
        Command::Tui(args) => handle_tui(args, prefs),
        Command::Catalog(args) => handle_catalog(args, prefs),
    }
}

fn init_tracing(log_level: &str) {
    // A subscriber may already be installed.
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init();
}

fn handle_value(args: ValueArgs, prefs: Preferences) -> Result<(), AppError> {
    let lang = args.lang.unwrap_or_else(|| LangChoice::from(prefs.locale));
    let locales = lang.locales();
    let primary = locales.first().copied().unwrap_or(prefs.locale);

    let request = args.form.build_request(primary)?;
    let run = pipeline::run_valuation(request, primary)?;

    print_run(&run, locales, args.chart.then_some(args.width));

    if let Some(path) = &args.export_json {
        crate::io::export::write_report_json(path, &run, Utc::now())?;
    }
    if let Some(path) = &args.export_report {
        crate::io::export::write_text_report(path, &run, primary, Utc::now())?;
    }
    Ok(())
}

fn handle_wizard(args: WizardArgs, mut prefs: Preferences) -> Result<(), AppError> {
    if let Some(locale) = args.lang {
        prefs.set_locale(locale);
    }

    let stdin = io::stdin();
    let request = Wizard::new(stdin.lock(), io::stdout(), prefs.locale).run()?;
    let run = pipeline::run_valuation(request, prefs.locale)?;

    if args.tui {
        return crate::tui::run(run, prefs);
    }
    print_run(&run, &[prefs.locale], args.chart.then_some(crate::io::export::REPORT_CHART_WIDTH));
    Ok(())
}

fn handle_tui(args: TuiArgs, mut prefs: Preferences) -> Result<(), AppError> {
    if let Some(locale) = args.lang {
        prefs.set_locale(locale);
    }
    if let Some(theme) = args.theme {
        prefs.theme = theme;
    }

    let request = args.form.build_request(prefs.locale)?;
    let run = pipeline::run_valuation(request, prefs.locale)?;
    crate::tui::run(run, prefs)
}

fn handle_catalog(args: CatalogArgs, prefs: Preferences) -> Result<(), AppError> {
    let locale = args.lang.unwrap_or(prefs.locale);
    println!("{}", format_catalog(locale));
    Ok(())
}

fn print_run(run: &RunOutput, locales: &[Locale], chart_width: Option<usize>) {
    for (i, &locale) in locales.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!(
            "{}",
            crate::report::format_result(&run.request, &run.result, locale, chart_width)
        );
    }
}

/// Reference tables as a plain listing.
pub fn format_catalog(locale: Locale) -> String {
    let t = |msg| i18n::text(locale, msg);
    let mut out = String::new();

    out.push_str(&format!("{}\n", t(Msg::Country)));
    for c in COUNTRIES {
        out.push_str(&format!("  {}  {} ({})\n", c.code, c.display_name(locale), c.default_currency));
    }

    out.push_str(&format!("\n{}\n", t(Msg::Currency)));
    for c in CURRENCIES {
        out.push_str(&format!("  {}  {} ({})\n", c.code, c.display_name(locale), c.symbol_for(locale)));
    }

    out.push_str(&format!("\n{}\n", t(Msg::Sector)));
    for s in SECTORS {
        out.push_str(&format!("  {}  {}\n", s.id, s.display_name(locale)));
    }

    out.push_str(&format!("\n{}\n", t(Msg::Method)));
    for m in &METHODS {
        let required: Vec<&str> = m.required.iter().map(|&f| crate::data::input_label(f, locale)).collect();
        out.push_str(&format!(
            "  {}  {}: {}\n      [{}]\n",
            m.id,
            m.display_name(locale),
            m.display_description(locale),
            required.join(", ")
        ));
    }
    out
}

/// Rewrite argv so `valuate` defaults to the wizard.
///
/// Rules:
/// - `valuate`                      -> `valuate wizard`
/// - `valuate --company X ...`      -> `valuate value --company X ...`
/// - `valuate --help/--version/-h`  -> unchanged (show top-level help/version)
/// - `valuate --log-level debug`    -> `valuate --log-level debug wizard`
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("wizard".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "value" | "wizard" | "tui" | "catalog");
    if is_subcommand {
        return argv;
    }

    if arg1 == "--log-level" || arg1.starts_with("--log-level=") {
        let skip = if arg1 == "--log-level" { 3 } else { 2 };
        if argv.len() <= skip {
            argv.push("wizard".to_string());
            return argv;
        }
        let rest = argv.split_off(skip);
        let rewritten = rewrite_args([vec![argv[0].clone()], rest].concat());
        argv.extend(rewritten.into_iter().skip(1));
        return argv;
    }

    // If the first token is a flag, treat it as "value flags".
    if arg1.starts_with('-') {
        argv.insert(1, "value".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
