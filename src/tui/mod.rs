//! Ratatui-based result viewer.
//!
//! Shows a finished valuation: headline figures, the key-figures chart, and
//! the scrollable calculation narrative. Language and theme can be switched
//! without recomputing because the result already carries both narratives.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Utc;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use plotters::style::RGBColor;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use tracing::info;

use crate::app::pipeline::RunOutput;
use crate::config::{Preferences, Theme};
use crate::domain::TextDirection;
use crate::error::AppError;
use crate::i18n::{self, Msg};
use crate::io::export::{write_report_json, write_text_report};
use crate::report::format::format_currency;
use crate::report::{benchmark_value, render_explanation_plain, request_details};

mod plotters_chart;

use plotters_chart::{ValuationBarChart, value_bounds};

/// Start the TUI on a computed valuation.
pub fn run(run: RunOutput, prefs: Preferences) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(4, format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(run, prefs, PathBuf::from("."));
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(4, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(4, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Colors for one theme.
#[derive(Debug, Clone, Copy)]
struct Palette {
    fg: Color,
    bg: Color,
    accent: Color,
    muted: Color,
    chart_axis: RGBColor,
    chart_fill: RGBColor,
    chart_highlight: RGBColor,
    chart_negative: RGBColor,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                fg: Color::Black,
                bg: Color::White,
                accent: Color::Blue,
                muted: Color::DarkGray,
                chart_axis: RGBColor(40, 40, 40),
                chart_fill: RGBColor(130, 202, 157),
                chart_highlight: RGBColor(59, 130, 246),
                chart_negative: RGBColor(220, 38, 38),
            },
            Theme::Dark => Self {
                fg: Color::White,
                bg: Color::Black,
                accent: Color::Cyan,
                muted: Color::Gray,
                chart_axis: RGBColor(255, 255, 255),
                chart_fill: RGBColor(0, 255, 0),
                chart_highlight: RGBColor(0, 255, 255),
                chart_negative: RGBColor(255, 0, 0),
            },
        }
    }
}

struct App {
    run: RunOutput,
    prefs: Preferences,
    export_dir: PathBuf,
    scroll: u16,
    status: String,
}

impl App {
    fn new(run: RunOutput, prefs: Preferences, export_dir: PathBuf) -> Self {
        Self {
            run,
            prefs,
            export_dir,
            scroll: 0,
            status: String::new(),
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(4, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(4, format!("Event poll error: {e}")))? {
                continue;
            }

            match event::read().map_err(|e| AppError::new(4, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the viewer should close.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('l') => {
                self.prefs.toggle_locale();
                self.scroll = 0;
                self.status.clear();
            }
            KeyCode::Char('t') => self.prefs.toggle_theme(),
            KeyCode::Char('r') => {
                self.prefs.reload();
                self.status.clear();
            }
            KeyCode::Char('e') => self.export(),
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1).min(self.max_scroll()),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(10),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(10).min(self.max_scroll()),
            KeyCode::Home => self.scroll = 0,
            _ => {}
        }
        false
    }

    fn max_scroll(&self) -> u16 {
        let lines = self.narrative().lines().count();
        u16::try_from(lines.saturating_sub(1)).unwrap_or(u16::MAX)
    }

    fn narrative(&self) -> String {
        render_explanation_plain(self.run.result.explanation.get(self.prefs.locale))
    }

    /// Write the JSON document and the text report next to each other.
    fn export(&mut self) {
        let locale = self.prefs.locale;
        let stem = export_stem(&self.run.request.company_name);
        let json = self.export_dir.join(format!("{stem}.json"));
        let txt = self.export_dir.join(format!("{stem}.txt"));
        let now = Utc::now();

        let written = write_report_json(&json, &self.run, now).and_then(|()| write_text_report(&txt, &self.run, locale, now));
        self.status = match written {
            Ok(()) => {
                info!(json = %json.display(), txt = %txt.display(), "exported from viewer");
                i18n::tr(locale, Msg::TuiExported, &[("path", display_pair(&json, &txt))])
            }
            Err(err) => i18n::tr(locale, Msg::TuiExportFailed, &[("error", err.to_string())]),
        };
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let palette = Palette::for_theme(self.prefs.theme);
        let size = frame.area();
        frame.render_widget(Block::default().style(Style::default().fg(palette.fg).bg(palette.bg)), size);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0], palette);
        self.draw_body(frame, chunks[1], palette);
        self.draw_footer(frame, chunks[2], palette);
    }

    fn alignment(&self) -> Alignment {
        match self.prefs.locale.direction() {
            TextDirection::Ltr => Alignment::Left,
            TextDirection::Rtl => Alignment::Right,
        }
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect, palette: Palette) {
        let locale = self.prefs.locale;
        let result = &self.run.result;
        let value = format_currency(result.estimated_value, &result.currency_code, locale);

        let details = request_details(&self.run.request, locale)
            .into_iter()
            .take(4)
            .map(|(_, v)| v)
            .collect::<Vec<_>>()
            .join(" | ");

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("{}: ", i18n::text(locale, Msg::EstimatedValue)),
                    Style::default().fg(palette.muted),
                ),
                Span::styled(value, Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)),
            ]),
            Line::from(Span::styled(details, Style::default().fg(palette.muted))),
        ];

        let p = Paragraph::new(Text::from(lines)).alignment(self.alignment()).block(
            Block::default()
                .title(i18n::text(locale, Msg::ReportTitle))
                .borders(Borders::ALL),
        );
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect, palette: Palette) {
        let (narrative_pct, side_pct) = (60, 40);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(narrative_pct), Constraint::Percentage(side_pct)])
            .split(area);

        // Arabic reads right to left, so the narrative goes on the right.
        let (narrative_area, side_area) = match self.prefs.locale.direction() {
            TextDirection::Ltr => (columns[0], columns[1]),
            TextDirection::Rtl => {
                let swapped = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(side_pct), Constraint::Percentage(narrative_pct)])
                    .split(area);
                (swapped[1], swapped[0])
            }
        };

        self.draw_narrative(frame, narrative_area);

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(10), Constraint::Length(self.inputs_height())])
            .split(side_area);
        self.draw_chart(frame, side[0], palette);
        self.draw_inputs(frame, side[1]);
    }

    fn draw_narrative(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let locale = self.prefs.locale;
        let mut text = self.narrative();
        text.push_str("\n\n");
        text.push_str(self.run.result.summary.get(locale));

        let p = Paragraph::new(text)
            .alignment(self.alignment())
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .block(
                Block::default()
                    .title(i18n::text(locale, Msg::CalculationDetails))
                    .borders(Borders::ALL),
            );
        frame.render_widget(p, area);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect, palette: Palette) {
        let locale = self.prefs.locale;
        let block = Block::default()
            .title(i18n::text(locale, Msg::ChartTitle))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let bars = self.run.chart(locale);
        let legend_height = (bars.len() as u16).min(inner.height / 2);
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(legend_height)])
            .split(inner);

        let widget = ValuationBarChart {
            bars: &bars,
            y_bounds: value_bounds(&bars),
            locale,
            axis_color: palette.chart_axis,
            fill: palette.chart_fill,
            highlight: palette.chart_highlight,
            negative: palette.chart_negative,
        };
        frame.render_widget(widget, parts[0]);

        let currency = &self.run.result.currency_code;
        let legend: Vec<Line> = bars
            .iter()
            .enumerate()
            .map(|(i, bar)| {
                Line::from(format!(
                    "{}. {}: {}",
                    i + 1,
                    bar.label,
                    format_currency(bar.value, currency, locale)
                ))
            })
            .collect();
        frame.render_widget(Paragraph::new(legend).alignment(self.alignment()), parts[1]);
    }

    fn inputs_lines(&self) -> Vec<String> {
        let locale = self.prefs.locale;
        let benchmarks = self.run.result.benchmarks_used.as_ref();
        benchmarks
            .map(|b| b.supplied())
            .unwrap_or_default()
            .into_iter()
            .map(|(field, value)| {
                format!(
                    "{}: {}",
                    i18n::text(locale, field.into()),
                    benchmark_value(field, value, locale)
                )
            })
            .collect()
    }

    fn inputs_height(&self) -> u16 {
        let n = self.inputs_lines().len() as u16;
        if n == 0 { 0 } else { n + 2 }
    }

    fn draw_inputs(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let lines = self.inputs_lines();
        if lines.is_empty() {
            return;
        }
        let p = Paragraph::new(lines.join("\n")).alignment(self.alignment()).block(
            Block::default()
                .title(i18n::text(self.prefs.locale, Msg::BenchmarksTitle))
                .borders(Borders::ALL),
        );
        frame.render_widget(p, area);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect, palette: Palette) {
        let help = i18n::text(self.prefs.locale, Msg::TuiHelp);
        let mut spans = vec![Span::styled(help, Style::default().fg(palette.muted))];
        if !self.status.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(&self.status, Style::default().fg(Color::Yellow)));
        }
        let p = Paragraph::new(Line::from(spans))
            .alignment(self.alignment())
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

/// File stem for exports: `valuation-<company>` with unsafe characters dropped.
fn export_stem(company_name: &str) -> String {
    let slug: String = company_name
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    let slug = slug.trim_matches('_');
    if slug.is_empty() {
        "valuation".to_string()
    } else {
        format!("valuation-{slug}")
    }
}

fn display_pair(a: &Path, b: &Path) -> String {
    format!("{}, {}", a.display(), b.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::run_valuation;
    use crate::domain::{FinancialInput, Locale, MethodId, ValuationRequest};

    fn app(dir: PathBuf) -> App {
        let run = run_valuation(
            ValuationRequest {
                company_name: "Acme Trading".to_string(),
                country_code: "SA".to_string(),
                sector_id: "retail".to_string(),
                method: MethodId::Book,
                currency_code: "SAR".to_string(),
                financials: FinancialInput {
                    total_assets: Some(2_000_000.0),
                    total_liabilities: Some(500_000.0),
                    ..FinancialInput::default()
                },
            },
            Locale::En,
        )
        .unwrap();
        App::new(run, Preferences::default(), dir)
    }

    #[test]
    fn language_and_theme_toggle() {
        let mut app = app(PathBuf::from("."));
        assert!(!app.handle_key(KeyCode::Char('l')));
        assert_eq!(app.prefs.locale, Locale::Ar);
        assert_eq!(app.alignment(), Alignment::Right);
        app.handle_key(KeyCode::Char('t'));
        assert_eq!(app.prefs.theme, Theme::Dark);
        assert!(app.handle_key(KeyCode::Char('q')));
    }

    #[test]
    fn scrolling_is_clamped() {
        let mut app = app(PathBuf::from("."));
        app.handle_key(KeyCode::Up);
        assert_eq!(app.scroll, 0);
        for _ in 0..1_000 {
            app.handle_key(KeyCode::Down);
        }
        assert_eq!(app.scroll, app.max_scroll());
        app.handle_key(KeyCode::Home);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn export_writes_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path().to_path_buf());
        app.handle_key(KeyCode::Char('e'));
        assert!(app.status.starts_with("Exported to "));
        assert!(dir.path().join("valuation-Acme_Trading.json").exists());
        assert!(dir.path().join("valuation-Acme_Trading.txt").exists());
    }

    #[test]
    fn export_stem_is_filesystem_safe() {
        assert_eq!(export_stem(" Acme / Co. "), "valuation-Acme___Co");
        assert_eq!(export_stem("  "), "valuation");
        assert_eq!(export_stem("شركة"), "valuation-شركة");
    }
}
