//! `biz-valuation` library crate.
//!
//! The binary (`valuate`) is a thin wrapper around this library so that:
//!
//! - the valuation engine is testable without spawning processes
//! - the CLI, wizard and TUI share one pipeline
//! - both report languages come from the same calculation trace

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod error;
pub mod i18n;
pub mod io;
pub mod plot;
pub mod report;
pub mod tui;
