//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - request/result types (`ValuationRequest`, `FinancialInput`, `ValuationResult`)
//! - selector enums (`MethodId`, `Locale`, field enums)
//! - the engine's numeric trace (`Trace` and friends)
//! - typed form edits (`FieldUpdate`)

pub mod trace;
pub mod types;
pub mod update;

pub use trace::*;
pub use types::*;
pub use update::*;
