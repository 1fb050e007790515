//! Input/output helpers.
//!
//! - request JSON ingest (`request`)
//! - report exports: JSON document and paginated text (`export`)

pub mod export;
pub mod request;

pub use export::*;
pub use request::*;
