//! Read a valuation request from JSON.
//!
//! Both the crate's own camelCase shape and form dumps using the original
//! key names (`country`, `valuationMethod`, `dcfSpecifics`, ...) load.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::domain::ValuationRequest;
use crate::error::AppError;

/// Read a request JSON file.
pub fn read_request_json(path: &Path) -> Result<ValuationRequest, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open request JSON '{}': {e}", path.display())))?;
    let request = parse_request(BufReader::new(file))?;
    debug!(path = %path.display(), method = %request.method, "request loaded");
    Ok(request)
}

pub fn parse_request(reader: impl Read) -> Result<ValuationRequest, AppError> {
    serde_json::from_reader(reader).map_err(|e| AppError::new(2, format!("Invalid request JSON: {e}")))
}
