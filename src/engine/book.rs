//! Book value: net assets, floored at 1,000. Not rounded.

use tracing::debug;

use crate::domain::{BookTrace, FinancialInput, MethodId, ScalarField};
use crate::engine::{apply_floor, validate::require};
use crate::error::ValuationError;

pub fn compute(financials: &FinancialInput) -> Result<BookTrace, ValuationError> {
    let total_assets = require(MethodId::Book, financials, ScalarField::TotalAssets)?;
    let total_liabilities = require(MethodId::Book, financials, ScalarField::TotalLiabilities)?;

    let book_value = total_assets - total_liabilities;
    let (final_value, floor) = apply_floor(MethodId::Book, book_value, book_value)?;
    debug!(book_value, final_value, "book value");

    Ok(BookTrace {
        total_assets,
        total_liabilities,
        book_value,
        floor,
        final_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(assets: f64, liabilities: f64) -> BookTrace {
        let fin = FinancialInput {
            total_assets: Some(assets),
            total_liabilities: Some(liabilities),
            ..FinancialInput::default()
        };
        compute(&fin).unwrap()
    }

    #[test]
    fn net_assets() {
        let t = book(2_000_000.0, 500_000.0);
        assert_eq!(t.final_value, 1_500_000.0);
        assert!(!t.floor.applied);
    }

    #[test]
    fn fractional_book_value_is_kept() {
        assert_eq!(book(10_000.75, 0.5).final_value, 10_000.25);
    }

    #[test]
    fn negative_equity_hits_floor() {
        let t = book(100.0, 5_000.0);
        assert_eq!(t.book_value, -4_900.0);
        assert_eq!(t.final_value, 1_000.0);
        assert!(t.floor.applied);
    }
}
