//! Typed form-field updates.
//!
//! Every edit the form can make to a [`FinancialInput`] is one [`FieldUpdate`]
//! variant; there is no string addressing of nested fields.

use crate::domain::{DcfField, DcfInput, FinancialInput, MAX_PROJECTION_YEARS, ScalarField};
use crate::error::ValuationError;
use crate::report::format::normalize_digits;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldUpdate {
    /// Set or clear a top-level figure or benchmark override.
    Scalar(ScalarField, Option<f64>),
    /// Set or clear a DCF field.
    Dcf(DcfField, Option<f64>),
    /// Set or clear the projected FCF for one year (0-based index).
    ProjectedFcfAt { index: usize, value: Option<f64> },
}

impl FinancialInput {
    /// Apply one edit.
    ///
    /// Setting the projection years to a positive value resizes the FCF list to
    /// `min(years, 10)` entries, keeping entries that still fit; clearing it or
    /// setting it to zero or less empties the list.
    pub fn apply(&mut self, update: FieldUpdate) -> Result<(), ValuationError> {
        match update {
            FieldUpdate::Scalar(field, value) => {
                *self.slot_mut(field) = value;
            }
            FieldUpdate::Dcf(field, value) => {
                let dcf = self.dcf.get_or_insert_with(DcfInput::default);
                match field {
                    DcfField::ProjectionYears => set_projection_years(dcf, value)?,
                    DcfField::DiscountRate => dcf.discount_rate = value,
                    DcfField::TerminalGrowthRate => dcf.terminal_growth_rate = value,
                }
            }
            FieldUpdate::ProjectedFcfAt { index, value } => {
                let dcf = self.dcf.get_or_insert_with(DcfInput::default);
                let len = dcf.projected_fcf.len();
                let slot = dcf
                    .projected_fcf
                    .get_mut(index)
                    .ok_or(ValuationError::FcfIndexOutOfRange { index, len })?;
                *slot = value;
            }
        }
        Ok(())
    }
}

fn set_projection_years(dcf: &mut DcfInput, value: Option<f64>) -> Result<(), ValuationError> {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => {
            if v.fract() != 0.0 {
                return Err(ValuationError::InvalidNumber(v.to_string()));
            }
            let capped = (v as u32).min(MAX_PROJECTION_YEARS);
            dcf.projection_years = Some(v.min(u32::MAX as f64) as u32);
            dcf.projected_fcf.resize(capped as usize, None);
        }
        Some(v) if !v.is_finite() => return Err(ValuationError::InvalidNumber(v.to_string())),
        _ => {
            dcf.projection_years = value.map(|_| 0);
            dcf.projected_fcf.clear();
        }
    }
    Ok(())
}

/// Parse raw field text: empty means "cleared", anything else must be a finite number.
///
/// Grouping separators are ignored and Arabic-Indic digits are accepted.
pub fn parse_field_value(raw: &str) -> Result<Option<f64>, ValuationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let cleaned: String = normalize_digits(trimmed)
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(ValuationError::InvalidNumber(trimmed.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_fcf(values: &[f64]) -> FinancialInput {
        let mut input = FinancialInput::default();
        input
            .apply(FieldUpdate::Dcf(DcfField::ProjectionYears, Some(values.len() as f64)))
            .unwrap();
        for (i, v) in values.iter().enumerate() {
            input
                .apply(FieldUpdate::ProjectedFcfAt { index: i, value: Some(*v) })
                .unwrap();
        }
        input
    }

    #[test]
    fn shrinking_projection_years_keeps_leading_entries() {
        let mut input = with_fcf(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        input
            .apply(FieldUpdate::Dcf(DcfField::ProjectionYears, Some(3.0)))
            .unwrap();
        let dcf = input.dcf.unwrap();
        assert_eq!(dcf.projection_years, Some(3));
        assert_eq!(dcf.projected_fcf, vec![Some(1.0), Some(2.0), Some(3.0)]);
    }

    #[test]
    fn growing_projection_years_pads_and_caps_list() {
        let mut input = with_fcf(&[1.0]);
        input
            .apply(FieldUpdate::Dcf(DcfField::ProjectionYears, Some(12.0)))
            .unwrap();
        let dcf = input.dcf.unwrap();
        assert_eq!(dcf.projected_fcf.len(), 10);
        assert_eq!(dcf.projected_fcf[0], Some(1.0));
        assert_eq!(dcf.projected_fcf[9], None);
    }

    #[test]
    fn clearing_projection_years_empties_list() {
        let mut input = with_fcf(&[1.0, 2.0]);
        input
            .apply(FieldUpdate::Dcf(DcfField::ProjectionYears, None))
            .unwrap();
        let dcf = input.dcf.as_ref().unwrap();
        assert_eq!(dcf.projection_years, None);
        assert!(dcf.projected_fcf.is_empty());

        input
            .apply(FieldUpdate::Dcf(DcfField::ProjectionYears, Some(-2.0)))
            .unwrap();
        assert_eq!(input.dcf.unwrap().projection_years, Some(0));
    }

    #[test]
    fn fcf_index_outside_horizon_is_rejected() {
        let mut input = with_fcf(&[1.0, 2.0]);
        let err = input
            .apply(FieldUpdate::ProjectedFcfAt { index: 2, value: Some(9.0) })
            .unwrap_err();
        assert_eq!(err, ValuationError::FcfIndexOutOfRange { index: 2, len: 2 });
    }

    #[test]
    fn scalar_updates_reach_benchmarks() {
        let mut input = FinancialInput::default();
        input
            .apply(FieldUpdate::Scalar(ScalarField::IndustryPeRatio, Some(14.0)))
            .unwrap();
        input
            .apply(FieldUpdate::Scalar(ScalarField::Revenue, Some(5.0)))
            .unwrap();
        assert_eq!(input.benchmarks.industry_pe_ratio, Some(14.0));
        assert_eq!(input.revenue, Some(5.0));
    }

    #[test]
    fn parse_field_value_handles_blank_and_garbage() {
        assert_eq!(parse_field_value("  "), Ok(None));
        assert_eq!(parse_field_value("1,250,000"), Ok(Some(1_250_000.0)));
        assert_eq!(parse_field_value("-3.5"), Ok(Some(-3.5)));
        assert_eq!(
            parse_field_value("abc"),
            Err(ValuationError::InvalidNumber("abc".to_string()))
        );
        assert!(parse_field_value("inf").is_err());
        assert_eq!(parse_field_value("١٢٫٥"), Ok(Some(12.5)));
    }
}
