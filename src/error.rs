use thiserror::Error;

use crate::domain::{DcfField, InputField, Locale, MethodId, ScalarField};
use crate::i18n::{self, Msg};

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// Validation/integration failure shown in the given locale.
    pub fn validation(err: &ValuationError, locale: Locale) -> Self {
        Self::new(2, err.localized(locale))
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

impl From<ValuationError> for AppError {
    fn from(err: ValuationError) -> Self {
        AppError::new(2, err.to_string())
    }
}

/// Input that cannot be valued, or codes the reference tables don't know.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValuationError {
    #[error("company name is required")]
    EmptyCompanyName,

    #[error("{field} is required for the {method} method")]
    MissingField { method: MethodId, field: InputField },

    #[error("{0} must be a finite number")]
    NonFiniteField(ScalarField),

    #[error("DCF {0} must be a finite number")]
    NonFiniteDcfField(DcfField),

    #[error("DCF inputs are required for the dcf method")]
    MissingDcfInputs,

    #[error("DCF {0} is required")]
    MissingDcfField(DcfField),

    #[error("projection years must be between 1 and 10 (got {0})")]
    ProjectionYearsOutOfRange(u32),

    #[error("expected {expected} projected FCF entries, got {actual}")]
    ProjectedFcfLength { expected: usize, actual: usize },

    #[error("projected FCF for year {year} is required")]
    MissingProjectedFcf { year: usize },

    #[error("projected FCF for year {year} must be a finite number")]
    NonFiniteProjectedFcf { year: usize },

    #[error("discount rate must be greater than -100% (got {0})")]
    DiscountRateOutOfRange(f64),

    #[error("unknown valuation method: {0}")]
    UnknownMethod(String),

    #[error("unknown country code: {0}")]
    UnknownCountry(String),

    #[error("unknown sector id: {0}")]
    UnknownSector(String),

    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),

    #[error("not a valid number: {0:?}")]
    InvalidNumber(String),

    #[error("projected FCF index {index} is outside the projection horizon ({len} years)")]
    FcfIndexOutOfRange { index: usize, len: usize },

    #[error("the {0} valuation is not a finite number; the inputs are too large")]
    NonFiniteResult(MethodId),
}

impl ValuationError {
    /// The single human-readable form message for this error.
    pub fn localized(&self, locale: Locale) -> String {
        let t = |msg: Msg| i18n::text(locale, msg);
        let field_msg = |msg: Msg, label: String| i18n::render(t(msg), &[("field", label)]);

        match self {
            ValuationError::EmptyCompanyName => t(Msg::ErrCompanyName).to_string(),
            ValuationError::MissingField { field, .. } => {
                field_msg(Msg::ErrRequiredField, t(Msg::from(*field)).to_string())
            }
            ValuationError::NonFiniteField(field) => {
                field_msg(Msg::ErrInvalidField, t(Msg::from(*field)).to_string())
            }
            ValuationError::NonFiniteDcfField(field) => {
                field_msg(Msg::ErrInvalidField, t(Msg::from(*field)).to_string())
            }
            ValuationError::MissingDcfInputs => {
                field_msg(Msg::ErrRequiredField, t(Msg::from(InputField::DcfInputs)).to_string())
            }
            ValuationError::MissingDcfField(field) => {
                field_msg(Msg::ErrRequiredField, t(Msg::from(*field)).to_string())
            }
            ValuationError::ProjectionYearsOutOfRange(_) => t(Msg::ErrProjectionYears).to_string(),
            ValuationError::ProjectedFcfLength { .. } => t(Msg::ErrFcfCount).to_string(),
            ValuationError::MissingProjectedFcf { year } => field_msg(
                Msg::ErrRequiredField,
                fcf_year_label(locale, *year),
            ),
            ValuationError::NonFiniteProjectedFcf { year } => field_msg(
                Msg::ErrInvalidField,
                fcf_year_label(locale, *year),
            ),
            ValuationError::DiscountRateOutOfRange(_) => t(Msg::ErrDiscountRate).to_string(),
            ValuationError::UnknownMethod(v)
            | ValuationError::UnknownCountry(v)
            | ValuationError::UnknownSector(v)
            | ValuationError::UnknownCurrency(v) => {
                i18n::render(t(Msg::ErrUnknownCode), &[("code", v.clone())])
            }
            ValuationError::InvalidNumber(v) => {
                i18n::render(t(Msg::ErrInvalidNumber), &[("value", v.clone())])
            }
            ValuationError::FcfIndexOutOfRange { .. } => t(Msg::ErrFcfCount).to_string(),
            ValuationError::NonFiniteResult(_) => t(Msg::ErrValueOverflow).to_string(),
        }
    }
}

fn fcf_year_label(locale: Locale, year: usize) -> String {
    i18n::render(
        i18n::text(locale, Msg::FcfYearLabel),
        &[("year", crate::report::format::format_integer(year as f64, locale))],
    )
}
