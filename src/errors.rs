use std::fmt;

use rust_decimal::Decimal;
use thiserror::Error;

/// Minimum number of characters accepted for an expense description.
pub const MIN_DESCRIPTION_LEN: usize = 3;

/// Rejection raised while materializing an [`Expense`](crate::domain::Expense).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("id must be a positive integer, got {0}")]
    InvalidId(u64),
    #[error("description must have at least 3 characters, got {0:?}")]
    InvalidDescription(String),
    #[error("amount must be greater than 0, got {0}")]
    InvalidAmount(Decimal),
    #[error("category cannot be empty")]
    InvalidCategory(String),
}

/// Discriminant of a [`ValidationError`], handy for assertions and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    InvalidId,
    InvalidDescription,
    InvalidAmount,
    InvalidCategory,
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::InvalidId(_) => ValidationErrorKind::InvalidId,
            ValidationError::InvalidDescription(_) => ValidationErrorKind::InvalidDescription,
            ValidationError::InvalidAmount(_) => ValidationErrorKind::InvalidAmount,
            ValidationError::InvalidCategory(_) => ValidationErrorKind::InvalidCategory,
        }
    }

    /// Name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidId(_) => "id",
            ValidationError::InvalidDescription(_) => "description",
            ValidationError::InvalidAmount(_) => "amount",
            ValidationError::InvalidCategory(_) => "category",
        }
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ValidationErrorKind::InvalidId => "InvalidId",
            ValidationErrorKind::InvalidDescription => "InvalidDescription",
            ValidationErrorKind::InvalidAmount => "InvalidAmount",
            ValidationErrorKind::InvalidCategory => "InvalidCategory",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_and_field_follow_variant() {
        let err = ValidationError::InvalidAmount(Decimal::ZERO);
        assert_eq!(err.kind(), ValidationErrorKind::InvalidAmount);
        assert_eq!(err.field(), "amount");
        assert_eq!(err.to_string(), "amount must be greater than 0, got 0");
    }

    #[test]
    fn description_message_quotes_value() {
        let err = ValidationError::InvalidDescription("ab".into());
        assert!(err.to_string().contains("\"ab\""), "unexpected: {err}");
    }
}
