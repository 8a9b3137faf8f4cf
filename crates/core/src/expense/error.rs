//! Validation errors for participant and expense input.

use rust_decimal::Decimal;
use thiserror::Error;
use tripsplit_shared::AppError;

/// Errors raised when new participant or expense input is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    // ========== Participant Errors ==========
    /// Participant name is empty or whitespace.
    #[error("Participant name cannot be empty")]
    EmptyName,

    /// Participant name exceeds the stored column width.
    #[error("Participant name cannot exceed {max} characters")]
    NameTooLong {
        /// Maximum length in characters.
        max: usize,
    },

    /// Email address is malformed.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// Email address exceeds the stored column width.
    #[error("Email address cannot exceed {max} characters")]
    EmailTooLong {
        /// Maximum length in characters.
        max: usize,
    },

    // ========== Expense Errors ==========
    /// Expense description is empty or whitespace.
    #[error("Expense description cannot be empty")]
    EmptyDescription,

    /// Expense description exceeds the stored column width.
    #[error("Expense description cannot exceed {max} characters")]
    DescriptionTooLong {
        /// Maximum length in characters.
        max: usize,
    },

    /// Expense amount is zero or negative.
    #[error("Expense amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    /// Expense amount has sub-cent precision.
    #[error("Expense amount {0} has more than two decimal places")]
    TooManyDecimals(Decimal),

    /// Expense amount does not fit the stored precision.
    #[error("Expense amount {amount} exceeds the maximum of {max}")]
    AmountTooLarge {
        /// Rejected amount.
        amount: Decimal,
        /// Largest accepted amount.
        max: Decimal,
    },

    /// Category exceeds the stored column width.
    #[error("Category cannot exceed {max} characters")]
    CategoryTooLong {
        /// Maximum length in characters.
        max: usize,
    },
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}
