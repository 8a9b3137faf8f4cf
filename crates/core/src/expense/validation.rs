//! Validation of participant and expense input before it reaches the ledger.
//!
//! The settlement engine assumes every stored expense is positive and cent-precise;
//! these checks are where that assumption is enforced.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tripsplit_shared::types::{ParticipantId, is_cent_precise, round_cents};

use super::error::ValidationError;
use super::types::ExpenseKind;

/// Longest participant name, in characters.
pub const MAX_NAME_LEN: usize = 100;
/// Longest email address, in characters.
pub const MAX_EMAIL_LEN: usize = 255;
/// Longest expense description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 255;
/// Longest category, in characters, after trimming.
pub const MAX_CATEGORY_LEN: usize = 50;
/// Largest amount a `NUMERIC(10, 2)` column holds: 99,999,999.99.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0x540B_E3FF, 2, 0, false, 2);

/// Input for registering a participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewParticipant {
    /// Display name.
    pub name: String,
    /// Optional contact email, unique across the trip.
    pub email: Option<String>,
}

impl NewParticipant {
    /// Validates and normalizes the input: trims the name, trims the email and drops it if blank.
    pub fn validate(self) -> Result<Self, ValidationError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(ValidationError::NameTooLong { max: MAX_NAME_LEN });
        }

        let email = match self.email.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(email) => {
                let valid = email
                    .split_once('@')
                    .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
                if !valid {
                    return Err(ValidationError::InvalidEmail(email.to_string()));
                }
                if email.chars().count() > MAX_EMAIL_LEN {
                    return Err(ValidationError::EmailTooLong { max: MAX_EMAIL_LEN });
                }
                Some(email.to_string())
            }
        };

        Ok(Self { name, email })
    }
}

/// Input for recording an expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExpense {
    /// What the money was spent on.
    pub description: String,
    /// Amount paid.
    pub amount: Decimal,
    /// Participant who paid.
    pub payer: ParticipantId,
    /// Group or personal.
    pub kind: ExpenseKind,
    /// Optional spending category.
    pub category: Option<String>,
    /// Day the expense was incurred.
    pub expense_date: NaiveDate,
}

impl NewExpense {
    /// Validates and normalizes the input.
    ///
    /// On success the description is trimmed, the amount carries exactly two
    /// fractional digits, and a blank category becomes `None`. Payer existence is
    /// checked by the repository, not here.
    pub fn validate(self) -> Result<Self, ValidationError> {
        let description = self.description.trim().to_string();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(ValidationError::DescriptionTooLong {
                max: MAX_DESCRIPTION_LEN,
            });
        }
        if self.amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount(self.amount));
        }
        if !is_cent_precise(self.amount) {
            return Err(ValidationError::TooManyDecimals(self.amount));
        }
        if self.amount > MAX_AMOUNT {
            return Err(ValidationError::AmountTooLarge {
                amount: self.amount,
                max: MAX_AMOUNT,
            });
        }

        let category = self
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        if category
            .as_ref()
            .is_some_and(|c| c.chars().count() > MAX_CATEGORY_LEN)
        {
            return Err(ValidationError::CategoryTooLong {
                max: MAX_CATEGORY_LEN,
            });
        }

        Ok(Self {
            description,
            amount: round_cents(self.amount),
            category,
            ..self
        })
    }
}
