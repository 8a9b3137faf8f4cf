//! Expense domain types.
//!
//! This module defines what the settlement engine consumes:
//! - Expense kinds (group vs personal)
//! - Ledger expenses and category normalization
//! - Input validation for new participants and expenses
//! - Error types for rejected input

pub mod error;
pub mod types;
pub mod validation;

pub use error::ValidationError;
pub use types::{Expense, ExpenseKind, normalize_category};
pub use validation::{NewExpense, NewParticipant};
