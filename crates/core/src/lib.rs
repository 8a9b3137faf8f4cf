//! Core business logic for Tripsplit.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `expense` - Expense and participant input types and validation
//! - `settlement` - Net balances, debt simplification and category breakdown

pub mod expense;
pub mod settlement;

pub use expense::{Expense, ExpenseKind};
pub use settlement::{LedgerSource, SettlementService};
