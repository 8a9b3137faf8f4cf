//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod error;
pub mod expense;
pub mod ledger;
pub mod participant;

pub use error::RepositoryError;
pub use expense::ExpenseRepository;
pub use ledger::LedgerRepository;
pub use participant::ParticipantRepository;
