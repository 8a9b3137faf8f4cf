//! Settlement engine.
//!
//! Turns a roster and an expense ledger into:
//! - Net balances per participant
//! - A short list of payments that settle those balances
//! - A per-category spending breakdown
//!
//! All computations are pure functions of the snapshot they are given.

pub mod balance;
pub mod category;
pub mod service;
pub mod simplify;
pub mod source;
pub mod types;

#[cfg(test)]
mod props;

pub use balance::BalanceCalculator;
pub use category::CategoryAggregator;
pub use service::SettlementService;
pub use simplify::DebtSimplifier;
pub use source::{LedgerSnapshot, LedgerSource};
pub use types::{CategorySpending, NetBalances, Settlement, SettlementReport};
