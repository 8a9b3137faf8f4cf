//! Common types used across the application.

pub mod id;
pub mod money;

#[cfg(test)]
mod id_tests;

pub use id::*;
pub use money::{CENT, MONEY_SCALE, is_cent_precise, round_cents};
