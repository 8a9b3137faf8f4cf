//! Shared types, errors, and configuration for Tripsplit.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for participants and expenses
//! - Cent rounding helpers for decimal money amounts
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
