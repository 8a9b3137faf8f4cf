//! Cent-precision helpers for monetary amounts.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All amounts are `rust_decimal::Decimal` in a single trip currency.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits carried by every stored and reported amount.
pub const MONEY_SCALE: u32 = 2;

/// The smallest representable amount (0.01).
pub const CENT: Decimal = Decimal::from_parts(1, 0, 0, false, MONEY_SCALE);

/// Rounds to cents using round-half-up and pins the scale to exactly two digits.
///
/// `10` becomes `10.00`, `3.335` becomes `3.34`, `-3.335` becomes `-3.34`.
#[must_use]
pub fn round_cents(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}

/// Returns true if the amount carries no precision beyond cents.
#[must_use]
pub fn is_cent_precise(amount: Decimal) -> bool {
    amount.normalize().scale() <= MONEY_SCALE
}
