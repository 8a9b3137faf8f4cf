//! Net balance calculation.
//!
//! Every group expense is split uniformly across the whole roster. The share is
//! rounded to cents (half-up) per expense, so the payer is credited
//! `amount - share` and everybody else is debited `share`.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use tracing::trace;
use tripsplit_shared::types::{ParticipantId, round_cents};

use super::types::NetBalances;
use crate::expense::Expense;

/// Converts a roster and an expense ledger into net balances.
pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Computes the net balance of every participant in `roster`.
    ///
    /// Personal expenses are ignored. Duplicate roster entries count once. An empty
    /// roster yields an empty map. A payer missing from the roster is still credited;
    /// the provider is expected to prevent that.
    #[must_use]
    pub fn compute(roster: &[ParticipantId], expenses: &[Expense]) -> NetBalances {
        let members: BTreeSet<ParticipantId> = roster.iter().copied().collect();

        let mut balances = NetBalances::new();
        for member in &members {
            balances.ensure(*member);
        }

        for expense in expenses.iter().filter(|e| e.kind.is_shared()) {
            let Some(share) = Self::share_of(expense.amount, members.len()) else {
                break;
            };
            trace!(payer = %expense.payer, amount = %expense.amount, %share, "Splitting expense");

            balances.adjust(expense.payer, expense.amount - share);
            for member in members.iter().filter(|m| **m != expense.payer) {
                balances.adjust(*member, -share);
            }
        }

        balances
    }

    /// Share of `amount` owed by each of `head_count` participants, or `None` for nobody.
    #[must_use]
    pub fn share_of(amount: Decimal, head_count: usize) -> Option<Decimal> {
        (head_count > 0).then(|| round_cents(amount / Decimal::from(head_count)))
    }
}
