//! Greedy debt simplification.
//!
//! Givers (negative balances) and takers (positive balances) sit in two max-heaps.
//! Each round the largest giver pays the largest taker `min(giver, taker)`; whichever
//! side still has at least a cent outstanding goes back on its heap. Every round
//! retires at least one party, so the loop runs at most `givers + takers` times.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rust_decimal::Decimal;
use tracing::{debug, trace};
use tripsplit_shared::types::{CENT, ParticipantId, round_cents};

use super::types::{NetBalances, Settlement};

/// Outstanding amount one participant still has to pay or receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Obligation {
    participant: ParticipantId,
    magnitude: Decimal,
}

impl Ord for Obligation {
    /// Larger magnitude first; among equal magnitudes the lower participant id wins.
    fn cmp(&self, other: &Self) -> Ordering {
        self.magnitude
            .cmp(&other.magnitude)
            .then_with(|| other.participant.cmp(&self.participant))
    }
}

impl PartialOrd for Obligation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Reduces net balances to a short list of payments.
pub struct DebtSimplifier;

impl DebtSimplifier {
    /// Produces settlements that bring every balance to within a cent of zero.
    ///
    /// Matching always pairs the largest remaining giver with the largest remaining
    /// taker, ties going to the lowest participant id. Pairs whose payment would
    /// round below one cent are treated as already settled.
    #[must_use]
    pub fn simplify(balances: &NetBalances) -> Vec<Settlement> {
        let mut givers = BinaryHeap::new();
        let mut takers = BinaryHeap::new();

        for (participant, balance) in balances.iter() {
            let obligation = Obligation {
                participant: *participant,
                magnitude: balance.abs(),
            };
            match balance.cmp(&Decimal::ZERO) {
                Ordering::Less => givers.push(obligation),
                Ordering::Greater => takers.push(obligation),
                Ordering::Equal => {}
            }
        }

        let mut settlements = Vec::with_capacity(givers.len().max(takers.len()));

        loop {
            let Some(mut giver) = givers.pop() else { break };
            let Some(mut taker) = takers.pop() else { break };

            let amount = round_cents(giver.magnitude.min(taker.magnitude));
            if amount < CENT {
                trace!(giver = %giver.participant, taker = %taker.participant, "Skipping sub-cent settlement");
                continue;
            }

            settlements.push(Settlement {
                owes: giver.participant,
                receives: taker.participant,
                amount,
            });

            giver.magnitude = round_cents(giver.magnitude - amount);
            taker.magnitude = round_cents(taker.magnitude - amount);

            if giver.magnitude >= CENT {
                givers.push(giver);
            }
            if taker.magnitude >= CENT {
                takers.push(taker);
            }
        }

        debug!(
            participants = balances.len(),
            settlements = settlements.len(),
            "Simplified debts"
        );
        settlements
    }
}
