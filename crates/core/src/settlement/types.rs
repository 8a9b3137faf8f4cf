//! Settlement engine output types.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tripsplit_shared::types::ParticipantId;

/// Net balance per participant: positive is owed money, negative owes money.
///
/// Backed by an ordered map so iteration (and therefore every derived output) is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetBalances(BTreeMap<ParticipantId, Decimal>);

impl NetBalances {
    /// Creates an empty balance map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the balance of a participant, if present.
    #[must_use]
    pub fn get(&self, participant: &ParticipantId) -> Option<Decimal> {
        self.0.get(participant).copied()
    }

    /// Adds `delta` to a participant's balance, inserting it at zero first if absent.
    pub fn adjust(&mut self, participant: ParticipantId, delta: Decimal) {
        *self.0.entry(participant).or_insert(Decimal::ZERO) += delta;
    }

    /// Sets a participant's balance to zero if not already present.
    pub fn ensure(&mut self, participant: ParticipantId) {
        self.0.entry(participant).or_insert(Decimal::ZERO);
    }

    /// Iterates balances in participant order.
    pub fn iter(&self) -> impl Iterator<Item = (&ParticipantId, &Decimal)> {
        self.0.iter()
    }

    /// Number of participants with a balance.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no participant has a balance.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all balances.
    ///
    /// Zero under exact arithmetic; per-share rounding leaves a residue of at most one
    /// cent per participant per group expense.
    #[must_use]
    pub fn drift(&self) -> Decimal {
        self.0.values().copied().sum()
    }

    /// Applies settlements as payments: `owes` is credited, `receives` is debited.
    #[must_use]
    pub fn after_settlements(&self, settlements: &[Settlement]) -> Self {
        let mut remaining = self.clone();
        for settlement in settlements {
            remaining.adjust(settlement.owes, settlement.amount);
            remaining.adjust(settlement.receives, -settlement.amount);
        }
        remaining
    }
}

impl FromIterator<(ParticipantId, Decimal)> for NetBalances {
    fn from_iter<I: IntoIterator<Item = (ParticipantId, Decimal)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for NetBalances {
    type Item = (ParticipantId, Decimal);
    type IntoIter = std::collections::btree_map::IntoIter<ParticipantId, Decimal>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// One instructed payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// Participant who pays.
    pub owes: ParticipantId,
    /// Participant who is paid.
    pub receives: ParticipantId,
    /// Amount to transfer, at least one cent, two fractional digits.
    pub amount: Decimal,
}

/// Spending in one normalized category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySpending {
    /// Normalized (trimmed, uppercase) category name.
    pub category: String,
    /// Participant who paid the most in this category.
    pub top_spender: ParticipantId,
    /// Amount paid by the top spender.
    pub top_spend: Decimal,
    /// Grand total across all participants.
    pub total_spend: Decimal,
    /// Amount paid per participant.
    pub per_participant_spend: BTreeMap<ParticipantId, Decimal>,
}

/// Balances together with the payments that resolve them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementReport {
    /// Net balance per participant.
    pub balances: NetBalances,
    /// Payments resolving the balances.
    pub settlements: Vec<Settlement>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn pid(n: u128) -> ParticipantId {
        ParticipantId::from_uuid(Uuid::from_u128(n))
    }

    #[test]
    fn test_adjust_and_drift() {
        let mut balances = NetBalances::new();
        balances.adjust(pid(1), dec!(20.00));
        balances.adjust(pid(2), dec!(-10.00));
        balances.adjust(pid(3), dec!(-10.01));
        balances.ensure(pid(4));

        assert_eq!(balances.len(), 4);
        assert_eq!(balances.get(&pid(4)), Some(Decimal::ZERO));
        assert_eq!(balances.drift(), dec!(-0.01));
    }

    #[test]
    fn test_after_settlements() {
        let balances: NetBalances = [(pid(1), dec!(20.00)), (pid(2), dec!(-20.00))]
            .into_iter()
            .collect();
        let settled = balances.after_settlements(&[Settlement {
            owes: pid(2),
            receives: pid(1),
            amount: dec!(20.00),
        }]);

        assert!(settled.iter().all(|(_, b)| b.is_zero()));
    }

    #[test]
    fn test_iteration_is_ordered_by_participant() {
        let balances: NetBalances = [(pid(3), dec!(1)), (pid(1), dec!(2)), (pid(2), dec!(3))]
            .into_iter()
            .collect();
        let order: Vec<_> = balances.iter().map(|(p, _)| *p).collect();
        assert_eq!(order, vec![pid(1), pid(2), pid(3)]);
    }
}
