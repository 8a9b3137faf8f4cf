//! Property-based tests for the settlement engine.
//!
//! Feature: settlement-engine
//! Properties: conservation, settlement correctness, no trivial payments,
//! cent precision, category exclusivity.

use proptest::prelude::*;
use rust_decimal::Decimal;
use tripsplit_shared::types::{CENT, ParticipantId};
use uuid::Uuid;

use super::service::SettlementService;
use crate::expense::{Expense, ExpenseKind};

/// Strategy to generate a valid positive amount (0.01 to 10,000.00).
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn kind_strategy() -> impl Strategy<Value = ExpenseKind> {
    prop_oneof![3 => Just(ExpenseKind::Group), 1 => Just(ExpenseKind::Personal)]
}

/// Categories including case/whitespace variants and blanks.
fn category_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        Just(Some("   ".to_string())),
        Just(Some("food".to_string())),
        Just(Some(" Food ".to_string())),
        Just(Some("FUEL".to_string())),
        Just(Some("lodging".to_string())),
    ]
}

/// Roster of 1 to 8 participants with ids 1..=n.
fn roster(size: usize) -> Vec<ParticipantId> {
    (1..=size as u128)
        .map(|n| ParticipantId::from_uuid(Uuid::from_u128(n)))
        .collect()
}

/// A roster plus a ledger whose payers all belong to it.
fn ledger_strategy() -> impl Strategy<Value = (Vec<ParticipantId>, Vec<Expense>)> {
    (1usize..=8).prop_flat_map(|size| {
        let expense = (
            0..size,
            amount_strategy(),
            kind_strategy(),
            category_strategy(),
        );
        (Just(size), prop::collection::vec(expense, 0..25)).prop_map(|(size, raw)| {
            let members = roster(size);
            let expenses = raw
                .into_iter()
                .map(|(payer, amount, kind, category)| Expense {
                    amount,
                    payer: members[payer],
                    kind,
                    category,
                })
                .collect();
            (members, expenses)
        })
    })
}

fn group_count(expenses: &[Expense]) -> usize {
    expenses.iter().filter(|e| e.kind.is_shared()).count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// **Property 1: Conservation**
    ///
    /// *For any* roster and ledger, the sum of net balances SHALL be within one cent
    /// per participant per group expense of zero.
    #[test]
    fn prop_balances_conserve_money((members, expenses) in ledger_strategy()) {
        let balances = SettlementService::compute_balances(&members, &expenses);
        let headcount = Decimal::from(members.len());
        let bound = CENT * headcount * Decimal::from(group_count(&expenses).max(1));

        prop_assert_eq!(balances.len(), members.len());
        prop_assert!(
            balances.drift().abs() <= bound,
            "drift {} exceeds {}", balances.drift(), bound
        );
    }

    /// **Property 1b: Exact conservation without rounding**
    ///
    /// *For any* ledger whose group amounts divide evenly by the headcount, the
    /// balances SHALL sum to exactly zero.
    #[test]
    fn prop_even_splits_sum_to_zero(
        size in 1usize..=8,
        raw in prop::collection::vec((0usize..8, 1i64..10_000i64), 0..20),
    ) {
        let members = roster(size);
        let expenses: Vec<Expense> = raw
            .into_iter()
            .map(|(payer, cents_per_head)| {
                let amount = Decimal::new(cents_per_head * size as i64, 2);
                Expense::group(amount, members[payer % size])
            })
            .collect();

        let balances = SettlementService::compute_balances(&members, &expenses);
        prop_assert_eq!(balances.drift(), Decimal::ZERO);
    }

    /// **Property 2: Settlement correctness**
    ///
    /// *For any* ledger, applying every settlement SHALL leave each participant
    /// owing or owed no more than the rounding drift, and exactly zero when there is
    /// no drift.
    #[test]
    fn prop_settlements_resolve_balances((members, expenses) in ledger_strategy()) {
        let report = SettlementService::settle(&members, &expenses);
        let drift = report.balances.drift();
        let remaining = report.balances.after_settlements(&report.settlements);

        for (participant, residual) in remaining.iter() {
            prop_assert!(
                residual.abs() <= drift.abs(),
                "{} left with {} (drift {})", participant, residual, drift
            );
        }
        prop_assert_eq!(remaining.drift(), drift);
    }

    /// **Property 3: No trivial payments**
    ///
    /// *For any* ledger, no settlement SHALL be below one cent, nobody SHALL pay
    /// themselves, and no settlement SHALL flow against a participant's balance sign.
    #[test]
    fn prop_no_trivial_payments((members, expenses) in ledger_strategy()) {
        let report = SettlementService::settle(&members, &expenses);

        for settlement in &report.settlements {
            prop_assert!(settlement.amount >= CENT);
            prop_assert_ne!(settlement.owes, settlement.receives);
            prop_assert!(report.balances.get(&settlement.owes).unwrap_or_default() < Decimal::ZERO);
            prop_assert!(report.balances.get(&settlement.receives).unwrap_or_default() > Decimal::ZERO);
        }
    }

    /// **Property 3b: Greedy bound**
    ///
    /// *For any* ledger, the number of settlements SHALL be smaller than the number
    /// of participants with a non-zero balance.
    #[test]
    fn prop_settlement_count_bounded((members, expenses) in ledger_strategy()) {
        let report = SettlementService::settle(&members, &expenses);
        let open = report.balances.iter().filter(|(_, b)| !b.is_zero()).count();

        prop_assert!(report.settlements.len() <= open.saturating_sub(1));
    }

    /// **Property 4: Cent precision**
    ///
    /// *For any* ledger, settlement amounts and category totals SHALL carry exactly
    /// two fractional digits.
    #[test]
    fn prop_amounts_have_two_decimals((members, expenses) in ledger_strategy()) {
        let report = SettlementService::settle(&members, &expenses);
        for settlement in &report.settlements {
            prop_assert_eq!(settlement.amount.scale(), 2);
        }

        for spending in SettlementService::compute_category_breakdown(&expenses) {
            prop_assert_eq!(spending.total_spend.scale(), 2);
            prop_assert_eq!(spending.top_spend.scale(), 2);
            for amount in spending.per_participant_spend.values() {
                prop_assert_eq!(amount.scale(), 2);
            }
        }
    }

    /// **Property 5: Category exclusivity**
    ///
    /// *For any* ledger, the breakdown SHALL account for exactly the categorized
    /// expenses: names are normalized and totals sum to the categorized spend.
    #[test]
    fn prop_blank_categories_excluded((_members, expenses) in ledger_strategy()) {
        let breakdown = SettlementService::compute_category_breakdown(&expenses);

        let categorized: Decimal = expenses
            .iter()
            .filter(|e| e.category.as_deref().is_some_and(|c| !c.trim().is_empty()))
            .map(|e| e.amount)
            .sum();
        let reported: Decimal = breakdown.iter().map(|c| c.total_spend).sum();
        prop_assert_eq!(reported, categorized);

        for spending in &breakdown {
            prop_assert!(!spending.category.is_empty());
            prop_assert_eq!(&spending.category, &spending.category.trim().to_uppercase());
            let per_participant: Decimal = spending.per_participant_spend.values().copied().sum();
            prop_assert_eq!(per_participant, spending.total_spend);
            prop_assert!(spending
                .per_participant_spend
                .values()
                .all(|amount| *amount <= spending.top_spend));
        }
    }

    /// **Property 6: Determinism**
    ///
    /// *For any* ledger, the result SHALL NOT depend on roster order.
    #[test]
    fn prop_roster_order_irrelevant((members, expenses) in ledger_strategy()) {
        let mut reversed = members.clone();
        reversed.reverse();

        prop_assert_eq!(
            SettlementService::settle(&members, &expenses),
            SettlementService::settle(&reversed, &expenses)
        );
    }
}
