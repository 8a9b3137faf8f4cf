//! Settlement service: the engine's public entry points.

use tracing::debug;
use tripsplit_shared::types::ParticipantId;

use super::balance::BalanceCalculator;
use super::category::CategoryAggregator;
use super::simplify::DebtSimplifier;
use super::source::LedgerSource;
use super::source::LedgerSnapshot;
use super::types::{CategorySpending, NetBalances, Settlement, SettlementReport};
use crate::expense::Expense;

/// Stateless facade over the balance calculator, debt simplifier and category aggregator.
///
/// Every call works on the snapshot it is given and keeps nothing between calls.
pub struct SettlementService;

impl SettlementService {
    /// Net balance of every participant in the roster.
    #[must_use]
    pub fn compute_balances(roster: &[ParticipantId], expenses: &[Expense]) -> NetBalances {
        BalanceCalculator::compute(roster, expenses)
    }

    /// Payments that settle the group expenses among the roster.
    #[must_use]
    pub fn compute_settlements(roster: &[ParticipantId], expenses: &[Expense]) -> Vec<Settlement> {
        Self::settle(roster, expenses).settlements
    }

    /// Spending breakdown per normalized category.
    #[must_use]
    pub fn compute_category_breakdown(expenses: &[Expense]) -> Vec<CategorySpending> {
        CategoryAggregator::aggregate(expenses)
    }

    /// Balances together with the payments that resolve them.
    #[must_use]
    pub fn settle(roster: &[ParticipantId], expenses: &[Expense]) -> SettlementReport {
        let balances = BalanceCalculator::compute(roster, expenses);
        let settlements = DebtSimplifier::simplify(&balances);

        debug!(
            participants = roster.len(),
            expenses = expenses.len(),
            settlements = settlements.len(),
            drift = %balances.drift(),
            "Computed settlement report"
        );

        SettlementReport {
            balances,
            settlements,
        }
    }

    /// Fetches a snapshot from `source` and settles it.
    pub async fn settle_from<S>(source: &S) -> Result<SettlementReport, S::Error>
    where
        S: LedgerSource + ?Sized,
    {
        let LedgerSnapshot { roster, expenses } = source.snapshot().await?;
        Ok(Self::settle(&roster, &expenses))
    }

    /// Fetches a snapshot from `source` and computes its net balances.
    pub async fn balances_from<S>(source: &S) -> Result<NetBalances, S::Error>
    where
        S: LedgerSource + ?Sized,
    {
        let LedgerSnapshot { roster, expenses } = source.snapshot().await?;
        Ok(Self::compute_balances(&roster, &expenses))
    }

    /// Fetches the ledger from `source` and builds the category breakdown.
    pub async fn breakdown_from<S>(source: &S) -> Result<Vec<CategorySpending>, S::Error>
    where
        S: LedgerSource + ?Sized,
    {
        let expenses = source.list_expenses().await?;
        Ok(Self::compute_category_breakdown(&expenses))
    }
}
