//! Database-backed ledger source for the settlement engine.

use async_trait::async_trait;
use sea_orm::{AccessMode, DatabaseConnection, DbErr, IsolationLevel, TransactionTrait};
use tracing::debug;
use tripsplit_core::settlement::LedgerSnapshot;
use tripsplit_core::{Expense, LedgerSource};
use tripsplit_shared::types::ParticipantId;

use super::expense::{ExpenseRepository, ledger_query, to_domain};
use super::participant::{ParticipantRepository, roster_query};

/// Reads the roster and ledger snapshot from Postgres.
#[derive(Debug, Clone)]
pub struct LedgerRepository {
    db: DatabaseConnection,
    participants: ParticipantRepository,
    expenses: ExpenseRepository,
}

impl LedgerRepository {
    /// Creates a new ledger repository.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            participants: ParticipantRepository::new(db.clone()),
            expenses: ExpenseRepository::new(db.clone()),
            db,
        }
    }
}

#[async_trait]
impl LedgerSource for LedgerRepository {
    type Error = DbErr;

    async fn list_participants(&self) -> Result<Vec<ParticipantId>, Self::Error> {
        self.participants.list_ids().await
    }

    async fn list_expenses(&self) -> Result<Vec<Expense>, Self::Error> {
        self.expenses.list_for_settlement().await
    }

    /// Reads both tables in one read-only repeatable-read transaction.
    async fn snapshot(&self) -> Result<LedgerSnapshot, Self::Error> {
        let txn = self
            .db
            .begin_with_config(
                Some(IsolationLevel::RepeatableRead),
                Some(AccessMode::ReadOnly),
            )
            .await?;

        let roster = roster_query().all(&txn).await?;
        let expenses = ledger_query().all(&txn).await?;
        txn.commit().await?;

        debug!(
            participants = roster.len(),
            expenses = expenses.len(),
            "Read ledger snapshot"
        );

        Ok(LedgerSnapshot {
            roster: roster
                .into_iter()
                .map(|p| ParticipantId::from_uuid(p.id))
                .collect(),
            expenses: expenses.into_iter().map(to_domain).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use tripsplit_core::SettlementService;
    use uuid::Uuid;

    use crate::entities::sea_orm_active_enums::ExpenseKind;
    use crate::entities::{expenses, participants};

    fn participant(id: Uuid) -> participants::Model {
        participants::Model {
            id,
            name: format!("p{id}"),
            email: None,
            created_at: chrono::Utc::now().into(),
        }
    }

    fn dinner(paid_by: Uuid) -> expenses::Model {
        expenses::Model {
            id: Uuid::now_v7(),
            description: "Dinner".to_string(),
            amount: dec!(30.00),
            paid_by,
            expense_date: NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
            kind: ExpenseKind::Group,
            category: None,
            created_at: chrono::Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_settles_from_database_snapshot() {
        let (ana, ben, cai) = (
            Uuid::from_u128(1),
            Uuid::from_u128(2),
            Uuid::from_u128(3),
        );
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![participant(ana), participant(ben), participant(cai)]])
            .append_query_results([vec![dinner(ana)]])
            .into_connection();
        let ledger = LedgerRepository::new(db);

        let report = SettlementService::settle_from(&ledger).await.unwrap();
        assert_eq!(report.balances.get(&ParticipantId::from_uuid(ana)), Some(dec!(20.00)));
        assert_eq!(report.settlements.len(), 2);
        assert!(report
            .settlements
            .iter()
            .all(|s| s.receives == ParticipantId::from_uuid(ana) && s.amount == dec!(10.00)));
    }

    #[tokio::test]
    async fn test_snapshot_reads_both_tables_in_one_transaction() {
        let ana = Uuid::from_u128(1);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![participant(ana)]])
            .append_query_results([vec![dinner(ana)]])
            .into_connection();
        let ledger = LedgerRepository::new(db.clone());

        let snapshot = ledger.snapshot().await.unwrap();
        assert_eq!(snapshot.roster, vec![ParticipantId::from_uuid(ana)]);
        assert_eq!(snapshot.expenses.len(), 1);

        // Outside a transaction every query would be logged on its own.
        let log = db.into_transaction_log();
        assert_eq!(log.len(), 1);
        let statements = format!("{:?}", log[0]);
        assert!(statements.contains("participants"));
        assert!(statements.contains("expenses"));
    }

    #[tokio::test]
    async fn test_database_errors_surface() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let ledger = LedgerRepository::new(db);

        assert!(SettlementService::settle_from(&ledger).await.is_err());
    }
}
