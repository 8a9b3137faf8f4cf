//! Expense repository for database operations.

use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Select, Set,
};
use tracing::info;
use tripsplit_core::expense::{Expense, NewExpense};
use tripsplit_shared::types::{ExpenseId, ParticipantId};
use uuid::Uuid;

use super::error::RepositoryError;
use crate::entities::{expenses, participants};

/// Expense repository for ledger operations.
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    db: DatabaseConnection,
}

impl ExpenseRepository {
    /// Creates a new expense repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records an expense. The input is expected to be validated already.
    ///
    /// # Errors
    ///
    /// Returns `PayerNotFound` if the payer is not a registered participant,
    /// or a database error.
    pub async fn create(&self, input: &NewExpense) -> Result<expenses::Model, RepositoryError> {
        let payer_id = input.payer.into_inner();
        if participants::Entity::find_by_id(payer_id)
            .one(&self.db)
            .await?
            .is_none()
        {
            return Err(RepositoryError::PayerNotFound(payer_id));
        }

        let expense = expenses::ActiveModel {
            id: Set(ExpenseId::new().into_inner()),
            description: Set(input.description.clone()),
            amount: Set(input.amount),
            paid_by: Set(payer_id),
            expense_date: Set(input.expense_date),
            kind: Set(input.kind.into()),
            category: Set(input.category.clone()),
            created_at: Set(chrono::Utc::now().into()),
        };

        let created = expense.insert(&self.db).await?;
        info!(
            expense_id = %created.id,
            paid_by = %created.paid_by,
            amount = %created.amount,
            "Expense recorded"
        );
        Ok(created)
    }

    /// Finds an expense by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<expenses::Model>, DbErr> {
        expenses::Entity::find_by_id(id).one(&self.db).await
    }

    /// Lists the whole ledger by expense date, then ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<expenses::Model>, DbErr> {
        ledger_query().all(&self.db).await
    }

    /// Lists the ledger as settlement engine records.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_for_settlement(&self) -> Result<Vec<Expense>, DbErr> {
        Ok(self.list().await?.into_iter().map(to_domain).collect())
    }
}

/// The whole ledger ordered by expense date, then ID.
pub(crate) fn ledger_query() -> Select<expenses::Entity> {
    expenses::Entity::find()
        .order_by_asc(expenses::Column::ExpenseDate)
        .order_by_asc(expenses::Column::Id)
}

/// Converts a stored row into the engine's expense record.
#[must_use]
pub fn to_domain(model: expenses::Model) -> Expense {
    Expense {
        amount: model.amount,
        payer: ParticipantId::from_uuid(model.paid_by),
        kind: model.kind.into(),
        category: model.category,
    }
}
