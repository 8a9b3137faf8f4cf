//! Expense ledger routes.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{AppState, error::ApiError};
use tripsplit_core::ExpenseKind;
use tripsplit_core::expense::NewExpense;
use tripsplit_db::{ExpenseRepository, entities::expenses};
use tripsplit_shared::types::ParticipantId;

/// Creates the expense routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/expenses", get(list_expenses).post(create_expense))
}

/// Request body for recording an expense.
#[derive(Debug, Deserialize)]
pub struct CreateExpenseRequest {
    /// What the money was spent on.
    pub description: String,
    /// Amount paid, at most two decimal places.
    pub amount: Decimal,
    /// Participant who paid.
    pub paid_by: Uuid,
    /// `group` or `personal`.
    pub kind: ExpenseKind,
    /// Optional spending category.
    pub category: Option<String>,
    /// Day of the expense (default: today).
    pub expense_date: Option<NaiveDate>,
}

/// Response for an expense.
#[derive(Debug, Serialize)]
pub struct ExpenseResponse {
    /// Expense ID.
    pub id: Uuid,
    /// Description.
    pub description: String,
    /// Amount paid.
    pub amount: Decimal,
    /// Participant who paid.
    pub paid_by: Uuid,
    /// Group or personal.
    pub kind: ExpenseKind,
    /// Spending category.
    pub category: Option<String>,
    /// Day of the expense.
    pub expense_date: NaiveDate,
    /// Recording timestamp.
    pub created_at: DateTime<FixedOffset>,
}

impl From<expenses::Model> for ExpenseResponse {
    fn from(model: expenses::Model) -> Self {
        Self {
            id: model.id,
            description: model.description,
            amount: model.amount,
            paid_by: model.paid_by,
            kind: model.kind.into(),
            category: model.category,
            expense_date: model.expense_date,
            created_at: model.created_at,
        }
    }
}

/// GET `/expenses` - List the ledger.
async fn list_expenses(
    State(state): State<AppState>,
) -> Result<Json<Vec<ExpenseResponse>>, ApiError> {
    let repo = ExpenseRepository::new((*state.db).clone());
    let expenses = repo.list().await?;

    Ok(Json(expenses.into_iter().map(Into::into).collect()))
}

/// POST `/expenses` - Record an expense.
async fn create_expense(
    State(state): State<AppState>,
    payload: Result<Json<CreateExpenseRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ExpenseResponse>), ApiError> {
    let Json(payload) = payload?;
    let input = NewExpense {
        description: payload.description,
        amount: payload.amount,
        payer: ParticipantId::from_uuid(payload.paid_by),
        kind: payload.kind,
        category: payload.category,
        expense_date: payload
            .expense_date
            .unwrap_or_else(|| Utc::now().date_naive()),
    }
    .validate()?;

    let repo = ExpenseRepository::new((*state.db).clone());
    let created = repo.create(&input).await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}
