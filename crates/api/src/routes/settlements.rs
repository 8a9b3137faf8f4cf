//! Settlement report routes: balances, suggested payments and category breakdown.

use axum::{Json, Router, extract::State, routing::get};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::{AppState, error::ApiError};
use tripsplit_core::SettlementService;
use tripsplit_core::settlement::{CategorySpending, Settlement};
use tripsplit_db::LedgerRepository;
use tripsplit_shared::types::ParticipantId;

/// Creates the settlement report routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/balances", get(get_balances))
        .route("/settlements", get(get_settlements))
        .route("/spending-breakdown", get(get_spending_breakdown))
}

/// One participant's net position.
#[derive(Debug, Serialize)]
pub struct BalanceEntry {
    /// Participant ID.
    pub participant_id: ParticipantId,
    /// Positive when owed money, negative when owing.
    pub balance: Decimal,
}

/// Response for the balances report.
#[derive(Debug, Serialize)]
pub struct BalancesResponse {
    /// Balances ordered by participant ID.
    pub balances: Vec<BalanceEntry>,
    /// Sum of all balances; non-zero only from share rounding.
    pub drift: Decimal,
}

/// GET `/balances` - Net balance of every participant.
async fn get_balances(State(state): State<AppState>) -> Result<Json<BalancesResponse>, ApiError> {
    let ledger = LedgerRepository::new((*state.db).clone());
    let balances = SettlementService::balances_from(&ledger).await?;

    let drift = balances.drift();
    let balances = balances
        .into_iter()
        .map(|(participant_id, balance)| BalanceEntry {
            participant_id,
            balance,
        })
        .collect();

    Ok(Json(BalancesResponse { balances, drift }))
}

/// GET `/settlements` - Payments that settle the trip.
async fn get_settlements(
    State(state): State<AppState>,
) -> Result<Json<Vec<Settlement>>, ApiError> {
    let ledger = LedgerRepository::new((*state.db).clone());
    let report = SettlementService::settle_from(&ledger).await?;

    info!(settlements = report.settlements.len(), "Settlement plan computed");
    Ok(Json(report.settlements))
}

/// GET `/spending-breakdown` - Spending per category.
async fn get_spending_breakdown(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategorySpending>>, ApiError> {
    let ledger = LedgerRepository::new((*state.db).clone());
    let breakdown = SettlementService::breakdown_from(&ledger).await?;

    Ok(Json(breakdown))
}
