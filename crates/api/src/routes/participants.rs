//! Participant roster routes.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{AppState, error::ApiError};
use tripsplit_core::expense::NewParticipant;
use tripsplit_db::{ParticipantRepository, entities::participants};

/// Creates the participant routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/participants", get(list_participants).post(create_participant))
}

/// Request body for registering a participant.
#[derive(Debug, Deserialize)]
pub struct CreateParticipantRequest {
    /// Display name.
    pub name: String,
    /// Optional contact email.
    pub email: Option<String>,
}

/// Response for a participant.
#[derive(Debug, Serialize)]
pub struct ParticipantResponse {
    /// Participant ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: Option<String>,
    /// Registration timestamp.
    pub created_at: DateTime<FixedOffset>,
}

impl From<participants::Model> for ParticipantResponse {
    fn from(model: participants::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            created_at: model.created_at,
        }
    }
}

/// GET `/participants` - List the roster.
async fn list_participants(
    State(state): State<AppState>,
) -> Result<Json<Vec<ParticipantResponse>>, ApiError> {
    let repo = ParticipantRepository::new((*state.db).clone());
    let participants = repo.list().await?;

    Ok(Json(participants.into_iter().map(Into::into).collect()))
}

/// POST `/participants` - Register a participant.
async fn create_participant(
    State(state): State<AppState>,
    payload: Result<Json<CreateParticipantRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ParticipantResponse>), ApiError> {
    let Json(payload) = payload?;
    let input = NewParticipant {
        name: payload.name,
        email: payload.email,
    }
    .validate()?;

    let repo = ParticipantRepository::new((*state.db).clone());
    let created = repo.create(&input).await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}
