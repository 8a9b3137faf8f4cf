//! Participant repository for database operations.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Select, Set,
};
use tracing::info;
use tripsplit_core::expense::NewParticipant;
use tripsplit_shared::types::ParticipantId;
use uuid::Uuid;

use super::error::RepositoryError;
use crate::entities::participants;

/// Participant repository for roster operations.
#[derive(Debug, Clone)]
pub struct ParticipantRepository {
    db: DatabaseConnection,
}

impl ParticipantRepository {
    /// Creates a new participant repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a participant. The input is expected to be validated already.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateEmail` if the email is taken, or a database error.
    pub async fn create(
        &self,
        input: &NewParticipant,
    ) -> Result<participants::Model, RepositoryError> {
        if let Some(email) = input.email.as_deref() {
            if self.email_exists(email).await? {
                return Err(RepositoryError::DuplicateEmail(email.to_string()));
            }
        }

        let participant = participants::ActiveModel {
            id: Set(ParticipantId::new().into_inner()),
            name: Set(input.name.clone()),
            email: Set(input.email.clone()),
            created_at: Set(chrono::Utc::now().into()),
        };

        let created = participant.insert(&self.db).await?;
        info!(participant_id = %created.id, "Participant registered");
        Ok(created)
    }

    /// Finds a participant by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<participants::Model>, DbErr> {
        participants::Entity::find_by_id(id).one(&self.db).await
    }

    /// Lists every participant, oldest registration first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<participants::Model>, DbErr> {
        roster_query().all(&self.db).await
    }

    /// Lists the roster as typed IDs.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_ids(&self) -> Result<Vec<ParticipantId>, DbErr> {
        let ids = self.list().await?.into_iter().map(|p| p.id);
        Ok(ids.map(ParticipantId::from_uuid).collect())
    }

    /// Checks if an email is already registered.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let existing = participants::Entity::find()
            .filter(participants::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(existing.is_some())
    }
}

/// Every participant ordered by ID.
pub(crate) fn roster_query() -> Select<participants::Entity> {
    participants::Entity::find().order_by_asc(participants::Column::Id)
}
