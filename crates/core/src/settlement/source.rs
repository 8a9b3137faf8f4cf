//! Port to whatever stores the participant roster and the expense ledger.

use async_trait::async_trait;
use tripsplit_shared::types::ParticipantId;

use crate::expense::Expense;

/// Roster and ledger read as of the same moment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerSnapshot {
    /// Every participant in the trip.
    pub roster: Vec<ParticipantId>,
    /// Every recorded expense.
    pub expenses: Vec<Expense>,
}

/// Supplies a snapshot of the roster and ledger.
///
/// Implementations own persistence and referential integrity: every expense's payer
/// must be a listed participant.
#[async_trait]
pub trait LedgerSource: Send + Sync {
    /// Error raised when the snapshot cannot be read.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Lists every participant in the trip.
    async fn list_participants(&self) -> Result<Vec<ParticipantId>, Self::Error>;

    /// Lists every recorded expense.
    async fn list_expenses(&self) -> Result<Vec<Expense>, Self::Error>;

    /// Reads roster and ledger together.
    ///
    /// The default reads them one after the other. Sources that can change between
    /// the two reads must override this so no expense names a payer missing from
    /// the roster.
    async fn snapshot(&self) -> Result<LedgerSnapshot, Self::Error> {
        let roster = self.list_participants().await?;
        let expenses = self.list_expenses().await?;
        Ok(LedgerSnapshot { roster, expenses })
    }
}
