//! Expense domain types consumed by the settlement engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tripsplit_shared::types::ParticipantId;

/// Whether an expense is shared by the whole trip or borne by the payer alone.
///
/// There is deliberately no `Default`: every provider must state the kind explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseKind {
    /// Split uniformly across the full roster.
    Group,
    /// Paid for the payer only; never split.
    Personal,
}

impl ExpenseKind {
    /// Returns true if the expense takes part in balance and settlement computation.
    #[must_use]
    pub const fn is_shared(self) -> bool {
        matches!(self, Self::Group)
    }

    /// Returns the wire/storage name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::Personal => "personal",
        }
    }
}

impl std::fmt::Display for ExpenseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ExpenseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "group" => Ok(Self::Group),
            "personal" => Ok(Self::Personal),
            _ => Err(format!("Unknown expense kind: {s}")),
        }
    }
}

/// One recorded expense, as seen by the settlement engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Amount paid, positive with two fractional digits.
    pub amount: Decimal,
    /// Participant who paid.
    pub payer: ParticipantId,
    /// Group or personal.
    pub kind: ExpenseKind,
    /// Free-form spending category, as entered.
    pub category: Option<String>,
}

impl Expense {
    /// Creates an uncategorized expense.
    #[must_use]
    pub const fn new(amount: Decimal, payer: ParticipantId, kind: ExpenseKind) -> Self {
        Self {
            amount,
            payer,
            kind,
            category: None,
        }
    }

    /// Creates a group expense.
    #[must_use]
    pub const fn group(amount: Decimal, payer: ParticipantId) -> Self {
        Self::new(amount, payer, ExpenseKind::Group)
    }

    /// Creates a personal expense.
    #[must_use]
    pub const fn personal(amount: Decimal, payer: ParticipantId) -> Self {
        Self::new(amount, payer, ExpenseKind::Personal)
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Returns the grouping key for category aggregation, or `None` if uncategorized.
    #[must_use]
    pub fn normalized_category(&self) -> Option<String> {
        self.category.as_deref().and_then(normalize_category)
    }
}

/// Trims and uppercases a category; blank input yields `None`.
#[must_use]
pub fn normalize_category(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}
