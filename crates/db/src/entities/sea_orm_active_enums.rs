//! `SeaORM` active enums mirroring Postgres enum types.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use tripsplit_core::ExpenseKind as DomainExpenseKind;

/// Postgres `expense_kind` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "expense_kind")]
#[serde(rename_all = "lowercase")]
pub enum ExpenseKind {
    /// Split across the whole roster.
    #[sea_orm(string_value = "group")]
    Group,
    /// Borne by the payer alone.
    #[sea_orm(string_value = "personal")]
    Personal,
}

impl From<DomainExpenseKind> for ExpenseKind {
    fn from(kind: DomainExpenseKind) -> Self {
        match kind {
            DomainExpenseKind::Group => Self::Group,
            DomainExpenseKind::Personal => Self::Personal,
        }
    }
}

impl From<ExpenseKind> for DomainExpenseKind {
    fn from(kind: ExpenseKind) -> Self {
        match kind {
            ExpenseKind::Group => Self::Group,
            ExpenseKind::Personal => Self::Personal,
        }
    }
}
