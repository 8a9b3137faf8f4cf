//! Initial database migration.
//!
//! Creates the participant roster and the expense ledger.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(ENUMS_SQL).await?;
        db.execute_unprepared(PARTICIPANTS_SQL).await?;
        db.execute_unprepared(EXPENSES_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const ENUMS_SQL: &str = r"
-- Group expenses are split across the roster, personal ones are not.
-- No column default: every writer must choose.
CREATE TYPE expense_kind AS ENUM ('group', 'personal');
";

const PARTICIPANTS_SQL: &str = r"
CREATE TABLE participants (
    id UUID PRIMARY KEY,
    name VARCHAR(100) NOT NULL,
    email VARCHAR(255) UNIQUE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_participant_name_not_blank CHECK (length(trim(name)) > 0)
);
";

const EXPENSES_SQL: &str = r"
CREATE TABLE expenses (
    id UUID PRIMARY KEY,
    description VARCHAR(255) NOT NULL,
    amount NUMERIC(10, 2) NOT NULL,
    paid_by UUID NOT NULL REFERENCES participants(id) ON DELETE RESTRICT,
    expense_date DATE NOT NULL DEFAULT CURRENT_DATE,
    kind expense_kind NOT NULL,
    category VARCHAR(50),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_expense_amount_positive CHECK (amount > 0)
);

-- Ledger listing order
CREATE INDEX idx_expenses_date ON expenses(expense_date, id);

-- Payer lookups
CREATE INDEX idx_expenses_paid_by ON expenses(paid_by);

-- Category breakdown groups on the normalized name
CREATE INDEX idx_expenses_category ON expenses(upper(trim(category))) WHERE category IS NOT NULL;
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS expenses CASCADE;
DROP TABLE IF EXISTS participants CASCADE;
DROP TYPE IF EXISTS expense_kind;
";
