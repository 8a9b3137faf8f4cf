//! Database seeder for Tripsplit development and testing.
//!
//! Seeds a demo weekend trip: three participants and a ledger mixing group and
//! personal, categorized and uncategorized expenses. Running it twice is a no-op.
//!
//! Usage: cargo run --bin seeder

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use tripsplit_db::entities::{expenses, participants, sea_orm_active_enums::ExpenseKind};
use uuid::Uuid;

/// Demo participants: (id, name, email).
const PARTICIPANTS: [(u128, &str, &str); 3] = [
    (0x0001, "Ana", "ana@tripsplit.dev"),
    (0x0002, "Ben", "ben@tripsplit.dev"),
    (0x0003, "Cai", "cai@tripsplit.dev"),
];

/// Demo expenses: (id, description, amount in cents, payer, kind, category, day of October).
const EXPENSES: [(u128, &str, i64, u128, ExpenseKind, Option<&str>, u32); 6] = [
    (0x1001, "Cabin, two nights", 24_000, 0x0001, ExpenseKind::Group, Some("lodging"), 16),
    (0x1002, "Fuel, outbound", 6_000, 0x0002, ExpenseKind::Group, Some("fuel"), 16),
    (0x1003, "Groceries", 4_530, 0x0003, ExpenseKind::Group, Some("food"), 17),
    (0x1004, "Lake view dinner", 10_000, 0x0001, ExpenseKind::Group, Some("Food"), 17),
    (0x1005, "Trail parking", 1_200, 0x0002, ExpenseKind::Group, None, 18),
    (0x1006, "Souvenir mug", 1_800, 0x0002, ExpenseKind::Personal, Some("souvenirs"), 18),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

    println!("Connecting to database...");
    let db = tripsplit_db::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    println!("Seeding participants...");
    seed_participants(&db).await?;

    println!("Seeding expenses...");
    seed_expenses(&db).await?;

    println!("Seeding complete!");
    Ok(())
}

/// Seeds the demo roster.
async fn seed_participants(db: &DatabaseConnection) -> anyhow::Result<()> {
    for (id, name, email) in PARTICIPANTS {
        let id = Uuid::from_u128(id);
        if participants::Entity::find_by_id(id).one(db).await?.is_some() {
            println!("  {name} already exists, skipping...");
            continue;
        }

        participants::ActiveModel {
            id: Set(id),
            name: Set(name.to_string()),
            email: Set(Some(email.to_string())),
            created_at: Set(Utc::now().into()),
        }
        .insert(db)
        .await
        .with_context(|| format!("Failed to insert participant {name}"))?;
        println!("  Created {name}");
    }

    Ok(())
}

/// Seeds the demo ledger.
async fn seed_expenses(db: &DatabaseConnection) -> anyhow::Result<()> {
    for (id, description, cents, payer, kind, category, day) in EXPENSES {
        let id = Uuid::from_u128(id);
        if expenses::Entity::find_by_id(id).one(db).await?.is_some() {
            println!("  '{description}' already exists, skipping...");
            continue;
        }

        let expense_date = NaiveDate::from_ymd_opt(2026, 10, day)
            .with_context(|| format!("Invalid demo date for '{description}'"))?;

        expenses::ActiveModel {
            id: Set(id),
            description: Set(description.to_string()),
            amount: Set(Decimal::new(cents, 2)),
            paid_by: Set(Uuid::from_u128(payer)),
            expense_date: Set(expense_date),
            kind: Set(kind),
            category: Set(category.map(String::from)),
            created_at: Set(Utc::now().into()),
        }
        .insert(db)
        .await
        .with_context(|| format!("Failed to insert expense '{description}'"))?;
        println!("  Recorded '{description}'");
    }

    Ok(())
}
