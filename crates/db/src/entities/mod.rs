//! `SeaORM` entity definitions.

pub mod expenses;
pub mod participants;
pub mod sea_orm_active_enums;
