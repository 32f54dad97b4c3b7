//! SeaORM entities for the clinic database.

pub mod prelude;

pub mod appointment;
pub mod customer;
pub mod patient;
pub mod sea_orm_active_enums;
pub mod token_blocklist;
pub mod veterinarian;
