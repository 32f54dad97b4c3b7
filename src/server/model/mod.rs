//! Domain models and operation-specific parameter types.
//!
//! Repositories convert SeaORM entities into these models at the data boundary, services
//! operate on them, and controllers convert them into API DTOs. Parameter types are built
//! from request DTOs and carry the field validation for their operation.

pub mod appointment;
pub mod auth;
pub mod customer;
pub mod enums;
pub mod patient;
pub mod veterinarian;
