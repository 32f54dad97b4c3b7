//! Request and response DTOs for the REST API.
//!
//! These types define the JSON contract of every endpoint and carry the `ToSchema`
//! derives used for the generated OpenAPI document. Server-side domain models live in
//! `server::model` and convert into these at the controller boundary.

pub mod api;
pub mod appointment;
pub mod auth;
pub mod customer;
pub mod enums;
pub mod patient;
pub mod time_format;
pub mod veterinarian;
