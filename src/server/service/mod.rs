//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Field validation, uniqueness and reference checks
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//!
//! Access control is not part of this layer; controllers check permissions with
//! `AuthGuard` before calling a service.

pub mod appointment;
pub mod auth;
pub mod customer;
pub mod patient;
pub mod veterinarian;
