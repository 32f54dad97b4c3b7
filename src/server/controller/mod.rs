//! HTTP request handlers.
//!
//! Handlers authenticate with `BearerToken` and check access with `AuthGuard`, convert
//! request DTOs into domain parameters, call a service, and convert the result back into
//! a response DTO.

pub mod appointment;
pub mod auth;
pub mod customer;
pub mod patient;
pub mod veterinarian;

#[cfg(test)]
mod test;
