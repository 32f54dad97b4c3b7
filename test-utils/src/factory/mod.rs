//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let customer = factory::customer::create_customer(&db).await?;
//! let vet = factory::veterinarian::create_veterinarian(&db).await?;
//! let patient = factory::patient::create_patient(&db, customer.id).await?;
//! let appointment = factory::appointment::create_appointment(&db, vet.id, patient.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::veterinarian::VeterinarianFactory::new(&db)
//!     .email("head@vet.com")
//!     .admin(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `customer` - Create customer entities
//! - `veterinarian` - Create veterinarian entities
//! - `patient` - Create patient entities
//! - `appointment` - Create appointment entities
//! - `helpers` - ID generation, password hashing and entities with dependencies

pub mod appointment;
pub mod customer;
pub mod helpers;
pub mod patient;
pub mod veterinarian;

pub use appointment::create_appointment;
pub use customer::create_customer;
pub use patient::create_patient;
pub use veterinarian::{create_admin, create_veterinarian};
