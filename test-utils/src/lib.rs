//! Vet Clinic Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the clinic
//! backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and factories for inserting customers, veterinarians, patients and
//! appointments with sensible defaults.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_patient_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_clinic_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (customer, patient) = factory::helpers::create_patient_with_owner(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
