//! Holocron Test Utils
//!
//! Shared testing utilities for the holocron catalog API. This crate offers a
//! builder pattern for creating test contexts with in-memory SQLite databases
//! plus per-entity factories for seeding catalog rows.
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
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Planet;
//!
//! #[tokio::test]
//! async fn test_planet_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Planet)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
