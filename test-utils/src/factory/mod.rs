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
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let planet = factory::planet::create_planet(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("leia@rebellion.example")
//!     .first_name("Leia")
//!     .build()
//!     .await?;
//! ```

pub mod character;
pub mod helpers;
pub mod planet;
pub mod starship;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use character::create_character;
pub use helpers::create_user_with_catalog;
pub use planet::create_planet;
pub use starship::create_starship;
pub use user::create_user;
