//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically generate unique values for
//! identifying fields, making tests more concise and maintainable.
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
//!     let key = factory::api_key::create_api_key(&db).await?;
//!
//!     // Create with custom values
//!     let key = factory::api_key::ApiKeyFactory::new(&db)
//!         .limits(2, 100, 1000)
//!         .active(false)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api_key;
pub mod helpers;
