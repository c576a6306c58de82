//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
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
//!     let wallet = factory::wallet::create_wallet(&db).await?;
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
//! let wallet = factory::wallet::WalletFactory::new(&db)
//!     .id("987654321")
//!     .address(fixture::wallet::address(7))
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod wallet;

pub use wallet::create_wallet;
