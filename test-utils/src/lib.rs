//! Walletbot Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the wallet
//! bot. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, factories for wallet rows, Serenity object factories, and a
//! throwaway service account for Google API tests.
//!
//! # Overview
//!
//! The test utilities consist of these main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and setup
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Insert entities with sensible defaults
//! - **fixture**: In-memory test data that is never inserted
//! - **serenity**: Serenity structs built from Discord-shaped JSON
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Wallet;
//!
//! #[tokio::test]
//! async fn test_wallet_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Wallet)
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
pub mod fixture;
pub mod serenity;
