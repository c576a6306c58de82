//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture values and functions that create in-memory test data
//! for use in unit tests and as default values for factories. Unlike factories,
//! fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Distinct, syntactically valid Solana addresses
//! let first = fixture::wallet::address(1);
//! let second = fixture::wallet::address(2);
//! ```

pub mod service_account;
pub mod wallet;
