//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity objects by deserializing JSON, simulating
//! what Discord's API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_member;
//!
//! let member = create_test_member(100, 123456789, "holder", &[555]);
//! assert_eq!(member.user.tag(), "holder#0001");
//! ```
//!
//! # Available Factories
//!
//! - `member::create_test_member` - Create Serenity Member objects

pub mod member;

pub use member::create_test_member;
