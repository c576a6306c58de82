//! Domain models shared by the bot, the drain loop, the stores, and the export.
//!
//! Models here are independent of how records are persisted. Stores convert their own
//! row or entity representation into these types at the data-layer boundary.

pub mod export;
pub mod giveaway;
pub mod wallet;
