//! SeaORM entities for the wallet bot's relational store.

pub mod prelude;
pub mod wallet;
