//! Discord bot for self-service Solana wallet registration.
//!
//! Members holding the whitelist role post `!wallet <address>` in the guild. Valid
//! submissions are queued in memory and drained one per tick into a wallet store, a
//! Google spreadsheet by default or a SeaORM database. A second job periodically grants
//! the whitelist role to the winners listed in a giveaway spreadsheet.
//!
//! # Layout
//!
//! - `bot` - Serenity client and the `!wallet` message handler
//! - `service` - Submission queue, drain loop, giveaway sync, wallet export
//! - `scheduler` - Interval jobs driving the drain loop and the giveaway sync
//! - `data` - Wallet store trait with Google Sheets and SeaORM implementations
//! - `model` - Domain types shared by all layers
//! - `config` / `startup` - Environment configuration and process setup

pub mod bot;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod util;
