//! Data layer: wallet and giveaway stores.
//!
//! The drain loop, the export, and the giveaway sync only see the [`WalletStore`] and
//! [`GiveawaySource`] traits. Two wallet stores implement them:
//!
//! - **Google Sheets** (`sheets/`) - the first worksheet of a spreadsheet, found by a
//!   full read and a linear scan
//! - **SeaORM** (`wallet`) - a `wallet` table keyed by Discord user id
//!
//! Stores convert their own row or entity representation into the domain models in
//! `crate::model` at this boundary.

pub mod sheets;
pub mod wallet;

#[cfg(test)]
mod test;

use async_trait::async_trait;

use crate::{
    error::AppError,
    model::{
        giveaway::GiveawayEntry,
        wallet::{WalletRecord, WalletRow},
    },
};

/// Row-oriented wallet record store.
///
/// Exposes only what a spreadsheet can do: read everything, rewrite one row, append one
/// row. Uniqueness by `id` is maintained by the caller.
#[async_trait]
pub trait WalletStore: Send + Sync {
    /// Reads every wallet record in store order.
    async fn list_wallets(&self) -> Result<Vec<WalletRow>, AppError>;

    /// Persists the `name`, `address`, and `updated` fields of an existing row.
    async fn update_wallet(&self, row: &WalletRow) -> Result<(), AppError>;

    /// Appends a new record.
    async fn append_wallet(&self, record: &WalletRecord) -> Result<(), AppError>;
}

/// Read-only list of giveaway winners.
#[async_trait]
pub trait GiveawaySource: Send + Sync {
    async fn list_entries(&self) -> Result<Vec<GiveawayEntry>, AppError>;
}
