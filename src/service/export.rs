//! Wallet export.
//!
//! Turns the wallet store into the JSON allocation list consumed by the token
//! distribution tooling: `[[address, tokens], ...]`.

use std::{path::Path, sync::Arc};

use crate::{
    data::WalletStore,
    error::AppError,
    model::{export::WalletAllocation, wallet::WalletRow},
    util::address::is_solana_address,
};

pub struct WalletExportService {
    store: Arc<dyn WalletStore>,
}

impl WalletExportService {
    pub fn new(store: Arc<dyn WalletStore>) -> Self {
        Self { store }
    }

    /// Reads the store and builds one allocation per valid address.
    ///
    /// # Arguments
    /// - `tokens_per_wallet` - Fixed allocation given to every wallet
    ///
    /// # Returns
    /// - `Ok(Vec<WalletAllocation>)` - Allocations in store order
    /// - `Err(AppError)` - Reading the store failed
    pub async fn allocations(&self, tokens_per_wallet: u64) -> Result<Vec<WalletAllocation>, AppError> {
        let rows = self.store.list_wallets().await?;

        Ok(build_allocations(&rows, tokens_per_wallet))
    }

    /// Writes the allocation list to a file as compact JSON.
    ///
    /// # Arguments
    /// - `path` - Output file, overwritten if it exists
    /// - `tokens_per_wallet` - Fixed allocation given to every wallet
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of wallets written
    /// - `Err(AppError)` - Reading the store, serializing, or writing the file failed
    pub async fn write_to(&self, path: &Path, tokens_per_wallet: u64) -> Result<usize, AppError> {
        let allocations = self.allocations(tokens_per_wallet).await?;
        let json = serde_json::to_vec(&allocations)?;

        tokio::fs::write(path, json).await?;

        tracing::info!("Exported {} wallets to {}", allocations.len(), path.display());

        Ok(allocations.len())
    }
}

/// Keeps rows with a non-empty, valid address.
pub fn build_allocations(rows: &[WalletRow], tokens_per_wallet: u64) -> Vec<WalletAllocation> {
    rows.iter()
        .map(|row| row.record.address.as_str())
        .filter(|address| !address.is_empty())
        .filter(|address| {
            let valid = is_solana_address(address);
            if !valid {
                tracing::warn!("Skipping invalid address {:?} in export", address);
            }
            valid
        })
        .map(|address| WalletAllocation(address.to_string(), tokens_per_wallet))
        .collect()
}
