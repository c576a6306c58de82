//! Wallet data repository for database operations.
//!
//! This module provides the `WalletRepository`, a [`WalletStore`] backed by the SeaORM
//! `wallet` table. The table's primary key is the Discord user id, so the row number
//! carried by [`WalletRow`] is informational only.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::{
    data::WalletStore,
    error::AppError,
    model::wallet::{WalletRecord, WalletRow},
};

/// Repository providing database operations for wallet records.
///
/// Holds its own handle to the connection pool so it can be shared behind an `Arc` by
/// the drain loop and the export.
#[derive(Clone)]
pub struct WalletRepository {
    db: DatabaseConnection,
}

impl WalletRepository {
    /// Creates a new WalletRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    ///
    /// # Returns
    /// - `WalletRepository` - New repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all wallets ordered by creation time.
    ///
    /// # Returns
    /// - `Ok(Vec<WalletRecord>)` - Every stored wallet, oldest first
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<WalletRecord>, DbErr> {
        let entities = entity::prelude::Wallet::find()
            .order_by_asc(entity::wallet::Column::Created)
            .order_by_asc(entity::wallet::Column::Id)
            .all(&self.db)
            .await?;

        Ok(entities.into_iter().map(WalletRecord::from_entity).collect())
    }

    /// Finds a wallet by the Discord id of its owner.
    ///
    /// # Arguments
    /// - `id` - Discord user id as stored
    ///
    /// # Returns
    /// - `Ok(Some(WalletRecord))` - Wallet found
    /// - `Ok(None)` - No wallet registered for that id
    /// - `Err(DbErr)` - Database error during query
    #[cfg(test)]
    pub async fn find_by_id(&self, id: &str) -> Result<Option<WalletRecord>, DbErr> {
        let entity = entity::prelude::Wallet::find_by_id(id.to_string())
            .one(&self.db)
            .await?;

        Ok(entity.map(WalletRecord::from_entity))
    }

    /// Inserts a new wallet.
    ///
    /// A record without `created` is stamped with the current time, the column is not
    /// nullable.
    ///
    /// # Arguments
    /// - `record` - Wallet to insert
    ///
    /// # Returns
    /// - `Ok(WalletRecord)` - The inserted wallet as stored
    /// - `Err(DbErr)` - Database error, including a duplicate id
    pub async fn create(&self, record: &WalletRecord) -> Result<WalletRecord, DbErr> {
        let entity = entity::wallet::ActiveModel {
            id: ActiveValue::Set(record.id.clone()),
            name: ActiveValue::Set(record.name.clone()),
            address: ActiveValue::Set(record.address.clone()),
            created: ActiveValue::Set(record.created.unwrap_or_else(Utc::now)),
            updated: ActiveValue::Set(record.updated),
        }
        .insert(&self.db)
        .await?;

        Ok(WalletRecord::from_entity(entity))
    }

    /// Updates the mutable fields of an existing wallet.
    ///
    /// `created` is never touched.
    ///
    /// # Arguments
    /// - `record` - Wallet carrying the new name, address, and updated time
    ///
    /// # Returns
    /// - `Ok(WalletRecord)` - The wallet after the update
    /// - `Err(DbErr::RecordNotUpdated)` - No wallet exists with that id
    /// - `Err(DbErr)` - Other database error
    pub async fn update(&self, record: &WalletRecord) -> Result<WalletRecord, DbErr> {
        let entity = entity::wallet::ActiveModel {
            id: ActiveValue::Unchanged(record.id.clone()),
            name: ActiveValue::Set(record.name.clone()),
            address: ActiveValue::Set(record.address.clone()),
            updated: ActiveValue::Set(record.updated),
            ..Default::default()
        }
        .update(&self.db)
        .await?;

        Ok(WalletRecord::from_entity(entity))
    }
}

#[async_trait]
impl WalletStore for WalletRepository {
    async fn list_wallets(&self) -> Result<Vec<WalletRow>, AppError> {
        let rows = self
            .get_all()
            .await?
            .into_iter()
            .zip(1u32..)
            .map(|(record, row_number)| WalletRow { row_number, record })
            .collect();

        Ok(rows)
    }

    async fn update_wallet(&self, row: &WalletRow) -> Result<(), AppError> {
        self.update(&row.record).await?;
        Ok(())
    }

    async fn append_wallet(&self, record: &WalletRecord) -> Result<(), AppError> {
        self.create(record).await?;
        Ok(())
    }
}
