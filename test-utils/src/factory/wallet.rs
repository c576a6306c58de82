//! Wallet factory for creating test wallet entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::{factory::helpers::next_id, fixture};

/// Factory for creating test wallets with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::wallet::WalletFactory;
///
/// let wallet = WalletFactory::new(&db)
///     .id("123456789")
///     .name("holder#0001")
///     .build()
///     .await?;
/// ```
pub struct WalletFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    address: String,
    created: DateTime<Utc>,
    updated: Option<DateTime<Utc>>,
}

impl<'a> WalletFactory<'a> {
    /// Creates a new WalletFactory with default values.
    ///
    /// Defaults:
    /// - id: auto-incremented number as string
    /// - name: `"holder#{id}"`
    /// - address: valid address derived from the id
    /// - created: now
    /// - updated: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `WalletFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: id.to_string(),
            name: format!("holder#{:04}", id % 10_000),
            address: fixture::wallet::address(id),
            created: Utc::now(),
            updated: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn created(mut self, created: DateTime<Utc>) -> Self {
        self.created = created;
        self
    }

    pub fn updated(mut self, updated: Option<DateTime<Utc>>) -> Self {
        self.updated = updated;
        self
    }

    /// Builds and inserts the wallet entity into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created wallet entity
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::wallet::Model, DbErr> {
        entity::wallet::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set(self.address),
            created: ActiveValue::Set(self.created),
            updated: ActiveValue::Set(self.updated),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a wallet with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(Model)` - The created wallet entity
/// - `Err(DbErr)` - Database error during insertion
pub async fn create_wallet(db: &DatabaseConnection) -> Result<entity::wallet::Model, DbErr> {
    WalletFactory::new(db).build().await
}
