//! Process startup helpers shared by the bot and the export binary.

use std::sync::Arc;

use crate::{
    config::WalletStoreConfig,
    data::{
        sheets::{wallet::SheetWalletStore, SheetsClient},
        wallet::WalletRepository,
        WalletStore,
    },
    error::AppError,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the given connection
/// string, then automatically runs all pending SeaORM migrations to ensure the `wallet`
/// table exists.
///
/// # Arguments
/// - `database_url` - SeaORM connection string
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(
    database_url: &str,
) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for every Google API call.
///
/// Redirects are disabled, Google's APIs never redirect and a redirect would drop the
/// bearer token anyway.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(client)
}

/// Opens the configured wallet store.
///
/// For Google Sheets this authenticates and reads the worksheet header, so a bad
/// credential or a sheet without the wallet columns fails at startup.
///
/// # Arguments
/// - `config` - Which store to open
/// - `http` - HTTP client for the Sheets store
///
/// # Returns
/// - `Ok(Arc<dyn WalletStore>)` - Store ready for use
/// - `Err(AppError)` - Authentication, worksheet, or database error
pub async fn build_wallet_store(
    config: &WalletStoreConfig,
    http: reqwest::Client,
) -> Result<Arc<dyn WalletStore>, AppError> {
    match config {
        WalletStoreConfig::Sheets {
            credentials,
            sheet_id,
        } => {
            let client = SheetsClient::new(http, credentials)?;
            let store = SheetWalletStore::open(&client, sheet_id).await?;

            tracing::info!("Using Google Sheets wallet store {}", sheet_id);

            Ok(Arc::new(store))
        }
        WalletStoreConfig::Sqlite { database_url } => {
            let db = connect_to_database(database_url).await?;

            tracing::info!("Using database wallet store");

            Ok(Arc::new(WalletRepository::new(db)))
        }
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` overrides the default filter of `info,walletbot=debug`.
pub fn init_tracing() {
    use tracing_subscriber::{prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,walletbot=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
