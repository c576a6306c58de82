//! Error types for the wallet bot.
//!
//! `AppError` is the top-level error returned by services, stores, and startup code. It
//! wraps the domain-specific error enums defined in the submodules plus the errors of
//! the third-party crates the bot talks through (SeaORM, reqwest, Serenity, the cron
//! scheduler).

pub mod config;
pub mod internal;
pub mod sheets;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError, sheets::SheetsError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most variants
/// use `#[from]` for automatic conversion so `?` can be used throughout the service and
/// data layers.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// The only error category that terminates the process.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Google Sheets or OAuth token endpoint error.
    #[error(transparent)]
    SheetsErr(#[from] SheetsError),

    /// Unexpected data read back from a store.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client request error from reqwest.
    ///
    /// Covers transport failures and undecodable response bodies from Google.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Filesystem error while writing an export.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// JSON serialization error while writing an export.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
