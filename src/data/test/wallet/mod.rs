use crate::{
    data::{wallet::WalletRepository, WalletStore},
    model::wallet::WalletRecord,
};
use chrono::{TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, fixture};

mod create;
mod find_by_id;
mod get_all;
mod update;
mod wallet_store;
