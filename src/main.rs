use std::sync::Arc;

use serenity::all::{GuildId, RoleId};

use walletbot::{
    bot,
    config::Config,
    data::sheets::{giveaway::SheetGiveawaySource, SheetsClient},
    error::AppError,
    scheduler::{giveaway_roles, wallet_queue},
    service::{drain::WalletDrainService, giveaway::GiveawayRoleService},
    startup,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let http_client = startup::setup_reqwest_client()?;
    let wallet_store =
        startup::build_wallet_store(&config.wallet_store, http_client.clone()).await?;
    let drain = WalletDrainService::new(wallet_store);

    tracing::info!("Starting wallet bot");

    // Initialize Discord bot and extract HTTP client
    let (bot_client, discord_http) = bot::start::init_bot(&config, drain.queue()).await?;

    let _wallet_scheduler =
        wallet_queue::start_scheduler(drain, config.wallet_queue_interval).await?;

    let sheets_client = SheetsClient::new(http_client, &config.google)?;
    let giveaway_service = GiveawayRoleService::new(
        Arc::new(SheetGiveawaySource::new(
            sheets_client,
            config.giveaway_sheet_id.clone(),
        )),
        discord_http,
        GuildId::new(config.discord_guild_id),
        RoleId::new(config.discord_whitelist_role_id),
    );
    let _giveaway_scheduler =
        giveaway_roles::start_scheduler(giveaway_service, config.giveaway_sync_interval).await?;

    // Blocks until the gateway connection ends
    bot::start::start_bot(bot_client).await
}
