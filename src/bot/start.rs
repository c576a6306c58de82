use std::sync::Arc;

use serenity::all::{Client, GatewayIntents, Http, RoleId};

use crate::{
    bot::handler::Handler, config::Config, error::AppError, service::queue::SubmissionQueue,
};

/// Builds the Discord client without connecting.
///
/// Building first lets the caller take the client's HTTP handle for the schedulers
/// before the gateway connection blocks in [`start_bot`].
///
/// # Arguments
/// - `config` - Application configuration
/// - `queue` - Queue the handler pushes wallet submissions onto
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Client ready to start and its shared HTTP client
/// - `Err(AppError::DiscordErr)` - Client construction failed
pub async fn init_bot(
    config: &Config,
    queue: SubmissionQueue,
) -> Result<(Client, Arc<Http>), AppError> {
    // Configure gateway intents - what events the bot will receive
    // MESSAGE_CONTENT and GUILD_MEMBERS are privileged intents
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MEMBERS;

    let handler = Handler::new(queue, RoleId::new(config.discord_whitelist_role_id));

    let client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await?;
    let http = client.http.clone();

    Ok((client, http))
}

/// Starts the Discord bot in a blocking manner
///
/// This function connects the client to the gateway. It should be called from within
/// a tokio::spawn task since it will block until the bot shuts down.
///
/// # Arguments
/// - `client` - Client built by [`init_bot`]
///
/// # Returns
/// - `Ok(())` if the bot runs and shuts down cleanly
/// - `Err(AppError)` if the gateway connection fails
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    // Start the bot (this blocks until shutdown)
    client.start().await?;

    Ok(())
}
