//! Discord bot integration.
//!
//! The bot listens for `!wallet <address>` commands in the configured guild and pushes
//! valid submissions onto the drain service's queue. Its HTTP client is shared with the
//! giveaway role sync so role grants go through the same connection.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild availability events
//! - `GUILD_MESSAGES` - Receive messages posted in guild channels
//! - `MESSAGE_CONTENT` - Read the text of those messages (privileged intent)
//! - `GUILD_MEMBERS` - List guild members for the giveaway sync (privileged intent)
//!
//! Note: both privileged intents must be explicitly enabled in the Discord Developer
//! Portal for the bot application.

pub mod handler;
pub mod start;
