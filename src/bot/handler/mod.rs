use serenity::all::{Context, EventHandler, Message, Ready, RoleId};
use serenity::async_trait;

use crate::service::queue::SubmissionQueue;

pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub queue: SubmissionQueue,
    /// Only members holding this role may register a wallet.
    pub whitelist_role_id: RoleId,
}

impl Handler {
    pub fn new(queue: SubmissionQueue, whitelist_role_id: RoleId) -> Self {
        Self {
            queue,
            whitelist_role_id,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.queue, self.whitelist_role_id, ctx, message).await;
    }
}
