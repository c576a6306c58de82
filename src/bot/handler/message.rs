//! `!wallet` command handling.
//!
//! Parsing and gating are kept separate from the Discord plumbing in
//! [`parse_wallet_command`] and [`evaluate_message`] so the command rules can be checked
//! without a gateway connection.

use serenity::all::{Context, Message, RoleId, User};

use crate::{
    model::wallet::WalletSubmission, service::queue::SubmissionQueue,
    util::address::is_solana_address,
};

const COMMAND: &str = "!wallet";

const USAGE_REPLY: &str = "Please provide Solana address. Example of correct command:\n!wallet REPLACE_THIS_WITH_YOUR_ADDRESS";
const INVALID_ADDRESS_REPLY: &str = "Invalid Solana address";
const LINE_BREAK_REPLY: &str = "Please don't use line breaks in your message. Example of correct command:\n!wallet REPLACE_THIS_WITH_YOUR_ADDRESS";

/// A recognised `!wallet` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletCommand<'a> {
    /// Well-formed command with a valid address.
    Register(&'a str),
    /// `!wallet` with nothing after it.
    MissingAddress,
    /// The address failed validation.
    InvalidAddress,
    /// The command was glued to the rest of the message by a line break.
    LineBreak,
}

impl WalletCommand<'_> {
    /// Text sent back to the member, `None` when the command succeeds.
    pub fn reply(&self) -> Option<&'static str> {
        match self {
            WalletCommand::Register(_) => None,
            WalletCommand::MissingAddress => Some(USAGE_REPLY),
            WalletCommand::InvalidAddress => Some(INVALID_ADDRESS_REPLY),
            WalletCommand::LineBreak => Some(LINE_BREAK_REPLY),
        }
    }
}

/// Parses a message as a `!wallet` command.
///
/// The content is trimmed and split on single spaces with empty tokens dropped. The first
/// token must be exactly `!wallet`, the second is the address and anything after it is
/// ignored.
///
/// # Arguments
/// - `content` - Raw message text
///
/// # Returns
/// - `Some(WalletCommand)` - The message is a wallet command, valid or not
/// - `None` - Unrelated message
pub fn parse_wallet_command(content: &str) -> Option<WalletCommand<'_>> {
    let content = content.trim();
    let mut tokens = content.split(' ').filter(|token| !token.is_empty());

    match tokens.next() {
        Some(COMMAND) => {}
        Some(_) if content.starts_with(COMMAND) && content.contains('\n') => {
            return Some(WalletCommand::LineBreak);
        }
        _ => return None,
    }

    let command = match tokens.next() {
        None => WalletCommand::MissingAddress,
        Some(address) if is_solana_address(address) => WalletCommand::Register(address),
        Some(_) => WalletCommand::InvalidAddress,
    };

    Some(command)
}

/// What to do with an incoming message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageAction {
    /// Not a wallet command, or the author may not register.
    Ignore,
    /// Malformed command, answer with this text.
    Reply(&'static str),
    /// Valid registration, acknowledge and queue it.
    Enqueue(WalletSubmission),
}

/// Decides how to answer a guild message.
///
/// Bots are ignored. The command is parsed before the role check, and members without the
/// whitelist role get no reply even for malformed commands.
///
/// # Arguments
/// - `author` - Author of the message
/// - `member_roles` - Roles of the author in the guild, `None` outside a guild
/// - `content` - Raw message text
/// - `whitelist_role_id` - Role required to register a wallet
///
/// # Returns
/// - `MessageAction` - Ignore, reply, or enqueue the submission
pub fn evaluate_message(
    author: &User,
    member_roles: Option<&[RoleId]>,
    content: &str,
    whitelist_role_id: RoleId,
) -> MessageAction {
    if author.bot {
        return MessageAction::Ignore;
    }

    // Only guild messages carry member data
    let Some(roles) = member_roles else {
        return MessageAction::Ignore;
    };

    let Some(command) = parse_wallet_command(content) else {
        return MessageAction::Ignore;
    };

    if !roles.contains(&whitelist_role_id) {
        tracing::debug!("Ignoring wallet command from {} without whitelist role", author.id);
        return MessageAction::Ignore;
    }

    match command {
        WalletCommand::Register(address) => MessageAction::Enqueue(WalletSubmission::new(
            author.id.to_string(),
            author.tag(),
            address,
        )),
        other => match other.reply() {
            Some(reply) => MessageAction::Reply(reply),
            None => MessageAction::Ignore,
        },
    }
}

/// Handle message creation in a channel
///
/// Valid registrations are acknowledged with a 👍 reaction and queued, everything else
/// that looks like a wallet command from a whitelisted member gets a reply explaining
/// what is wrong.
pub async fn handle_message(
    queue: &SubmissionQueue,
    whitelist_role_id: RoleId,
    ctx: Context,
    message: Message,
) {
    let member_roles = message.member.as_ref().map(|member| member.roles.as_slice());

    match evaluate_message(&message.author, member_roles, &message.content, whitelist_role_id) {
        MessageAction::Ignore => {}
        MessageAction::Reply(reply) => {
            if let Err(e) = message.reply(&ctx.http, reply).await {
                tracing::error!("Failed to reply to {}: {}", message.author.id, e);
            }
        }
        MessageAction::Enqueue(submission) => {
            if let Err(e) = message.react(&ctx.http, '👍').await {
                tracing::error!("Failed to react to {}: {}", message.author.id, e);
            }

            tracing::debug!("Queued wallet submission from {}", submission.name);
            queue.enqueue(submission);
        }
    }
}
