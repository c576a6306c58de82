//! Giveaway role sync.
//!
//! Grants the whitelist role to every guild member listed in the giveaway spreadsheet who
//! does not hold it yet.

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use serenity::all::{GuildId, Http, Member, RoleId, UserId};

use crate::{
    data::GiveawaySource,
    error::AppError,
    model::giveaway::{GiveawayEntry, RoleGrant},
    util::parse::parse_u64_from_str,
};

/// Maximum page size accepted by Discord's list guild members endpoint.
const MEMBER_PAGE_SIZE: u64 = 1000;

/// Summary of one sync run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GiveawaySyncSummary {
    /// Rows read from the giveaway sheet.
    pub entries: usize,
    /// Roles successfully granted.
    pub granted: usize,
    /// Grants Discord refused.
    pub failed: usize,
}

pub struct GiveawayRoleService {
    source: Arc<dyn GiveawaySource>,
    http: Arc<Http>,
    guild_id: GuildId,
    role_id: RoleId,
}

impl GiveawayRoleService {
    /// Creates a new GiveawayRoleService.
    ///
    /// # Arguments
    /// - `source` - Giveaway winner list
    /// - `http` - Discord HTTP client
    /// - `guild_id` - Guild whose members are granted the role
    /// - `role_id` - Role to grant
    ///
    /// # Returns
    /// - `GiveawayRoleService` - New service instance
    pub fn new(
        source: Arc<dyn GiveawaySource>,
        http: Arc<Http>,
        guild_id: GuildId,
        role_id: RoleId,
    ) -> Self {
        Self {
            source,
            http,
            guild_id,
            role_id,
        }
    }

    /// Runs one sync.
    ///
    /// A failed read of the sheet or of the member list aborts the run. A failed grant is
    /// logged and the remaining grants still go out.
    ///
    /// # Returns
    /// - `Ok(GiveawaySyncSummary)` - Counts for this run
    /// - `Err(AppError)` - Reading the sheet or the member list failed
    pub async fn sync(&self) -> Result<GiveawaySyncSummary, AppError> {
        let entries = self.source.list_entries().await?;
        let members = self.fetch_members().await?;
        let grants = select_grants(&entries, &members, self.role_id);

        tracing::debug!(
            "Giveaway sync: {} entries, {} members, {} grants",
            entries.len(),
            members.len(),
            grants.len()
        );

        let mut summary = GiveawaySyncSummary {
            entries: entries.len(),
            ..Default::default()
        };

        for grant in grants {
            let result = self
                .http
                .add_member_role(
                    self.guild_id,
                    UserId::new(grant.user_id),
                    self.role_id,
                    Some(&grant.reason()),
                )
                .await;

            match result {
                Ok(()) => {
                    tracing::info!("Granted giveaway role to {} ({})", grant.tag, grant.user_id);
                    summary.granted += 1;
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to grant giveaway role to {} ({}): {}",
                        grant.tag,
                        grant.user_id,
                        e
                    );
                    summary.failed += 1;
                }
            }
        }

        Ok(summary)
    }

    /// Fetches every member of the guild, one page at a time.
    async fn fetch_members(&self) -> Result<Vec<Member>, AppError> {
        let mut members = Vec::new();
        let mut after = None;

        loop {
            let page = self
                .http
                .get_guild_members(self.guild_id, Some(MEMBER_PAGE_SIZE), after)
                .await?;
            let page_len = page.len() as u64;

            after = page.last().map(|member| member.user.id.get());
            members.extend(page);

            if page_len < MEMBER_PAGE_SIZE {
                break;
            }
        }

        Ok(members)
    }
}

/// Decides which giveaway winners need the role.
///
/// Entries are considered in sheet order. An entry is skipped when its id does not parse,
/// when nobody in the guild has that id, when the member already holds the role, or when
/// an earlier entry already granted the role to the same member.
///
/// # Arguments
/// - `entries` - Rows of the giveaway sheet
/// - `members` - Current guild members
/// - `role_id` - Role being granted
///
/// # Returns
/// - `Vec<RoleGrant>` - One grant per member that needs the role
pub fn select_grants(
    entries: &[GiveawayEntry],
    members: &[Member],
    role_id: RoleId,
) -> Vec<RoleGrant> {
    let members_by_id: HashMap<u64, &Member> = members
        .iter()
        .map(|member| (member.user.id.get(), member))
        .collect();
    let mut granted = HashSet::new();
    let mut grants = Vec::new();

    for entry in entries {
        let user_id = match parse_u64_from_str(&entry.id) {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!("Skipping giveaway entry with invalid id {:?}: {}", entry.id, e);
                continue;
            }
        };

        let Some(member) = members_by_id.get(&user_id) else {
            continue;
        };

        if member.roles.contains(&role_id) || !granted.insert(user_id) {
            continue;
        }

        grants.push(RoleGrant {
            user_id,
            tag: member.user.tag(),
            from: entry.from.clone(),
        });
    }

    grants
}
