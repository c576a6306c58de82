//! Giveaway winner models used by the role sync.

/// One row of the giveaway spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GiveawayEntry {
    /// Discord user id of the winner, as written in the sheet.
    pub id: String,
    /// Who the giveaway came from, used in the audit log reason.
    pub from: String,
}

/// A role grant the sync decided to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleGrant {
    pub user_id: u64,
    /// Discord tag of the member, for logging.
    pub tag: String,
    pub from: String,
}

impl RoleGrant {
    /// Audit log reason attached to the role assignment.
    pub fn reason(&self) -> String {
        format!("Giveaway from {}", self.from)
    }
}
