//! Wallet submission and wallet record models.

use chrono::{DateTime, Utc};

/// A pending wallet registration taken from a `!wallet` command.
///
/// Lives only in the submission queue and is consumed when the drain loop dequeues it,
/// whether or not persisting it succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletSubmission {
    /// Discord user id of the submitter.
    pub id: String,
    /// Discord tag of the submitter at submission time.
    pub name: String,
    /// Validated wallet address.
    pub address: String,
}

impl WalletSubmission {
    pub fn new(id: impl Into<String>, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: address.into(),
        }
    }
}

/// A persisted wallet registration, at most one per `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletRecord {
    pub id: String,
    pub name: String,
    pub address: String,
    /// Set once when the record is inserted. `None` only for rows written by hand.
    pub created: Option<DateTime<Utc>>,
    /// Set on every mutating update, `None` until the first one.
    pub updated: Option<DateTime<Utc>>,
}

impl WalletRecord {
    /// Creates a brand new record from a submission.
    ///
    /// # Arguments
    /// - `submission` - The submission being persisted for the first time
    /// - `now` - Insertion time, stored as `created`
    ///
    /// # Returns
    /// - `WalletRecord` - Record with `created` set and `updated` unset
    pub fn from_submission(submission: &WalletSubmission, now: DateTime<Utc>) -> Self {
        Self {
            id: submission.id.clone(),
            name: submission.name.clone(),
            address: submission.address.clone(),
            created: Some(now),
            updated: None,
        }
    }

    /// Applies a newer submission for the same user.
    ///
    /// Only an address change counts as a change. When the address is the same the
    /// record is left untouched, including its name.
    ///
    /// # Arguments
    /// - `submission` - Newer submission with the same `id`
    /// - `now` - Update time, stored as `updated`
    ///
    /// # Returns
    /// - `true` - Name, address, and `updated` were overwritten
    /// - `false` - Address unchanged, nothing modified
    pub fn apply_submission(&mut self, submission: &WalletSubmission, now: DateTime<Utc>) -> bool {
        if self.address == submission.address {
            return false;
        }

        self.name = submission.name.clone();
        self.address = submission.address.clone();
        self.updated = Some(now);
        true
    }

    /// Converts an entity model to a wallet record at the repository boundary.
    pub fn from_entity(entity: entity::wallet::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
            created: Some(entity.created),
            updated: entity.updated,
        }
    }
}

/// A wallet record together with its position in the store listing.
///
/// Row-oriented stores need the position to write back in place. Stores keyed by
/// `id` ignore it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletRow {
    /// 1-based row number within the store.
    pub row_number: u32,
    pub record: WalletRecord,
}

/// What a drain tick did with the submission it dequeued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertAction {
    /// No record existed for the id, a new one was appended.
    Inserted,
    /// A record existed with a different address and was updated in place.
    Updated,
    /// A record existed with the same address, no write was issued.
    Unchanged,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn new_record_has_created_but_no_updated() {
        let submission = WalletSubmission::new("u1", "A", "X");
        let record = WalletRecord::from_submission(&submission, at(1));

        assert_eq!(record.id, "u1");
        assert_eq!(record.created, Some(at(1)));
        assert_eq!(record.updated, None);
    }

    #[test]
    fn changed_address_overwrites_name_and_address() {
        let mut record = WalletRecord::from_submission(&WalletSubmission::new("u1", "A", "X"), at(1));

        assert!(record.apply_submission(&WalletSubmission::new("u1", "B", "Y"), at(2)));
        assert_eq!(record.name, "B");
        assert_eq!(record.address, "Y");
        assert_eq!(record.created, Some(at(1)));
        assert_eq!(record.updated, Some(at(2)));
    }

    /// A name-only change is dropped when the address is unchanged.
    #[test]
    fn same_address_leaves_record_untouched() {
        let mut record = WalletRecord::from_submission(&WalletSubmission::new("u1", "A", "X"), at(1));
        let before = record.clone();

        assert!(!record.apply_submission(&WalletSubmission::new("u1", "Renamed", "X"), at(2)));
        assert_eq!(record, before);
    }
}
