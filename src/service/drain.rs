//! Upsert drain loop.
//!
//! [`WalletDrainService`] owns the submission queue and reconciles one submission per
//! tick with the wallet store. Ticks are driven by the wallet queue scheduler in
//! production and called directly in tests.
//!
//! A tick never returns an error. Whatever happened is reported as a [`DrainOutcome`]
//! and the submission is gone from the queue either way, there are no retries.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use crate::{
    data::WalletStore,
    error::AppError,
    model::wallet::{UpsertAction, WalletRecord, WalletSubmission},
    service::queue::SubmissionQueue,
};

/// Result of a single drain tick.
#[derive(Debug)]
pub enum DrainOutcome {
    /// The queue was empty.
    Idle,
    /// A previous tick was still running, nothing was dequeued.
    Busy,
    /// The submission was reconciled with the store.
    Persisted {
        submission: WalletSubmission,
        action: UpsertAction,
    },
    /// A store call failed, the submission has been dropped.
    Failed {
        submission: WalletSubmission,
        error: AppError,
    },
}

/// Owns the submission queue and drains it into a [`WalletStore`].
#[derive(Clone)]
pub struct WalletDrainService {
    queue: SubmissionQueue,
    store: Arc<dyn WalletStore>,
    /// Held for the duration of a tick so scheduled runs never overlap.
    in_flight: Arc<Mutex<()>>,
}

impl WalletDrainService {
    /// Creates a drain service with an empty queue.
    ///
    /// # Arguments
    /// - `store` - Wallet store submissions are persisted to
    ///
    /// # Returns
    /// - `WalletDrainService` - New service instance
    pub fn new(store: Arc<dyn WalletStore>) -> Self {
        Self {
            queue: SubmissionQueue::new(),
            store,
            in_flight: Arc::new(Mutex::new(())),
        }
    }

    /// Returns a handle to the queue for producers.
    pub fn queue(&self) -> SubmissionQueue {
        self.queue.clone()
    }

    /// Enqueues a validated submission.
    ///
    /// Never blocks on the store and never fails.
    ///
    /// # Arguments
    /// - `id` - Discord user id of the submitter
    /// - `name` - Discord tag of the submitter
    /// - `address` - Wallet address, already validated
    pub fn submit(&self, id: impl Into<String>, name: impl Into<String>, address: impl Into<String>) {
        self.queue.enqueue(WalletSubmission::new(id, name, address));
    }

    /// Processes at most one submission.
    ///
    /// The re-entrancy guard is taken before dequeuing, so a tick that overlaps a running
    /// one leaves the queue untouched. The submission is removed before any store call is
    /// made.
    ///
    /// # Returns
    /// - `DrainOutcome` - What happened during this tick
    pub async fn tick(&self) -> DrainOutcome {
        let Ok(_guard) = self.in_flight.try_lock() else {
            return DrainOutcome::Busy;
        };

        let Some(submission) = self.queue.dequeue() else {
            return DrainOutcome::Idle;
        };

        match self.upsert(&submission).await {
            Ok(action) => DrainOutcome::Persisted { submission, action },
            Err(error) => DrainOutcome::Failed { submission, error },
        }
    }

    /// Inserts or updates the record for the submission's id.
    ///
    /// The first record with a matching id wins. A matching record with the same address
    /// is left alone, even when the name differs.
    async fn upsert(&self, submission: &WalletSubmission) -> Result<UpsertAction, AppError> {
        let rows = self.store.list_wallets().await?;
        let now = Utc::now();

        match rows.into_iter().find(|row| row.record.id == submission.id) {
            Some(mut row) => {
                if !row.record.apply_submission(submission, now) {
                    return Ok(UpsertAction::Unchanged);
                }

                self.store.update_wallet(&row).await?;
                Ok(UpsertAction::Updated)
            }
            None => {
                let record = WalletRecord::from_submission(submission, now);
                self.store.append_wallet(&record).await?;
                Ok(UpsertAction::Inserted)
            }
        }
    }
}
