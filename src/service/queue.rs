//! In-memory FIFO of pending wallet submissions.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, PoisonError},
};

use crate::model::wallet::WalletSubmission;

/// Shared handle to the submission queue.
///
/// Cloning the handle shares the underlying queue. The Discord handler holds a clone to
/// push submissions while the drain service pops them. Submissions are never
/// deduplicated and are lost when the process exits.
#[derive(Clone, Default)]
pub struct SubmissionQueue {
    inner: Arc<Mutex<VecDeque<WalletSubmission>>>,
}

impl SubmissionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a submission at the tail.
    pub fn enqueue(&self, submission: WalletSubmission) {
        self.lock().push_back(submission);
    }

    /// Removes the submission at the head.
    ///
    /// # Returns
    /// - `Some(WalletSubmission)` - Oldest pending submission
    /// - `None` - Queue is empty
    pub fn dequeue(&self) -> Option<WalletSubmission> {
        self.lock().pop_front()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Poisoning is ignored, push and pop leave the deque consistent even on panic.
    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<WalletSubmission>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
