use std::time::Duration;

use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    error::AppError,
    service::drain::{DrainOutcome, WalletDrainService},
};

/// Starts the wallet queue scheduler
///
/// Ticks the drain service once per interval. Every tick processes at most one
/// submission and ticks never overlap, so a slow store simply stretches the backlog.
///
/// # Arguments
/// - `drain`: Drain service owning the submission queue
/// - `interval`: Time between ticks
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler, keep it alive
/// - `Err(AppError::SchedulerErr)` - Job could not be created or started
pub async fn start_scheduler(
    drain: WalletDrainService,
    interval: Duration,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_repeated_async(interval, move |_uuid, _lock| {
        let drain = drain.clone();

        Box::pin(async move {
            log_outcome(drain.tick().await);
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Wallet queue scheduler started (every {:?})", interval);

    Ok(scheduler)
}

/// Logs what a drain tick did
fn log_outcome(outcome: DrainOutcome) {
    match outcome {
        DrainOutcome::Idle => {}
        DrainOutcome::Busy => {
            tracing::debug!("Previous wallet queue tick still running, skipping");
        }
        DrainOutcome::Persisted { submission, action } => {
            tracing::info!(
                "Wallet of {} ({}) {:?}",
                submission.name,
                submission.id,
                action
            );
        }
        DrainOutcome::Failed { submission, error } => {
            tracing::error!(
                "Failed to save wallet of {} ({}): {}",
                submission.name,
                submission.id,
                error
            );
        }
    }
}
