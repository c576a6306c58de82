use std::{sync::Arc, time::Duration};

use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, service::giveaway::GiveawayRoleService};

/// Starts the giveaway role scheduler
///
/// Runs one sync immediately, then one per interval. A failed run is logged and the
/// next run starts from scratch.
///
/// # Arguments
/// - `service`: Giveaway role service
/// - `interval`: Time between runs
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler, keep it alive
/// - `Err(AppError::SchedulerErr)` - Job could not be created or started
pub async fn start_scheduler(
    service: GiveawayRoleService,
    interval: Duration,
) -> Result<JobScheduler, AppError> {
    let service = Arc::new(service);
    let scheduler = JobScheduler::new().await?;

    let job_service = service.clone();
    let job = Job::new_repeated_async(interval, move |_uuid, _lock| {
        let service = job_service.clone();

        Box::pin(async move {
            run_sync(&service).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Giveaway role scheduler started (every {:?})", interval);

    tokio::spawn(async move {
        run_sync(&service).await;
    });

    Ok(scheduler)
}

async fn run_sync(service: &GiveawayRoleService) {
    match service.sync().await {
        Ok(summary) => tracing::info!(
            "Giveaway sync finished: {} entries, {} granted, {} failed",
            summary.entries,
            summary.granted,
            summary.failed
        ),
        Err(e) => tracing::error!("Error syncing giveaway roles: {}", e),
    }
}
