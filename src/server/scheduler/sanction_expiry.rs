use chrono::{DateTime, Utc};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    data::{sanction::SanctionRepository, store::JsonStore},
    error::AppError,
};

/// Starts the sanction expiry scheduler.
///
/// Runs every minute and lifts suspensions whose expiry has passed.
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler; dropping it does not stop the job
/// - `Err(AppError::SchedulerErr)` - Scheduler could not be created or started
pub async fn start_scheduler(store: JsonStore) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let store = store.clone();

        Box::pin(async move {
            if let Err(e) = expire_suspensions(&store, Utc::now()).await {
                tracing::error!("Error expiring suspensions: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Sanction expiry scheduler started");

    Ok(scheduler)
}

/// Lifts every suspension due at `now`.
///
/// # Returns
/// - `Ok(usize)` - Number of suspensions lifted
pub async fn expire_suspensions(store: &JsonStore, now: DateTime<Utc>) -> Result<usize, AppError> {
    let expired = SanctionRepository::new(store).expire_due(now).await?;

    for sanction in &expired {
        tracing::info!(
            "Suspension {} of user {} expired",
            sanction.id,
            sanction.user_id
        );
    }

    Ok(expired.len())
}
