use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{data::api_key_usage::ApiKeyUsageRepository, error::AppError};

/// Usage rows older than the coarsest rate limit window can never affect
/// another decision; anything past this age is safe to delete.
const RETENTION_SECONDS: i64 = 900;

/// Starts the usage log retention scheduler.
///
/// Runs every 5 minutes and deletes `api_key_usage` rows older than the
/// coarsest rate limit window. The limiter only ever counts within its
/// windows, so pruning is invisible to rate limit decisions.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(())` - Scheduler started
/// - `Err(AppError)` - Failed to create or start the scheduler
pub async fn start_scheduler(db: DatabaseConnection) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();

    // Run every 5 minutes
    let job = Job::new_async("0 */5 * * * *", move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            if let Err(e) = prune_usage_log(&db).await {
                tracing::error!("Error pruning API key usage log: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Usage retention scheduler started");

    Ok(())
}

/// Deletes usage rows older than the retention cutoff.
async fn prune_usage_log(db: &DatabaseConnection) -> Result<(), AppError> {
    let cutoff = Utc::now() - chrono::Duration::seconds(RETENTION_SECONDS);

    let repo = ApiKeyUsageRepository::new(db);
    let deleted = repo.prune_older_than(cutoff).await?;

    if deleted > 0 {
        tracing::info!("Pruned {} API key usage rows", deleted);
    }

    Ok(())
}
