//! Background catalog refresh.
//!
//! When `SHEETSHOP_REFRESH_CRON` is set, a job re-runs the load cycle on that
//! schedule and swaps the new snapshot in. Without it the catalog is loaded
//! once at startup.

use std::sync::Arc;

use sheetshop_catalog::SheetClient;
use sheetshop_core::AppConfig;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

use crate::store::CatalogStore;

/// Builds and starts the background job scheduler.
///
/// Returns the running [`JobScheduler`] handle, which must be kept alive for
/// the lifetime of the process. Dropping it shuts down all scheduled jobs.
///
/// # Errors
///
/// Returns [`JobSchedulerError`] if the scheduler cannot be initialised, the
/// cron expression is invalid, or the scheduler fails to start.
pub async fn build_scheduler(
    store: CatalogStore,
    client: Arc<SheetClient>,
    config: Arc<AppConfig>,
) -> Result<JobScheduler, JobSchedulerError> {
    let scheduler = JobScheduler::new().await?;

    match config.refresh_cron.as_deref() {
        Some(cron) => register_refresh_job(&scheduler, cron, store, client, Arc::clone(&config)).await?,
        None => tracing::info!("scheduler: no refresh cron configured; catalog loads once"),
    }

    scheduler.start().await?;
    Ok(scheduler)
}

async fn register_refresh_job(
    scheduler: &JobScheduler,
    cron: &str,
    store: CatalogStore,
    client: Arc<SheetClient>,
    config: Arc<AppConfig>,
) -> Result<(), JobSchedulerError> {
    let job = Job::new_async(cron, move |_uuid, _lock| {
        let store = store.clone();
        let client = Arc::clone(&client);
        let config = Arc::clone(&config);

        Box::pin(async move {
            tracing::info!("scheduler: starting catalog refresh");
            match store.refresh(&client, &config.sheet_csv_url).await {
                Ok(()) => tracing::info!("scheduler: catalog refresh complete"),
                Err(e) => {
                    tracing::error!(error = %e, "scheduler: catalog refresh failed; keeping previous snapshot");
                }
            }
        })
    })?;

    scheduler.add(job).await?;
    tracing::info!(cron, "scheduler: registered catalog refresh job");
    Ok(())
}
