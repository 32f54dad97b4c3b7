use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{data::token_blocklist::TokenBlocklistRepository, error::AppError};

/// Starts the revoked token cleanup scheduler
///
/// Runs at the top of every hour and deletes blocklist entries older than the token
/// lifetime. Tokens revoked before then have expired and fail signature validation
/// anyway.
///
/// # Arguments
/// - `db`: Database connection
/// - `token_ttl`: Lifetime of issued tokens
pub async fn start_scheduler(db: DatabaseConnection, token_ttl: Duration) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 0 * * * *", move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = purge_expired(&db, token_ttl).await {
                tracing::error!("Error purging revoked tokens: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Token cleanup scheduler started");

    Ok(())
}

/// Deletes blocklist entries recorded more than `token_ttl` ago
///
/// # Returns
/// - `Ok(u64)` - Number of entries removed
/// - `Err(AppError::DbErr)` - Database error
pub async fn purge_expired(db: &DatabaseConnection, token_ttl: Duration) -> Result<u64, AppError> {
    let cutoff = Utc::now() - token_ttl;
    let purged = TokenBlocklistRepository::new(db)
        .purge_older_than(cutoff)
        .await?;

    if purged > 0 {
        tracing::info!("Purged {} expired revoked tokens", purged);
    }

    Ok(purged)
}
