mod model;
mod server;

use chrono::Duration;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, router, scheduler::token_cleanup, startup,
    state::AppState, util::jwt::TokenService,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let tokens = TokenService::new(&config.jwt_secret, Duration::hours(config.jwt_expires_hours));

    startup::bootstrap_admin(&db, &tokens, &config).await?;

    // Start revoked token cleanup scheduler
    let scheduler_db = db.clone();
    let token_ttl = tokens.ttl();
    tokio::spawn(async move {
        if let Err(e) = token_cleanup::start_scheduler(scheduler_db, token_ttl).await {
            tracing::error!("Token cleanup scheduler error: {}", e);
        }
    });

    let app = router::router().with_state(AppState::new(db, tokens));

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
