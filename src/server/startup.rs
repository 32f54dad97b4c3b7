use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config, error::AppError, service::auth::AuthService, util::jwt::TokenService,
};

/// Connects to the database and runs pending migrations.
///
/// Accepts any connection string SeaORM understands (`postgres://` in production,
/// `sqlite:` for local runs). Every pending migration is applied before the connection
/// is handed back, so the schema is current before the router starts serving.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates or promotes the first admin veterinarian when `ADMIN_EMAIL` and
/// `ADMIN_PASSWORD` are configured and no admin exists yet.
pub async fn bootstrap_admin(
    db: &DatabaseConnection,
    tokens: &TokenService,
    config: &Config,
) -> Result<(), AppError> {
    let Some(admin) = config.admin.as_ref() else {
        tracing::debug!("No admin credentials configured, skipping admin bootstrap");
        return Ok(());
    };

    match AuthService::new(db, tokens).bootstrap_admin(admin).await? {
        Some(veterinarian) => tracing::info!(
            "Admin veterinarian {} ({}) is ready",
            veterinarian.full_name(),
            veterinarian.email
        ),
        None => tracing::info!("Admin veterinarian already present"),
    }

    Ok(())
}
