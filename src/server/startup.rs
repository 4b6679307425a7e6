use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::server::{
    config::Config,
    error::AppError,
    service::auth::{
        password::PasswordHasher,
        token::{JwtConfig, JwtManager},
    },
    state::AppState,
};

/// Installs the global tracing subscriber.
///
/// Log levels come from `RUST_LOG`, defaulting to `info` for the service and
/// `warn` for sqlx.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the shared application state from configuration and a connected database.
pub fn build_state(config: &Config, db: sea_orm::DatabaseConnection) -> Result<AppState, AppError> {
    let jwt = JwtManager::new(
        JwtConfig::new(config.jwt_secret.clone()).with_expiration(config.jwt_expiration_secs),
    )?;

    Ok(AppState::new(
        db,
        jwt,
        PasswordHasher::new(config.bcrypt_cost),
    ))
}
