use dioxus_logger::tracing::Level;

use crate::{config::Config, error::AppError};

/// Installs the global tracing subscriber at INFO level.
///
/// # Returns
/// - `Ok(())` - Logger installed
/// - `Err(AppError::LoggerErr)` - A global subscriber was already set
pub fn init_logging() -> Result<(), AppError> {
    dioxus_logger::init(Level::INFO)?;

    Ok(())
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then runs
/// all pending SeaORM migrations so the player and duel log tables exist before the bot
/// handles its first event.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
