use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{env, path::Path, time::Duration};
use thiserror::Error;
use tracing::{error, info};

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.missing_url")]
    MissingUrl,
    #[error("database.invalid_setting: {0}")]
    InvalidSetting(String),
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.migration_error")]
    MigrationError,
}

/// Configuration for the database connection
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(DEFAULT_ACQUIRE_TIMEOUT_SECS),
        }
    }

    /// Load the configuration from environment variables
    ///
    /// Environment variables:
    /// - DATABASE_URL: PostgreSQL connection string (required)
    /// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
    /// - DATABASE_ACQUIRE_TIMEOUT_SECS: seconds to wait for a connection (default: 30)
    pub fn from_env() -> Result<Self, DatabaseError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DatabaseError> {
        let connection_string = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(DatabaseError::MissingUrl)?;
        let mut config = Self::new(connection_string);

        if let Some(raw) = lookup("DATABASE_MAX_CONNECTIONS") {
            config.max_connections = raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    DatabaseError::InvalidSetting(format!("DATABASE_MAX_CONNECTIONS={raw}"))
                })?;
        }

        if let Some(raw) = lookup("DATABASE_ACQUIRE_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                DatabaseError::InvalidSetting(format!("DATABASE_ACQUIRE_TIMEOUT_SECS={raw}"))
            })?;
            config.acquire_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

/// Creates a PostgreSQL connection pool
pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(|e| {
            error!(error = %e, "failed to connect to database");
            DatabaseError::ConnectionError
        })?;

    info!(
        max_connections = config.max_connections,
        "database pool ready"
    );
    Ok(pool)
}

/// Runs database migrations from the specified directory
pub async fn run_migrations(pool: &PgPool, migrations_path: &str) -> Result<(), DatabaseError> {
    let path = Path::new(migrations_path);

    if !path.exists() {
        error!(migrations_path, "migrations directory not found");
        return Err(DatabaseError::MigrationError);
    }

    sqlx::migrate::Migrator::new(path)
        .await
        .map_err(|e| {
            error!(error = %e, "failed to load migrations");
            DatabaseError::MigrationError
        })?
        .run(pool)
        .await
        .map_err(|e| {
            error!(error = %e, "failed to apply migrations");
            DatabaseError::MigrationError
        })
}

/// Loads `.env`, connects and migrates.
pub async fn init_database(migrations_path: &str) -> Result<PgPool, DatabaseError> {
    dotenvy::dotenv().ok();
    let config = DatabaseConfig::from_env()?;
    let pool = create_postgres_pool(&config).await?;
    run_migrations(&pool, migrations_path).await?;
    Ok(pool)
}
