use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;

/// Errors raised by the persistence layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Invalid database URL")]
    InvalidDatabaseUrl,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    #[error("Migration error: {0}")]
    MigrationError(String),

    #[error(transparent)]
    Sqlx(sqlx::Error),
}

impl From<sqlx::Error> for DatabaseError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_foreign_key_violation() {
                return DatabaseError::ForeignKeyViolation(db_err.message().to_string());
            }
        }
        DatabaseError::Sqlx(err)
    }
}

/// Statements that create the schema when it does not exist yet.
/// `courses.instructor_id` has no ON DELETE action, so deleting an
/// instructor that still teaches a course is refused by the store.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS instructors (
        id   SERIAL PRIMARY KEY,
        name TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS courses (
        id            SERIAL PRIMARY KEY,
        name          TEXT NOT NULL,
        category      TEXT NOT NULL,
        instructor_id INTEGER NOT NULL REFERENCES instructors (id)
    )
    "#,
];

/// Owner of the PostgreSQL connection pool
#[derive(Clone)]
pub struct DatabaseManager {
    pool: PgPool,
}

impl DatabaseManager {
    /// Open a pool against `database_url` sized by the database config
    pub async fn connect(database_url: &str, config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let redacted = Self::redact_url(database_url)?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
            .connect(database_url)
            .await?;

        info!("Created database pool for: {}", redacted);
        Ok(Self { pool })
    }

    /// Resolve the connection string from the explicit argument or config
    pub fn resolve_url(explicit: Option<String>, config: &DatabaseConfig) -> Result<String, DatabaseError> {
        explicit
            .or_else(|| config.url.clone())
            .ok_or(DatabaseError::ConfigMissing("DATABASE_URL"))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create tables that are missing
    pub async fn migrate(&self) -> Result<(), DatabaseError> {
        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;
        }
        info!("Database schema is up to date");
        Ok(())
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close the pool (e.g., on shutdown)
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Closed database pool");
    }

    /// Connection string with the password masked, for logs
    fn redact_url(database_url: &str) -> Result<String, DatabaseError> {
        let mut url = url::Url::parse(database_url).map_err(|_| DatabaseError::InvalidDatabaseUrl)?;
        if url.password().is_some() {
            url.set_password(Some("***"))
                .map_err(|_| DatabaseError::InvalidDatabaseUrl)?;
        }
        Ok(url.into())
    }
}
