//! Persistence for song records.
//!
//! Exposes pool construction, migrations, the `songs` model and repository,
//! and the [`store::SongStore`] seam the API layer is built against.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod store;

pub type DbPool = sqlx::PgPool;

/// Connection pool settings loaded from environment variables.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Upper bound on open connections (default: `10`).
    pub max_connections: u32,
    /// Connections kept open while idle (default: `0`).
    pub min_connections: u32,
    /// Idle connections above the minimum are closed after this long (default: 600s).
    pub idle_timeout: Option<Duration>,
    /// Connections are recycled after this long; `None` keeps them forever (default).
    pub max_lifetime: Option<Duration>,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            min_connections: 0,
            idle_timeout: Some(Duration::from_secs(600)),
            max_lifetime: None,
        }
    }
}

impl PoolConfig {
    /// Load pool settings from the environment.
    ///
    /// | Env Var                | Default |
    /// |------------------------|---------|
    /// | `DB_MAX_CONNECTIONS`   | `10`    |
    /// | `DB_MIN_CONNECTIONS`   | `0`     |
    /// | `DB_IDLE_TIMEOUT_SECS` | `600`   |
    /// | `DB_MAX_LIFETIME_SECS` | `0` (unbounded) |
    ///
    /// A zero timeout or lifetime disables that bound.
    pub fn from_env() -> Self {
        let max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let min_connections: u32 = std::env::var("DB_MIN_CONNECTIONS")
            .unwrap_or_else(|_| "0".into())
            .parse()
            .expect("DB_MIN_CONNECTIONS must be a valid u32");

        let idle_timeout_secs: u64 = std::env::var("DB_IDLE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "600".into())
            .parse()
            .expect("DB_IDLE_TIMEOUT_SECS must be a valid u64");

        let max_lifetime_secs: u64 = std::env::var("DB_MAX_LIFETIME_SECS")
            .unwrap_or_else(|_| "0".into())
            .parse()
            .expect("DB_MAX_LIFETIME_SECS must be a valid u64");

        Self {
            max_connections,
            min_connections,
            idle_timeout: non_zero_secs(idle_timeout_secs),
            max_lifetime: non_zero_secs(max_lifetime_secs),
        }
    }
}

fn non_zero_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, config: &PoolConfig) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .idle_timeout(config.idle_timeout)
        .max_lifetime(config.max_lifetime)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
