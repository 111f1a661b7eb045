//! Database connection management

use std::time::Duration;

use sqlx::{
    PgPool, Postgres, Transaction,
    postgres::PgPoolOptions,
    query, query_scalar,
};
use tracing::warn;

/// Isolation level pinned on every service transaction.
///
/// Each operation runs in its own transaction, so a read started after a
/// concurrent create sees it only once that create has committed.
pub const SET_ISOLATION_LEVEL_SQL: &str = "SET TRANSACTION ISOLATION LEVEL READ COMMITTED";

const HEALTH_CHECK_SQL: &str = "SELECT 1";

const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection settings for the shared pool.
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    /// `PostgreSQL` connection string.
    pub url: String,

    /// Upper bound on pooled connections.
    pub max_connections: u32,

    /// How long a caller waits for a free connection before failing.
    pub acquire_timeout: Duration,
}

impl DatabaseSettings {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }
}

/// Process-wide store handle. Cloning shares the underlying pool.
#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Begin a `READ COMMITTED` transaction.
    ///
    /// # Errors
    ///
    /// Returns an error when the store is unreachable or the transaction cannot be started.
    pub async fn begin_transaction(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        query(SET_ISOLATION_LEVEL_SQL).execute(&mut *tx).await?;

        Ok(tx)
    }

    /// Probe the store. Transport failures are logged and reported as `false`.
    pub async fn health_check(&self) -> bool {
        match query_scalar::<Postgres, i32>(HEALTH_CHECK_SQL)
            .fetch_one(&self.pool)
            .await
        {
            Ok(_) => true,
            Err(error) => {
                warn!("database health check failed: {error}");

                false
            }
        }
    }
}

/// Build the shared pool without dialing the store.
///
/// Connections are opened on first use, so an unreachable store surfaces at
/// query time (or through [`Db::health_check`]) rather than here.
///
/// # Errors
///
/// Returns an error if the connection string cannot be parsed.
pub fn connect(settings: &DatabaseSettings) -> Result<Db, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect_lazy(&settings.url)?;

    Ok(Db::new(pool))
}
