//! Connection pool and schema bootstrap.

use diesel::sqlite::SqliteConnection;
use diesel::ConnectionError;
use diesel_async::pooled_connection::deadpool::{Object, Pool};
use diesel_async::pooled_connection::{AsyncDieselConnectionManager, ManagerConfig};
use diesel_async::sync_connection_wrapper::SyncConnectionWrapper;
use diesel_async::{AsyncConnection, SimpleAsyncConnection};
use futures::future::{BoxFuture, FutureExt};

use crate::config::CatalogConfig;

/// Async wrapper around a blocking SQLite connection.
pub type DbConnection = SyncConnectionWrapper<SqliteConnection>;

pub type DbPool = Pool<DbConnection>;

pub type PooledConnection = Object<DbConnection>;

/// Catalog tables. Safe to run on every start.
///
/// The movie foreign keys are declared but not enforced: every pooled
/// connection runs with `PRAGMA foreign_keys = OFF`, so deleting a director
/// or genre leaves referencing movies untouched.
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS director (
    id      INTEGER PRIMARY KEY,
    name    VARCHAR(255)
);

CREATE TABLE IF NOT EXISTS genre (
    id      INTEGER PRIMARY KEY,
    name    VARCHAR(255)
);

CREATE TABLE IF NOT EXISTS movie (
    id          INTEGER PRIMARY KEY,
    title       VARCHAR(255),
    description VARCHAR(255),
    trailer     VARCHAR(255),
    year        INTEGER,
    rating      FLOAT,
    genre_id    INTEGER REFERENCES genre(id),
    director_id INTEGER REFERENCES director(id)
);

CREATE INDEX IF NOT EXISTS idx_movie_genre ON movie (genre_id);
CREATE INDEX IF NOT EXISTS idx_movie_director ON movie (director_id);
"#;

/// Build the connection pool. Connections are opened lazily.
pub fn create_pool(database_url: &str, config: &CatalogConfig) -> anyhow::Result<DbPool> {
    let busy_timeout_ms = config.busy_timeout_ms;
    let mut manager_config = ManagerConfig::default();
    manager_config.custom_setup = Box::new(move |url| establish(url, busy_timeout_ms));

    let manager =
        AsyncDieselConnectionManager::<DbConnection>::new_with_config(database_url, manager_config);

    Pool::builder(manager)
        .max_size(config.pool_max_size)
        .build()
        .map_err(|e| anyhow::anyhow!("failed to build connection pool: {e}"))
}

fn establish(url: &str, busy_timeout_ms: u64) -> BoxFuture<'_, Result<DbConnection, ConnectionError>> {
    async move {
        let mut conn = DbConnection::establish(url).await?;
        conn.batch_execute(&format!(
            "PRAGMA busy_timeout = {busy_timeout_ms}; \
             PRAGMA journal_mode = WAL; \
             PRAGMA foreign_keys = OFF;"
        ))
        .await
        .map_err(ConnectionError::CouldntSetupConfiguration)?;
        Ok(conn)
    }
    .boxed()
}

/// Create the catalog tables if they are missing.
pub async fn ensure_schema(conn: &mut DbConnection) -> anyhow::Result<()> {
    conn.batch_execute(SCHEMA_SQL)
        .await
        .map_err(|e| anyhow::anyhow!("schema bootstrap failed: {e}"))?;
    Ok(())
}
