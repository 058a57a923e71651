pub mod reports;

use std::str::FromStr;

use cysafe_common::error::{CysafeError, CysafeResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Open the SQLite report database from a database URL, creating the
/// file when absent.
pub async fn create_pool(database_url: &str) -> CysafeResult<SqlitePool> {
    tracing::info!("opening report database");
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| CysafeError::Database(e.to_string()))?
        .create_if_missing(true);

    SqlitePoolOptions::new()
        // single connection: the embedded store is single-writer and the
        // report log is append-only
        .max_connections(1)
        .connect_with(options)
        .await
        .map_err(|e| CysafeError::Database(e.to_string()))
}

/// Bootstrap the schema. Intentionally `if not exists` only; there is no
/// migration story beyond that.
pub async fn init_schema(pool: &SqlitePool) -> CysafeResult<()> {
    sqlx::query(
        "create table if not exists scam_reports (
            id integer primary key autoincrement,
            scam_url text not null,
            scam_type text not null,
            how_received text,
            details text not null,
            contact_email text,
            date_submitted text not null
        )",
    )
    .execute(pool)
    .await
    .map_err(|e| CysafeError::Database(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_pool_fails_with_invalid_url() {
        let result = create_pool("postgres://wrong-driver/db").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn init_schema_is_idempotent() {
        let pool = create_pool("sqlite::memory:").await.expect("pool");
        init_schema(&pool).await.expect("first bootstrap");
        init_schema(&pool).await.expect("second bootstrap");
    }
}
