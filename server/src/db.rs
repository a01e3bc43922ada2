//! Postgres connection pool bootstrap.
//!
//! The pool is built lazily: no connection is opened until something asks for
//! one, so a service starts even while the database is still coming up. A bad
//! connection string is still rejected at startup.
//!
//! Callers own the pool for the life of the process and must hand it back to
//! [`close`] exactly once, on every exit path after [`connect`] succeeded.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use crate::config::DatabaseConfig;

/// Build the pool from `config.url`.
pub fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect_lazy(&config.url)?;
    info!(
        max_connections = config.max_connections,
        "Database pool ready"
    );
    Ok(pool)
}

/// Close every connection and wait for checked-out ones to return.
pub async fn close(pool: PgPool) {
    pool.close().await;
    info!("Database pool closed");
}
