use crate::config::DatabaseConfig;
use crate::error::Result;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Instant;

/// A database connection held for one unit of work
///
/// Call [`release`](Self::release) when done. If the scope is left early (an
/// error returned with `?`, a panic, a cancelled future) the connection is
/// dropped instead, which also returns it to the driver.
pub struct ScopedConnection {
    conn: DatabaseConnection,
    opened_at: Instant,
}

impl ScopedConnection {
    pub async fn open(config: &DatabaseConfig) -> Result<Self> {
        let mut options = ConnectOptions::new(config.url().to_owned());
        options
            .max_connections(1)
            .min_connections(0)
            .connect_timeout(config.connect_timeout())
            .sqlx_logging(false);

        tracing::debug!(database = %config.redacted_url(), "Opening connection");
        let conn = Database::connect(options).await.inspect_err(|e| {
            tracing::error!(database = %config.redacted_url(), error = %e, "Connection failed");
        })?;

        Ok(Self {
            conn,
            opened_at: Instant::now(),
        })
    }

    pub fn conn(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Close the connection and report any error from the driver.
    pub async fn release(self) -> Result<()> {
        let Self { conn, opened_at } = self;
        conn.close().await?;
        tracing::debug!(held_ms = opened_at.elapsed().as_millis(), "Connection closed");
        Ok(())
    }
}
