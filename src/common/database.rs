use crate::settings::DatabaseSettings;
use sqlx::postgres::{PgConnectOptions, PgConnection, PgSslMode};
use sqlx::{ConnectOptions, Connection};
use thiserror::Error;
use tracing::{error, warn};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// No connection could be established. The provider has already logged why.
    #[error("database unavailable")]
    Unavailable,
    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),
}

/// Opens one PostgreSQL connection per operation. There is no pool.
#[derive(Clone)]
pub struct ConnectionProvider {
    settings: DatabaseSettings,
}

impl ConnectionProvider {
    pub fn new(settings: DatabaseSettings) -> Self {
        Self { settings }
    }

    pub fn connect_options(&self) -> sqlx::Result<PgConnectOptions> {
        let port: u16 = self
            .settings
            .port
            .parse()
            .map_err(|e| sqlx::Error::Configuration(format!("invalid port: {e}").into()))?;
        let ssl_mode: PgSslMode = self.settings.ssl_mode.parse()?;
        Ok(PgConnectOptions::new_without_pgpass()
            .host(&self.settings.host)
            .port(port)
            .database(&self.settings.name)
            .username(&self.settings.user)
            .password(&self.settings.password)
            .ssl_mode(ssl_mode))
    }

    pub async fn acquire(&self) -> StoreResult<PgConnection> {
        let result = match self.connect_options() {
            Ok(options) => options.connect().await,
            Err(e) => Err(e),
        };
        result.map_err(|e| {
            let db = &self.settings;
            error!(
                host = %db.host,
                port = %db.port,
                database = %db.name,
                user = %db.user,
                "Database connection error: {e}"
            );
            StoreError::Unavailable
        })
    }

    pub async fn release(&self, conn: PgConnection) {
        if let Err(e) = conn.close().await {
            warn!("Failed to close database connection: {e}");
        }
    }
}
