use crate::common::env::{EnvSource, FromEnv, ProcessEnv};
use std::net::{IpAddr, Ipv4Addr};
use tracing::Level;

pub const DEFAULT_SECRET_KEY: &str = "dev-secret-key";

#[derive(Clone, Debug)]
pub struct DatabaseSettings {
    pub host: String,
    /// Kept raw; an unparsable port surfaces as an unavailable connection.
    pub port: String,
    pub name: String,
    pub user: String,
    pub password: String,
    pub ssl_mode: String,
}

#[derive(Clone, Debug)]
pub struct AppSettings {
    pub level: Level,
    pub debug: bool,
    pub secret_key: String,
    pub service_name: String,
    pub app_host: IpAddr,
    pub app_port: u16,

    pub database: DatabaseSettings,
}

impl AppSettings {
    pub fn load_from_env() -> anyhow::Result<Self> {
        let _ = dotenv::dotenv();
        Self::load_from(&ProcessEnv)
    }

    pub fn load_from<E: EnvSource + ?Sized>(source: &E) -> anyhow::Result<Self> {
        let debug = source
            .var("DEBUG")
            .map(|value| value.eq_ignore_ascii_case("true"))
            .unwrap_or(true);
        let default_level = if debug { Level::DEBUG } else { Level::INFO };
        let level = Level::from_env_or(source, "LOG_LEVEL", default_level)?;
        let secret_key = String::from_env_or(source, "SECRET_KEY", DEFAULT_SECRET_KEY.into())?;
        let service_name = String::from_env_or(source, "SERVICE_NAME", "message-board".into())?;
        let app_host = IpAddr::from_env_or(source, "APP_HOST", Ipv4Addr::UNSPECIFIED.into())?;
        let app_port = u16::from_env_or(source, "APP_PORT", 5000)?;

        let database = DatabaseSettings {
            host: String::from_env_or(source, "DB_HOST", "localhost".into())?,
            port: String::from_env_or(source, "DB_PORT", "5432".into())?,
            name: String::from_env_or(source, "DB_NAME", "messages_db".into())?,
            user: String::from_env_or(source, "DB_USER", "postgres".into())?,
            password: String::from_env_or(source, "DB_PASSWORD", "postgres".into())?,
            ssl_mode: String::from_env_or(source, "DB_SSL_MODE", "disable".into())?,
        };

        Ok(AppSettings {
            level,
            debug,
            secret_key,
            service_name,
            app_host,
            app_port,

            database,
        })
    }

    pub fn uses_default_secret_key(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }
}
