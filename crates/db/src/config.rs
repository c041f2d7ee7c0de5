use std::fmt;
use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Driver names [`crate::storage::SqlMovieStorage`] knows how to speak.
const SUPPORTED_DRIVERS: &[&str] = &["postgres", "postgresql"];

/// Database connection settings loaded from environment variables.
///
/// Every field has a default suitable for a local Postgres container.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub dbname: String,
    /// Driver identifier; only Postgres is supported.
    pub driver: String,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".into(),
            port: 5432,
            user: "postgres".into(),
            password: "mysecretpassword".into(),
            dbname: "postgres".into(),
            driver: "postgres".into(),
            max_connections: 20,
        }
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("dbname", &self.dbname)
            .field("driver", &self.driver)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl DatabaseConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                      | Default            |
    /// |------------------------------|--------------------|
    /// | `MOVIE_API__HOST`            | `localhost`        |
    /// | `MOVIE_API__PORT`            | `5432`             |
    /// | `MOVIE_API__USER`            | `postgres`         |
    /// | `MOVIE_API__PASSWORD`        | `mysecretpassword` |
    /// | `MOVIE_API__DBNAME`          | `postgres`         |
    /// | `MOVIE_API__DRIVER`          | `postgres`         |
    /// | `MOVIE_API__MAX_CONNECTIONS` | `20`               |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults for
    /// unset or empty variables.
    ///
    /// A numeric value that does not parse is logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let defaults = Self::default();

        Self {
            host: var("MOVIE_API__HOST").unwrap_or(defaults.host),
            port: parse_or_default("MOVIE_API__PORT", var("MOVIE_API__PORT"), defaults.port),
            user: var("MOVIE_API__USER").unwrap_or(defaults.user),
            password: var("MOVIE_API__PASSWORD").unwrap_or(defaults.password),
            dbname: var("MOVIE_API__DBNAME").unwrap_or(defaults.dbname),
            driver: var("MOVIE_API__DRIVER").unwrap_or(defaults.driver),
            max_connections: parse_or_default(
                "MOVIE_API__MAX_CONNECTIONS",
                var("MOVIE_API__MAX_CONNECTIONS"),
                defaults.max_connections,
            ),
        }
    }

    pub fn is_supported_driver(&self) -> bool {
        SUPPORTED_DRIVERS.contains(&self.driver.to_ascii_lowercase().as_str())
    }

    /// Postgres connect options for this config. TLS is disabled.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.dbname)
            .ssl_mode(PgSslMode::Disable)
    }
}

/// Parse `raw` as `T`, keeping `default` when it is absent or invalid.
pub fn parse_or_default<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + fmt::Display,
{
    let Some(raw) = raw else {
        return default;
    };
    match raw.parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(
                key,
                value = %raw,
                %default,
                "Invalid value in environment, using default",
            );
            default
        }
    }
}
