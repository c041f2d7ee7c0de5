use movie_db::config::parse_or_default;
use tokio::net::TcpListener;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Apply embedded migrations at startup (default: `true`).
    pub run_migrations: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8000,
            request_timeout_secs: 30,
            run_migrations: true,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                           | Default   |
    /// |-----------------------------------|-----------|
    /// | `MOVIE_API__LISTEN_HOST`          | `0.0.0.0` |
    /// | `MOVIE_API__LISTEN_PORT`          | `8000`    |
    /// | `MOVIE_API__REQUEST_TIMEOUT_SECS` | `30`      |
    /// | `MOVIE_API__RUN_MIGRATIONS`       | `true`    |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] but reads through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let defaults = Self::default();

        Self {
            host: var("MOVIE_API__LISTEN_HOST").unwrap_or(defaults.host),
            port: parse_or_default(
                "MOVIE_API__LISTEN_PORT",
                var("MOVIE_API__LISTEN_PORT"),
                defaults.port,
            ),
            request_timeout_secs: parse_or_default(
                "MOVIE_API__REQUEST_TIMEOUT_SECS",
                var("MOVIE_API__REQUEST_TIMEOUT_SECS"),
                defaults.request_timeout_secs,
            ),
            run_migrations: parse_or_default(
                "MOVIE_API__RUN_MIGRATIONS",
                var("MOVIE_API__RUN_MIGRATIONS"),
                defaults.run_migrations,
            ),
        }
    }

    /// Bind the listening socket. `host` may be an IP address or a hostname
    /// such as `localhost`; hostnames are resolved here.
    pub async fn bind(&self) -> std::io::Result<TcpListener> {
        TcpListener::bind((self.host.as_str(), self.port)).await
    }
}
