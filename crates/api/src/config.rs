//! Server configuration loaded from environment variables.

use crate::auth::jwt::JwtConfig;

/// Default HTTP listen host.
const DEFAULT_HOST: &str = "127.0.0.1";
/// Default HTTP listen port.
const DEFAULT_PORT: u16 = 8080;
/// Default request timeout in seconds.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins (comma-separated in `CORS_ORIGINS`).
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                | Required | Default                   |
    /// |------------------------|----------|---------------------------|
    /// | `HOST`                 | no       | `127.0.0.1`               |
    /// | `PORT`                 | no       | `8080`                    |
    /// | `CORS_ORIGINS`         | no       | `http://localhost:5173`   |
    /// | `REQUEST_TIMEOUT_SECS` | no       | `30`                      |
    /// | `JWT_SECRET`           | **yes**  | --                        |
    ///
    /// # Panics
    ///
    /// Panics on malformed values or a missing `JWT_SECRET`; startup
    /// misconfiguration must fail fast.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_string())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_REQUEST_TIMEOUT_SECS.to_string())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt: JwtConfig::from_env(),
        }
    }
}
