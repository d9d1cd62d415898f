//! Server configuration from environment variables.

use std::env;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server port to listen on.
    pub port: u16,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Secret used to sign and validate JWTs.
    pub jwt_secret: String,
    /// Token lifetime in hours.
    pub jwt_expiry_hours: u64,
    /// Requests allowed per client per rate-limit window.
    pub rate_limit_max_requests: u32,
    /// Rate-limit window length in seconds.
    pub rate_limit_window_secs: u64,
    /// CORS allowed origins (comma-separated or "*" for all).
    pub cors_allowed_origins: String,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `JWT_SECRET`: token signing secret
    ///
    /// Optional:
    /// - `PORT`: server port (default: 8080)
    /// - `LOG_LEVEL`: logging level (default: "info")
    /// - `JWT_EXPIRY_HOURS`: token lifetime (default: 24)
    /// - `RATE_LIMIT_MAX_REQUESTS`: per-window budget (default: 100)
    /// - `RATE_LIMIT_WINDOW_SECS`: window length (default: 60)
    /// - `CORS_ALLOWED_ORIGINS`: allowed CORS origins (default: "*")
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?;

        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080);

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let jwt_expiry_hours = env::var("JWT_EXPIRY_HOURS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(24);

        let rate_limit_max_requests = env::var("RATE_LIMIT_MAX_REQUESTS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(100);

        let rate_limit_window_secs = env::var("RATE_LIMIT_WINDOW_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(60);

        let cors_allowed_origins =
            env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string());

        Ok(Self {
            port,
            log_level,
            jwt_secret,
            jwt_expiry_hours,
            rate_limit_max_requests,
            rate_limit_window_secs,
            cors_allowed_origins,
        })
    }

    /// Get the socket address for the server.
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required environment variable is missing.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        // This test requires JWT_SECRET to be set
        // SAFETY: This test is not run in parallel with other tests that read JWT_SECRET.
        unsafe { env::set_var("JWT_SECRET", "test-secret") };

        let config = ServerConfig::from_env().unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.jwt_expiry_hours, 24);
        assert_eq!(config.rate_limit_max_requests, 100);
        assert_eq!(config.rate_limit_window_secs, 60);
        assert_eq!(config.cors_allowed_origins, "*");

        // SAFETY: This test is not run in parallel with other tests that read JWT_SECRET.
        unsafe { env::remove_var("JWT_SECRET") };
    }

    #[test]
    fn test_socket_addr_uses_port() {
        let config = ServerConfig {
            port: 9090,
            log_level: "info".to_string(),
            jwt_secret: "s".to_string(),
            jwt_expiry_hours: 24,
            rate_limit_max_requests: 100,
            rate_limit_window_secs: 60,
            cors_allowed_origins: "*".to_string(),
        };
        assert_eq!(config.socket_addr().port(), 9090);
    }
}
