//! Application state shared across handlers.

use std::sync::Arc;
use std::time::Duration;

use notehub_store::NoteService;

use crate::config::ServerConfig;
use crate::middleware::rate_limit::RateLimiter;

/// Application state shared across all handlers.
///
/// This is cloneable and can be extracted in handlers using `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// The note subsystem.
    service: NoteService,
    /// Server configuration.
    config: Arc<ServerConfig>,
    /// Fixed-window request rate limiter.
    limiter: Arc<RateLimiter>,
}

impl AppState {
    /// Create new application state.
    pub fn new(service: NoteService, config: ServerConfig) -> Self {
        let limiter = RateLimiter::new(
            config.rate_limit_max_requests,
            Duration::from_secs(config.rate_limit_window_secs),
        );
        Self {
            service,
            config: Arc::new(config),
            limiter: Arc::new(limiter),
        }
    }

    /// Get a reference to the note service.
    pub fn service(&self) -> &NoteService {
        &self.service
    }

    /// Get a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get a reference to the rate limiter.
    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
