//! Application state shared across all handlers.

use std::sync::Arc;
use std::time::Instant;

use geoproc_core::config::AppConfig;

/// Shared, read-only application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// When the state was built; used for uptime reporting.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            started_at: Instant::now(),
        }
    }

    /// Whole seconds since startup.
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
