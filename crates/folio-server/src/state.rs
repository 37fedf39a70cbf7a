//! Application state with shared `ProjectService` for concurrent access.
//!
//! [`AppState`] wraps the service in `Arc<tokio::sync::Mutex<>>` for use with
//! axum handlers. Uses `tokio::sync::Mutex` (async-aware) instead of
//! `std::sync::Mutex` so handlers await the lock without blocking the tokio
//! runtime. `ProjectService` contains `rusqlite::Connection`, which is
//! `!Sync`, so a `Mutex` rather than an `RwLock` is required.

use std::path::Path;
use std::sync::Arc;

use crate::error::ApiError;
use crate::service::ProjectService;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The shared project service (async Mutex -- non-blocking await).
    pub service: Arc<tokio::sync::Mutex<ProjectService>>,
}

impl AppState {
    /// Creates a new `AppState` with a `ProjectService` backed by the given
    /// SQLite database path and data directory.
    pub fn new(db_path: &str, data_dir: &Path) -> Result<Self, ApiError> {
        let service = ProjectService::new(db_path, data_dir)?;
        Ok(AppState {
            service: Arc::new(tokio::sync::Mutex::new(service)),
        })
    }

    /// Creates a new `AppState` with an in-memory database (for testing).
    pub fn in_memory(data_dir: &Path) -> Result<Self, ApiError> {
        let service = ProjectService::in_memory(data_dir)?;
        Ok(AppState {
            service: Arc::new(tokio::sync::Mutex::new(service)),
        })
    }
}
