//! Storage layer for folio projects.
//!
//! Provides the [`SqliteStore`] backend that persists project rows and their
//! dependent tables (tasks, notes, citations), with schema migrations
//! applied on open.
//!
//! # Modules
//!
//! - [`error`]: StorageError enum with all failure modes
//! - [`types`]: ProjectId, Project, ProjectSummary storage-layer types
//! - [`schema`]: database open helpers and migration setup
//! - [`sqlite`]: SqliteStore implementation

pub mod error;
pub mod schema;
pub mod sqlite;
pub mod types;

// Re-export key types for ergonomic use.
pub use error::StorageError;
pub use sqlite::SqliteStore;
pub use types::{Project, ProjectId, ProjectSummary};
