//! Storage-layer types for project identity and metadata.
//!
//! [`ProjectId`] is defined here because project identity is a storage
//! concern -- projects only gain an ID when their row is inserted.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a stored project.
///
/// The inner `i64` aligns with SQLite's `INTEGER PRIMARY KEY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub i64);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProjectId({})", self.0)
    }
}

/// A full project row.
///
/// `name` is the original user-supplied string; the filesystem-safe slug
/// only ever appears inside `directory_path`. `directory_path` is null
/// between row insert and directory backfill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project identifier.
    pub id: ProjectId,
    /// User-supplied display name (unsanitized).
    pub name: String,
    /// Creation timestamp assigned by the database (UTC, millisecond precision).
    pub created_at: String,
    /// Workspace directory path, set after provisioning.
    pub directory_path: Option<String>,
}

/// Summary of a stored project (for listing).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSummary {
    /// Project identifier.
    pub id: ProjectId,
    /// Project name.
    pub name: String,
    /// Creation timestamp.
    pub created_at: String,
}
