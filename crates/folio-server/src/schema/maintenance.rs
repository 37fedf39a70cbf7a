//! Maintenance request/response types.

use serde::Serialize;

/// Response from a workspace reconciliation pass.
#[derive(Debug, Clone, Serialize)]
pub struct ReconcileResponse {
    /// Paths of orphaned workspace directories that were removed.
    pub removed: Vec<String>,
}
