//! Project management request/response types.

use folio_storage::{Project, ProjectId, ProjectSummary};
use serde::{Deserialize, Serialize};

/// Request to create a new project.
///
/// `name` is optional at the deserialization level so a missing field
/// surfaces as the same "name required" validation error as an empty one.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectRequest {
    /// The display name for the new project.
    #[serde(default)]
    pub name: Option<String>,
}

/// Full project row returned from creation.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectView {
    /// Project identifier.
    pub id: ProjectId,
    /// Display name (the original user-supplied string, not the slug).
    pub name: String,
    /// Creation timestamp.
    pub created_at: String,
    /// Workspace directory path.
    pub directory_path: Option<String>,
}

impl From<Project> for ProjectView {
    fn from(project: Project) -> Self {
        ProjectView {
            id: project.id,
            name: project.name,
            created_at: project.created_at,
            directory_path: project.directory_path,
        }
    }
}

/// Summary view of a project for listing.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectSummaryView {
    /// Project identifier.
    pub id: ProjectId,
    /// Project name.
    pub name: String,
    /// Creation timestamp.
    pub created_at: String,
}

impl From<ProjectSummary> for ProjectSummaryView {
    fn from(summary: ProjectSummary) -> Self {
        ProjectSummaryView {
            id: summary.id,
            name: summary.name,
            created_at: summary.created_at,
        }
    }
}

/// Response from deleting a project.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteProjectResponse {
    /// Confirmation message.
    pub message: String,
}
