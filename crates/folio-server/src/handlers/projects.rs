//! Project management handlers (list, create, delete).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use folio_storage::ProjectId;

use crate::error::ApiError;
use crate::schema::projects::{
    CreateProjectRequest, DeleteProjectResponse, ProjectSummaryView, ProjectView,
};
use crate::state::AppState;

/// Lists all projects, newest first.
///
/// `GET /projects`
pub async fn list_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProjectSummaryView>>, ApiError> {
    let service = state.service.lock().await;
    let projects = service.list_projects()?;
    Ok(Json(
        projects.into_iter().map(ProjectSummaryView::from).collect(),
    ))
}

/// Creates a new project and its workspace directory.
///
/// `POST /projects`
pub async fn create_project(
    State(state): State<AppState>,
    Json(req): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<ProjectView>), ApiError> {
    let mut service = state.service.lock().await;
    let project = service.create_project(req.name.as_deref())?;
    Ok((StatusCode::CREATED, Json(project.into())))
}

/// Deletes a project, its dependent rows, and its workspace directory.
///
/// `DELETE /projects/{id}`
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteProjectResponse>, ApiError> {
    let mut service = state.service.lock().await;
    service.delete_project(ProjectId(id))?;
    Ok(Json(DeleteProjectResponse {
        message: "project deleted".to_string(),
    }))
}
