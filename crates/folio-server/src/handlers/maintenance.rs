//! Maintenance handlers.

use axum::extract::State;
use axum::Json;

use crate::error::ApiError;
use crate::schema::maintenance::ReconcileResponse;
use crate::state::AppState;

/// Removes workspace directories with no matching project row.
///
/// `POST /maintenance/reconcile`
pub async fn reconcile(
    State(state): State<AppState>,
) -> Result<Json<ReconcileResponse>, ApiError> {
    let service = state.service.lock().await;
    let removed = service.reconcile_workspaces()?;
    Ok(Json(ReconcileResponse { removed }))
}
