//! ProjectService: the single coordinator between HTTP handlers and the
//! storage/filesystem layers.
//!
//! All business logic flows through [`ProjectService`]. Handlers are thin
//! wrappers that delegate to these methods.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use folio_storage::{Project, ProjectId, ProjectSummary, SqliteStore};

use crate::error::ApiError;
use crate::workspace;

/// Coordinates project rows in the store with workspace directories on disk.
///
/// The database is the source of truth; the filesystem is a best-effort
/// mirror. Directory removal after a committed delete never fails the
/// request, and [`ProjectService::reconcile_workspaces`] sweeps up anything
/// left behind.
pub struct ProjectService {
    /// SQLite storage backend.
    store: SqliteStore,
    /// Root under which every project workspace directory lives.
    projects_root: PathBuf,
}

impl ProjectService {
    /// Creates a new service, opening a SQLite database at `db_path` and
    /// ensuring the projects root under `data_dir` exists.
    pub fn new(db_path: &str, data_dir: &Path) -> Result<Self, ApiError> {
        let store = SqliteStore::new(db_path)?;
        Self::with_store(store, data_dir)
    }

    /// Creates a new service backed by an in-memory database (for testing).
    pub fn in_memory(data_dir: &Path) -> Result<Self, ApiError> {
        let store = SqliteStore::in_memory()?;
        Self::with_store(store, data_dir)
    }

    fn with_store(store: SqliteStore, data_dir: &Path) -> Result<Self, ApiError> {
        let projects_root = data_dir.join("projects");
        std::fs::create_dir_all(&projects_root).map_err(|e| {
            ApiError::Internal(format!(
                "failed to create projects root {}: {e}",
                projects_root.display()
            ))
        })?;
        Ok(ProjectService {
            store,
            projects_root,
        })
    }

    /// Lists all projects, newest first.
    pub fn list_projects(&self) -> Result<Vec<ProjectSummary>, ApiError> {
        Ok(self.store.list_projects()?)
    }

    /// Creates a project: workspace directory first, then the row.
    ///
    /// The row keeps the original user-supplied name exactly as given
    /// (whitespace included); trimming happens only for the emptiness
    /// check, and only the directory name is slugified. If any database
    /// step fails after the directory exists, the directory is removed
    /// again before the error propagates, so no orphaned directory
    /// survives a failed creation.
    pub fn create_project(&mut self, name: Option<&str>) -> Result<Project, ApiError> {
        let name = name.unwrap_or("");
        if name.trim().is_empty() {
            return Err(ApiError::BadRequest("name required".to_string()));
        }

        let dir = workspace::provision(&self.projects_root, name).map_err(|e| {
            ApiError::Internal(format!("failed to provision workspace directory: {e}"))
        })?;

        match self.persist_project(name, &dir) {
            Ok(project) => Ok(project),
            Err(err) => {
                if let Err(cleanup) = std::fs::remove_dir_all(&dir) {
                    tracing::warn!(
                        "failed to roll back workspace directory {}: {cleanup}",
                        dir.display()
                    );
                }
                Err(err)
            }
        }
    }

    fn persist_project(&mut self, name: &str, dir: &Path) -> Result<Project, ApiError> {
        let id = self.store.insert_project(name)?;
        self.store
            .set_directory_path(id, &dir.to_string_lossy())?;
        Ok(self.store.get_project(id)?)
    }

    /// Deletes a project: its dependent rows and the project row go in one
    /// transaction, then the workspace directory is removed best-effort.
    ///
    /// The committed transaction decides the outcome; a directory removal
    /// failure is logged as a warning and does not change the response.
    pub fn delete_project(&mut self, id: ProjectId) -> Result<(), ApiError> {
        let project = self.store.get_project(id)?;
        self.store.delete_project(id)?;

        if let Some(path) = project.directory_path {
            if let Err(err) = std::fs::remove_dir_all(&path) {
                tracing::warn!("failed to remove project directory {path}: {err}");
            }
        }
        Ok(())
    }

    /// Removes workspace directories that no project row references.
    ///
    /// This is the retryable counterpart to the best-effort removal in
    /// [`ProjectService::delete_project`]. Returns the removed paths.
    pub fn reconcile_workspaces(&self) -> Result<Vec<String>, ApiError> {
        let referenced: HashSet<PathBuf> = self
            .store
            .list_directory_paths()?
            .into_iter()
            .map(PathBuf::from)
            .collect();

        let entries = std::fs::read_dir(&self.projects_root).map_err(|e| {
            ApiError::Internal(format!(
                "failed to read projects root {}: {e}",
                self.projects_root.display()
            ))
        })?;

        let mut removed = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                ApiError::Internal(format!("failed to read directory entry: {e}"))
            })?;
            let path = entry.path();
            if !path.is_dir() || referenced.contains(&path) {
                continue;
            }
            match std::fs::remove_dir_all(&path) {
                Ok(()) => removed.push(path.to_string_lossy().into_owned()),
                Err(err) => {
                    tracing::warn!(
                        "failed to remove orphaned directory {}: {err}",
                        path.display()
                    );
                }
            }
        }
        Ok(removed)
    }
}
