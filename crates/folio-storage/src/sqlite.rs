//! SQLite-backed project store.
//!
//! [`SqliteStore`] persists project rows and their dependent tables in a
//! SQLite database with WAL mode, atomic transactions on every write, and
//! automatic schema migrations.

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::StorageError;
use crate::types::{Project, ProjectId, ProjectSummary};

/// SQLite-backed store for projects and their dependent rows.
///
/// Every write operation is wrapped in a transaction for atomicity.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) a SQLite database at `path`.
    pub fn new(path: &str) -> Result<Self, StorageError> {
        let conn = crate::schema::open_database(path)?;
        Ok(SqliteStore { conn })
    }

    /// Opens an in-memory SQLite database (for testing).
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = crate::schema::open_in_memory()?;
        Ok(SqliteStore { conn })
    }

    /// Verifies a project exists, returning an error if not.
    fn assert_project_exists(&self, id: ProjectId) -> Result<(), StorageError> {
        let exists: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM projects WHERE id = ?1)",
            params![id.0],
            |row| row.get(0),
        )?;
        if !exists {
            return Err(StorageError::ProjectNotFound(id.0));
        }
        Ok(())
    }

    // -------------------------------------------------------------------
    // Project CRUD
    // -------------------------------------------------------------------

    /// Inserts a project row with the given (unsanitized) display name.
    ///
    /// `created_at` is assigned by the database; `directory_path` starts
    /// null and is backfilled via [`SqliteStore::set_directory_path`].
    pub fn insert_project(&mut self, name: &str) -> Result<ProjectId, StorageError> {
        let tx = self.conn.transaction()?;
        tx.execute("INSERT INTO projects (name) VALUES (?1)", params![name])?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(ProjectId(id))
    }

    /// Backfills the workspace directory path on an existing project row.
    pub fn set_directory_path(
        &mut self,
        id: ProjectId,
        path: &str,
    ) -> Result<(), StorageError> {
        let tx = self.conn.transaction()?;
        let rows = tx.execute(
            "UPDATE projects SET directory_path = ?2 WHERE id = ?1",
            params![id.0, path],
        )?;
        tx.commit()?;
        if rows == 0 {
            return Err(StorageError::ProjectNotFound(id.0));
        }
        Ok(())
    }

    /// Fetches a full project row by ID.
    pub fn get_project(&self, id: ProjectId) -> Result<Project, StorageError> {
        let row = self
            .conn
            .query_row(
                "SELECT name, created_at, directory_path FROM projects WHERE id = ?1",
                params![id.0],
                |row| {
                    let name: String = row.get(0)?;
                    let created_at: String = row.get(1)?;
                    let directory_path: Option<String> = row.get(2)?;
                    Ok((name, created_at, directory_path))
                },
            )
            .optional()?;

        match row {
            Some((name, created_at, directory_path)) => Ok(Project {
                id,
                name,
                created_at,
                directory_path,
            }),
            None => Err(StorageError::ProjectNotFound(id.0)),
        }
    }

    /// Lists all projects, newest first.
    ///
    /// The `id DESC` tie-break keeps same-millisecond creations in
    /// insertion-recency order.
    pub fn list_projects(&self) -> Result<Vec<ProjectSummary>, StorageError> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, name, created_at FROM projects ORDER BY created_at DESC, id DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            let id: i64 = row.get(0)?;
            let name: String = row.get(1)?;
            let created_at: String = row.get(2)?;
            Ok(ProjectSummary {
                id: ProjectId(id),
                name,
                created_at,
            })
        })?;
        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }

    /// Deletes a project and every dependent row referencing it, as a
    /// single transaction.
    ///
    /// Child tables are deleted first (tasks, notes, citations), then the
    /// project row. If any step fails the transaction rolls back and the
    /// project and its dependents remain fully intact.
    pub fn delete_project(&mut self, id: ProjectId) -> Result<(), StorageError> {
        self.assert_project_exists(id)?;
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM tasks WHERE project_id = ?1", params![id.0])?;
        tx.execute("DELETE FROM notes WHERE project_id = ?1", params![id.0])?;
        tx.execute("DELETE FROM citations WHERE project_id = ?1", params![id.0])?;
        tx.execute("DELETE FROM projects WHERE id = ?1", params![id.0])?;
        tx.commit()?;
        Ok(())
    }

    /// All non-null workspace directory paths (reconciliation support).
    pub fn list_directory_paths(&self) -> Result<Vec<String>, StorageError> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT directory_path FROM projects WHERE directory_path IS NOT NULL",
        )?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }

    // -------------------------------------------------------------------
    // Dependent rows
    // -------------------------------------------------------------------

    /// Inserts a task row under a project.
    pub fn insert_task(&mut self, project: ProjectId, title: &str) -> Result<(), StorageError> {
        self.assert_project_exists(project)?;
        self.conn.execute(
            "INSERT INTO tasks (project_id, title) VALUES (?1, ?2)",
            params![project.0, title],
        )?;
        Ok(())
    }

    /// Inserts a note row under a project.
    pub fn insert_note(&mut self, project: ProjectId, title: &str) -> Result<(), StorageError> {
        self.assert_project_exists(project)?;
        self.conn.execute(
            "INSERT INTO notes (project_id, title) VALUES (?1, ?2)",
            params![project.0, title],
        )?;
        Ok(())
    }

    /// Inserts a citation row under a project.
    pub fn insert_citation(
        &mut self,
        project: ProjectId,
        reference: &str,
    ) -> Result<(), StorageError> {
        self.assert_project_exists(project)?;
        self.conn.execute(
            "INSERT INTO citations (project_id, reference) VALUES (?1, ?2)",
            params![project.0, reference],
        )?;
        Ok(())
    }

    /// Counts dependent rows for a project as `(tasks, notes, citations)`.
    pub fn dependent_counts(
        &self,
        project: ProjectId,
    ) -> Result<(i64, i64, i64), StorageError> {
        let count = |sql: &str| -> Result<i64, StorageError> {
            Ok(self
                .conn
                .query_row(sql, params![project.0], |row| row.get(0))?)
        };
        Ok((
            count("SELECT COUNT(*) FROM tasks WHERE project_id = ?1")?,
            count("SELECT COUNT(*) FROM notes WHERE project_id = ?1")?,
            count("SELECT COUNT(*) FROM citations WHERE project_id = ?1")?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SqliteStore {
        SqliteStore::in_memory().expect("in-memory store")
    }

    #[test]
    fn insert_and_get_round_trip() {
        let mut store = store();
        let id = store.insert_project("My Project").unwrap();
        let project = store.get_project(id).unwrap();
        assert_eq!(project.name, "My Project");
        assert!(project.directory_path.is_none());
        assert!(!project.created_at.is_empty());
    }

    #[test]
    fn set_directory_path_backfills_row() {
        let mut store = store();
        let id = store.insert_project("p").unwrap();
        store.set_directory_path(id, "/data/projects/p").unwrap();
        let project = store.get_project(id).unwrap();
        assert_eq!(project.directory_path.as_deref(), Some("/data/projects/p"));
    }

    #[test]
    fn set_directory_path_unknown_project() {
        let mut store = store();
        let err = store.set_directory_path(ProjectId(42), "/x").unwrap_err();
        assert!(matches!(err, StorageError::ProjectNotFound(42)));
    }

    #[test]
    fn get_unknown_project_is_not_found() {
        let store = store();
        let err = store.get_project(ProjectId(1)).unwrap_err();
        assert!(matches!(err, StorageError::ProjectNotFound(1)));
    }

    #[test]
    fn list_orders_newest_first() {
        let mut store = store();
        let a = store.insert_project("a").unwrap();
        let b = store.insert_project("b").unwrap();
        let listed = store.list_projects().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, b);
        assert_eq!(listed[1].id, a);
    }

    #[test]
    fn delete_cascades_to_dependents() {
        let mut store = store();
        let id = store.insert_project("p").unwrap();
        store.insert_task(id, "t1").unwrap();
        store.insert_task(id, "t2").unwrap();
        store.insert_note(id, "n1").unwrap();
        store.insert_citation(id, "c1").unwrap();

        store.delete_project(id).unwrap();

        assert_eq!(store.dependent_counts(id).unwrap(), (0, 0, 0));
        assert!(matches!(
            store.get_project(id).unwrap_err(),
            StorageError::ProjectNotFound(_)
        ));
    }

    #[test]
    fn delete_leaves_other_projects_alone() {
        let mut store = store();
        let keep = store.insert_project("keep").unwrap();
        let gone = store.insert_project("gone").unwrap();
        store.insert_note(keep, "kept note").unwrap();
        store.insert_note(gone, "dropped note").unwrap();

        store.delete_project(gone).unwrap();

        assert_eq!(store.dependent_counts(keep).unwrap(), (0, 1, 0));
        assert!(store.get_project(keep).is_ok());
    }

    #[test]
    fn delete_unknown_project_is_not_found() {
        let mut store = store();
        let id = store.insert_project("p").unwrap();
        store.delete_project(id).unwrap();
        // Second delete of the same id performs no mutation.
        let err = store.delete_project(id).unwrap_err();
        assert!(matches!(err, StorageError::ProjectNotFound(_)));
    }

    #[test]
    fn list_directory_paths_skips_null() {
        let mut store = store();
        let a = store.insert_project("a").unwrap();
        let _b = store.insert_project("b").unwrap();
        store.set_directory_path(a, "/data/projects/a").unwrap();
        let paths = store.list_directory_paths().unwrap();
        assert_eq!(paths, vec!["/data/projects/a".to_string()]);
    }
}
