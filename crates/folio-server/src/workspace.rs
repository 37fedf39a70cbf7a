//! Workspace directory naming and provisioning.
//!
//! Every project owns a directory under `<data-dir>/projects` containing
//! `notes/` and `citations/` subdirectories. Directory names are derived
//! from the project name via [`slugify`] and made unique by probing
//! numbered candidates.
//!
//! The probe has a check-then-act window: two concurrent creations with the
//! same slug can observe the same free candidate. The server serializes
//! creations behind the service mutex, so this only matters across
//! processes sharing a data directory.

use std::io;
use std::path::{Path, PathBuf};

/// Upper bound on the uniqueness probe. Names beyond `<slug>_10000`
/// surface as an error instead of probing forever.
pub const MAX_SUFFIX: u32 = 10_000;

/// Base slug used when a name contains no alphanumeric characters at all,
/// which would otherwise slugify to an empty or all-underscore string.
const FALLBACK_SLUG: &str = "project";

/// Derives a filesystem-safe slug from a user-supplied project name.
///
/// Every character outside `[A-Za-z0-9]` becomes `_` and the result is
/// lowercased. Names with no alphanumeric characters fall back to
/// [`FALLBACK_SLUG`]; uniqueness probing still separates multiple such
/// projects (`project`, `project_1`, ...).
pub fn slugify(name: &str) -> String {
    let slug: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    if slug.chars().all(|c| c == '_') {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// The `n`-th candidate directory name for a slug: the slug itself for
/// `n = 0`, `<slug>_<n>` afterwards.
pub fn candidate(slug: &str, n: u32) -> String {
    if n == 0 {
        slug.to_string()
    } else {
        format!("{slug}_{n}")
    }
}

/// Picks the first free candidate directory under `projects_root` and
/// creates it along with its `notes` and `citations` subdirectories.
///
/// Missing parent segments (including `projects_root` itself) are created
/// as needed. Returns the chosen directory path.
pub fn provision(projects_root: &Path, name: &str) -> io::Result<PathBuf> {
    let slug = slugify(name);
    let dir = (0..=MAX_SUFFIX)
        .map(|n| projects_root.join(candidate(&slug, n)))
        .find(|path| !path.exists())
        .ok_or_else(|| {
            io::Error::other(format!("no free directory name for slug '{slug}'"))
        })?;
    std::fs::create_dir_all(dir.join("notes"))?;
    std::fs::create_dir_all(dir.join("citations"))?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_replaces_and_lowercases() {
        assert_eq!(slugify("My Project"), "my_project");
        assert_eq!(slugify("my-project"), "my_project");
        assert_eq!(slugify("Notes 2024!"), "notes_2024_");
    }

    #[test]
    fn slugify_falls_back_without_alphanumerics() {
        assert_eq!(slugify(""), "project");
        assert_eq!(slugify("!!!"), "project");
        assert_eq!(slugify("___"), "project");
    }

    #[test]
    fn candidate_names() {
        assert_eq!(candidate("notes", 0), "notes");
        assert_eq!(candidate("notes", 1), "notes_1");
        assert_eq!(candidate("notes", 42), "notes_42");
    }

    #[test]
    fn provision_creates_subdirectories() {
        let root = tempfile::tempdir().unwrap();
        let dir = provision(root.path(), "My Project").unwrap();
        assert_eq!(dir, root.path().join("my_project"));
        assert!(dir.join("notes").is_dir());
        assert!(dir.join("citations").is_dir());
    }

    #[test]
    fn provision_probes_past_taken_names() {
        let root = tempfile::tempdir().unwrap();
        let first = provision(root.path(), "My Project").unwrap();
        let second = provision(root.path(), "my-project").unwrap();
        let third = provision(root.path(), "MY PROJECT").unwrap();
        assert_eq!(first, root.path().join("my_project"));
        assert_eq!(second, root.path().join("my_project_1"));
        assert_eq!(third, root.path().join("my_project_2"));
    }

    #[test]
    fn provision_creates_missing_root() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("data").join("projects");
        let dir = provision(&nested, "p").unwrap();
        assert!(dir.is_dir());
    }
}
