//! Filesystem utilities for storage bootstrap.

use std::fs;
use std::io;
use std::path::Path;

/// Ensure the directory containing `path` exists, creating it if absent.
///
/// The database file itself is created lazily by SQLite on first open;
/// SQLite does not create missing directories, so this runs as a separate
/// bootstrap step before the store is opened.
///
/// A path with no parent component (a bare filename) is left alone.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_creates_missing_parent() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("data").join("nested").join("retro.sqlite");

        ensure_parent_dir(&db_path).unwrap();

        assert!(db_path.parent().unwrap().is_dir());
        assert!(!db_path.exists());
    }

    #[test]
    fn test_existing_parent_is_ok() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("retro.sqlite");

        ensure_parent_dir(&db_path).unwrap();
        ensure_parent_dir(&db_path).unwrap();

        assert!(dir.path().is_dir());
    }

    #[test]
    fn test_bare_filename_is_ok() {
        ensure_parent_dir(Path::new("retro.sqlite")).unwrap();
    }
}
