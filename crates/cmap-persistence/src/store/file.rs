//! One JSON file per key inside a storage directory.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::StateStore;
use crate::error::{PersistenceError, Result};

/// File-backed store: `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store in the platform data directory, if one can be determined.
    pub fn default_location() -> Option<Self> {
        directories::ProjectDirs::from("edu", "CourseMap", "CourseMap")
            .map(|dirs| Self::new(dirs.data_dir()))
    }

    /// Root directory of this store.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the document for `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(PersistenceError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl StateStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PersistenceError::Io {
                operation: "read",
                path,
                source: e,
            }),
        }
    }

    /// Uses atomic write (temp file + rename) so a crash mid-save leaves the
    /// previous document intact.
    fn write(&self, key: &str, contents: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let temp_path = path.with_extension("json.tmp");

        fs::create_dir_all(&self.dir).map_err(|e| PersistenceError::Io {
            operation: "create directory",
            path: self.dir.clone(),
            source: e,
        })?;

        let result = write_synced(&temp_path, contents).and_then(|()| {
            fs::rename(&temp_path, &path).map_err(|e| PersistenceError::AtomicWriteFailed {
                temp_path: temp_path.clone(),
                target_path: path.clone(),
                source: e,
            })
        });
        if let Err(error) = result {
            let _ = fs::remove_file(&temp_path);
            return Err(error);
        }

        tracing::debug!("Wrote {} bytes to {}", contents.len(), path.display());
        Ok(())
    }
}

/// Create `path` and write `contents` to disk before returning.
fn write_synced(path: &Path, contents: &str) -> Result<()> {
    let io_error = |operation, source| PersistenceError::Io {
        operation,
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(|e| io_error("create", e))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| io_error("write", e))?;
    file.sync_all().map_err(|e| io_error("sync", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_document_is_none() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert!(store.read("filters").unwrap().is_none());
    }

    #[test]
    fn test_write_creates_directory() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested").join("state"));

        store.write("preferences", "{}").unwrap();

        assert_eq!(store.read("preferences").unwrap().as_deref(), Some("{}"));
        assert!(store.dir().join("preferences.json").exists());
        assert!(!store.dir().join("preferences.json.tmp").exists());
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("filters.json");
        fs::create_dir(&blocker).unwrap();
        fs::write(blocker.join("keep"), "").unwrap();
        let store = FileStore::new(dir.path());

        let result = store.write("filters", "{}");

        assert!(matches!(
            result,
            Err(PersistenceError::AtomicWriteFailed { .. })
        ));
        assert!(!dir.path().join("filters.json.tmp").exists());
        assert!(blocker.join("keep").exists());
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let store = FileStore::new("/tmp");
        assert!(matches!(
            store.path_for("../escape"),
            Err(PersistenceError::InvalidKey(_))
        ));
        assert!(matches!(
            store.path_for(""),
            Err(PersistenceError::InvalidKey(_))
        ));
    }
}
