//! File-backed storage backend.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::StorageBackend;
use crate::error::{Result, StoreError};

/// One JSON file per key under a base directory.
///
/// The desktop-host equivalent of browser local storage: a fixed key
/// maps to `<base_dir>/<key>.json`.
#[derive(Debug)]
pub struct FileBackend {
    base_dir: PathBuf,
}

impl FileBackend {
    /// Open or create a backend at the default location, `~/.taskgrid`.
    pub fn open() -> Result<Self> {
        let base_dir = dirs::home_dir()
            .ok_or_else(|| StoreError::Storage("cannot determine home directory".to_string()))?
            .join(".taskgrid");
        Self::open_at(&base_dir)
    }

    /// Open or create a backend at the specified directory.
    ///
    /// Useful for testing with custom paths.
    pub fn open_at(base_dir: &Path) -> Result<Self> {
        fs::create_dir_all(base_dir)?;
        Ok(Self {
            base_dir: base_dir.to_path_buf(),
        })
    }

    /// Base directory holding this backend's files.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::write(self.key_path(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_temp_backend() -> (FileBackend, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let backend = FileBackend::open_at(temp_dir.path()).unwrap();
        (backend, temp_dir)
    }

    #[test]
    fn test_open_at_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("store/nested");
        let backend = FileBackend::open_at(&nested).unwrap();

        assert!(nested.exists());
        assert_eq!(backend.base_dir(), nested);
    }

    #[test]
    fn test_get_missing_key() {
        let (backend, _temp) = create_temp_backend();
        assert_eq!(backend.get("absent").unwrap(), None);
    }

    #[test]
    fn test_set_and_get() {
        let (mut backend, _temp) = create_temp_backend();
        backend.set("tasks", "[{\"id\":\"1\"}]").unwrap();
        assert_eq!(
            backend.get("tasks").unwrap().as_deref(),
            Some("[{\"id\":\"1\"}]")
        );
    }

    #[test]
    fn test_value_lands_in_key_file() {
        let (mut backend, temp) = create_temp_backend();
        backend.set("tasks", "[]").unwrap();
        assert!(temp.path().join("tasks.json").exists());
    }

    #[test]
    fn test_remove() {
        let (mut backend, temp) = create_temp_backend();
        backend.set("tasks", "[]").unwrap();
        backend.remove("tasks").unwrap();
        assert!(!temp.path().join("tasks.json").exists());
        assert_eq!(backend.get("tasks").unwrap(), None);
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let (mut backend, _temp) = create_temp_backend();
        assert!(backend.remove("absent").is_ok());
    }

    #[test]
    fn test_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();

        {
            let mut backend = FileBackend::open_at(temp_dir.path()).unwrap();
            backend.set("tasks", "[\"persisted\"]").unwrap();
        }

        {
            let backend = FileBackend::open_at(temp_dir.path()).unwrap();
            assert_eq!(
                backend.get("tasks").unwrap().as_deref(),
                Some("[\"persisted\"]")
            );
        }
    }
}
