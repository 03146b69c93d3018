//! Preference persistence.
//!
//! The site persists exactly one value (the hacker-mode flag), but it goes
//! through a small key/value seam so views never touch storage directly:
//! - [`Storage`]: redb-backed, survives restarts
//! - [`MemoryPreferences`]: in-memory, for tests and ephemeral sessions

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use redb::{Database, TableDefinition};

use crate::error::PortfolioError;

const PREFERENCES_TABLE: TableDefinition<&str, &str> = TableDefinition::new("preferences");

/// String key/value store for user preferences
pub trait PreferenceStore: Send + Sync {
    /// Read a value; `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, PortfolioError>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), PortfolioError>;
}

/// Storage layer using redb for ACID-compliant persistence
#[derive(Clone)]
pub struct Storage {
    db: Arc<RwLock<Database>>,
}

impl Storage {
    /// Create a new storage instance at the given path.
    ///
    /// This will:
    /// - Create the database directory if it doesn't exist
    /// - Initialize the database file
    /// - Create the preferences table
    pub fn new(path: impl AsRef<Path>) -> Result<Self, PortfolioError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PREFERENCES_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    /// Remove a preference. Missing keys are not an error.
    pub fn remove(&self, key: &str) -> Result<(), PortfolioError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            table.remove(key)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

impl PreferenceStore for Storage {
    fn get(&self, key: &str) -> Result<Option<String>, PortfolioError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(PREFERENCES_TABLE)?;

        match table.get(key)? {
            Some(v) => Ok(Some(v.value().to_string())),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PortfolioError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

/// In-memory preference store
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one value.
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.values.lock().insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<String>, PortfolioError> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PortfolioError> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_storage() -> (Storage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(temp_dir.path().join("test.redb")).unwrap();
        (storage, temp_dir)
    }

    #[test]
    fn test_storage_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested").join("prefs.redb");
        let _storage = Storage::new(&db_path).unwrap();
        assert!(db_path.exists());
    }

    #[test]
    fn test_missing_key_is_none() {
        let (storage, _temp) = create_test_storage();
        assert!(storage.get("hackerMode").unwrap().is_none());
    }

    #[test]
    fn test_set_get_and_overwrite() {
        let (storage, _temp) = create_test_storage();
        storage.set("hackerMode", "true").unwrap();
        assert_eq!(storage.get("hackerMode").unwrap().as_deref(), Some("true"));

        storage.set("hackerMode", "false").unwrap();
        assert_eq!(storage.get("hackerMode").unwrap().as_deref(), Some("false"));

        storage.remove("hackerMode").unwrap();
        assert!(storage.get("hackerMode").unwrap().is_none());
    }

    #[test]
    fn test_preferences_persist_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.redb");

        {
            let storage = Storage::new(&db_path).unwrap();
            storage.set("hackerMode", "true").unwrap();
        }

        {
            let storage = Storage::new(&db_path).unwrap();
            assert_eq!(storage.get("hackerMode").unwrap().as_deref(), Some("true"));
        }
    }

    #[test]
    fn test_memory_preferences() {
        let store = MemoryPreferences::with("hackerMode", "true");
        assert_eq!(store.get("hackerMode").unwrap().as_deref(), Some("true"));
        store.set("other", "x").unwrap();
        assert_eq!(store.get("other").unwrap().as_deref(), Some("x"));
    }
}
