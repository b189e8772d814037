//! Key-value persistence for the client SDK, mirroring browser local storage.

use std::{collections::HashMap, fs, path::PathBuf, sync::Mutex};

use crate::client::error::ClientError;

/// Storage key holding the current bearer token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Storage key holding the current user as JSON.
pub const USER_KEY: &str = "user";

/// Where the SDK keeps tokens, the current user and the offline collections.
///
/// Each value is an opaque string, JSON where structured. Reads of missing
/// keys answer `None` rather than erroring.
pub trait StorageBackend: Send + Sync {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), ClientError>;
    fn remove(&self, key: &str);
}

/// Volatile in-process storage. State is lost when the backend is dropped.
#[derive(Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), ClientError> {
        self.entries
            .lock()
            .map_err(|_| ClientError::Storage("storage mutex poisoned".to_string()))?
            .insert(key.to_string(), value.to_string());

        Ok(())
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// Durable storage keeping one JSON file per key under a directory.
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), ClientError> {
        fs::create_dir_all(&self.dir).map_err(|err| ClientError::Storage(err.to_string()))?;

        fs::write(self.path_for(key), value).map_err(|err| ClientError::Storage(err.to_string()))
    }

    fn remove(&self, key: &str) {
        let _ = fs::remove_file(self.path_for(key));
    }
}
