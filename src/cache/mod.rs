//! Session-scoped key/value storage for the fetched dataset.
//!
//! A session is a named directory under the user cache dir; values live as
//! one file per key and are returned verbatim, with no expiry.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("invalid session name: {0:?}")]
    InvalidSession(String),

    #[error("cache I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type CacheResult<T> = std::result::Result<T, CacheError>;

pub trait SessionCache: Send + Sync {
    fn get(&self, key: &str) -> CacheResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> CacheResult<()>;
    fn clear(&self) -> CacheResult<()>;
}

pub struct FileSessionCache {
    dir: PathBuf,
}

impl FileSessionCache {
    pub fn new(root: &Path, session: &str) -> CacheResult<Self> {
        let valid = !session.is_empty()
            && session
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
            && session != "."
            && session != "..";
        if !valid {
            return Err(CacheError::InvalidSession(session.to_string()));
        }

        Ok(Self {
            dir: root.join("sessions").join(session),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl SessionCache for FileSessionCache {
    fn get(&self, key: &str) -> CacheResult<Option<String>> {
        match fs::read_to_string(self.entry_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> CacheResult<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.entry_path(key), value)?;
        Ok(())
    }

    fn clear(&self) -> CacheResult<()> {
        if self.dir.exists() {
            fs::remove_dir_all(&self.dir)?;
        }
        Ok(())
    }
}

/// Process-local cache, used when the file cache is disabled and in tests.
#[derive(Default)]
pub struct MemorySessionCache {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySessionCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionCache for MemorySessionCache {
    fn get(&self, key: &str) -> CacheResult<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> CacheResult<()> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self) -> CacheResult<()> {
        self.lock().clear();
        Ok(())
    }
}
