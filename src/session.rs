//! Durable session flags.
//!
//! The portal keeps two booleans across visits: whether the visitor went
//! through the login flow and whether their profile was accepted by the
//! server. Controllers read them once through [`SessionFlags::read`] when they
//! mount and write them through a [`SessionStore`] they were handed at
//! construction. Nothing re-reads the store later, so a change made by another
//! process only shows up on the next mount.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use tracing::{debug, warn};

use crate::error::{PortalError, Result};

/// The stored value that means "set". Anything else, or no value, means unset.
pub const FLAG_SET: &str = "true";

/// Keys the portal uses in the session store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display, strum_macros::AsRefStr)]
pub enum SessionKey {
    #[strum(serialize = "isLoggedIn")]
    LoggedIn,
    #[strum(serialize = "profileSubmitted")]
    ProfileSubmitted,
}

/// Synchronous string key-value storage that survives page loads.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: SessionKey) -> Result<Option<String>>;

    fn set(&self, key: SessionKey, value: &str) -> Result<()>;

    fn remove(&self, key: SessionKey) -> Result<()>;

    fn set_flag(&self, key: SessionKey) -> Result<()> {
        self.set(key, FLAG_SET)
    }

    fn flag(&self, key: SessionKey) -> Result<bool> {
        Ok(self.get(key)?.as_deref() == Some(FLAG_SET))
    }
}

/// Snapshot of both session flags taken at mount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionFlags {
    pub logged_in: bool,
    pub profile_submitted: bool,
}

impl SessionFlags {
    /// Read both flags. A flag that cannot be read counts as unset.
    pub fn read(store: &dyn SessionStore) -> Self {
        let flags = Self {
            logged_in: read_flag(store, SessionKey::LoggedIn),
            profile_submitted: read_flag(store, SessionKey::ProfileSubmitted),
        };
        debug!(?flags, "read session flags");
        flags
    }
}

fn read_flag(store: &dyn SessionStore, key: SessionKey) -> bool {
    store.flag(key).unwrap_or_else(|e| {
        warn!(%key, error = %e, "failed to read session flag, treating as unset");
        false
    })
}

/// Process-local store. Useful for hosts without durable storage and in tests.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flags(flags: &[SessionKey]) -> Self {
        let store = Self::new();
        {
            let mut values = store.values.lock().unwrap_or_else(PoisonError::into_inner);
            for key in flags {
                values.insert(key.to_string(), FLAG_SET.to_string());
            }
        }
        store
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: SessionKey) -> Result<Option<String>> {
        let values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(values.get(key.as_ref()).cloned())
    }

    fn set(&self, key: SessionKey, value: &str) -> Result<()> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: SessionKey) -> Result<()> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.remove(key.as_ref());
        Ok(())
    }
}

/// Store backed by a single JSON object file, rewritten on every change.
///
/// Unknown keys already present in the file are preserved.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl FileSessionStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(PortalError::Storage { path, source }),
        };
        debug!(path = %path.display(), entries = values.len(), "opened session file");
        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, values: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| PortalError::Storage {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let raw = serde_json::to_string_pretty(values)?;
        fs::write(&self.path, raw).map_err(|source| PortalError::Storage {
            path: self.path.clone(),
            source,
        })
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: SessionKey) -> Result<Option<String>> {
        let values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(values.get(key.as_ref()).cloned())
    }

    fn set(&self, key: SessionKey, value: &str) -> Result<()> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        let mut next = values.clone();
        next.insert(key.to_string(), value.to_string());
        self.persist(&next)?;
        *values = next;
        Ok(())
    }

    fn remove(&self, key: SessionKey) -> Result<()> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        if !values.contains_key(key.as_ref()) {
            return Ok(());
        }
        let mut next = values.clone();
        next.remove(key.as_ref());
        self.persist(&next)?;
        *values = next;
        Ok(())
    }
}
