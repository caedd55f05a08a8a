// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted key/value preference storage.
//!
//! A file-backed store for per-user UI preferences: each key is kept as a
//! single JSON document under the store's root directory. Reads fall back to
//! the type's default value when a key is missing or its file is corrupt, so
//! callers never handle storage errors on the read path.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{Error, Result};

/// Environment variable overriding the default store location.
const STATE_DIR_ENV: &str = "FATHOM_STATE_DIR";
/// Directory name under the user state directory.
const APP_DIR_NAME: &str = "fathom";

/// File-backed JSON key/value store for user preferences.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    root: PathBuf,
}

impl PreferenceStore {
    /// Opens a store rooted at the given directory.
    ///
    /// No filesystem access happens here; the directory is created on the
    /// first write.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        PreferenceStore { root: root.into() }
    }

    /// Opens the store at the user-level state directory.
    ///
    /// Resolution order:
    /// 1. `FATHOM_STATE_DIR` environment variable
    /// 2. `$XDG_STATE_HOME/fathom`
    /// 3. `~/.local/state/fathom`
    pub fn open_default() -> Result<Self> {
        Ok(Self::open(default_state_dir()?))
    }

    /// Reads the value stored under `key`.
    ///
    /// Returns `T::default()` when the key has never been written. A file
    /// that cannot be read or parsed also yields the default; the failure is
    /// logged rather than surfaced.
    pub fn get<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let path = self.key_path(key);
        if !path.exists() {
            return T::default();
        }
        match read_value(&path) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("discarding unreadable preference '{}': {}", key, e);
                T::default()
            }
        }
    }

    /// Writes `value` under `key`, replacing any previous value.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        let json = serde_json::to_string(value)?;
        fs::write(self.key_path(key), json)?;
        Ok(())
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

fn read_value<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Resolves the default state directory for preference files.
fn default_state_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(STATE_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    if let Some(xdg) = std::env::var_os("XDG_STATE_HOME").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(xdg).join(APP_DIR_NAME));
    }
    dirs::home_dir()
        .map(|home| home.join(".local/state").join(APP_DIR_NAME))
        .ok_or(Error::StateDirUnavailable)
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod tests;
