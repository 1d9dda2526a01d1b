//! Local switch-state persistence.
//!
//! Holds the only durable state this tool owns: the context last switched
//! to and the one that was active immediately before it. The record lives
//! in a single JSON file under the user cache directory and every write
//! goes through a temp-file-and-rename so a crash mid-write never leaves a
//! truncated record. Concurrent invocations racing on the file are not
//! coordinated; last writer wins.

use crate::config;
use crate::error::CtxError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// The two-field switch record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalState {
    /// Name of the context last switched to, empty when never recorded.
    #[serde(default)]
    pub current: String,

    /// Context that was active immediately before the last switch.
    #[serde(default)]
    pub previous: String,
}

/// Handle to the persisted switch record.
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    /// Create a handle for an explicit file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Handle for the default location under the user cache directory.
    pub fn default_location() -> Result<Self, CtxError> {
        Ok(Self::new(config::cache_dir()?.join("state.json")))
    }

    /// Path of the underlying file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted record.
    ///
    /// A missing file reads as the default (empty) record. An unparseable
    /// file is treated the same way, with a warning, so a damaged record
    /// degrades to "no swap history" instead of blocking every command.
    pub fn read(&self) -> Result<LocalState, CtxError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(LocalState::default())
            }
            Err(e) => return Err(CtxError::Io(e)),
        };

        match serde_json::from_str(&content) {
            Ok(state) => Ok(state),
            Err(e) => {
                warn!(path = %self.path.display(), "Discarding unreadable state file: {}", e);
                Ok(LocalState::default())
            }
        }
    }

    /// Record a switch to `name`.
    ///
    /// Sets `current` to `name`. The `previous` slot is filled from the
    /// caller-supplied previously-active context when one is known,
    /// otherwise from the old `current` when it differs from `name`.
    pub fn record_switch(&self, name: &str, previous: Option<&str>) -> Result<(), CtxError> {
        let mut state = self.read()?;

        match previous {
            Some(prev) if prev != name => state.previous = prev.to_string(),
            None if !state.current.is_empty() && state.current != name => {
                state.previous = state.current.clone();
            }
            _ => {}
        }
        state.current = name.to_string();

        self.write(&state)
    }

    /// Replace the record atomically: write a sibling temp file, then rename.
    pub fn write(&self, state: &LocalState) -> Result<(), CtxError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(state)
            .map_err(|e| CtxError::State(format!("Failed to serialize state: {}", e)))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
