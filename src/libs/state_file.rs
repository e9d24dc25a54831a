//! Persistence of the cycle collection state.
//!
//! The whole [`CyclesState`] lives in one JSON file in the application data
//! directory. The file name carries a schema version so a future layout
//! change can pick a new name instead of colliding with older blobs.
//!
//! Loading fails closed: a missing file yields no snapshot and a malformed
//! one logs a warning and also yields no snapshot, so the application starts
//! from an empty state instead of crashing on a corrupted blob.
//!
//! `StateFile` also implements [`StateListener`], serializing the full state
//! after every store mutation. Write failures are logged, not propagated;
//! the last full serialization that succeeded wins.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::state::CyclesState;
use crate::libs::store::StateListener;
use crate::msg_warning;
use anyhow::Result;
use std::fs;
use std::path::PathBuf;

/// Versioned state file name; bump the suffix on schema changes.
pub const STATE_FILE_NAME: &str = "cycles-state-1.0.0.json";

pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub fn new() -> Result<Self> {
        let path = DataStorage::new().get_path(STATE_FILE_NAME)?;
        Ok(StateFile { path })
    }

    /// Loads the persisted snapshot, if a readable one exists.
    ///
    /// Returns `None` when the file is missing or cannot be parsed; a parse
    /// failure is reported but never aborts startup.
    pub fn load(&self) -> Option<CyclesState> {
        if !self.path.exists() {
            return None;
        }

        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                msg_warning!(Message::StateReadFailed(e.to_string()));
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(state) => Some(state),
            Err(e) => {
                msg_warning!(Message::StateParseFailed(e.to_string()));
                None
            }
        }
    }

    /// Serializes the full state to the versioned file.
    pub fn save(&self, state: &CyclesState) -> Result<()> {
        let json = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl StateListener for StateFile {
    fn state_changed(&mut self, state: &CyclesState) {
        if let Err(e) = self.save(state) {
            msg_warning!(Message::StateSaveFailed(e.to_string()));
        }
    }
}
