//! Post-commit sink contract and the JSON file store.
//!
//! # Responsibility
//! - Define the hook the service notifies after every transition.
//! - Persist whole snapshots to one JSON file, synchronously.
//!
//! # Invariants
//! - Sinks never mutate state; a failed commit is the caller's to log and
//!   never rolls back the in-memory graph.
//! - A missing file on load means "no snapshot yet", not an error.

use crate::persist::snapshot::{export_snapshot, import_snapshot, SnapshotResult};
use crate::store::state::AppState;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Observer of committed transitions.
///
/// The service calls `commit` with the post-transition snapshot; writing
/// happens out-of-band of the reducer.
pub trait SnapshotSink {
    /// Durably records one post-transition snapshot.
    fn commit(&mut self, state: &AppState) -> SnapshotResult<()>;
}

/// Whole-snapshot JSON file store.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored snapshot, or `None` when no file exists yet.
    pub fn load(&self) -> SnapshotResult<Option<AppState>> {
        match fs::read_to_string(&self.path) {
            Ok(json) => import_snapshot(&json).map(Some),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

impl SnapshotSink for JsonFileStore {
    fn commit(&mut self, state: &AppState) -> SnapshotResult<()> {
        let json = export_snapshot(state)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{JsonFileStore, SnapshotSink};
    use crate::store::state::AppState;

    #[test]
    fn load_returns_none_before_any_commit() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("inventory.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn commit_then_load_round_trips_the_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("inventory.json"));

        let state = AppState::bootstrap();
        store.commit(&state).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, state);
    }
}
