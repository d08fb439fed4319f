//! Inventory store facade.
//!
//! # Responsibility
//! - Hold the single authoritative [`AppState`] and run every action
//!   through the reducer.
//! - Notify attached snapshot sinks after each transition.
//! - Provide the import/export surface over snapshot documents.
//!
//! # Invariants
//! - `&mut self` dispatch serializes actions; no transition observes a
//!   partially applied predecessor.
//! - A failed sink commit is logged and never rolls back in-memory state.
//! - A failed import leaves the current state untouched.

use crate::persist::file_store::SnapshotSink;
use crate::persist::snapshot::{export_snapshot, import_snapshot, SnapshotResult};
use crate::store::action::Action;
use crate::store::reducer;
use crate::store::state::AppState;
use log::{debug, warn};

/// Owns the state and the mutation/persistence wiring around it.
pub struct InventoryService {
    state: AppState,
    sinks: Vec<Box<dyn SnapshotSink>>,
}

impl InventoryService {
    /// Starts from the bootstrap state (fixed roots and laundry containers).
    pub fn new() -> Self {
        Self::with_state(AppState::bootstrap())
    }

    /// Starts from a previously loaded state.
    pub fn with_state(state: AppState) -> Self {
        Self {
            state,
            sinks: Vec::new(),
        }
    }

    /// Subscribes a sink to every post-transition snapshot.
    pub fn attach_sink(&mut self, sink: Box<dyn SnapshotSink>) {
        self.sinks.push(sink);
    }

    /// Current immutable snapshot of the graph.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Applies one action and notifies every attached sink.
    pub fn dispatch(&mut self, action: Action) {
        debug!(
            "event=dispatch module=service action={} entities={}",
            action.name(),
            self.state.len()
        );
        let previous = std::mem::take(&mut self.state);
        self.state = reducer::dispatch(previous, action);
        self.commit_to_sinks();
    }

    /// Installs the state described by an exported document.
    ///
    /// On any format error the current state is untouched.
    pub fn import(&mut self, json: &str) -> SnapshotResult<()> {
        let state = import_snapshot(json)?;
        self.dispatch(Action::LoadState { state });
        Ok(())
    }

    /// Serializes the current state verbatim.
    pub fn export(&self) -> SnapshotResult<String> {
        export_snapshot(&self.state)
    }

    fn commit_to_sinks(&mut self) {
        for sink in &mut self.sinks {
            if let Err(err) = sink.commit(&self.state) {
                warn!("event=snapshot_commit module=service status=error detail={err}");
            }
        }
    }
}

impl Default for InventoryService {
    fn default() -> Self {
        Self::new()
    }
}
