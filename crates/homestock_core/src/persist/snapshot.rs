//! Snapshot document parsing, repair, and serialization.
//!
//! # Responsibility
//! - Map the on-disk document (`entities` + `clipboard`) to [`AppState`].
//! - Enforce the import format contract: a document without the fixed
//!   `root` entity is rejected.
//! - Synthesize missing laundry containers on import so older documents
//!   stay loadable.

use crate::model::entity::{Entity, EntityId, ROOT_ID};
use crate::store::state::{required_laundry_containers, AppState, Clipboard};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// The complete serialized state at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotDocument {
    pub entities: BTreeMap<EntityId, Entity>,
    pub clipboard: Option<Clipboard>,
}

impl SnapshotDocument {
    /// Captures the current state verbatim.
    pub fn capture(state: &AppState) -> Self {
        Self {
            entities: state.entity_table().clone(),
            clipboard: state.clipboard().cloned(),
        }
    }
}

/// Result type used by snapshot and file-store operations.
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Errors from snapshot import/export and file-store operations.
#[derive(Debug)]
pub enum SnapshotError {
    /// Document is not valid JSON or does not match the entity schema.
    Format(serde_json::Error),
    /// Document parsed but lacks the fixed `root` entity.
    MissingRoot,
    /// Underlying file read/write failure.
    Io(std::io::Error),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Format(err) => write!(f, "invalid snapshot document: {err}"),
            Self::MissingRoot => write!(f, "snapshot document is missing the `root` entity"),
            Self::Io(err) => write!(f, "snapshot store failure: {err}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Format(err) => Some(err),
            Self::MissingRoot => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(value: serde_json::Error) -> Self {
        Self::Format(value)
    }
}

impl From<std::io::Error> for SnapshotError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Parses one exported document and builds the state it describes.
///
/// Rejects documents without an `entities.root` entry, then synthesizes
/// any missing fixed laundry containers (back-compatibility repair).
pub fn import_snapshot(json: &str) -> SnapshotResult<AppState> {
    let document: SnapshotDocument = serde_json::from_str(json)?;
    install_document(document)
}

/// Validates and repairs a parsed document, then builds the state.
pub fn install_document(mut document: SnapshotDocument) -> SnapshotResult<AppState> {
    if !document.entities.contains_key(ROOT_ID) {
        return Err(SnapshotError::MissingRoot);
    }
    for container in required_laundry_containers() {
        document
            .entities
            .entry(container.id.clone())
            .or_insert(container);
    }
    Ok(AppState::from_parts(document.entities, document.clipboard))
}

/// Serializes the current state verbatim.
pub fn export_snapshot(state: &AppState) -> SnapshotResult<String> {
    Ok(serde_json::to_string(&SnapshotDocument::capture(state))?)
}

#[cfg(test)]
mod tests {
    use super::{import_snapshot, SnapshotError};

    #[test]
    fn import_rejects_document_without_root() {
        let err = import_snapshot(r#"{"entities":{},"clipboard":null}"#).unwrap_err();
        assert!(matches!(err, SnapshotError::MissingRoot));
    }

    #[test]
    fn import_rejects_malformed_json() {
        let err = import_snapshot("{not json").unwrap_err();
        assert!(matches!(err, SnapshotError::Format(_)));
    }
}
