//! Snapshot persistence: document format, import/export, post-commit sinks.
//!
//! # Responsibility
//! - Define the only persisted artifact (the snapshot document) and its
//!   import/export contracts.
//! - Provide the post-commit hook seam the service notifies after every
//!   transition.
//!
//! # Invariants
//! - Import either installs a fully repaired state or leaves the current
//!   state untouched.
//! - Export serializes the state verbatim; no redaction or transformation.
//!
//! # See also
//! - DESIGN.md

pub mod file_store;
pub mod snapshot;
