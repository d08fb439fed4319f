//! Domain model for the inventory entity graph.
//!
//! # Responsibility
//! - Define the canonical entity record shared by every store operation.
//! - Keep wire naming compatible with the snapshot document format.
//!
//! # Invariants
//! - Every entity is identified by a stable string id, unique in the graph.
//! - Destruction is hard delete via the store; there are no tombstones.
//!
//! # See also
//! - DESIGN.md

pub mod entity;
