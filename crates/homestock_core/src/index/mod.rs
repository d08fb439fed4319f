//! Derived, read-only views computed from state snapshots.
//!
//! # Responsibility
//! - Aggregate tag usage and placed-item locations on demand.
//! - Keep derivation strictly one-way: nothing here writes to the graph.

pub mod tag_index;
