//! Read-only projections consumed by inventory views.
//!
//! Everything here is computed from a state snapshot on demand and never
//! written back into the graph.

pub mod summary;
