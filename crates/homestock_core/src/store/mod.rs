//! Entity graph store and its transition function.
//!
//! # Responsibility
//! - Own the authoritative entity table and the derived child index.
//! - Define the closed action set and the reducer applying it.
//!
//! # Invariants
//! - The reducer is the only mutation surface over the graph.
//! - Every action fully applies or fully no-ops; no partial state survives.
//! - The child index always mirrors the `parent_id` edges of the table.
//!
//! # See also
//! - DESIGN.md

pub mod action;
pub mod reducer;
pub mod state;
