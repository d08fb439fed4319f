//! Use-case facade over the store.
//!
//! # Responsibility
//! - Own the application state and serialize every dispatch through it.
//! - Wire post-commit sinks to the transition stream.

pub mod inventory_service;
