//! Core domain logic for HomeStock.
//! This crate is the single source of truth for inventory invariants.

pub mod index;
pub mod logging;
pub mod model;
pub mod persist;
pub mod service;
pub mod store;
pub mod view;

pub use index::tag_index::TagIndex;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entity::{
    fresh_id, Capacity, CustomProperty, Entity, EntityId, EntityKind, ItemStatus, LAUNDRY_CLEAN_ID,
    LAUNDRY_DIRTY_ID, LAUNDRY_DRYING_ID, LAUNDRY_TAG, LAUNDRY_WASHING_ID, MISC_ROOT_ID, ROOT_ID,
};
pub use persist::file_store::{JsonFileStore, SnapshotSink};
pub use persist::snapshot::{
    export_snapshot, import_snapshot, SnapshotDocument, SnapshotError, SnapshotResult,
};
pub use service::inventory_service::InventoryService;
pub use store::action::Action;
pub use store::reducer::dispatch;
pub use store::state::{AppState, Clipboard};
pub use view::summary::{
    container_directory, entity_path, laundry_summary, property_keys, ContainerOverview,
    ContainerSort, LaundrySummary,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
