//! The closed action set accepted by the reducer.
//!
//! # Responsibility
//! - Enumerate the entire mutation surface of the entity graph.
//! - Provide stable action labels for structured log lines.
//!
//! # Invariants
//! - No entry point outside this set may alter the graph.
//! - Unknown actions are unrepresentable: the enum is closed and every
//!   consumer matches it exhaustively.

use crate::model::entity::{Capacity, Entity, EntityId, ItemStatus};
use crate::store::state::AppState;

/// One dispatched mutation.
///
/// Payload shapes mirror the snapshot vocabulary: plain id lists, tag
/// strings, and whole entity records for save.
#[derive(Debug, Clone)]
pub enum Action {
    /// Replaces state wholesale. Shape validation happens upstream in the
    /// import path; the reducer installs the payload as-is.
    LoadState { state: AppState },
    /// Insert-or-replace of one entity; applies the laundry-status rule.
    SaveEntity { entity: Entity },
    /// Removes the listed entities and their full descendant closures.
    DeleteEntities { ids: Vec<EntityId> },
    /// Stores the listed ids on the clipboard verbatim.
    CopyEntities { ids: Vec<EntityId> },
    /// Clones every clipboard subtree under the destination, then clears
    /// the clipboard.
    PasteEntities { destination_id: EntityId },
    /// Reparents the listed entities; laundry container destinations force
    /// Item statuses.
    MoveEntities {
        ids: Vec<EntityId>,
        destination_id: EntityId,
    },
    /// Reparents the listed Items out of the unplaced pool and marks them
    /// `Placed`.
    PlaceMiscItems {
        ids: Vec<EntityId>,
        destination_id: EntityId,
    },
    /// Replaces one tag with another on every Item holding it.
    RenameTag { old_name: String, new_name: String },
    /// Collapses several tags into one on every Item holding any of them.
    MergeTags {
        source_tags: Vec<String>,
        target_tag: String,
    },
    /// Removes one tag from every Item.
    DeleteTag { tag_name: String },
    /// Adds tags to the listed Items.
    BulkAddTags {
        ids: Vec<EntityId>,
        tags: Vec<String>,
    },
    /// Removes tags from the listed Items.
    BulkRemoveTags {
        ids: Vec<EntityId>,
        tags: Vec<String>,
    },
    /// Replaces one tag with another on the listed Items.
    BulkReplaceTag {
        ids: Vec<EntityId>,
        old_tag: String,
        new_tag: String,
    },
    /// Sets the fill level of one Container.
    SetContainerCapacity {
        id: EntityId,
        capacity: Option<Capacity>,
    },
    /// Directly sets the status of the listed Items without reparenting.
    SetItemStatus {
        ids: Vec<EntityId>,
        status: ItemStatus,
    },
    /// Renames a custom-property key across every entity.
    RenamePropertyKey { old_key: String, new_key: String },
    /// Removes a custom-property key across every entity.
    DeletePropertyKey { key: String },
}

impl Action {
    /// Stable label used in `event=dispatch action=...` log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadState { .. } => "LOAD_STATE",
            Self::SaveEntity { .. } => "SAVE_ENTITY",
            Self::DeleteEntities { .. } => "DELETE_ENTITIES",
            Self::CopyEntities { .. } => "COPY_ENTITIES",
            Self::PasteEntities { .. } => "PASTE_ENTITIES",
            Self::MoveEntities { .. } => "MOVE_ENTITIES",
            Self::PlaceMiscItems { .. } => "PLACE_MISC_ITEMS",
            Self::RenameTag { .. } => "RENAME_TAG",
            Self::MergeTags { .. } => "MERGE_TAGS",
            Self::DeleteTag { .. } => "DELETE_TAG",
            Self::BulkAddTags { .. } => "BULK_ADD_TAGS",
            Self::BulkRemoveTags { .. } => "BULK_REMOVE_TAGS",
            Self::BulkReplaceTag { .. } => "BULK_REPLACE_TAG",
            Self::SetContainerCapacity { .. } => "SET_CONTAINER_CAPACITY",
            Self::SetItemStatus { .. } => "SET_ITEM_STATUS",
            Self::RenamePropertyKey { .. } => "RENAME_PROPERTY_KEY",
            Self::DeletePropertyKey { .. } => "DELETE_PROPERTY_KEY",
        }
    }
}
