//! Entity domain model.
//!
//! # Responsibility
//! - Define the tagged union of inventory entities and its shared fields.
//! - Provide the laundry-status rule applied by every coercing write path.
//! - Own the fixed node ids and the reserved `laundry` tag.
//!
//! # Invariants
//! - `id` is stable and never reused for another entity.
//! - Only the two fixed Property roots may carry `parent_id = None`.
//! - An Item may hold `Dirty`/`Washing` status only while tagged `laundry`.
//!
//! # See also
//! - DESIGN.md

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Stable identifier for every entity in the graph.
///
/// Kept as a type alias: fixed nodes use well-known ids (`root`,
/// `laundry_dirty`, ...) while minted ids are UUID strings.
pub type EntityId = String;

/// Id of the fixed Property root holding the real hierarchy.
pub const ROOT_ID: &str = "root";
/// Id of the fixed Property root holding unplaced items and misc containers.
pub const MISC_ROOT_ID: &str = "misc_root";
/// Id of the fixed dirty-laundry Container.
pub const LAUNDRY_DIRTY_ID: &str = "laundry_dirty";
/// Id of the fixed washing-machine Container.
pub const LAUNDRY_WASHING_ID: &str = "laundry_washing";
/// Id of the fixed drying Container.
pub const LAUNDRY_DRYING_ID: &str = "laundry_drying";
/// Id of the fixed clean-laundry Container.
pub const LAUNDRY_CLEAN_ID: &str = "laundry_clean";

/// Reserved tag gating the `Dirty`/`Washing` item statuses.
pub const LAUNDRY_TAG: &str = "laundry";

/// Mints a fresh opaque id for entities and custom properties.
pub fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

/// One user-defined key/value annotation on an entity.
///
/// Keys are non-unique across entities and intended-unique per entity by
/// convention only; nothing enforces the latter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomProperty {
    pub id: String,
    pub key: String,
    pub value: String,
}

impl CustomProperty {
    /// Creates a property entry with a freshly minted id.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: fresh_id(),
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Fill level of a Container, as shown in the container directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Capacity {
    Empty,
    #[serde(rename = "Plenty of Space")]
    PlentyOfSpace,
    #[serde(rename = "Getting Full")]
    GettingFull,
    Full,
}

/// Placement/laundry status of an Item.
///
/// Any action may set any status, but the laundry rule stands over all of
/// them: `Dirty` and `Washing` require the `laundry` tag, and coercing
/// writes downgrade violations to `CleanUnplaced`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemStatus {
    Placed,
    Dirty,
    Washing,
    #[serde(rename = "Clean (Unplaced)")]
    CleanUnplaced,
}

impl ItemStatus {
    /// Returns whether this status is gated by the `laundry` tag.
    pub fn requires_laundry_tag(self) -> bool {
        matches!(self, Self::Dirty | Self::Washing)
    }
}

/// Variant-specific payload of an entity.
///
/// Serialized with the `type` discriminant of the snapshot document
/// (`PROPERTY`, `ROOM`, `UNIT`, `COMPARTMENT`, `CONTAINER`, `ITEM`,
/// `LAUNDRY_LINK`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityKind {
    Property,
    Room,
    Unit,
    Compartment,
    Container {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        capacity: Option<Capacity>,
    },
    Item {
        quantity: u32,
        tags: BTreeSet<String>,
        status: ItemStatus,
    },
    LaundryLink {
        #[serde(rename = "linkedTag")]
        linked_tag: String,
    },
}

/// Canonical record for every node in the inventory graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Stable id, unique across the whole graph.
    pub id: EntityId,
    /// User-facing label.
    pub name: String,
    /// Ownership edge. `None` only for the two fixed Property roots.
    #[serde(rename = "parentId")]
    pub parent_id: Option<EntityId>,
    /// Ordered user-defined annotations.
    #[serde(rename = "customProps", default)]
    pub custom_props: Vec<CustomProperty>,
    /// Variant payload, flattened into the record on the wire.
    #[serde(flatten)]
    pub kind: EntityKind,
}

impl Entity {
    /// Creates an entity with a freshly minted id.
    pub fn new(kind: EntityKind, name: impl Into<String>, parent_id: Option<EntityId>) -> Self {
        Self::with_id(fresh_id(), kind, name, parent_id)
    }

    /// Creates an entity with a caller-provided stable id.
    ///
    /// Used for the fixed nodes and by import paths where identity already
    /// exists externally.
    pub fn with_id(
        id: impl Into<EntityId>,
        kind: EntityKind,
        name: impl Into<String>,
        parent_id: Option<EntityId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id,
            custom_props: Vec::new(),
            kind,
        }
    }

    pub fn is_property(&self) -> bool {
        matches!(self.kind, EntityKind::Property)
    }

    pub fn is_container(&self) -> bool {
        matches!(self.kind, EntityKind::Container { .. })
    }

    pub fn is_item(&self) -> bool {
        matches!(self.kind, EntityKind::Item { .. })
    }

    /// Tag set, for Items only.
    pub fn tags(&self) -> Option<&BTreeSet<String>> {
        match &self.kind {
            EntityKind::Item { tags, .. } => Some(tags),
            _ => None,
        }
    }

    /// Placement status, for Items only.
    pub fn status(&self) -> Option<ItemStatus> {
        match &self.kind {
            EntityKind::Item { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Unit quantity, for Items only.
    pub fn quantity(&self) -> Option<u32> {
        match &self.kind {
            EntityKind::Item { quantity, .. } => Some(*quantity),
            _ => None,
        }
    }

    /// Applies the laundry-status rule to this entity in place.
    ///
    /// Downgrades an Item holding `Dirty`/`Washing` without the `laundry`
    /// tag to `CleanUnplaced`. Returns whether a downgrade happened.
    /// Non-Items are untouched.
    pub fn apply_laundry_rule(&mut self) -> bool {
        if let EntityKind::Item { tags, status, .. } = &mut self.kind {
            if status.requires_laundry_tag() && !tags.contains(LAUNDRY_TAG) {
                *status = ItemStatus::CleanUnplaced;
                return true;
            }
        }
        false
    }
}
