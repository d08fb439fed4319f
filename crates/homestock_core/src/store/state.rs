//! Application state: flat entity table plus incremental child index.
//!
//! # Responsibility
//! - Hold every entity in a flat table keyed by id (arena + index pattern).
//! - Keep a `parent id -> ordered child ids` index in lockstep with the
//!   table so child listing is O(children), not O(total entities).
//! - Hold the copy/paste clipboard.
//!
//! # Invariants
//! - The index holds exactly the non-empty child sets implied by the
//!   table's `parent_id` edges; rebuilding from the table yields an equal
//!   state.
//! - `upsert` re-applies the laundry-status rule to Items (a side effect of
//!   save, not a rejection).
//! - `remove_all` expects an id set closed under children; the reducer only
//!   ever passes descendant closures.
//!
//! # See also
//! - DESIGN.md

use crate::model::entity::{
    Entity, EntityId, EntityKind, ItemStatus, LAUNDRY_CLEAN_ID, LAUNDRY_DIRTY_ID,
    LAUNDRY_DRYING_ID, LAUNDRY_WASHING_ID, MISC_ROOT_ID, ROOT_ID,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Pending copy-set of entity ids, consumed atomically by paste.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clipboard {
    #[serde(rename = "entityIds")]
    pub entity_ids: Vec<EntityId>,
}

/// The complete in-memory application state.
///
/// Exclusively owned by the reducer; every other component reads immutable
/// snapshots of it.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    entities: BTreeMap<EntityId, Entity>,
    children: HashMap<EntityId, BTreeSet<EntityId>>,
    clipboard: Option<Clipboard>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::bootstrap()
    }
}

impl AppState {
    /// Initial state: the two fixed Property roots and the four fixed
    /// laundry containers.
    pub fn bootstrap() -> Self {
        let mut entities = BTreeMap::new();
        for entity in fixed_roots().into_iter().chain(required_laundry_containers()) {
            entities.insert(entity.id.clone(), entity);
        }
        Self::from_parts(entities, None)
    }

    /// Builds a state from a raw entity table, deriving the child index.
    pub fn from_parts(entities: BTreeMap<EntityId, Entity>, clipboard: Option<Clipboard>) -> Self {
        let mut children: HashMap<EntityId, BTreeSet<EntityId>> = HashMap::new();
        for entity in entities.values() {
            if let Some(parent_id) = &entity.parent_id {
                children
                    .entry(parent_id.clone())
                    .or_default()
                    .insert(entity.id.clone());
            }
        }
        Self {
            entities,
            children,
            clipboard,
        }
    }

    pub fn get(&self, id: &str) -> Option<&Entity> {
        self.entities.get(id)
    }

    /// Mutable access for the reducer.
    ///
    /// Callers must not change `id` or `parent_id` through this handle;
    /// reparenting goes through [`AppState::reparent`] so the child index
    /// stays consistent.
    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Entity> {
        self.entities.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entities.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterates every entity in id order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// Mutable iteration for cross-cutting edits (tags, custom props).
    ///
    /// Same restriction as [`AppState::get_mut`]: `id` and `parent_id`
    /// must not change through this handle.
    pub(crate) fn entities_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.values_mut()
    }

    /// Read access to the raw table, used by snapshot export.
    pub fn entity_table(&self) -> &BTreeMap<EntityId, Entity> {
        &self.entities
    }

    /// Lists the direct children of `parent_id`, ordered by id.
    pub fn children(&self, parent_id: &str) -> Vec<&Entity> {
        match self.children.get(parent_id) {
            Some(ids) => ids.iter().filter_map(|id| self.entities.get(id)).collect(),
            None => Vec::new(),
        }
    }

    /// Inserts `entity` if its id is unseen, otherwise fully replaces it.
    ///
    /// Re-applies the laundry-status rule to Items before installing.
    pub fn upsert(&mut self, mut entity: Entity) {
        entity.apply_laundry_rule();

        let previous_parent = self
            .entities
            .get(&entity.id)
            .and_then(|existing| existing.parent_id.clone());
        if previous_parent != entity.parent_id {
            if let Some(parent_id) = &previous_parent {
                self.detach(parent_id, &entity.id);
            }
        }
        if let Some(parent_id) = &entity.parent_id {
            self.attach(parent_id, &entity.id);
        }
        self.entities.insert(entity.id.clone(), entity);
    }

    /// Moves one entity under `destination_id`, keeping the index in step.
    ///
    /// Returns `false` (and changes nothing) when `id` is absent. The
    /// destination is not validated, matching the shipped move semantics.
    pub fn reparent(&mut self, id: &str, destination_id: &str) -> bool {
        let Some(entity) = self.entities.get_mut(id) else {
            return false;
        };
        let previous_parent = entity.parent_id.replace(destination_id.to_string());
        let id = entity.id.clone();
        if previous_parent.as_deref() != Some(destination_id) {
            if let Some(parent_id) = &previous_parent {
                self.detach(parent_id, &id);
            }
            self.attach(destination_id, &id);
        }
        true
    }

    /// Removes every listed entity in one step.
    ///
    /// `ids` must be closed under children (a descendant closure); absent
    /// ids are skipped silently.
    pub fn remove_all(&mut self, ids: &BTreeSet<EntityId>) {
        for id in ids {
            if let Some(entity) = self.entities.remove(id) {
                if let Some(parent_id) = &entity.parent_id {
                    self.detach(parent_id, id);
                }
            }
        }
    }

    /// Computes the descendant closure of `seeds`: the seeds plus every
    /// entity transitively reachable through child edges.
    pub fn descendant_closure(&self, seeds: &[EntityId]) -> BTreeSet<EntityId> {
        let mut closure = BTreeSet::new();
        let mut pending: Vec<EntityId> = seeds.to_vec();
        while let Some(id) = pending.pop() {
            if !closure.insert(id.clone()) {
                continue;
            }
            if let Some(child_ids) = self.children.get(&id) {
                pending.extend(child_ids.iter().cloned());
            }
        }
        closure
    }

    pub fn clipboard(&self) -> Option<&Clipboard> {
        self.clipboard.as_ref()
    }

    pub(crate) fn set_clipboard(&mut self, clipboard: Option<Clipboard>) {
        self.clipboard = clipboard;
    }

    pub(crate) fn take_clipboard(&mut self) -> Option<Clipboard> {
        self.clipboard.take()
    }

    fn attach(&mut self, parent_id: &str, id: &str) {
        self.children
            .entry(parent_id.to_string())
            .or_default()
            .insert(id.to_string());
    }

    fn detach(&mut self, parent_id: &str, id: &str) {
        if let Some(bucket) = self.children.get_mut(parent_id) {
            bucket.remove(id);
            if bucket.is_empty() {
                self.children.remove(parent_id);
            }
        }
    }
}

fn fixed_roots() -> [Entity; 2] {
    [
        Entity::with_id(ROOT_ID, EntityKind::Property, "My Home", None),
        Entity::with_id(MISC_ROOT_ID, EntityKind::Property, "Misc Containers", None),
    ]
}

/// The four fixed laundry containers, parented under the real root.
///
/// Synthesized on import when missing so older snapshots stay loadable.
pub fn required_laundry_containers() -> [Entity; 4] {
    let container = || EntityKind::Container { capacity: None };
    [
        Entity::with_id(
            LAUNDRY_DIRTY_ID,
            container(),
            "Dirty Laundry Basket",
            Some(ROOT_ID.to_string()),
        ),
        Entity::with_id(
            LAUNDRY_WASHING_ID,
            container(),
            "Washing Machine",
            Some(ROOT_ID.to_string()),
        ),
        Entity::with_id(
            LAUNDRY_DRYING_ID,
            container(),
            "Clothesline",
            Some(ROOT_ID.to_string()),
        ),
        Entity::with_id(
            LAUNDRY_CLEAN_ID,
            container(),
            "Clean Laundry Basket",
            Some(ROOT_ID.to_string()),
        ),
    ]
}

/// Forced item status when moving into one of the fixed laundry containers.
pub(crate) fn laundry_destination_status(destination_id: &str) -> Option<ItemStatus> {
    match destination_id {
        LAUNDRY_DIRTY_ID => Some(ItemStatus::Dirty),
        LAUNDRY_WASHING_ID | LAUNDRY_DRYING_ID => Some(ItemStatus::Washing),
        LAUNDRY_CLEAN_ID => Some(ItemStatus::CleanUnplaced),
        _ => None,
    }
}
