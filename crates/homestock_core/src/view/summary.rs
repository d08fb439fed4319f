//! Snapshot summaries: laundry totals, breadcrumb paths, directories.
//!
//! # Responsibility
//! - Aggregate laundry-workflow quantities by status.
//! - Derive breadcrumb-style location paths below the Property roots.
//! - List custom-property keys and non-misc containers for management
//!   views.
//!
//! # Invariants
//! - Laundry totals count quantities, not item records.
//! - Paths stop below the first Property ancestor and join with `" / "`.

use crate::index::tag_index::TagIndex;
use crate::model::entity::{Capacity, EntityId, EntityKind, ItemStatus, MISC_ROOT_ID};
use crate::store::state::AppState;
use std::collections::BTreeSet;

/// Total item quantities per laundry-relevant status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LaundrySummary {
    /// Quantity with status `Dirty`.
    pub dirty: u64,
    /// Quantity with status `Washing`.
    pub washing: u64,
    /// Quantity with status `CleanUnplaced`.
    pub clean: u64,
}

/// Sums item quantities by laundry status; `Placed` items are not part of
/// the laundry workflow and are ignored.
pub fn laundry_summary(state: &AppState) -> LaundrySummary {
    let mut summary = LaundrySummary::default();
    for entity in state.entities() {
        let EntityKind::Item {
            quantity, status, ..
        } = &entity.kind
        else {
            continue;
        };
        let quantity = u64::from(*quantity);
        match status {
            ItemStatus::Dirty => summary.dirty += quantity,
            ItemStatus::Washing => summary.washing += quantity,
            ItemStatus::CleanUnplaced => summary.clean += quantity,
            ItemStatus::Placed => {}
        }
    }
    summary
}

/// Breadcrumb path of one entity, e.g. `Bedroom / Wardrobe / Top Shelf`.
///
/// Empty for missing entities and for the roots themselves; the walk stops
/// below the first Property ancestor.
pub fn entity_path(state: &AppState, entity_id: &str) -> String {
    let Some(entity) = state.get(entity_id) else {
        return String::new();
    };
    let Some(parent_id) = &entity.parent_id else {
        return String::new();
    };
    match state.get(parent_id) {
        Some(parent) if !parent.is_property() => {
            let parent_path = entity_path(state, parent_id);
            if parent_path.is_empty() {
                entity.name.clone()
            } else {
                format!("{parent_path} / {}", entity.name)
            }
        }
        _ => entity.name.clone(),
    }
}

/// Sorted distinct custom-property keys across the whole graph; empty keys
/// are skipped.
pub fn property_keys(state: &AppState) -> Vec<String> {
    let mut keys = BTreeSet::new();
    for entity in state.entities() {
        for prop in &entity.custom_props {
            if !prop.key.is_empty() {
                keys.insert(prop.key.clone());
            }
        }
    }
    keys.into_iter().collect()
}

/// Sort key for the container directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerSort {
    Name,
    ItemCount,
    TagCount,
}

/// One row of the container directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerOverview {
    pub id: EntityId,
    pub name: String,
    pub capacity: Option<Capacity>,
    /// Total quantity of placed items inside.
    pub placed_quantity: u64,
    /// Number of distinct tags among the placed items inside.
    pub tag_count: usize,
}

/// Lists every container outside the misc pool, sorted by the requested
/// key. Ties keep id order (the underlying iteration order).
pub fn container_directory(
    state: &AppState,
    index: &TagIndex,
    sort: ContainerSort,
    descending: bool,
) -> Vec<ContainerOverview> {
    let mut rows: Vec<ContainerOverview> = state
        .entities()
        .filter(|entity| entity.is_container())
        .filter(|entity| entity.parent_id.as_deref() != Some(MISC_ROOT_ID))
        .map(|entity| {
            let capacity = match &entity.kind {
                EntityKind::Container { capacity } => *capacity,
                _ => None,
            };
            ContainerOverview {
                id: entity.id.clone(),
                name: entity.name.clone(),
                capacity,
                placed_quantity: index.placed_quantity(&entity.id),
                tag_count: index.container_tags(&entity.id).map_or(0, BTreeSet::len),
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        let ordering = match sort {
            ContainerSort::Name => a.name.cmp(&b.name),
            ContainerSort::ItemCount => a.placed_quantity.cmp(&b.placed_quantity),
            ContainerSort::TagCount => a.tag_count.cmp(&b.tag_count),
        };
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
    rows
}
