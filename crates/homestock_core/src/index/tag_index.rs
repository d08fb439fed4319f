//! Tag index and placement-suggestion heuristic.
//!
//! # Responsibility
//! - Aggregate tag -> total quantity over every Item.
//! - Map container -> tag set and container -> placed quantity over placed
//!   Items.
//! - Score candidate tag sets against container tag sets to suggest a
//!   placement.
//!
//! # Invariants
//! - The index is recomputed from a snapshot, never stored or written back.
//! - Only Items with `status = Placed` and a parent contribute to the
//!   container maps.
//! - Suggestion ties fall to map iteration order; the order carries no
//!   meaning and callers must not rely on it.
//!
//! # See also
//! - DESIGN.md

use crate::model::entity::{EntityId, EntityKind, ItemStatus, MISC_ROOT_ID};
use crate::store::state::AppState;
use std::collections::{BTreeMap, BTreeSet};

/// Aggregated tag usage, recomputed from one state snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagIndex {
    tag_quantities: BTreeMap<String, u64>,
    container_tags: BTreeMap<EntityId, BTreeSet<String>>,
    container_quantities: BTreeMap<EntityId, u64>,
}

impl TagIndex {
    /// Builds the index from the current graph.
    pub fn build(state: &AppState) -> Self {
        let mut index = Self::default();
        for entity in state.entities() {
            let EntityKind::Item {
                quantity,
                tags,
                status,
            } = &entity.kind
            else {
                continue;
            };

            for tag in tags {
                *index.tag_quantities.entry(tag.clone()).or_default() += u64::from(*quantity);
            }

            if *status != ItemStatus::Placed {
                continue;
            }
            let Some(parent_id) = &entity.parent_id else {
                continue;
            };
            index
                .container_tags
                .entry(parent_id.clone())
                .or_default()
                .extend(tags.iter().cloned());
            *index
                .container_quantities
                .entry(parent_id.clone())
                .or_default() += u64::from(*quantity);
        }
        index
    }

    /// Tag -> total quantity over all Items, for tag-cloud style browsing.
    pub fn tag_quantities(&self) -> &BTreeMap<String, u64> {
        &self.tag_quantities
    }

    pub fn tag_quantity(&self, tag: &str) -> u64 {
        self.tag_quantities.get(tag).copied().unwrap_or(0)
    }

    /// Tags present among the placed Items of one container.
    pub fn container_tags(&self, container_id: &str) -> Option<&BTreeSet<String>> {
        self.container_tags.get(container_id)
    }

    /// Total quantity of placed Items held by one container.
    pub fn placed_quantity(&self, container_id: &str) -> u64 {
        self.container_quantities
            .get(container_id)
            .copied()
            .unwrap_or(0)
    }

    /// Suggests a container for an Item carrying `candidate_tags`.
    ///
    /// Each container scores one point per candidate tag present in its
    /// tag set; the strictly best score wins and ties keep the first
    /// container encountered (arbitrary order). Containers parented under
    /// the misc root are excluded. Returns `None` when nothing scores.
    pub fn suggest_container(
        &self,
        state: &AppState,
        candidate_tags: &BTreeSet<String>,
    ) -> Option<EntityId> {
        let mut best: Option<&EntityId> = None;
        let mut best_score = 0usize;
        for (container_id, tags) in &self.container_tags {
            if parented_under_misc_root(state, container_id) {
                continue;
            }
            let score = candidate_tags
                .iter()
                .filter(|tag| tags.contains(tag.as_str()))
                .count();
            if score > best_score {
                best_score = score;
                best = Some(container_id);
            }
        }
        best.cloned()
    }
}

/// A container is only hidden from suggestions when it is known to sit in
/// the misc pool; unknown parents stay eligible.
fn parented_under_misc_root(state: &AppState, container_id: &str) -> bool {
    state
        .get(container_id)
        .and_then(|entity| entity.parent_id.as_deref())
        == Some(MISC_ROOT_ID)
}
