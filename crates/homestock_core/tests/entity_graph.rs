use homestock_core::{
    dispatch, Action, AppState, Entity, EntityKind, ItemStatus, MISC_ROOT_ID, ROOT_ID,
};
use std::collections::BTreeSet;

fn room(id: &str, parent: &str) -> Entity {
    Entity::with_id(id, EntityKind::Room, id, Some(parent.to_string()))
}

fn item(id: &str, parent: &str, tags: &[&str], status: ItemStatus) -> Entity {
    Entity::with_id(
        id,
        EntityKind::Item {
            quantity: 1,
            tags: tags.iter().map(|t| t.to_string()).collect::<BTreeSet<_>>(),
            status,
        },
        id,
        Some(parent.to_string()),
    )
}

fn save(state: AppState, entity: Entity) -> AppState {
    dispatch(state, Action::SaveEntity { entity })
}

#[test]
fn bootstrap_exposes_fixed_roots_and_laundry_containers() {
    let state = AppState::bootstrap();
    for id in [
        ROOT_ID,
        MISC_ROOT_ID,
        "laundry_dirty",
        "laundry_washing",
        "laundry_drying",
        "laundry_clean",
    ] {
        assert!(state.contains(id), "missing fixed node {id}");
    }
    assert_eq!(state.get("laundry_dirty").unwrap().parent_id.as_deref(), Some(ROOT_ID));
}

#[test]
fn save_entity_inserts_then_fully_replaces() {
    let mut state = AppState::bootstrap();
    state = save(state, room("garage", ROOT_ID));
    assert_eq!(state.get("garage").unwrap().name, "garage");

    let mut renamed = room("garage", ROOT_ID);
    renamed.name = "Garage".to_string();
    state = save(state, renamed);
    assert_eq!(state.get("garage").unwrap().name, "Garage");
    assert_eq!(state.children(ROOT_ID).iter().filter(|e| e.id == "garage").count(), 1);
}

#[test]
fn save_entity_coerces_laundry_status_without_the_tag() {
    let state = save(
        AppState::bootstrap(),
        item("sock", MISC_ROOT_ID, &["clothes"], ItemStatus::Washing),
    );
    assert_eq!(state.get("sock").unwrap().status(), Some(ItemStatus::CleanUnplaced));
}

#[test]
fn delete_entities_removes_the_full_descendant_closure() {
    let mut state = AppState::bootstrap();
    state = save(state, room("garage", ROOT_ID));
    state = save(state, room("shelf", "garage"));
    state = save(state, room("box", "shelf"));
    state = save(state, item("bolt", "box", &[], ItemStatus::Placed));
    state = save(state, room("kitchen", ROOT_ID));

    state = dispatch(
        state,
        Action::DeleteEntities {
            ids: vec!["garage".to_string()],
        },
    );

    for id in ["garage", "shelf", "box", "bolt"] {
        assert!(!state.contains(id), "{id} should be deleted");
    }
    assert!(state.contains("kitchen"));

    // No survivor may reference a deleted parent.
    for entity in state.entities() {
        if let Some(parent_id) = &entity.parent_id {
            assert!(state.contains(parent_id), "dangling parent on {}", entity.id);
        }
    }
}

#[test]
fn delete_entities_handles_overlapping_seeds_in_one_step() {
    let mut state = AppState::bootstrap();
    state = save(state, room("garage", ROOT_ID));
    state = save(state, room("shelf", "garage"));
    state = save(state, room("box", "shelf"));

    state = dispatch(
        state,
        Action::DeleteEntities {
            ids: vec!["garage".to_string(), "shelf".to_string()],
        },
    );

    assert!(!state.contains("garage"));
    assert!(!state.contains("shelf"));
    assert!(!state.contains("box"));
}

#[test]
fn delete_of_a_missing_id_is_a_silent_noop() {
    let before = AppState::bootstrap();
    let after = dispatch(
        before.clone(),
        Action::DeleteEntities {
            ids: vec!["ghost".to_string()],
        },
    );
    assert_eq!(after, before);
}
