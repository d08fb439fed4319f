use homestock_core::{
    dispatch, Action, AppState, Entity, EntityKind, ItemStatus, LAUNDRY_TAG, MISC_ROOT_ID, ROOT_ID,
};
use std::collections::BTreeSet;

fn tag_set(tags: &[&str]) -> BTreeSet<String> {
    tags.iter().map(|t| t.to_string()).collect()
}

fn item(id: &str, tags: &[&str], status: ItemStatus) -> Entity {
    Entity::with_id(
        id,
        EntityKind::Item {
            quantity: 1,
            tags: tag_set(tags),
            status,
        },
        id,
        Some(ROOT_ID.to_string()),
    )
}

fn save(state: AppState, entity: Entity) -> AppState {
    dispatch(state, Action::SaveEntity { entity })
}

fn tags_of(state: &AppState, id: &str) -> BTreeSet<String> {
    state.get(id).unwrap().tags().unwrap().clone()
}

#[test]
fn rename_laundry_tag_away_downgrades_dirty_items() {
    let mut state = save(
        AppState::bootstrap(),
        item("sock", &[LAUNDRY_TAG], ItemStatus::Dirty),
    );
    state = dispatch(
        state,
        Action::RenameTag {
            old_name: LAUNDRY_TAG.to_string(),
            new_name: "fabric".to_string(),
        },
    );

    assert_eq!(tags_of(&state, "sock"), tag_set(&["fabric"]));
    assert_eq!(
        state.get("sock").unwrap().status(),
        Some(ItemStatus::CleanUnplaced)
    );
}

#[test]
fn rename_tag_collapses_with_an_existing_tag() {
    let mut state = save(
        AppState::bootstrap(),
        item("sock", &["wool", "warm"], ItemStatus::Placed),
    );
    state = dispatch(
        state,
        Action::RenameTag {
            old_name: "wool".to_string(),
            new_name: "warm".to_string(),
        },
    );
    assert_eq!(tags_of(&state, "sock"), tag_set(&["warm"]));
}

#[test]
fn rename_tag_noops_on_equal_or_empty_names() {
    let before = save(
        AppState::bootstrap(),
        item("sock", &["wool"], ItemStatus::Placed),
    );

    for (old_name, new_name) in [("wool", "wool"), ("", "warm"), ("wool", "")] {
        let after = dispatch(
            before.clone(),
            Action::RenameTag {
                old_name: old_name.to_string(),
                new_name: new_name.to_string(),
            },
        );
        assert_eq!(after, before);
    }
}

#[test]
fn merge_tags_collapses_sources_into_target_without_duplicates() {
    let mut state = save(
        AppState::bootstrap(),
        item("sock", &["red", "sock"], ItemStatus::Placed),
    );
    state = save(state, item("scarf", &["crimson"], ItemStatus::Placed));
    state = save(state, item("hat", &["scarlet", "red"], ItemStatus::Placed));

    state = dispatch(
        state,
        Action::MergeTags {
            source_tags: vec!["red".to_string(), "crimson".to_string()],
            target_tag: "scarlet".to_string(),
        },
    );

    assert_eq!(tags_of(&state, "sock"), tag_set(&["sock", "scarlet"]));
    assert_eq!(tags_of(&state, "scarf"), tag_set(&["scarlet"]));
    assert_eq!(tags_of(&state, "hat"), tag_set(&["scarlet"]));
}

#[test]
fn merge_tags_does_not_recheck_the_laundry_rule() {
    // Known asymmetry with rename/delete/bulk remove; see DESIGN.md.
    let mut state = save(
        AppState::bootstrap(),
        item("sock", &[LAUNDRY_TAG], ItemStatus::Dirty),
    );
    state = dispatch(
        state,
        Action::MergeTags {
            source_tags: vec![LAUNDRY_TAG.to_string()],
            target_tag: "fabric".to_string(),
        },
    );

    assert_eq!(tags_of(&state, "sock"), tag_set(&["fabric"]));
    assert_eq!(state.get("sock").unwrap().status(), Some(ItemStatus::Dirty));
}

#[test]
fn delete_laundry_tag_downgrades_washing_items() {
    let mut state = save(
        AppState::bootstrap(),
        item("shirt", &[LAUNDRY_TAG, "cotton"], ItemStatus::Washing),
    );
    state = dispatch(
        state,
        Action::DeleteTag {
            tag_name: LAUNDRY_TAG.to_string(),
        },
    );

    assert_eq!(tags_of(&state, "shirt"), tag_set(&["cotton"]));
    assert_eq!(
        state.get("shirt").unwrap().status(),
        Some(ItemStatus::CleanUnplaced)
    );
}

#[test]
fn delete_of_an_ordinary_tag_keeps_status() {
    let mut state = save(
        AppState::bootstrap(),
        item("shirt", &[LAUNDRY_TAG, "cotton"], ItemStatus::Washing),
    );
    state = dispatch(
        state,
        Action::DeleteTag {
            tag_name: "cotton".to_string(),
        },
    );
    assert_eq!(state.get("shirt").unwrap().status(), Some(ItemStatus::Washing));
}

#[test]
fn bulk_add_tags_applies_only_to_listed_items() {
    let mut state = save(
        AppState::bootstrap(),
        item("sock", &["wool"], ItemStatus::Placed),
    );
    state = save(state, item("hat", &[], ItemStatus::Placed));

    state = dispatch(
        state,
        Action::BulkAddTags {
            ids: vec!["sock".to_string(), "ghost".to_string()],
            tags: vec!["winter".to_string(), "wool".to_string()],
        },
    );

    assert_eq!(tags_of(&state, "sock"), tag_set(&["wool", "winter"]));
    assert!(tags_of(&state, "hat").is_empty());
}

#[test]
fn bulk_remove_tags_rechecks_the_laundry_rule() {
    let mut state = save(
        AppState::bootstrap(),
        item("sock", &[LAUNDRY_TAG, "wool"], ItemStatus::Dirty),
    );
    state = dispatch(
        state,
        Action::BulkRemoveTags {
            ids: vec!["sock".to_string()],
            tags: vec![LAUNDRY_TAG.to_string()],
        },
    );

    assert_eq!(tags_of(&state, "sock"), tag_set(&["wool"]));
    assert_eq!(
        state.get("sock").unwrap().status(),
        Some(ItemStatus::CleanUnplaced)
    );
}

#[test]
fn bulk_remove_of_ordinary_tags_keeps_laundry_status() {
    let mut state = save(
        AppState::bootstrap(),
        item("sock", &[LAUNDRY_TAG, "wool"], ItemStatus::Dirty),
    );
    state = dispatch(
        state,
        Action::BulkRemoveTags {
            ids: vec!["sock".to_string()],
            tags: vec!["wool".to_string()],
        },
    );
    assert_eq!(state.get("sock").unwrap().status(), Some(ItemStatus::Dirty));
}

#[test]
fn bulk_replace_of_the_laundry_tag_downgrades_status() {
    let mut state = save(
        AppState::bootstrap(),
        item("sock", &[LAUNDRY_TAG], ItemStatus::Washing),
    );
    state = save(state, item("hat", &[LAUNDRY_TAG], ItemStatus::Washing));

    state = dispatch(
        state,
        Action::BulkReplaceTag {
            ids: vec!["sock".to_string()],
            old_tag: LAUNDRY_TAG.to_string(),
            new_tag: "fabric".to_string(),
        },
    );

    assert_eq!(tags_of(&state, "sock"), tag_set(&["fabric"]));
    assert_eq!(
        state.get("sock").unwrap().status(),
        Some(ItemStatus::CleanUnplaced)
    );
    // The hat was not in the selection.
    assert_eq!(state.get("hat").unwrap().status(), Some(ItemStatus::Washing));
}

#[test]
fn bulk_replace_noops_on_equal_or_empty_tags() {
    let before = save(
        AppState::bootstrap(),
        item("sock", &["wool"], ItemStatus::Placed),
    );
    let after = dispatch(
        before.clone(),
        Action::BulkReplaceTag {
            ids: vec!["sock".to_string()],
            old_tag: "wool".to_string(),
            new_tag: "wool".to_string(),
        },
    );
    assert_eq!(after, before);
}

#[test]
fn tag_actions_never_touch_non_items() {
    let mut state = save(
        AppState::bootstrap(),
        Entity::with_id(
            "linkref",
            EntityKind::LaundryLink {
                linked_tag: "wool".to_string(),
            },
            "Wool link",
            Some(MISC_ROOT_ID.to_string()),
        ),
    );
    state = dispatch(
        state,
        Action::RenameTag {
            old_name: "wool".to_string(),
            new_name: "warm".to_string(),
        },
    );

    match &state.get("linkref").unwrap().kind {
        EntityKind::LaundryLink { linked_tag } => assert_eq!(linked_tag, "wool"),
        other => panic!("expected laundry link, got {other:?}"),
    }
}
