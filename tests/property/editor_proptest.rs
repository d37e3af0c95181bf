//! Property-based tests for editor state: ordering, filtering and rollback

use std::collections::HashSet;

use proptest::prelude::*;
use superior_editor::egui_app::EditorState;
use serde_json::Value;
use superior_editor::shared::{Rank, SnapshotView, Tag};

fn rank_strategy() -> impl Strategy<Value = Rank> {
    ("[a-z]{1,8}", "[A-Za-z ]{1,12}", -50i32..1000, any::<bool>()).prop_map(
        |(id, name, weight, default)| Rank {
            weight,
            default,
            ..Rank::new(id, name)
        },
    )
}

fn tag_strategy() -> impl Strategy<Value = Tag> {
    ("[a-z]{1,8}", "[A-Za-z ]{1,12}", -10i32..100).prop_map(|(id, name, priority)| Tag {
        priority,
        ..Tag::new(id, name)
    })
}

fn view_strategy() -> impl Strategy<Value = SnapshotView> {
    (
        prop::collection::vec(rank_strategy(), 0..12),
        prop::collection::vec(tag_strategy(), 0..12),
    )
        .prop_map(|(mut ranks, mut tags)| {
            let mut seen = HashSet::new();
            ranks.retain(|r| seen.insert(r.id.clone()));
            let mut seen = HashSet::new();
            tags.retain(|t| seen.insert(t.id.clone()));
            SnapshotView {
                ranks,
                tags,
                last_updated: Some(serde_json::Value::from(1)),
                version: Some(serde_json::Value::from(1)),
                ..SnapshotView::default()
            }
        })
}

proptest! {
    #[test]
    fn test_displayed_ranks_ordered_by_weight(view in view_strategy()) {
        let mut state = EditorState::new();
        state.apply_snapshot(view.clone());

        prop_assert_eq!(state.ranks().len(), view.ranks.len());
        for pair in state.ranks().windows(2) {
            prop_assert!(pair[0].weight >= pair[1].weight);
        }
        for pair in state.tags().windows(2) {
            prop_assert!(pair[0].priority >= pair[1].priority);
        }
    }

    #[test]
    fn test_filter_is_case_insensitive_substring(view in view_strategy(), needle in "[a-zA-Z]{0,3}") {
        let mut state = EditorState::new();
        state.apply_snapshot(view);
        state.filter = needle.clone();

        let lower = needle.to_lowercase();
        let expected: Vec<&str> = state
            .ranks()
            .iter()
            .filter(|r| r.id.to_lowercase().contains(&lower) || r.name.to_lowercase().contains(&lower))
            .map(|r| r.id.as_str())
            .collect();
        let visible: Vec<&str> = state.visible_ranks().iter().map(|r| r.id.as_str()).collect();
        prop_assert_eq!(visible, expected);
    }

    #[test]
    fn test_delete_then_fail_restores_snapshot(view in view_strategy(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!view.ranks.is_empty());
        let target = view.ranks[pick.index(view.ranks.len())].id.clone();

        let mut state = EditorState::new();
        state.apply_snapshot(view);
        let before = state.ranks().to_vec();

        let edit = state.delete_rank(&target).unwrap();
        prop_assert!(state.rank(&target).is_none());

        state.begin_sync(edit).unwrap();
        state.fail(edit, "rejected").unwrap();
        prop_assert_eq!(state.ranks(), before.as_slice());
    }

    #[test]
    fn test_new_snapshot_replaces_confirmed_edits(
        view in view_strategy(),
        next in view_strategy(),
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!view.ranks.is_empty());
        let target = view.ranks[pick.index(view.ranks.len())].id.clone();

        let mut state = EditorState::new();
        state.apply_snapshot(view);
        let edit = state.delete_rank(&target).unwrap();
        state.begin_sync(edit).unwrap();
        state.confirm(edit, 1).unwrap();

        let next = SnapshotView { version: Some(Value::from(2)), ..next };
        prop_assert!(state.apply_snapshot(next.clone()));

        let mut expected = next.ranks;
        expected.sort_by(|a, b| b.weight.cmp(&a.weight).then_with(|| a.id.cmp(&b.id)));
        prop_assert_eq!(state.ranks(), expected.as_slice());
        prop_assert!(state.edit(edit).is_none());
    }
}
