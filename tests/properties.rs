use kimono_coordinator::{
    Category, SelectableItem, SelectionIndex, SwipeConfig, SwipeDirection, SwipeLayer, SwipeTracker,
    input::SwipeRelease,
};
use proptest::prelude::*;

fn selection(len: usize) -> SelectionIndex {
    let items = (0..len)
        .map(|i| SelectableItem::new(format!("item-{i}"), format!("{i}"), "#000000"))
        .collect();
    SelectionIndex::new(Category::Kimono, items).unwrap()
}

proptest! {
    #[test]
    fn index_stays_in_range(len in 1usize..12, steps in proptest::collection::vec(any::<bool>(), 0..64)) {
        let mut selection = selection(len);
        for forward in steps {
            if forward { selection.advance() } else { selection.retreat() }
            prop_assert!(selection.current_index() < len);
        }
    }

    #[test]
    fn advance_and_retreat_undo_each_other(len in 1usize..12, start in 0usize..12, forward_first in any::<bool>()) {
        let mut selection = selection(len);
        let start = start % len;
        selection.set_index(start).unwrap();
        if forward_first {
            selection.advance();
            selection.retreat();
        } else {
            selection.retreat();
            selection.advance();
        }
        prop_assert_eq!(selection.current_index(), start);
    }

    #[test]
    fn offsets_within_threshold_cancel(offset in -50.0f32..=50.0) {
        let mut layer = SwipeLayer::new(SwipeConfig::immediate());
        layer.start(500.0, 0.0);
        layer.drag_to(500.0 + offset, 0.1);
        prop_assert_eq!(layer.end(0.2), None);
        prop_assert_eq!(layer.offset_x(), 0.0);
    }

    #[test]
    fn offsets_beyond_threshold_commit_once(magnitude in 50.01f32..1000.0, rightward in any::<bool>()) {
        let offset = if rightward { magnitude } else { -magnitude };
        let mut tracker = SwipeTracker::new(50.0);
        tracker.start(0.0);
        tracker.drag_to(offset);
        let expected = if rightward { SwipeDirection::Right } else { SwipeDirection::Left };
        prop_assert_eq!(tracker.end(), Some(SwipeRelease::Commit(expected)));
        prop_assert_eq!(tracker.end(), None);
    }

    #[test]
    fn move_without_start_changes_nothing(x in -1000.0f32..1000.0) {
        let mut tracker = SwipeTracker::new(50.0);
        let before = tracker.clone();
        tracker.drag_to(x);
        prop_assert_eq!(tracker, before);
    }
}
