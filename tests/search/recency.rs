//! Recency list behaviour through the board

use crate::common::*;
use proptest::prelude::*;
use stickers::{JsonFileStore, RecencyTracker, RECENT_IDS_KEY};

#[test]
fn repeat_use_moves_to_front_without_duplicate() {
    let board = board_with(DOGS);
    board.record_use("dog1").unwrap();
    board.record_use("dog2").unwrap();
    board.record_use("dog1").unwrap();
    assert_eq!(board.tracker().recent_ids(None), vec!["dog1", "dog2"]);
}

#[test]
fn survives_reopen_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    {
        let tracker = RecencyTracker::new(JsonFileStore::new(dir.path()), RECENT_IDS_KEY, 100);
        tracker.record_use("a.png").unwrap();
        tracker.record_use("b.png").unwrap();
    }
    let tracker = RecencyTracker::new(JsonFileStore::new(dir.path()), RECENT_IDS_KEY, 100);
    assert_eq!(tracker.recent_ids(None), vec!["b.png", "a.png"]);

    let raw = std::fs::read_to_string(dir.path().join("recently-used-stickers.json")).unwrap();
    assert_eq!(raw, r#"["b.png","a.png"]"#);
}

#[test]
fn corrupt_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("recentlyUsed.json"), "[[1,2,3]").unwrap();
    let tracker = RecencyTracker::new(JsonFileStore::new(dir.path()), "recentlyUsed", 12);
    assert!(tracker.recent_list(None).is_empty());
}

#[test]
fn mixed_pairs_and_ids_dedupe_by_file() {
    let board = board_with(DOGS);
    board.record_use(TagEntry::new("happy", "dog1")).unwrap();
    board.record_use("dog1").unwrap();
    assert_eq!(board.recent(None), vec![Selection::Id("dog1".to_string())]);
}

fn op_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..20, 0..80)
}

proptest! {
    #[test]
    fn prop_capacity_never_exceeded(ops in op_strategy(), capacity in 1usize..15) {
        let tracker = RecencyTracker::new(MemoryStore::new(), "k", capacity);
        for id in &ops {
            tracker.record_use(format!("s{}", id).as_str()).unwrap();
            prop_assert!(tracker.recent_list(None).len() <= capacity);
        }
    }

    #[test]
    fn prop_front_is_last_used_and_ids_unique(ops in op_strategy()) {
        let tracker = RecencyTracker::new(MemoryStore::new(), "k", 12);
        for id in &ops {
            let id = format!("s{}", id);
            tracker.record_use(id.as_str()).unwrap();
            let ids = tracker.recent_ids(None);
            prop_assert_eq!(&ids[0], &id);
            let unique: std::collections::HashSet<_> = ids.iter().collect();
            prop_assert_eq!(unique.len(), ids.len());
        }
    }
}
