//! Default view policies through the board

use crate::common::*;
use std::collections::HashSet;

#[test]
fn fallback_bucket_until_something_is_used() {
    let board = board_with(ZOO);
    assert_eq!(
        board.search(""),
        vec![
            TagEntry::new("angry", "cat2.png"),
            TagEntry::new("apple", "apple.png"),
        ]
    );

    board.record_use(TagEntry::new("sad", "dog2.png")).unwrap();
    board.record_use(TagEntry::new("Cool", "cat1.png")).unwrap();
    assert_eq!(
        board.search(""),
        vec![
            TagEntry::new("Cool", "cat1.png"),
            TagEntry::new("sad", "dog2.png"),
        ]
    );
}

#[test]
fn custom_fallback_bucket() {
    let mut config = StickersConfig::default();
    config.default_view.fallback_bucket = "s".to_string();
    let board = board_with_config(&config, ZOO);
    assert_eq!(board.default_view(), vec![TagEntry::new("sad", "dog2.png")]);
}

#[test]
fn random_fill_puts_recents_first_without_repeats() {
    let board = board_with_config(&random_fill_config(3), ZOO);
    board.record_use("corgi.png").unwrap();
    board.record_use("dog1.png").unwrap();

    for _ in 0..20 {
        let view = board.default_view();
        assert_eq!(view[0].file_id, "dog1.png");
        assert_eq!(view[1].file_id, "corgi.png");
        assert!(view.len() <= 2 + 3);
        let distinct: HashSet<_> = view.iter().map(|e| e.file_id.as_str()).collect();
        assert_eq!(distinct.len(), view.len());
    }
}

#[test]
fn random_fill_covers_everything_when_sample_exceeds_population() {
    let board = board_with_config(&random_fill_config(32), ZOO);
    board.record_use("apple.png").unwrap();
    assert_eq!(
        file_ids(&board.default_view()),
        vec![
            "apple.png",
            "dog1.png",
            "dog2.png",
            "cat1.png",
            "cat2.png",
            "corgi.png"
        ]
    );
}

#[test]
fn recent_ids_show_their_first_tag() {
    let board = board_with(ZOO);
    board.record_use("corgi.png").unwrap();
    board.record_use("deleted.png").unwrap();
    assert_eq!(
        board.default_view(),
        vec![
            TagEntry::new("", "deleted.png"),
            TagEntry::new("Corgi", "corgi.png"),
        ]
    );
}
