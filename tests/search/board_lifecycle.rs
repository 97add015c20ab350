//! Opening, reindexing and reopening a board from config

use crate::common::*;
use std::sync::Arc;

#[test]
fn open_loads_configured_manifest() {
    let fixture = Fixture::new(ZOO);
    let board = StickerBoard::open(&fixture.config()).unwrap();
    assert_eq!(board.index().file_count(), 6);
    assert_eq!(file_ids(&board.search("sa")), vec!["dog2.png"]);
}

#[test]
fn open_without_manifest_is_load_failure() {
    let dir = tempfile::tempdir().unwrap();
    let config = StickersConfig {
        data_dir: dir.path().to_path_buf(),
        ..StickersConfig::default()
    };
    let err = StickerBoard::open(&config).err().unwrap();
    assert!(matches!(err, Error::LoadFailure { ref location, .. } if location == "stickers.csv"));
}

#[test]
fn manifest_list_overrides_single_manifest() {
    let fixture = Fixture::new("ignored.png,ignored");
    fixture.write("dogs.csv", "dog1.png,dog\n");
    fixture.write("cats.csv", "cat1.png,cat\n");
    fixture.write("manifests.txt", "cats.csv\n\n  dogs.csv  \n");

    let mut config = fixture.config();
    config.manifest_list = Some("manifests.txt".to_string());
    let board = StickerBoard::open(&config).unwrap();

    assert_eq!(board.index().files(), &["cat1.png", "dog1.png"]);
    assert!(board.search("ignored").is_empty());
}

#[test]
fn reindex_picks_up_manifest_changes() {
    let fixture = Fixture::new(DOGS);
    let config = fixture.config();
    let board = StickerBoard::open(&config).unwrap();
    assert!(board.search("cat").is_empty());

    fixture.write("stickers.csv", "cat1,cat\n");
    assert_eq!(board.reindex_from_config(&config).unwrap(), 1);
    assert_eq!(board.search("cat"), vec![TagEntry::new("cat", "cat1")]);
    assert!(board.search("dog").is_empty());
}

#[test]
fn failed_reindex_keeps_serving_previous_index() {
    let fixture = Fixture::new(DOGS);
    let config = fixture.config();
    let board = StickerBoard::open(&config).unwrap();
    let before = board.index();

    std::fs::remove_file(fixture.path().join("stickers.csv")).unwrap();
    assert!(matches!(
        board.reindex_from_config(&config),
        Err(Error::LoadFailure { .. })
    ));
    assert!(Arc::ptr_eq(&before, &board.index()));
    assert_eq!(board.search("do").len(), 2);
}

#[test]
fn recents_persist_across_reopen() {
    let fixture = Fixture::new(ZOO);
    {
        let board = StickerBoard::open(&fixture.config()).unwrap();
        board.record_use(TagEntry::new("Corgi", "corgi.png")).unwrap();
    }
    let board = StickerBoard::open(&fixture.config()).unwrap();
    assert_eq!(board.search(""), vec![TagEntry::new("Corgi", "corgi.png")]);
}

#[test]
fn all_tags_through_board() {
    let board = board_with(ZOO);
    assert_eq!(
        board.all_tags(),
        vec![
            "angry", "apple", "cat", "cute", "Cool", "Corgi", "dog", "doggo", "happy", "red",
            "sad"
        ]
    );
}

#[test]
fn invalid_config_file_is_rejected() {
    let fixture = Fixture::new(DOGS);
    fixture.write(CONFIG_FILE_NAME, "[default_view]\npolicy = \"newest\"\n");
    assert!(matches!(
        StickersConfig::from_file(&fixture.config_path()),
        Err(Error::Config(_))
    ));
}
