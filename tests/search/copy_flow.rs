//! Copy-to-clipboard flow with on-disk images

use crate::common::*;
use stickers::{
    Clipboard, FileClipboard, FsImageSource, ImageSource, MemoryClipboard, Result, StickerImage,
};

struct RejectingClipboard;

impl Clipboard for RejectingClipboard {
    fn write(&self, _image: &StickerImage) -> Result<()> {
        Err(Error::copy_failure("", "clipboard unavailable"))
    }
}

#[test]
fn copy_writes_bytes_and_records_use() {
    let fixture = Fixture::new(ZOO);
    fixture.add_image("dog1.png", b"\x89PNG dog");
    let board = StickerBoard::open(&fixture.config()).unwrap();

    let out = fixture.path().join("clipboard.bin");
    let image = board
        .copy(
            TagEntry::new("happy", "dog1.png"),
            &FsImageSource::new(fixture.path()),
            &FileClipboard::new(&out),
        )
        .unwrap();

    assert_eq!(image.mime_type, "image/png");
    assert_eq!(std::fs::read(&out).unwrap(), b"\x89PNG dog".to_vec());
    assert_eq!(board.search("")[0], TagEntry::new("happy", "dog1.png"));
}

#[test]
fn missing_image_is_copy_failure_and_not_recorded() {
    let fixture = Fixture::new(ZOO);
    let board = StickerBoard::open(&fixture.config()).unwrap();

    let err = board
        .copy(
            "dog2.png",
            &FsImageSource::new(fixture.path()),
            &MemoryClipboard::new(),
        )
        .unwrap_err();
    assert!(matches!(err, Error::CopyFailure { .. }));
    assert!(board.recent(None).is_empty());
}

#[test]
fn clipboard_failure_keeps_previous_recents() {
    let fixture = Fixture::new(ZOO);
    fixture.add_image("cat1.png", b"cat");
    let board = StickerBoard::open(&fixture.config()).unwrap();
    board.record_use("dog1.png").unwrap();

    let images = FsImageSource::new(fixture.path());
    assert!(images.fetch("cat1.png").is_ok());
    let err = board
        .copy("cat1.png", &images, &RejectingClipboard)
        .unwrap_err();
    assert!(matches!(err, Error::CopyFailure { .. }));
    assert_eq!(board.tracker().recent_ids(None), vec!["dog1.png"]);
}

#[test]
fn dyn_collaborators_are_accepted() {
    let fixture = Fixture::new(ZOO);
    fixture.add_image("apple.png", b"apple");
    let board = StickerBoard::open(&fixture.config()).unwrap();

    let images: Box<dyn ImageSource> = Box::new(FsImageSource::new(fixture.path()));
    let clipboard: Box<dyn Clipboard> = Box::new(MemoryClipboard::new());
    board.copy("apple.png", &*images, &*clipboard).unwrap();
    assert_eq!(board.tracker().recent_ids(None), vec!["apple.png"]);
}
