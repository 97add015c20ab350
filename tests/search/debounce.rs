//! Keystroke bursts driven through the board's scheduler

use crate::common::*;
use std::time::{Duration, Instant};

/// Feed `(offset_ms, keyword)` keystrokes, polling every millisecond, and
/// collect what the board would have searched.
fn replay<S: stickers::KeyValueStore>(
    board: &StickerBoard<S>,
    keystrokes: &[(u64, &str)],
    until_ms: u64,
) -> Vec<(String, usize)> {
    let start = Instant::now();
    let mut scheduler = board.scheduler();
    let mut fired = Vec::new();
    let mut pending = keystrokes.iter().peekable();

    for ms in 0..=until_ms {
        let now = start + Duration::from_millis(ms);
        while let Some((_, keyword)) = pending.next_if(|(at, _)| *at == ms) {
            scheduler.on_input(*keyword, now);
        }
        if let Some(keyword) = scheduler.poll(now) {
            let hits = board.search(&keyword).len();
            fired.push((keyword, hits));
        }
    }
    fired
}

#[test]
fn burst_runs_only_last_keyword() {
    let board = board_with(ZOO);
    let fired = replay(&board, &[(0, "d"), (50, "do"), (120, "dog")], 1000);
    assert_eq!(fired, vec![("dog".to_string(), 4)]);
}

#[test]
fn separate_bursts_each_fire() {
    let board = board_with(ZOO);
    let fired = replay(&board, &[(0, "c"), (500, "ca"), (550, "cat")], 1500);
    assert_eq!(
        fired,
        vec![("c".to_string(), 4), ("cat".to_string(), 4)]
    );
}

#[test]
fn distinct_until_changed_swallows_repeat() {
    let config = StickersConfig {
        distinct_until_changed: true,
        ..StickersConfig::default()
    };
    let board = board_with_config(&config, ZOO);
    let fired = replay(&board, &[(0, "dog"), (400, "do"), (410, "dog")], 1200);
    assert_eq!(fired, vec![("dog".to_string(), 4)]);
}

#[test]
fn quiet_period_comes_from_config() {
    let config = StickersConfig {
        debounce_ms: 500,
        ..StickersConfig::default()
    };
    let board = board_with_config(&config, ZOO);
    let fired = replay(&board, &[(0, "a"), (300, "ap")], 700);
    assert!(fired.is_empty());
    let fired = replay(&board, &[(0, "a"), (300, "ap")], 800);
    assert_eq!(fired, vec![("ap".to_string(), 2)]);
}
