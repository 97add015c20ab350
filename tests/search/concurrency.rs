//! Readers, reindexers and recency writers sharing one board

use crate::common::*;
use std::sync::Arc;

#[test]
fn readers_see_whole_indexes_during_reindex() {
    // Version n has files f{n}_0 .. f{n}_{n-1}, all tagged "dog", so a
    // consistent snapshot returns exactly n hits sharing one prefix.
    let board = Arc::new(board_with("f1_0,dog"));

    let b = Arc::clone(&board);
    let torn = run_concurrent(6, move |thread| {
        if thread == 0 {
            for n in 2..=50usize {
                let manifest: String = (0..n).map(|i| format!("f{}_{},dog\n", n, i)).collect();
                b.install(TagIndex::build(&parse_manifest(&manifest)));
            }
            0
        } else {
            (0..200)
                .filter(|_| {
                    let hits = b.search("dog");
                    let version = hits[0].file_id.split('_').next().unwrap_or("").to_string();
                    let expected: usize = version[1..].parse().unwrap_or(0);
                    let prefix = format!("{}_", version);
                    hits.len() != expected || !hits.iter().all(|e| e.file_id.starts_with(&prefix))
                })
                .count()
        }
    });
    assert_eq!(torn.iter().sum::<usize>(), 0);
    assert_eq!(board.index().file_count(), 50);
}

#[test]
fn concurrent_record_use_loses_nothing() {
    let config = StickersConfig {
        recent_capacity: 100,
        ..StickersConfig::default()
    };
    let board = Arc::new(board_with_config(&config, DOGS));

    let b = Arc::clone(&board);
    run_concurrent(8, move |thread| {
        for i in 0..10 {
            b.record_use(format!("t{}_{}", thread, i).as_str()).unwrap();
        }
    });

    let recent = board.tracker().recent_ids(None);
    assert_eq!(recent.len(), 80);
    let distinct: std::collections::HashSet<_> = recent.iter().collect();
    assert_eq!(distinct.len(), 80);
}
