//! Result list shown when no keyword is typed
//!
//! Two policies:
//!
//! - `RecencyOrFallback`: the recency list verbatim, or one fixed bucket when
//!   nothing has been used yet
//! - `RecencyPlusRandomFill`: the recency list followed by a random sample of
//!   the indexed files, no file appearing twice
//!
//! Sampling takes the caller's RNG so results are reproducible under a seed.

use rand::Rng;
use std::collections::HashSet;
use stickers_core::{DefaultViewPolicy, Selection, TagEntry};
use stickers_search::TagIndex;
use tracing::debug;

/// Builds the default view from an index and a recency list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultViewComposer {
    policy: DefaultViewPolicy,
}

impl DefaultViewComposer {
    /// Composer for `policy`
    pub fn new(policy: DefaultViewPolicy) -> Self {
        DefaultViewComposer { policy }
    }

    /// Active policy
    pub fn policy(&self) -> &DefaultViewPolicy {
        &self.policy
    }

    /// Compose the default view.
    ///
    /// `recent` is most-recent-first. Bare-id selections are shown with the
    /// file's first indexed tag, or an empty tag if the file is gone.
    pub fn compose<R: Rng + ?Sized>(
        &self,
        index: &TagIndex,
        recent: &[Selection],
        rng: &mut R,
    ) -> Vec<TagEntry> {
        let recent: Vec<TagEntry> = recent.iter().map(|s| resolve(index, s)).collect();

        match &self.policy {
            DefaultViewPolicy::RecencyOrFallback { fallback_bucket } => {
                if recent.is_empty() {
                    index.bucket(fallback_bucket).to_vec()
                } else {
                    recent
                }
            }
            DefaultViewPolicy::RecencyPlusRandomFill { sample_size } => {
                let files = index.files();
                let picks = sample_indices(files.len(), *sample_size, rng);
                debug!(
                    target: "stickers::default_view",
                    requested = *sample_size,
                    sampled = picks.len(),
                    population = files.len(),
                    "Random fill"
                );

                let sampled = picks
                    .into_iter()
                    .filter_map(|i| index.primary_entry(&files[i]).cloned());

                let mut seen = HashSet::new();
                recent
                    .into_iter()
                    .chain(sampled)
                    .filter(|e| seen.insert(e.file_id.clone()))
                    .collect()
            }
        }
    }
}

/// Display entry for a recency selection
fn resolve(index: &TagIndex, selection: &Selection) -> TagEntry {
    match selection {
        Selection::Tagged(entry) => entry.clone(),
        Selection::Id(id) => index
            .primary_entry(id)
            .cloned()
            .unwrap_or_else(|| TagEntry::new("", id.as_str())),
    }
}

/// Pick distinct indices into `0..population`.
///
/// When `requested >= population` every index is returned in order.
/// Otherwise up to `2 * requested` uniform draws are made and each unseen
/// index is kept, so fewer than `requested` may come back.
pub fn sample_indices<R: Rng + ?Sized>(
    population: usize,
    requested: usize,
    rng: &mut R,
) -> Vec<usize> {
    if requested >= population {
        return (0..population).collect();
    }

    let mut chosen = Vec::with_capacity(requested);
    let mut seen = HashSet::with_capacity(requested);
    let attempts = requested.saturating_mul(2);
    for _ in 0..attempts {
        if chosen.len() == requested {
            break;
        }
        let i = rng.gen_range(0..population);
        if seen.insert(i) {
            chosen.push(i);
        }
    }
    chosen
}

/// Move items whose file is in `recent_ids` to the front, in recency order;
/// everything else keeps its relative order.
pub fn promote_recent<T, F>(items: Vec<T>, recent_ids: &[&str], file_id: F) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    let mut slots: Vec<Option<T>> = (0..recent_ids.len()).map(|_| None).collect();
    let mut rest = Vec::with_capacity(items.len());

    for item in items {
        let pos = recent_ids.iter().position(|id| *id == file_id(&item));
        match pos {
            Some(pos) if slots[pos].is_none() => slots[pos] = Some(item),
            _ => rest.push(item),
        }
    }

    slots.into_iter().flatten().chain(rest).collect()
}
