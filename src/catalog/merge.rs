//! Benchmark-feed overlay: normalize raw feed scores into the 10-100 band
//! and merge them over the curated seed so curated entries always survive.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One usable entry from an external benchmark feed, already reduced to a
/// single positive raw score by the collaborator that fetched it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub name: String,
    pub score: f64,
}

/// The merged catalog payload in the wire format the browser consumes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedBenchmarks {
    pub cpu_list: Vec<String>,
    pub gpu_list: Vec<String>,
    pub cpu_scores: IndexMap<String, f64>,
    pub gpu_scores: IndexMap<String, f64>,
}

/// Normalize feed entries to a 10-100 relative band and overlay them on a
/// curated map. Feed scores win on name collision; every curated entry is
/// retained. Returned list puts feed names first, then curated names not
/// already present.
pub fn merge_feed(
    curated: &IndexMap<String, f64>,
    feed: &[FeedEntry],
) -> (Vec<String>, IndexMap<String, f64>) {
    let normalized = normalize(feed);

    let mut scores = curated.clone();
    for (name, score) in &normalized {
        scores.insert(name.clone(), *score);
    }

    let mut list: Vec<String> = normalized.keys().cloned().collect();
    for name in curated.keys() {
        if !normalized.contains_key(name) {
            list.push(name.clone());
        }
    }

    debug!(
        feed_entries = feed.len(),
        usable = normalized.len(),
        merged = scores.len(),
        "merged benchmark feed over curated seed"
    );

    (list, scores)
}

/// Scale raw scores so the fastest entry lands at 100 and everything else
/// keeps its relative position above a floor of 10. Entries without a name
/// or with a non-positive score are dropped.
fn normalize(feed: &[FeedEntry]) -> IndexMap<String, f64> {
    let usable: Vec<&FeedEntry> = feed
        .iter()
        .filter(|e| !e.name.trim().is_empty() && e.score > 0.0)
        .collect();

    let Some(max) = usable
        .iter()
        .map(|e| e.score)
        .max_by(|a, b| a.total_cmp(b))
    else {
        return IndexMap::new();
    };

    usable
        .into_iter()
        .map(|e| (e.name.clone(), (e.score / max * 90.0 + 10.0).round()))
        .collect()
}
