//! Canonical hardware/OS names with relative performance scores.
//!
//! Three independent namespaces (CPU, GPU, OS). Names are unique within a
//! namespace; scores are monotonic proxies for relative performance and are
//! only comparable inside the same namespace. The catalog is an immutable
//! snapshot: callers build one (seeded, or seeded + feed overlay) and hand
//! shared references to the comparison pipeline.

mod merge;
mod seed;

pub use merge::{merge_feed, FeedEntry, MergedBenchmarks};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Which catalog partition a name/score belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    Cpu,
    Gpu,
    Os,
}

/// Immutable name→score snapshot per namespace. Insertion order is kept
/// (IndexMap) so iteration and fuzzy-match candidate order are stable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HardwareCatalog {
    cpu: IndexMap<String, f64>,
    gpu: IndexMap<String, f64>,
    os: IndexMap<String, f64>,
}

impl HardwareCatalog {
    /// Catalog built from the curated seed tables only.
    pub fn seeded() -> Self {
        Self {
            cpu: to_map(seed::CPU_SEED),
            gpu: to_map(seed::GPU_SEED),
            os: to_map(seed::OS_SEED),
        }
    }

    /// Catalog with explicit per-namespace maps (feed overlays, tests).
    pub fn from_maps(
        cpu: IndexMap<String, f64>,
        gpu: IndexMap<String, f64>,
        os: IndexMap<String, f64>,
    ) -> Self {
        Self { cpu, gpu, os }
    }

    fn map(&self, ns: Namespace) -> &IndexMap<String, f64> {
        match ns {
            Namespace::Cpu => &self.cpu,
            Namespace::Gpu => &self.gpu,
            Namespace::Os => &self.os,
        }
    }

    /// Canonical names in a namespace, in insertion order.
    pub fn names(&self, ns: Namespace) -> Vec<&str> {
        self.map(ns).keys().map(String::as_str).collect()
    }

    /// Score for an exact canonical name.
    pub fn score(&self, ns: Namespace, name: &str) -> Option<f64> {
        self.map(ns).get(name).copied()
    }

    /// Iterate `(name, score)` pairs in a namespace.
    pub fn entries(&self, ns: Namespace) -> impl Iterator<Item = (&str, f64)> {
        self.map(ns).iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self, ns: Namespace) -> usize {
        self.map(ns).len()
    }

    pub fn is_empty(&self, ns: Namespace) -> bool {
        self.map(ns).is_empty()
    }
}

fn to_map(entries: &[(&str, f64)]) -> IndexMap<String, f64> {
    entries
        .iter()
        .map(|(name, score)| (name.to_string(), *score))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_catalog_has_all_namespaces() {
        let catalog = HardwareCatalog::seeded();
        assert_eq!(catalog.len(Namespace::Cpu), 59);
        assert_eq!(catalog.len(Namespace::Gpu), 53);
        assert_eq!(catalog.len(Namespace::Os), 15);
    }

    #[test]
    fn scores_resolve_by_exact_name() {
        let catalog = HardwareCatalog::seeded();
        assert_eq!(
            catalog.score(Namespace::Gpu, "NVIDIA GeForce RTX 4090"),
            Some(100.0)
        );
        assert_eq!(catalog.score(Namespace::Cpu, "AMD Ryzen 9 7950X"), Some(100.0));
        assert_eq!(catalog.score(Namespace::Gpu, "AMD Ryzen 9 7950X"), None);
    }

    #[test]
    fn names_are_unique_within_namespace() {
        let catalog = HardwareCatalog::seeded();
        for ns in [Namespace::Cpu, Namespace::Gpu, Namespace::Os] {
            let names = catalog.names(ns);
            let mut deduped = names.clone();
            deduped.sort_unstable();
            deduped.dedup();
            assert_eq!(names.len(), deduped.len());
        }
    }

    #[test]
    fn os_scores_order_versions_within_family() {
        let catalog = HardwareCatalog::seeded();
        let win10 = catalog.score(Namespace::Os, "Windows 10").unwrap();
        let win11 = catalog.score(Namespace::Os, "Windows 11").unwrap();
        assert!(win11 > win10);
        let ventura = catalog.score(Namespace::Os, "macOS Ventura").unwrap();
        let sonoma = catalog.score(Namespace::Os, "macOS Sonoma").unwrap();
        assert!(sonoma > ventura);
    }
}
