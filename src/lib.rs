//! Core of the "do I need an upgrade" checker: parses published game
//! requirement blurbs, fuzzily resolves hardware names against a scored
//! catalog, compares a machine's specs per component, and reduces the
//! result to a verdict plus a frame-rate estimate.
//!
//! Everything here is pure and deterministic over already-fetched
//! strings and records; network fetching, caching, and usage metering
//! live in the collaborator modules (`sources`, `ratelimit`) and the
//! CLI.

pub mod catalog;
pub mod compare;
pub mod fps;
pub mod matcher;
pub mod parser;
pub mod payload;
pub mod ratelimit;
pub mod sources;
pub mod tracing;
pub mod types;
pub mod verdict;

pub mod util {
    pub mod env;
}

use catalog::HardwareCatalog;
use types::{ComparisonItem, FpsEstimate, UserSpecs, VerdictResult};

/// Full comparison output for one machine against one game.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    pub items: Vec<ComparisonItem>,
    pub verdict: VerdictResult,
    pub fps: FpsEstimate,
}

/// Runs the whole pipeline: parse both requirement tiers, compare every
/// component, aggregate the verdict, and estimate frame rate.
pub fn check_system(
    specs: &UserSpecs,
    minimum_html: Option<&str>,
    recommended_html: Option<&str>,
    catalog: &HardwareCatalog,
) -> CheckReport {
    let parsed = parser::parse_requirements(minimum_html, recommended_html);
    let (items, scores) = compare::compare_specs(
        specs,
        parsed.minimum.as_ref(),
        parsed.recommended.as_ref(),
        catalog,
    );
    let verdict = verdict::compute_verdict(&items);
    let fps = fps::estimate_fps(&scores);
    CheckReport {
        items,
        verdict,
        fps,
    }
}
