//! Per-component comparison of user specs against parsed requirements.
//!
//! `compare_specs` produces the display-ready comparison table and, as a
//! side channel, the resolved catalog scores the FPS estimator consumes.
//! All functions are pure over an immutable catalog snapshot.

pub mod cpu;
pub mod gpu;
pub mod gpu_clean;
pub mod numeric;
pub mod os;

pub use cpu::{compare_cpu, CpuComparison};
pub use gpu::{compare_gpu, GpuComparison};
pub use gpu_clean::clean_gpu_string;
pub use numeric::{compare_numeric, parse_gb};
pub use os::{compare_os, platform_of, Platform};

use crate::catalog::HardwareCatalog;
use crate::types::{
    ComparisonItem, ComparisonStatus, GameRequirements, HardwareScores, UserSpecs,
    NO_REQUIREMENT,
};

/// Split requirement text into its OR-alternatives. Storefronts write both
/// "A or B" and "A | B"; qualifier-only fragments are kept (callers decide
/// whether a fragment is evaluable).
pub(crate) fn split_alternatives(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    for piece in text.split('|') {
        let lower = piece.to_lowercase();
        let mut start = 0;
        let mut found = Vec::new();
        let mut search = 0;
        while let Some(pos) = lower[search..].find(" or ") {
            found.push(search + pos);
            search += pos + 4;
        }
        for pos in found {
            out.push(piece[start..pos].trim());
            start = pos + 4;
        }
        out.push(piece[start..].trim());
    }
    out.retain(|s| !s.is_empty());
    out
}

/// Compare user specs against both requirement tiers.
///
/// A `None` tier behaves as all-empty requirement text: every component
/// passes it trivially (no requirement means automatically satisfied).
pub fn compare_specs(
    user: &UserSpecs,
    minimum: Option<&GameRequirements>,
    recommended: Option<&GameRequirements>,
    catalog: &HardwareCatalog,
) -> (Vec<ComparisonItem>, HardwareScores) {
    let empty = GameRequirements::default();
    let min = minimum.unwrap_or(&empty);
    let rec = recommended.unwrap_or(&empty);

    let mut items = Vec::with_capacity(5);
    let mut scores = HardwareScores::default();

    // Operating System
    items.push(ComparisonItem {
        label: "Operating System".into(),
        user_value: display_text(&user.os),
        min_value: display_req(&min.os),
        rec_value: display_req(&rec.os),
        min_status: compare_os(&user.os, &min.os, catalog),
        rec_status: compare_os(&user.os, &rec.os, catalog),
    });

    // Processor
    let cpu_min = compare_cpu(user, &min.cpu, catalog);
    let cpu_rec = compare_cpu(user, &rec.cpu, catalog);
    scores.user_cpu_score = cpu_min.user_score.or(cpu_rec.user_score);
    scores.min_cpu_score = cpu_min.req_score;
    scores.rec_cpu_score = cpu_rec.req_score;
    items.push(ComparisonItem {
        label: "Processor".into(),
        user_value: cpu_display(user),
        min_value: display_req(&min.cpu),
        rec_value: display_req(&rec.cpu),
        min_status: cpu_min.status,
        rec_status: cpu_rec.status,
    });

    // Graphics
    let gpu_min = compare_gpu(&user.gpu, &min.gpu, catalog);
    let gpu_rec = compare_gpu(&user.gpu, &rec.gpu, catalog);
    scores.user_gpu_score = gpu_min.user_score.or(gpu_rec.user_score);
    scores.min_gpu_score = gpu_min.req_score;
    scores.rec_gpu_score = gpu_rec.req_score;
    items.push(ComparisonItem {
        label: "Graphics".into(),
        user_value: display_text(&user.gpu),
        min_value: display_req(&min.gpu),
        rec_value: display_req(&rec.gpu),
        min_status: gpu_min.status,
        rec_status: gpu_rec.status,
    });

    // Memory (RAM)
    items.push(ComparisonItem {
        label: "Memory (RAM)".into(),
        user_value: gb_display(user.ram_gb),
        min_value: display_req(&min.ram),
        rec_value: display_req(&rec.ram),
        min_status: compare_numeric(user.ram_gb, &min.ram),
        rec_status: compare_numeric(user.ram_gb, &rec.ram),
    });

    // Storage
    items.push(ComparisonItem {
        label: "Storage".into(),
        user_value: gb_display(user.storage_gb),
        min_value: display_req(&min.storage),
        rec_value: display_req(&rec.storage),
        min_status: compare_numeric(user.storage_gb, &min.storage),
        rec_status: compare_numeric(user.storage_gb, &rec.storage),
    });

    for item in &mut items {
        promote_cross_tier(item);
    }

    (items, scores)
}

/// A tier that could not be evaluated is very unlikely to be stricter than
/// the other tier when that one passed confidently, so promote info→pass.
/// Only a pass against *published* text counts as evidence; a trivial pass
/// from an absent requirement promotes nothing.
fn promote_cross_tier(item: &mut ComparisonItem) {
    if item.min_status == ComparisonStatus::Info
        && item.rec_status == ComparisonStatus::Pass
        && item.rec_value != NO_REQUIREMENT
    {
        item.min_status = ComparisonStatus::Pass;
    } else if item.rec_status == ComparisonStatus::Info
        && item.min_status == ComparisonStatus::Pass
        && item.min_value != NO_REQUIREMENT
    {
        item.rec_status = ComparisonStatus::Pass;
    }
}

fn display_text(value: &str) -> String {
    if value.is_empty() {
        "Unknown".to_string()
    } else {
        value.to_string()
    }
}

fn display_req(value: &str) -> String {
    if value.is_empty() {
        NO_REQUIREMENT.to_string()
    } else {
        value.to_string()
    }
}

fn cpu_display(user: &UserSpecs) -> String {
    match (user.cpu.is_empty(), user.cpu_cores) {
        (false, Some(cores)) => format!("{} ({} cores)", user.cpu, cores),
        (false, None) => user.cpu.clone(),
        (true, Some(cores)) => format!("{cores} cores detected"),
        (true, None) => "Unknown".to_string(),
    }
}

fn gb_display(value: Option<f64>) -> String {
    match value {
        Some(gb) if gb.fract() == 0.0 => format!("{} GB", gb as u64),
        Some(gb) => format!("{gb:.1} GB"),
        None => "Unknown".to_string(),
    }
}
