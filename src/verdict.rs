//! Reduces the per-component comparison table to a single verdict.
//!
//! The decision ladder is ordered: any minimum-tier failure dominates,
//! then full pass, then "all pass-or-unknown", then "minimum met".
//! Components with no published requirement on either tier never vote.

use crate::types::{
    ComparisonItem, ComparisonStatus, OverallVerdict, UpgradeItem, VerdictResult,
    NO_REQUIREMENT,
};

pub fn compute_verdict(items: &[ComparisonItem]) -> VerdictResult {
    let considered: Vec<&ComparisonItem> =
        items.iter().filter(|i| !i.has_no_requirement()).collect();

    if considered.is_empty() {
        return VerdictResult {
            verdict: OverallVerdict::Pass,
            title: "No Requirements Published".into(),
            description: "This game lists no system requirements to compare against.".into(),
            failed_components: Vec::new(),
            warn_components: Vec::new(),
            upgrade_items: Vec::new(),
        };
    }

    let mut failed_components: Vec<String> = Vec::new();
    let mut warn_components: Vec<String> = Vec::new();
    let mut upgrade_items: Vec<UpgradeItem> = Vec::new();

    for item in &considered {
        if item.min_status == ComparisonStatus::Fail {
            failed_components.push(item.label.clone());
            let required = if item.min_value != NO_REQUIREMENT {
                item.min_value.clone()
            } else {
                item.rec_value.clone()
            };
            upgrade_items.push(UpgradeItem {
                component: item.label.clone(),
                current: item.user_value.clone(),
                required,
            });
        } else if item.rec_status == ComparisonStatus::Fail {
            // Meets minimum but not recommended: suggest the upgrade anyway.
            upgrade_items.push(UpgradeItem {
                component: item.label.clone(),
                current: item.user_value.clone(),
                required: item.rec_value.clone(),
            });
        }

        let uncertain = |s: ComparisonStatus| {
            matches!(s, ComparisonStatus::Warn | ComparisonStatus::Info)
        };
        if (uncertain(item.min_status) || uncertain(item.rec_status))
            && !warn_components.contains(&item.label)
        {
            warn_components.push(item.label.clone());
        }
    }

    if !failed_components.is_empty() {
        let plural = if failed_components.len() > 1 { "s" } else { "" };
        return VerdictResult {
            verdict: OverallVerdict::Fail,
            title: "You Need To Upgrade".into(),
            description: format!(
                "Your system does not meet the minimum requirements for {} component{plural}.",
                failed_components.len()
            ),
            failed_components,
            warn_components,
            upgrade_items,
        };
    }

    let all_min_pass = considered
        .iter()
        .all(|i| i.min_status == ComparisonStatus::Pass);
    let all_rec_pass = considered
        .iter()
        .all(|i| i.rec_status == ComparisonStatus::Pass);
    let pass_or_info = |s: ComparisonStatus| {
        matches!(s, ComparisonStatus::Pass | ComparisonStatus::Info)
    };
    let all_min_pass_or_info = considered.iter().all(|i| pass_or_info(i.min_status));
    let all_rec_pass_or_info = considered.iter().all(|i| pass_or_info(i.rec_status));
    let has_info = considered.iter().any(|i| {
        i.min_status == ComparisonStatus::Info || i.rec_status == ComparisonStatus::Info
    });

    if all_min_pass && all_rec_pass {
        return VerdictResult {
            verdict: OverallVerdict::Pass,
            title: "No Upgrade Needed!".into(),
            description: "Your system meets or exceeds the recommended requirements.".into(),
            failed_components,
            warn_components,
            upgrade_items,
        };
    }

    if all_min_pass_or_info && all_rec_pass_or_info && has_info {
        let them = if warn_components.len() == 1 { "it" } else { "them" };
        return VerdictResult {
            verdict: OverallVerdict::Unknown,
            title: "Likely OK — Verify Manually".into(),
            description: format!(
                "We couldn't compare {} accurately. Check {them} manually to be sure.",
                warn_components.join(", ")
            ),
            failed_components,
            warn_components,
            upgrade_items,
        };
    }

    if all_min_pass_or_info {
        let rec_failed = considered
            .iter()
            .any(|i| i.rec_status == ComparisonStatus::Fail);
        let description = if rec_failed {
            "Your system meets minimum requirements but falls short of recommended specs."
        } else {
            "Your system meets minimum requirements; the recommended tier could not be fully verified."
        };
        return VerdictResult {
            verdict: OverallVerdict::Minimum,
            title: "Upgrade Recommended".into(),
            description: description.into(),
            failed_components,
            warn_components,
            upgrade_items,
        };
    }

    VerdictResult {
        verdict: OverallVerdict::Unknown,
        title: "Manual Check Needed".into(),
        description:
            "We couldn't determine a clear verdict. Please review the comparison details below."
                .into(),
        failed_components,
        warn_components,
        upgrade_items,
    }
}
