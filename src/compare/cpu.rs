//! CPU requirement comparison.
//!
//! A requirement line is an OR-list of alternatives ("i7-9700K | Ryzen 7
//! 2700X"); satisfying any one of them satisfies the field. Per
//! alternative, strategies are tried in a fixed order: exact model match
//! against the catalog, then family average/minimum for model-less family
//! asks ("Intel i5"), then spec-only clock/core comparison.

use tracing::debug;

use crate::catalog::{HardwareCatalog, Namespace};
use crate::compare::split_alternatives;
use crate::matcher::fuzzy_match_hardware;
use crate::parser::parse_cpu_requirement;
use crate::types::{ComparisonStatus, UserSpecs};

/// Clock-speed comparisons tolerate a 10% shortfall: marketing GHz figures
/// are not comparable across vendors/generations to that precision.
const CLOCK_TOLERANCE: f64 = 0.10;

/// Outcome of one CPU field comparison, with the resolved catalog scores
/// the FPS estimator consumes.
#[derive(Debug, Clone, Copy)]
pub struct CpuComparison {
    pub status: ComparisonStatus,
    pub user_score: Option<f64>,
    pub req_score: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CpuVendor {
    Intel,
    Amd,
}

fn vendor_of(text: &str) -> Option<CpuVendor> {
    let lower = text.to_lowercase();
    if lower.contains("intel") || lower.contains("core i") {
        Some(CpuVendor::Intel)
    } else if lower.contains("amd") || lower.contains("ryzen") {
        Some(CpuVendor::Amd)
    } else {
        None
    }
}

/// Compare the user's CPU against one tier's CPU requirement text.
pub fn compare_cpu(
    user: &UserSpecs,
    req_text: &str,
    catalog: &HardwareCatalog,
) -> CpuComparison {
    let candidates = catalog.names(Namespace::Cpu);
    let user_score = fuzzy_match_hardware(&user.cpu, &candidates)
        .and_then(|name| catalog.score(Namespace::Cpu, name));

    if req_text.is_empty() {
        return CpuComparison {
            status: ComparisonStatus::Pass,
            user_score,
            req_score: None,
        };
    }
    if user.cpu.is_empty() && user.cpu_cores.is_none() && user.cpu_speed_ghz.is_none() {
        return CpuComparison {
            status: ComparisonStatus::Info,
            user_score,
            req_score: None,
        };
    }

    // "and up" / "or better" style qualifiers apply to the whole line;
    // detect them before the OR-split eats the "or".
    let lower = req_text.to_lowercase();
    let wants_family_minimum =
        lower.contains("and up") || lower.contains("or better") || lower.contains("or newer");

    // Prefer alternatives matching the user's own vendor so a multi-option
    // requirement is judged against the comparable product line first.
    let user_vendor = vendor_of(&user.cpu);
    let mut alternatives = split_alternatives(req_text);
    if let Some(vendor) = user_vendor {
        alternatives.sort_by_key(|alt| vendor_of(alt) != Some(vendor));
    }

    let mut statuses: Vec<ComparisonStatus> = Vec::new();
    let mut req_score: Option<f64> = None;
    let mut evaluated = false;

    for alt in &alternatives {
        let Some(outcome) = evaluate_alternative(
            user,
            user_score,
            alt,
            wants_family_minimum,
            catalog,
            &candidates,
        ) else {
            continue; // qualifier fragment ("better", "equivalent")
        };
        evaluated = true;

        if let Some(bar) = outcome.bar {
            req_score = Some(req_score.map_or(bar, |b: f64| b.min(bar)));
        }

        if outcome.status == ComparisonStatus::Pass {
            // Any satisfied alternative satisfies the requirement.
            return CpuComparison {
                status: ComparisonStatus::Pass,
                user_score,
                req_score,
            };
        }
        statuses.push(outcome.status);
    }

    if !evaluated {
        // Nothing parseable at all: a generic legacy ask. Any cataloged
        // CPU exceeds it; an unknown CPU stays unknown.
        let status = if user_score.is_some() {
            ComparisonStatus::Pass
        } else {
            ComparisonStatus::Info
        };
        return CpuComparison {
            status,
            user_score,
            req_score,
        };
    }

    // No alternative passed: an unevaluable one keeps the door open.
    let status = if statuses.contains(&ComparisonStatus::Info) {
        ComparisonStatus::Info
    } else if statuses.contains(&ComparisonStatus::Warn) {
        ComparisonStatus::Warn
    } else {
        ComparisonStatus::Fail
    };
    CpuComparison {
        status,
        user_score,
        req_score,
    }
}

struct AlternativeOutcome {
    status: ComparisonStatus,
    /// Catalog score this alternative sets as the bar, when resolvable.
    bar: Option<f64>,
}

fn evaluate_alternative(
    user: &UserSpecs,
    user_score: Option<f64>,
    alt: &str,
    wants_family_minimum: bool,
    catalog: &HardwareCatalog,
    candidates: &[&str],
) -> Option<AlternativeOutcome> {
    let parsed = parse_cpu_requirement(alt);
    let family = family_tier(alt);

    if parsed.model.is_none() && parsed.speed_ghz.is_none() && parsed.cores.is_none()
        && family.is_none()
    {
        return None;
    }

    // (a) specific model resolved in the catalog
    if let Some(model) = &parsed.model {
        if let Some(req_name) = fuzzy_match_hardware(model, candidates) {
            let bar = catalog.score(Namespace::Cpu, req_name);
            if let (Some(u), Some(r)) = (user_score, bar) {
                debug!(alt, req_name, user = u, req = r, "CPU model comparison");
                let status = if u >= r {
                    ComparisonStatus::Pass
                } else {
                    ComparisonStatus::Fail
                };
                return Some(AlternativeOutcome { status, bar });
            }
            // Model bar known but user CPU unknown: fall through to the
            // spec-only check, which may still decide on clock/cores.
            if parsed.speed_ghz.is_some() || parsed.cores.is_some() {
                let status = compare_specs_only(user, &parsed, user_score.is_some());
                return Some(AlternativeOutcome { status, bar });
            }
            return Some(AlternativeOutcome {
                status: ComparisonStatus::Info,
                bar,
            });
        }
    }

    // (b) family ask without a specific model ("Intel i5", "Ryzen 7 and up")
    if let Some(tier) = family {
        let variants: Vec<f64> = catalog
            .entries(Namespace::Cpu)
            .filter(|(name, _)| is_family_member(name, &tier))
            .map(|(_, score)| score)
            .collect();
        if !variants.is_empty() {
            let bar = if wants_family_minimum {
                variants.iter().copied().fold(f64::INFINITY, f64::min)
            } else {
                variants.iter().sum::<f64>() / variants.len() as f64
            };
            if let Some(u) = user_score {
                debug!(alt, tier = %tier, bar, user = u, "CPU family comparison");
                let status = if u >= bar {
                    ComparisonStatus::Pass
                } else {
                    ComparisonStatus::Fail
                };
                return Some(AlternativeOutcome {
                    status,
                    bar: Some(bar),
                });
            }
        }
    }

    // (c) spec-only fallback on clock speed / core count
    let status = compare_specs_only(user, &parsed, user_score.is_some());
    Some(AlternativeOutcome { status, bar: None })
}

/// Compare parsed clock/core asks against the user's own numbers. Each
/// sub-check needs both sides to be decidable; one decisive sub-check
/// decides alone, two disagreeing sub-checks are a warning.
fn compare_specs_only(
    user: &UserSpecs,
    parsed: &crate::types::ParsedCpuSpecs,
    user_in_catalog: bool,
) -> ComparisonStatus {
    let speed_check = match (user.cpu_speed_ghz, parsed.speed_ghz) {
        (Some(u), Some(r)) => Some(u >= r * (1.0 - CLOCK_TOLERANCE)),
        _ => None,
    };
    let cores_check = match (user.cpu_cores, parsed.cores) {
        (Some(u), Some(r)) => Some(u >= r),
        _ => None,
    };

    match (speed_check, cores_check) {
        (Some(true), Some(true)) => ComparisonStatus::Pass,
        (Some(false), Some(false)) => ComparisonStatus::Fail,
        (Some(_), Some(_)) => ComparisonStatus::Warn,
        (Some(true), None) | (None, Some(true)) => ComparisonStatus::Pass,
        (Some(false), None) | (None, Some(false)) => ComparisonStatus::Fail,
        (None, None) => {
            // Generic spec ask with no user numbers: any cataloged CPU
            // clears legacy clock/core requirements.
            if parsed.model.is_none() && user_in_catalog {
                ComparisonStatus::Pass
            } else {
                ComparisonStatus::Info
            }
        }
    }
}

/// Family tier named by an alternative, e.g. "i5" or "ryzen 7", when no
/// specific model number follows it.
fn family_tier(text: &str) -> Option<String> {
    let lower = text.to_lowercase();
    for tier in ["i3", "i5", "i7", "i9"] {
        if lower
            .split(|c: char| c.is_whitespace() || c == '-' || c == '/')
            .any(|t| t == tier)
            && !lower.contains(&format!("{tier}-"))
        {
            return Some(tier.to_string());
        }
    }
    for level in ["3", "5", "7", "9"] {
        let prefix = format!("ryzen {level}");
        if lower.contains(&prefix) {
            // "Ryzen 5 3600" names a model; bare "Ryzen 5" names a family.
            let after = &lower[lower.find(&prefix).unwrap() + prefix.len()..];
            if !after.trim_start().starts_with(|c: char| c.is_ascii_digit()) {
                return Some(prefix);
            }
        }
    }
    None
}

fn is_family_member(name: &str, tier: &str) -> bool {
    let lower = name.to_lowercase();
    if tier.starts_with("ryzen") {
        lower.contains(&format!("{tier} "))
    } else {
        lower.contains(&format!("{tier}-"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ComparisonStatus::*;

    fn catalog() -> HardwareCatalog {
        HardwareCatalog::seeded()
    }

    fn user_with_cpu(cpu: &str) -> UserSpecs {
        UserSpecs {
            cpu: cpu.to_string(),
            ..UserSpecs::default()
        }
    }

    #[test]
    fn empty_requirement_passes() {
        let result = compare_cpu(&user_with_cpu("Intel Core i5-8400"), "", &catalog());
        assert_eq!(result.status, Pass);
        assert_eq!(result.user_score, Some(35.0));
    }

    #[test]
    fn missing_user_cpu_is_info() {
        let result = compare_cpu(&UserSpecs::default(), "Intel Core i5-8400", &catalog());
        assert_eq!(result.status, Info);
    }

    #[test]
    fn model_comparison_by_catalog_score() {
        let cat = catalog();
        let fast = compare_cpu(&user_with_cpu("Intel Core i7-9700K"), "Intel Core i5-8400", &cat);
        assert_eq!(fast.status, Pass);
        assert_eq!(fast.req_score, Some(35.0));

        let slow = compare_cpu(&user_with_cpu("Intel Core i5-8400"), "Intel Core i7-9700K", &cat);
        assert_eq!(slow.status, Fail);
    }

    #[test]
    fn any_passing_alternative_wins() {
        let result = compare_cpu(
            &user_with_cpu("AMD Ryzen 5 3600"),
            "Intel Core i7-9700K or AMD Ryzen 7 2700X",
            &catalog(),
        );
        // 45 fails the 50-point i7 bar but clears the 40-point 2700X bar.
        assert_eq!(result.status, Pass);
    }

    #[test]
    fn pipe_separated_alternatives() {
        let result = compare_cpu(
            &user_with_cpu("AMD Ryzen 5 2600"),
            "Intel Core i5-8400 | AMD Ryzen 5 2600",
            &catalog(),
        );
        assert_eq!(result.status, Pass);
    }

    #[test]
    fn family_average_for_model_less_ask() {
        let result = compare_cpu(&user_with_cpu("Intel Core i9-13900K"), "Intel Core i5", &catalog());
        assert_eq!(result.status, Pass);

        let weak = compare_cpu(&user_with_cpu("Intel Core i3-6100"), "Intel Core i7", &catalog());
        assert_eq!(weak.status, Fail);
    }

    #[test]
    fn family_minimum_when_qualified() {
        // Weakest cataloged i5 is the 25-point i5-6400; "or better" lowers
        // the bar from the family average to that minimum.
        let result = compare_cpu(
            &user_with_cpu("Intel Core i5-6500"),
            "Intel Core i5 or better",
            &catalog(),
        );
        assert_eq!(result.status, Pass);
    }

    #[test]
    fn spec_only_both_pass() {
        let user = UserSpecs {
            cpu_speed_ghz: Some(3.6),
            cpu_cores: Some(8),
            ..UserSpecs::default()
        };
        assert_eq!(compare_cpu(&user, "2.6 GHz Quad Core", &catalog()).status, Pass);
    }

    #[test]
    fn spec_only_mixed_is_warn() {
        let user = UserSpecs {
            cpu_speed_ghz: Some(3.6),
            cpu_cores: Some(2),
            ..UserSpecs::default()
        };
        assert_eq!(compare_cpu(&user, "2.6 GHz Quad Core", &catalog()).status, Warn);
    }

    #[test]
    fn spec_only_both_fail() {
        let user = UserSpecs {
            cpu_speed_ghz: Some(2.0),
            cpu_cores: Some(2),
            ..UserSpecs::default()
        };
        assert_eq!(compare_cpu(&user, "3.5 GHz Quad Core", &catalog()).status, Fail);
    }

    #[test]
    fn clock_tolerance_within_ten_percent() {
        let user = UserSpecs {
            cpu_speed_ghz: Some(2.8),
            ..UserSpecs::default()
        };
        // 2.8 >= 3.0 * 0.9
        assert_eq!(compare_cpu(&user, "3.0 GHz processor", &catalog()).status, Pass);
    }

    #[test]
    fn generic_ask_passes_for_cataloged_cpu() {
        let result = compare_cpu(
            &user_with_cpu("Intel Core i5-8400"),
            "2.0 GHz or faster processor",
            &catalog(),
        );
        assert_eq!(result.status, Pass);
    }

    #[test]
    fn vendor_preference_orders_alternatives() {
        // Both alternatives resolve; the AMD user is judged against the
        // AMD option first and short-circuits there.
        let result = compare_cpu(
            &user_with_cpu("AMD Ryzen 7 5800X"),
            "Intel Core i9-13900K or AMD Ryzen 5 3600",
            &catalog(),
        );
        assert_eq!(result.status, Pass);
    }
}
