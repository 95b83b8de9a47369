//! Platform-family OS reasoning.
//!
//! Cross-platform mismatches are warnings, never failures: requirement
//! blurbs routinely omit platforms a game actually supports, so a hard
//! fail would produce too many false negatives. Within a family, version
//! ordering comes from catalog scores; when only one side resolves, the
//! policy is deliberately lenient (pass).

use tracing::debug;

use crate::catalog::{HardwareCatalog, Namespace};
use crate::matcher::fuzzy_match_hardware;
use crate::types::ComparisonStatus;

/// Platform family an OS string belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
}

const MAC_KEYWORDS: &[&str] = &["macos", "mac os", "os x", "osx", "darwin"];

/// Apple ships codenames without the word "macOS" often enough that the
/// codename list doubles as a platform signal.
const MAC_CODENAMES: &[&str] = &[
    "monterey", "ventura", "sonoma", "sequoia", "big sur", "catalina", "mojave",
];

const LINUX_KEYWORDS: &[&str] = &[
    "linux", "ubuntu", "mint", "fedora", "arch", "steamos", "debian", "suse", "manjaro",
];

/// Extract the platform family from free-form OS text.
pub fn platform_of(text: &str) -> Option<Platform> {
    let lower = text.to_lowercase();
    if lower.contains("windows") || lower.split_whitespace().any(|t| t == "win") {
        return Some(Platform::Windows);
    }
    if MAC_KEYWORDS.iter().chain(MAC_CODENAMES).any(|k| lower.contains(k)) {
        return Some(Platform::MacOs);
    }
    if LINUX_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return Some(Platform::Linux);
    }
    None
}

/// Compare the user's OS against one tier's OS requirement.
pub fn compare_os(
    user_os: &str,
    req_text: &str,
    catalog: &HardwareCatalog,
) -> ComparisonStatus {
    if req_text.is_empty() {
        return ComparisonStatus::Pass;
    }
    if user_os.is_empty() {
        return ComparisonStatus::Info;
    }

    let req_platform = platform_of(req_text);

    // "Any 64-bit OS" and friends: no platform named, nothing to enforce.
    if req_platform.is_none() && req_text.to_lowercase().contains("any") {
        return ComparisonStatus::Pass;
    }

    let user_platform = platform_of(user_os);
    let (user_platform, req_platform) = match (user_platform, req_platform) {
        (Some(u), Some(r)) => (u, r),
        _ => return ComparisonStatus::Info,
    };

    if user_platform != req_platform {
        // Cannot rule out compatibility (Proton, unlisted mac/linux builds).
        return ComparisonStatus::Warn;
    }

    // Same family: order versions via platform-filtered catalog scores.
    let candidates: Vec<&str> = catalog
        .names(Namespace::Os)
        .into_iter()
        .filter(|name| platform_of(name) == Some(user_platform))
        .collect();

    let user_match = fuzzy_match_hardware(user_os, &candidates);
    let req_match = fuzzy_match_hardware(req_text, &candidates);

    match (user_match, req_match) {
        (Some(user_name), Some(req_name)) => {
            let user_score = catalog.score(Namespace::Os, user_name);
            let req_score = catalog.score(Namespace::Os, req_name);
            match (user_score, req_score) {
                (Some(u), Some(r)) if u < r => ComparisonStatus::Fail,
                _ => ComparisonStatus::Pass,
            }
        }
        // Only one side resolved: same platform, assume current enough.
        _ => {
            debug!(
                user_os,
                req_text, "OS version ordering unresolved; defaulting to pass"
            );
            ComparisonStatus::Pass
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ComparisonStatus::*;

    fn catalog() -> HardwareCatalog {
        HardwareCatalog::seeded()
    }

    #[test]
    fn platform_extraction() {
        assert_eq!(platform_of("Windows 10 64-bit"), Some(Platform::Windows));
        assert_eq!(platform_of("macOS Sonoma"), Some(Platform::MacOs));
        assert_eq!(platform_of("Ventura or later"), Some(Platform::MacOs));
        assert_eq!(platform_of("Ubuntu 22.04 / SteamOS"), Some(Platform::Linux));
        assert_eq!(platform_of("Any 64-bit OS"), None);
    }

    #[test]
    fn empty_requirement_passes() {
        assert_eq!(compare_os("Windows 11", "", &catalog()), Pass);
    }

    #[test]
    fn missing_user_os_is_info() {
        assert_eq!(compare_os("", "Windows 10", &catalog()), Info);
    }

    #[test]
    fn vague_any_requirement_passes() {
        assert_eq!(compare_os("Windows 11", "Any 64-bit OS", &catalog()), Pass);
    }

    #[test]
    fn cross_platform_warns_never_fails() {
        assert_eq!(compare_os("macOS Sonoma", "Windows 10", &catalog()), Warn);
        assert_eq!(compare_os("Ubuntu 22.04", "Windows 10", &catalog()), Warn);
    }

    #[test]
    fn version_ordering_within_family() {
        let cat = catalog();
        assert_eq!(compare_os("Windows 11", "Windows 10 64-bit", &cat), Pass);
        assert_eq!(compare_os("Windows 7", "Windows 10", &cat), Fail);
        assert_eq!(compare_os("macOS Ventura", "macOS Sonoma", &cat), Fail);
        assert_eq!(compare_os("macOS Sequoia", "macOS Sonoma", &cat), Pass);
    }

    #[test]
    fn unresolved_same_platform_is_lenient_pass() {
        // Requirement names a Windows version the catalog has never heard of.
        assert_eq!(
            compare_os("Windows 11", "Windows Vista Ultimate Edition", &catalog()),
            Pass
        );
    }
}
