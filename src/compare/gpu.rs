//! GPU requirement comparison: clean the user's raw renderer string,
//! resolve both sides in the catalog, and take the *lowest* matching
//! alternative as the bar (an OR-list is satisfied by its easiest option).

use tracing::debug;

use crate::catalog::{HardwareCatalog, Namespace};
use crate::compare::gpu_clean::clean_gpu_string;
use crate::compare::split_alternatives;
use crate::matcher::fuzzy_match_hardware;
use crate::types::ComparisonStatus;

/// Outcome of one GPU field comparison with resolved catalog scores.
#[derive(Debug, Clone, Copy)]
pub struct GpuComparison {
    pub status: ComparisonStatus,
    pub user_score: Option<f64>,
    pub req_score: Option<f64>,
}

const CAPABILITY_KEYWORDS: &[&str] = &[
    "opengl", "directx", "direct3d", "vulkan", "metal", "shader model",
];

const MODEL_MARKERS: &[&str] = &[
    "nvidia", "geforce", "amd", "radeon", "intel", "arc", "rtx", "gtx", "rx ",
];

/// Requirement names only an API/capability level, no vendor or model:
/// it cannot be resolved against the catalog by name.
fn is_capability_only(req_text: &str) -> bool {
    let lower = req_text.to_lowercase();
    CAPABILITY_KEYWORDS.iter().any(|k| lower.contains(k))
        && !MODEL_MARKERS.iter().any(|m| lower.contains(m))
}

/// Compare the user's GPU against one tier's GPU requirement text.
pub fn compare_gpu(
    user_gpu: &str,
    req_text: &str,
    catalog: &HardwareCatalog,
) -> GpuComparison {
    let candidates = catalog.names(Namespace::Gpu);

    let user_score = if user_gpu.is_empty() {
        None
    } else {
        let cleaned = clean_gpu_string(user_gpu);
        fuzzy_match_hardware(&cleaned, &candidates)
            .and_then(|name| catalog.score(Namespace::Gpu, name))
    };

    if req_text.is_empty() {
        return GpuComparison {
            status: ComparisonStatus::Pass,
            user_score,
            req_score: None,
        };
    }
    if user_gpu.is_empty() {
        return GpuComparison {
            status: ComparisonStatus::Info,
            user_score,
            req_score: None,
        };
    }

    if is_capability_only(req_text) {
        // Every tracked GPU supports the legacy API levels games list; an
        // untracked GPU stays unknown.
        let status = if user_score.is_some() {
            ComparisonStatus::Pass
        } else {
            ComparisonStatus::Info
        };
        return GpuComparison {
            status,
            user_score,
            req_score: None,
        };
    }

    let req_score = split_alternatives(req_text)
        .iter()
        .filter_map(|alt| fuzzy_match_hardware(alt, &candidates))
        .filter_map(|name| catalog.score(Namespace::Gpu, name))
        .fold(None, |lowest: Option<f64>, score| {
            Some(lowest.map_or(score, |l| l.min(score)))
        });

    let status = match (user_score, req_score) {
        (Some(user), Some(bar)) => {
            debug!(user_gpu, req_text, user, bar, "GPU score comparison");
            if user >= bar {
                ComparisonStatus::Pass
            } else {
                ComparisonStatus::Fail
            }
        }
        _ => ComparisonStatus::Info,
    };

    GpuComparison {
        status,
        user_score,
        req_score,
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
    fn empty_requirement_passes() {
        let result = compare_gpu("NVIDIA GeForce RTX 3070", "", &catalog());
        assert_eq!(result.status, Pass);
        assert_eq!(result.user_score, Some(55.0));
    }

    #[test]
    fn missing_user_gpu_is_info() {
        let result = compare_gpu("", "NVIDIA GeForce GTX 1060 6GB", &catalog());
        assert_eq!(result.status, Info);
    }

    #[test]
    fn score_comparison_decides() {
        let cat = catalog();
        assert_eq!(
            compare_gpu("NVIDIA GeForce RTX 3070", "NVIDIA GeForce GTX 1070", &cat).status,
            Pass
        );
        assert_eq!(
            compare_gpu("NVIDIA GeForce GTX 1050", "NVIDIA GeForce RTX 3070", &cat).status,
            Fail
        );
    }

    #[test]
    fn lowest_alternative_sets_the_bar() {
        let result = compare_gpu(
            "NVIDIA GeForce GTX 1660",
            "NVIDIA GeForce RTX 2070 or NVIDIA GeForce GTX 1060 6GB",
            &catalog(),
        );
        // 28 (1060 6GB) is the bar, not 45 (2070).
        assert_eq!(result.status, Pass);
        assert_eq!(result.req_score, Some(28.0));
    }

    #[test]
    fn lspci_style_user_string_resolves() {
        let raw = "01:00.0 VGA compatible controller: NVIDIA Corporation GA104 (rev a1)";
        let result = compare_gpu(raw, "NVIDIA GeForce GTX 1070", &catalog());
        assert_eq!(result.status, Pass);
        assert_eq!(result.user_score, Some(55.0));
    }

    #[test]
    fn capability_only_requirement_passes_for_tracked_gpu() {
        let result = compare_gpu(
            "AMD Radeon RX 6700 XT",
            "DirectX 11 compatible graphics card",
            &catalog(),
        );
        assert_eq!(result.status, Pass);
    }

    #[test]
    fn capability_only_requirement_unknown_gpu_is_info() {
        let result = compare_gpu(
            "Matrox Millennium G400",
            "OpenGL 3.3 compatible",
            &catalog(),
        );
        assert_eq!(result.status, Info);
    }

    #[test]
    fn unresolvable_requirement_is_info() {
        let result = compare_gpu(
            "NVIDIA GeForce RTX 3070",
            "Voodoo Banshee accelerator",
            &catalog(),
        );
        assert_eq!(result.status, Info);
    }
}
