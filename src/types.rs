// Core data model shared across the comparison pipeline.
//
// Everything here serializes camelCase to stay wire-compatible with the
// scanner transfer payload and the browser-side JSON consumers.

use serde::{Deserialize, Serialize};

/// Display placeholder for "no requirement published" on either tier.
pub const NO_REQUIREMENT: &str = "—";

/// How a user's spec record was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionSource {
    /// Browser heuristics (user agent, WebGL renderer, deviceMemory).
    Auto,
    /// The OS-native scanner script/binary.
    Script,
}

/// Free-form hardware specs for one machine, as detected or hand-entered.
///
/// String fields may be empty; numeric fields are `None` when the detector
/// could not determine them. The `guessed_fields`/`manual_fields` hints only
/// affect presentation upstream, never comparison logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSpecs {
    pub os: String,
    pub cpu: String,
    pub gpu: String,
    pub cpu_cores: Option<u32>,
    #[serde(rename = "cpuSpeedGHz")]
    pub cpu_speed_ghz: Option<f64>,
    #[serde(rename = "ramGB")]
    pub ram_gb: Option<f64>,
    #[serde(rename = "storageGB")]
    pub storage_gb: Option<f64>,
    pub detection_source: DetectionSource,
    #[serde(default)]
    pub ram_approximate: bool,
    #[serde(default)]
    pub guessed_fields: Vec<String>,
    #[serde(default)]
    pub manual_fields: Vec<String>,
}

impl Default for UserSpecs {
    fn default() -> Self {
        Self {
            os: String::new(),
            cpu: String::new(),
            gpu: String::new(),
            cpu_cores: None,
            cpu_speed_ghz: None,
            ram_gb: None,
            storage_gb: None,
            detection_source: DetectionSource::Auto,
            ram_approximate: false,
            guessed_fields: Vec::new(),
            manual_fields: Vec::new(),
        }
    }
}

/// One tier of published requirements. All fields are free text; an empty
/// string means the parser found no line for that field (distinct from a
/// tier that was never published, which is a `None` in
/// [`ParsedGameRequirements`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRequirements {
    pub os: String,
    pub cpu: String,
    pub gpu: String,
    pub ram: String,
    pub storage: String,
}

/// Parser output: one record per published tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedGameRequirements {
    pub minimum: Option<GameRequirements>,
    pub recommended: Option<GameRequirements>,
}

/// Structured CPU sub-specs extracted from one requirement alternative.
/// All three extracted fields may be `None` at once when nothing usable
/// was found; `raw` always carries the original text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedCpuSpecs {
    pub model: Option<String>,
    #[serde(rename = "speedGHz")]
    pub speed_ghz: Option<f64>,
    pub cores: Option<u32>,
    pub raw: String,
}

/// Per-tier outcome of comparing one component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonStatus {
    /// Confident numeric/score verdict: requirement satisfied.
    Pass,
    /// Confident numeric/score verdict: requirement not satisfied.
    Fail,
    /// Partially confident (cross-platform OS, mixed spec checks).
    Warn,
    /// No comparison possible — missing data on either side.
    Info,
}

/// One row of the comparison table: display values plus per-tier statuses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonItem {
    pub label: String,
    pub user_value: String,
    pub min_value: String,
    pub rec_value: String,
    pub min_status: ComparisonStatus,
    pub rec_status: ComparisonStatus,
}

impl ComparisonItem {
    /// True when neither tier published anything for this component.
    pub fn has_no_requirement(&self) -> bool {
        self.min_value == NO_REQUIREMENT && self.rec_value == NO_REQUIREMENT
    }
}

/// Overall can-it-run answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallVerdict {
    Pass,
    Minimum,
    Fail,
    Unknown,
}

/// Concrete "replace X with Y" suggestion surfaced with a verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeItem {
    pub component: String,
    pub current: String,
    pub required: String,
}

/// Aggregated verdict over all compared components.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictResult {
    pub verdict: OverallVerdict,
    pub title: String,
    pub description: String,
    pub failed_components: Vec<String>,
    pub warn_components: Vec<String>,
    pub upgrade_items: Vec<UpgradeItem>,
}

/// Resolved catalog scores behind a comparison — the side channel the FPS
/// estimator consumes. `None` means the corresponding hardware string did
/// not resolve to a catalog entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareScores {
    pub user_gpu_score: Option<f64>,
    pub rec_gpu_score: Option<f64>,
    pub min_gpu_score: Option<f64>,
    pub user_cpu_score: Option<f64>,
    pub rec_cpu_score: Option<f64>,
    pub min_cpu_score: Option<f64>,
}

/// Which component most limits achievable frame rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bottleneck {
    Gpu,
    Cpu,
    Balanced,
}

/// How much of the requirement data backed the FPS estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FpsConfidence {
    /// Both GPU and CPU recommended-tier scores were available.
    Good,
    /// Some requirement scores missing; estimate leans on fewer anchors.
    Limited,
    /// No usable scores at all.
    None,
}

/// Bounded frame-rate prediction with bottleneck attribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FpsEstimate {
    pub low: u32,
    pub mid: u32,
    pub high: u32,
    pub bottleneck: Bottleneck,
    pub confidence: FpsConfidence,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_specs_round_trips_wire_names() {
        let json = r#"{
            "os": "Windows 11",
            "cpu": "Intel Core i7-12700K",
            "gpu": "NVIDIA GeForce RTX 3070",
            "cpuCores": 12,
            "cpuSpeedGHz": 3.6,
            "ramGB": 32,
            "storageGB": 512,
            "detectionSource": "script"
        }"#;
        let specs: UserSpecs = serde_json::from_str(json).unwrap();
        assert_eq!(specs.cpu_cores, Some(12));
        assert_eq!(specs.cpu_speed_ghz, Some(3.6));
        assert_eq!(specs.detection_source, DetectionSource::Script);
        assert!(specs.guessed_fields.is_empty());

        let back = serde_json::to_value(&specs).unwrap();
        assert_eq!(back["ramGB"], 32.0);
        assert_eq!(back["detectionSource"], "script");
    }

    #[test]
    fn statuses_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&ComparisonStatus::Warn).unwrap(),
            "\"warn\""
        );
        assert_eq!(
            serde_json::to_string(&OverallVerdict::Minimum).unwrap(),
            "\"minimum\""
        );
        assert_eq!(serde_json::to_string(&Bottleneck::Gpu).unwrap(), "\"gpu\"");
    }

    #[test]
    fn no_requirement_detection() {
        let item = ComparisonItem {
            label: "DirectX".into(),
            user_value: NO_REQUIREMENT.into(),
            min_value: NO_REQUIREMENT.into(),
            rec_value: NO_REQUIREMENT.into(),
            min_status: ComparisonStatus::Info,
            rec_status: ComparisonStatus::Info,
        };
        assert!(item.has_no_requirement());
    }
}
