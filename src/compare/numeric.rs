//! Numeric GB-quantity comparison for the RAM and storage components.

use std::sync::OnceLock;

use regex::Regex;

use crate::types::ComparisonStatus;

fn gb_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)([\d.]+)\s*GB").expect("valid regex"))
}

fn mb_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)([\d.]+)\s*MB").expect("valid regex"))
}

fn tb_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)([\d.]+)\s*TB").expect("valid regex"))
}

/// Extract a GB quantity from requirement text ("8 GB", "16384 MB", "1 TB").
pub fn parse_gb(text: &str) -> Option<f64> {
    if text.is_empty() {
        return None;
    }
    if let Some(caps) = gb_re().captures(text) {
        return caps[1].parse::<f64>().ok();
    }
    if let Some(caps) = mb_re().captures(text) {
        return caps[1].parse::<f64>().ok().map(|mb| mb / 1024.0);
    }
    if let Some(caps) = tb_re().captures(text) {
        return caps[1].parse::<f64>().ok().map(|tb| tb * 1024.0);
    }
    None
}

/// Compare a user's GB figure against requirement text. No requirement
/// means automatically satisfied; missing user data or unparseable
/// requirement text means the comparison cannot be made.
pub fn compare_numeric(user_value: Option<f64>, req_text: &str) -> ComparisonStatus {
    if req_text.is_empty() {
        return ComparisonStatus::Pass;
    }
    let Some(user) = user_value else {
        return ComparisonStatus::Info;
    };
    let Some(required) = parse_gb(req_text) else {
        return ComparisonStatus::Info;
    };
    if user >= required {
        ComparisonStatus::Pass
    } else {
        ComparisonStatus::Fail
    }
}
