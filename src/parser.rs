//! Turns raw storefront requirement blurbs (HTML fragments with
//! `Label: value<br>` lines) into structured per-tier records, plus the
//! CPU sub-spec extraction used by the comparator's spec-only fallback.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::types::{GameRequirements, ParsedCpuSpecs, ParsedGameRequirements};

fn br_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<br\s*/?>|</li>|</ul>").expect("valid regex"))
}

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]+>").expect("valid regex"))
}

fn key_value_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([^:]+):\s*(.+)$").expect("valid regex"))
}

fn ghz_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)@?\s*(\d+(?:\.\d+)?)\s*GHz").expect("valid regex"))
}

fn mhz_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)@?\s*(\d+)\s*MHz").expect("valid regex"))
}

fn numeric_cores_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(\d+)[\s-]?cores?").expect("valid regex"))
}

fn named_cores_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(dual|quad|hexa|octa)[\s-]?core").expect("valid regex"))
}

fn clock_strip_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)@?\s*\d+(?:\.\d+)?\s*(GHz|MHz)").expect("valid regex"))
}

fn cores_strip_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\d+\s*-?\s*cores?\b").expect("valid regex"))
}

fn model_marker_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)intel|amd|ryzen|core\s*i[3579]|apple\s*m\d").expect("valid regex")
    })
}

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"))
}

/// Parse both requirement tiers. A tier is `None` when its source text is
/// absent/empty or contains no `key: value` line at all.
pub fn parse_requirements(
    minimum_html: Option<&str>,
    recommended_html: Option<&str>,
) -> ParsedGameRequirements {
    ParsedGameRequirements {
        minimum: minimum_html.and_then(parse_tier),
        recommended: recommended_html.and_then(parse_tier),
    }
}

fn parse_tier(html: &str) -> Option<GameRequirements> {
    if html.trim().is_empty() {
        return None;
    }
    parse_section(&strip_html(html))
}

/// Flatten an HTML fragment to line-oriented plain text: line-break-ish
/// tags become newlines, all other tags are removed, common entities are
/// decoded in the same order the storefronts double-escape them.
fn strip_html(html: &str) -> String {
    let with_newlines = br_re().replace_all(html, "\n");
    let tagless = tag_re().replace_all(&with_newlines, "");
    tagless
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&trade;", "™")
        .replace("&reg;", "®")
        .trim()
        .to_string()
}

/// Route `key: value` lines into the five component buckets. First match
/// per bucket wins; unmatched lines are discarded.
fn parse_section(text: &str) -> Option<GameRequirements> {
    let mut result = GameRequirements::default();
    let mut saw_key_value = false;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let Some(caps) = key_value_re().captures(line) else {
            debug!(line, "discarding requirement line without key/value shape");
            continue;
        };
        saw_key_value = true;

        let key = caps[1].to_lowercase().replace('*', "").trim().to_string();
        let value = caps[2].trim();

        let slot = if key.contains("os") || key.contains("operating") {
            &mut result.os
        } else if key.contains("processor") || key.contains("cpu") {
            &mut result.cpu
        } else if key.contains("graphics") || key.contains("video") || key.contains("gpu") {
            &mut result.gpu
        } else if key.contains("memory") || key.contains("ram") {
            &mut result.ram
        } else if key.contains("storage")
            || key.contains("hard")
            || key.contains("disk")
            || key.contains("space")
        {
            &mut result.storage
        } else {
            continue;
        };

        if slot.is_empty() {
            *slot = value.to_string();
        }
    }

    saw_key_value.then_some(result)
}

/// Extract clock speed, core count, and (when a brand marker survives the
/// spec stripping) a model name from one CPU requirement alternative.
pub fn parse_cpu_requirement(text: &str) -> ParsedCpuSpecs {
    let speed_ghz = ghz_re()
        .captures(text)
        .and_then(|c| c[1].parse::<f64>().ok())
        .or_else(|| {
            mhz_re()
                .captures(text)
                .and_then(|c| c[1].parse::<f64>().ok())
                .map(|mhz| mhz / 1000.0)
        });

    let cores = named_cores_re()
        .captures(text)
        .map(|c| match c[1].to_lowercase().as_str() {
            "dual" => 2,
            "quad" => 4,
            "hexa" => 6,
            _ => 8,
        })
        .or_else(|| {
            numeric_cores_re()
                .captures(text)
                .and_then(|c| c[1].parse::<u32>().ok())
        });

    let stripped = clock_strip_re().replace_all(text, "");
    let stripped = cores_strip_re().replace_all(&stripped, "");
    let stripped = named_cores_re().replace_all(&stripped, "");
    let stripped = whitespace_re()
        .replace_all(&stripped, " ")
        .trim()
        .to_string();

    let model = (stripped.len() > 2 && model_marker_re().is_match(&stripped))
        .then_some(stripped);

    ParsedCpuSpecs {
        model,
        speed_ghz,
        cores,
        raw: text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEAM_MIN: &str = "<strong>Minimum:</strong><br><ul class=\"bb_ul\">\
        <li><strong>OS *:</strong> Windows 10 64-bit</li>\
        <li><strong>Processor:</strong> Intel Core i5-8400 | AMD Ryzen 5 2600</li>\
        <li><strong>Memory:</strong> 12 GB RAM</li>\
        <li><strong>Graphics:</strong> NVIDIA GeForce GTX 1060 6GB</li>\
        <li><strong>Storage:</strong> 100 GB available space</li></ul>";

    #[test]
    fn parses_steam_style_fragment() {
        let parsed = parse_requirements(Some(STEAM_MIN), None);
        let min = parsed.minimum.unwrap();
        assert_eq!(min.os, "Windows 10 64-bit");
        assert_eq!(min.cpu, "Intel Core i5-8400 | AMD Ryzen 5 2600");
        assert_eq!(min.ram, "12 GB RAM");
        assert_eq!(min.gpu, "NVIDIA GeForce GTX 1060 6GB");
        assert_eq!(min.storage, "100 GB available space");
        assert!(parsed.recommended.is_none());
    }

    #[test]
    fn missing_or_empty_tier_is_none() {
        let parsed = parse_requirements(None, Some(""));
        assert!(parsed.minimum.is_none());
        assert!(parsed.recommended.is_none());
    }

    #[test]
    fn tier_without_key_value_lines_is_none() {
        let parsed = parse_requirements(Some("<p>Coming soon</p>"), None);
        assert!(parsed.minimum.is_none());
    }

    #[test]
    fn first_match_per_bucket_wins() {
        let html = "Memory: 8 GB<br>Memory: 16 GB<br>";
        let min = parse_requirements(Some(html), None).minimum.unwrap();
        assert_eq!(min.ram, "8 GB");
    }

    #[test]
    fn unrouted_lines_leave_fields_empty() {
        let html = "Sound Card: DirectX compatible<br>Additional Notes: SSD recommended";
        let min = parse_requirements(Some(html), None).minimum.unwrap();
        assert_eq!(min, GameRequirements::default());
    }

    #[test]
    fn decodes_double_escaped_entities() {
        let html = "Graphics: NVIDIA&amp;reg; GeForce&reg; GTX 1070";
        let min = parse_requirements(Some(html), None).minimum.unwrap();
        assert_eq!(min.gpu, "NVIDIA® GeForce® GTX 1070");
    }

    #[test]
    fn cpu_model_with_clock() {
        let specs = parse_cpu_requirement("Intel Core i5 @ 3.6 GHz");
        assert_eq!(specs.model.as_deref(), Some("Intel Core i5"));
        assert_eq!(specs.speed_ghz, Some(3.6));
        assert_eq!(specs.cores, None);
    }

    #[test]
    fn cpu_spec_only() {
        let specs = parse_cpu_requirement("2.6 GHz Quad Core");
        assert_eq!(specs.model, None);
        assert_eq!(specs.speed_ghz, Some(2.6));
        assert_eq!(specs.cores, Some(4));
    }

    #[test]
    fn cpu_mhz_converts_to_ghz() {
        let specs = parse_cpu_requirement("Pentium 4 2600 MHz");
        assert_eq!(specs.speed_ghz, Some(2.6));
        assert_eq!(specs.model, None); // "Pentium 4" carries no brand marker
    }

    #[test]
    fn cpu_numeric_core_count() {
        let specs = parse_cpu_requirement("AMD Ryzen 7 3700X 8-core");
        assert_eq!(specs.cores, Some(8));
        assert_eq!(specs.model.as_deref(), Some("AMD Ryzen 7 3700X"));
    }

    #[test]
    fn cpu_nothing_usable() {
        let specs = parse_cpu_requirement("Anything made this decade");
        assert_eq!(specs.model, None);
        assert_eq!(specs.speed_ghz, None);
        assert_eq!(specs.cores, None);
        assert_eq!(specs.raw, "Anything made this decade");
    }
}
