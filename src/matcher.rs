//! Token-overlap fuzzy matching of free-form hardware text against
//! canonical catalog names.
//!
//! Model numbers carry the signal: numeric tokens weigh 3x so "RTX 3070"
//! vs "RTX 3060" is decided by the number, not by how many times "GeForce"
//! appears. Requirement-style alternatives ("i7-3770K or FX-8350") are
//! matched independently so one option's tokens never pollute the other's.

use std::sync::OnceLock;

use regex::Regex;
use strsim::jaro_winkler;
use tracing::debug;

/// Minimum normalized score for a candidate to be accepted (inclusive).
pub const MATCH_THRESHOLD: f64 = 0.60;

/// Tokens that never help identify a hardware model: renderer/API noise
/// from raw GPU strings plus connective words from requirement text.
/// Filtered from the input side only — candidate names stay intact.
const NOISE_WORDS: &[&str] = &[
    // GPU renderer noise
    "angle",
    "opengl",
    "direct3d11",
    "direct3d12",
    "d3d11",
    "d3d12",
    "vulkan",
    "metal",
    "google",
    "inc",
    "corporation",
    "technologies",
    "vs_4_0",
    "ps_4_0",
    "vs_5_0",
    "ps_5_0",
    "vs_6_0",
    "ps_6_0",
    // Requirement text noise
    "equivalent",
    "better",
    "compatible",
    "above",
    "later",
    "with",
    "or",
    "and",
    "series",
];

fn alternatives_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i) or ").expect("valid regex"))
}

fn spec_pattern_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\d+(?:\.\d+)?\s*[gm]hz|\d+[\s-]?cores?\b|\d+[\s-]?threads?\b")
            .expect("valid regex")
    })
}

/// Resolve `input` to the best catalog candidate, or `None` when nothing
/// clears [`MATCH_THRESHOLD`].
pub fn fuzzy_match_hardware<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    if input.trim().is_empty() {
        return None;
    }

    let mut best: Option<Match<'a>> = None;

    for alternative in alternatives_re().split(input) {
        // Clock/core/thread specs would corrupt model-number overlap.
        let cleaned = spec_pattern_re().replace_all(alternative, " ");

        let all_tokens = tokenize(&cleaned);
        let has_series = all_tokens.iter().any(|t| t == "series");
        let input_tokens: Vec<&str> = all_tokens
            .iter()
            .map(String::as_str)
            .filter(|t| !NOISE_WORDS.contains(t))
            .collect();
        if input_tokens.is_empty() {
            continue;
        }

        for candidate in candidates {
            let scored = score_candidate(&input_tokens, has_series, candidate);
            if best
                .as_ref()
                .map_or(true, |current| scored.beats(current))
            {
                best = Some(scored);
            }
        }
    }

    let best = best?;
    if best.normalized >= MATCH_THRESHOLD {
        debug!(
            input,
            candidate = best.candidate,
            score = best.normalized,
            "fuzzy match accepted"
        );
        Some(best.candidate)
    } else {
        debug!(
            input,
            best_candidate = best.candidate,
            score = best.normalized,
            "fuzzy match below threshold"
        );
        None
    }
}

struct Match<'a> {
    candidate: &'a str,
    normalized: f64,
    raw: f64,
    similarity: f64,
}

impl Match<'_> {
    /// Ordering: normalized score, then raw weighted hits, then overall
    /// string similarity as the last deterministic tie-break.
    fn beats(&self, other: &Self) -> bool {
        if self.normalized != other.normalized {
            return self.normalized > other.normalized;
        }
        if self.raw != other.raw {
            return self.raw > other.raw;
        }
        self.similarity > other.similarity
    }
}

fn score_candidate<'a>(input_tokens: &[&str], has_series: bool, candidate: &'a str) -> Match<'a> {
    let candidate_tokens = tokenize(candidate);
    let mut raw = 0.0;
    let mut max_possible = 0.0;

    for ct in &candidate_tokens {
        let numeric = is_numeric_token(ct);
        let weight = if numeric { 3.0 } else { 1.0 };
        max_possible += weight;

        let hit = input_tokens.iter().any(|it| {
            if numeric {
                numeric_tokens_match(it, ct, has_series)
            } else {
                it == ct || it.contains(ct.as_str()) || ct.contains(it)
            }
        });
        if hit {
            raw += weight;
        }
    }

    let normalized = if max_possible > 0.0 {
        raw / max_possible
    } else {
        0.0
    };

    Match {
        candidate,
        normalized,
        raw,
        similarity: jaro_winkler(
            &input_tokens.join(" "),
            &candidate.to_lowercase(),
        ),
    }
}

/// Numeric tokens must match exactly — except under "series" phrasing,
/// where a round-hundred input token ("600 series") accepts any candidate
/// in the same hundred bucket (650/660/670, but not 750).
fn numeric_tokens_match(input_token: &str, candidate_token: &str, has_series: bool) -> bool {
    if input_token == candidate_token {
        return true;
    }
    if has_series && is_round_hundred(input_token) {
        if let (Ok(input_num), Ok(candidate_num)) =
            (input_token.parse::<u64>(), candidate_token.parse::<u64>())
        {
            return input_num / 100 == candidate_num / 100;
        }
    }
    false
}

fn is_round_hundred(token: &str) -> bool {
    matches!(token.parse::<u64>(), Ok(n) if n >= 100 && n % 100 == 0)
}

/// Lowercase, strip trademark glyphs, split on separators, then split again
/// at digit→letter boundaries so "6GB" tokenizes like "6 GB".
fn tokenize(text: &str) -> Vec<String> {
    let lowered: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '®' | '™' | '©'))
        .collect();

    let mut tokens = Vec::new();
    for part in lowered.split(|c: char| {
        c.is_whitespace() || matches!(c, '-' | '/' | ',' | '@' | '(' | ')')
    }) {
        if part.is_empty() {
            continue;
        }
        // Boundary-split only digit-led tokens ("6gb" → "6","gb"); words
        // with embedded digits ("direct3d11", "i7") keep their shape so the
        // noise filter still recognizes them.
        if part.starts_with(|c: char| c.is_ascii_digit()) {
            split_digit_letter_boundaries(part, &mut tokens);
        } else {
            tokens.push(part.to_string());
        }
    }
    tokens
}

fn split_digit_letter_boundaries(part: &str, out: &mut Vec<String>) {
    let mut current = String::new();
    let mut prev_digit = false;
    for c in part.chars() {
        if prev_digit && c.is_alphabetic() && !current.is_empty() {
            out.push(std::mem::take(&mut current));
        }
        prev_digit = c.is_ascii_digit();
        current.push(c);
    }
    if !current.is_empty() {
        out.push(current);
    }
}

fn is_numeric_token(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    const GPUS: &[&str] = &[
        "NVIDIA GeForce RTX 3060",
        "NVIDIA GeForce RTX 3070",
        "NVIDIA GeForce GTX 1060 6GB",
        "AMD Radeon RX 5700 XT",
    ];

    #[test]
    fn exact_model_number_wins() {
        assert_eq!(
            fuzzy_match_hardware("NVIDIA GeForce RTX 3070", GPUS),
            Some("NVIDIA GeForce RTX 3070")
        );
    }

    #[test]
    fn unrelated_text_rejected() {
        assert_eq!(fuzzy_match_hardware("totally unrelated text", GPUS), None);
        assert_eq!(fuzzy_match_hardware("", GPUS), None);
        assert_eq!(fuzzy_match_hardware("   ", GPUS), None);
    }

    #[test]
    fn renderer_noise_is_ignored() {
        let raw = "ANGLE (NVIDIA, NVIDIA GeForce RTX 3070 Direct3D11 vs_5_0 ps_5_0, D3D11)";
        assert_eq!(
            fuzzy_match_hardware(raw, GPUS),
            Some("NVIDIA GeForce RTX 3070")
        );
    }

    #[test]
    fn digit_letter_boundary_matches_memory_suffix() {
        assert_eq!(
            fuzzy_match_hardware("NVIDIA GeForce GTX 1060 (6 GB)", GPUS),
            Some("NVIDIA GeForce GTX 1060 6GB")
        );
    }

    #[test]
    fn alternatives_match_independently() {
        let cpus = &["Intel Core i7-3770K", "AMD FX-8350"];
        assert_eq!(
            fuzzy_match_hardware("Intel Core i7-3770K or AMD FX-8350", cpus),
            Some("Intel Core i7-3770K")
        );
    }

    #[test]
    fn series_phrasing_accepts_same_hundred_bucket() {
        let candidates = &["AMD Radeon RX 650", "AMD Radeon RX 750"];
        assert_eq!(
            fuzzy_match_hardware("AMD Radeon RX 600 series or better", candidates),
            Some("AMD Radeon RX 650")
        );
    }

    #[test]
    fn series_bucket_does_not_cross_hundreds() {
        let candidates = &["AMD Radeon RX 750"];
        assert_eq!(
            fuzzy_match_hardware("AMD Radeon RX 600 series", candidates),
            None
        );
    }

    #[test]
    fn without_series_numbers_must_match_exactly() {
        let candidates = &["NVIDIA GeForce GTX 660"];
        assert_eq!(fuzzy_match_hardware("NVIDIA GeForce GTX 600", candidates), None);
    }

    #[test]
    fn clock_specs_do_not_pollute_model_match() {
        let cpus = &["Intel Core i5-8400"];
        assert_eq!(
            fuzzy_match_hardware("Intel Core i5-8400 @ 2.8 GHz 6-core", cpus),
            Some("Intel Core i5-8400")
        );
    }

    #[test]
    fn threshold_is_inclusive_at_sixty_percent() {
        // Five weight-1 tokens, three hits: exactly 0.60.
        let candidates = &["alpha beta gamma delta epsilon"];
        assert_eq!(
            fuzzy_match_hardware("alpha beta gamma", candidates),
            Some("alpha beta gamma delta epsilon")
        );
        // Two hits of five: 0.40, rejected.
        assert_eq!(fuzzy_match_hardware("alpha beta", candidates), None);
    }

    #[test]
    fn numeric_weight_dominates_ties() {
        // Same word overlap either way; only the number disambiguates.
        assert_eq!(
            fuzzy_match_hardware("GeForce RTX 3060", GPUS),
            Some("NVIDIA GeForce RTX 3060")
        );
    }
}
