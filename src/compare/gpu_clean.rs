//! Normalizes raw GPU strings (lspci output, bare chip codenames) into a
//! form the fuzzy matcher can resolve against catalog product names.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

/// Chip codename → closest catalog product. Unbranded codenames show up in
/// lspci output on open-source drivers ("Navi 10", "GA104"); this is a data
/// table, looked up case-insensitively as a substring of the cleaned name.
const GPU_CODENAMES: &[(&str, &str)] = &[
    // AMD RDNA chips
    ("navi 10", "AMD Radeon RX 5700 XT"),
    ("navi 14", "AMD Radeon RX 5500 XT"),
    ("navi 21", "AMD Radeon RX 6800 XT"),
    ("navi 22", "AMD Radeon RX 6700 XT"),
    ("navi 23", "AMD Radeon RX 6600"),
    ("navi 31", "AMD Radeon RX 7900 XTX"),
    ("navi 32", "AMD Radeon RX 7800 XT"),
    ("navi 33", "AMD Radeon RX 7600"),
    // NVIDIA Pascal
    ("gp104", "NVIDIA GeForce GTX 1080"),
    ("gp106", "NVIDIA GeForce GTX 1060 6GB"),
    ("gp107", "NVIDIA GeForce GTX 1050 Ti"),
    // NVIDIA Turing
    ("tu102", "NVIDIA GeForce RTX 2080 Ti"),
    ("tu104", "NVIDIA GeForce RTX 2080"),
    ("tu106", "NVIDIA GeForce RTX 2070"),
    ("tu116", "NVIDIA GeForce GTX 1660"),
    // NVIDIA Ampere
    ("ga102", "NVIDIA GeForce RTX 3080"),
    ("ga104", "NVIDIA GeForce RTX 3070"),
    ("ga106", "NVIDIA GeForce RTX 3060"),
    // NVIDIA Ada
    ("ad102", "NVIDIA GeForce RTX 4090"),
    ("ad103", "NVIDIA GeForce RTX 4080"),
    ("ad104", "NVIDIA GeForce RTX 4070 Ti"),
    ("ad106", "NVIDIA GeForce RTX 4060 Ti"),
];

fn slot_prefix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // "01:00.0 VGA compatible controller: " style lspci prefixes.
    RE.get_or_init(|| {
        Regex::new(r"(?i)^[0-9a-f]{2}:[0-9a-f]{2}\.\d\s+[^:]*:\s*").expect("valid regex")
    })
}

fn rev_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\(rev\s+[0-9a-fA-F]+\)").expect("valid regex"))
}

fn bracket_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[(.+?)\]").expect("valid regex"))
}

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"))
}

/// Clean a raw GPU string for matching: strip the PCI slot prefix and
/// `(rev xx)` suffix, prefer the bracketed device name with a vendor
/// prefix, and resolve bare chip codenames to catalog products.
pub fn clean_gpu_string(raw: &str) -> String {
    let name = slot_prefix_re().replace(raw.trim(), "");
    let name = rev_re().replace_all(&name, "");

    // lspci may carry two bracket groups ("[AMD/ATI] Navi 23 [Radeon RX
    // 6600]"); the device name is the last one.
    let mut name = if let Some(caps) = bracket_re().captures_iter(&name).last() {
        let device = caps[1].to_string();
        match vendor_of(&name) {
            // "Intel Corporation Raptor Lake-P [UHD Graphics]" → "Intel UHD Graphics",
            // unless the bracket already names the vendor.
            Some(vendor) if !device.to_lowercase().contains(&vendor.to_lowercase()) => {
                format!("{vendor} {device}")
            }
            _ => device,
        }
    } else {
        name.replace("Advanced Micro Devices, Inc.", "AMD")
            .replace("Advanced Micro Devices", "AMD")
            .replace("Corporation", "")
    };

    name = whitespace_re().replace_all(&name, " ").trim().to_string();

    if let Some(product) = resolve_codename(&name) {
        debug!(raw, codename = %name, product, "resolved GPU codename");
        return product.to_string();
    }
    name
}

fn vendor_of(name: &str) -> Option<&'static str> {
    let lower = name.to_lowercase();
    if lower.contains("intel") {
        Some("Intel")
    } else if lower.contains("nvidia") {
        Some("NVIDIA")
    } else if lower.contains("amd") || lower.contains("advanced micro") {
        Some("AMD")
    } else {
        None
    }
}

/// Look up a chip codename inside the cleaned name. Only applies when the
/// name carries no retail model number of its own, so "RX 5700 XT (Navi 10)"
/// keeps its retail identity.
fn resolve_codename(name: &str) -> Option<&'static str> {
    let lower = name.to_lowercase();
    if has_retail_model(&lower) {
        return None;
    }
    GPU_CODENAMES
        .iter()
        .find(|(codename, _)| lower.contains(codename))
        .map(|(_, product)| *product)
}

fn has_retail_model(lower: &str) -> bool {
    ["geforce", "radeon rx", "gtx", "rtx", "arc"]
        .iter()
        .any(|marker| lower.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_lspci_prefix_and_rev() {
        let raw = "01:00.0 VGA compatible controller: NVIDIA Corporation GA104 (rev a1)";
        assert_eq!(clean_gpu_string(raw), "NVIDIA GeForce RTX 3070");
    }

    #[test]
    fn bracket_device_gets_vendor_prefix() {
        let raw = "Intel Corporation Raptor Lake-P [UHD Graphics] (rev 04)";
        assert_eq!(clean_gpu_string(raw), "Intel UHD Graphics");
    }

    #[test]
    fn bracket_containing_vendor_is_not_doubled() {
        let raw = "Advanced Micro Devices, Inc. [AMD/ATI] Navi 23 [AMD Radeon RX 6600]";
        let cleaned = clean_gpu_string(raw);
        assert!(!cleaned.to_lowercase().contains("amd amd"));
        assert!(cleaned.contains("Radeon RX 6600"));
    }

    #[test]
    fn unbranded_codename_resolves_to_product() {
        assert_eq!(clean_gpu_string("Navi 10"), "AMD Radeon RX 5700 XT");
        assert_eq!(clean_gpu_string("NVIDIA Corporation GA106"), "NVIDIA GeForce RTX 3060");
    }

    #[test]
    fn retail_name_wins_over_codename() {
        // The codename table must not rewrite a name that already carries
        // its retail identity.
        let raw = "AMD Radeon RX 5700 XT (Navi 10)";
        assert_eq!(clean_gpu_string(raw), "AMD Radeon RX 5700 XT (Navi 10)");
    }

    #[test]
    fn plain_retail_names_pass_through() {
        assert_eq!(
            clean_gpu_string("NVIDIA GeForce RTX 3070"),
            "NVIDIA GeForce RTX 3070"
        );
    }
}
