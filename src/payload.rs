//! Decoder for the `DINAU:` specs payload emitted by the scanner scripts.
//!
//! The payload is `DINAU:` followed by base64-encoded JSON. Anything
//! that deviates from the expected shape decodes to `None` rather than
//! a partial record; a malformed payload should never half-populate a
//! comparison.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::Value;
use tracing::warn;

use crate::types::{DetectionSource, UserSpecs};

pub const PAYLOAD_PREFIX: &str = "DINAU:";

pub fn decode_specs_payload(input: &str) -> Option<UserSpecs> {
    let trimmed = input.trim();
    let b64 = trimmed.strip_prefix(PAYLOAD_PREFIX)?;

    let bytes = match STANDARD.decode(b64) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(error = %err, "specs payload is not valid base64");
            return None;
        }
    };

    let value: Value = match serde_json::from_slice(&bytes) {
        Ok(value) => value,
        Err(err) => {
            warn!(error = %err, "specs payload is not valid JSON");
            return None;
        }
    };

    let obj = value.as_object()?;

    let os = obj.get("os")?.as_str()?.to_string();
    let cpu = obj.get("cpu")?.as_str()?.to_string();
    // gpu may be absent or null, but a present non-string is malformed.
    let gpu = match obj.get("gpu") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(gpu)) => gpu.clone(),
        Some(_) => return None,
    };

    let number = |key: &str| obj.get(key).and_then(Value::as_f64);

    Some(UserSpecs {
        os,
        cpu,
        gpu,
        cpu_cores: number("cpuCores").map(|n| n as u32),
        cpu_speed_ghz: number("cpuSpeedGHz"),
        ram_gb: number("ramGB"),
        storage_gb: number("storageGB"),
        detection_source: DetectionSource::Script,
        ram_approximate: false,
        guessed_fields: Vec::new(),
        manual_fields: Vec::new(),
    })
}
