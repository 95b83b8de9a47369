//! Storefront source adapters.
//!
//! Each provider publishes requirement text under its own JSON shape.
//! The adapters normalize all of them to [`RequirementFragments`]
//! before the parser ever runs, so provider field names stay out of
//! the core types.

use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// Raw HTML requirement fragments for one game, one per tier.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RequirementFragments {
    pub minimum: Option<String>,
    pub recommended: Option<String>,
}

/// A provider payload paired with the knowledge of which provider
/// produced it.
#[derive(Debug, Clone)]
pub enum RequirementSource {
    /// Steam appdetails `data` object: `pc_requirements.minimum` /
    /// `pc_requirements.recommended`. Steam serializes an absent block
    /// as an empty array instead of an object.
    Steam(Value),
    /// RAWG game detail: `platforms[].requirements` on the PC entry.
    Rawg(Value),
    /// IGDB-style flat object with `minimum` / `recommended` keys.
    Igdb(Value),
}

impl RequirementSource {
    pub fn fragments(&self) -> RequirementFragments {
        match self {
            RequirementSource::Steam(payload) => steam_fragments(payload),
            RequirementSource::Rawg(payload) => rawg_fragments(payload),
            RequirementSource::Igdb(payload) => igdb_fragments(payload),
        }
    }
}

fn text_field(obj: &Value, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

fn steam_fragments(payload: &Value) -> RequirementFragments {
    let reqs = payload.get("pc_requirements").unwrap_or(&Value::Null);
    if !reqs.is_object() {
        // Empty array or missing block: the game publishes nothing.
        debug!("steam payload has no pc_requirements object");
        return RequirementFragments::default();
    }
    RequirementFragments {
        minimum: text_field(reqs, "minimum"),
        recommended: text_field(reqs, "recommended"),
    }
}

fn rawg_fragments(payload: &Value) -> RequirementFragments {
    let platforms = match payload.get("platforms").and_then(Value::as_array) {
        Some(platforms) => platforms,
        None => {
            debug!("rawg payload has no platforms array");
            return RequirementFragments::default();
        }
    };

    // Prefer the PC entry; fall back to the first entry that carries
    // any requirement text at all.
    let pick = platforms
        .iter()
        .find(|p| {
            p.get("platform")
                .and_then(|meta| meta.get("slug"))
                .and_then(Value::as_str)
                == Some("pc")
        })
        .or_else(|| {
            platforms
                .iter()
                .find(|p| p.get("requirements").map_or(false, Value::is_object))
        });

    match pick.and_then(|p| p.get("requirements")).filter(|r| r.is_object()) {
        Some(reqs) => RequirementFragments {
            minimum: text_field(reqs, "minimum"),
            recommended: text_field(reqs, "recommended"),
        },
        None => RequirementFragments::default(),
    }
}

fn igdb_fragments(payload: &Value) -> RequirementFragments {
    RequirementFragments {
        minimum: text_field(payload, "minimum"),
        recommended: text_field(payload, "recommended"),
    }
}

/// Resolved storefront listing for one game.
#[derive(Debug, Clone)]
pub struct GameListing {
    pub name: String,
    pub fragments: RequirementFragments,
}

/// Fetches a game's Steam appdetails and extracts its requirement
/// fragments.
pub async fn fetch_steam_listing(client: &Client, appid: u64) -> Result<GameListing> {
    let url = format!("https://store.steampowered.com/api/appdetails?appids={appid}");
    let resp = client
        .get(&url)
        .send()
        .await
        .context("requesting steam appdetails")?;
    if !resp.status().is_success() {
        return Err(anyhow!("steam appdetails returned {}", resp.status()));
    }

    let body: Value = resp.json().await.context("decoding steam appdetails")?;
    let entry = body
        .get(appid.to_string())
        .ok_or_else(|| anyhow!("steam response missing appid {appid}"))?;
    if entry.get("success").and_then(Value::as_bool) != Some(true) {
        warn!(appid, "steam reports no such app");
        return Err(anyhow!("steam has no app {appid}"));
    }
    let data = entry
        .get("data")
        .cloned()
        .ok_or_else(|| anyhow!("steam response missing data for {appid}"))?;

    let name = data
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string();
    let fragments = RequirementSource::Steam(data).fragments();
    Ok(GameListing { name, fragments })
}
