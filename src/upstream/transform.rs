//! Payload Transformer
//!
//! Pure mapping from raw upstream JSON to client-facing records.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{GatewayError, Result};
use crate::models::PokemonSummary;

/// One entry of a Pokemon's `types` array.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// `{name, url}` reference as used throughout the upstream API.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct IndexPage {
    results: Vec<IndexEntry>,
}

#[derive(Debug, Deserialize)]
struct IndexEntry {
    url: String,
}

/// Maps one upstream Pokemon object to a [`PokemonSummary`].
///
/// `name` and `types` are required; the sprite is read leniently and is
/// `None` when missing or null at any level.
pub fn transform(raw: &Value) -> Result<PokemonSummary> {
    let name = raw
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| GatewayError::MalformedPayload("pokemon has no name".to_string()))?;

    let types = raw
        .get("types")
        .ok_or_else(|| GatewayError::MalformedPayload(format!("{} has no types", name)))?;
    let slots = Vec::<TypeSlot>::deserialize(types).map_err(|e| {
        GatewayError::MalformedPayload(format!("{} has unreadable types: {}", name, e))
    })?;

    let image = raw
        .pointer("/sprites/front_default")
        .and_then(Value::as_str)
        .map(String::from);

    Ok(PokemonSummary::new(name, extract_types(&slots), image))
}

/// Joins type names with ", " in upstream order.
pub fn extract_types(slots: &[TypeSlot]) -> String {
    slots
        .iter()
        .map(|slot| slot.kind.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Reads the detail URLs out of an index page, preserving order.
pub fn parse_index(raw: &Value) -> Result<Vec<String>> {
    let page = IndexPage::deserialize(raw)
        .map_err(|e| GatewayError::MalformedPayload(format!("unreadable index page: {}", e)))?;

    Ok(page.results.into_iter().map(|entry| entry.url).collect())
}
