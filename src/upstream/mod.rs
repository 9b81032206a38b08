//! Upstream Module
//!
//! Outbound access to the Pokemon REST API and the mapping of its payloads
//! into [`PokemonSummary`](crate::models::PokemonSummary) records.

mod client;
mod transform;

pub use client::UpstreamClient;
pub use transform::{extract_types, parse_index, transform, NamedResource, TypeSlot};
