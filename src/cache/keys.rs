//! Cache key construction.
//!
//! Every parameter that changes an upstream result is part of its key.
//! Name search has no key because it is never cached.

use crate::models::ListQuery;

/// Key for one list page.
pub fn list_key(query: &ListQuery) -> String {
    format!("pokemon_list_{}_{}", query.limit(), query.offset())
}

/// Key for a detail lookup by resource URL.
///
/// Uses the numeric id when the URL ends in one, the raw final segment
/// otherwise, so non-numeric URLs never share a key.
pub fn details_key(url: &str) -> String {
    match extract_pokemon_id_from_url(url) {
        Some(id) => format!("pokemon_details_{}", id),
        None => format!("pokemon_details_{}", last_segment(url)),
    }
}

/// Key for a direct id lookup.
pub fn by_id_key(id: u32) -> String {
    format!("pokemon_by_id_{}", id)
}

/// Parses the numeric id from the final path segment of a resource URL.
///
/// `https://pokeapi.co/api/v2/pokemon/25/` yields `Some(25)`.
pub fn extract_pokemon_id_from_url(url: &str) -> Option<u32> {
    last_segment(url).parse().ok()
}

fn last_segment(url: &str) -> &str {
    let trimmed = url.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}
