//! Cached Value Module
//!
//! The payloads the facade memoizes.

use crate::models::PokemonSummary;

/// A memoized facade result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CachedValue {
    /// Result of a detail, by-id, or search lookup
    One(PokemonSummary),
    /// Result of a list page
    Many(Vec<PokemonSummary>),
}

impl CachedValue {
    /// Returns the single record, or None for a list payload.
    pub fn into_one(self) -> Option<PokemonSummary> {
        match self {
            CachedValue::One(summary) => Some(summary),
            CachedValue::Many(_) => None,
        }
    }

    /// Returns the list payload, or None for a single record.
    pub fn into_many(self) -> Option<Vec<PokemonSummary>> {
        match self {
            CachedValue::Many(list) => Some(list),
            CachedValue::One(_) => None,
        }
    }
}
