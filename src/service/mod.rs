//! Service Module
//!
//! The facade that orchestrates upstream fetches, transformation, and caching.

mod pokemon;

pub use pokemon::{PokemonService, DEFAULT_DETAIL_CONCURRENCY};
