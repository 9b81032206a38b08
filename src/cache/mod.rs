//! Cache Module
//!
//! Time-bounded memoization of upstream lookups.
//!
//! The facade talks to the [`PokemonCache`] trait; [`InMemoryCache`] is the
//! process-wide implementation. [`remember`] layers get-or-compute on top.

mod backend;
mod entry;
pub mod keys;
mod remember;
mod stats;
mod store;
mod value;


// Re-export public types
pub use backend::{InMemoryCache, PokemonCache};
pub use entry::CacheEntry;
pub use remember::{remember, Computed};
pub use stats::CacheStats;
pub use store::CacheStore;
pub use value::CachedValue;

// == Public Constants ==
/// Default lifetime of a cached lookup in seconds
pub const DEFAULT_TTL_SECS: u64 = 3600;
