//! Pokemon Gateway - A caching facade over PokeAPI
//!
//! Fetches Pokemon from the upstream REST API, reshapes each one into a
//! `{name, type, image}` summary, and memoizes results for a fixed TTL.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod tasks;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use error::{GatewayError, Result};
pub use service::PokemonService;
pub use tasks::spawn_cleanup_task;
