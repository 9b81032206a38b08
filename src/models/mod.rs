//! Request and Response models for the gateway API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies, plus the
//! simplified Pokemon record served to clients.

pub mod pokemon;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use pokemon::PokemonSummary;
pub use requests::{ListParams, ListQuery, SearchParams};
pub use responses::{HealthResponse, MessageResponse, StatsResponse};
