//! API Module
//!
//! HTTP handlers and routing for the gateway REST API.
//!
//! # Endpoints
//! - `GET /api/pokemon` - Paginated list of summaries
//! - `GET /api/pokemon/search` - Lookup by name
//! - `GET /api/pokemon/:id` - Lookup by numeric id
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
