//! HTTP API layer for the carrier pricing service.
//!
//! Provides REST endpoints for basic, vehicle and carrier quotes.

pub mod handlers;
mod routes;
mod types;

pub use routes::build_router;
