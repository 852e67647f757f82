//! HTTP server layer
//!
//! Axum server with:
//! - HTML list/detail views
//! - JSON bulk import
//! - Request tracing
//! - Graceful shutdown

pub mod error;
pub mod routes;
pub mod server;
pub mod templates;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
