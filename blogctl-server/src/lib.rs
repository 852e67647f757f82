//! blogctl-server: article storage and HTTP views
//!
//! Stores articles in a single SQLite table, renders a paginated list and
//! single-article pages, and imports articles in bulk from JSON.

pub mod db;
pub mod http;
pub mod import;
pub mod models;

pub use db::{ArticleRepo, Store, StoreError};
pub use http::{build_router, run_server, AppState, ServerConfig};
pub use import::{import_payload, ImportError, ImportSummary};
