//! Command implementations for blogctl CLI

pub mod import;
pub mod serve;

// Re-export dispatcher functions for flat access from main.rs
pub use import::run_import;
pub use serve::run_serve;
