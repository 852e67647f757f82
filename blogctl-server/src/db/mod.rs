//! Database layer - storage accessor and repositories
//!
//! # Design Principles
//!
//! - One connection per operation, closed afterwards - no pool, no shared handle
//! - Reads degrade to empty results on failure, writes return StoreError
//! - Each insert is its own statement; no multi-statement transactions

pub mod repos;
pub mod store;

pub use repos::*;
pub use store::{Executed, SqlParam, Store, StoreError};
