//! Repository implementations for database access
//!
//! Repositories borrow a [`Store`](crate::db::Store) and define the data
//! shape each operation returns.

pub mod articles;

pub use articles::ArticleRepo;
