//! Domain models with validation at construction
//!
//! Import input is validated when building these types.
//! Invalid input returns ValidationError, not panic.

pub mod article;
pub mod pagination;
pub mod validation;

pub use article::{Article, ArticleInput};
pub use pagination::{Pagination, ARTICLES_PER_PAGE};
pub use validation::ValidationError;
