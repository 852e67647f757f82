//! Bulk article import from JSON payloads
//!
//! A payload must be a JSON array of article objects. Elements are validated
//! and inserted one at a time, in order. The first invalid element or failed
//! insert stops the import.
//!
//! There is no wrapping transaction: articles inserted before the failing
//! element stay in the store.

use serde_json::Value;
use thiserror::Error;

use crate::db::{ArticleRepo, StoreError};
use crate::models::{ArticleInput, ValidationError};

/// Import error type
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Invalid JSON format: {0}")]
    InvalidJson(String),

    #[error("JSON file content must be a list of articles.")]
    NotAList,

    #[error("Missing fields in some articles.")]
    MissingFields {
        index: usize,
        source: ValidationError,
    },

    #[error("Failed to insert article: {source}")]
    Store {
        index: usize,
        /// Articles committed before the failure
        inserted: usize,
        source: StoreError,
    },
}

/// Result of a completed import
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Ids of the inserted articles, in payload order
    pub ids: Vec<i64>,
}

impl ImportSummary {
    pub fn imported(&self) -> usize {
        self.ids.len()
    }
}

/// Decode a payload into its list of elements.
pub fn parse_payload(bytes: &[u8]) -> Result<Vec<Value>, ImportError> {
    let text = std::str::from_utf8(bytes).map_err(|e| ImportError::InvalidJson(e.to_string()))?;
    let value: Value =
        serde_json::from_str(text).map_err(|e| ImportError::InvalidJson(e.to_string()))?;

    match value {
        Value::Array(items) => Ok(items),
        _ => Err(ImportError::NotAList),
    }
}

/// Validate and insert each element in order, stopping at the first failure.
pub async fn import_articles(
    repo: &ArticleRepo<'_>,
    elements: &[Value],
) -> Result<ImportSummary, ImportError> {
    let mut summary = ImportSummary::default();

    for (index, element) in elements.iter().enumerate() {
        let input = ArticleInput::from_value(element).map_err(|source| {
            tracing::warn!(
                index,
                field = source.field(),
                error = %source,
                "rejecting import element"
            );
            ImportError::MissingFields { index, source }
        })?;

        let id = repo
            .insert(&input)
            .await
            .map_err(|source| ImportError::Store {
                index,
                inserted: summary.imported(),
                source,
            })?;
        summary.ids.push(id);
    }

    tracing::info!(imported = summary.imported(), "articles imported");
    Ok(summary)
}

/// Parse then import a raw payload.
pub async fn import_payload(
    repo: &ArticleRepo<'_>,
    bytes: &[u8],
) -> Result<ImportSummary, ImportError> {
    let elements = parse_payload(bytes)?;
    import_articles(repo, &elements).await
}
