//! Article views

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::Html,
    routing::get,
    Router,
};

use crate::db::ArticleRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::http::templates::{page_href, render, ArticleTemplate, IndexTemplate};
use crate::models::Pagination;

const DEFAULT_VIEW: &str = "grid";

/// Query parameters for the index.
///
/// Both are kept as raw strings so malformed values fall back to defaults
/// instead of rejecting the request.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IndexParams {
    pub view: Option<String>,
    pub page: Option<String>,
}

impl IndexParams {
    /// Pick `view` and `page` out of decoded query pairs.
    ///
    /// The first occurrence of a repeated key wins.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "view" => &mut params.view,
                "page" => &mut params.page,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }
}

/// GET / - paginated article list
async fn index(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Html<String>, ApiError> {
    let params = IndexParams::from_pairs(pairs);
    let view = params.view.unwrap_or_else(|| DEFAULT_VIEW.to_string());
    let page = Pagination::from_query(params.page.as_deref(), state.config.page_size);

    let repo = ArticleRepo::new(&state.store);
    let articles = repo.list(page.limit(), page.offset()).await;
    let total = repo.count().await;

    tracing::debug!(page = page.page, shown = articles.len(), total, "rendering index");

    let template = IndexTemplate {
        is_list: view == "list",
        grid_href: page_href("grid", page.page),
        list_href: page_href("list", page.page),
        prev_href: page.has_prev().then(|| page_href(&view, page.page - 1)),
        next_href: page
            .has_next(total)
            .then(|| page_href(&view, page.page.saturating_add(1))),
        page: page.page,
        articles,
        view,
    };

    render(&template)
}

/// GET /article/{id} - single article
async fn show_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Html<String>, ApiError> {
    let id: i64 = id.parse().map_err(|_| ApiError::ArticleNotFound)?;

    let article = ArticleRepo::new(&state.store)
        .get(id)
        .await
        .ok_or(ApiError::ArticleNotFound)?;

    render(&ArticleTemplate { article })
}

/// Article routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/article/{id}", get(show_article))
}
