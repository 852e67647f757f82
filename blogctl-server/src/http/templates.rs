//! HTML views rendered with askama
//!
//! Template sources live in `templates/` at the crate root.

use askama::Template;
use axum::response::Html;

use super::error::ApiError;
use crate::models::Article;

/// Paginated article list (`/`)
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub articles: Vec<Article>,
    /// Raw `view` query value, echoed back as a CSS modifier
    pub view: String,
    pub is_list: bool,
    pub page: i64,
    pub grid_href: String,
    pub list_href: String,
    pub prev_href: Option<String>,
    pub next_href: Option<String>,
}

/// Single article (`/article/{id}`)
#[derive(Template)]
#[template(path = "article.html")]
pub struct ArticleTemplate {
    pub article: Article,
}

/// Link to a page of the index, preserving the view mode.
pub fn page_href(view: &str, page: i64) -> String {
    format!("/?view={}&page={}", urlencoding::encode(view), page)
}

/// Render a template into an HTML response.
pub fn render<T: Template>(template: &T) -> Result<Html<String>, ApiError> {
    Ok(Html(template.render()?))
}
