//! Article repository
//!
//! - list: ORDER BY id so pages follow insertion order
//! - get: absent row and store failure both yield None
//! - insert: no field validation here, callers pass a checked ArticleInput

use crate::db::store::{SqlParam, Store, StoreError};
use crate::models::{Article, ArticleInput};

/// Article repository
pub struct ArticleRepo<'a> {
    store: &'a Store,
}

impl<'a> ArticleRepo<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// List up to `limit` articles starting at `offset`.
    pub async fn list(&self, limit: i64, offset: i64) -> Vec<Article> {
        self.store
            .query(
                "SELECT id, title, content, tags FROM articles ORDER BY id ASC LIMIT ? OFFSET ?",
                &[SqlParam::Integer(limit), SqlParam::Integer(offset)],
            )
            .await
    }

    /// Get a single article by id.
    pub async fn get(&self, id: i64) -> Option<Article> {
        self.store
            .query(
                "SELECT id, title, content, tags FROM articles WHERE id = ?",
                &[SqlParam::Integer(id)],
            )
            .await
            .into_iter()
            .next()
    }

    /// Total number of stored articles, 0 if the store is unavailable.
    pub async fn count(&self) -> i64 {
        self.store
            .query::<(i64,)>("SELECT COUNT(*) FROM articles", &[])
            .await
            .first()
            .map(|row| row.0)
            .unwrap_or(0)
    }

    /// Insert one article, returning its new id.
    pub async fn insert(&self, article: &ArticleInput) -> Result<i64, StoreError> {
        let executed = self
            .store
            .execute(
                "INSERT INTO articles (title, content, tags) VALUES (?, ?, ?)",
                &[
                    article.title.as_str().into(),
                    article.content.as_str().into(),
                    article.tags.as_str().into(),
                ],
            )
            .await?;

        tracing::debug!(article_id = executed.last_insert_id, "article inserted");
        Ok(executed.last_insert_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn setup() -> (TempDir, Store) {
        let dir = TempDir::new().expect("tempdir");
        let store = Store::new(dir.path().join("blog.db"));
        store.ensure_schema().await.expect("schema");
        (dir, store)
    }

    fn input(n: usize) -> ArticleInput {
        ArticleInput {
            title: format!("Title {n}"),
            content: format!("Content {n}"),
            tags: format!("tag{n},shared"),
        }
    }

    #[tokio::test]
    async fn insert_then_get_round_trips() {
        let (_dir, store) = setup().await;
        let repo = ArticleRepo::new(&store);

        let article = input(1);
        let id = repo.insert(&article).await.expect("insert");
        let fetched = repo.get(id).await.expect("article exists");

        assert_eq!(fetched.id, id);
        assert_eq!(fetched.title, article.title);
        assert_eq!(fetched.content, article.content);
        assert_eq!(fetched.tags, article.tags);
    }

    #[tokio::test]
    async fn get_missing_is_none() {
        let (_dir, store) = setup().await;
        assert!(ArticleRepo::new(&store).get(999).await.is_none());
    }

    #[tokio::test]
    async fn get_on_broken_store_is_none() {
        let dir = TempDir::new().expect("tempdir");
        // Schema never created: the lookup fails and degrades to None.
        let store = Store::new(dir.path().join("blog.db"));
        assert!(ArticleRepo::new(&store).get(1).await.is_none());
        assert!(ArticleRepo::new(&store).list(6, 0).await.is_empty());
        assert_eq!(ArticleRepo::new(&store).count().await, 0);
    }

    #[tokio::test]
    async fn list_pages_in_insertion_order() {
        let (_dir, store) = setup().await;
        let repo = ArticleRepo::new(&store);

        for n in 0..8 {
            repo.insert(&input(n)).await.expect("insert");
        }

        let first = repo.list(6, 0).await;
        assert_eq!(first.len(), 6);
        assert_eq!(first[0].title, "Title 0");
        assert_eq!(first[5].title, "Title 5");

        let second = repo.list(6, 6).await;
        assert_eq!(second.len(), 2);
        assert_eq!(second[0].title, "Title 6");

        assert!(repo.list(6, 12).await.is_empty());
        assert_eq!(repo.count().await, 8);
    }

    #[tokio::test]
    async fn insert_does_not_validate() {
        let (_dir, store) = setup().await;
        let repo = ArticleRepo::new(&store);

        let empty = ArticleInput {
            title: String::new(),
            content: String::new(),
            tags: String::new(),
        };
        let id = repo.insert(&empty).await.expect("insert");
        assert_eq!(repo.get(id).await.map(|a| a.title), Some(String::new()));
    }
}
