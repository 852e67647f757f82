//! SQLite storage accessor
//!
//! Every operation opens its own connection, runs one statement and closes
//! the connection again. Nothing is pooled and no connection outlives the
//! call that opened it.
//!
//! Reads never fail from the caller's point of view: store errors are logged
//! and turned into an empty result. Writes return a typed [`StoreError`].

use std::path::{Path, PathBuf};

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteQueryResult, SqliteRow};
use sqlx::{ConnectOptions, Connection, FromRow};

/// Schema for the single articles table.
const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS articles (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        content TEXT NOT NULL,
        tags TEXT NOT NULL
    )
"#;

/// Storage error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Positional parameter bound to a `?` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlParam {
    Integer(i64),
    Text(String),
}

impl From<i64> for SqlParam {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<&str> for SqlParam {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for SqlParam {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// Outcome of a successful write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Executed {
    pub last_insert_id: i64,
}

impl From<SqliteQueryResult> for Executed {
    fn from(r: SqliteQueryResult) -> Self {
        Self {
            last_insert_id: r.last_insert_rowid(),
        }
    }
}

/// File-backed SQLite store.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
    options: SqliteConnectOptions,
}

impl Store {
    /// Create a store for the database file at `path`.
    ///
    /// No connection is opened here; the file is created on first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true);

        Self { path, options }
    }

    /// Get the database file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the articles table if it does not exist.
    ///
    /// Also creates the parent directory of the database file.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        self.execute(SCHEMA, &[]).await?;
        tracing::info!(path = %self.path.display(), "database initialized");
        Ok(())
    }

    /// Run a read query, mapping each row to `T`.
    ///
    /// Returns an empty vec if the store cannot be reached or the
    /// statement fails; the error is logged.
    pub async fn query<T>(&self, sql: &str, params: &[SqlParam]) -> Vec<T>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        match self.try_query(sql, params).await {
            Ok(rows) => rows,
            Err(err) => {
                tracing::error!(error = %err, "error while fetching rows");
                Vec::new()
            }
        }
    }

    /// Run a write statement.
    pub async fn execute(&self, sql: &str, params: &[SqlParam]) -> Result<Executed, StoreError> {
        let result = self.try_execute(sql, params).await;
        if let Err(err) = &result {
            tracing::error!(error = %err, "error while executing statement");
        }
        result
    }

    async fn try_query<T>(&self, sql: &str, params: &[SqlParam]) -> Result<Vec<T>, StoreError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        let mut conn = self.connect().await?;

        let mut query = sqlx::query_as::<_, T>(sql);
        for param in params {
            query = match param {
                SqlParam::Integer(v) => query.bind(*v),
                SqlParam::Text(v) => query.bind(v.clone()),
            };
        }

        let rows = query.fetch_all(&mut conn).await;
        release(conn).await;
        Ok(rows?)
    }

    async fn try_execute(&self, sql: &str, params: &[SqlParam]) -> Result<Executed, StoreError> {
        let mut conn = self.connect().await?;

        let mut query = sqlx::query(sql);
        for param in params {
            query = match param {
                SqlParam::Integer(v) => query.bind(*v),
                SqlParam::Text(v) => query.bind(v.clone()),
            };
        }

        let result = query.execute(&mut conn).await;
        release(conn).await;
        Ok(result?.into())
    }

    async fn connect(&self) -> Result<SqliteConnection, StoreError> {
        Ok(self.options.connect().await?)
    }
}

/// Close a connection, logging rather than failing on error.
async fn release(conn: SqliteConnection) {
    if let Err(err) = conn.close().await {
        tracing::warn!(error = %err, "failed to close database connection");
    }
}
