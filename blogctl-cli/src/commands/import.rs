//! Bulk import from a local JSON file
//!
//! Same rules as `POST /import_json`: the file must end in `.json`, contain a
//! JSON array, and every element needs `title`, `content` and `tags`. The
//! first bad element stops the import; earlier articles stay stored.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;

use blogctl_server::http::error::INVALID_FILE_TYPE;
use blogctl_server::{import_payload, ArticleRepo, ImportError, Store};

/// Arguments for the import command
#[derive(Parser, Debug)]
pub struct ImportArgs {
    /// JSON file containing a list of articles
    pub file: PathBuf,

    /// SQLite database file
    #[arg(long, default_value = "blog.db")]
    pub db_path: PathBuf,
}

fn has_json_extension(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(".json"))
}

pub async fn run_import(args: ImportArgs) -> Result<()> {
    if !has_json_extension(&args.file) {
        bail!(INVALID_FILE_TYPE);
    }

    let payload = tokio::fs::read(&args.file)
        .await
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    let store = Store::new(&args.db_path);
    store
        .ensure_schema()
        .await
        .with_context(|| format!("Failed to initialize database at {}", args.db_path.display()))?;

    let repo = ArticleRepo::new(&store);
    match import_payload(&repo, &payload).await {
        Ok(summary) => {
            println!(
                "Imported {} articles into {}",
                summary.imported(),
                args.db_path.display()
            );
            Ok(())
        }
        Err(err) => {
            let context = match &err {
                ImportError::MissingFields { index, source } => match source.field() {
                    Some(field) => format!(
                        "Article #{index} rejected at field `{field}` ({source}), {index} imported before it"
                    ),
                    None => format!("Article #{index} rejected ({source}), {index} imported before it"),
                },
                ImportError::Store {
                    index, inserted, ..
                } => format!("Article #{index} could not be stored, {inserted} imported before it"),
                _ => format!("Nothing imported from {}", args.file.display()),
            };
            Err(anyhow::Error::new(err).context(context))
        }
    }
}
