//! Article record and validated import input

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use super::ValidationError;

/// Article record from the database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub tags: String,
}

impl Article {
    /// First `max_chars` characters of the content, with an ellipsis when cut.
    pub fn excerpt(&self, max_chars: usize) -> String {
        let mut chars = self.content.chars();
        let head: String = chars.by_ref().take(max_chars).collect();
        if chars.next().is_some() {
            format!("{}…", head.trim_end())
        } else {
            head
        }
    }
}

/// A single article to insert.
///
/// Values built through [`ArticleInput::from_value`] are guaranteed to have
/// non-empty fields. The repository does not re-check this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleInput {
    pub title: String,
    pub content: String,
    pub tags: String,
}

impl ArticleInput {
    /// Validate one element of an import payload.
    ///
    /// The element must be an object with `title`, `content` and `tags`
    /// set. Non-empty strings are taken as-is; non-zero numbers and `true`
    /// are stored as their text form (`true` as `"1"`). Empty strings, `0`
    /// and `false` count as empty, and arrays or objects are rejected.
    /// Fields are checked in that order and the first failure is returned.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let object = value.as_object().ok_or(ValidationError::NotAnObject)?;

        let field = |name: &'static str| -> Result<String, ValidationError> {
            match object.get(name) {
                None | Some(Value::Null) => Err(ValidationError::Missing { field: name }),
                Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
                Some(Value::Bool(true)) => Ok("1".to_string()),
                Some(Value::Number(n)) if n.as_f64().is_some_and(|f| f != 0.0) => {
                    Ok(n.to_string())
                }
                Some(Value::String(_) | Value::Bool(false) | Value::Number(_)) => {
                    Err(ValidationError::Empty { field: name })
                }
                Some(Value::Array(_) | Value::Object(_)) => {
                    Err(ValidationError::WrongType { field: name })
                }
            }
        };

        Ok(Self {
            title: field("title")?,
            content: field("content")?,
            tags: field("tags")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_complete_article() {
        let input = ArticleInput::from_value(&json!({
            "title": "Hello",
            "content": "World",
            "tags": "rust,web",
            "extra": 42
        }))
        .unwrap();

        assert_eq!(input.title, "Hello");
        assert_eq!(input.content, "World");
        assert_eq!(input.tags, "rust,web");
    }

    #[test]
    fn rejects_missing_tags() {
        let err = ArticleInput::from_value(&json!({"title": "T", "content": "C"})).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "tags" });
    }

    #[test]
    fn rejects_falsy_fields() {
        let err = ArticleInput::from_value(&json!({"title": "", "content": "C", "tags": "x"}))
            .unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "title" });

        let err = ArticleInput::from_value(&json!({"title": "T", "content": null, "tags": "x"}))
            .unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "content" });
    }

    #[test]
    fn scalar_fields_are_stored_as_text() {
        let input = ArticleInput::from_value(&json!({
            "title": 42,
            "content": 2.5,
            "tags": true
        }))
        .unwrap();

        assert_eq!(input.title, "42");
        assert_eq!(input.content, "2.5");
        assert_eq!(input.tags, "1");
    }

    #[test]
    fn falsy_scalars_count_as_empty() {
        let err = ArticleInput::from_value(&json!({"title": 0, "content": "C", "tags": "x"}))
            .unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "title" });

        let err = ArticleInput::from_value(&json!({"title": "T", "content": "C", "tags": false}))
            .unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "tags" });
    }

    #[test]
    fn rejects_non_string_fields() {
        let err = ArticleInput::from_value(&json!({"title": "T", "content": "C", "tags": ["x"]}))
            .unwrap_err();
        assert_eq!(err, ValidationError::WrongType { field: "tags" });
    }

    #[test]
    fn rejects_non_object() {
        let err = ArticleInput::from_value(&json!("just a string")).unwrap_err();
        assert_eq!(err, ValidationError::NotAnObject);
    }

    #[test]
    fn excerpt_truncates_on_char_boundary() {
        let article = Article {
            id: 1,
            title: "T".into(),
            content: "héllo wörld".into(),
            tags: "x".into(),
        };
        assert_eq!(article.excerpt(5), "héllo…");
        assert_eq!(article.excerpt(100), "héllo wörld");
    }
}
