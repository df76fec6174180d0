//! Wire types shared by the Masterblog server and its clients.

use serde::{Deserialize, Serialize};

/// A blog post as returned by every posts endpoint.
///
/// `author` and `date` are always present after creation but an update may
/// clear them, in which case they serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author: Option<String>,
    pub date: Option<String>,
}

/// Body accepted by `POST /api/posts` and `PUT /api/posts/{id}`.
///
/// Every field is optional on the wire so that missing `title`/`content`
/// surfaces as a validation error rather than a decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostWriteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostListQuery {
    pub sort: Option<String>,
    pub direction: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostSearchQuery {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// Error payload, rendered as `{"Error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(rename = "Error")]
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_uses_capitalised_key() {
        let body = ErrorBody {
            error: "Title and content needed!".to_string(),
        };
        let value = serde_json::to_value(&body).expect("serialize");
        assert_eq!(value, serde_json::json!({"Error": "Title and content needed!"}));
    }

    #[test]
    fn write_request_tolerates_missing_fields() {
        let request: PostWriteRequest =
            serde_json::from_str(r#"{"title": "Only a title"}"#).expect("deserialize");
        assert_eq!(request.title.as_deref(), Some("Only a title"));
        assert!(request.content.is_none());
        assert!(request.author.is_none());
    }

    #[test]
    fn cleared_fields_serialize_as_null() {
        let post = PostRecord {
            id: 3,
            title: "t".to_string(),
            content: "c".to_string(),
            author: None,
            date: None,
        };
        let value = serde_json::to_value(&post).expect("serialize");
        assert!(value["author"].is_null());
        assert!(value["date"].is_null());
    }
}
