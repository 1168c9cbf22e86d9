//! Comment pages
//!
//! Default, explicit and top-ranked comment endpoints all share one shape:
//! `{"comments": {"comments": [...], "page": n, "total": n, "pages": n}}`.

use serde::{Deserialize, Serialize};

use crate::decode::{unwrap_envelope, DecodeError};

/// One user comment on a content item
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Comment {
    #[serde(rename(deserialize = "comment_id"))]
    pub id: u64,
    #[serde(rename(deserialize = "comment_attached_id"))]
    pub attached_id: String,
    #[serde(rename(deserialize = "comment_poster"))]
    pub poster: String,
    #[serde(rename(deserialize = "comment_poster_url"))]
    pub poster_url: String,
    #[serde(rename(deserialize = "comment_reputation"))]
    pub reputation: i64,
    #[serde(rename(deserialize = "comment_text"))]
    pub text: String,
    /// Unix timestamp
    #[serde(rename(deserialize = "comment_date"))]
    pub date: u64,
}

/// One page of comments, in response order
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CommentPage {
    pub comments: Vec<Comment>,
    pub page: u32,
    pub total: u64,
    pub pages: u32,
}

/// Decode a `{"comments": {...}}` response
pub fn decode_comments(body: &str) -> Result<CommentPage, DecodeError> {
    unwrap_envelope(body, "comments")
}
