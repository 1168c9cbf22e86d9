//! Catalog-wide tag definitions
//!
//! The tags endpoint follows the same envelope convention as the content
//! endpoints: `{"tags": [{"tag_name": ..., "tag_url": ..., "tag_description": ...}]}`.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::api::resolve_link;
use crate::decode::{unwrap_envelope, DecodeError};

/// A catalog-wide tag definition
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Tag {
    #[serde(rename(deserialize = "tag_name"))]
    pub name: String,
    #[serde(rename(deserialize = "tag_description"))]
    pub description: String,
    /// Detail link as returned by the catalog, possibly relative
    #[serde(rename(deserialize = "tag_url"))]
    pub link: String,
}

impl Tag {
    /// Absolute URL of the tag detail page
    pub fn url(&self) -> Result<Url, url::ParseError> {
        resolve_link(&self.link)
    }
}

/// Decode a `{"tags": [...]}` response, preserving response order
pub fn decode_tags(body: &str) -> Result<Vec<Tag>, DecodeError> {
    unwrap_envelope(body, "tags")
}
