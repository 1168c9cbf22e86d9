//! Content items and their attributes
//!
//! Wire names carry a `content_` prefix; the Rust fields drop it. Serializing a
//! model uses the Rust names, which is what the CLI prints with `--json`.

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

use crate::api::resolve_link;
use crate::decode::{unwrap_envelope, DecodeError};

/// A labeled, linkable classifier (tag, artist, translator, series)
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub attribute: String,
    pub attribute_link: String,
}

impl Attribute {
    /// Absolute URL of the attribute link
    pub fn url(&self) -> Result<Url, url::ParseError> {
        resolve_link(&self.attribute_link)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.attribute)
    }
}

/// Cover and sample image URLs
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ContentImages {
    pub cover: String,
    pub sample: String,
}

/// One catalog entry
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ContentItem {
    #[serde(rename(deserialize = "content_name"))]
    pub name: String,
    #[serde(rename(deserialize = "content_url"))]
    pub url: String,
    #[serde(rename(deserialize = "content_description"))]
    pub description: String,
    #[serde(rename(deserialize = "content_language"))]
    pub language: String,
    #[serde(rename(deserialize = "content_category"))]
    pub category: String,
    /// Unix timestamp of publication
    #[serde(rename(deserialize = "content_date"))]
    pub date: u64,
    #[serde(rename(deserialize = "content_filesize"))]
    pub file_size: f64,
    #[serde(rename(deserialize = "content_favorites"))]
    pub favorites: u64,
    #[serde(rename(deserialize = "content_comments"))]
    pub comments: u64,
    #[serde(rename(deserialize = "content_pages"))]
    pub pages: u64,
    #[serde(rename(deserialize = "content_poster"))]
    pub poster: String,
    #[serde(rename(deserialize = "content_poster_url"))]
    pub poster_url: String,
    #[serde(rename(deserialize = "content_tags"))]
    pub tags: Vec<Attribute>,
    #[serde(rename(deserialize = "content_translators"))]
    pub translators: Vec<Attribute>,
    #[serde(rename(deserialize = "content_series"))]
    pub series: Vec<Attribute>,
    #[serde(rename(deserialize = "content_artists"))]
    pub artists: Vec<Attribute>,
    #[serde(rename(deserialize = "content_images"))]
    pub images: ContentImages,
}

/// Join attribute labels for display, preserving response order
pub fn join_attributes(attributes: &[Attribute]) -> String {
    attributes
        .iter()
        .map(|a| a.attribute.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Decode a `{"content": {...}}` response
pub fn decode_content(body: &str) -> Result<ContentItem, DecodeError> {
    unwrap_envelope(body, "content")
}

#[cfg(test)]
pub(crate) mod fixtures {
    use serde_json::{json, Value};

    pub fn content_json() -> Value {
        json!({
            "content_name": "Example Manga",
            "content_url": "https://www.fakku.net/manga/example-manga",
            "content_description": "<p>A short &amp; sweet story</p>",
            "content_language": "english",
            "content_category": "manga",
            "content_date": 1609459200,
            "content_filesize": 24.5,
            "content_favorites": 120,
            "content_comments": 14,
            "content_pages": 3,
            "content_poster": "uploader",
            "content_poster_url": "https://www.fakku.net/users/uploader",
            "content_tags": [
                {"attribute": "Vanilla", "attribute_link": "/tags/vanilla"},
                {"attribute": "Comedy", "attribute_link": "/tags/comedy"},
                {"attribute": "Anthology", "attribute_link": "/tags/anthology"}
            ],
            "content_translators": [
                {"attribute": "Team A", "attribute_link": "/translators/team-a"}
            ],
            "content_series": [],
            "content_artists": [
                {"attribute": "Zeta", "attribute_link": "/artists/zeta"},
                {"attribute": "Alpha", "attribute_link": "/artists/alpha"}
            ],
            "content_images": {
                "cover": "https://cdn.fakku.net/cover.jpg",
                "sample": "https://cdn.fakku.net/sample.jpg"
            }
        })
    }
}
