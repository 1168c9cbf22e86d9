//! Client library for the Fakku catalog API
//!
//! This crate is the **Imperative Shell** around [`fakku_core`]: it owns the HTTP
//! transport and exposes one async operation per catalog endpoint. URL
//! composition and JSON decoding live in the core crate.
//!
//! ```rust,no_run
//! # async fn example() -> fakku::Result<()> {
//! let client = fakku::FakkuClient::new()?;
//! let comments = client.content_top_comments("manga", "example-manga").await?;
//! for comment in &comments.comments {
//!     println!("{}: {}", comment.poster, comment.text);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The free functions below mirror the client methods and build a default client
//! per call.

pub mod client;
pub mod config;
pub mod error;

pub use client::FakkuClient;
pub use config::ClientConfig;
pub use error::{Error, Result, TransportError};
pub use fakku_core::{
    Attribute, Comment, CommentPage, ContentImages, ContentItem, DecodeError, Download,
    DownloadListing, ReadableContent, ReaderPage, Tag,
};

pub async fn get_content_information(category: &str, name: &str) -> Result<ContentItem> {
    FakkuClient::new()?
        .content_information(category, name)
        .await
}

pub async fn get_content_comments(category: &str, name: &str) -> Result<CommentPage> {
    FakkuClient::new()?.content_comments(category, name).await
}

pub async fn get_content_comments_page(
    category: &str,
    name: &str,
    page: u32,
) -> Result<CommentPage> {
    FakkuClient::new()?
        .content_comments_page(category, name, page)
        .await
}

pub async fn get_content_top_comments(category: &str, name: &str) -> Result<CommentPage> {
    FakkuClient::new()?
        .content_top_comments(category, name)
        .await
}

pub async fn get_content_read_online(category: &str, name: &str) -> Result<ReadableContent> {
    FakkuClient::new()?
        .content_read_online(category, name)
        .await
}

pub async fn get_content_downloads(category: &str, name: &str) -> Result<DownloadListing> {
    FakkuClient::new()?.content_downloads(category, name).await
}

/// All catalog tags, in response order
pub async fn tags() -> Result<Vec<Tag>> {
    FakkuClient::new()?.tags().await
}
