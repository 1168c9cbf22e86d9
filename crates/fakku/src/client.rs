//! HTTP transport for the catalog API
//!
//! Each operation builds its URL with the pure request builder from the core
//! crate, performs exactly one GET, buffers the whole body and hands it to the
//! matching pure decoder. There is no retry, caching or automatic pagination.

use log::{debug, trace};

use fakku_core::comments::decode_comments;
use fakku_core::content::decode_content;
use fakku_core::downloads::decode_downloads;
use fakku_core::reader::decode_read_online;
use fakku_core::tags::decode_tags;
use fakku_core::{
    ApiRequest, CommentPage, ContentItem, DecodeError, DownloadListing, ReadableContent, Tag,
};

use crate::config::ClientConfig;
use crate::error::{Error, Result, TransportError};

/// Catalog API client
///
/// Holds no mutable state; clones share the underlying connection pool and calls
/// may run concurrently. Dropping a returned future cancels its request.
#[derive(Debug, Clone)]
pub struct FakkuClient {
    http: reqwest::Client,
    base_url: String,
}

impl FakkuClient {
    /// Client for the public API host with default transport settings
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder.build().map_err(TransportError::Client)?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL the client requests for `request`
    pub fn url_for(&self, request: &ApiRequest) -> String {
        request.url(&self.base_url)
    }

    async fn fetch<T>(
        &self,
        request: ApiRequest,
        decode: fn(&str) -> std::result::Result<T, DecodeError>,
    ) -> Result<T> {
        let url = self.url_for(&request);
        debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| TransportError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        debug!("{url} responded with HTTP {status}");

        let body = response
            .text()
            .await
            .map_err(|source| TransportError::Request {
                url: url.clone(),
                source,
            })?;
        trace!("{url} returned {} bytes", body.len());

        if !status.is_success() {
            return Err(TransportError::Status { url, status, body }.into());
        }

        decode(&body).map_err(|source| Error::Decode { url, body, source })
    }

    /// Metadata for one content item
    pub async fn content_information(&self, category: &str, name: &str) -> Result<ContentItem> {
        self.fetch(ApiRequest::content(category, name), decode_content)
            .await
    }

    /// Default comment page
    pub async fn content_comments(&self, category: &str, name: &str) -> Result<CommentPage> {
        self.content_comments_page(category, name, 0).await
    }

    /// Explicit comment page; page 0 requests the default page
    pub async fn content_comments_page(
        &self,
        category: &str,
        name: &str,
        page: u32,
    ) -> Result<CommentPage> {
        self.fetch(ApiRequest::comments(category, name, page), decode_comments)
            .await
    }

    /// Top-ranked comments
    pub async fn content_top_comments(&self, category: &str, name: &str) -> Result<CommentPage> {
        self.fetch(ApiRequest::top_comments(category, name), decode_comments)
            .await
    }

    /// Content metadata plus the ordered reader page list
    pub async fn content_read_online(
        &self,
        category: &str,
        name: &str,
    ) -> Result<ReadableContent> {
        self.fetch(ApiRequest::read_online(category, name), decode_read_online)
            .await
    }

    /// Download variants
    pub async fn content_downloads(&self, category: &str, name: &str) -> Result<DownloadListing> {
        self.fetch(ApiRequest::downloads(category, name), decode_downloads)
            .await
    }

    /// Catalog-wide tag listing
    pub async fn tags(&self) -> Result<Vec<Tag>> {
        self.fetch(ApiRequest::Tags, decode_tags).await
    }
}
