//! Core library for fakku
//!
//! This crate implements the **Functional Core** of the fakku client,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`fakku_core`** (this crate): URL composition, domain models and JSON decoding with zero I/O
//! - **`fakku`**: HTTP transport, public retrieval operations and the command line tool
//!
//! Every function in this crate is pure: given the same request parameters or the
//! same response body it produces the same URL or the same decoded value, so it can
//! be tested with fixture strings and no HTTP mocking.
//!
//! # Module Organization
//!
//! - [`api`]: Request builder for every catalog endpoint
//! - [`decode`]: Envelope unwrapping and the [`DecodeError`] type
//! - [`content`]: Content items and their attributes
//! - [`comments`]: Comment pages
//! - [`reader`]: Read-online pages
//! - [`downloads`]: Download listings
//! - [`tags`]: Catalog-wide tag definitions
//! - [`text`]: Display helpers for timestamps and HTML fragments
//!
//! # Example Usage
//!
//! ```rust
//! use fakku_core::api::{ApiRequest, API_BASE};
//! use fakku_core::comments::decode_comments;
//!
//! let request = ApiRequest::top_comments("manga", "example-manga");
//! assert_eq!(
//!     request.url(API_BASE),
//!     "https://api.fakku.net/manga/example-manga/comments/top"
//! );
//!
//! let body = r#"{"comments":{"comments":[],"page":1,"total":0,"pages":1}}"#;
//! let page = decode_comments(body).unwrap();
//! assert!(page.comments.is_empty());
//! ```

pub mod api;
pub mod comments;
pub mod content;
pub mod decode;
pub mod downloads;
pub mod reader;
pub mod tags;
pub mod text;

pub use api::{paginate, resolve_link, ApiRequest, ContentRef, API_BASE, SITE_BASE};
pub use comments::{Comment, CommentPage};
pub use content::{Attribute, ContentImages, ContentItem};
pub use decode::DecodeError;
pub use downloads::{Download, DownloadListing};
pub use reader::{ReadableContent, ReaderPage};
pub use tags::Tag;
