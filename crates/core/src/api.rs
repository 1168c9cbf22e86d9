//! Request builder for the catalog API
//!
//! Pure URL composition: no validation, no escaping and no I/O. Category and name
//! are opaque strings supplied by the caller; a malformed value simply produces a
//! malformed URL and the HTTP layer reports the failure.

use url::Url;

/// Host of the catalog JSON API
pub const API_BASE: &str = "https://api.fakku.net";

/// Host of the catalog website, used to resolve relative links
pub const SITE_BASE: &str = "https://www.fakku.net";

/// Identifies one catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRef {
    pub category: String,
    pub name: String,
}

impl ContentRef {
    pub fn new(category: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
        }
    }

    /// Base path shared by every content endpoint: `/{category}/{name}`
    pub fn path(&self) -> String {
        format!("/{}/{}", self.category, self.name)
    }
}

/// One logical request against the catalog API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    /// Content metadata
    Content(ContentRef),
    /// A page of comments; page 0 means "no explicit page"
    Comments { content: ContentRef, page: u32 },
    /// The top-ranked comments
    TopComments(ContentRef),
    /// Content metadata plus the reader page list
    ReadOnline(ContentRef),
    /// Download variants
    Downloads(ContentRef),
    /// Catalog-wide tag listing
    Tags,
}

impl ApiRequest {
    pub fn content(category: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Content(ContentRef::new(category, name))
    }

    pub fn comments(category: impl Into<String>, name: impl Into<String>, page: u32) -> Self {
        Self::Comments {
            content: ContentRef::new(category, name),
            page,
        }
    }

    pub fn top_comments(category: impl Into<String>, name: impl Into<String>) -> Self {
        Self::TopComments(ContentRef::new(category, name))
    }

    pub fn read_online(category: impl Into<String>, name: impl Into<String>) -> Self {
        Self::ReadOnline(ContentRef::new(category, name))
    }

    pub fn downloads(category: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Downloads(ContentRef::new(category, name))
    }

    /// Path relative to the API host, always starting with `/`
    pub fn path(&self) -> String {
        match self {
            Self::Content(content) => content.path(),
            Self::Comments { content, page } => {
                let base = format!("{}/comments", content.path());
                if *page == 0 {
                    base
                } else {
                    paginate(&base, *page)
                }
            }
            Self::TopComments(content) => format!("{}/comments/top", content.path()),
            Self::ReadOnline(content) => format!("{}/read", content.path()),
            Self::Downloads(content) => format!("{}/downloads", content.path()),
            Self::Tags => "/tags".to_string(),
        }
    }

    /// Fully-qualified URL against `base`
    ///
    /// A trailing slash on `base` is dropped so host and path are joined by exactly
    /// one `/`.
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }
}

/// Append `/page/{page}` to any path or URL
pub fn paginate(path: &str, page: u32) -> String {
    format!("{path}/page/{page}")
}

/// Resolve a catalog link into an absolute URL
///
/// Absolute links are returned as-is; relative links such as `/tags/vanilla` are
/// joined onto [`SITE_BASE`].
pub fn resolve_link(link: &str) -> Result<Url, url::ParseError> {
    match Url::parse(link) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(SITE_BASE)?.join(link),
        Err(err) => Err(err),
    }
}
