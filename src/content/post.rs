//! Post and Tag models as delivered by the headless CMS

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A blog post from the CMS export.
///
/// Posts are read-only here: the CMS owns the content, this crate only
/// enumerates, looks up, and renders it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// CMS record identifier
    #[serde(rename = "_id")]
    pub id: String,

    /// URL path segment identifying the post
    pub slug: String,

    /// Post title
    pub title: String,

    /// Raw publication timestamp (RFC 3339, as exported by the CMS)
    #[serde(rename = "firstPublishedAt")]
    pub first_published_at: DateTime<FixedOffset>,

    /// Pre-rendered HTML body. Trusted upstream content, injected into the
    /// page without escaping.
    pub body: String,

    /// Excluded from public enumeration when set
    #[serde(default)]
    pub draft: bool,

    /// Tags in the order the CMS lists them
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// A tag referenced by posts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    /// CMS record identifier
    #[serde(rename = "_id")]
    pub id: String,

    /// Display name
    pub name: String,

    /// URL path segment; may be absent in the export
    #[serde(default)]
    pub slug: String,
}

/// Route parameters for a single post page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageParams {
    pub slug: String,
}

impl PageParams {
    pub fn new(slug: impl Into<String>) -> Self {
        Self { slug: slug.into() }
    }
}
