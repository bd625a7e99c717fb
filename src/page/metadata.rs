//! Metadata generator - SEO and social-preview fields for one post page

use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::{PostStore, RepositoryError};
use crate::helpers;

/// Page metadata for a matched post
#[derive(Debug, Clone, Serialize)]
pub struct PageMetadata {
    /// Base URL all relative metadata paths resolve against
    pub base_url: String,
    /// Document title
    pub title: String,
    pub open_graph: OpenGraphMetadata,
    pub twitter: TwitterCardMetadata,
}

/// Open Graph preview fields
#[derive(Debug, Clone, Serialize)]
pub struct OpenGraphMetadata {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub url: String,
    pub images: Vec<String>,
    pub locale: String,
    pub site_name: String,
}

/// Twitter summary-card preview fields
#[derive(Debug, Clone, Serialize)]
pub struct TwitterCardMetadata {
    pub card: String,
    pub title: String,
}

/// Generate metadata for the post matching `slug`.
///
/// Absence is not an error: `None` means "no metadata override" and the
/// caller falls back to its defaults.
pub fn generate_metadata(
    store: &PostStore,
    config: &SiteConfig,
    slug: &str,
) -> Result<Option<PageMetadata>, RepositoryError> {
    let Some(post) = store.find_by_slug(slug)? else {
        return Ok(None);
    };

    let localized_title = format!("{} | {}", post.title, config.site_name);

    Ok(Some(PageMetadata {
        base_url: config.url.clone(),
        title: post.title,
        open_graph: OpenGraphMetadata {
            kind: "article".to_string(),
            title: localized_title.clone(),
            url: helpers::post_path(config, slug),
            images: vec![helpers::thumbnail_path(config, slug)],
            locale: config.locale.clone(),
            site_name: config.site_name.clone(),
        },
        twitter: TwitterCardMetadata {
            card: "summary".to_string(),
            title: localized_title,
        },
    }))
}

impl PageMetadata {
    /// Meta tags for the document head
    pub fn head_tags(&self) -> String {
        let og = &self.open_graph;
        [
            helpers::open_graph(
                &og.kind,
                &og.title,
                &og.url,
                og.images.first().map(String::as_str),
                &og.locale,
                &og.site_name,
            ),
            helpers::twitter_card(&self.twitter.card, &self.twitter.title),
        ]
        .join("\n")
    }
}
