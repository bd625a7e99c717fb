//! URL helper functions
//!
//! The derived URLs are output conventions consumed by clients of the
//! rendered pages: /posts/{slug}, /posts/{slug}/thumbnail.png, and
//! /tags/{tagSlug}.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::SiteConfig;

/// Characters that must be encoded inside a path segment. Slugs come from
/// the CMS with no format guarantee.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'%')
    .add(b'/')
    .add(b'{')
    .add(b'}');

/// Encode a single path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// Canonical path of a post page
///
/// # Examples
/// ```ignore
/// post_path(&config, "hello") // -> "/posts/hello"
/// ```
pub fn post_path(config: &SiteConfig, slug: &str) -> String {
    format!("/{}/{}", config.post_dir, encode_segment(slug))
}

/// Path of a post's social-preview thumbnail
pub fn thumbnail_path(config: &SiteConfig, slug: &str) -> String {
    format!(
        "/{}/{}/{}",
        config.post_dir,
        encode_segment(slug),
        config.thumbnail_name
    )
}

/// Path of a tag listing page
pub fn tag_path(config: &SiteConfig, tag_slug: &str) -> String {
    format!("/{}/{}", config.tag_dir, encode_segment(tag_slug))
}

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "/posts/hello") // -> "https://blog.yoiw.dev/posts/hello"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        SiteConfig {
            url: "https://example.com".to_string(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_post_path() {
        let config = test_config();
        assert_eq!(post_path(&config, "hello"), "/posts/hello");
    }

    #[test]
    fn test_thumbnail_path() {
        let config = test_config();
        assert_eq!(
            thumbnail_path(&config, "hello"),
            "/posts/hello/thumbnail.png"
        );
    }

    #[test]
    fn test_tag_path() {
        let config = test_config();
        assert_eq!(tag_path(&config, "go"), "/tags/go");
    }

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("hello world"), "hello%20world");
        assert_eq!(encode_segment("a/b"), "a%2Fb");
    }

    #[test]
    fn test_full_url_for() {
        let config = test_config();
        assert_eq!(
            full_url_for(&config, "/posts/hello"),
            "https://example.com/posts/hello"
        );
    }
}
