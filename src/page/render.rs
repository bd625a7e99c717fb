//! Page renderer - post page HTML or a distinguished not-found outcome

use serde::Serialize;
use tera::Context;
use thiserror::Error;

use crate::config::SiteConfig;
use crate::content::{PostStore, RepositoryError};
use crate::helpers;
use crate::page::PageMetadata;
use crate::templates::TemplateRenderer;

/// Outcome of rendering one route.
///
/// Not-found is a control signal, not an error: callers intercept it and
/// produce their standard absent-resource response. Faults (repository,
/// template) travel separately through [`PageError`].
#[derive(Debug)]
pub enum RenderOutcome {
    /// Complete page document
    Page(String),
    /// No post matches the requested slug
    NotFound,
}

/// Faults raised while rendering a page
#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("template rendering failed")]
    Template(#[from] tera::Error),
}

#[derive(Debug, Serialize)]
struct BreadcrumbNode {
    title: String,
    url: String,
}

#[derive(Debug, Serialize)]
struct TagLink {
    name: String,
    path: String,
}

/// Render the post page for `slug`.
///
/// `metadata` is the output of the metadata generator for the same slug;
/// when absent the head carries only the generator tag.
pub fn render_post(
    store: &PostStore,
    config: &SiteConfig,
    templates: &TemplateRenderer,
    slug: &str,
    metadata: Option<&PageMetadata>,
) -> Result<RenderOutcome, PageError> {
    let Some(post) = store.find_by_slug(slug)? else {
        return Ok(RenderOutcome::NotFound);
    };

    let path = helpers::post_path(config, slug);
    let breadcrumb = vec![BreadcrumbNode {
        title: post.title.clone(),
        url: path,
    }];

    let tags: Vec<TagLink> = post
        .tags
        .iter()
        .map(|tag| TagLink {
            name: tag.name.clone(),
            path: helpers::tag_path(config, &tag.slug),
        })
        .collect();

    let mut meta_tags = helpers::meta_generator();
    if let Some(metadata) = metadata {
        meta_tags.push('\n');
        meta_tags.push_str(&metadata.head_tags());
    }

    let mut context = Context::new();
    context.insert("locale", &config.locale);
    context.insert("site_name", &config.site_name);
    context.insert("page_title", &post.title);
    context.insert("meta_tags", &meta_tags);
    context.insert("breadcrumb", &breadcrumb);
    context.insert(
        "time_tag",
        &helpers::time_tag(&post.first_published_at, &config.date_format),
    );
    context.insert("tags", &tags);
    // Trusted pre-rendered HTML from the CMS; injected without escaping
    context.insert("body", &post.body);

    let html = templates.render("post.html", &context)?;
    Ok(RenderOutcome::Page(html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Post, PostRepository};
    use crate::page::generate_metadata;

    struct FixedRepository(Vec<Post>);

    impl PostRepository for FixedRepository {
        fn fetch_all(&self) -> Result<Vec<Post>, RepositoryError> {
            Ok(self.0.clone())
        }
    }

    fn sample_store() -> PostStore {
        let post: Post = serde_json::from_value(serde_json::json!({
            "_id": "p1",
            "slug": "p1",
            "title": "Hello",
            "firstPublishedAt": "2024-01-15T10:30:00+09:00",
            "body": "<p>Hi</p>",
            "tags": [{"_id": "t1", "name": "go", "slug": "go"}]
        }))
        .unwrap();
        PostStore::new(Box::new(FixedRepository(vec![post])))
    }

    fn render(slug: &str) -> RenderOutcome {
        let store = sample_store();
        let config = SiteConfig::default();
        let templates = TemplateRenderer::new().unwrap();
        let metadata = generate_metadata(&store, &config, slug).unwrap();
        render_post(&store, &config, &templates, slug, metadata.as_ref()).unwrap()
    }

    #[test]
    fn test_missing_slug_is_not_found() {
        assert!(matches!(render("missing"), RenderOutcome::NotFound));
    }

    #[test]
    fn test_rendered_page_contents() {
        let RenderOutcome::Page(html) = render("p1") else {
            panic!("expected a rendered page");
        };

        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains(r#"<time datetime="2024-01-15T10:30:00+09:00">2024/01/15</time>"#));
        assert!(html.contains(r##"<a class="tag" href="/tags/go">#go</a>"##));
        // Body HTML is injected verbatim, not escaped
        assert!(html.contains("<p>Hi</p>"));
        // Metadata lands in the head
        assert!(html.contains(r#"<meta property="og:title" content="Hello | blog.yoiw.dev">"#));
    }

    #[test]
    fn test_breadcrumb_at_top_and_bottom() {
        let RenderOutcome::Page(html) = render("p1") else {
            panic!("expected a rendered page");
        };

        let link = r#"<a href="/posts/p1">Hello</a>"#;
        assert_eq!(html.matches(link).count(), 2);
    }

    #[test]
    fn test_body_is_not_sanitized() {
        let post: Post = serde_json::from_value(serde_json::json!({
            "_id": "p1",
            "slug": "p1",
            "title": "Hello",
            "firstPublishedAt": "2024-01-15T10:30:00+09:00",
            "body": "<script>alert(1)</script>"
        }))
        .unwrap();
        let store = PostStore::new(Box::new(FixedRepository(vec![post])));
        let templates = TemplateRenderer::new().unwrap();
        let outcome =
            render_post(&store, &SiteConfig::default(), &templates, "p1", None).unwrap();

        let RenderOutcome::Page(html) = outcome else {
            panic!("expected a rendered page");
        };
        assert!(html.contains("<script>alert(1)</script>"));
    }
}
