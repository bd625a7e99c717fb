//! Embedded theme templates using the Tera template engine
//!
//! The theme is compiled into the binary, so a checkout of the blog content
//! is all a build machine needs. Autoescaping stays on; the post body is the
//! one value rendered through `safe`, because it arrives from the CMS as
//! already-rendered, trusted HTML.

use tera::{Context, Tera};

/// Template renderer with the embedded theme loaded
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all theme templates registered
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("theme/layout.html")),
            ("post.html", include_str!("theme/post.html")),
            ("not_found.html", include_str!("theme/not_found.html")),
            (
                "partials/head.html",
                include_str!("theme/partials/head.html"),
            ),
            (
                "partials/breadcrumb.html",
                include_str!("theme/partials/breadcrumb.html"),
            ),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String, tera::Error> {
        self.tera.render(template_name, context)
    }
}
