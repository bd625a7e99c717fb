//! Generator module - writes the post pages to the public directory
//!
//! Drives the page entry points for the whole build: enumerate routes, then
//! generate metadata, render, and write each page. Also emits the standard
//! 404 page and prunes outputs whose route disappeared.

use anyhow::Result;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

use tera::Context;
use walkdir::WalkDir;

use crate::content::{JsonContentRepository, PostStore};
use crate::helpers;
use crate::page::{enumerate_params, generate_metadata, render_post, RenderOutcome};
use crate::templates::TemplateRenderer;
use crate::Site;

/// Static site generator for post pages
pub struct Generator {
    site: Site,
    store: PostStore,
    templates: TemplateRenderer,
}

/// Counters reported after a generation run
#[derive(Debug, Default, Clone, Copy)]
pub struct GenerateSummary {
    /// Pages rendered and written
    pub rendered: usize,
    /// Pages skipped because their output is inside the revalidate window
    pub fresh: usize,
    /// Route keys that did not resolve to a post
    pub unresolved: usize,
    /// Stale output directories removed
    pub pruned: usize,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Result<Self> {
        let repository = JsonContentRepository::new(&site.content_path);

        Ok(Self {
            site: site.clone(),
            store: PostStore::new(Box::new(repository)),
            templates: TemplateRenderer::new()?,
        })
    }

    /// Generate every enumerated post page plus the 404 page.
    ///
    /// Outputs younger than the configured revalidate window are left alone
    /// unless `force` is set.
    pub fn generate(&self, force: bool) -> Result<GenerateSummary> {
        let config = &self.site.config;
        let posts_dir = self.site.public_dir.join(&config.post_dir);
        fs::create_dir_all(&posts_dir)?;

        let params = enumerate_params(&self.store, config)?;
        tracing::info!("Enumerated {} routes", params.len());

        let mut summary = GenerateSummary::default();
        let mut live_routes: HashSet<String> = HashSet::new();

        for param in &params {
            live_routes.insert(param.slug.clone());

            let output_path = posts_dir.join(&param.slug).join("index.html");
            if !force && is_fresh(&output_path, config.revalidate) {
                tracing::debug!("Fresh, skipping: {:?}", output_path);
                summary.fresh += 1;
                continue;
            }

            let metadata = generate_metadata(&self.store, config, &param.slug)?;
            match render_post(
                &self.store,
                config,
                &self.templates,
                &param.slug,
                metadata.as_ref(),
            )? {
                RenderOutcome::Page(html) => {
                    if let Some(parent) = output_path.parent() {
                        fs::create_dir_all(parent)?;
                    }
                    fs::write(&output_path, html)?;
                    tracing::debug!("Generated post: {:?}", output_path);
                    summary.rendered += 1;
                }
                RenderOutcome::NotFound => {
                    // Route keys come from post ids while lookups use slugs;
                    // a post whose id and slug diverge lands here.
                    tracing::warn!(
                        "Route key {:?} did not resolve to a post, skipping",
                        param.slug
                    );
                    summary.unresolved += 1;
                }
            }
        }

        self.generate_not_found_page()?;
        summary.pruned = self.prune_stale_outputs(&posts_dir, &live_routes)?;

        Ok(summary)
    }

    /// Render the standard not-found page to public/404.html
    fn generate_not_found_page(&self) -> Result<()> {
        let config = &self.site.config;

        let mut context = Context::new();
        context.insert("locale", &config.locale);
        context.insert("site_name", &config.site_name);
        context.insert("page_title", &format!("404 | {}", config.site_name));
        context.insert("meta_tags", &helpers::meta_generator());

        let html = self.templates.render("not_found.html", &context)?;
        fs::write(self.site.public_dir.join("404.html"), html)?;
        tracing::debug!("Generated 404 page");

        Ok(())
    }

    /// Remove post output directories whose route is no longer enumerated
    fn prune_stale_outputs(&self, posts_dir: &Path, live_routes: &HashSet<String>) -> Result<usize> {
        let mut pruned = 0;

        for entry in WalkDir::new(posts_dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.path().is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().to_string();
            if !live_routes.contains(&name) {
                fs::remove_dir_all(entry.path())?;
                tracing::info!("Pruned stale output: {:?}", entry.path());
                pruned += 1;
            }
        }

        Ok(pruned)
    }
}

/// Whether an output file is younger than the revalidate window
fn is_fresh(path: &Path, revalidate_secs: u64) -> bool {
    let Ok(metadata) = fs::metadata(path) else {
        return false;
    };
    let Ok(modified) = metadata.modified() else {
        return false;
    };
    let Ok(age) = SystemTime::now().duration_since(modified) else {
        return false;
    };

    age < Duration::from_secs(revalidate_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_output_is_not_fresh() {
        assert!(!is_fresh(Path::new("/nonexistent/index.html"), 86400));
    }

    #[test]
    fn test_recent_output_is_fresh() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(is_fresh(file.path(), 86400));
        assert!(!is_fresh(file.path(), 0));
    }
}
