//! postgen: a static page generator for headless-CMS blog posts
//!
//! The CMS owns the content and exports it as JSON; this crate enumerates
//! the publishable post routes, generates their SEO/social metadata, and
//! renders each post page to a public directory ready for static hosting.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod page;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::Path;

/// The main application handle
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// CMS content export file
    pub content_path: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
}

impl Site {
    /// Create a new Site instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::from_env()
        };

        let content_path = base_dir.join(&config.content_file);
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            content_path,
            public_dir,
        })
    }

    /// Generate the post pages
    pub fn generate(&self, force: bool) -> Result<generator::GenerateSummary> {
        commands::generate::run(self, force)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
