//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable that overrides the configured base URL.
///
/// Deploy pipelines set this per environment so the same config file can
/// serve preview and production builds.
pub const WEBSITE_URL_ENV: &str = "WEBSITE_URL";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub site_name: String,
    pub locale: String,

    // URL
    pub url: String,

    // Content
    pub content_file: String,

    // Directory
    pub public_dir: String,
    pub post_dir: String,
    pub tag_dir: String,

    // Output conventions
    pub thumbnail_name: String,

    // Date / Time format (Moment.js-style pattern)
    pub date_format: String,

    // Regeneration window, seconds
    pub revalidate: u64,

    // Writing
    pub render_drafts: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "blog.yoiw.dev".to_string(),
            description: String::new(),
            site_name: "blog.yoiw.dev".to_string(),
            locale: "ja".to_string(),

            url: "https://blog.yoiw.dev".to_string(),

            content_file: "content/posts.json".to_string(),

            public_dir: "public".to_string(),
            post_dir: "posts".to_string(),
            tag_dir: "tags".to_string(),

            thumbnail_name: "thumbnail.png".to_string(),

            date_format: "YYYY/MM/DD".to_string(),

            revalidate: 86400,

            render_drafts: false,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file, then apply environment overrides
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let mut config: SiteConfig = serde_yaml::from_str(&content)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Default configuration with environment overrides applied
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(WEBSITE_URL_ENV) {
            if !url.trim().is_empty() {
                self.url = url;
            }
        }
    }
}
