//! List site content

use anyhow::Result;

use crate::content::{JsonContentRepository, PostStore};
use crate::helpers;
use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    let store = PostStore::new(Box::new(JsonContentRepository::new(&site.content_path)));

    match content_type {
        "post" | "posts" => {
            let posts = store.posts()?;
            println!("Posts ({}):", posts.len());
            for post in posts.iter() {
                println!(
                    "  {} - {} [{}]{}",
                    helpers::format_date(&post.first_published_at, &site.config.date_format),
                    post.title,
                    post.slug,
                    if post.draft { " (draft)" } else { "" }
                );
            }
        }
        "tag" | "tags" => {
            let posts = store.posts()?;
            let mut tags: std::collections::HashMap<String, usize> =
                std::collections::HashMap::new();
            for post in posts.iter() {
                for tag in &post.tags {
                    *tags.entry(tag.name.clone()).or_insert(0) += 1;
                }
            }
            println!("Tags ({}):", tags.len());
            let mut tags: Vec<_> = tags.into_iter().collect();
            tags.sort_by(|a, b| b.1.cmp(&a.1));
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, tag", content_type);
        }
    }

    Ok(())
}
