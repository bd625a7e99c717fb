//! Parameter enumerator - the set of route keys to pre-render

use crate::config::SiteConfig;
use crate::content::{PageParams, PostStore, RepositoryError};

/// Enumerate the route keys of every publishable post.
///
/// Drafts are excluded unless the config opts into rendering them for local
/// proofreading. The route key is the CMS record id; page lookups happen by
/// slug (see the renderer), so a post whose id and slug diverge will
/// enumerate but fail to resolve.
pub fn enumerate_params(
    store: &PostStore,
    config: &SiteConfig,
) -> Result<Vec<PageParams>, RepositoryError> {
    let posts = store.posts()?;

    Ok(posts
        .iter()
        .filter(|post| !post.draft || config.render_drafts)
        .map(|post| PageParams::new(post.id.clone()))
        .collect())
}
