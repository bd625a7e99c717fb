//! Build-scoped memoized access to the post collection
//!
//! Every page entry point starts with "fetch all posts". The store makes
//! the deduplication of those fetches explicit: the repository is hit
//! exactly once per build, no matter how many routes are rendered.

use std::sync::{Arc, RwLock};

use super::{Post, PostRepository, RepositoryError};

/// Memoizing wrapper around a [`PostRepository`]
pub struct PostStore {
    repository: Box<dyn PostRepository>,
    cache: RwLock<Option<Arc<Vec<Post>>>>,
}

impl PostStore {
    pub fn new(repository: Box<dyn PostRepository>) -> Self {
        Self {
            repository,
            cache: RwLock::new(None),
        }
    }

    /// The full post collection, fetched on first use
    pub fn posts(&self) -> Result<Arc<Vec<Post>>, RepositoryError> {
        {
            let cache = self.cache.read().unwrap_or_else(|e| e.into_inner());
            if let Some(posts) = cache.as_ref() {
                return Ok(Arc::clone(posts));
            }
        }

        let mut cache = self.cache.write().unwrap_or_else(|e| e.into_inner());
        // Another caller may have filled the cache while we waited
        if let Some(posts) = cache.as_ref() {
            return Ok(Arc::clone(posts));
        }

        let posts = Arc::new(self.repository.fetch_all()?);
        *cache = Some(Arc::clone(&posts));
        Ok(posts)
    }

    /// First post matching the given slug
    pub fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepositoryError> {
        let posts = self.posts()?;
        Ok(posts.iter().find(|post| post.slug == slug).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingRepository {
        calls: Arc<AtomicUsize>,
    }

    impl PostRepository for CountingRepository {
        fn fetch_all(&self) -> Result<Vec<Post>, RepositoryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![sample_post("p1", "hello")])
        }
    }

    fn sample_post(id: &str, slug: &str) -> Post {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "slug": slug,
            "title": "Hello",
            "firstPublishedAt": "2024-01-15T10:30:00+09:00",
            "body": "<p>Hi</p>"
        }))
        .unwrap()
    }

    #[test]
    fn test_repository_hit_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let store = PostStore::new(Box::new(CountingRepository {
            calls: Arc::clone(&calls),
        }));

        store.posts().unwrap();
        store.posts().unwrap();
        store.find_by_slug("hello").unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_find_by_slug() {
        let calls = Arc::new(AtomicUsize::new(0));
        let store = PostStore::new(Box::new(CountingRepository { calls }));

        assert!(store.find_by_slug("hello").unwrap().is_some());
        assert!(store.find_by_slug("missing").unwrap().is_none());
    }
}
