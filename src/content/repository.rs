//! Post repository - the single data-access seam to the CMS content
//!
//! The repository exposes one operation, "fetch all posts". Filtering and
//! lookup happen in memory on the result; nothing is pushed down.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::Post;

/// Errors from the content repository.
///
/// These are unhandled faults as far as page generation is concerned; they
/// propagate to the command boundary untouched.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("failed to read content file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed content file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Source of the full post collection
pub trait PostRepository: Send + Sync {
    /// Fetch every post known to the CMS, drafts included
    fn fetch_all(&self) -> Result<Vec<Post>, RepositoryError>;
}

/// Repository backed by a JSON export of the CMS content
pub struct JsonContentRepository {
    path: PathBuf,
}

impl JsonContentRepository {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl PostRepository for JsonContentRepository {
    fn fetch_all(&self) -> Result<Vec<Post>, RepositoryError> {
        let content = fs::read_to_string(&self.path).map_err(|source| RepositoryError::Io {
            path: self.path.clone(),
            source,
        })?;

        let mut posts: Vec<Post> =
            serde_json::from_str(&content).map_err(|source| RepositoryError::Parse {
                path: self.path.clone(),
                source,
            })?;

        // The export occasionally ships tags without a slug; fall back to a
        // slug derived from the display name so links stay stable.
        for post in &mut posts {
            for tag in &mut post.tags {
                if tag.slug.is_empty() {
                    tag.slug = slug::slugify(&tag.name);
                }
            }
        }

        tracing::debug!("Fetched {} posts from {:?}", posts.len(), self.path);
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_content(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_fetch_all() {
        let file = write_content(
            r#"[{
                "_id": "p1",
                "slug": "p1",
                "title": "Hello",
                "firstPublishedAt": "2024-01-15T10:30:00+09:00",
                "body": "<p>Hi</p>",
                "tags": [{"_id": "t1", "name": "go", "slug": "go"}]
            }]"#,
        );

        let repo = JsonContentRepository::new(file.path());
        let posts = repo.fetch_all().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Hello");
    }

    #[test]
    fn test_missing_tag_slug_is_derived() {
        let file = write_content(
            r#"[{
                "_id": "p1",
                "slug": "p1",
                "title": "Hello",
                "firstPublishedAt": "2024-01-15T10:30:00+09:00",
                "body": "",
                "tags": [{"_id": "t1", "name": "Rust Lang"}]
            }]"#,
        );

        let repo = JsonContentRepository::new(file.path());
        let posts = repo.fetch_all().unwrap();
        assert_eq!(posts[0].tags[0].slug, "rust-lang");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let repo = JsonContentRepository::new("/nonexistent/posts.json");
        assert!(matches!(
            repo.fetch_all(),
            Err(RepositoryError::Io { .. })
        ));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let file = write_content("{not json");
        let repo = JsonContentRepository::new(file.path());
        assert!(matches!(
            repo.fetch_all(),
            Err(RepositoryError::Parse { .. })
        ));
    }
}
