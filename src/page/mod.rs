//! Post page entry points
//!
//! The build pipeline invokes three independent operations per route:
//! [`enumerate_params`] decides which pages exist, [`generate_metadata`]
//! produces the head metadata for one slug, and [`render_post`] produces the
//! page HTML. Each starts from the same memoized post collection.

mod metadata;
mod params;
mod render;

pub use metadata::{generate_metadata, OpenGraphMetadata, PageMetadata, TwitterCardMetadata};
pub use params::enumerate_params;
pub use render::{render_post, PageError, RenderOutcome};
