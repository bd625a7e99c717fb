//! Helper functions shared by page rendering and generation

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
