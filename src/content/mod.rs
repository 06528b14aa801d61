//! Content loading: frontmatter parsing, records and the directory loader

mod frontmatter;
pub mod loader;
mod record;

pub use frontmatter::FrontMatter;
pub use record::{BlogPost, ContentRecord};

use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading a single content file.
///
/// The list-returning accessors apply a uniform skip-and-log policy and never
/// surface these; `loader::load_file` exposes them for callers that want to
/// fail fast on a corrupt file.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed frontmatter in {}", path.display())]
    Frontmatter {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
