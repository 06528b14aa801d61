//! trackhub: content pipeline and feed/sitemap generator for track-based
//! learning sites
//!
//! Content lives on disk as frontmatter-bearing `.mdx`/`.md` files, one
//! subdirectory per track plus a flat blog directory. Every read rebuilds
//! records from disk; the generators are pure functions over the loaded
//! snapshot and an explicit [`config::SiteConfig`].

pub mod commands;
pub mod config;
pub mod content;
pub mod feed;
pub mod helpers;
pub mod index;
pub mod server;
pub mod sitemap;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{BlogPost, ContentRecord};
use index::{BlogIndex, ContentIndex};

/// The root application object: configuration plus resolved directories
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Track-structured content root
    pub content_dir: PathBuf,
    /// Flat blog directory
    pub blog_dir: PathBuf,
    /// Static files served as fallback
    pub public_dir: PathBuf,
}

impl Site {
    /// Create a Site from a base directory, reading `site.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("site.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);
        let blog_dir = base_dir.join(&config.blog_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
            blog_dir,
            public_dir,
        })
    }

    pub fn content_index(&self) -> ContentIndex {
        ContentIndex::new(&self.content_dir)
    }

    pub fn blog_index(&self) -> BlogIndex {
        BlogIndex::new(&self.blog_dir)
    }

    /// Load the full content snapshot the generators consume
    ///
    /// Re-reads the directory tree on every call by design.
    pub fn load_all(&self) -> SiteContent {
        let content_index = self.content_index();

        let tracks = content_index
            .list_tracks()
            .into_iter()
            .map(|track| TrackContent {
                metadata: content_index.track_metadata(&track),
                items: content_index.list_content(&track),
                track,
            })
            .collect();

        SiteContent {
            tracks,
            posts: self.blog_index().posts(),
        }
    }
}

/// One track's loaded content
pub struct TrackContent {
    pub track: String,
    pub metadata: Option<ContentRecord>,
    pub items: Vec<ContentRecord>,
}

/// The in-memory snapshot of everything the generators render from
pub struct SiteContent {
    pub tracks: Vec<TrackContent>,
    pub posts: Vec<BlogPost>,
}
