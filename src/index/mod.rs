//! Sorted and filtered views over loaded content
//!
//! Both indexes re-read the directory tree on every call; there is no
//! caching layer and no shared mutable state.

use std::fs;
use std::path::{Path, PathBuf};

use crate::content::{loader, BlogPost, ContentRecord};

/// Slug of the file carrying track-level metadata
pub const TRACK_METADATA_SLUG: &str = "index";

/// Views over the track-structured content root
pub struct ContentIndex {
    root: PathBuf,
}

impl ContentIndex {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Immediate subdirectory names of the content root, sorted
    ///
    /// A missing root yields an empty list, not an error.
    pub fn list_tracks(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(_) => return Vec::new(),
        };

        let mut tracks: Vec<String> = entries
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_dir())
            .filter_map(|e| e.file_name().to_str().map(String::from))
            .collect();

        tracks.sort();
        tracks
    }

    /// Every recognized file in a track directory, sorted ascending by the
    /// `order` field (absent sorts last) with slug as the tie-break
    pub fn list_content(&self, track: &str) -> Vec<ContentRecord> {
        let mut records = loader::load_dir(&self.track_dir(track));
        records.sort_by(|a, b| {
            a.sort_order()
                .cmp(&b.sort_order())
                .then_with(|| a.slug.cmp(&b.slug))
        });
        records
    }

    /// Track-level metadata, from the `index.*` file inside the track
    pub fn track_metadata(&self, track: &str) -> Option<ContentRecord> {
        loader::load(&self.track_dir(track), TRACK_METADATA_SLUG)
    }

    /// A single content item by track and slug; absence is `None`
    pub fn get(&self, track: &str, slug: &str) -> Option<ContentRecord> {
        loader::load(&self.track_dir(track), slug)
    }

    fn track_dir(&self, track: &str) -> PathBuf {
        self.root.join(track)
    }
}

/// Views over the flat blog directory
pub struct BlogIndex {
    root: PathBuf,
}

impl BlogIndex {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// All posts, sorted descending by publication date (newest first)
    pub fn posts(&self) -> Vec<BlogPost> {
        let mut posts: Vec<BlogPost> = loader::load_dir(&self.root)
            .into_iter()
            .map(BlogPost::from_record)
            .collect();

        posts.sort_by(|a, b| b.date.cmp(&a.date));
        posts
    }

    /// A single post by slug; absence is `None`
    pub fn get(&self, slug: &str) -> Option<BlogPost> {
        loader::load(&self.root, slug).map(BlogPost::from_record)
    }
}
