//! Loaded content models

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::FrontMatter;

/// Fallback sort key for content without an explicit `order` field,
/// placing unordered items after every ordered one.
pub const UNORDERED: i64 = 999;

/// A loaded content file: slug, metadata, body and derived reading time.
///
/// Immutable once constructed; rebuilt from disk on every read.
#[derive(Debug, Clone, Serialize)]
pub struct ContentRecord {
    /// Filename-derived identifier, extension stripped
    pub slug: String,

    /// Parsed metadata block
    pub frontmatter: FrontMatter,

    /// Raw body text after the metadata block
    pub body: String,

    /// Estimated minutes to read the body
    pub reading_time: usize,
}

impl ContentRecord {
    /// Sort key for track listings: explicit order, or the unordered sentinel
    pub fn sort_order(&self) -> i64 {
        self.frontmatter.order.unwrap_or(UNORDERED)
    }
}

/// A blog post derived from a [`ContentRecord`]
#[derive(Debug, Clone, Serialize)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub description: String,

    /// Publication date; defaults to the current time when the frontmatter
    /// carries no parseable date
    pub date: DateTime<Utc>,

    pub tags: Vec<String>,
    pub author: Option<String>,
    pub body: String,
    pub reading_time: usize,
}

impl BlogPost {
    /// Build a post from a loaded record
    pub fn from_record(record: ContentRecord) -> Self {
        let date = record.frontmatter.parse_date().unwrap_or_else(Utc::now);
        let title = record
            .frontmatter
            .title
            .clone()
            .unwrap_or_else(|| record.slug.clone());

        Self {
            slug: record.slug,
            title,
            description: record.frontmatter.description.clone().unwrap_or_default(),
            date,
            tags: record.frontmatter.tags,
            author: record.frontmatter.author,
            body: record.body,
            reading_time: record.reading_time,
        }
    }
}
