//! Frontmatter loader - resolves and loads content files from a directory

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{ContentError, ContentRecord, FrontMatter};

/// Recognized extensions, in preference order
pub const EXTENSIONS: [&str; 2] = ["mdx", "md"];

/// Fixed reading speed used for the reading-time estimate
pub const WORDS_PER_MINUTE: usize = 200;

/// Estimated minutes to read a body: word count at a fixed speed,
/// rounded up, minimum of 1
pub fn reading_time(body: &str) -> usize {
    let words = body.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

/// Resolve a slug to an existing file, trying extensions in preference order
pub fn resolve(dir: &Path, slug: &str) -> Option<PathBuf> {
    EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{}.{}", slug, ext)))
        .find(|path| path.is_file())
}

/// Load a single content file by slug
///
/// Absence (neither extension exists) is `None`, not an error. A file that
/// fails to load is logged and treated as absent, the same skip-and-log
/// policy the bulk path applies.
pub fn load(dir: &Path, slug: &str) -> Option<ContentRecord> {
    let path = resolve(dir, slug)?;
    match load_file(&path) {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::warn!("Skipping {:?}: {:#}", path, anyhow::Error::from(e));
            None
        }
    }
}

/// Load every recognized file in a directory
///
/// A missing directory yields an empty list. Files that fail to load are
/// logged and omitted; one corrupt file never aborts the listing.
pub fn load_dir(dir: &Path) -> Vec<ContentRecord> {
    if !dir.exists() {
        return Vec::new();
    }

    let mut records = Vec::new();

    for entry in WalkDir::new(dir)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_file() && is_content_file(path) {
            match load_file(path) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!("Skipping {:?}: {:#}", path, anyhow::Error::from(e));
                }
            }
        }
    }

    records
}

/// Load and parse one file, surfacing errors to the caller
pub fn load_file(path: &Path) -> Result<ContentRecord, ContentError> {
    let content = fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let (frontmatter, body) =
        FrontMatter::parse(&content).map_err(|source| ContentError::Frontmatter {
            path: path.to_path_buf(),
            source,
        })?;

    let slug = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled")
        .to_string();

    Ok(ContentRecord {
        slug,
        frontmatter,
        reading_time: reading_time(body),
        body: body.to_string(),
    })
}

/// Check whether a file carries a recognized extension
fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| EXTENSIONS.contains(&e))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_reading_time_floor() {
        assert_eq!(reading_time(""), 1);
        assert_eq!(reading_time("one two three"), 1);
    }

    #[test]
    fn test_reading_time_rounds_up() {
        let body = "word ".repeat(400);
        assert_eq!(reading_time(&body), 2);
        let body = "word ".repeat(201);
        assert_eq!(reading_time(&body), 2);
    }

    #[test]
    fn test_resolve_prefers_mdx() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "guide.mdx", "mdx body");
        write(tmp.path(), "guide.md", "md body");

        let path = resolve(tmp.path(), "guide").unwrap();
        assert_eq!(path.extension().unwrap(), "mdx");
    }

    #[test]
    fn test_load_absent_is_none() {
        let tmp = TempDir::new().unwrap();
        assert!(load(tmp.path(), "missing").is_none());
    }

    #[test]
    fn test_load_parses_frontmatter_and_body() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "setup.md",
            "---\ntitle: Setup\norder: 2\n---\nInstall the thing.\n",
        );

        let record = load(tmp.path(), "setup").unwrap();
        assert_eq!(record.slug, "setup");
        assert_eq!(record.frontmatter.title, Some("Setup".to_string()));
        assert_eq!(record.frontmatter.order, Some(2));
        assert_eq!(record.body.trim(), "Install the thing.");
        assert_eq!(record.reading_time, 1);
    }

    #[test]
    fn test_load_malformed_is_none() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "broken.md", "---\ntitle: [oops\n---\nbody\n");
        assert!(load(tmp.path(), "broken").is_none());
    }

    #[test]
    fn test_load_dir_missing_is_empty() {
        let tmp = TempDir::new().unwrap();
        assert!(load_dir(&tmp.path().join("nope")).is_empty());
    }

    #[test]
    fn test_load_dir_skips_malformed() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "good.md", "---\ntitle: Good\n---\nbody\n");
        write(tmp.path(), "bad.md", "---\ntitle: [oops\n---\nbody\n");
        write(tmp.path(), "notes.txt", "ignored extension");

        let records = load_dir(tmp.path());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].slug, "good");
    }

    #[test]
    fn test_load_file_surfaces_errors() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "bad.md", "---\ntitle: [oops\n---\nbody\n");
        let err = load_file(&tmp.path().join("bad.md")).unwrap_err();
        assert!(matches!(err, ContentError::Frontmatter { .. }));
    }
}
