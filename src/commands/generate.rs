//! Write the feed and sitemaps to an output directory

use anyhow::Result;
use chrono::Utc;
use std::fs;
use std::path::Path;

use crate::{feed, sitemap, Site};

/// Generate `rss.xml`, `sitemap.xml`, `sitemap-images.xml` and
/// `sitemap.json` into the output directory
pub fn run(site: &Site, output: &Path) -> Result<()> {
    let start = std::time::Instant::now();

    let content = site.load_all();
    tracing::info!(
        "Loaded {} tracks and {} posts",
        content.tracks.len(),
        content.posts.len()
    );

    fs::create_dir_all(output)?;

    fs::write(
        output.join("rss.xml"),
        feed::render_rss(&site.config, &content.posts),
    )?;

    let entries = sitemap::build_entries(&site.config, &content, Utc::now());
    fs::write(output.join("sitemap.xml"), sitemap::render_sitemap(&entries))?;
    fs::write(
        output.join("sitemap-images.xml"),
        sitemap::render_image_sitemap(&site.config, &content),
    )?;
    fs::write(
        output.join("sitemap.json"),
        serde_json::to_string_pretty(&entries)?,
    )?;

    tracing::info!("Generated in {:.2}s", start.elapsed().as_secs_f64());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_generate_writes_all_outputs() {
        let tmp = TempDir::new().unwrap();
        let blog = tmp.path().join("blog");
        fs::create_dir_all(&blog).unwrap();
        fs::write(
            blog.join("launch.md"),
            "---\ntitle: Launch\ndate: 2024-06-01\n---\nWe shipped.\n",
        )
        .unwrap();

        let site = Site::new(tmp.path()).unwrap();
        let out = tmp.path().join("out");
        run(&site, &out).unwrap();

        for name in ["rss.xml", "sitemap.xml", "sitemap-images.xml", "sitemap.json"] {
            assert!(out.join(name).is_file(), "missing {}", name);
        }

        let rss = fs::read_to_string(out.join("rss.xml")).unwrap();
        assert!(rss.contains("<title>Launch</title>"));
    }
}
