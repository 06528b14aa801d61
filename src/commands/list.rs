//! List site content

use anyhow::Result;

use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str, track: Option<&str>) -> Result<()> {
    match content_type {
        "track" | "tracks" => {
            let index = site.content_index();
            let tracks = index.list_tracks();
            println!("Tracks ({}):", tracks.len());
            for track in tracks {
                let title = index
                    .track_metadata(&track)
                    .and_then(|m| m.frontmatter.title)
                    .unwrap_or_default();
                println!("  {} - {}", track, title);
            }
        }
        "content" => {
            let Some(track) = track else {
                anyhow::bail!("`list content` requires a track name");
            };
            let records = site.content_index().list_content(track);
            println!("Content in {} ({}):", track, records.len());
            for record in records {
                println!(
                    "  {:>3} {} [{} min]",
                    record.sort_order(),
                    record.frontmatter.title.as_deref().unwrap_or(&record.slug),
                    record.reading_time
                );
            }
        }
        "post" | "posts" => {
            let posts = site.blog_index().posts();
            println!("Posts ({}):", posts.len());
            for post in posts {
                println!(
                    "  {} - {} [{}]",
                    post.date.format("%Y-%m-%d"),
                    post.title,
                    post.slug
                );
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: tracks, content, posts",
                content_type
            );
        }
    }

    Ok(())
}
