//! Sitemap and image-sitemap rendering
//!
//! Entries are derived on every call from the loaded content snapshot;
//! nothing here is persisted. Change frequencies and priorities are
//! hand-assigned constants, except blog `lastmod` which uses the post's
//! own date.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::ContentRecord;
use crate::helpers::xml::{escape_xml, slug_to_title};
use crate::index::TRACK_METADATA_SLUG;
use crate::SiteContent;

/// Sitemap change-frequency hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

/// One `<url>` entry; also serialized as-is for the JSON sitemap endpoint
#[derive(Debug, Clone, Serialize)]
pub struct SitemapEntry {
    pub url: String,
    #[serde(rename = "lastModified")]
    pub last_modified: DateTime<Utc>,
    #[serde(rename = "changeFrequency")]
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

// Hand-assigned weights per page class
const HOME: (ChangeFrequency, f32) = (ChangeFrequency::Weekly, 1.0);
const BLOG_INDEX: (ChangeFrequency, f32) = (ChangeFrequency::Daily, 0.8);
const TRACK: (ChangeFrequency, f32) = (ChangeFrequency::Weekly, 0.8);
const CONTENT_ITEM: (ChangeFrequency, f32) = (ChangeFrequency::Monthly, 0.7);
const BLOG_POST: (ChangeFrequency, f32) = (ChangeFrequency::Monthly, 0.6);
const TOOL_PAGE: (ChangeFrequency, f32) = (ChangeFrequency::Monthly, 0.5);

/// Build the full entry set: static pages, tracks, content items (the
/// literal slug `index` is excluded), tool pages and blog posts
pub fn build_entries(
    config: &SiteConfig,
    content: &SiteContent,
    now: DateTime<Utc>,
) -> Vec<SitemapEntry> {
    let base_url = config.base_url();
    let mut entries = Vec::new();

    let mut push = |url: String, last_modified: DateTime<Utc>, class: (ChangeFrequency, f32)| {
        entries.push(SitemapEntry {
            url,
            last_modified,
            change_frequency: class.0,
            priority: class.1,
        });
    };

    push(format!("{}/", base_url), now, HOME);
    push(format!("{}{}", base_url, config.blog_base_path), now, BLOG_INDEX);

    for page in &config.tool_pages {
        push(format!("{}{}", base_url, page), now, TOOL_PAGE);
    }

    for track in &content.tracks {
        push(
            format!("{}{}/{}", base_url, config.content_base_path, track.track),
            now,
            TRACK,
        );
        for item in &track.items {
            if item.slug == TRACK_METADATA_SLUG {
                continue;
            }
            push(
                format!(
                    "{}{}/{}/{}",
                    base_url, config.content_base_path, track.track, item.slug
                ),
                now,
                CONTENT_ITEM,
            );
        }
    }

    for post in &content.posts {
        push(
            format!("{}{}/{}", base_url, config.blog_base_path, post.slug),
            post.date,
            BLOG_POST,
        );
    }

    entries
}

/// Render sitemap XML from built entries
pub fn render_sitemap(entries: &[SitemapEntry]) -> String {
    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");

    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.url)));
        xml.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            entry.last_modified.to_rfc3339()
        ));
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            entry.change_frequency.as_str()
        ));
        xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Render the image sitemap: the same entry set, each annotated with one
/// representative image URL and a human-readable title
pub fn render_image_sitemap(config: &SiteConfig, content: &SiteContent) -> String {
    let base_url = config.base_url();
    let default_image = absolutize(config, &config.default_image);

    let mut pages: Vec<(String, String, String)> = Vec::new();

    pages.push((
        format!("{}/", base_url),
        default_image.clone(),
        config.name.clone(),
    ));
    pages.push((
        format!("{}{}", base_url, config.blog_base_path),
        default_image.clone(),
        "Blog".to_string(),
    ));

    for page in &config.tool_pages {
        let slug = page.rsplit('/').next().unwrap_or(page);
        pages.push((
            format!("{}{}", base_url, page),
            default_image.clone(),
            slug_to_title(slug),
        ));
    }

    for track in &content.tracks {
        let title = track
            .metadata
            .as_ref()
            .and_then(|m| m.frontmatter.title.clone())
            .unwrap_or_else(|| slug_to_title(&track.track));
        pages.push((
            format!("{}{}/{}", base_url, config.content_base_path, track.track),
            default_image.clone(),
            title,
        ));

        for item in &track.items {
            if item.slug == TRACK_METADATA_SLUG {
                continue;
            }
            pages.push((
                format!(
                    "{}{}/{}/{}",
                    base_url, config.content_base_path, track.track, item.slug
                ),
                item_image(config, item).unwrap_or_else(|| default_image.clone()),
                item.frontmatter
                    .title
                    .clone()
                    .unwrap_or_else(|| slug_to_title(&item.slug)),
            ));
        }
    }

    for post in &content.posts {
        pages.push((
            format!("{}{}/{}", base_url, config.blog_base_path, post.slug),
            default_image.clone(),
            post.title.clone(),
        ));
    }

    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" xmlns:image=\"http://www.google.com/schemas/sitemap-image/1.1\">\n");

    for (url, image, title) in &pages {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(url)));
        xml.push_str("    <image:image>\n");
        xml.push_str(&format!(
            "      <image:loc>{}</image:loc>\n",
            escape_xml(image)
        ));
        xml.push_str(&format!(
            "      <image:title>{}</image:title>\n",
            escape_xml(title)
        ));
        xml.push_str("    </image:image>\n");
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Representative image for a content item, from its frontmatter
fn item_image(config: &SiteConfig, item: &ContentRecord) -> Option<String> {
    item.frontmatter
        .image
        .as_ref()
        .map(|image| absolutize(config, image))
}

/// Prefix site-relative paths with the base URL
fn absolutize(config: &SiteConfig, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        format!("{}/{}", config.base_url(), path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{BlogPost, FrontMatter};
    use crate::TrackContent;
    use chrono::TimeZone;

    fn config() -> SiteConfig {
        SiteConfig {
            name: "Learning Hub".to_string(),
            url: "https://hub.example.com".to_string(),
            tool_pages: vec!["/tools/roi-calculator".to_string()],
            ..Default::default()
        }
    }

    fn record(slug: &str, title: Option<&str>, order: Option<i64>) -> ContentRecord {
        ContentRecord {
            slug: slug.to_string(),
            frontmatter: FrontMatter {
                title: title.map(String::from),
                order,
                ..Default::default()
            },
            body: String::new(),
            reading_time: 1,
        }
    }

    fn content() -> SiteContent {
        SiteContent {
            tracks: vec![TrackContent {
                track: "deployment".to_string(),
                metadata: Some(record("index", Some("Deployment"), None)),
                items: vec![
                    record("index", Some("Deployment"), None),
                    record("getting-started", None, Some(1)),
                ],
            }],
            posts: vec![BlogPost {
                slug: "launch".to_string(),
                title: "Launch".to_string(),
                description: String::new(),
                date: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
                tags: Vec::new(),
                author: None,
                body: String::new(),
                reading_time: 1,
            }],
        }
    }

    #[test]
    fn test_entries_cover_all_page_classes() {
        let now = Utc::now();
        let entries = build_entries(&config(), &content(), now);
        let urls: Vec<_> = entries.iter().map(|e| e.url.as_str()).collect();

        assert!(urls.contains(&"https://hub.example.com/"));
        assert!(urls.contains(&"https://hub.example.com/blog"));
        assert!(urls.contains(&"https://hub.example.com/tools/roi-calculator"));
        assert!(urls.contains(&"https://hub.example.com/learn/deployment"));
        assert!(urls.contains(&"https://hub.example.com/learn/deployment/getting-started"));
        assert!(urls.contains(&"https://hub.example.com/blog/launch"));
    }

    #[test]
    fn test_index_slug_excluded() {
        let entries = build_entries(&config(), &content(), Utc::now());
        assert!(!entries
            .iter()
            .any(|e| e.url.ends_with("/deployment/index")));
    }

    #[test]
    fn test_priorities_within_bounds() {
        let entries = build_entries(&config(), &content(), Utc::now());
        assert!(entries
            .iter()
            .all(|e| (0.0..=1.0).contains(&e.priority)));
    }

    #[test]
    fn test_blog_lastmod_uses_post_date() {
        let entries = build_entries(&config(), &content(), Utc::now());
        let post = entries
            .iter()
            .find(|e| e.url.ends_with("/blog/launch"))
            .unwrap();
        assert_eq!(post.last_modified.format("%Y-%m-%d").to_string(), "2024-06-01");
        assert_eq!(post.change_frequency, ChangeFrequency::Monthly);
    }

    #[test]
    fn test_render_sitemap_shape() {
        let entries = build_entries(&config(), &content(), Utc::now());
        let xml = render_sitemap(&entries);
        assert!(xml.starts_with("<?xml"));
        assert_eq!(xml.matches("<url>").count(), entries.len());
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
        assert!(xml.contains("<priority>1.0</priority>"));
    }

    #[test]
    fn test_image_sitemap_title_fallback() {
        let xml = render_image_sitemap(&config(), &content());
        // No explicit title: slug with hyphens replaced by spaces
        assert!(xml.contains("<image:title>getting started</image:title>"));
        // Track title from its metadata file
        assert!(xml.contains("<image:title>Deployment</image:title>"));
        assert!(xml.contains("og-default.png"));
    }

    #[test]
    fn test_image_sitemap_escapes_titles() {
        let mut c = content();
        c.tracks[0].items[1].frontmatter.title = Some(r#"Tom & Jerry's "Guide""#.to_string());
        let xml = render_image_sitemap(&config(), &c);
        assert!(xml.contains("Tom &amp; Jerry&apos;s &quot;Guide&quot;"));
    }

    #[test]
    fn test_entries_serialize_for_json_endpoint() {
        let entries = build_entries(&config(), &content(), Utc::now());
        let json = serde_json::to_string(&entries).unwrap();
        assert!(json.contains("\"changeFrequency\":\"weekly\""));
        assert!(json.contains("\"priority\":1.0"));
    }
}
