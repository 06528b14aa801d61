//! RSS 2.0 feed rendering
//!
//! Pure string building over already-loaded posts; the current timestamp
//! (`lastBuildDate`) is the only non-deterministic input.

use chrono::Utc;

use crate::config::SiteConfig;
use crate::content::BlogPost;
use crate::helpers::xml::{escape_xml, format_rfc822_gmt, strip_invalid_xml_chars};

/// Render the RSS 2.0 feed for a list of posts (newest first)
///
/// Text fields are escaped before being embedded into the template,
/// never after.
pub fn render_rss(config: &SiteConfig, posts: &[BlogPost]) -> String {
    let base_url = config.base_url();
    let blog_base = format!("{}{}", base_url, config.blog_base_path);

    let mut feed = String::new();
    feed.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    feed.push_str("<rss version=\"2.0\">\n");
    feed.push_str("  <channel>\n");
    feed.push_str(&format!("    <title>{}</title>\n", escape_xml(&config.name)));
    feed.push_str(&format!("    <link>{}</link>\n", base_url));
    feed.push_str(&format!(
        "    <description>{}</description>\n",
        escape_xml(&config.description)
    ));
    feed.push_str(&format!(
        "    <language>{}</language>\n",
        escape_xml(&config.language)
    ));
    feed.push_str(&format!(
        "    <lastBuildDate>{}</lastBuildDate>\n",
        format_rfc822_gmt(&Utc::now())
    ));

    for post in posts.iter().take(config.feed_limit) {
        let link = format!("{}/{}", blog_base, post.slug);
        let description = strip_invalid_xml_chars(&post.description);

        feed.push_str("    <item>\n");
        feed.push_str(&format!(
            "      <title>{}</title>\n",
            escape_xml(&post.title)
        ));
        feed.push_str(&format!("      <link>{}</link>\n", link));
        feed.push_str(&format!("      <guid>{}</guid>\n", link));
        feed.push_str(&format!(
            "      <description>{}</description>\n",
            escape_xml(&description)
        ));
        feed.push_str(&format!(
            "      <pubDate>{}</pubDate>\n",
            format_rfc822_gmt(&post.date)
        ));
        for tag in &post.tags {
            feed.push_str(&format!(
                "      <category>{}</category>\n",
                escape_xml(tag)
            ));
        }
        feed.push_str("    </item>\n");
    }

    feed.push_str("  </channel>\n");
    feed.push_str("</rss>\n");

    feed
}
