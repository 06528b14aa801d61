//! Site configuration (site.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
///
/// Generator functions take this by reference at call time; nothing in the
/// crate reads configuration from global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub name: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,
    /// URL prefix for track pages, e.g. "/learn"
    pub content_base_path: String,
    /// URL prefix for blog posts, e.g. "/blog"
    pub blog_base_path: String,

    // Directory
    pub content_dir: String,
    pub blog_dir: String,
    pub public_dir: String,

    // Sitemap
    /// Fixed tool-page URLs included in the sitemap as-is
    #[serde(default)]
    pub tool_pages: Vec<String>,
    /// Fallback social/preview image path for the image sitemap
    pub default_image: String,

    // Feed
    pub feed_limit: usize,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Trackhub".to_string(),
            description: String::new(),
            author: String::new(),
            language: "en".to_string(),

            url: "http://example.com".to_string(),
            content_base_path: "/learn".to_string(),
            blog_base_path: "/blog".to_string(),

            content_dir: "content".to_string(),
            blog_dir: "blog".to_string(),
            public_dir: "public".to_string(),

            tool_pages: Vec::new(),
            default_image: "/images/og-default.png".to_string(),

            feed_limit: 20,

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Site base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.name, "Trackhub");
        assert_eq!(config.content_base_path, "/learn");
        assert_eq!(config.feed_limit, 20);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
name: Learning Hub
url: https://hub.example.com/
description: Hands-on engineering tracks
tool_pages:
  - /tools/roi-calculator
feed_limit: 10
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.name, "Learning Hub");
        assert_eq!(config.base_url(), "https://hub.example.com");
        assert_eq!(config.tool_pages, vec!["/tools/roi-calculator"]);
        assert_eq!(config.feed_limit, 10);
    }

    #[test]
    fn test_unknown_fields_kept_in_extra() {
        let yaml = "name: Hub\ntwitter: '@hub'\n";
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(config.extra.contains_key("twitter"));
    }
}
