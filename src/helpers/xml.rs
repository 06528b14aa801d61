//! XML text helpers

use chrono::{DateTime, Utc};

/// Escape the five XML-reserved characters
///
/// Applied to text exactly once, before it is embedded into a template.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Decode the five entities produced by [`escape_xml`]
///
/// `&amp;` is decoded last so escaped text round-trips exactly.
pub fn unescape_xml(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Strip invalid XML control characters (except tab, newline, carriage return)
/// XML 1.0 only allows: #x9 | #xA | #xD | [#x20-#xD7FF] | [#xE000-#xFFFD] | [#x10000-#x10FFFF]
pub fn strip_invalid_xml_chars(s: &str) -> String {
    s.chars()
        .filter(|&c| {
            c == '\t'
                || c == '\n'
                || c == '\r'
                || ('\u{0020}'..='\u{D7FF}').contains(&c)
                || ('\u{E000}'..='\u{FFFD}').contains(&c)
                || ('\u{10000}'..='\u{10FFFF}').contains(&c)
        })
        .collect()
}

/// Format a date the way RSS `pubDate` expects it, e.g.
/// `Sat, 01 Jun 2024 00:00:00 GMT`
pub fn format_rfc822_gmt(date: &DateTime<Utc>) -> String {
    date.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Human-readable title derived from a slug: hyphens become spaces
pub fn slug_to_title(slug: &str) -> String {
    slug.replace('-', " ")
}
