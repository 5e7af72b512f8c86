//! Markup-to-plain-text conversion for feed bodies.
//!
//! The sanitizer is pure and total: malformed markup never errors, it just
//! degrades to whatever text can be recovered. Images survive as inline
//! `![img](URL)` markers so the presentation layer can render them without
//! carrying HTML around.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Placeholder and tracker image URLs that must never become markers.
/// Shared with the page enricher.
pub const PLACEHOLDER_IMAGES: &[&str] = &[
    "no-image",
    "tistory_admin/static",
    "placeholder",
    "1x1",
    "pixel",
    "spacer",
    "loading-image",
];

static BR_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").expect("valid regex"));
static P_CLOSE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)</p>").expect("valid regex"));
static IMG_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<img[^>]+(?:src|data-src)\s*=\s*["']([^"']+)["'][^>]*>"#)
        .expect("valid regex")
});
static ANY_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));
static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").expect("valid regex"));
static NEWLINE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").expect("valid regex"));
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Resolve a raw image URL attribute into an absolute https URL, or reject
/// it. Protocol-relative URLs are upgraded; anything that is not an absolute
/// http(s) URL, or that matches the placeholder denylist, yields `None`.
pub fn resolve_image_url(raw: &str) -> Option<String> {
    let mut url = raw.trim().to_string();
    if url.starts_with("//") {
        url = format!("https:{url}");
    }
    if !url.starts_with("http") {
        return None;
    }
    let lower = url.to_lowercase();
    if PLACEHOLDER_IMAGES.iter().any(|p| lower.contains(p)) {
        return None;
    }
    Url::parse(&url).ok()?;
    Some(url)
}

/// Transform a raw markup body into normalized plain text with image markers.
pub fn sanitize(html: &str) -> String {
    let text = BR_TAG.replace_all(html, "\n");
    let text = P_CLOSE_TAG.replace_all(&text, "\n");
    let text = IMG_TAG.replace_all(&text, |caps: &regex::Captures| {
        match resolve_image_url(&caps[1]) {
            Some(url) => format!("\n\n![img]({url})\n\n"),
            None => String::new(),
        }
    });
    let text = ANY_TAG.replace_all(&text, "");
    let text = decode_entities(&text);
    normalize_whitespace(&text)
}

/// Collapse all whitespace runs to single spaces and trim. Used for titles.
pub fn clean_inline(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Horizontal whitespace runs collapse to one space, spaces after a line
/// break are dropped, three-or-more newlines collapse to exactly two.
pub fn normalize_whitespace(text: &str) -> String {
    let text = SPACE_RUN.replace_all(text, " ");
    let text = text.replace("\n ", "\n");
    let text = NEWLINE_RUN.replace_all(&text, "\n\n");
    text.trim().to_string()
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&darr;", "↓")
        .replace("&uarr;", "↑")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_breaks_become_newlines() {
        assert_eq!(sanitize("하나<br>둘<br />셋"), "하나\n둘\n셋");
        assert_eq!(sanitize("<p>첫 문단</p><p>둘째 문단</p>"), "첫 문단\n둘째 문단");
    }

    #[test]
    fn valid_image_becomes_marker_placeholder_is_dropped() {
        let html = concat!(
            r#"<p>본문</p>"#,
            r#"<img src="https://cdn.example.com/photo.jpg">"#,
            r#"<img src="https://cdn.example.com/1x1.gif">"#,
        );
        let body = sanitize(html);
        assert_eq!(body.matches("![img](").count(), 1);
        assert!(body.contains("![img](https://cdn.example.com/photo.jpg)"));
    }

    #[test]
    fn protocol_relative_url_is_upgraded() {
        let body = sanitize(r#"<img src="//img.example.com/a.png">"#);
        assert_eq!(body, "![img](https://img.example.com/a.png)");
    }

    #[test]
    fn relative_and_malformed_urls_are_dropped() {
        assert_eq!(sanitize(r#"<img src="/local/a.png">"#), "");
        assert!(resolve_image_url("http://").is_none());
        assert!(resolve_image_url("javascript:alert(1)").is_none());
    }

    #[test]
    fn entities_are_decoded() {
        assert_eq!(sanitize("A &amp; B &lt;C&gt; &quot;D&quot; &#39;E&#39;"), "A & B <C> \"D\" 'E'");
        assert_eq!(sanitize("상승 &uarr; 하락 &darr;"), "상승 ↑ 하락 ↓");
    }

    #[test]
    fn excess_newlines_collapse_to_two() {
        assert_eq!(sanitize("가<br><br><br><br>나"), "가\n\n나");
    }

    #[test]
    fn malformed_markup_never_panics() {
        sanitize("<img src=");
        sanitize("<<<><p");
        sanitize("<img data-src='");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn clean_inline_collapses_whitespace() {
        assert_eq!(clean_inline("  제목 \n  테스트  "), "제목 테스트");
    }
}
