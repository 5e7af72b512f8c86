//! Original-page image enrichment.
//!
//! Best-effort scraping against arbitrary third-party markup: a prioritized
//! selector list locates the article body, boilerplate is skipped, and the
//! content tree is walked depth-first into plain text with image markers.
//! The extracted text replaces an item's body only when it is strictly
//! better (has at least one image and enough text); anything short of that,
//! including fetch and parse failures, keeps the feed-derived body.

use crate::fetcher::Fetcher;
use crate::sanitizer::{normalize_whitespace, resolve_image_url};
use crate::types::ContentItem;
use futures::future;
use scraper::{ElementRef, Html, Node, Selector};
use std::sync::Arc;
use tracing::{debug, info};

/// Article-body selectors in priority order; the first one that matches
/// anything on the page wins, with no merging across selectors.
const CONTENT_SELECTORS: &[&str] = &[
    ".entry-content",
    ".tt_article_useless_p_margin",
    ".contents_style",
    ".article_view",
    ".area_view",
];

/// Elements never worth walking into.
const SKIP_TAGS: &[&str] = &["script", "style", "noscript", "iframe", "ins"];

/// Ad, navigation and related-post containers stripped before extraction.
const BOILERPLATE_CLASSES: &[&str] = &[
    "revenue_unit_wrap",
    "container_postbtn",
    "another_category",
    "footer_tag",
    "ads_wrap",
];

const BLOCK_TAGS: &[&str] = &[
    "p", "div", "h1", "h2", "h3", "h4", "h5", "h6",
    "li", "blockquote", "figure", "section", "table", "tr",
];

/// Items are enriched in batches of this size; the whole batch settles
/// before the next starts.
const BATCH_SIZE: usize = 5;

/// An extracted body must reach this many characters to replace the original.
const MIN_ENRICHED_LENGTH: usize = 100;

pub struct Enricher {
    fetcher: Arc<Fetcher>,
}

impl Enricher {
    pub fn new(fetcher: Arc<Fetcher>) -> Self {
        Self { fetcher }
    }

    /// Run the enrichment pass over the full accepted collection. Returns
    /// the number of bodies replaced. A single item's failure never affects
    /// its batch siblings.
    pub async fn enrich_all(&self, items: &mut [ContentItem]) -> usize {
        info!("enriching {} items from their original pages", items.len());
        let mut enriched = 0;

        for batch in items.chunks_mut(BATCH_SIZE) {
            let fetches: Vec<_> = batch
                .iter()
                .map(|item| {
                    let url = item.source_url.clone();
                    async move {
                        match url {
                            Some(u) if !u.is_empty() => self.enrich_one(&u).await,
                            _ => None,
                        }
                    }
                })
                .collect();
            let bodies = future::join_all(fetches).await;

            for (item, body) in batch.iter_mut().zip(bodies) {
                if let Some(body) = body {
                    let markers = body.matches("![img](").count();
                    debug!(
                        "enriched {:?} with {} image(s)",
                        item.title.as_deref().unwrap_or(&item.id),
                        markers
                    );
                    item.body = body;
                    enriched += 1;
                }
            }
        }

        info!("enriched {} item(s)", enriched);
        enriched
    }

    async fn enrich_one(&self, url: &str) -> Option<String> {
        let html = self.fetcher.fetch_page(url).await?;
        extract_page_body(&html)
    }
}

/// Extract the main content of an article page as plain text with image
/// markers, or `None` when the page has no usable content region or the
/// extraction is not strictly better than nothing.
pub fn extract_page_body(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    let content = CONTENT_SELECTORS.iter().find_map(|raw| {
        let selector = Selector::parse(raw).ok()?;
        document.select(&selector).next()
    })?;

    let mut parts: Vec<String> = Vec::new();
    walk(content, &mut parts);

    let body = normalize_whitespace(&parts.concat());
    if body.contains("![img](") && body.chars().count() >= MIN_ENRICHED_LENGTH {
        Some(body)
    } else {
        None
    }
}

fn walk(element: ElementRef, parts: &mut Vec<String>) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                if !text.trim().is_empty() {
                    parts.push(text.to_string());
                }
            }
            Node::Element(_) => {
                let Some(child_el) = ElementRef::wrap(child) else {
                    continue;
                };
                let tag = child_el.value().name();

                if SKIP_TAGS.contains(&tag) || is_boilerplate(&child_el) {
                    continue;
                }
                if tag == "img" {
                    if let Some(url) = image_url(&child_el) {
                        parts.push(format!("\n\n![img]({url})\n\n"));
                    }
                    continue;
                }
                if tag == "br" {
                    parts.push("\n".to_string());
                    continue;
                }

                let is_block = BLOCK_TAGS.contains(&tag);
                if is_block {
                    parts.push("\n".to_string());
                }
                walk(child_el, parts);
                if is_block {
                    parts.push("\n".to_string());
                }
            }
            _ => {}
        }
    }
}

fn is_boilerplate(element: &ElementRef) -> bool {
    element
        .value()
        .classes()
        .any(|class| BOILERPLATE_CLASSES.contains(&class))
}

/// Image URL from the most specific lazy-load attribute available.
fn image_url(element: &ElementRef) -> Option<String> {
    let el = element.value();
    let raw = el
        .attr("data-origin-src")
        .or_else(|| el.attr("data-lazy-src"))
        .or_else(|| el.attr("data-src"))
        .or_else(|| el.attr("src"))
        .unwrap_or_default();
    resolve_image_url(raw)
}
