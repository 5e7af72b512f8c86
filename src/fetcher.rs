//! HTTP retrieval and feed parsing.
//!
//! Two preconfigured clients: the feed client announces the collector bot,
//! the page client mimics a desktop browser for original-page enrichment.
//! Every request carries a hard timeout; a failed fetch degrades to "no
//! content" with a warning and is final for the run (no retries).

use crate::types::{RawItem, Result};
use feed_rs::parser;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const FEED_USER_AGENT: &str = "Mozilla/5.0 (compatible; UzlsiBot/1.0)";
pub const PAGE_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

pub struct Fetcher {
    feed_client: Client,
    page_client: Client,
}

impl Fetcher {
    pub fn new() -> Result<Self> {
        let feed_client = Client::builder()
            .user_agent(FEED_USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .build()?;

        let page_client = Client::builder()
            .user_agent(PAGE_USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .build()?;

        Ok(Self { feed_client, page_client })
    }

    /// Download a feed document. HTTP errors, timeouts and network failures
    /// all degrade to `None`; the source simply contributes nothing this run.
    pub async fn fetch_feed(&self, url: &str) -> Option<String> {
        debug!("fetching feed: {}", url);
        let response = match self.feed_client.get(url).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!("feed fetch failed for {}: {}", url, e);
                return None;
            }
        };
        if !response.status().is_success() {
            warn!("feed fetch for {} returned HTTP {}", url, response.status());
            return None;
        }
        match response.text().await {
            Ok(body) => Some(body),
            Err(e) => {
                warn!("feed body read failed for {}: {}", url, e);
                None
            }
        }
    }

    /// Download an original article page for enrichment. Failures are per
    /// item and expected; they only log at debug level.
    pub async fn fetch_page(&self, url: &str) -> Option<String> {
        let response = match self.page_client.get(url).send().await {
            Ok(r) => r,
            Err(e) => {
                debug!("page fetch failed for {}: {}", url, e);
                return None;
            }
        };
        if !response.status().is_success() {
            debug!("page fetch for {} returned HTTP {}", url, response.status());
            return None;
        }
        response.text().await.ok()
    }
}

/// Parse an RSS/Atom document into raw items. Prefers full content over the
/// summary, takes the first link, and carries the published (or updated)
/// timestamp when the source provides one.
pub fn parse_feed(xml: &str) -> Result<Vec<RawItem>> {
    let feed = parser::parse(xml.as_bytes())
        .map_err(|e| crate::types::CollectorError::Parse(e.to_string()))?;

    let mut items = Vec::with_capacity(feed.entries.len());
    for entry in feed.entries {
        let title = entry.title.map(|t| t.content).unwrap_or_default();
        let link = entry
            .links
            .first()
            .map(|l| l.href.clone())
            .unwrap_or_default();
        let raw_body = entry
            .content
            .and_then(|c| c.body)
            .or_else(|| entry.summary.map(|s| s.content))
            .unwrap_or_default();
        let published_at = entry
            .published
            .or(entry.updated)
            .map(|dt| dt.with_timezone(&chrono::Utc));

        items.push(RawItem { title, link, raw_body, published_at });
    }

    info!("parsed feed with {} entries", items.len());
    Ok(items)
}
