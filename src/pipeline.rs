//! Run orchestration: one concurrent task per source, local accumulation
//! per task, merge after completion, then the batched enrichment pass.

use crate::classifier::classify;
use crate::enricher::Enricher;
use crate::fetcher::{parse_feed, Fetcher};
use crate::filter::{is_denylisted, is_low_quality};
use crate::identity::identify;
use crate::registry::{SourceDescriptor, SourceKind};
use crate::sanitizer::{clean_inline, sanitize};
use crate::tagger::tag;
use crate::types::{ContentItem, Result};
use chrono::Utc;
use rand::Rng;
use std::sync::Arc;
use tracing::{info, warn};

/// Default per-source cap on accepted items, overridable via CLI or the
/// COLLECT_LIMIT environment variable.
pub const DEFAULT_LIMIT: usize = 20;

pub struct Pipeline {
    fetcher: Arc<Fetcher>,
    enricher: Enricher,
    limit: usize,
}

impl Pipeline {
    pub fn new(limit: usize) -> Result<Self> {
        let fetcher = Arc::new(Fetcher::new()?);
        let enricher = Enricher::new(fetcher.clone());
        Ok(Self { fetcher, enricher, limit })
    }

    /// Fetch phase: every source runs as its own task; the phase completes
    /// when all tasks have, regardless of individual outcomes. Results merge
    /// into one collection only after each task finishes, so there are no
    /// concurrent writers.
    pub async fn collect(&self, sources: &'static [SourceDescriptor]) -> Result<Vec<ContentItem>> {
        let mut handles = Vec::with_capacity(sources.len());
        for source in sources {
            let fetcher = self.fetcher.clone();
            let limit = self.limit;
            handles.push(tokio::spawn(async move {
                collect_source(fetcher, source, limit).await
            }));
        }

        let mut all = Vec::new();
        for handle in handles {
            match handle.await {
                Ok(items) => all.extend(items),
                Err(e) => warn!("source task panicked: {}", e),
            }
        }

        info!("collected {} item(s) across {} source(s)", all.len(), sources.len());
        Ok(all)
    }

    /// Enrichment phase over the full accumulated collection.
    pub async fn enrich(&self, items: &mut [ContentItem]) -> usize {
        self.enricher.enrich_all(items).await
    }
}

/// Collect from a single source: fetch, sanitize, filter, classify, tag and
/// assign identity, short-circuiting once `limit` items are accepted. Every
/// failure mode degrades to an empty (or shorter) result for this source.
async fn collect_source(
    fetcher: Arc<Fetcher>,
    source: &'static SourceDescriptor,
    limit: usize,
) -> Vec<ContentItem> {
    info!("[{}] {} — {}", source.id, source.name, source.list_url);

    match source.kind {
        SourceKind::Feed => {}
        SourceKind::PageList => {
            // Needs an authenticated browser session we don't have yet.
            info!("[{}] page-list sources are disabled, skipping", source.id);
            return Vec::new();
        }
    }

    let Some(xml) = fetcher.fetch_feed(source.list_url).await else {
        return Vec::new();
    };
    let entries = match parse_feed(&xml) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("[{}] unparseable feed: {}", source.id, e);
            return Vec::new();
        }
    };

    let now = Utc::now();
    let mut rng = rand::thread_rng();
    let mut accepted = Vec::new();

    for raw in entries {
        if accepted.len() >= limit {
            break;
        }

        let title = clean_inline(&raw.title);
        let body = sanitize(&raw.raw_body);
        if title.is_empty() || body.is_empty() {
            continue;
        }
        if is_denylisted(&title) {
            info!("[{}] denylisted title: {:.40}", source.id, title);
            continue;
        }
        if is_denylisted(&body) {
            info!("[{}] denylisted body: {:.40}", source.id, title);
            continue;
        }
        if is_low_quality(&title, &body) {
            info!("[{}] low quality: {:.40}", source.id, title);
            continue;
        }

        let topic = classify(&title, &body, source.topic);
        let tags = tag(&title, &body);
        let source_url = if raw.link.is_empty() { None } else { Some(raw.link.clone()) };

        accepted.push(ContentItem {
            id: identify(source.id, &raw.link),
            topic,
            title: Some(title),
            body,
            tags,
            source_name: source.name.to_string(),
            source_url,
            created_at: raw.published_at.unwrap_or(now),
            thumbs_up_count: rng.gen_range(5..45),
            thumbs_down_count: rng.gen_range(0..3),
            liked_count: rng.gen_range(0..15),
            share_count: rng.gen_range(0..8),
            source_id: source.id.to_string(),
        });
    }

    info!("[{}] accepted {} item(s)", source.id, accepted.len());
    accepted
}
