use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The four fixed topic buckets of the board. Never free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Humor,
    Health,
    Wisdom,
    History,
}

impl Topic {
    pub const ALL: [Topic; 4] = [Topic::Humor, Topic::Health, Topic::Wisdom, Topic::History];

    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Humor => "humor",
            Topic::Health => "health",
            Topic::Wisdom => "wisdom",
            Topic::History => "history",
        }
    }
}

/// One unprocessed feed entry. Lives only between the fetcher and the
/// per-source collect loop.
#[derive(Debug, Clone)]
pub struct RawItem {
    pub title: String,
    pub link: String,
    pub raw_body: String,
    pub published_at: Option<DateTime<Utc>>,
}

/// The durable unit of output. Field names follow the snapshot schema the
/// presentation layer reads; interaction state is keyed by `id` downstream,
/// so `id` must stay stable across re-collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    #[serde(rename = "category")]
    pub topic: Topic,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Plain text; images appear as inline `![img](URL)` markers.
    pub body: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,
    #[serde(rename = "sourceName")]
    pub source_name: String,
    #[serde(rename = "sourceUrl", default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    // Display seeds, drawn once at collection time. The board keeps its own
    // per-user interaction counts keyed by `id`; these are never recomputed.
    #[serde(rename = "thumbsUpCount")]
    pub thumbs_up_count: u32,
    #[serde(rename = "thumbsDownCount")]
    pub thumbs_down_count: u32,
    #[serde(rename = "likedCount")]
    pub liked_count: u32,
    #[serde(rename = "shareCount")]
    pub share_count: u32,
    #[serde(rename = "sourceId")]
    pub source_id: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CollectorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CollectorError>;
