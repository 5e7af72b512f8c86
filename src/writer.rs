//! Snapshot output. The accepted set fully replaces any previous snapshot;
//! this is the only stage whose failure is fatal to the run.

use crate::types::{ContentItem, Result, Topic};
use std::path::Path;
use tracing::info;

/// Serialize the full collection as a human-readable JSON document at
/// `path`, creating parent directories as needed, and log per-topic counts.
pub async fn write_snapshot(path: &Path, items: &[ContentItem]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let json = serde_json::to_string_pretty(items)?;
    tokio::fs::write(path, json).await?;

    for topic in Topic::ALL {
        let count = items.iter().filter(|item| item.topic == topic).count();
        info!("  {}: {}", topic.as_str(), count);
    }
    let with_images = items.iter().filter(|item| item.body.contains("![img](")).count();
    info!(
        "wrote snapshot: {} item(s), {} with images -> {}",
        items.len(),
        with_images,
        path.display()
    );

    Ok(())
}
