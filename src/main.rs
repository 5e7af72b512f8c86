use clap::Parser;
use std::env;
use std::path::PathBuf;
use tracing::info;
use uzlsi_collector::{writer, Pipeline, DEFAULT_LIMIT, SOURCES};

/// Uzlsi board content collector: pulls posts from the configured feeds,
/// filters and classifies them, enriches them with original-page images,
/// and writes the snapshot the board reads.
#[derive(Parser, Debug)]
#[command(name = "uzlsi-collector")]
struct Cli {
    /// Snapshot output path (fully replaced every run)
    #[arg(short, long, default_value = "data/feed-collected.json")]
    out: PathBuf,

    /// Max accepted items per source; falls back to COLLECT_LIMIT, then 20
    #[arg(short, long)]
    limit: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let limit = cli
        .limit
        .or_else(|| env::var("COLLECT_LIMIT").ok().and_then(|v| v.parse().ok()))
        .unwrap_or(DEFAULT_LIMIT);

    info!(
        "starting collection: {} source(s), up to {} item(s) each",
        SOURCES.len(),
        limit
    );

    let pipeline = Pipeline::new(limit)?;
    let mut items = pipeline.collect(SOURCES).await?;
    let enriched = pipeline.enrich(&mut items).await;
    info!("{} of {} item(s) enriched with page images", enriched, items.len());

    writer::write_snapshot(&cli.out, &items).await?;

    info!("collection finished: {} item(s)", items.len());
    Ok(())
}
