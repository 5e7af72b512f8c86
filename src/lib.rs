pub mod types;
pub mod registry;
pub mod fetcher;
pub mod sanitizer;
pub mod filter;
pub mod classifier;
pub mod tagger;
pub mod identity;
pub mod enricher;
pub mod writer;
pub mod pipeline;

pub use types::{CollectorError, ContentItem, RawItem, Result, Topic};
pub use registry::{SourceDescriptor, SourceKind, SOURCES};
pub use fetcher::Fetcher;
pub use enricher::Enricher;
pub use pipeline::{Pipeline, DEFAULT_LIMIT};
