pub mod config;
pub mod crawler;
pub mod entry;
pub mod error;
pub mod extract;
pub mod links;
pub mod scoring;

pub use config::CrawlerConfig;
pub use crawler::{Crawler, ProgressCallback};
pub use entry::{ChangeFrequency, SitemapEntry};
pub use error::{Result, ScanError};
pub use extract::{HtmlLinkExtractor, LinkExtractor};
pub use links::SeedUrl;
pub use scoring::{DepthScoring, Score, ScoringPolicy};
