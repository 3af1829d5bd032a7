use crate::config::CrawlerConfig;
use crate::entry::SitemapEntry;
use crate::error::{Result, ScanError};
use crate::extract::{HtmlLinkExtractor, LinkExtractor};
use crate::links::{SeedUrl, discover_locations};
use crate::scoring::{DepthScoring, ScoringPolicy};
use chrono::{NaiveDate, Utc};
use reqwest::Client;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

pub type ProgressCallback = Arc<dyn Fn(String) + Send + Sync>;

/// Fetches one page and turns its same-origin links into sitemap entries.
///
/// Each call to [`Crawler::crawl`] issues exactly one GET. Discovered links are
/// recorded but never fetched.
pub struct Crawler {
    client: Client,
    config: CrawlerConfig,
    extractor: Arc<dyn LinkExtractor>,
    scoring: Arc<dyn ScoringPolicy>,
    progress_callback: Option<ProgressCallback>,
}

impl Crawler {
    pub fn new() -> Result<Self> {
        Self::with_config(CrawlerConfig::default())
    }

    pub fn with_config(config: CrawlerConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(config.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(5));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        let scoring = DepthScoring {
            root_slash_as_origin: config.root_slash_as_origin,
        };

        Ok(Self {
            client,
            config,
            extractor: Arc::new(HtmlLinkExtractor),
            scoring: Arc::new(scoring),
            progress_callback: None,
        })
    }

    pub fn with_extractor(mut self, extractor: Arc<dyn LinkExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn with_scoring(mut self, scoring: Arc<dyn ScoringPolicy>) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    pub async fn crawl(&self, seed_url: &str) -> Result<Vec<SitemapEntry>> {
        let seed = SeedUrl::parse(seed_url)?;
        info!("Starting crawl of {}", seed.as_str());

        self.report(format!("Fetching {}", seed.as_str()));
        let html = self.fetch(&seed).await?;

        self.report(format!("Extracting links from {}", seed.as_str()));
        let hrefs = self.extractor.parse_links(&html);
        debug!("Extracted {} hrefs from {}", hrefs.len(), seed.as_str());

        let locations = discover_locations(&seed, &hrefs, &self.config);
        let entries = self.build_entries(locations, Utc::now().date_naive());

        info!("Crawl complete. Found {} unique URLs", entries.len());
        Ok(entries)
    }

    /// Score each location and stamp it with the crawl date.
    pub fn build_entries(&self, locations: Vec<String>, crawled_on: NaiveDate) -> Vec<SitemapEntry> {
        locations
            .into_iter()
            .map(|location| {
                let score = self.scoring.score(&location);
                SitemapEntry::new(location, crawled_on, score.change_frequency, score.priority)
            })
            .collect()
    }

    async fn fetch(&self, seed: &SeedUrl) -> Result<String> {
        debug!("Fetching {}", seed.as_str());

        let start = Instant::now();
        let response = self.client.get(seed.as_str()).send().await?;
        let status = response.status();
        debug!("{} answered {} in {:?}", seed.as_str(), status, start.elapsed());

        if !status.is_success() {
            warn!("Seed fetch for {} returned {}", seed.as_str(), status);
            return Err(ScanError::HttpStatus {
                url: seed.as_str().to_string(),
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown status").to_string(),
            });
        }

        Ok(response.text().await?)
    }

    fn report(&self, message: String) {
        if let Some(ref callback) = self.progress_callback {
            callback(message);
        }
    }
}
