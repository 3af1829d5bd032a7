use indicatif::{ProgressBar, ProgressStyle};
use sitemill_scanner::{Crawler, CrawlerConfig, ProgressCallback, Result, SitemapEntry};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Options for a single sitemap generation
pub struct GenerateOptions {
    pub url: String,
    pub config: CrawlerConfig,
    pub show_progress: bool,
}

/// Callback for reporting generation progress
pub type GenerateProgressCallback = Arc<dyn Fn(String) + Send + Sync>;

/// Outcome of one generation run
#[derive(Debug, Clone)]
pub struct SitemapRun {
    pub seed: String,
    pub entries: Vec<SitemapEntry>,
}

impl SitemapRun {
    /// Only the seed itself was found.
    ///
    /// Either the page really has no internal links, or its links are
    /// rendered by JavaScript or hidden from automated clients. The two
    /// cases cannot be told apart from a single fetch.
    pub fn is_seed_only(&self) -> bool {
        self.entries.len() <= 1
    }

    pub fn host(&self) -> Option<String> {
        Url::parse(&self.seed)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
    }
}

/// Extract the path component from a URL
pub fn extract_url_path(url: &str) -> String {
    Url::parse(url)
        .ok()
        .map(|u| {
            let path = u.path().to_string();
            if path.is_empty() || path == "/" {
                "/".to_string()
            } else {
                path
            }
        })
        .unwrap_or_else(|| url.to_string())
}

/// Crawl the seed page and collect its sitemap entries
pub async fn execute_generate(
    options: GenerateOptions,
    progress_callback: Option<GenerateProgressCallback>,
) -> Result<SitemapRun> {
    let GenerateOptions {
        url,
        config,
        show_progress,
    } = options;

    let progress_bar = if show_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message("Starting...");
        Some(Arc::new(pb))
    } else {
        None
    };

    let pb_clone = progress_bar.clone();
    let external_cb = progress_callback.clone();
    let crawler_callback: ProgressCallback = Arc::new(move |msg: String| {
        if let Some(ref pb) = pb_clone {
            pb.set_message(msg.clone());
        }
        if let Some(ref cb) = external_cb {
            cb(msg);
        }
    });

    let crawler = Crawler::with_config(config)?.with_progress_callback(crawler_callback);
    let outcome = crawler.crawl(&url).await;

    if let Some(ref pb) = progress_bar {
        match &outcome {
            Ok(entries) => pb.finish_with_message(format!("Found {} URLs", entries.len())),
            Err(_) => pb.finish_and_clear(),
        }
    }

    let entries = outcome?;
    let seed = entries
        .first()
        .map(|e| e.location.clone())
        .unwrap_or(url);

    Ok(SitemapRun { seed, entries })
}
