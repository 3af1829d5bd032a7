use std::time::Duration;

/// Cleaned URLs longer than this are treated as parameterised junk.
pub const DEFAULT_MAX_URL_LENGTH: usize = 200;

pub fn default_user_agent() -> String {
    format!(
        "Mozilla/5.0 (compatible; sitemill/{}; +https://github.com/trapdoorsec/sitemill)",
        env!("CARGO_PKG_VERSION")
    )
}

#[derive(Debug, Clone)]
pub struct CrawlerConfig {
    pub user_agent: String,
    pub max_url_length: usize,
    /// Drop a trailing `/` from discovered links before de-duplication.
    /// Off by default, so `/about` and `/about/` remain separate entries.
    pub normalize_trailing_slash: bool,
    /// Score a discovered `https://host/` link like the origin itself
    /// (priority 1.0, daily) rather than as a first-level page.
    pub root_slash_as_origin: bool,
    /// `None` waits for the server indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            max_url_length: DEFAULT_MAX_URL_LENGTH,
            normalize_trailing_slash: false,
            root_slash_as_origin: false,
            timeout: None,
        }
    }
}
