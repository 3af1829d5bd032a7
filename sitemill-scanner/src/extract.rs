use scraper::{Html, Selector};
use tracing::warn;

/// Pulls raw `href` values out of an HTML document.
pub trait LinkExtractor: Send + Sync {
    fn parse_links(&self, html: &str) -> Vec<String>;
}

/// `scraper`-backed extractor returning every `<a href>` in document order.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlLinkExtractor;

impl LinkExtractor for HtmlLinkExtractor {
    fn parse_links(&self, html: &str) -> Vec<String> {
        let link_selector = match Selector::parse("a[href]") {
            Ok(selector) => selector,
            Err(e) => {
                warn!("Invalid link selector: {}", e);
                return Vec::new();
            }
        };

        let document = Html::parse_document(html);
        document
            .select(&link_selector)
            .filter_map(|element| element.value().attr("href"))
            .map(str::to_string)
            .collect()
    }
}
