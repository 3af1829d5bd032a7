use crate::config::CrawlerConfig;
use crate::error::{Result, ScanError};
use std::collections::HashSet;
use tracing::debug;
use url::{Origin, ParseError, Url};

/// The page a crawl starts from, with one trailing slash removed.
#[derive(Debug, Clone)]
pub struct SeedUrl {
    normalized: String,
    url: Url,
    origin: Origin,
}

impl SeedUrl {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let normalized = trimmed.strip_suffix('/').unwrap_or(trimmed).to_string();

        let url = Url::parse(&normalized)
            .map_err(|e| ScanError::InvalidUrl(format!("{}: {}", raw, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ScanError::InvalidUrl(format!(
                "{}: only http and https are supported",
                raw
            )));
        }
        if url.host_str().is_none() {
            return Err(ScanError::InvalidUrl(format!("{}: missing host", raw)));
        }

        let origin = url.origin();
        Ok(Self {
            normalized,
            url,
            origin,
        })
    }

    /// Seed exactly as it is fetched and recorded.
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    // Directory-style base that purely relative links are appended to.
    fn relative_base(&self) -> String {
        let mut base = self.url.clone();
        base.set_query(None);
        base.set_fragment(None);
        let base: String = base.into();
        base.trim_end_matches('/').to_string()
    }
}

/// Resolve an `href` value found on the seed page.
///
/// Protocol-relative (`//host/x`) links take the seed's scheme, root-relative
/// (`/x`) links are placed under the seed's origin, links carrying a scheme
/// are taken as-is and anything else is appended to the seed path.
/// Returns `None` for hrefs that do not point at a page or fail to parse.
pub fn resolve_href(seed: &SeedUrl, href: &str) -> Option<Url> {
    let href = href.trim();
    if href.is_empty()
        || href.starts_with('#')
        || href.to_ascii_lowercase().starts_with("javascript:")
    {
        return None;
    }

    let candidate = if href.starts_with("//") {
        format!("{}:{}", seed.url.scheme(), href)
    } else if href.starts_with('/') {
        format!("{}{}", seed.origin.ascii_serialization(), href)
    } else {
        match Url::parse(href) {
            Ok(absolute) => return Some(absolute),
            Err(ParseError::RelativeUrlWithoutBase) => {
                format!("{}/{}", seed.relative_base(), href)
            }
            Err(_) => return None,
        }
    };

    Url::parse(&candidate).ok()
}

/// Strip query and fragment; optionally drop one trailing slash.
pub fn clean_location(mut url: Url, normalize_trailing_slash: bool) -> String {
    url.set_query(None);
    url.set_fragment(None);
    let location: String = url.into();
    if normalize_trailing_slash
        && let Some(trimmed) = location.strip_suffix('/')
    {
        return trimmed.to_string();
    }
    location
}

/// Build the ordered, de-duplicated list of same-origin locations for a seed
/// and the raw `href` values found on its page. The seed is always first.
pub fn discover_locations<I, S>(seed: &SeedUrl, hrefs: I, config: &CrawlerConfig) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut locations = Vec::new();

    seen.insert(seed.as_str().to_string());
    locations.push(seed.as_str().to_string());

    for href in hrefs {
        let href = href.as_ref();
        let Some(resolved) = resolve_href(seed, href) else {
            debug!("Skipping unresolvable link: {}", href);
            continue;
        };

        if resolved.origin() != seed.origin {
            debug!("Skipping cross-origin link: {}", resolved);
            continue;
        }

        let location = clean_location(resolved, config.normalize_trailing_slash);
        if location.len() > config.max_url_length {
            debug!(
                "Skipping link longer than {} characters: {}",
                config.max_url_length, location
            );
            continue;
        }

        if seen.insert(location.clone()) {
            debug!("Found link: {}", location);
            locations.push(location);
        }
    }

    locations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(raw: &str) -> SeedUrl {
        SeedUrl::parse(raw).unwrap()
    }

    #[test]
    fn test_seed_trims_single_trailing_slash() {
        assert_eq!(seed("https://example.com/").as_str(), "https://example.com");
        assert_eq!(seed("https://example.com/blog/").as_str(), "https://example.com/blog");
        assert_eq!(seed("https://example.com").as_str(), "https://example.com");
    }

    #[test]
    fn test_seed_rejects_bad_input() {
        assert!(matches!(SeedUrl::parse("not a url"), Err(ScanError::InvalidUrl(_))));
        assert!(matches!(SeedUrl::parse("example.com"), Err(ScanError::InvalidUrl(_))));
        assert!(matches!(SeedUrl::parse("ftp://example.com"), Err(ScanError::InvalidUrl(_))));
        assert!(matches!(SeedUrl::parse("mailto:a@b.com"), Err(ScanError::InvalidUrl(_))));
    }

    #[test]
    fn test_resolve_root_relative() {
        let s = seed("https://example.com/blog");
        let url = resolve_href(&s, "/pricing").unwrap();
        assert_eq!(url.as_str(), "https://example.com/pricing");
    }

    #[test]
    fn test_resolve_protocol_relative_uses_seed_scheme() {
        let s = seed("http://example.com");
        let url = resolve_href(&s, "//example.com/x").unwrap();
        assert_eq!(url.as_str(), "http://example.com/x");
    }

    #[test]
    fn test_resolve_purely_relative_appends_to_seed_path() {
        let s = seed("https://example.com/blog/");
        let url = resolve_href(&s, "first-post").unwrap();
        assert_eq!(url.as_str(), "https://example.com/blog/first-post");

        let url = resolve_href(&s, "./second").unwrap();
        assert_eq!(url.as_str(), "https://example.com/blog/second");
    }

    #[test]
    fn test_resolve_skips_non_page_hrefs() {
        let s = seed("https://example.com");
        assert!(resolve_href(&s, "").is_none());
        assert!(resolve_href(&s, "   ").is_none());
        assert!(resolve_href(&s, "#top").is_none());
        assert!(resolve_href(&s, "JavaScript:void(0)").is_none());
        assert!(resolve_href(&s, "http://[::1").is_none());
    }

    #[test]
    fn test_clean_location_strips_query_and_fragment() {
        let url = Url::parse("https://example.com/a?x=1#frag").unwrap();
        assert_eq!(clean_location(url, false), "https://example.com/a");
    }

    #[test]
    fn test_clean_location_trailing_slash_option() {
        let url = Url::parse("https://example.com/about/").unwrap();
        assert_eq!(clean_location(url.clone(), false), "https://example.com/about/");
        assert_eq!(clean_location(url, true), "https://example.com/about");
    }

    #[test]
    fn test_discover_pricing_external_and_mailto() {
        let s = seed("https://example.com");
        let hrefs = ["/pricing", "https://external.com/x", "mailto:a@b.com"];
        let locations = discover_locations(&s, hrefs, &CrawlerConfig::default());
        assert_eq!(
            locations,
            vec!["https://example.com", "https://example.com/pricing"]
        );
    }

    #[test]
    fn test_discover_keeps_about_and_about_slash_distinct() {
        let s = seed("https://example.com");
        let hrefs = ["/about", "/about/", "/about?ref=nav", "/about#team"];
        let locations = discover_locations(&s, hrefs, &CrawlerConfig::default());
        assert_eq!(
            locations,
            vec![
                "https://example.com",
                "https://example.com/about",
                "https://example.com/about/",
            ]
        );
    }

    #[test]
    fn test_discover_collapses_trailing_slash_when_enabled() {
        let s = seed("https://example.com");
        let config = CrawlerConfig {
            normalize_trailing_slash: true,
            ..CrawlerConfig::default()
        };
        let locations = discover_locations(&s, ["/about", "/about/", "/"], &config);
        assert_eq!(
            locations,
            vec!["https://example.com", "https://example.com/about"]
        );
    }

    #[test]
    fn test_discover_rejects_other_scheme_or_port() {
        let s = seed("https://example.com");
        let hrefs = [
            "http://example.com/insecure",
            "https://example.com:8443/alt",
            "https://sub.example.com/x",
            "tel:+123",
        ];
        let locations = discover_locations(&s, hrefs, &CrawlerConfig::default());
        assert_eq!(locations, vec!["https://example.com"]);
    }

    #[test]
    fn test_discover_skips_malformed_and_foreign_protocol_relative() {
        let s = seed("https://example.com");
        let hrefs = [
            "/first",
            "http://[::1",
            "//external.com/x",
            "//example.com/second",
            "https://exa mple.com/bad",
            "third",
        ];
        let locations = discover_locations(&s, hrefs, &CrawlerConfig::default());
        assert_eq!(
            locations,
            vec![
                "https://example.com",
                "https://example.com/first",
                "https://example.com/second",
                "https://example.com/third",
            ]
        );
    }

    #[test]
    fn test_discover_length_cutoff() {
        let s = seed("https://example.com");
        // "https://example.com/" is 20 characters
        let fits = format!("/{}", "a".repeat(180));
        let too_long = format!("/{}", "b".repeat(181));
        let locations =
            discover_locations(&s, [fits.as_str(), too_long.as_str()], &CrawlerConfig::default());
        assert_eq!(locations.len(), 2);
        assert_eq!(locations[1].len(), 200);
    }

    #[test]
    fn test_discover_length_cutoff_is_configurable() {
        let s = seed("https://example.com");
        let config = CrawlerConfig {
            max_url_length: 25,
            ..CrawlerConfig::default()
        };
        let locations = discover_locations(&s, ["/abc", "/abcdefghij"], &config);
        assert_eq!(locations, vec!["https://example.com", "https://example.com/abc"]);
    }

    #[test]
    fn test_discover_seed_link_is_not_duplicated() {
        let s = seed("https://example.com/docs");
        let locations = discover_locations(&s, ["/docs", "https://example.com/docs"], &CrawlerConfig::default());
        assert_eq!(locations, vec!["https://example.com/docs"]);
    }
}
