use crate::entry::ChangeFrequency;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub priority: f64,
    pub change_frequency: ChangeFrequency,
}

/// Assigns sitemap hints to a discovered location.
///
/// Implementations must be pure: the same location always yields the same
/// score within a crawl.
pub trait ScoringPolicy: Send + Sync {
    fn score(&self, location: &str) -> Score;
}

/// Scores a URL by how deep its path sits below the origin.
///
/// | depth | priority | changefreq |
/// |-------|----------|------------|
/// | 0     | 1.0      | daily      |
/// | 1     | 0.9      | weekly     |
/// | 2     | 0.8      | weekly     |
/// | 3+    | 0.6      | monthly    |
///
/// Depth is counted on the location string as-is, so a trailing slash adds a
/// level: `/about/` scores like `/about/x`. With `root_slash_as_origin` set,
/// the bare origin root `https://example.com/` scores like
/// `https://example.com` instead of as depth 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthScoring {
    pub root_slash_as_origin: bool,
}

impl ScoringPolicy for DepthScoring {
    fn score(&self, location: &str) -> Score {
        let depth = if self.root_slash_as_origin && is_origin_root(location) {
            0
        } else {
            path_depth(location)
        };

        match depth {
            0 => Score {
                priority: 1.0,
                change_frequency: ChangeFrequency::Daily,
            },
            1 => Score {
                priority: 0.9,
                change_frequency: ChangeFrequency::Weekly,
            },
            2 => Score {
                priority: 0.8,
                change_frequency: ChangeFrequency::Weekly,
            },
            _ => Score {
                priority: 0.6,
                change_frequency: ChangeFrequency::Monthly,
            },
        }
    }
}

/// Slash count minus the two in `scheme://`.
///
/// `https://example.com` is depth 0, `https://example.com/` and
/// `https://example.com/about` are depth 1, `https://example.com/about/` is 2.
pub fn path_depth(location: &str) -> usize {
    location.matches('/').count().saturating_sub(2)
}

fn is_origin_root(location: &str) -> bool {
    Url::parse(location)
        .map(|u| u.path() == "/" && u.query().is_none() && u.fragment().is_none())
        .unwrap_or(false)
}
