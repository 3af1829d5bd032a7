// Output rendering for generated sitemaps

use crate::error::Result;
use crate::generate::extract_url_path;
use crate::xml::render_sitemap;
use sitemill_scanner::{ChangeFrequency, SitemapEntry};
use std::fs;
use std::path::Path;
use tracing::info;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Xml,
    Json,
    Text,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "xml" => Some(OutputFormat::Xml),
            "json" => Some(OutputFormat::Json),
            "text" | "txt" => Some(OutputFormat::Text),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Xml => "xml",
            OutputFormat::Json => "json",
            OutputFormat::Text => "txt",
        }
    }
}

pub fn render_output(entries: &[SitemapEntry], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Xml => render_sitemap(entries),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(entries)?),
        OutputFormat::Text => Ok(generate_sitemap_report(entries)),
    }
}

/// Write rendered output, creating missing parent directories
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    info!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Human-readable summary of a generated sitemap
pub fn generate_sitemap_report(entries: &[SitemapEntry]) -> String {
    let mut report = String::new();
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");
    report.push_str("# Summary:\n");

    if let Some(host) = entries
        .first()
        .and_then(|e| Url::parse(&e.location).ok())
        .and_then(|u| u.host_str().map(str::to_string))
    {
        report.push_str(&format!("  Host: {}\n", host));
    }
    report.push_str(&format!("  URLs: {}\n", entries.len()));

    for freq in ChangeFrequency::ALL {
        let count = entries
            .iter()
            .filter(|e| e.change_frequency == freq)
            .count();
        if count > 0 {
            report.push_str(&format!("  {}: {}\n", freq, count));
        }
    }

    report.push_str("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

    for entry in entries {
        report.push_str(&format!(
            "  {} {:<8} {}\n",
            entry.priority_label(),
            entry.change_frequency,
            extract_url_path(&entry.location)
        ));
    }

    report
}
