// Tests for sitemap XML serialization

use chrono::NaiveDate;
use sitemill_core::xml::{SITEMAP_NAMESPACE, render_sitemap};
use sitemill_scanner::{ChangeFrequency, SitemapEntry};

fn entry(location: &str, freq: ChangeFrequency, priority: f64) -> SitemapEntry {
    let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
    SitemapEntry::new(location.to_string(), date, freq, priority)
}

// ============================================================================
// Document Structure Tests
// ============================================================================

#[test]
fn test_render_declaration_and_namespace() {
    let xml = render_sitemap(&[]).unwrap();

    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(xml.contains(&format!(r#"<urlset xmlns="{}">"#, SITEMAP_NAMESPACE)));
    assert!(xml.trim_end().ends_with("</urlset>"));
    assert!(!xml.contains("<url>"));
}

#[test]
fn test_render_single_entry_fields() {
    let xml = render_sitemap(&[entry("https://example.com", ChangeFrequency::Daily, 1.0)]).unwrap();

    assert!(xml.contains("<loc>https://example.com</loc>"));
    assert!(xml.contains("<lastmod>2024-03-09</lastmod>"));
    assert!(xml.contains("<changefreq>daily</changefreq>"));
    assert!(xml.contains("<priority>1.0</priority>"));
}

#[test]
fn test_render_preserves_entry_order() {
    let entries = vec![
        entry("https://example.com", ChangeFrequency::Daily, 1.0),
        entry("https://example.com/pricing", ChangeFrequency::Weekly, 0.9),
        entry("https://example.com/a/b/c", ChangeFrequency::Monthly, 0.6),
    ];
    let xml = render_sitemap(&entries).unwrap();

    assert_eq!(xml.matches("<url>").count(), 3);
    assert_eq!(xml.matches("</url>").count(), 3);
    let root = xml.find("<loc>https://example.com</loc>").unwrap();
    let pricing = xml.find("<loc>https://example.com/pricing</loc>").unwrap();
    let deep = xml.find("<loc>https://example.com/a/b/c</loc>").unwrap();
    assert!(root < pricing && pricing < deep);
    assert!(xml.contains("<priority>0.6</priority>"));
    assert!(xml.contains("<changefreq>monthly</changefreq>"));
}

#[test]
fn test_render_is_indented() {
    let xml = render_sitemap(&[entry("https://example.com", ChangeFrequency::Daily, 1.0)]).unwrap();

    assert!(xml.contains("\n  <url>"));
    assert!(xml.contains("\n    <loc>"));
}

// ============================================================================
// Escaping Tests
// ============================================================================

#[test]
fn test_render_escapes_special_characters_in_loc() {
    let xml = render_sitemap(&[entry(
        "https://example.com/a&b<c>\"d'e",
        ChangeFrequency::Weekly,
        0.9,
    )])
    .unwrap();

    assert!(xml.contains("<loc>https://example.com/a&amp;b&lt;c&gt;&quot;d&apos;e</loc>"));
    assert!(!xml.contains("a&b"));
}
