use anyhow::{Context, anyhow};
use clap::ArgMatches;
use colored::Colorize;
use sitemill_core::generate::{GenerateOptions, execute_generate};
use sitemill_core::report::{OutputFormat, render_output, write_output};
use sitemill_scanner::{CrawlerConfig, ScanError};
use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;
use url::Url;

/// Install the stderr log subscriber. `verbosity` is the number of `-v` flags.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    // A second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .try_init();
}

/// Parse a seed as typed by the user, adding https:// if needed
pub fn parse_seed_line(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if let Ok(url) = Url::parse(line)
        && matches!(url.scheme(), "http" | "https")
    {
        return url.host_str().map(|_| line.to_string());
    }

    // "example.com:8080" parses with "example.com" as its scheme
    if line.contains("://") {
        return None;
    }

    let with_scheme = format!("https://{}", line);
    match Url::parse(&with_scheme) {
        Ok(url) if url.host_str().is_some() => Some(with_scheme),
        _ => None,
    }
}

pub fn expand_output_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

/// Output file for `--output`. A directory (existing, or given with a trailing
/// slash) receives `sitemap.<ext>` for the chosen format.
pub fn resolve_output_path(raw: &str, format: OutputFormat) -> PathBuf {
    let path = expand_output_path(raw);
    if raw.ends_with('/') || path.is_dir() {
        path.join(format!("sitemap.{}", format.extension()))
    } else {
        path
    }
}

/// Map `generate` arguments onto the crawler configuration
pub fn crawler_config_from_args(args: &ArgMatches) -> CrawlerConfig {
    let defaults = CrawlerConfig::default();
    CrawlerConfig {
        user_agent: args
            .get_one::<String>("user-agent")
            .cloned()
            .unwrap_or(defaults.user_agent),
        max_url_length: args
            .get_one::<usize>("max-url-length")
            .copied()
            .unwrap_or(defaults.max_url_length),
        normalize_trailing_slash: args.get_flag("normalize-trailing-slash"),
        root_slash_as_origin: args.get_flag("root-slash-as-origin"),
        timeout: args
            .get_one::<u64>("timeout")
            .map(|secs| Duration::from_secs(*secs))
            .or(defaults.timeout),
    }
}

fn describe_scan_error(seed: &str, error: ScanError) -> anyhow::Error {
    if error.is_network() {
        anyhow!(
            "{}\nCould not fetch {}. The site may be down or may block automated requests.",
            error,
            seed
        )
    } else {
        anyhow::Error::new(error)
    }
}

pub async fn handle_generate(sub_matches: &ArgMatches, quiet: bool) -> anyhow::Result<()> {
    let raw_url = sub_matches
        .get_one::<String>("URL")
        .context("a URL to generate the sitemap from is required")?;
    let seed = parse_seed_line(raw_url)
        .ok_or_else(|| anyhow!("'{}' is not a valid http(s) URL", raw_url))?;

    let format = sub_matches
        .get_one::<String>("format")
        .and_then(|f| OutputFormat::parse(f))
        .unwrap_or(OutputFormat::Xml);
    let output = sub_matches
        .get_one::<String>("output")
        .map(|p| resolve_output_path(p, format));
    let config = crawler_config_from_args(sub_matches);

    if !quiet {
        let trailing_slash = if config.normalize_trailing_slash {
            "on"
        } else {
            "off"
        };
        eprintln!("{} Generating sitemap for {}", "→".blue(), seed.bright_white());
        eprintln!(
            "{} Max URL length: {}  Trailing slash normalization: {}",
            "ℹ".blue(),
            config.max_url_length.to_string().cyan(),
            trailing_slash.cyan()
        );
    }

    let options = GenerateOptions {
        url: seed.clone(),
        config,
        show_progress: !quiet,
    };

    let run = execute_generate(options, None)
        .await
        .map_err(|e| describe_scan_error(&seed, e))?;

    if run.is_seed_only() {
        eprintln!(
            "{} Only the start page was found. The page may have no internal links, \
            render them with JavaScript, or block automated requests.",
            "⚠".yellow().bold()
        );
    }

    let rendered = render_output(&run.entries, format)?;

    match output {
        Some(path) => {
            write_output(&path, &rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            if !quiet {
                let host = run.host().unwrap_or_else(|| run.seed.clone());
                eprintln!(
                    "{} {} URLs for {} written to {}",
                    "✓".green().bold(),
                    run.entries.len().to_string().cyan(),
                    host.bright_white(),
                    path.display().to_string().bright_white()
                );
            }
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
