use colored::Colorize;

pub mod error;
pub mod generate;
pub mod report;
pub mod xml;

pub use error::OutputError;
pub use generate::{GenerateOptions, SitemapRun, execute_generate};
pub use report::{OutputFormat, render_output, write_output};
pub use xml::render_sitemap;

const BANNER: &str = r#"
     _ _                 _ _ _
 ___(_) |_ ___ _ __ ___ (_) | |
/ __| | __/ _ \ '_ ` _ \| | | |
\__ \ | ||  __/ | | | | | | | |
|___/_|\__\___|_| |_| |_|_|_|_|
"#;

pub fn print_banner() {
    eprintln!("{}", BANNER.bright_green().bold());
    eprintln!(
        "  {} {}\n",
        "sitemap generator".bright_white(),
        format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
    );
}
