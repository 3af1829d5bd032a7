pub mod commands;
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{
    crawler_config_from_args, expand_output_path, handle_generate, init_logging, parse_seed_line,
    resolve_output_path,
};

// Re-export generation functionality from sitemill-core
pub use sitemill_core::generate::{GenerateOptions, SitemapRun, execute_generate, extract_url_path};
