use clap::{arg, command};

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("sitemill")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("sitemill")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .arg(
            arg!(-v --"verbose" "Increase log output (-v info, -vv debug)")
                .required(false)
                .action(clap::ArgAction::Count),
        )
        .subcommand_required(false)
        .subcommand(
            command!("generate")
                .about(
                    "Fetch a single page and build a sitemap from the same-origin links found \
                on it.",
                )
                .arg(
                    arg!(<URL>)
                        .help("The page to start from. https:// is assumed when no scheme is given"),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help(
                            "Write the sitemap to a file, or to sitemap.<ext> inside a \
                        directory (default: print to stdout)",
                        ),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Output format: xml, json, text")
                        .value_parser(["xml", "json", "text"])
                        .default_value("xml"),
                )
                .arg(
                    arg!(--"max-url-length" <CHARS>)
                        .required(false)
                        .help("Discard discovered URLs longer than this (default: 200)")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--"normalize-trailing-slash")
                        .required(false)
                        .help("Treat /about and /about/ as the same page")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    arg!(--"root-slash-as-origin")
                        .required(false)
                        .help("Score a link to https://host/ like the start page (1.0, daily)")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    arg!(--"user-agent" <USER_AGENT>)
                        .required(false)
                        .help("User-Agent header sent with the request"),
                )
                .arg(
                    arg!(--"timeout" <SECONDS>)
                        .required(false)
                        .help("Request timeout in seconds (default: wait indefinitely)")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
}
