// Allow common clippy pedantic lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unused_async)]

//! playlist-harvest CLI
//!
//! Command-line interface for harvesting video ids and metadata

use clap::Parser;
use playlist_harvest::cli::{Cli, Runner};
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` when it parses, otherwise info (debug with `-v`)
fn log_filter(rust_log: Option<&str>, verbose: bool) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(if verbose { "debug" } else { "info" }))
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so records on stdout stay clean
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(rust_log.as_deref(), cli.verbose))
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_rust_log_sets_global_level() {
        let filter = log_filter(Some("warn"), false);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));

        let filter = log_filter(Some("error"), true);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn test_default_level_follows_verbose() {
        assert_eq!(log_filter(None, false).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(log_filter(None, true).max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_unparseable_rust_log_falls_back() {
        let filter = log_filter(Some("playlist_harvest=loud"), false);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }
}
