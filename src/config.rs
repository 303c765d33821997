//! Command-line surface and the run configuration derived from it.

use crate::splice::Markers;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;
use std::time::Duration;

/// Where the API description is published.
pub const DEFAULT_SOURCE: &str = "https://api.example.com/openapi.json";
/// Documentation page rewritten in place.
pub const DEFAULT_TARGET: &str = "docs/index.html";
/// Base URL for example requests when the description declares no server.
pub const DEFAULT_FALLBACK_BASE_URL: &str = "https://api.example.com";

#[derive(Parser, Debug)]
#[command(
    name = "apiref",
    about = "Regenerate the API reference section of a static documentation page"
)]
pub struct Cli {
    /// API description location: http(s) URL, file:// URL or local path
    #[arg(short, long, env = "APIREF_SOURCE", default_value = DEFAULT_SOURCE)]
    pub source: String,

    /// HTML document containing the reference and sidebar markers
    #[arg(short, long, env = "APIREF_TARGET", default_value = DEFAULT_TARGET)]
    pub target: PathBuf,

    /// Fetch timeout in seconds
    #[arg(long, env = "APIREF_TIMEOUT", default_value_t = 30)]
    pub timeout: u64,

    /// Base URL used in example requests when the description declares no server
    #[arg(long, default_value = DEFAULT_FALLBACK_BASE_URL)]
    pub fallback_base_url: String,

    /// Print the regenerated document to stdout instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Logging verbosity [OFF, ERROR, WARN, INFO, DEBUG, TRACE]
    #[arg(short, long, default_value_t = LevelFilter::Info)]
    pub verbosity: LevelFilter,
}

/// Everything a regeneration run needs. Built once from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub source: String,
    pub target: PathBuf,
    pub timeout: Duration,
    pub fallback_base_url: String,
    pub markers: Markers,
    pub dry_run: bool,
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self {
            source: cli.source.clone(),
            target: cli.target.clone(),
            timeout: Duration::from_secs(cli.timeout),
            fallback_base_url: cli.fallback_base_url.clone(),
            markers: Markers::default(),
            dry_run: cli.dry_run,
        }
    }
}
