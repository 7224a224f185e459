use clap::Parser;
use std::time::Duration;

use crate::profiles::BotCategory;

use super::defaults::{DEFAULT_CONCURRENCY, DEFAULT_COUNT, DEFAULT_DELAY_SECS, DEFAULT_TIMEOUT};
use super::parsers::{parse_delay_seconds, parse_duration_arg, parse_positive_usize};
use super::types::PositiveUsize;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Simulate bot traffic against a web server by replaying real-world crawler, scraper, and tool User-Agents."
)]
pub struct SimulatorArgs {
    /// Target base URL (e.g., http://localhost:8080)
    #[arg(long, short)]
    pub url: Option<String>,

    /// Number of requests to send
    #[arg(long, short = 'n', default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Bot categories to sample User-Agents from
    #[arg(
        long,
        short,
        value_enum,
        num_args = 1..,
        default_values_t = BotCategory::ALL.to_vec()
    )]
    pub categories: Vec<BotCategory>,

    /// Maximum number of requests in flight at once
    #[arg(long, default_value = DEFAULT_CONCURRENCY, value_parser = parse_positive_usize)]
    pub concurrency: PositiveUsize,

    /// Base pause after each request in seconds; up to 50% random jitter is added
    #[arg(long, short, default_value = DEFAULT_DELAY_SECS, value_parser = parse_delay_seconds)]
    pub delay: Duration,

    /// Per-request timeout (supports ms/s/m/h)
    #[arg(long = "timeout", default_value = DEFAULT_TIMEOUT, value_parser = parse_duration_arg)]
    pub request_timeout: Duration,

    /// Seed for reproducible profile and path selection
    #[arg(long)]
    pub seed: Option<u64>,

    /// Skip TLS certificate and hostname verification
    #[arg(long)]
    pub insecure: bool,

    /// Write every request outcome to this JSON file
    #[arg(long, short)]
    pub output: Option<String>,

    /// Print one line per request after the run
    #[arg(long, short)]
    pub verbose: bool,

    /// Path to a TOML or JSON config file (defaults to ./botsim.toml or ./botsim.json)
    #[arg(long)]
    pub config: Option<String>,

    /// List the available bot categories with sample User-Agents and exit
    #[arg(long = "list-categories")]
    pub list_categories: bool,
}
