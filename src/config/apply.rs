use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{PositiveUsize, SimulatorArgs, delay_from_secs};
use crate::error::ConfigError;

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments that were not given on the
/// command line.
///
/// # Errors
///
/// Returns an error when a config value is out of range.
pub fn apply_config(
    args: &mut SimulatorArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> Result<(), ConfigError> {
    if !is_cli(matches, "url")
        && let Some(url) = config.url.clone()
    {
        args.url = Some(url);
    }

    if !is_cli(matches, "count")
        && let Some(count) = config.count
    {
        args.count = count;
    }

    if !is_cli(matches, "categories")
        && let Some(categories) = config.categories.clone()
    {
        args.categories = categories;
    }

    if !is_cli(matches, "concurrency")
        && let Some(concurrency) = config.concurrency
    {
        args.concurrency = ensure_positive_usize(concurrency, "concurrency")?;
    }

    if !is_cli(matches, "delay")
        && let Some(delay) = config.delay
    {
        args.delay =
            delay_from_secs(delay).map_err(|err| ConfigError::InvalidDelay { source: err })?;
    }

    if !is_cli(matches, "request_timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.request_timeout = timeout
            .to_duration()
            .map_err(|err| ConfigError::InvalidTimeout { source: err })?;
    }

    if !is_cli(matches, "seed")
        && let Some(seed) = config.seed
    {
        args.seed = Some(seed);
    }

    if !is_cli(matches, "insecure")
        && let Some(insecure) = config.insecure
    {
        args.insecure = insecure;
    }

    if !is_cli(matches, "output")
        && let Some(output) = config.output.clone()
    {
        args.output = Some(output);
    }

    if !is_cli(matches, "verbose")
        && let Some(verbose) = config.verbose
    {
        args.verbose = verbose;
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn ensure_positive_usize(value: usize, field: &'static str) -> Result<PositiveUsize, ConfigError> {
    PositiveUsize::try_from(value)
        .map_err(|err| ConfigError::FieldMustBePositive { field, source: err })
}
