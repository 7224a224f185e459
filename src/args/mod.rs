//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;


pub use cli::SimulatorArgs;
pub use defaults::{
    DEFAULT_CONCURRENCY, DEFAULT_CONFIG_FILES, DEFAULT_COUNT, DEFAULT_DELAY_SECS,
    DEFAULT_TIMEOUT,
};
pub use parsers::{delay_from_secs, parse_delay_seconds, parse_duration_value};
pub use types::PositiveUsize;
