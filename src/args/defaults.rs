/// Requests sent when `--count` is not given.
pub const DEFAULT_COUNT: usize = 50;
/// Simultaneous in-flight requests when `--concurrency` is not given.
pub const DEFAULT_CONCURRENCY: &str = "10";
/// Base pause after each request, in seconds.
pub const DEFAULT_DELAY_SECS: &str = "0.1";
pub const DEFAULT_TIMEOUT: &str = "10s";
/// Config filenames checked in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILES: [&str; 2] = ["botsim.toml", "botsim.json"];
