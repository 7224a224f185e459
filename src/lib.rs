//! Core library for the `botsim` CLI.
//!
//! `botsim` sends HTTP GET requests to a target while impersonating known
//! crawlers, scrapers, HTTP libraries, AI bots, and malicious clients, then
//! reports how the target answered each identity. The building blocks are
//! the profile catalog, a bounded-concurrency dispatcher, and reporting.
pub mod args;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod profiles;
pub mod report;
pub mod shutdown;
