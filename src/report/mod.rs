//! Aggregation and presentation of dispatch outcomes.
mod console;
mod output;
mod summary;


pub use console::{outcome_lines, print_outcomes, print_summary, status_name, summary_lines};
pub use output::write_json;
pub use summary::RunSummary;
