mod app;
mod config;
mod dispatch;
mod report;
mod transport;
mod validation;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use dispatch::DispatchError;
pub use report::ReportError;
pub use transport::TransportError;
pub use validation::ValidationError;
