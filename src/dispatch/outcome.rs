use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TransportError;
use crate::profiles::{BotCategory, BotProfile};

/// Status recorded when no HTTP response was received.
pub const NO_RESPONSE_STATUS: u16 = 0;

/// The recorded result of one dispatched request.
///
/// Built only through [`RequestOutcome::succeeded`] or
/// [`RequestOutcome::failed`], so exactly one of `elapsed_ms` and `error` is
/// set and `success` agrees with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestOutcome {
    pub request_id: usize,
    pub timestamp: DateTime<Utc>,
    pub url: String,
    pub category: BotCategory,
    /// Display form of the User-Agent (see [`crate::profiles::display_user_agent`]).
    pub user_agent: String,
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elapsed_ms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub success: bool,
}

impl RequestOutcome {
    #[must_use]
    pub fn succeeded(
        request_id: usize,
        url: String,
        profile: &BotProfile,
        status: u16,
        elapsed: Duration,
    ) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
            url,
            category: profile.category(),
            user_agent: profile.display_user_agent(),
            status,
            elapsed_ms: Some(round_millis(elapsed)),
            error: None,
            success: true,
        }
    }

    #[must_use]
    pub fn failed(
        request_id: usize,
        url: String,
        profile: &BotProfile,
        error: &TransportError,
    ) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
            url,
            category: profile.category(),
            user_agent: profile.display_user_agent(),
            status: NO_RESPONSE_STATUS,
            elapsed_ms: None,
            error: Some(error.describe()),
            success: false,
        }
    }
}

/// Milliseconds rounded half-up to two decimal places.
#[expect(
    clippy::float_arithmetic,
    reason = "Latency is reported as fractional milliseconds."
)]
pub(crate) fn round_millis(elapsed: Duration) -> f64 {
    let hundredths = elapsed
        .as_micros()
        .saturating_add(5)
        .checked_div(10)
        .unwrap_or(0);
    let hundredths = u64::try_from(hundredths).unwrap_or(u64::MAX);
    hundredths as f64 / 100.0
}
