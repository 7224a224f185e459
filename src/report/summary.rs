use std::collections::BTreeMap;

use crate::dispatch::RequestOutcome;

/// Counts and averages over a finished run.
///
/// `by_category` and `by_status` each account for every outcome exactly once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    pub by_category: BTreeMap<&'static str, usize>,
    pub by_status: BTreeMap<u16, usize>,
    /// Mean latency of outcomes that received a response; `None` without any.
    pub avg_latency_ms: Option<f64>,
}

impl RunSummary {
    #[must_use]
    pub fn from_outcomes(outcomes: &[RequestOutcome]) -> Self {
        let mut summary = RunSummary {
            total: outcomes.len(),
            ..RunSummary::default()
        };
        let mut latencies = Vec::with_capacity(outcomes.len());

        for outcome in outcomes {
            if outcome.success {
                summary.successful = summary.successful.saturating_add(1);
                if let Some(elapsed_ms) = outcome.elapsed_ms {
                    latencies.push(elapsed_ms);
                }
            } else {
                summary.failed = summary.failed.saturating_add(1);
            }
            let by_category = summary
                .by_category
                .entry(outcome.category.as_str())
                .or_insert(0);
            *by_category = by_category.saturating_add(1);
            let by_status = summary.by_status.entry(outcome.status).or_insert(0);
            *by_status = by_status.saturating_add(1);
        }

        summary.avg_latency_ms = mean(&latencies);
        summary
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "Average latency is reported as fractional milliseconds."
)]
fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let total: f64 = values.iter().sum();
    Some(total / values.len() as f64)
}
