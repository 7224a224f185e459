use crate::dispatch::RequestOutcome;

use super::RunSummary;

const RULE_WIDTH: usize = 60;

/// Human-readable label for the status codes a bot-control layer typically
/// answers with; other codes are shown as themselves.
#[must_use]
pub fn status_name(status: u16) -> String {
    match status {
        200 => "OK".to_owned(),
        403 => "Forbidden".to_owned(),
        404 => "Not Found".to_owned(),
        0 => "Error".to_owned(),
        other => other.to_string(),
    }
}

#[must_use]
pub fn summary_lines(summary: &RunSummary) -> Vec<String> {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = vec![
        String::new(),
        rule.clone(),
        "BOT SIMULATION SUMMARY".to_owned(),
        rule.clone(),
        String::new(),
        format!("Total Requests: {}", summary.total),
        format!("Successful: {}", summary.successful),
        format!("Failed: {}", summary.failed),
        String::new(),
        "Requests by Category:".to_owned(),
    ];
    for (category, count) in &summary.by_category {
        lines.push(format!("  {}: {}", category, count));
    }

    lines.push(String::new());
    lines.push("Requests by Status Code:".to_owned());
    for (status, count) in &summary.by_status {
        lines.push(format!("  {} ({}): {}", status, status_name(*status), count));
    }

    if let Some(avg) = summary.avg_latency_ms {
        lines.push(String::new());
        lines.push(format!("Average Response Time: {:.2}ms", avg));
    }

    lines.push(String::new());
    lines.push(rule);
    lines
}

pub fn print_summary(summary: &RunSummary) {
    for line in summary_lines(summary) {
        println!("{}", line);
    }
}

/// One line per outcome, e.g. `✗ [malicious] 0 - sqlmap/1.7`.
#[must_use]
pub fn outcome_lines(outcomes: &[RequestOutcome]) -> Vec<String> {
    outcomes
        .iter()
        .map(|outcome| {
            let mark = if outcome.success { '✓' } else { '✗' };
            format!(
                "{} [{}] {} - {}",
                mark, outcome.category, outcome.status, outcome.user_agent
            )
        })
        .collect()
}

pub fn print_outcomes(outcomes: &[RequestOutcome]) {
    for line in outcome_lines(outcomes) {
        println!("{}", line);
    }
}
