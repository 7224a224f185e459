use std::time::Duration;

use super::types::PositiveUsize;
use crate::error::ValidationError;

pub(super) fn parse_positive_usize(s: &str) -> Result<PositiveUsize, ValidationError> {
    s.parse::<PositiveUsize>()
}

/// Parses a pause given in (fractional) seconds, e.g. `0.1` or `2`.
///
/// # Errors
///
/// Returns an error for non-numeric, negative, or non-finite values.
pub fn parse_delay_seconds(s: &str) -> Result<Duration, ValidationError> {
    let value = s.trim();
    let seconds: f64 = value
        .parse()
        .map_err(|err| ValidationError::InvalidDelayNumber {
            value: value.to_owned(),
            source: err,
        })?;
    delay_from_secs(seconds).map_err(|_err| ValidationError::InvalidDelay {
        value: value.to_owned(),
    })
}

/// Converts a pause in seconds into a [`Duration`].
///
/// # Errors
///
/// Returns an error for negative or non-finite values.
pub fn delay_from_secs(seconds: f64) -> Result<Duration, ValidationError> {
    if seconds < 0.0 {
        return Err(ValidationError::InvalidDelay {
            value: seconds.to_string(),
        });
    }
    Duration::try_from_secs_f64(seconds).map_err(|_err| ValidationError::InvalidDelay {
        value: seconds.to_string(),
    })
}

pub(super) fn parse_duration_arg(s: &str) -> Result<Duration, ValidationError> {
    parse_duration_value(s)
}

/// Parses a duration such as `500ms`, `10s`, `2m` or `1h`; a bare number
/// means seconds.
///
/// # Errors
///
/// Returns an error for malformed, zero, or overflowing durations.
pub fn parse_duration_value(value: &str) -> Result<Duration, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::DurationEmpty);
    }

    let digits_len = value
        .chars()
        .take_while(char::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return Err(ValidationError::InvalidDurationFormat {
            value: value.to_owned(),
        });
    }
    let (num_part, unit_part) = value.split_at(digits_len);
    let number: u64 = num_part
        .parse()
        .map_err(|err| ValidationError::InvalidDurationNumber {
            value: value.to_owned(),
            source: err,
        })?;

    let unit = if unit_part.is_empty() { "s" } else { unit_part };
    let duration = match unit {
        "ms" => Duration::from_millis(number),
        "s" => Duration::from_secs(number),
        "m" => {
            let secs = number
                .checked_mul(60)
                .ok_or(ValidationError::DurationOverflow)?;
            Duration::from_secs(secs)
        }
        "h" => {
            let secs = number
                .checked_mul(60)
                .and_then(|seconds| seconds.checked_mul(60))
                .ok_or(ValidationError::DurationOverflow)?;
            Duration::from_secs(secs)
        }
        _ => {
            return Err(ValidationError::InvalidDurationUnit {
                unit: unit.to_owned(),
            });
        }
    };

    if duration.is_zero() {
        return Err(ValidationError::DurationZero);
    }

    Ok(duration)
}
