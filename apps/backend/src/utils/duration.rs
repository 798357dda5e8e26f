//! Human-friendly durations such as `7d`, `1h 30m` or `2 weeks`.
//!
//! A bare number is milliseconds. Fractions are allowed (`1.5h`). Years are
//! 365.25 days.

use lazy_regex::regex;
use time::Duration;

use crate::errors::domain::{DomainError, ValidationKind};

const MS_PER_SECOND: f64 = 1_000.0;
const MS_PER_MINUTE: f64 = 60.0 * MS_PER_SECOND;
const MS_PER_HOUR: f64 = 60.0 * MS_PER_MINUTE;
const MS_PER_DAY: f64 = 24.0 * MS_PER_HOUR;
const MS_PER_WEEK: f64 = 7.0 * MS_PER_DAY;
const MS_PER_YEAR: f64 = 365.25 * MS_PER_DAY;

// Keeps `Duration::seconds_f64` well inside its range.
const MAX_MS: f64 = 1_000.0 * MS_PER_YEAR;

fn unit_ms(unit: &str) -> Option<f64> {
    let ms = match unit.to_ascii_lowercase().as_str() {
        "ms" | "msec" | "msecs" | "millisecond" | "milliseconds" => 1.0,
        "s" | "sec" | "secs" | "second" | "seconds" => MS_PER_SECOND,
        "m" | "min" | "mins" | "minute" | "minutes" => MS_PER_MINUTE,
        "h" | "hr" | "hrs" | "hour" | "hours" => MS_PER_HOUR,
        "d" | "day" | "days" => MS_PER_DAY,
        "w" | "wk" | "wks" | "week" | "weeks" => MS_PER_WEEK,
        "y" | "yr" | "yrs" | "year" | "years" => MS_PER_YEAR,
        _ => return None,
    };
    Some(ms)
}

fn invalid(input: &str) -> DomainError {
    DomainError::validation(
        ValidationKind::InvalidDuration,
        format!("Invalid duration '{input}'. Use values like 30m, 12h, 7d or 2w."),
    )
}

/// Parse `input` into a non-negative duration.
pub fn parse_duration(input: &str) -> Result<Duration, DomainError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(invalid(input));
    }

    let total_ms = if regex!(r"^\d+(\.\d+)?$").is_match(s) {
        s.parse::<f64>().map_err(|_| invalid(input))?
    } else {
        let token = regex!(r"(\d+(?:\.\d+)?)\s*([A-Za-z]+)");
        let mut total = 0.0;
        let mut cursor = 0;
        for caps in token.captures_iter(s) {
            let (Some(whole), Some(value), Some(unit)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                return Err(invalid(input));
            };
            // Only separators may sit between terms.
            if !s[cursor..whole.start()]
                .chars()
                .all(|c| c.is_whitespace() || c == ',')
            {
                return Err(invalid(input));
            }
            let value: f64 = value.as_str().parse().map_err(|_| invalid(input))?;
            let per = unit_ms(unit.as_str()).ok_or_else(|| invalid(input))?;
            total += value * per;
            cursor = whole.end();
        }
        if cursor == 0 || !s[cursor..].trim().is_empty() {
            return Err(invalid(input));
        }
        total
    };

    if !total_ms.is_finite() || total_ms > MAX_MS {
        return Err(invalid(input));
    }
    Ok(Duration::seconds_f64(total_ms / MS_PER_SECOND))
}
