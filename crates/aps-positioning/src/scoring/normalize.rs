//! Conversions from questionnaire brackets to normalized contributions.

use crate::survey::{InputError, WeeklyDuration};

/// Linear clamp-and-normalize of `value` onto `[0, 1]`.
///
/// A degenerate range (`min == max`) acts as a step at `max`.
pub fn scale(value: f64, min: f64, max: f64) -> f64 {
    if value >= max {
        return 1.0;
    }
    if value <= min {
        return 0.0;
    }
    (value - min) / (max - min)
}

/// Parses a strict `"NN-MM%"` bracket label into its integer bounds.
pub fn bracket_bounds(label: &str) -> Result<(u32, u32), InputError> {
    let malformed = |reason| InputError::MalformedBracket {
        label: label.to_string(),
        reason,
    };

    let range = label
        .strip_suffix('%')
        .ok_or_else(|| malformed("expected a trailing '%'"))?;
    let (lower, upper) = range
        .split_once('-')
        .ok_or_else(|| malformed("expected two bounds separated by '-'"))?;

    let lower = parse_bound(lower).ok_or_else(|| malformed("lower bound is not a percentage"))?;
    let upper = parse_bound(upper).ok_or_else(|| malformed("upper bound is not a percentage"))?;

    if lower >= upper {
        return Err(malformed("lower bound must be below upper bound"));
    }

    Ok((lower, upper))
}

fn parse_bound(raw: &str) -> Option<u32> {
    if raw.is_empty() || raw.len() > 3 || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u32>().ok().filter(|value| *value <= 100)
}

/// Midpoint of a percentage bracket as a fraction: `"30-40%"` -> `0.35`.
pub fn bracket_midpoint(label: &str) -> Result<f64, InputError> {
    let (lower, upper) = bracket_bounds(label)?;
    Ok(percent_midpoint(lower, upper))
}

pub(crate) fn percent_midpoint(lower: u32, upper: u32) -> f64 {
    (f64::from(lower) + f64::from(upper)) / 200.0
}

/// Weekly minutes for a duration label; unknown labels contribute nothing.
pub fn duration_minutes(label: &str) -> u32 {
    WeeklyDuration::from_label(label)
        .map(WeeklyDuration::minutes)
        .unwrap_or(0)
}

pub(crate) fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
