//! Numeric helpers shared by every analyzer.
//!
//! None of these panic or divide by zero: missing or degenerate input comes
//! back as `None` and callers decide which default to report.

/// Parses scraped counter text such as `"1.2M"`, `"45.6K"` or `"1,234"`.
///
/// Everything except digits, `.` and the `K`/`M`/`B` suffixes is stripped
/// first. Returns `None` when what remains is not a number.
pub fn parse_count(text: &str) -> Option<u64> {
    let cleaned: String = text
        .trim()
        .to_uppercase()
        .chars()
        .filter(|ch| ch.is_ascii_digit() || matches!(ch, '.' | 'K' | 'M' | 'B'))
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    let (multiplier, number) = if cleaned.contains('B') {
        (1_000_000_000.0, cleaned.replace('B', ""))
    } else if cleaned.contains('M') {
        (1_000_000.0, cleaned.replace('M', ""))
    } else if cleaned.contains('K') {
        (1_000.0, cleaned.replace('K', ""))
    } else {
        (1.0, cleaned)
    };

    let value = number.parse::<f64>().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some((value * multiplier).round() as u64)
}

pub fn rate(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 || !denominator.is_finite() {
        return None;
    }
    Some(numerator / denominator)
}

pub fn percentage(numerator: f64, denominator: f64) -> Option<f64> {
    rate(numerator, denominator).map(|value| value * 100.0)
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let mut iter = values.iter().copied();
    let first = iter.next()?;
    Some(iter.fold((first, first), |(min, max), value| {
        (min.min(value), max.max(value))
    }))
}

pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}

pub(crate) fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.max(0.0).min(1.0)
}
