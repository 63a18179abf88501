//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;
use std::fmt::Display;

/// Convert a draw count into whole elapsed years, truncating toward zero.
///
/// Returns 0 when `weeks_per_year` is not a positive finite number.
#[must_use]
pub fn years_elapsed(rounds: u64, weeks_per_year: f64) -> u64 {
    if !weeks_per_year.is_finite() || weeks_per_year <= 0.0 {
        return 0;
    }
    let years = (u64_to_f64(rounds) / weeks_per_year).floor();
    cast::<f64, u64>(years).unwrap_or(0)
}

/// Map a unit-interval sample onto an index in `0..span`.
///
/// The result is clamped to `span - 1` so a sample that rounds up to 1.0
/// can never escape the range.
#[must_use]
pub fn scaled_index(unit: f64, span: usize) -> usize {
    if span == 0 || !unit.is_finite() || unit <= 0.0 {
        return 0;
    }
    let scaled = (unit * usize_to_f64(span)).floor();
    cast::<f64, usize>(scaled).unwrap_or(0).min(span - 1)
}

/// Render values as strings left-padded to a common width.
///
/// The width is that of the longest rendered value, or `min_width` when that
/// is larger; `[5, 123]` padded with `'0'` at minimum 2 becomes `["005", "123"]`.
#[must_use]
pub fn pad_tokens<T: Display>(values: &[T], pad: char, min_width: usize) -> Vec<String> {
    let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
    let width = rendered
        .iter()
        .map(|token| token.chars().count())
        .max()
        .unwrap_or(0)
        .max(min_width);
    rendered
        .into_iter()
        .map(|token| {
            let fill = width - token.chars().count();
            let mut padded = String::with_capacity(width);
            padded.extend(std::iter::repeat_n(pad, fill));
            padded.push_str(&token);
            padded
        })
        .collect()
}

/// Convert u64 to f64 while allowing precision loss in a single location.
#[must_use]
pub fn u64_to_f64(value: u64) -> f64 {
    cast::<u64, f64>(value).unwrap_or(0.0)
}

/// Convert usize to f64 while allowing precision loss in a single location.
#[must_use]
pub fn usize_to_f64(value: usize) -> f64 {
    cast::<usize, f64>(value).unwrap_or(0.0)
}
