use std::num::NonZeroUsize;

/// Trailing simple moving average over every full window of `values`.
///
/// The result holds `values.len() - window + 1` points (none when the series
/// is shorter than the window), each rounded to two decimal places.
pub fn moving_average(values: &[f64], window: NonZeroUsize) -> Vec<f64> {
    let span = window.get();
    values
        .windows(span)
        .map(|slice| round_to_cents(slice.iter().sum::<f64>() / span as f64))
        .collect()
}

pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Renders an average for a worksheet cell: `1.2`, `50.5`, and `3.0` for whole values.
pub fn format_average(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
