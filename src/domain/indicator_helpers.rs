//! Shared moving-average and deviation primitives for indicator calculations.
//!
//! All inputs are oldest-first. A `period` of zero or a series shorter than
//! `period` yields `None` or an empty vector.

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Mean of the last `period` prices.
pub fn sma(prices: &[f64], period: usize) -> Option<f64> {
    if period == 0 || prices.len() < period {
        return None;
    }
    Some(mean(&prices[prices.len() - period..]))
}

/// Mean of every window mean across the whole series.
///
/// Equals [`sma`] only when the series holds exactly one window.
pub fn sma_windowed(prices: &[f64], period: usize) -> Option<f64> {
    let windows = sma_list(prices, period);
    if windows.is_empty() {
        return None;
    }
    Some(mean(&windows))
}

/// Mean of `prices[i..i + period]` for every window start `i`.
///
/// Output length is `prices.len() - period + 1`.
pub fn sma_list(prices: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || prices.len() < period {
        return Vec::new();
    }
    prices.windows(period).map(mean).collect()
}

/// EMA seeded with the mean of the first `period` prices.
///
/// k = 2/(n+1), EMA[i] = (P[i] - EMA[i-1]) * k + EMA[i-1].
/// Output length is `prices.len() - period + 1`; the seed is the first value.
pub fn ema(prices: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || prices.len() < period {
        return Vec::new();
    }
    ema_from_seed(prices, period, mean(&prices[..period]))
}

/// EMA with the same recurrence as [`ema`] but anchored on `prices[0]`.
pub fn ema_first_value_seed(prices: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || prices.len() < period {
        return Vec::new();
    }
    ema_from_seed(prices, period, prices[0])
}

fn ema_from_seed(prices: &[f64], period: usize, seed: f64) -> Vec<f64> {
    let k = 2.0 / (period as f64 + 1.0);
    let mut values = Vec::with_capacity(prices.len() - period + 1);
    let mut ema = seed;
    values.push(ema);

    for &price in &prices[period..] {
        ema = (price - ema) * k + ema;
        values.push(ema);
    }

    values
}

/// Population standard deviation of the last `period` prices.
pub fn standard_deviation(prices: &[f64], period: usize) -> Option<f64> {
    if period == 0 || prices.len() < period {
        return None;
    }

    let window = &prices[prices.len() - period..];
    let mean = mean(window);
    let variance = window
        .iter()
        .map(|p| {
            let diff = p - mean;
            diff * diff
        })
        .sum::<f64>()
        / period as f64;

    Some(variance.sqrt())
}

/// Prepends copies of `fill` until `values` reaches `len`.
pub(crate) fn left_pad(values: Vec<f64>, len: usize, fill: f64) -> Vec<f64> {
    if values.len() >= len {
        return values;
    }
    let mut padded = vec![fill; len - values.len()];
    padded.extend(values);
    padded
}
