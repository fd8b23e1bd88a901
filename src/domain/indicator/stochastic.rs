//! Stochastic Oscillator.
//!
//! %K[i] = 100 * (C[i] - lowest low over n) / (highest high over n - lowest low over n)
//! %D = SMA list of %K over d periods
//!
//! A close series shorter than the highs is left-padded with zeros so index i
//! of every series refers to the same bar. A longer one is cut to its last
//! `highs.len()` closes. A window with high == low divides
//! by zero and yields NaN or infinity.

use crate::domain::error::IndicataError;
use crate::domain::indicator::{OscillatorResult, crossover, last_two};
use crate::domain::indicator_helpers::{left_pad, sma_list};
use crate::domain::trend::Trend;

pub const DEFAULT_PERIOD: usize = 14;
pub const DEFAULT_PERIOD_D: usize = 3;

pub fn stochastic_oscillator(
    closes: &[f64],
    highs: &[f64],
    lows: &[f64],
    period: usize,
    period_d: usize,
) -> OscillatorResult {
    let tail = &closes[closes.len().saturating_sub(highs.len())..];
    let full_closes = left_pad(tail.to_vec(), highs.len(), 0.0);
    let n = full_closes.len().min(highs.len()).min(lows.len());
    if period == 0 || n < period {
        return OscillatorResult::default();
    }

    let k: Vec<f64> = (period - 1..n)
        .map(|i| {
            let start = i + 1 - period;
            let low = lows[start..=i].iter().copied().fold(f64::INFINITY, f64::min);
            let high = highs[start..=i]
                .iter()
                .copied()
                .fold(f64::NEG_INFINITY, f64::max);
            100.0 * ((full_closes[i] - low) / (high - low))
        })
        .collect();

    let d = sma_list(&k, period_d);
    OscillatorResult { k, d }
}

/// %K crossing %D over the last two points of each.
pub fn stochastic_signal(result: &OscillatorResult) -> Result<Trend, IndicataError> {
    IndicataError::require("Stochastic", 2, result.k.len())?;
    IndicataError::require("Stochastic", 2, result.d.len())?;

    let (prev_k, k) = last_two(&result.k);
    let (prev_d, d) = last_two(&result.d);
    Ok(crossover(prev_k, k, prev_d, d))
}
