//! MACD (Moving Average Convergence Divergence).
//!
//! MACD Line = EMA(short) - EMA(long)
//! Signal Line = EMA(signal) of MACD Line
//! Histogram = MACD Line - Signal Line
//!
//! EMA(long) starts later than EMA(short), so it is left-padded with the
//! SMA(long) of the prices until both have the same length. The signal line
//! is left-padded the same way with SMA(signal) of the MACD line. All three
//! outputs therefore have length `prices.len() - short + 1`.

use crate::domain::error::IndicataError;
use crate::domain::indicator::{MacdResult, crossover, last_two};
use crate::domain::indicator_helpers::{ema, left_pad, sma};
use crate::domain::trend::Trend;

pub const DEFAULT_SHORT: usize = 12;
pub const DEFAULT_LONG: usize = 26;
pub const DEFAULT_SIGNAL: usize = 9;

/// Empty when `prices` is shorter than either period.
pub fn macd_line(prices: &[f64], short_period: usize, long_period: usize) -> Vec<f64> {
    let short_ema = ema(prices, short_period);
    let long_ema = ema(prices, long_period);
    if short_ema.is_empty() || long_ema.is_empty() {
        return Vec::new();
    }

    // The later-starting EMA is the one with fewer values.
    let len = short_ema.len().max(long_ema.len());
    let short_ema = match sma(prices, short_period) {
        Some(fill) => left_pad(short_ema, len, fill),
        None => short_ema,
    };
    let long_ema = match sma(prices, long_period) {
        Some(fill) => left_pad(long_ema, len, fill),
        None => long_ema,
    };

    short_ema
        .iter()
        .zip(&long_ema)
        .map(|(short, long)| short - long)
        .collect()
}

fn signal_from_line(line: &[f64], signal_period: usize) -> Vec<f64> {
    let signal = ema(line, signal_period);
    match sma(line, signal_period) {
        Some(fill) if !signal.is_empty() => left_pad(signal, line.len(), fill),
        _ => Vec::new(),
    }
}

pub fn macd_signal_line(
    prices: &[f64],
    short_period: usize,
    long_period: usize,
    signal_period: usize,
) -> Vec<f64> {
    macd(prices, short_period, long_period, signal_period).signal
}

pub fn macd_histogram(
    prices: &[f64],
    short_period: usize,
    long_period: usize,
    signal_period: usize,
) -> Vec<f64> {
    macd(prices, short_period, long_period, signal_period).histogram
}

/// Line, signal and histogram in one pass.
///
/// All three are empty when the line is too short to seed the signal EMA.
pub fn macd(
    prices: &[f64],
    short_period: usize,
    long_period: usize,
    signal_period: usize,
) -> MacdResult {
    let line = macd_line(prices, short_period, long_period);
    let signal = signal_from_line(&line, signal_period);
    if signal.is_empty() {
        return MacdResult::default();
    }

    let histogram = line.iter().zip(&signal).map(|(l, s)| l - s).collect();

    MacdResult {
        line,
        signal,
        histogram,
    }
}

/// MACD line crossing its signal line over the last two points.
pub fn macd_signal(result: &MacdResult) -> Result<Trend, IndicataError> {
    IndicataError::require("MACD", 2, result.line.len())?;
    IndicataError::require("MACD", 2, result.signal.len())?;

    let (prev_line, line) = last_two(&result.line);
    let (prev_signal, signal) = last_two(&result.signal);
    Ok(crossover(prev_line, line, prev_signal, signal))
}
