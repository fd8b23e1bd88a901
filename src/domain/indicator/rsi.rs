//! RSI (Relative Strength Index).
//!
//! Each close-to-close change contributes a gain or a loss (the other side
//! gets zero). From bar n onward the averages are the mean of *every* change
//! seen so far, so the averaging window grows by one each bar. Running sums
//! keep that O(1) per bar.
//!
//! Formula: RSI = 100 - (100 / (1 + avg_gain / avg_loss))
//!
//! avg_loss == 0 is not special-cased: all gains gives 100 through an infinite
//! ratio, and a flat series gives NaN.
//!
//! Output length: closes.len() - n.

use crate::domain::error::IndicataError;
use crate::domain::trend::Trend;

pub const DEFAULT_PERIOD: usize = 14;
pub const OVERSOLD: f64 = 30.0;
pub const OVERBOUGHT: f64 = 70.0;

pub fn relative_strength_index(closes: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || closes.len() <= period {
        return Vec::new();
    }

    let mut values = Vec::with_capacity(closes.len() - period);
    let mut gain_sum = 0.0;
    let mut loss_sum = 0.0;
    let mut changes = 0usize;

    for i in 1..closes.len() {
        let change = closes[i] - closes[i - 1];
        if change > 0.0 {
            gain_sum += change;
        } else if change < 0.0 {
            loss_sum -= change;
        }
        changes += 1;

        if i >= period {
            let avg_gain = gain_sum / changes as f64;
            let avg_loss = loss_sum / changes as f64;
            let rs = avg_gain / avg_loss;
            values.push(100.0 - (100.0 / (1.0 + rs)));
        }
    }

    values
}

/// Level crossover between `rsi[n-1-lookback]` and the latest value, using
/// the 30/70 levels.
pub fn rsi_signal(rsi: &[f64], lookback: usize) -> Result<Trend, IndicataError> {
    rsi_signal_with_levels(rsi, lookback, OVERSOLD, OVERBOUGHT)
}

/// Bullish when RSI climbs out of oversold, bearish when it drops out of
/// overbought. A `lookback` of zero is treated as one.
pub fn rsi_signal_with_levels(
    rsi: &[f64],
    lookback: usize,
    oversold: f64,
    overbought: f64,
) -> Result<Trend, IndicataError> {
    let lookback = lookback.max(1);
    IndicataError::require("RSI", lookback.saturating_add(1), rsi.len())?;

    let current = rsi[rsi.len() - 1];
    let earlier = rsi[rsi.len() - 1 - lookback];

    if earlier < oversold && current > oversold {
        Ok(Trend::Bullish)
    } else if earlier > overbought && current < overbought {
        Ok(Trend::Bearish)
    } else {
        Ok(Trend::None)
    }
}
