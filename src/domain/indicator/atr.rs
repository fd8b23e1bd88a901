//! True Range and Average True Range.
//!
//! TR[0] = high[0] - low[0]
//! TR[i] = max(high[i] - low[i], |high[i] - close[i-1]|, |low[i] - close[i-1]|)
//! ATR seed = mean of the first n TR values, then Wilder smoothing:
//! ATR[i] = (ATR[i-1] * (n-1) + TR[i]) / n

use crate::domain::error::IndicataError;
use crate::domain::trend::Trend;

/// max(high - low, |high - prev_close|, |low - prev_close|)
pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    let hl = high - low;
    let hc = (high - prev_close).abs();
    let lc = (low - prev_close).abs();
    hl.max(hc).max(lc)
}

/// True range for every bar; the first bar has no previous close.
pub fn true_range_series(highs: &[f64], lows: &[f64], closes: &[f64]) -> Vec<f64> {
    let n = highs.len().min(lows.len()).min(closes.len());

    (0..n)
        .map(|i| {
            if i == 0 {
                highs[0] - lows[0]
            } else {
                true_range(highs[i], lows[i], closes[i - 1])
            }
        })
        .collect()
}

/// Wilder-smoothed ATR. Output length is `bars - period + 1`.
pub fn average_true_range(highs: &[f64], lows: &[f64], closes: &[f64], period: usize) -> Vec<f64> {
    let tr_values = true_range_series(highs, lows, closes);
    if period == 0 || tr_values.len() < period {
        return Vec::new();
    }

    let n = period as f64;
    let mut atr = tr_values[..period].iter().sum::<f64>() / n;
    let mut values = Vec::with_capacity(tr_values.len() - period + 1);
    values.push(atr);

    for &tr in &tr_values[period..] {
        atr = (atr * (n - 1.0) + tr) / n;
        values.push(atr);
    }

    values
}

/// Volatility breakout against the latest ATR.
///
/// Bullish when `close > high + multiplier * atr`, bearish when
/// `close < low - multiplier * atr`. `high` and `low` are the reference bar's
/// range the close is measured against.
pub fn atr_breakout_signal(
    atr: &[f64],
    multiplier: f64,
    close: f64,
    high: f64,
    low: f64,
) -> Result<Trend, IndicataError> {
    IndicataError::require("ATR", 1, atr.len())?;

    let band = multiplier * atr[atr.len() - 1];
    let upper = high + band;
    let lower = low - band;

    if close > upper {
        Ok(Trend::Bullish)
    } else if close < lower {
        Ok(Trend::Bearish)
    } else {
        Ok(Trend::None)
    }
}
