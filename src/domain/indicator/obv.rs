//! OBV (On-Balance Volume) indicator implementation.

use crate::domain::error::IndicataError;
use crate::domain::indicator::{crossover, last_two};
use crate::domain::indicator_helpers::ema;
use crate::domain::trend::Trend;

pub const DEFAULT_EMA_SHORT: usize = 12;
pub const DEFAULT_EMA_LONG: usize = 24;

/// Calculate OBV over the full series.
///
/// OBV[0] = volume[0]
/// If close[i] > close[i-1]: OBV[i] = OBV[i-1] + volume[i]
/// If close[i] < close[i-1]: OBV[i] = OBV[i-1] - volume[i]
/// If close[i] == close[i-1]: OBV[i] = OBV[i-1]
pub fn on_balance_volume(closes: &[f64], volumes: &[i64]) -> Vec<i64> {
    let n = closes.len().min(volumes.len());
    if n == 0 {
        return Vec::new();
    }

    let mut values = Vec::with_capacity(n);
    let mut obv = volumes[0];
    values.push(obv);

    for i in 1..n {
        obv = accumulate(obv, closes[i] - closes[i - 1], volumes[i]);
        values.push(obv);
    }

    values
}

/// Calculate OBV over the last `period` bars only, starting from zero.
///
/// The first change is still measured against the bar just before the
/// window. Output length is `period + 1`; empty unless there are more than
/// `period` bars.
pub fn on_balance_volume_period(closes: &[f64], volumes: &[i64], period: usize) -> Vec<f64> {
    let n = closes.len().min(volumes.len());
    if period == 0 || n <= period {
        return Vec::new();
    }

    let mut values = Vec::with_capacity(period + 1);
    let mut obv = 0.0;
    values.push(obv);

    for i in n - period..n {
        let change = closes[i] - closes[i - 1];
        if change > 0.0 {
            obv += volumes[i] as f64;
        } else if change < 0.0 {
            obv -= volumes[i] as f64;
        }
        values.push(obv);
    }

    values
}

/// Saturates at the `i64` bounds.
fn accumulate(obv: i64, change: f64, volume: i64) -> i64 {
    if change > 0.0 {
        obv.saturating_add(volume)
    } else if change < 0.0 {
        obv.saturating_sub(volume)
    } else {
        obv
    }
}

/// Three-point run: strictly rising OBV is bullish, strictly falling bearish.
pub fn obv_trend<T: PartialOrd + Copy>(obv: &[T]) -> Result<Trend, IndicataError> {
    IndicataError::require("OBV", 3, obv.len())?;

    let n = obv.len();
    let (first, second, third) = (obv[n - 3], obv[n - 2], obv[n - 1]);

    if first < second && second < third {
        Ok(Trend::Bullish)
    } else if first > second && second > third {
        Ok(Trend::Bearish)
    } else {
        Ok(Trend::None)
    }
}

/// EMA(short) of OBV crossing EMA(long) over their last two points.
pub fn obv_trend_with_ema(
    obv: &[i64],
    short_period: usize,
    long_period: usize,
) -> Result<Trend, IndicataError> {
    let values: Vec<f64> = obv.iter().map(|&v| v as f64).collect();
    let short_ema = ema(&values, short_period);
    let long_ema = ema(&values, long_period);
    IndicataError::require("OBV EMA", 2, short_ema.len())?;
    IndicataError::require("OBV EMA", 2, long_ema.len())?;

    let (prev_short, short) = last_two(&short_ema);
    let (prev_long, long) = last_two(&long_ema);
    Ok(crossover(prev_short, short, prev_long, long))
}
