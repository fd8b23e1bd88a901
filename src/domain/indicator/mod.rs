//! Technical indicator implementations.
//!
//! Every indicator is a free function over oldest-first slices that returns a
//! freshly allocated series. Each family module also carries its trend
//! classifier. This module defines the shared output shapes:
//! - `Bands`: lower/middle/upper series of equal length
//! - `MacdResult`: line/signal/histogram series of equal length
//! - `OscillatorResult`: %K and its %D smoothing
//! - `IndicatorType`: indicator identity + parameters, used in errors and logs

pub mod atr;
pub mod bollinger;
pub mod macd;
pub mod obv;
pub mod rsi;
pub mod stochastic;

pub use atr::{atr_breakout_signal, average_true_range, true_range, true_range_series};
pub use bollinger::{MiddleBand, bandwidth, bollinger_bands, bollinger_signal};
pub use macd::{macd, macd_histogram, macd_line, macd_signal, macd_signal_line};
pub use obv::{obv_trend, obv_trend_with_ema, on_balance_volume, on_balance_volume_period};
pub use rsi::{relative_strength_index, rsi_signal, rsi_signal_with_levels};
pub use stochastic::{stochastic_oscillator, stochastic_signal};

use crate::domain::trend::Trend;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bands {
    pub lower: Vec<f64>,
    pub middle: Vec<f64>,
    pub upper: Vec<f64>,
}

impl Bands {
    pub fn len(&self) -> usize {
        self.middle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.middle.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MacdResult {
    pub line: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

impl MacdResult {
    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OscillatorResult {
    pub k: Vec<f64>,
    pub d: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IndicatorType {
    Sma(usize),
    Ema(usize),
    StdDev(usize),
    Atr(usize),
    Bollinger {
        period: usize,
        width_x100: u32,
    },
    Rsi(usize),
    Macd {
        short: usize,
        long: usize,
        signal: usize,
    },
    Stochastic {
        k_period: usize,
        d_period: usize,
    },
    Obv,
    ObvEma {
        short: usize,
        long: usize,
    },
}

impl IndicatorType {
    pub fn bollinger(period: usize, width: f64) -> Self {
        IndicatorType::Bollinger {
            period,
            width_x100: (width * 100.0).round() as u32,
        }
    }
}

impl fmt::Display for IndicatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorType::Sma(period) => write!(f, "SMA({})", period),
            IndicatorType::Ema(period) => write!(f, "EMA({})", period),
            IndicatorType::StdDev(period) => write!(f, "STDDEV({})", period),
            IndicatorType::Atr(period) => write!(f, "ATR({})", period),
            IndicatorType::Bollinger { period, width_x100 } => {
                let width = *width_x100 as f64 / 100.0;
                write!(f, "BOLLINGER({},{})", period, width)
            }
            IndicatorType::Rsi(period) => write!(f, "RSI({})", period),
            IndicatorType::Macd {
                short,
                long,
                signal,
            } => write!(f, "MACD({},{},{})", short, long, signal),
            IndicatorType::Stochastic { k_period, d_period } => {
                write!(f, "STOCHASTIC({},{})", k_period, d_period)
            }
            IndicatorType::Obv => write!(f, "OBV"),
            IndicatorType::ObvEma { short, long } => write!(f, "OBV_EMA({},{})", short, long),
        }
    }
}

/// Classifies a two-point crossover of `a` against `b`.
///
/// Bullish when `a` moves from below `b` to above it, bearish for the reverse.
/// Touching without crossing is not a crossover.
pub(crate) fn crossover(prev_a: f64, cur_a: f64, prev_b: f64, cur_b: f64) -> Trend {
    if prev_a < prev_b && cur_a > cur_b {
        Trend::Bullish
    } else if prev_a > prev_b && cur_a < cur_b {
        Trend::Bearish
    } else {
        Trend::None
    }
}

/// Last two values of a series as `(previous, current)`.
///
/// Callers check the length first.
pub(crate) fn last_two(values: &[f64]) -> (f64, f64) {
    let n = values.len();
    (values[n - 2], values[n - 1])
}
