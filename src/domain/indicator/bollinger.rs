//! Bollinger Bands.
//!
//! - Middle: SMA list (or EMA) over n periods
//! - Upper: Middle + (width × StdDev)
//! - Lower: Middle - (width × StdDev)
//!
//! StdDev is a single population deviation over the last n prices, applied
//! to every middle value.

use crate::domain::error::IndicataError;
use crate::domain::indicator::{Bands, last_two};
use crate::domain::indicator_helpers::{ema, sma_list, standard_deviation};
use crate::domain::trend::Trend;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_PERIOD: usize = 20;
pub const DEFAULT_WIDTH: f64 = 2.0;

/// Moving average used for the middle band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MiddleBand {
    #[default]
    Sma,
    Ema,
}

impl std::str::FromStr for MiddleBand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sma" => Ok(MiddleBand::Sma),
            "ema" => Ok(MiddleBand::Ema),
            other => Err(format!("unknown middle band '{}', expected sma or ema", other)),
        }
    }
}

pub fn bollinger_bands(prices: &[f64], period: usize, width: f64, middle_band: MiddleBand) -> Bands {
    let deviation = standard_deviation(prices, period).unwrap_or(0.0);
    let offset = width * deviation;

    let middle = match middle_band {
        MiddleBand::Sma => sma_list(prices, period),
        MiddleBand::Ema => ema(prices, period),
    };
    let upper = middle.iter().map(|m| m + offset).collect();
    let lower = middle.iter().map(|m| m - offset).collect();

    Bands {
        lower,
        middle,
        upper,
    }
}

/// (upper - lower) / middle for every band point.
///
/// `None` when the three bands differ in length.
pub fn bandwidth(bands: &Bands) -> Option<Vec<f64>> {
    if bands.middle.len() != bands.lower.len() || bands.lower.len() != bands.upper.len() {
        return None;
    }

    Some(
        bands
            .upper
            .iter()
            .zip(&bands.lower)
            .zip(&bands.middle)
            .map(|((upper, lower), middle)| (upper - lower) / middle)
            .collect(),
    )
}

/// Price re-entering the bands over the last two points.
///
/// Bullish when price crosses up through the lower band, bearish when it
/// falls back through the upper band.
pub fn bollinger_signal(bands: &Bands, prices: &[f64]) -> Result<Trend, IndicataError> {
    let band_len = bands.middle.len().min(bands.lower.len()).min(bands.upper.len());
    IndicataError::require("Bollinger", 2, band_len)?;
    IndicataError::require("Bollinger", 2, prices.len())?;

    let (prev_price, price) = last_two(prices);
    let (prev_lower, lower) = last_two(&bands.lower);
    let (prev_upper, upper) = last_two(&bands.upper);

    if prev_price < prev_lower && price > lower {
        Ok(Trend::Bullish)
    } else if prev_price > prev_upper && price < upper {
        Ok(Trend::Bearish)
    } else {
        Ok(Trend::None)
    }
}
