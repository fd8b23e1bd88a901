//! OHLCV bar representation and the parallel series indicators consume.

use crate::domain::error::IndicataError;
use chrono::NaiveDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OhlcvBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
}

impl OhlcvBar {
    /// (high + low + close) / 3
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }

    /// max(high - low, |high - prev_close|, |low - prev_close|)
    pub fn true_range(&self, prev_close: f64) -> f64 {
        crate::domain::indicator::true_range(self.high, self.low, prev_close)
    }
}

/// Index-aligned closes, highs, lows and volumes, oldest first.
///
/// Lengths are not forced equal: the stochastic oscillator accepts a close
/// series shorter than its highs and lows.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PriceSeries {
    pub closes: Vec<f64>,
    pub highs: Vec<f64>,
    pub lows: Vec<f64>,
    pub volumes: Vec<i64>,
}

impl PriceSeries {
    pub fn new(closes: Vec<f64>, highs: Vec<f64>, lows: Vec<f64>, volumes: Vec<i64>) -> Self {
        Self {
            closes,
            highs,
            lows,
            volumes,
        }
    }

    /// Splits bars into parallel series.
    ///
    /// Bars must be strictly oldest-first; the series are never re-sorted.
    pub fn from_bars(bars: &[OhlcvBar]) -> Result<Self, IndicataError> {
        if let Some(index) = bars
            .windows(2)
            .position(|pair| pair[1].date <= pair[0].date)
        {
            return Err(IndicataError::BarsOutOfOrder { index: index + 1 });
        }

        Ok(Self {
            closes: bars.iter().map(|b| b.close).collect(),
            highs: bars.iter().map(|b| b.high).collect(),
            lows: bars.iter().map(|b| b.low).collect(),
            volumes: bars.iter().map(|b| b.volume).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bar() -> OhlcvBar {
        OhlcvBar {
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            open: 100.0,
            high: 110.0,
            low: 90.0,
            close: 105.0,
            volume: 50_000,
        }
    }

    fn bar_on(day: u32, close: f64, volume: i64) -> OhlcvBar {
        OhlcvBar {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            open: close,
            high: close + 1.0,
            low: close - 1.0,
            close,
            volume,
        }
    }

    #[test]
    fn typical_price() {
        let bar = sample_bar();
        let expected = (110.0 + 90.0 + 105.0) / 3.0;
        assert!((bar.typical_price() - expected).abs() < f64::EPSILON);
    }

    #[test]
    fn true_range_hl_dominates() {
        let bar = sample_bar();
        // high-low=20, |high-100|=10, |low-100|=10 → 20
        assert!((bar.true_range(100.0) - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn true_range_gap_up() {
        let bar = sample_bar();
        // high-low=20, |110-70|=40, |90-70|=20 → 40
        assert!((bar.true_range(70.0) - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn true_range_gap_down() {
        let bar = sample_bar();
        // high-low=20, |110-130|=20, |90-130|=40 → 40
        assert!((bar.true_range(130.0) - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn from_bars_splits_parallel_series() {
        let bars = vec![bar_on(1, 10.0, 100), bar_on(2, 11.0, 200), bar_on(3, 12.0, 300)];
        let series = PriceSeries::from_bars(&bars).unwrap();

        assert_eq!(series.len(), 3);
        assert_eq!(series.closes, vec![10.0, 11.0, 12.0]);
        assert_eq!(series.highs, vec![11.0, 12.0, 13.0]);
        assert_eq!(series.lows, vec![9.0, 10.0, 11.0]);
        assert_eq!(series.volumes, vec![100, 200, 300]);
    }

    #[test]
    fn from_bars_rejects_newest_first() {
        let bars = vec![bar_on(3, 10.0, 100), bar_on(2, 11.0, 200)];
        let err = PriceSeries::from_bars(&bars).unwrap_err();
        assert_eq!(err, IndicataError::BarsOutOfOrder { index: 1 });
    }

    #[test]
    fn from_bars_rejects_duplicate_dates() {
        let bars = vec![bar_on(1, 10.0, 100), bar_on(2, 11.0, 200), bar_on(2, 12.0, 300)];
        let err = PriceSeries::from_bars(&bars).unwrap_err();
        assert_eq!(err, IndicataError::BarsOutOfOrder { index: 2 });
    }

    #[test]
    fn from_bars_empty() {
        let series = PriceSeries::from_bars(&[]).unwrap();
        assert!(series.is_empty());
    }
}
