//! Full indicator pass over one price series.
//!
//! Computes every indicator family with the configured parameters, then runs
//! each trend classifier on the results. Classification fails fast: the
//! first classifier without enough history aborts the pass.

use crate::domain::error::IndicataError;
use crate::domain::indicator::{
    Bands, IndicatorType, MacdResult, OscillatorResult, atr_breakout_signal, average_true_range,
    bandwidth, bollinger_bands, bollinger_signal, macd, macd_signal, obv_trend,
    obv_trend_with_ema, on_balance_volume, relative_strength_index, rsi_signal_with_levels,
    stochastic_oscillator, stochastic_signal,
};
use crate::domain::ohlcv::PriceSeries;
use crate::domain::settings::IndicatorSettings;
use crate::domain::trend::Trend;
use tracing::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Analysis {
    pub atr: Vec<f64>,
    pub bands: Bands,
    pub bandwidth: Option<Vec<f64>>,
    pub rsi: Vec<f64>,
    pub macd: MacdResult,
    pub stochastic: OscillatorResult,
    pub obv: Vec<i64>,
    signals: Vec<(IndicatorType, Trend)>,
}

impl Analysis {
    /// Every classified signal, in evaluation order.
    pub fn signals(&self) -> &[(IndicatorType, Trend)] {
        &self.signals
    }

    pub fn trend_for(&self, indicator: &IndicatorType) -> Option<Trend> {
        self.signals
            .iter()
            .find(|(kind, _)| kind == indicator)
            .map(|(_, trend)| *trend)
    }
}

pub fn analyze(series: &PriceSeries, settings: &IndicatorSettings) -> Result<Analysis, IndicataError> {
    let closes = &series.closes;

    let atr = average_true_range(&series.highs, &series.lows, closes, settings.atr_period);
    let bands = bollinger_bands(
        closes,
        settings.bollinger_period,
        settings.bollinger_width,
        settings.bollinger_middle,
    );
    let band_widths = bandwidth(&bands);
    let rsi = relative_strength_index(closes, settings.rsi_period);
    let macd_result = macd(
        closes,
        settings.macd_short,
        settings.macd_long,
        settings.macd_signal,
    );
    let stochastic = stochastic_oscillator(
        closes,
        &series.highs,
        &series.lows,
        settings.stochastic_period,
        settings.stochastic_period_d,
    );
    let obv = on_balance_volume(closes, &series.volumes);

    warn_if_not_finite(&IndicatorType::Rsi(settings.rsi_period), &rsi);
    warn_if_not_finite(
        &IndicatorType::Stochastic {
            k_period: settings.stochastic_period,
            d_period: settings.stochastic_period_d,
        },
        &stochastic.k,
    );

    let mut signals = Vec::with_capacity(7);
    let mut record = |indicator: IndicatorType, trend: Trend| {
        debug!(%indicator, %trend, "classified signal");
        signals.push((indicator, trend));
    };

    record(
        IndicatorType::Atr(settings.atr_period),
        atr_breakout(series, &atr, settings.atr_multiplier)?,
    );
    record(
        IndicatorType::bollinger(settings.bollinger_period, settings.bollinger_width),
        bollinger_signal(&bands, closes)?,
    );
    record(
        IndicatorType::Rsi(settings.rsi_period),
        rsi_signal_with_levels(
            &rsi,
            settings.rsi_lookback,
            settings.rsi_oversold,
            settings.rsi_overbought,
        )?,
    );
    record(
        IndicatorType::Macd {
            short: settings.macd_short,
            long: settings.macd_long,
            signal: settings.macd_signal,
        },
        macd_signal(&macd_result)?,
    );
    record(
        IndicatorType::Stochastic {
            k_period: settings.stochastic_period,
            d_period: settings.stochastic_period_d,
        },
        stochastic_signal(&stochastic)?,
    );
    record(IndicatorType::Obv, obv_trend(&obv)?);
    record(
        IndicatorType::ObvEma {
            short: settings.obv_short,
            long: settings.obv_long,
        },
        obv_trend_with_ema(&obv, settings.obv_short, settings.obv_long)?,
    );

    Ok(Analysis {
        atr,
        bands,
        bandwidth: band_widths,
        rsi,
        macd: macd_result,
        stochastic,
        obv,
        signals,
    })
}

/// Latest close against the previous bar's range widened by the latest ATR.
fn atr_breakout(series: &PriceSeries, atr: &[f64], multiplier: f64) -> Result<Trend, IndicataError> {
    let bars = series.closes.len().min(series.highs.len()).min(series.lows.len());
    IndicataError::require("ATR", 2, bars)?;

    let close = series.closes[bars - 1];
    let high = series.highs[bars - 2];
    let low = series.lows[bars - 2];
    atr_breakout_signal(atr, multiplier, close, high, low)
}

fn warn_if_not_finite(indicator: &IndicatorType, values: &[f64]) {
    if let Some(latest) = values.last() {
        if !latest.is_finite() {
            warn!(%indicator, value = %latest, "latest value is not finite");
        }
    }
}
