//! Indicator parameters for the analysis pipeline.

use crate::domain::config_validation::validate_indicator_config;
use crate::domain::error::IndicataError;
use crate::domain::indicator::{MiddleBand, bollinger, macd, obv, rsi, stochastic};
use crate::ports::config_port::ConfigPort;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Config section holding every indicator key.
pub const SECTION: &str = "indicators";

pub const DEFAULT_ATR_PERIOD: usize = 14;
pub const DEFAULT_ATR_MULTIPLIER: f64 = 2.0;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndicatorSettings {
    pub atr_period: usize,
    pub atr_multiplier: f64,
    pub bollinger_period: usize,
    pub bollinger_width: f64,
    pub bollinger_middle: MiddleBand,
    pub rsi_period: usize,
    pub rsi_lookback: usize,
    pub rsi_oversold: f64,
    pub rsi_overbought: f64,
    pub macd_short: usize,
    pub macd_long: usize,
    pub macd_signal: usize,
    pub stochastic_period: usize,
    pub stochastic_period_d: usize,
    pub obv_short: usize,
    pub obv_long: usize,
}

impl Default for IndicatorSettings {
    fn default() -> Self {
        Self {
            atr_period: DEFAULT_ATR_PERIOD,
            atr_multiplier: DEFAULT_ATR_MULTIPLIER,
            bollinger_period: bollinger::DEFAULT_PERIOD,
            bollinger_width: bollinger::DEFAULT_WIDTH,
            bollinger_middle: MiddleBand::Sma,
            rsi_period: rsi::DEFAULT_PERIOD,
            rsi_lookback: 1,
            rsi_oversold: rsi::OVERSOLD,
            rsi_overbought: rsi::OVERBOUGHT,
            macd_short: macd::DEFAULT_SHORT,
            macd_long: macd::DEFAULT_LONG,
            macd_signal: macd::DEFAULT_SIGNAL,
            stochastic_period: stochastic::DEFAULT_PERIOD,
            stochastic_period_d: stochastic::DEFAULT_PERIOD_D,
            obv_short: obv::DEFAULT_EMA_SHORT,
            obv_long: obv::DEFAULT_EMA_LONG,
        }
    }
}

impl IndicatorSettings {
    /// Validates the `[indicators]` section, then reads it over the defaults.
    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, IndicataError> {
        validate_indicator_config(config)?;

        let defaults = Self::default();
        let period = |key: &str, default: usize| -> usize {
            config.get_int(SECTION, key, default as i64) as usize
        };
        let number = |key: &str, default: f64| config.get_double(SECTION, key, default);

        let bollinger_middle = match config.get_string(SECTION, "bollinger_middle") {
            Some(raw) => raw
                .parse::<MiddleBand>()
                .map_err(|reason| IndicataError::ConfigInvalid {
                    section: SECTION.to_string(),
                    key: "bollinger_middle".to_string(),
                    reason,
                })?,
            None => defaults.bollinger_middle,
        };

        Ok(Self {
            atr_period: period("atr_period", defaults.atr_period),
            atr_multiplier: number("atr_multiplier", defaults.atr_multiplier),
            bollinger_period: period("bollinger_period", defaults.bollinger_period),
            bollinger_width: number("bollinger_width", defaults.bollinger_width),
            bollinger_middle,
            rsi_period: period("rsi_period", defaults.rsi_period),
            rsi_lookback: period("rsi_lookback", defaults.rsi_lookback),
            rsi_oversold: number("rsi_oversold", defaults.rsi_oversold),
            rsi_overbought: number("rsi_overbought", defaults.rsi_overbought),
            macd_short: period("macd_short", defaults.macd_short),
            macd_long: period("macd_long", defaults.macd_long),
            macd_signal: period("macd_signal", defaults.macd_signal),
            stochastic_period: period("stochastic_period", defaults.stochastic_period),
            stochastic_period_d: period("stochastic_period_d", defaults.stochastic_period_d),
            obv_short: period("obv_short", defaults.obv_short),
            obv_long: period("obv_long", defaults.obv_long),
        })
    }
}
