//! Configuration validation.
//!
//! Validates every `[indicators]` key before settings are built. Missing keys
//! take the defaults from [`IndicatorSettings::default`].

use crate::domain::error::IndicataError;
use crate::domain::indicator::MiddleBand;
use crate::domain::settings::{IndicatorSettings, SECTION};
use crate::ports::config_port::ConfigPort;

pub fn validate_indicator_config(config: &dyn ConfigPort) -> Result<(), IndicataError> {
    let defaults = IndicatorSettings::default();

    for (key, default) in [
        ("atr_period", defaults.atr_period),
        ("bollinger_period", defaults.bollinger_period),
        ("rsi_period", defaults.rsi_period),
        ("rsi_lookback", defaults.rsi_lookback),
        ("macd_short", defaults.macd_short),
        ("macd_long", defaults.macd_long),
        ("macd_signal", defaults.macd_signal),
        ("stochastic_period", defaults.stochastic_period),
        ("stochastic_period_d", defaults.stochastic_period_d),
        ("obv_short", defaults.obv_short),
        ("obv_long", defaults.obv_long),
    ] {
        validate_period(config, key, default)?;
    }

    validate_positive_double(config, "atr_multiplier", defaults.atr_multiplier)?;
    validate_positive_double(config, "bollinger_width", defaults.bollinger_width)?;
    validate_middle_band(config)?;
    validate_rsi_levels(config, &defaults)?;
    validate_ordered_periods(
        config,
        ("macd_short", defaults.macd_short),
        ("macd_long", defaults.macd_long),
    )?;
    validate_ordered_periods(
        config,
        ("obv_short", defaults.obv_short),
        ("obv_long", defaults.obv_long),
    )?;
    Ok(())
}

fn invalid(key: &str, reason: String) -> IndicataError {
    IndicataError::ConfigInvalid {
        section: SECTION.to_string(),
        key: key.to_string(),
        reason,
    }
}

/// A present key must parse; `get_int` alone would fall back silently.
fn read_int(config: &dyn ConfigPort, key: &str, default: usize) -> Result<i64, IndicataError> {
    match config.get_string(SECTION, key) {
        None => Ok(default as i64),
        Some(raw) => raw
            .trim()
            .parse::<i64>()
            .map_err(|_| invalid(key, format!("{} must be an integer", key))),
    }
}

fn read_double(config: &dyn ConfigPort, key: &str, default: f64) -> Result<f64, IndicataError> {
    match config.get_string(SECTION, key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| invalid(key, format!("{} must be a number", key))),
    }
}

fn validate_period(config: &dyn ConfigPort, key: &str, default: usize) -> Result<(), IndicataError> {
    let value = read_int(config, key, default)?;
    if value < 1 {
        return Err(invalid(key, format!("{} must be at least 1", key)));
    }
    Ok(())
}

fn validate_positive_double(
    config: &dyn ConfigPort,
    key: &str,
    default: f64,
) -> Result<(), IndicataError> {
    let value = read_double(config, key, default)?;
    if value <= 0.0 || !value.is_finite() {
        return Err(invalid(key, format!("{} must be positive", key)));
    }
    Ok(())
}

fn validate_middle_band(config: &dyn ConfigPort) -> Result<(), IndicataError> {
    if let Some(raw) = config.get_string(SECTION, "bollinger_middle") {
        raw.parse::<MiddleBand>()
            .map_err(|reason| invalid("bollinger_middle", reason))?;
    }
    Ok(())
}

fn validate_rsi_levels(
    config: &dyn ConfigPort,
    defaults: &IndicatorSettings,
) -> Result<(), IndicataError> {
    let oversold = read_double(config, "rsi_oversold", defaults.rsi_oversold)?;
    let overbought = read_double(config, "rsi_overbought", defaults.rsi_overbought)?;

    for (key, value) in [("rsi_oversold", oversold), ("rsi_overbought", overbought)] {
        if !(0.0..=100.0).contains(&value) {
            return Err(invalid(key, format!("{} must be between 0 and 100", key)));
        }
    }
    if oversold >= overbought {
        return Err(invalid(
            "rsi_oversold",
            "rsi_oversold must be below rsi_overbought".to_string(),
        ));
    }
    Ok(())
}

fn validate_ordered_periods(
    config: &dyn ConfigPort,
    (short_key, short_default): (&str, usize),
    (long_key, long_default): (&str, usize),
) -> Result<(), IndicataError> {
    let short = read_int(config, short_key, short_default)?;
    let long = read_int(config, long_key, long_default)?;
    if short >= long {
        return Err(invalid(
            short_key,
            format!("{} must be less than {}", short_key, long_key),
        ));
    }
    Ok(())
}
