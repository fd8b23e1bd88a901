//! Domain error types.

/// Top-level error type for indicata.
///
/// Indicator computations never fail; they return an empty series when the
/// input is too short. Only the trend classifiers, bar ingestion and
/// configuration loading surface errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IndicataError {
    #[error("{indicator} signal needs at least {required} values, got {actual}")]
    InsufficientData {
        indicator: &'static str,
        required: usize,
        actual: usize,
    },

    #[error("bar {index} is not newer than the bar before it")]
    BarsOutOfOrder { index: usize },

    #[error("config parse error: {reason}")]
    ConfigParse { reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },
}

impl IndicataError {
    pub(crate) fn insufficient(indicator: &'static str, required: usize, actual: usize) -> Self {
        IndicataError::InsufficientData {
            indicator,
            required,
            actual,
        }
    }

    /// Fails with `InsufficientData` unless `actual >= required`.
    pub(crate) fn require(
        indicator: &'static str,
        required: usize,
        actual: usize,
    ) -> Result<(), Self> {
        if actual < required {
            return Err(Self::insufficient(indicator, required, actual));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_data_message() {
        let err = IndicataError::insufficient("OBV", 3, 2);
        assert_eq!(err.to_string(), "OBV signal needs at least 3 values, got 2");
    }

    #[test]
    fn require_passes_at_threshold() {
        assert!(IndicataError::require("RSI", 2, 2).is_ok());
        assert!(IndicataError::require("RSI", 2, 1).is_err());
    }

    #[test]
    fn config_invalid_message() {
        let err = IndicataError::ConfigInvalid {
            section: "indicators".into(),
            key: "rsi_period".into(),
            reason: "rsi_period must be positive".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid config value [indicators] rsi_period: rsi_period must be positive"
        );
    }
}
