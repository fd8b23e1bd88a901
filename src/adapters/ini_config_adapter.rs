//! INI configuration adapter.
//!
//! Parses INI text that the caller has already loaded; the library itself
//! does no file I/O.

use crate::domain::error::IndicataError;
use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;

pub struct IniConfigAdapter {
    config: Ini,
}

impl IniConfigAdapter {
    pub fn from_string(content: &str) -> Result<Self, IndicataError> {
        let mut config = Ini::new();
        config
            .read(content.to_string())
            .map_err(|reason| IndicataError::ConfigParse { reason })?;
        Ok(Self { config })
    }
}

impl ConfigPort for IniConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.config.get(section, key)
    }

    fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        self.config
            .getint(section, key)
            .ok()
            .flatten()
            .unwrap_or(default)
    }

    fn get_double(&self, section: &str, key: &str, default: f64) -> f64 {
        self.config
            .getfloat(section, key)
            .ok()
            .flatten()
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_string_parses_config() {
        let content = r#"
[indicators]
rsi_period = 14
bollinger_middle = ema
"#;
        let adapter = IniConfigAdapter::from_string(content).unwrap();
        assert_eq!(
            adapter.get_string("indicators", "bollinger_middle"),
            Some("ema".to_string())
        );
        assert_eq!(adapter.get_int("indicators", "rsi_period", 0), 14);
    }

    #[test]
    fn get_string_returns_none_for_missing_key() {
        let adapter = IniConfigAdapter::from_string("[indicators]\nrsi_period = 14\n").unwrap();
        assert_eq!(adapter.get_string("indicators", "missing"), None);
        assert_eq!(adapter.get_string("missing_section", "key"), None);
    }

    #[test]
    fn get_int_returns_default_for_missing() {
        let adapter = IniConfigAdapter::from_string("[indicators]\n").unwrap();
        assert_eq!(adapter.get_int("indicators", "missing", 42), 42);
    }

    #[test]
    fn get_int_returns_default_for_non_numeric() {
        let adapter = IniConfigAdapter::from_string("[indicators]\natr_period = abc\n").unwrap();
        assert_eq!(adapter.get_int("indicators", "atr_period", 42), 42);
    }

    #[test]
    fn get_double_returns_value() {
        let adapter =
            IniConfigAdapter::from_string("[indicators]\nbollinger_width = 2.5\n").unwrap();
        assert_eq!(adapter.get_double("indicators", "bollinger_width", 0.0), 2.5);
    }

    #[test]
    fn get_double_returns_default_for_non_numeric() {
        let adapter =
            IniConfigAdapter::from_string("[indicators]\nbollinger_width = wide\n").unwrap();
        assert_eq!(adapter.get_double("indicators", "bollinger_width", 2.0), 2.0);
    }

    #[test]
    fn keys_are_case_insensitive() {
        let adapter = IniConfigAdapter::from_string("[Indicators]\nRSI_Period = 9\n").unwrap();
        assert_eq!(adapter.get_int("indicators", "rsi_period", 0), 9);
    }
}
