//! Sliding-window technical indicators and trend classifiers.
//!
//! Hexagonal architecture: pure indicator math and classifiers in [`domain`],
//! the configuration port in [`ports`], and its INI implementation in
//! [`adapters`].

pub mod adapters;
pub mod domain;
pub mod ports;

pub use domain::analysis::{Analysis, analyze};
pub use domain::error::IndicataError;
pub use domain::ohlcv::{OhlcvBar, PriceSeries};
pub use domain::settings::IndicatorSettings;
pub use domain::trend::Trend;
