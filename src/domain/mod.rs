//! Core domain types and logic.

pub mod analysis;
pub mod config_validation;
pub mod error;
pub mod indicator;
pub mod indicator_helpers;
pub mod ohlcv;
pub mod settings;
pub mod trend;
