//! Concrete adapter implementations for ports.

pub mod ini_config_adapter;
