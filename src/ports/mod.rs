//! Port traits at the boundary of the indicator domain.

pub mod config_port;
