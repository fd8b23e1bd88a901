//! Categorical trend tag produced by the signal classifiers.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Trend {
    Bullish,
    Bearish,
    #[default]
    None,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Bullish => write!(f, "BULLISH"),
            Trend::Bearish => write!(f, "BEARISH"),
            Trend::None => write!(f, "NONE"),
        }
    }
}
