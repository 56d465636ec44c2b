//! Numeric channel configuration.

use serde::{Deserialize, Serialize};

/// One plotted measurement channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// Identifier, unique among channels
    pub name: String,
    /// Unit of measurement
    #[serde(default)]
    pub unit: String,
    /// Column holding the sample
    pub column: usize,
    /// Level drawn as the limit line; the latest sample at or above it is flagged
    pub warning_value: f64,
}

impl ChannelConfig {
    pub fn new(name: impl Into<String>, unit: impl Into<String>, column: usize, warning_value: f64) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            column,
            warning_value,
        }
    }
}
