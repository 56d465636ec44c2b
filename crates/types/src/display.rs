//! Summary display configuration.

use serde::{Deserialize, Serialize};

/// Visual state of a summary display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VisualState {
    #[default]
    Normal,
    Warning,
}

/// Where a display takes its value from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplaySource {
    /// Rolling average of a channel, refreshed once per tick
    ChannelAverage { channel: usize },
    /// Latest decoded value of a column, refreshed on every row
    Column { column: usize },
}

/// One summary display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Identifier, unique among displays
    pub name: String,
    #[serde(default)]
    pub unit: String,
    pub source: DisplaySource,
    /// Values at or above this switch the display to warning
    pub threshold: f64,
}

impl DisplayConfig {
    pub fn new(
        name: impl Into<String>,
        unit: impl Into<String>,
        source: DisplaySource,
        threshold: f64,
    ) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            source,
            threshold,
        }
    }
}
