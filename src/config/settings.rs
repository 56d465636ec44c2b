//! Application configuration

use anyhow::Result;
use log::info;
use raven_view_core::{ConfigError, DEFAULT_MESSAGE_LOG_CAPACITY, DEFAULT_TICK_MS, DEFAULT_WINDOW_CAPACITY};
use raven_view_types::{
    ChannelConfig, DisplayConfig, DisplaySource, FieldMetadata, FieldPurpose, FieldType,
    IndicatorConfig, SourceConfig, StatusColumns,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::defaults::{
    raven_channels, raven_displays, raven_indicators, raven_status_columns, RAVEN_ROW_ARITY,
};

/// Current config format version
pub const CONFIG_VERSION: u32 = 1;

/// Everything the pipeline needs, fixed at start-up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the config format
    #[serde(default = "default_version")]
    pub version: u32,
    /// Where rows come from
    #[serde(default)]
    pub source: SourceConfig,
    /// Scheduler tick interval in milliseconds
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Samples kept per channel
    #[serde(default = "default_window_capacity")]
    pub window_capacity: usize,
    /// Number of comma-separated columns in every row
    #[serde(default = "default_row_arity")]
    pub row_arity: usize,
    #[serde(default = "raven_channels")]
    pub channels: Vec<ChannelConfig>,
    #[serde(default = "raven_indicators")]
    pub indicators: Vec<IndicatorConfig>,
    #[serde(default = "raven_displays")]
    pub displays: Vec<DisplayConfig>,
    #[serde(default = "raven_status_columns")]
    pub status: StatusColumns,
    /// Operator messages retained in the status block
    #[serde(default = "default_message_log_capacity")]
    pub message_log_capacity: usize,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

fn default_tick_interval_ms() -> u64 {
    DEFAULT_TICK_MS
}

fn default_window_capacity() -> usize {
    DEFAULT_WINDOW_CAPACITY
}

fn default_row_arity() -> usize {
    RAVEN_ROW_ARITY
}

fn default_message_log_capacity() -> usize {
    DEFAULT_MESSAGE_LOG_CAPACITY
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            source: SourceConfig::default(),
            tick_interval_ms: default_tick_interval_ms(),
            window_capacity: default_window_capacity(),
            row_arity: default_row_arity(),
            channels: raven_channels(),
            indicators: raven_indicators(),
            displays: raven_displays(),
            status: raven_status_columns(),
            message_log_capacity: default_message_log_capacity(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the user config directory.
    ///
    /// Falls back to the built-in RAVEN layout when no file exists.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            info!("No config at {:?}, using built-in layout", config_path);
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Save configuration to a specific file path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("se", "ltu.raven", "raven-view")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.json"))
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Columns that hold text rather than numbers
    pub fn text_columns(&self) -> Vec<usize> {
        self.status.message.into_iter().collect()
    }

    /// Every mapped column with what it feeds, ordered by column
    pub fn column_layout(&self) -> Vec<FieldMetadata> {
        let mut fields = Vec::new();

        for channel in &self.channels {
            fields.push(FieldMetadata::new(
                channel.column,
                format!("channel {}", channel.name),
                channel.unit.as_str(),
                FieldType::Numerical,
                FieldPurpose::ChannelValue,
            ));
        }
        for indicator in &self.indicators {
            fields.push(FieldMetadata::new(
                indicator.column,
                format!("indicator {}", indicator.name),
                "",
                FieldType::Flag,
                FieldPurpose::IndicatorFlag,
            ));
        }
        for display in &self.displays {
            if let DisplaySource::Column { column } = display.source {
                fields.push(FieldMetadata::new(
                    column,
                    format!("display {}", display.name),
                    display.unit.as_str(),
                    FieldType::Numerical,
                    FieldPurpose::DisplayValue,
                ));
            }
        }

        let status = [
            (self.status.controller_time, "controller_time", "ms", FieldType::Numerical, FieldPurpose::ControllerTime),
            (self.status.mode, "mode", "", FieldType::Code, FieldPurpose::Mode),
            (self.status.substate, "substate", "", FieldType::Code, FieldPurpose::Substate),
            (self.status.message, "message", "", FieldType::Text, FieldPurpose::Message),
        ];
        for (column, id, unit, field_type, purpose) in status {
            if let Some(column) = column {
                fields.push(FieldMetadata::new(
                    column,
                    format!("status {}", id),
                    unit,
                    field_type,
                    purpose,
                ));
            }
        }

        fields.sort_by_key(|f| f.column);
        fields
    }

    /// Check the configuration before anything is started
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if self.window_capacity == 0 {
            return Err(ConfigError::ZeroWindow);
        }

        for field in self.column_layout() {
            if field.column >= self.row_arity {
                return Err(ConfigError::ColumnOutOfRange {
                    field: field.id,
                    column: field.column,
                    arity: self.row_arity,
                });
            }
        }

        if let Some(column) = self.status.message {
            let last = self.row_arity - 1;
            if column != last {
                return Err(ConfigError::MessageColumnNotLast { column, last });
            }
        }

        for display in &self.displays {
            if let DisplaySource::ChannelAverage { channel } = display.source {
                if channel >= self.channels.len() {
                    return Err(ConfigError::MissingChannel {
                        display: display.name.clone(),
                        channel,
                        channels: self.channels.len(),
                    });
                }
            }
            if !display.threshold.is_finite() {
                return Err(ConfigError::NonFiniteThreshold {
                    field: format!("display {}", display.name),
                });
            }
        }
        for channel in &self.channels {
            if !channel.warning_value.is_finite() {
                return Err(ConfigError::NonFiniteThreshold {
                    field: format!("channel {}", channel.name),
                });
            }
        }

        check_unique("channel", self.channels.iter().map(|c| c.name.as_str()))?;
        check_unique("indicator", self.indicators.iter().map(|i| i.name.as_str()))?;
        check_unique("display", self.displays.iter().map(|d| d.name.as_str()))?;

        Ok(())
    }
}

fn check_unique<'a>(kind: &'static str, names: impl Iterator<Item = &'a str>) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(ConfigError::DuplicateName {
                kind,
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_is_valid() {
        let config = AppConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.channels.len(), 8);
        assert_eq!(config.tick_interval(), Duration::from_millis(16));
        assert_eq!(config.text_columns(), vec![21]);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"tick_interval_ms": 50, "window_capacity": 10}"#).unwrap();
        assert_eq!(config.tick_interval_ms, 50);
        assert_eq!(config.window_capacity, 10);
        assert_eq!(config.row_arity, RAVEN_ROW_ARITY);
        assert_eq!(config.indicators.len(), 3);
        assert_eq!(config.source.source_type(), "log_file");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = AppConfig {
            window_capacity: 3,
            ..AppConfig::default()
        };
        config.save_to_path(&path).unwrap();

        let loaded = AppConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_column_beyond_arity_is_rejected() {
        let mut config = AppConfig::default();
        config.channels[0].column = 22;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ColumnOutOfRange { column: 22, arity: 22, .. })
        ));
    }

    #[test]
    fn test_display_needs_existing_channel() {
        let mut config = AppConfig::default();
        config.displays[0].source = DisplaySource::ChannelAverage { channel: 8 };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingChannel { channel: 8, .. })
        ));
    }

    #[test]
    fn test_message_column_must_be_last() {
        let mut config = AppConfig::default();
        config.status.message = Some(20);
        config.status.substate = None;
        assert_eq!(
            config.validate(),
            Err(ConfigError::MessageColumnNotLast {
                column: 20,
                last: 21
            })
        );
    }

    #[test]
    fn test_zero_window_and_interval() {
        let config = AppConfig {
            window_capacity: 0,
            ..AppConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroWindow));

        let config = AppConfig {
            tick_interval_ms: 0,
            ..AppConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroInterval));
    }

    #[test]
    fn test_duplicate_and_non_finite() {
        let mut config = AppConfig::default();
        config.indicators[1].name = "heating_blanket".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateName { kind: "indicator", .. })
        ));

        let mut config = AppConfig::default();
        config.displays[2].threshold = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFiniteThreshold { .. })
        ));
    }

    #[test]
    fn test_column_layout_is_sorted() {
        let layout = AppConfig::default().column_layout();
        assert!(layout.windows(2).all(|w| w[0].column <= w[1].column));
        assert_eq!(layout.first().map(|f| f.column), Some(2));
        assert_eq!(layout.last().map(|f| f.purpose), Some(FieldPurpose::Message));
    }
}
