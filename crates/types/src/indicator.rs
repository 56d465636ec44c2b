//! Indicator light configuration and levels.

use serde::{Deserialize, Serialize};

/// Discrete indicator level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorLevel {
    #[default]
    Off,
    On,
    Warning,
}

impl IndicatorLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorLevel::Off => "off",
            IndicatorLevel::On => "on",
            IndicatorLevel::Warning => "warning",
        }
    }
}

/// How a raw flag value is quantized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorRule {
    /// Zero is off, anything else is on
    #[default]
    NonZero,
    /// 0 off, 1 on, 2 and above warning (rounded to the nearest integer)
    Tristate,
}

/// One indicator light
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorConfig {
    /// Identifier, unique among indicators
    pub name: String,
    /// Column holding the flag
    pub column: usize,
    #[serde(default)]
    pub rule: IndicatorRule,
}

impl IndicatorConfig {
    pub fn new(name: impl Into<String>, column: usize, rule: IndicatorRule) -> Self {
        Self {
            name: name.into(),
            column,
            rule,
        }
    }
}
