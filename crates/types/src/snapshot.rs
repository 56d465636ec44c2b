//! Per-tick snapshot handed to renderers.
//!
//! A snapshot is a plain value: renderers get it behind an `Arc` and never
//! see the live buffers it was built from.

use crate::display::VisualState;
use crate::indicator::IndicatorLevel;
use crate::status::{SoftwareMode, Substate};
use serde::{Deserialize, Serialize};

/// Full view of the pipeline after one tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub channels: Vec<ChannelSnapshot>,
    pub indicators: Vec<IndicatorSnapshot>,
    pub displays: Vec<DisplaySnapshot>,
    pub status: StatusSnapshot,
}

impl Snapshot {
    pub fn channel(&self, name: &str) -> Option<&ChannelSnapshot> {
        self.channels.iter().find(|c| c.name == name)
    }

    pub fn indicator(&self, name: &str) -> Option<&IndicatorSnapshot> {
        self.indicators.iter().find(|i| i.name == name)
    }

    pub fn display(&self, name: &str) -> Option<&DisplaySnapshot> {
        self.displays.iter().find(|d| d.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelSnapshot {
    pub name: String,
    pub unit: String,
    /// Full window, oldest sample first
    pub samples: Vec<f64>,
    pub average: f64,
    pub warning_value: f64,
    /// Latest sample is at or above `warning_value`
    pub above_warning: bool,
}

impl ChannelSnapshot {
    pub fn latest(&self) -> Option<f64> {
        self.samples.last().copied()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub name: String,
    pub level: IndicatorLevel,
    /// Flag value the level was derived from
    pub raw: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySnapshot {
    pub name: String,
    pub unit: String,
    pub value: f64,
    pub threshold: f64,
    pub visual: VisualState,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub controller_time_ms: Option<f64>,
    pub mode: Option<SoftwareMode>,
    pub substate: Option<Substate>,
    /// Recent operator messages, oldest first
    pub messages: Vec<String>,
}
