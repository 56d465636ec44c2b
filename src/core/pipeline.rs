//! Per-tick processing of decoded rows
//!
//! `Pipeline` owns every piece of mutable dashboard state. The scheduler
//! drives it once per tick; renderers only ever see the snapshots it builds.

use log::{debug, warn};
use raven_view_core::ConfigError;
use raven_view_types::{
    ChannelSnapshot, DisplaySnapshot, DisplaySource, IndicatorSnapshot, Snapshot,
};

use super::channel_buffer::ChannelBuffer;
use super::decoder::{Record, RowDecoder};
use super::display::DisplayState;
use super::indicator::IndicatorState;
use super::status::StatusState;
use crate::config::AppConfig;

struct Channel {
    name: String,
    unit: String,
    warning_value: f64,
    buffer: ChannelBuffer,
    average: f64,
}

struct Display {
    name: String,
    unit: String,
    source: DisplaySource,
    state: DisplayState,
}

struct Indicator {
    name: String,
    state: IndicatorState,
}

/// Rows decoded and rejected during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowCounts {
    pub decoded: usize,
    pub rejected: usize,
}

pub struct Pipeline {
    decoder: RowDecoder,
    channels: Vec<Channel>,
    indicators: Vec<Indicator>,
    displays: Vec<Display>,
    status: StatusState,
}

impl Pipeline {
    /// Validate `config` and build zero-initialised state for it
    pub fn new(config: &AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let channels = config
            .channels
            .iter()
            .map(|c| Channel {
                name: c.name.clone(),
                unit: c.unit.clone(),
                warning_value: c.warning_value,
                buffer: ChannelBuffer::new(config.window_capacity),
                average: 0.0,
            })
            .collect();
        let indicators = config
            .indicators
            .iter()
            .map(|i| Indicator {
                name: i.name.clone(),
                state: IndicatorState::new(i.rule),
            })
            .collect();
        let displays = config
            .displays
            .iter()
            .map(|d| Display {
                name: d.name.clone(),
                unit: d.unit.clone(),
                source: d.source,
                state: DisplayState::new(d.threshold),
            })
            .collect();

        Ok(Self {
            decoder: RowDecoder::new(config),
            channels,
            indicators,
            displays,
            status: StatusState::new(config.message_log_capacity),
        })
    }

    /// Decode and apply `rows` in order. A malformed row is logged and
    /// skipped without touching any state.
    pub fn apply_rows(&mut self, rows: &[String]) -> RowCounts {
        let mut counts = RowCounts::default();
        for row in rows {
            match self.decoder.decode(row) {
                Ok(record) => {
                    self.apply_record(&record);
                    counts.decoded += 1;
                }
                Err(e) => {
                    warn!("Skipping row: {} ({:?})", e, row);
                    counts.rejected += 1;
                }
            }
        }
        if counts.decoded > 0 || counts.rejected > 0 {
            debug!("Applied {} rows, rejected {}", counts.decoded, counts.rejected);
        }
        counts
    }

    fn apply_record(&mut self, record: &Record) {
        for (channel, &value) in self.channels.iter_mut().zip(&record.channels) {
            channel.buffer.push(value);
        }
        for (indicator, &flag) in self.indicators.iter_mut().zip(&record.indicators) {
            indicator.state.update(flag);
        }
        for (display, value) in self.displays.iter_mut().zip(&record.displays) {
            if let Some(value) = value {
                display.state.update(*value);
            }
        }
        self.status.update(&record.status);
    }

    /// Recompute rolling averages and refresh the displays fed from them
    pub fn recompute_averages(&mut self) {
        for channel in &mut self.channels {
            channel.average = channel.buffer.average();
        }
        for display in &mut self.displays {
            if let DisplaySource::ChannelAverage { channel } = display.source {
                display.state.update(self.channels[channel].average);
            }
        }
    }

    pub fn channel_average(&self, index: usize) -> Option<f64> {
        self.channels.get(index).map(|c| c.average)
    }

    /// Build an immutable copy of the current state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            channels: self
                .channels
                .iter()
                .map(|c| ChannelSnapshot {
                    name: c.name.clone(),
                    unit: c.unit.clone(),
                    samples: c.buffer.to_vec(),
                    average: c.average,
                    warning_value: c.warning_value,
                    above_warning: c.buffer.latest() >= c.warning_value,
                })
                .collect(),
            indicators: self
                .indicators
                .iter()
                .map(|i| IndicatorSnapshot {
                    name: i.name.clone(),
                    level: i.state.level(),
                    raw: i.state.raw(),
                })
                .collect(),
            displays: self
                .displays
                .iter()
                .map(|d| DisplaySnapshot {
                    name: d.name.clone(),
                    unit: d.unit.clone(),
                    value: d.state.value(),
                    threshold: d.state.threshold(),
                    visual: d.state.visual(),
                })
                .collect(),
            status: self.status.snapshot(),
        }
    }
}
