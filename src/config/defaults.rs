//! Built-in layout for the RAVEN test stand
//!
//! Rows are written by the serial reader: one host column followed by the
//! controller's dataline:
//!
//! ```text
//!  0 host time        8 temperature1 (n/c)  16 main valve button
//!  1 record marker    9 nozzle temperature  17 ignition engaged
//!  2 controller time 10 ambient temperature 18 valve active
//!  3 bottle pressure 11 plume temperature   19 software mode
//!  4 line pressure   12 dump valve button   20 substate
//!  5 chamber pressure 13 heating blanket    21 message
//!  6 load cell       14 ignition relay
//!  7 bottle temp     15 feeding button
//! ```

use raven_view_types::{
    ChannelConfig, DisplayConfig, DisplaySource, IndicatorConfig, IndicatorRule, StatusColumns,
};

/// Columns per row in the RAVEN log
pub const RAVEN_ROW_ARITY: usize = 22;

pub fn raven_channels() -> Vec<ChannelConfig> {
    vec![
        ChannelConfig::new("chamber_pressure", "bar", 5, 40.0),
        ChannelConfig::new("bottle_pressure", "bar", 3, 60.0),
        ChannelConfig::new("line_pressure", "bar", 4, 55.0),
        ChannelConfig::new("bottle_temperature", "°C", 7, 40.0),
        ChannelConfig::new("nozzle_temperature", "°C", 9, 600.0),
        ChannelConfig::new("load_cell_force", "N", 6, 1500.0),
        ChannelConfig::new("ambient_temperature", "°C", 10, 45.0),
        ChannelConfig::new("plume_temperature", "°C", 11, 1200.0),
    ]
}

pub fn raven_indicators() -> Vec<IndicatorConfig> {
    vec![
        IndicatorConfig::new("heating_blanket", 13, IndicatorRule::NonZero),
        IndicatorConfig::new("main_valve", 16, IndicatorRule::NonZero),
        IndicatorConfig::new("ignition_relay", 14, IndicatorRule::NonZero),
    ]
}

/// Summary displays show the rolling averages of the headline channels
pub fn raven_displays() -> Vec<DisplayConfig> {
    vec![
        DisplayConfig::new("chamber_pressure", "bar", DisplaySource::ChannelAverage { channel: 0 }, 40.0),
        DisplayConfig::new("bottle_pressure", "bar", DisplaySource::ChannelAverage { channel: 1 }, 60.0),
        DisplayConfig::new("bottle_temperature", "°C", DisplaySource::ChannelAverage { channel: 3 }, 40.0),
        DisplayConfig::new("thrust", "N", DisplaySource::ChannelAverage { channel: 5 }, 1500.0),
    ]
}

pub fn raven_status_columns() -> StatusColumns {
    StatusColumns {
        controller_time: Some(2),
        mode: Some(19),
        substate: Some(20),
        message: Some(21),
    }
}
