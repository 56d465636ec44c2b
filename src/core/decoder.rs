//! Row decoding
//!
//! Turns one raw CSV row into typed values using the column mapping from
//! the configuration. Only mapped columns are parsed; everything else in
//! the row is ignored apart from counting towards the arity.

use log::debug;
use raven_view_core::DecodeError;
use raven_view_types::{DisplaySource, SoftwareMode, Substate};

use crate::config::AppConfig;

/// Status fields carried by a row, present when their column is configured
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusFields {
    pub controller_time_ms: Option<f64>,
    pub mode: Option<SoftwareMode>,
    pub substate: Option<Substate>,
    pub message: Option<String>,
}

/// One decoded row
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// One value per configured channel, in channel order
    pub channels: Vec<f64>,
    /// One flag per configured indicator
    pub indicators: Vec<f64>,
    /// Per display: the column value for column-sourced displays, `None`
    /// for displays fed from a channel average
    pub displays: Vec<Option<f64>>,
    pub status: StatusFields,
}

/// Decoder for a fixed row layout
#[derive(Debug, Clone)]
pub struct RowDecoder {
    arity: usize,
    channel_columns: Vec<usize>,
    indicator_columns: Vec<usize>,
    display_columns: Vec<Option<usize>>,
    controller_time_column: Option<usize>,
    mode_column: Option<usize>,
    substate_column: Option<usize>,
    message_column: Option<usize>,
}

impl RowDecoder {
    /// Build a decoder for the layout in `config`.
    ///
    /// The config is expected to have passed `AppConfig::validate`.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            arity: config.row_arity,
            channel_columns: config.channels.iter().map(|c| c.column).collect(),
            indicator_columns: config.indicators.iter().map(|i| i.column).collect(),
            display_columns: config
                .displays
                .iter()
                .map(|d| match d.source {
                    DisplaySource::Column { column } => Some(column),
                    DisplaySource::ChannelAverage { .. } => None,
                })
                .collect(),
            controller_time_column: config.status.controller_time,
            mode_column: config.status.mode,
            substate_column: config.status.substate,
            message_column: config.status.message,
        }
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn decode(&self, raw_row: &str) -> Result<Record, DecodeError> {
        // With a message column the last field takes the rest of the row,
        // commas included.
        let fields: Vec<&str> = if self.message_column.is_some() {
            raw_row.splitn(self.arity, ',').collect()
        } else {
            raw_row.split(',').collect()
        };
        if fields.len() != self.arity {
            return Err(DecodeError::Arity {
                expected: self.arity,
                found: fields.len(),
            });
        }

        let channels = self
            .channel_columns
            .iter()
            .map(|&column| number(&fields, column))
            .collect::<Result<Vec<_>, _>>()?;
        let indicators = self
            .indicator_columns
            .iter()
            .map(|&column| number(&fields, column))
            .collect::<Result<Vec<_>, _>>()?;
        let displays = self
            .display_columns
            .iter()
            .map(|&column| column.map(|c| number(&fields, c)).transpose())
            .collect::<Result<Vec<_>, _>>()?;

        let controller_time_ms = self
            .controller_time_column
            .map(|c| number(&fields, c))
            .transpose()?;
        let mode = match self.mode_column {
            Some(column) => {
                let code = number(&fields, column)?;
                let mode = integral(code).and_then(SoftwareMode::from_code);
                if mode.is_none() {
                    debug!("unknown software mode code {}", code);
                }
                mode
            }
            None => None,
        };
        let substate = match self.substate_column {
            Some(column) => {
                let code = number(&fields, column)?;
                let substate = integral(code).and_then(Substate::from_code);
                if substate.is_none() {
                    debug!("unknown substate code {}", code);
                }
                substate
            }
            None => None,
        };
        let message = self
            .message_column
            .map(|c| fields[c].trim())
            .filter(|m| !m.is_empty())
            .map(str::to_string);

        Ok(Record {
            channels,
            indicators,
            displays,
            status: StatusFields {
                controller_time_ms,
                mode,
                substate,
                message,
            },
        })
    }
}

fn number(fields: &[&str], column: usize) -> Result<f64, DecodeError> {
    let raw = fields[column].trim();
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(DecodeError::NonNumeric {
            column,
            value: raw.to_string(),
        }),
    }
}

/// Mode and substate codes are whole numbers; anything else is unknown
fn integral(code: f64) -> Option<i64> {
    (code.fract() == 0.0).then_some(code as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use raven_view_types::{ChannelConfig, DisplayConfig, IndicatorConfig, IndicatorRule, StatusColumns};

    fn small_config() -> AppConfig {
        AppConfig {
            row_arity: 5,
            channels: vec![
                ChannelConfig::new("a", "", 0, 10.0),
                ChannelConfig::new("b", "", 2, 10.0),
            ],
            indicators: vec![IndicatorConfig::new("valve", 1, IndicatorRule::NonZero)],
            displays: vec![
                DisplayConfig::new("avg_a", "", DisplaySource::ChannelAverage { channel: 0 }, 5.0),
                DisplayConfig::new("raw_d", "", DisplaySource::Column { column: 3 }, 5.0),
            ],
            status: StatusColumns::default(),
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_decodes_mapped_columns() {
        let decoder = RowDecoder::new(&small_config());
        let record = decoder.decode("1.5, 1 ,-2e1,7,ignored").unwrap();
        assert_eq!(record.channels, vec![1.5, -20.0]);
        assert_eq!(record.indicators, vec![1.0]);
        assert_eq!(record.displays, vec![None, Some(7.0)]);
        assert_eq!(record.status, StatusFields::default());
    }

    #[test]
    fn test_arity_mismatch() {
        let decoder = RowDecoder::new(&small_config());
        assert_eq!(
            decoder.decode("1,2,3,4"),
            Err(DecodeError::Arity {
                expected: 5,
                found: 4
            })
        );
        assert!(matches!(
            decoder.decode("1,2,3,4,5,6"),
            Err(DecodeError::Arity { found: 6, .. })
        ));
    }

    #[test]
    fn test_non_numeric_required_field() {
        let decoder = RowDecoder::new(&small_config());
        assert_eq!(
            decoder.decode("1,on,3,4,5"),
            Err(DecodeError::NonNumeric {
                column: 1,
                value: "on".to_string()
            })
        );
        // Unmapped columns may hold anything
        assert!(decoder.decode("1,0,3,4,text").is_ok());
    }

    #[test]
    fn test_non_finite_is_rejected() {
        let decoder = RowDecoder::new(&small_config());
        assert!(matches!(
            decoder.decode("NaN,0,3,4,5"),
            Err(DecodeError::NonNumeric { column: 0, .. })
        ));
        assert!(decoder.decode("1,0,inf,4,5").is_err());
    }

    #[test]
    fn test_raven_row_with_status() {
        let decoder = RowDecoder::new(&AppConfig::default());
        let row = "1701.2,d,5012,55.1,50.3,31.7,812.0,21.5,0,180.2,19.0,240.5,0,1,0,0,1,0,1,4,2,Valve open, igniter armed";
        let record = decoder.decode(row).unwrap();
        assert_eq!(record.channels[0], 31.7);
        assert_eq!(record.channels[5], 812.0);
        assert_eq!(record.indicators, vec![1.0, 1.0, 0.0]);
        assert_eq!(record.status.controller_time_ms, Some(5012.0));
        assert_eq!(record.status.mode, Some(SoftwareMode::Sequence));
        assert_eq!(record.status.substate, Some(Substate::ValveOn));
        assert_eq!(
            record.status.message.as_deref(),
            Some("Valve open, igniter armed")
        );
    }

    #[test]
    fn test_blank_message_and_unknown_codes() {
        let decoder = RowDecoder::new(&AppConfig::default());
        let row = "0,d,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,9,9, ";
        let record = decoder.decode(row).unwrap();
        assert_eq!(record.status.message, None);
        assert_eq!(record.status.mode, None);
        assert_eq!(record.status.substate, None);
    }

    #[test]
    fn test_fractional_codes_are_unknown() {
        let decoder = RowDecoder::new(&AppConfig::default());
        let row = "0,d,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,4.7,2.0,";
        let record = decoder.decode(row).unwrap();
        assert_eq!(record.status.mode, None);
        assert_eq!(record.status.substate, Some(Substate::ValveOn));
    }
}
