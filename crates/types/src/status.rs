//! Controller status columns and the firmware state enumerations.

use serde::{Deserialize, Serialize};

/// Software mode reported by the test-stand controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SoftwareMode {
    Init,
    Test,
    Wait,
    Heating,
    Sequence,
    Safe,
    Shutdown,
}

impl SoftwareMode {
    /// Map the firmware's numeric code onto a mode
    pub fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            0 => SoftwareMode::Init,
            1 => SoftwareMode::Test,
            2 => SoftwareMode::Wait,
            3 => SoftwareMode::Heating,
            4 => SoftwareMode::Sequence,
            5 => SoftwareMode::Safe,
            6 => SoftwareMode::Shutdown,
            _ => return None,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SoftwareMode::Init => "INIT",
            SoftwareMode::Test => "TEST",
            SoftwareMode::Wait => "WAIT",
            SoftwareMode::Heating => "HEATING",
            SoftwareMode::Sequence => "SEQUENCE",
            SoftwareMode::Safe => "SAFE",
            SoftwareMode::Shutdown => "SHUTDOWN",
        }
    }
}

/// Substate of the firing sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Substate {
    AllOff,
    IgnitOn,
    ValveOn,
    IgnitOff,
    ValveOff,
    Finished,
}

impl Substate {
    pub fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            0 => Substate::AllOff,
            1 => Substate::IgnitOn,
            2 => Substate::ValveOn,
            3 => Substate::IgnitOff,
            4 => Substate::ValveOff,
            5 => Substate::Finished,
            _ => return None,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Substate::AllOff => "ALL_OFF",
            Substate::IgnitOn => "IGNIT_ON",
            Substate::ValveOn => "VALVE_ON",
            Substate::IgnitOff => "IGNIT_OFF",
            Substate::ValveOff => "VALVE_OFF",
            Substate::Finished => "FINISHED",
        }
    }
}

/// Optional columns carrying controller status.
///
/// Any column left unset is simply not decoded. The message column, when
/// present, must be the last column of the row so that message text may
/// itself contain commas.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusColumns {
    #[serde(default)]
    pub controller_time: Option<usize>,
    #[serde(default)]
    pub mode: Option<usize>,
    #[serde(default)]
    pub substate: Option<usize>,
    #[serde(default)]
    pub message: Option<usize>,
}
