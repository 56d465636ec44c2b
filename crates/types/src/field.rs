//! Column metadata for describing what each log column feeds

use serde::{Deserialize, Serialize};

/// Type of data a column contains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    /// Floating point measurement (pressure, temperature, force)
    Numerical,
    /// Numeric flag quantized into an indicator level
    Flag,
    /// Integer code mapped onto an enumeration
    Code,
    /// Free text
    Text,
}

/// Purpose/role of a column in the decoded record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldPurpose {
    /// Sample pushed into a channel window
    ChannelValue,
    /// Flag driving an indicator
    IndicatorFlag,
    /// Value shown directly on a summary display
    DisplayValue,
    /// Controller clock in milliseconds
    ControllerTime,
    /// Software mode code
    Mode,
    /// Firing sequence substate code
    Substate,
    /// Operator message text
    Message,
}

/// Metadata describing a single mapped column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMetadata {
    /// Zero-based column index in the row
    pub column: usize,
    /// Unique identifier for this field
    pub id: String,
    /// Unit of measurement, empty when unitless
    pub unit: String,
    /// Type of data this column contains
    pub field_type: FieldType,
    /// Purpose/role of this column
    pub purpose: FieldPurpose,
}

impl FieldMetadata {
    /// Create a new field metadata
    pub fn new(
        column: usize,
        id: impl Into<String>,
        unit: impl Into<String>,
        field_type: FieldType,
        purpose: FieldPurpose,
    ) -> Self {
        Self {
            column,
            id: id.into(),
            unit: unit.into(),
            field_type,
            purpose,
        }
    }
}
