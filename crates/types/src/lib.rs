//! raven-view-types: Shared data types for the raven-view dashboard.
//!
//! This crate contains pure data types (configs, levels, status codes,
//! snapshots, column metadata) shared across all raven-view crates. None of
//! them carry behaviour beyond small conversions, so every other crate can
//! depend on it.

pub mod channel;
pub mod display;
pub mod field;
pub mod indicator;
pub mod snapshot;
pub mod source_configs;
pub mod status;

// Re-export commonly used types at the crate root for convenience
pub use channel::ChannelConfig;
pub use display::{DisplayConfig, DisplaySource, VisualState};
pub use field::{FieldMetadata, FieldPurpose, FieldType};
pub use indicator::{IndicatorConfig, IndicatorLevel, IndicatorRule};
pub use snapshot::{
    ChannelSnapshot, DisplaySnapshot, IndicatorSnapshot, Snapshot, StatusSnapshot,
};
pub use source_configs::{LogFileSourceConfig, SourceConfig, TestMode, TestSourceConfig};
pub use status::{SoftwareMode, StatusColumns, Substate};
