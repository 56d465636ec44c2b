//! raven-view-core: Core traits and error taxonomy for raven-view.
//!
//! This crate contains the seams between the pipeline and the outside world
//! (RowSource, Renderer), the error types every layer reports with, and the
//! shared default constants.

pub mod constants;
mod error;
mod renderer;
mod row_source;

pub use constants::{
    DEFAULT_MESSAGE_LOG_CAPACITY, DEFAULT_TICK_INTERVAL, DEFAULT_TICK_MS,
    DEFAULT_WINDOW_CAPACITY,
};
pub use error::{ConfigError, DecodeError, SourceError};
pub use renderer::{BoxedRenderer, Renderer};
pub use row_source::{BoxedRowSource, RowSource, SourceMetadata};

// Re-export types used in trait signatures for convenience
pub use raven_view_types::Snapshot;
