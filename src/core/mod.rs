//! Pipeline state: buffers, decoding, indicator/display logic and the scheduler

mod channel_buffer;
mod decoder;
mod display;
mod indicator;
mod pipeline;
mod published;
mod scheduler;
mod status;

pub use channel_buffer::ChannelBuffer;
pub use decoder::{Record, RowDecoder, StatusFields};
pub use display::DisplayState;
pub use indicator::{level_for, IndicatorState};
pub use pipeline::{Pipeline, RowCounts};
pub use published::SnapshotCell;
pub use scheduler::{Scheduler, SchedulerState, TickOutcome, TickStats};
pub use status::StatusState;

// Re-export the seams so callers need only this module
pub use raven_view_core::{BoxedRenderer, BoxedRowSource, Renderer, RowSource};
