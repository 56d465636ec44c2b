//! Shared constants for the application

use std::time::Duration;

/// Tick interval of the scheduler (16ms, a little faster than the data rate)
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(DEFAULT_TICK_MS);

/// Tick interval in milliseconds (useful for config defaults)
pub const DEFAULT_TICK_MS: u64 = 16;

/// Samples kept per channel. At the default tick rate this covers roughly ten seconds.
pub const DEFAULT_WINDOW_CAPACITY: usize = 625;

/// Operator messages retained in the status block
pub const DEFAULT_MESSAGE_LOG_CAPACITY: usize = 8;
