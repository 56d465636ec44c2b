//! raven-view: live data pipeline for the RAVEN test-stand dashboard
//!
//! This library provides the layer between the acquisition log and whatever
//! draws the dashboard:
//! - Incremental tailing of the append-only log
//! - Row decoding against a fixed column layout
//! - Per-channel sample windows with rolling averages
//! - Indicator and display state derived from thresholds
//! - A fixed-interval scheduler publishing immutable snapshots

pub mod config;
pub mod core;
pub mod renderers;

// Re-export commonly used types
pub use config::AppConfig;
pub use self::core::{Pipeline, Scheduler, SnapshotCell, TickOutcome};
pub use raven_view_sources as sources;
pub use raven_view_types::Snapshot;
