//! Error taxonomy of the pipeline.
//!
//! Only `ConfigError` is fatal, and only before the scheduler starts. The
//! other two are recovered where they occur.

use std::path::PathBuf;
use thiserror::Error;

/// The row source could not be read this tick
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("log {} unavailable: {source}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A row that does not match the configured layout
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("expected {expected} fields, found {found}")]
    Arity { expected: usize, found: usize },
    #[error("column {column} is not a finite number: {value:?}")]
    NonNumeric { column: usize, value: String },
}

/// Invalid configuration, detected at start-up
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} references column {column}, but rows only have {arity} columns")]
    ColumnOutOfRange {
        field: String,
        column: usize,
        arity: usize,
    },
    #[error("display {display} references channel {channel}, but only {channels} channels are configured")]
    MissingChannel {
        display: String,
        channel: usize,
        channels: usize,
    },
    #[error("message column {column} must be the last column ({last})")]
    MessageColumnNotLast { column: usize, last: usize },
    #[error("{field} has a non-finite threshold")]
    NonFiniteThreshold { field: String },
    #[error("duplicate {kind} name {name:?}")]
    DuplicateName { kind: &'static str, name: String },
    #[error("window capacity must be at least one sample")]
    ZeroWindow,
    #[error("tick interval must be greater than zero")]
    ZeroInterval,
}
