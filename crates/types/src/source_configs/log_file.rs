//! Log file source configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_path() -> PathBuf {
    PathBuf::from("data.csv")
}

/// Configuration for tailing the acquisition log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogFileSourceConfig {
    /// Path of the append-only CSV log
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl Default for LogFileSourceConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
