//! Source configuration types for all row sources.

pub mod log_file;

pub use log_file::LogFileSourceConfig;
pub use test::{TestMode, TestSourceConfig};

use serde::{Deserialize, Serialize};

/// Which row source feeds the pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source_type", rename_all = "snake_case")]
pub enum SourceConfig {
    /// Tail the append-only log written by the acquisition process
    LogFile(LogFileSourceConfig),
    /// Synthetic rows for demonstration and bench work
    Test(TestSourceConfig),
}

impl SourceConfig {
    /// Short identifier matching the serialized tag
    pub fn source_type(&self) -> &'static str {
        match self {
            SourceConfig::LogFile(_) => "log_file",
            SourceConfig::Test(_) => "test",
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig::LogFile(LogFileSourceConfig::default())
    }
}
