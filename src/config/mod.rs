//! Application configuration

mod defaults;
mod settings;

pub use defaults::{raven_channels, raven_displays, raven_indicators, raven_status_columns, RAVEN_ROW_ARITY};
pub use settings::AppConfig;
