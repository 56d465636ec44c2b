//! Headless renderers
//!
//! The graphical dashboard lives outside this crate. These renderers cover
//! running the pipeline from a terminal and piping snapshots to other tools.

mod json;
mod text;

pub use json::JsonRenderer;
pub use text::TextRenderer;

use raven_view_core::BoxedRenderer;
use serde::{Deserialize, Serialize};

/// Output format selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One summary line in the log whenever something changes
    #[default]
    Text,
    /// Every published snapshot as a JSON line on stdout
    Json,
}

/// Create the renderer for `format`
pub fn create_renderer(format: OutputFormat) -> BoxedRenderer {
    match format {
        OutputFormat::Text => Box::new(TextRenderer::new()),
        OutputFormat::Json => Box::new(JsonRenderer::new(std::io::stdout())),
    }
}
