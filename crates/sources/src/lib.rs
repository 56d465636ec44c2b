//! raven-view-sources: Row source implementations for raven-view.

mod log_file;

pub use log_file::LogCursor;
pub use test::TestSource;

use raven_view_core::BoxedRowSource;
use raven_view_types::SourceConfig;

/// Create the row source described by `config`.
///
/// `row_arity` and `text_columns` describe the row layout so the test source
/// emits rows the decoder accepts.
pub fn create_source(config: &SourceConfig, row_arity: usize, text_columns: &[usize]) -> BoxedRowSource {
    match config {
        SourceConfig::LogFile(log_config) => Box::new(LogCursor::new(&log_config.path)),
        SourceConfig::Test(test_config) => Box::new(TestSource::synthetic(
            test_config.clone(),
            row_arity,
            text_columns,
        )),
    }
}
