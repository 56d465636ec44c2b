//! Row source trait and related types

use crate::error::SourceError;

/// Metadata about a row source
#[derive(Debug, Clone)]
pub struct SourceMetadata {
    /// Unique identifier for this source type
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Description of where the rows come from
    pub description: String,
}

/// Trait for everything that yields raw log rows.
///
/// A source hands out each complete row exactly once. Rows are returned
/// without their line terminator.
pub trait RowSource: Send {
    /// Get metadata about this source
    fn metadata(&self) -> &SourceMetadata;

    /// Return every complete row that appeared since the previous call
    fn poll_rows(&mut self) -> Result<Vec<String>, SourceError>;

    /// Check whether the source could currently be read
    fn is_available(&self) -> bool {
        true
    }
}

/// Type-erased row source for dynamic dispatch
pub type BoxedRowSource = Box<dyn RowSource>;
