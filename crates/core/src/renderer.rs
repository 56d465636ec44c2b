//! Renderer trait

use anyhow::Result;
use raven_view_types::Snapshot;

/// Trait for all renderers
///
/// Renderers consume the snapshot published at the end of every tick. They
/// only ever see an immutable snapshot, never the live pipeline state.
pub trait Renderer: Send {
    /// Unique identifier for this renderer type
    fn id(&self) -> &str;

    /// Draw (or otherwise emit) one snapshot
    fn render(&mut self, snapshot: &Snapshot) -> Result<()>;

    /// Called once after the scheduler has stopped
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Type-erased renderer for dynamic dispatch
pub type BoxedRenderer = Box<dyn Renderer>;
