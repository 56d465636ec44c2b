//! Hand-off point between the scheduler and readers of the latest snapshot

use std::sync::Arc;

use arc_swap::ArcSwap;
use raven_view_types::Snapshot;

/// Latest published snapshot.
///
/// Cloning the cell gives another handle onto the same slot; readers get an
/// `Arc` that stays valid however many ticks publish after it.
#[derive(Clone)]
pub struct SnapshotCell {
    inner: Arc<ArcSwap<Snapshot>>,
}

impl SnapshotCell {
    pub fn new(initial: Snapshot) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(initial)),
        }
    }

    pub fn load(&self) -> Arc<Snapshot> {
        self.inner.load_full()
    }

    pub fn store(&self, snapshot: Arc<Snapshot>) {
        self.inner.store(snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readers_keep_their_snapshot() {
        let cell = SnapshotCell::new(Snapshot::default());
        let reader = cell.clone();
        let before = reader.load();

        let mut next = Snapshot::default();
        next.status.messages.push("ready".to_string());
        cell.store(Arc::new(next));

        assert!(before.status.messages.is_empty());
        assert_eq!(reader.load().status.messages, vec!["ready"]);
    }
}
