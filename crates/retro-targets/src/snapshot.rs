use std::sync::{Arc, RwLock};

use crate::pose::PoseResult;

/// The immutable, ordered result set of one processed frame.
pub type FrameSnapshot = Arc<[PoseResult]>;

/// Single-producer, any-reader holder for the current snapshot.
///
/// Publication swaps the inner `Arc`; each snapshot is frozen before
/// it goes in, so a reader either sees the previous frame's list or
/// the new one, never a list under construction. The lock is held
/// only for the pointer swap or clone.
pub struct SnapshotCell {
    current: RwLock<FrameSnapshot>,
}

impl SnapshotCell {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::from(Vec::new())),
        }
    }

    /// Replace the published snapshot.
    pub fn publish(&self, results: Vec<PoseResult>) {
        let snapshot: FrameSnapshot = Arc::from(results);
        match self.current.write() {
            Ok(mut guard) => *guard = snapshot,
            Err(poisoned) => *poisoned.into_inner() = snapshot,
        }
    }

    /// The most recently published snapshot. Empty before the first
    /// frame completes.
    pub fn load(&self) -> FrameSnapshot {
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }
}

impl Default for SnapshotCell {
    fn default() -> Self {
        Self::new()
    }
}
