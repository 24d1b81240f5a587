use std::collections::VecDeque;

use crate::raster::Snapshot;

/// Maximum number of snapshots retained on the undo stack. The top entry
/// is always the current state, so after saturation capacity - 1 undo
/// steps remain reachable.
pub const HISTORY_CAPACITY: usize = 20;

/// Bounded linear undo/redo log of full-canvas snapshots.
///
/// The undo stack always holds at least one entry (the state currently
/// displayed); undoing past the bottom is a harmless no-op, not an
/// error. Any fresh commit discards pending redo states.
pub struct SnapshotHistory {
    undo_stack: VecDeque<Snapshot>,
    redo_stack: Vec<Snapshot>,
}

impl SnapshotHistory {
    /// Seed the history with the initial (blank) canvas state
    pub fn new(initial: Snapshot) -> Self {
        let mut undo_stack = VecDeque::with_capacity(HISTORY_CAPACITY + 1);
        undo_stack.push_back(initial);
        Self {
            undo_stack,
            redo_stack: Vec::new(),
        }
    }

    /// Record a committed edit. Evicts the oldest snapshot beyond
    /// capacity and invalidates any pending redos.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.undo_stack.push_back(snapshot);
        if self.undo_stack.len() > HISTORY_CAPACITY {
            self.undo_stack.pop_front();
        }
        self.redo_stack.clear();
    }

    /// Step one commit back. Returns the snapshot to display, or `None`
    /// when only the bottom state remains. The popped (most recent)
    /// state becomes available for redo.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if self.undo_stack.len() <= 1 {
            return None;
        }
        let current = self.undo_stack.pop_back()?;
        self.redo_stack.push(current);
        self.undo_stack.back()
    }

    /// Step one undone commit forward. Returns the snapshot to display,
    /// or `None` when there is nothing to redo.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push_back(next);
        self.undo_stack.back()
    }

    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}
