//! Bounded undo stack of template snapshots

use std::collections::VecDeque;
use std::fmt;

use crate::consts::DEFAULT_CHECKPOINT_DEPTH;

/// Snapshots taken before destructive edits, newest at the back.
///
/// Holds at most `max_depth` snapshots; pushing beyond that evicts the
/// oldest one.
#[derive(Clone)]
pub struct CheckpointStack<T> {
    snapshots: VecDeque<T>,
    max_depth: usize,
}

impl<T> fmt::Debug for CheckpointStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckpointStack")
            .field("depth", &self.snapshots.len())
            .field("max_depth", &self.max_depth)
            .finish()
    }
}

impl<T> Default for CheckpointStack<T> {
    fn default() -> Self {
        Self::new(DEFAULT_CHECKPOINT_DEPTH)
    }
}

impl<T> CheckpointStack<T> {
    /// A depth of 0 is treated as 1
    pub fn new(max_depth: usize) -> Self {
        Self {
            snapshots: VecDeque::new(),
            max_depth: max_depth.max(1),
        }
    }

    pub fn push(&mut self, snapshot: T) {
        if self.snapshots.len() == self.max_depth {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(snapshot);
    }

    /// Most recent snapshot, or `None` when there is nothing to undo
    pub fn pop(&mut self) -> Option<T> {
        self.snapshots.pop_back()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}
