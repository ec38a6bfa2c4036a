//! Bounded linear undo/redo history.

/// Default number of snapshots kept.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Linear list of snapshots with a cursor.
///
/// `entries[index]` is always the current state. Committing truncates the redo
/// branch; once more than `limit` entries exist the oldest is evicted.
#[derive(Debug, Clone, PartialEq)]
pub struct History<T> {
    entries: Vec<T>,
    index: usize,
    limit: usize,
}

impl<T> History<T> {
    /// Start a history whose base state is `initial`. A limit of 0 is raised to 1.
    pub fn new(initial: T, limit: usize) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
            limit: limit.max(1),
        }
    }

    /// Record a new current state.
    pub fn commit(&mut self, snapshot: T) {
        self.entries.truncate(self.index + 1);
        self.entries.push(snapshot);
        self.index = self.entries.len() - 1;

        // Limit history size
        while self.entries.len() > self.limit {
            self.entries.remove(0);
            self.index = self.index.saturating_sub(1);
        }
        log::debug!("History commit: {} entries, index {}", self.entries.len(), self.index);
    }

    /// Step back. Returns the state to restore, or `None` at the oldest entry.
    pub fn undo(&mut self) -> Option<&T> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        self.entries.get(self.index)
    }

    /// Step forward. Returns the state to restore, or `None` at the newest entry.
    pub fn redo(&mut self) -> Option<&T> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        self.entries.get(self.index)
    }

    pub fn current(&self) -> Option<&T> {
        self.entries.get(self.index)
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Drop every entry and start over from `initial`.
    pub fn reset(&mut self, initial: T) {
        self.entries.clear();
        self.entries.push(initial);
        self.index = 0;
    }
}
