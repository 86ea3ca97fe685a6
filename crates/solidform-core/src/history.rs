//! Edit history: an append-only snapshot vector with a cursor.
//!
//! A fresh edit truncates everything after the cursor, so there is no
//! branching redo. The cursor is always a valid index into the entries.

use crate::snapshot::ParameterSnapshot;

/// Ordered sequence of snapshots plus the current position.
#[derive(Debug, Clone)]
pub struct HistoryStack {
    entries: Vec<ParameterSnapshot>,
    cursor: usize,
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self::new(ParameterSnapshot::default())
    }
}

impl HistoryStack {
    /// Creates a history containing only `initial` at index 0.
    #[must_use]
    pub fn new(initial: ParameterSnapshot) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    /// Appends a snapshot after the cursor, dropping any redo tail.
    pub fn push(&mut self, snapshot: ParameterSnapshot) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(snapshot);
        self.cursor = self.entries.len() - 1;
    }

    /// Steps the cursor back one entry.
    ///
    /// Returns `None` (and leaves the cursor alone) when already at index 0.
    pub fn step_back(&mut self) -> Option<&ParameterSnapshot> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// The snapshot at the cursor.
    #[must_use]
    pub fn current(&self) -> &ParameterSnapshot {
        &self.entries[self.cursor]
    }

    /// Collapses the history to a single entry at index 0.
    pub fn reset(&mut self, snapshot: ParameterSnapshot) {
        self.entries.clear();
        self.entries.push(snapshot);
        self.cursor = 0;
    }

    /// Whether there is anything to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// A history always holds at least the initial entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Current cursor position.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_width(width: f32) -> ParameterSnapshot {
        ParameterSnapshot {
            width,
            ..ParameterSnapshot::default()
        }
    }

    #[test]
    fn test_push_advances_cursor() {
        let mut history = HistoryStack::default();
        history.push(with_width(20.0));
        history.push(with_width(30.0));

        assert_eq!(history.len(), 3);
        assert_eq!(history.cursor(), 2);
        assert_eq!(history.current().width, 30.0);
        assert!(history.can_undo());
    }

    #[test]
    fn test_step_back_and_underflow() {
        let mut history = HistoryStack::default();
        history.push(with_width(20.0));

        assert_eq!(history.step_back().unwrap().width, 10.0);
        assert!(!history.can_undo());
        // Underflow is a no-op, not an error.
        assert!(history.step_back().is_none());
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn test_push_truncates_redo_tail() {
        let mut history = HistoryStack::default();
        history.push(with_width(20.0));
        history.push(with_width(30.0));
        history.step_back();
        history.push(with_width(25.0));

        assert_eq!(history.len(), 3);
        assert_eq!(history.current().width, 25.0);
        // The 30.0 entry is gone.
        assert_eq!(history.cursor(), 2);
    }

    #[test]
    fn test_reset_collapses_to_one_entry() {
        let mut history = HistoryStack::default();
        history.push(with_width(20.0));
        history.push(with_width(30.0));
        history.reset(ParameterSnapshot::default());

        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), 0);
        assert_eq!(*history.current(), ParameterSnapshot::default());
        assert!(!history.can_undo());
    }
}
