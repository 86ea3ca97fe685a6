//! Thin undo/reset orchestration over the parameter store.

use solidform_core::{ParameterSnapshot, ParameterStore};

/// What the UI needs back from an undo or reset.
#[derive(Debug, Clone)]
pub struct HistoryOutcome {
    /// The snapshot now at the history cursor.
    pub snapshot: ParameterSnapshot,
    /// Whether the undo control should stay enabled.
    pub can_undo: bool,
}

/// Exposes `undo`/`reset` to the UI layer, delegating to the store.
///
/// Owns the store on behalf of the engine; no state of its own.
#[derive(Debug, Default)]
pub struct HistoryController {
    store: ParameterStore,
}

impl HistoryController {
    /// Wraps a store.
    #[must_use]
    pub fn new(store: ParameterStore) -> Self {
        Self { store }
    }

    /// Steps back one edit. A no-op at the start of history.
    pub fn undo(&mut self) -> HistoryOutcome {
        let snapshot = self.store.undo();
        HistoryOutcome {
            snapshot,
            can_undo: self.store.can_undo(),
        }
    }

    /// Collapses the history to the default snapshot.
    pub fn reset(&mut self) -> HistoryOutcome {
        let snapshot = self.store.reset();
        HistoryOutcome {
            snapshot,
            can_undo: self.store.can_undo(),
        }
    }

    /// Whether the undo control should be enabled.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.store.can_undo()
    }

    /// Read access to the store.
    #[must_use]
    pub fn store(&self) -> &ParameterStore {
        &self.store
    }

    /// Write access to the store (parameter-change path).
    pub fn store_mut(&mut self) -> &mut ParameterStore {
        &mut self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solidform_core::ParamValue;
    use std::time::Duration;

    #[test]
    fn test_undo_outcome() {
        let mut controller =
            HistoryController::new(ParameterStore::with_guard_window(Duration::ZERO));
        controller
            .store_mut()
            .set("width", &ParamValue::Number(20.0));
        controller
            .store_mut()
            .set("width", &ParamValue::Number(30.0));

        let out = controller.undo();
        assert_eq!(out.snapshot.width, 20.0);
        assert!(out.can_undo);

        let out = controller.undo();
        assert_eq!(out.snapshot.width, 10.0);
        assert!(!out.can_undo);
    }

    #[test]
    fn test_reset_outcome() {
        let mut controller =
            HistoryController::new(ParameterStore::with_guard_window(Duration::ZERO));
        controller
            .store_mut()
            .set("depth", &ParamValue::Number(77.0));

        let out = controller.reset();
        assert_eq!(out.snapshot, ParameterSnapshot::default());
        assert!(!out.can_undo);
    }
}
