//! The parameter store: the single authoritative owner of the current
//! snapshot and its edit history.
//!
//! Every write is validated and clamped here, so downstream consumers (the
//! geometry synthesizer, the material builder) never see a degenerate value.
//! Invalid input is rejected in place and logged; it is never an error the
//! caller has to handle.

use std::time::{Duration, Instant};

use crate::history::HistoryStack;
use crate::snapshot::{clamp_number, parse_hex_color, ParamKey, ParamValue, ParameterSnapshot};

/// Result of a [`ParameterStore::set`] call.
#[derive(Debug, Clone)]
pub struct SetOutcome {
    /// The snapshot after the call (unchanged if the edit was a no-op).
    pub snapshot: ParameterSnapshot,
    /// Whether a new history entry was recorded.
    pub changed: bool,
    /// Whether the recorded change affects the generated mesh.
    pub geometry_changed: bool,
}

/// Owns the current parameter snapshot and the undo history.
#[derive(Debug)]
pub struct ParameterStore {
    history: HistoryStack,
    guard_window: Duration,
    guard_armed: Option<Instant>,
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterStore {
    /// Creates a store holding the default snapshot, with a 100 ms restore
    /// guard window.
    #[must_use]
    pub fn new() -> Self {
        Self::with_guard_window(Duration::from_millis(100))
    }

    /// Creates a store with an explicit restore guard window.
    ///
    /// Tests pass `Duration::ZERO` to disable the guard, or a long window to
    /// exercise suppression deterministically.
    #[must_use]
    pub fn with_guard_window(guard_window: Duration) -> Self {
        Self {
            history: HistoryStack::default(),
            guard_window,
            guard_armed: None,
        }
    }

    /// Validates, clamps, and applies one parameter edit.
    ///
    /// Unknown names, non-finite numbers, and malformed colors are logged
    /// and ignored. An edit that leaves the field at its current value does
    /// not grow the history. Edits arriving inside the restore guard window
    /// are suppressed entirely (they are echoes of an undo/reset, not user
    /// intent).
    pub fn set(&mut self, name: &str, value: &ParamValue) -> SetOutcome {
        if self.restore_guard_active() {
            log::debug!("suppressed re-entrant set of '{name}' during restore window");
            return self.unchanged();
        }

        let Ok(key) = name.parse::<ParamKey>() else {
            log::warn!("ignoring unknown parameter '{name}'");
            return self.unchanged();
        };

        match (key, value) {
            (ParamKey::Color, ParamValue::Color(hex)) => self.set_color(hex),
            (key, ParamValue::Number(raw)) if key != ParamKey::Color => {
                self.set_number(key, *raw)
            }
            _ => {
                log::warn!("value kind mismatch for parameter '{key}'");
                self.unchanged()
            }
        }
    }

    fn set_number(&mut self, key: ParamKey, raw: f64) -> SetOutcome {
        if !raw.is_finite() {
            log::warn!("rejecting non-finite value for '{key}'");
            return self.unchanged();
        }
        #[allow(clippy::cast_possible_truncation)]
        let clamped = clamp_number(key, raw as f32);

        let current = self.history.current();
        // `number` is Some for every key except Color, which cannot reach
        // this path.
        if current.number(key) == Some(clamped) {
            return self.unchanged();
        }

        let next = current.with_number(key, clamped);
        self.history.push(next);
        SetOutcome {
            snapshot: self.history.current().clone(),
            changed: true,
            geometry_changed: key.is_geometry_affecting(),
        }
    }

    fn set_color(&mut self, hex: &str) -> SetOutcome {
        if let Err(err) = parse_hex_color(hex) {
            log::warn!("rejecting color edit: {err}");
            return self.unchanged();
        }
        if self.history.current().color == hex {
            return self.unchanged();
        }
        let next = self.history.current().with_color(hex.to_string());
        self.history.push(next);
        SetOutcome {
            snapshot: self.history.current().clone(),
            changed: true,
            geometry_changed: false,
        }
    }

    /// Steps back one history entry and arms the restore guard.
    ///
    /// A no-op at index 0.
    pub fn undo(&mut self) -> ParameterSnapshot {
        if self.history.step_back().is_some() {
            self.guard_armed = Some(Instant::now());
        }
        self.history.current().clone()
    }

    /// Collapses the history to the default snapshot and arms the restore
    /// guard.
    pub fn reset(&mut self) -> ParameterSnapshot {
        self.history.reset(ParameterSnapshot::default());
        self.guard_armed = Some(Instant::now());
        self.history.current().clone()
    }

    /// The snapshot at the cursor.
    #[must_use]
    pub fn current(&self) -> &ParameterSnapshot {
        self.history.current()
    }

    /// Whether the undo control should be enabled.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Number of history entries.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    fn unchanged(&self) -> SetOutcome {
        SetOutcome {
            snapshot: self.history.current().clone(),
            changed: false,
            geometry_changed: false,
        }
    }

    /// Checks the guard, clearing it once the window has elapsed.
    fn restore_guard_active(&mut self) -> bool {
        match self.guard_armed {
            Some(armed) if armed.elapsed() < self.guard_window => true,
            Some(_) => {
                self.guard_armed = None;
                false
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ParameterStore {
        // No guard: these tests edit immediately after undo/reset.
        ParameterStore::with_guard_window(Duration::ZERO)
    }

    #[test]
    fn test_set_records_clamped_value() {
        let mut store = store();
        let out = store.set("width", &ParamValue::Number(250.0));
        assert!(out.changed);
        assert!(out.geometry_changed);
        assert_eq!(out.snapshot.width, 100.0);
        assert_eq!(store.history_len(), 2);
    }

    #[test]
    fn test_wireframe_coerced_to_integer() {
        let mut store = store();
        let out = store.set("wireframe", &ParamValue::Number(2.7));
        assert_eq!(out.snapshot.wireframe_level, 3);
    }

    #[test]
    fn test_no_op_set_does_not_grow_history() {
        let mut store = store();
        store.set("width", &ParamValue::Number(20.0));
        let len = store.history_len();
        let out = store.set("width", &ParamValue::Number(20.0));
        assert!(!out.changed);
        assert_eq!(store.history_len(), len);
    }

    #[test]
    fn test_unknown_parameter_ignored() {
        let mut store = store();
        let out = store.set("bevel", &ParamValue::Number(1.0));
        assert!(!out.changed);
        assert_eq!(store.history_len(), 1);
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut store = store();
        store.set("height", &ParamValue::Number(30.0));
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let out = store.set("height", &ParamValue::Number(bad));
            assert!(!out.changed);
            assert_eq!(out.snapshot.height, 30.0);
        }
    }

    #[test]
    fn test_invalid_color_rejected() {
        let mut store = store();
        let out = store.set("color", &ParamValue::Color("#zzz".to_string()));
        assert!(!out.changed);
        assert_eq!(out.snapshot.color, "#D73D57");

        let out = store.set("color", &ParamValue::Color("#00ff00".to_string()));
        assert!(out.changed);
        assert!(!out.geometry_changed);
    }

    #[test]
    fn test_undo_round_trip() {
        let mut store = store();
        let before = store.current().clone();
        store.set("depth", &ParamValue::Number(42.0));
        let restored = store.undo();
        assert_eq!(restored, before);
        assert!(!store.can_undo());
    }

    #[test]
    fn test_undo_underflow_is_no_op() {
        let mut store = store();
        let snap = store.undo();
        assert_eq!(snap, ParameterSnapshot::default());
        assert!(!store.can_undo());
    }

    #[test]
    fn test_edit_after_undo_truncates_redo() {
        let mut store = store();
        store.set("width", &ParamValue::Number(20.0));
        store.set("width", &ParamValue::Number(30.0));
        store.undo();
        store.set("width", &ParamValue::Number(25.0));

        assert_eq!(store.history_len(), 3);
        assert_eq!(store.current().width, 25.0);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut store = store();
        store.set("width", &ParamValue::Number(20.0));
        store.set("radius", &ParamValue::Number(40.0));

        for _ in 0..2 {
            let snap = store.reset();
            assert_eq!(snap, ParameterSnapshot::default());
            assert_eq!(store.history_len(), 1);
            assert!(!store.can_undo());
        }
    }

    #[test]
    fn test_restore_guard_suppresses_echo_sets() {
        // A window long enough that the whole test runs inside it.
        let mut store = ParameterStore::with_guard_window(Duration::from_secs(60));
        store.set("width", &ParamValue::Number(20.0));
        store.undo();

        // Synchronized controls echoing the restored value must not record
        // a new edit.
        let out = store.set("width", &ParamValue::Number(20.0));
        assert!(!out.changed);
        assert_eq!(store.history_len(), 2);
        assert_eq!(store.current().width, 10.0);
    }

    #[test]
    fn test_zero_guard_window_never_suppresses() {
        let mut store = store();
        store.set("width", &ParamValue::Number(20.0));
        store.undo();
        let out = store.set("width", &ParamValue::Number(33.0));
        assert!(out.changed);
        assert_eq!(store.current().width, 33.0);
    }

    #[test]
    fn test_end_to_end_wireframe_undo() {
        let mut store = store();
        store.set("wireframe", &ParamValue::Number(3.0));
        assert_eq!(store.current().wireframe_level, 3);
        let restored = store.undo();
        assert_eq!(restored.wireframe_level, 0);
    }
}
