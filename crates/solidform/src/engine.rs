//! Event orchestration: wires the parameter store, the synthesizer, and
//! the face highlighter together behind the bridge-facing surface.
//!
//! All mutation happens inside the synchronous event entry points below,
//! on the thread that drives rendering. There are no background workers
//! and no suspension points.

use std::time::Duration;

use glam::Vec3;
use solidform_core::{
    EngineOptions, ParamValue, ParameterSnapshot, ParameterStore, SetOutcome,
};
use solidform_geometry::{build, MeshDescriptor};

use crate::bridge::ViewerBridge;
use crate::face::classify;
use crate::highlight::FaceHighlightState;
use crate::history_controller::{HistoryController, HistoryOutcome};
use crate::material::{MaterialAssignment, MaterialParams};
use crate::mesh::SolidMesh;

/// The engine: one authoritative snapshot, one live mesh, read-only
/// consumers.
pub struct Engine {
    options: EngineOptions,
    history: HistoryController,
    mesh: SolidMesh,
    bridge: Option<Box<dyn ViewerBridge>>,
    last_can_undo: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine with default options, holding the default solid.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(EngineOptions::default())
    }

    /// Creates an engine with explicit options.
    #[must_use]
    pub fn with_options(options: EngineOptions) -> Self {
        let store =
            ParameterStore::with_guard_window(Duration::from_millis(options.restore_guard_ms));
        let history = HistoryController::new(store);
        let snapshot = history.store().current().clone();
        let descriptor = build(&snapshot, &options);
        let mesh = SolidMesh::new(descriptor, MaterialParams::from_snapshot(&snapshot));
        Self {
            options,
            history,
            mesh,
            bridge: None,
            last_can_undo: false,
        }
    }

    /// Attaches the rendering surface.
    pub fn set_bridge(&mut self, bridge: Box<dyn ViewerBridge>) {
        self.bridge = Some(bridge);
    }

    /// Handles one UI control change.
    ///
    /// Geometry-affecting edits rebuild the mesh (forcing the highlight
    /// idle); color edits refresh the materials in place.
    pub fn on_parameter_change(&mut self, name: &str, value: &ParamValue) -> SetOutcome {
        let outcome = self.history.store_mut().set(name, value);
        if outcome.changed {
            if outcome.geometry_changed {
                self.rebuild();
            } else {
                self.refresh_materials();
            }
            self.sync_can_undo();
        }
        outcome
    }

    /// Handles a pointer-move already resolved to object-local space.
    pub fn on_pointer_move(&mut self, local_point: Vec3) {
        let snapshot = self.history.store().current();
        let hit = classify(
            local_point,
            snapshot.radius_percent,
            self.options.near_sphere_threshold,
        );
        let state = FaceHighlightState::from(hit);
        let base = MaterialParams::from_snapshot(snapshot);
        let assignment = MaterialAssignment::for_state(state, base, &self.options);
        self.mesh.set_highlight(state, assignment);
        self.notify_materials();
    }

    /// Handles the pointer leaving the mesh.
    pub fn on_pointer_out(&mut self) {
        let base = MaterialParams::from_snapshot(self.history.store().current());
        self.mesh.clear_highlight(base);
        self.notify_materials();
    }

    /// Steps back one edit and re-synthesizes whatever the restored
    /// snapshot changes.
    pub fn undo(&mut self) -> HistoryOutcome {
        let before = self.history.store().current().clone();
        let outcome = self.history.undo();
        self.after_restore(&before);
        outcome
    }

    /// Returns to the default snapshot.
    pub fn reset(&mut self) -> HistoryOutcome {
        let before = self.history.store().current().clone();
        let outcome = self.history.reset();
        self.after_restore(&before);
        outcome
    }

    /// Whether the undo control should be enabled.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// The current parameter snapshot, for reflecting into UI controls.
    #[must_use]
    pub fn snapshot(&self) -> &ParameterSnapshot {
        self.history.store().current()
    }

    /// The live mesh descriptor.
    #[must_use]
    pub fn descriptor(&self) -> Option<&MeshDescriptor> {
        self.mesh.descriptor()
    }

    /// The live material assignment.
    #[must_use]
    pub fn materials(&self) -> &MaterialAssignment {
        self.mesh.material()
    }

    /// The current highlight state.
    #[must_use]
    pub fn highlight_state(&self) -> FaceHighlightState {
        self.mesh.highlight()
    }

    /// Engine tunables.
    #[must_use]
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Descriptors released over the engine's lifetime (swap accounting).
    #[must_use]
    pub fn released_geometries(&self) -> u64 {
        self.mesh.released_count()
    }

    fn after_restore(&mut self, before: &ParameterSnapshot) {
        if geometry_fields_differ(before, self.history.store().current()) {
            self.rebuild();
        } else {
            self.refresh_materials();
        }
        self.sync_can_undo();
    }

    /// Re-synthesizes the mesh from the current snapshot and swaps it in.
    fn rebuild(&mut self) {
        let snapshot = self.history.store().current().clone();
        let descriptor = build(&snapshot, &self.options);
        let base = MaterialParams::from_snapshot(&snapshot);
        self.mesh.install_geometry(descriptor, base);
        if let (Some(bridge), Some(descriptor)) = (self.bridge.as_mut(), self.mesh.descriptor()) {
            bridge.geometry_changed(descriptor);
        }
        self.notify_materials();
    }

    /// Rebuilds the material assignment for the current highlight state.
    fn refresh_materials(&mut self) {
        let base = MaterialParams::from_snapshot(self.history.store().current());
        let assignment = MaterialAssignment::for_state(self.mesh.highlight(), base, &self.options);
        self.mesh.set_material(assignment);
        self.notify_materials();
    }

    fn notify_materials(&mut self) {
        if let Some(bridge) = self.bridge.as_mut() {
            bridge.materials_changed(self.mesh.material());
        }
    }

    fn sync_can_undo(&mut self) {
        let can_undo = self.history.can_undo();
        if can_undo != self.last_can_undo {
            self.last_can_undo = can_undo;
            if let Some(bridge) = self.bridge.as_mut() {
                bridge.can_undo_changed(can_undo);
            }
        }
    }
}

/// Whether two snapshots differ in any field that changes the mesh.
fn geometry_fields_differ(a: &ParameterSnapshot, b: &ParameterSnapshot) -> bool {
    a.width != b.width
        || a.height != b.height
        || a.depth != b.depth
        || a.radius_percent != b.radius_percent
        || a.wireframe_level != b.wireframe_level
}
