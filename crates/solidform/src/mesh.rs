//! The live mesh wrapper: exclusive owner of the current descriptor,
//! material assignment, and highlight state.
//!
//! Exactly one descriptor and one material assignment are live at any
//! time. A swap releases the previous descriptor before installing the
//! next, and any geometry swap forces the highlight back to idle so stale
//! per-face state cannot survive a rebuild.

use solidform_geometry::MeshDescriptor;

use crate::highlight::FaceHighlightState;
use crate::material::{MaterialAssignment, MaterialParams};

/// The single live mesh instance the bridge renders.
#[derive(Debug)]
pub struct SolidMesh {
    descriptor: Option<MeshDescriptor>,
    material: MaterialAssignment,
    highlight: FaceHighlightState,
    released: u64,
}

impl SolidMesh {
    /// Creates the mesh with its initial geometry and base material.
    #[must_use]
    pub fn new(descriptor: MeshDescriptor, base: MaterialParams) -> Self {
        Self {
            descriptor: Some(descriptor),
            material: MaterialAssignment::Single(base),
            highlight: FaceHighlightState::Idle,
            released: 0,
        }
    }

    /// Replaces the geometry, releasing the old descriptor first.
    ///
    /// Resets the highlight to idle and the materials to the given base:
    /// per-face state from before the swap would be stale.
    pub fn install_geometry(&mut self, next: MeshDescriptor, base: MaterialParams) {
        if let Some(old) = self.descriptor.take() {
            drop(old);
            self.released += 1;
        }
        self.descriptor = Some(next);
        self.highlight = FaceHighlightState::Idle;
        self.material = MaterialAssignment::Single(base);
    }

    /// Atomically replaces the highlight state and its material assignment.
    pub fn set_highlight(&mut self, state: FaceHighlightState, assignment: MaterialAssignment) {
        self.highlight = state;
        self.material = assignment;
    }

    /// Collapses back to the single base material (pointer-out path).
    pub fn clear_highlight(&mut self, base: MaterialParams) {
        self.highlight = FaceHighlightState::Idle;
        self.material = MaterialAssignment::Single(base);
    }

    /// Replaces the material assignment without touching the highlight
    /// state (color edits while hovering).
    pub fn set_material(&mut self, assignment: MaterialAssignment) {
        self.material = assignment;
    }

    /// The live descriptor.
    #[must_use]
    pub fn descriptor(&self) -> Option<&MeshDescriptor> {
        self.descriptor.as_ref()
    }

    /// The live material assignment.
    #[must_use]
    pub fn material(&self) -> &MaterialAssignment {
        &self.material
    }

    /// The current highlight state.
    #[must_use]
    pub fn highlight(&self) -> FaceHighlightState {
        self.highlight
    }

    /// Number of descriptors released over this mesh's lifetime.
    ///
    /// Swap accounting: after `n` rebuilds this is exactly `n`, proving no
    /// descriptor was ever doubly live or leaked past its replacement.
    #[must_use]
    pub fn released_count(&self) -> u64 {
        self.released
    }
}
