//! The seam to the rendering/interaction surface.
//!
//! The camera, controls, pointer dispatch, and GPU upload live outside
//! this engine. A renderer implements [`ViewerBridge`] and receives a
//! notification whenever something it displays has been replaced.

use solidform_geometry::MeshDescriptor;

use crate::material::MaterialAssignment;

/// Callbacks the external viewer implements.
pub trait ViewerBridge {
    /// A new descriptor replaced the live geometry; re-upload buffers.
    fn geometry_changed(&mut self, descriptor: &MeshDescriptor);

    /// The material assignment changed (hover, pointer-out, color edit).
    fn materials_changed(&mut self, materials: &MaterialAssignment);

    /// The undo control's enabled state flipped.
    fn can_undo_changed(&mut self, can_undo: bool);
}
