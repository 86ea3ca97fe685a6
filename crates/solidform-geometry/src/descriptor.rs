//! Mesh descriptors: the CPU-side buffers handed to the render bridge.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// One interleaved mesh vertex, laid out for direct GPU upload.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Which solid representation a descriptor holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolidKind {
    /// Axis-aligned box (no rounding).
    Box,
    /// Box with rounded edges of the given absolute radius.
    RoundedBox { radius: f32 },
    /// Near-sphere display substitute of the given radius.
    Sphere { radius: f32 },
}

/// Vertex/index buffers for one generated solid, plus the segment count
/// used to build them.
///
/// A descriptor is exclusively owned by the live mesh wrapper; it is
/// superseded (dropped first, then replaced) on every geometry-affecting
/// parameter change.
#[derive(Debug, Clone)]
pub struct MeshDescriptor {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    /// Per-axis segment count the active policy selected.
    pub segments: u32,
    pub kind: SolidKind,
}

impl MeshDescriptor {
    /// Number of vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    #[must_use]
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// Raw vertex bytes for buffer upload.
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw index bytes for buffer upload.
    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Axis-aligned bounding box of the vertex positions.
    ///
    /// Returns `None` for an empty descriptor.
    #[must_use]
    pub fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
        if self.vertices.is_empty() {
            return None;
        }
        let mut min = Vec3::splat(f32::MAX);
        let mut max = Vec3::splat(f32::MIN);
        for v in &self.vertices {
            let p = Vec3::from_array(v.position);
            min = min.min(p);
            max = max.max(p);
        }
        Some((min, max))
    }
}
