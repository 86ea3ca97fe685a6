//! Low-level mesh builders: segmented box, rounded box, and UV sphere.
//!
//! All builders produce object-space geometry centered at the origin with
//! outward CCW winding and unit normals.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use crate::descriptor::{MeshDescriptor, SolidKind, Vertex};

/// Face basis table: (u axis, v axis, outward normal), chosen so that
/// `u.cross(v) == normal` and the emitted quads wind CCW seen from outside.
const FACE_AXES: [(Vec3, Vec3, Vec3); 6] = [
    (Vec3::Y, Vec3::Z, Vec3::X),
    (Vec3::Z, Vec3::Y, Vec3::NEG_X),
    (Vec3::Z, Vec3::X, Vec3::Y),
    (Vec3::X, Vec3::Z, Vec3::NEG_Y),
    (Vec3::X, Vec3::Y, Vec3::Z),
    (Vec3::Y, Vec3::X, Vec3::NEG_Z),
];

/// Builds an axis-aligned box with the given per-axis segment count.
#[must_use]
pub fn build_box(width: f32, height: f32, depth: f32, segments: u32) -> MeshDescriptor {
    let segments = segments.max(1);
    let half = Vec3::new(width, height, depth) * 0.5;

    let grid = segments + 1;
    let mut vertices = Vec::with_capacity(6 * (grid * grid) as usize);
    let mut indices = Vec::with_capacity(6 * (segments * segments) as usize * 6);

    for (axis_u, axis_v, normal) in FACE_AXES {
        grid_plane(&mut vertices, &mut indices, axis_u, axis_v, normal, half, segments);
    }

    MeshDescriptor {
        vertices,
        indices,
        segments,
        kind: SolidKind::Box,
    }
}

/// Builds a rounded box by displacing the vertices of a segmented box.
///
/// Each vertex is clamped to the inner box shrunk by `radius`; the clamp
/// offset, renormalized to length `radius`, restores the rounded surface
/// and supplies the normal. Duplicated edge vertices displace identically
/// (the mapping depends on position only), so faces stay watertight.
///
/// `radius` must not exceed half the smallest dimension; the parameter
/// store's clamping guarantees this.
#[must_use]
pub fn build_rounded_box(
    width: f32,
    height: f32,
    depth: f32,
    radius: f32,
    segments: u32,
) -> MeshDescriptor {
    let mut desc = build_box(width, height, depth, segments);
    let inner = (Vec3::new(width, height, depth) * 0.5 - Vec3::splat(radius)).max(Vec3::ZERO);

    for vertex in &mut desc.vertices {
        let p = Vec3::from_array(vertex.position);
        let clamped = p.clamp(-inner, inner);
        let offset = p - clamped;
        if offset.length_squared() > 1e-10 {
            let n = offset.normalize();
            vertex.position = (clamped + n * radius).to_array();
            vertex.normal = n.to_array();
        }
    }

    desc.kind = SolidKind::RoundedBox { radius };
    desc
}

/// Builds a UV sphere.
///
/// `segments` is the longitudinal count; the latitudinal count is half of
/// it. Pole rows collapse to a single point, with the degenerate triangles
/// skipped.
#[must_use]
pub fn build_sphere(radius: f32, segments: u32) -> MeshDescriptor {
    let width_segments = segments.max(3);
    let height_segments = (segments / 2).max(2);

    let stride = width_segments + 1;
    let mut vertices = Vec::with_capacity((stride * (height_segments + 1)) as usize);
    let mut indices = Vec::new();

    for iy in 0..=height_segments {
        #[allow(clippy::cast_precision_loss)]
        let v = iy as f32 / height_segments as f32;
        let phi = v * PI;
        for ix in 0..=width_segments {
            #[allow(clippy::cast_precision_loss)]
            let u = ix as f32 / width_segments as f32;
            let theta = u * TAU;
            let n = Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin());
            vertices.push(Vertex {
                position: (n * radius).to_array(),
                normal: n.to_array(),
                uv: [u, 1.0 - v],
            });
        }
    }

    for iy in 0..height_segments {
        for ix in 0..width_segments {
            let a = iy * stride + ix;
            let b = a + 1;
            let c = a + stride + 1;
            let d = a + stride;
            if iy != 0 {
                indices.extend_from_slice(&[a, b, c]);
            }
            if iy != height_segments - 1 {
                indices.extend_from_slice(&[a, c, d]);
            }
        }
    }

    MeshDescriptor {
        vertices,
        indices,
        segments: width_segments,
        kind: SolidKind::Sphere { radius },
    }
}

/// Emits one face of the box as a `segments` x `segments` quad grid.
fn grid_plane(
    vertices: &mut Vec<Vertex>,
    indices: &mut Vec<u32>,
    axis_u: Vec3,
    axis_v: Vec3,
    normal: Vec3,
    half: Vec3,
    segments: u32,
) {
    let half_u = axis_u.abs().dot(half);
    let half_v = axis_v.abs().dot(half);
    let half_w = normal.abs().dot(half);

    #[allow(clippy::cast_possible_truncation)]
    let base = vertices.len() as u32;

    for iy in 0..=segments {
        #[allow(clippy::cast_precision_loss)]
        let fv = iy as f32 / segments as f32;
        for ix in 0..=segments {
            #[allow(clippy::cast_precision_loss)]
            let fu = ix as f32 / segments as f32;
            let position = axis_u * ((fu - 0.5) * 2.0 * half_u)
                + axis_v * ((fv - 0.5) * 2.0 * half_v)
                + normal * half_w;
            vertices.push(Vertex {
                position: position.to_array(),
                normal: normal.to_array(),
                uv: [fu, 1.0 - fv],
            });
        }
    }

    let stride = segments + 1;
    for iy in 0..segments {
        for ix in 0..segments {
            let a = base + iy * stride + ix;
            let b = a + 1;
            let c = a + stride + 1;
            let d = a + stride;
            indices.extend_from_slice(&[a, b, c, a, c, d]);
        }
    }
}
