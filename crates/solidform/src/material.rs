//! Material parameters and the per-face material assignment.

use glam::Vec3;
use solidform_core::{parse_hex_color, EngineOptions, ParameterSnapshot};

use crate::face::FaceId;
use crate::highlight::FaceHighlightState;

/// Surface roughness shared by base and highlight materials.
pub const DEFAULT_ROUGHNESS: f32 = 0.4;
/// Surface metalness shared by base and highlight materials.
pub const DEFAULT_METALNESS: f32 = 0.1;

/// Parameters of one surface material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialParams {
    pub color: Vec3,
    pub roughness: f32,
    pub metalness: f32,
    pub opacity: f32,
    pub emissive: Vec3,
    pub emissive_intensity: f32,
    pub wireframe: bool,
}

impl MaterialParams {
    /// Builds the base material for a snapshot.
    ///
    /// The store guarantees the stored color is valid hex; a mid-gray
    /// fallback guards the impossible case anyway.
    #[must_use]
    pub fn from_snapshot(snapshot: &ParameterSnapshot) -> Self {
        let color = parse_hex_color(&snapshot.color).unwrap_or(Vec3::splat(0.5));
        Self {
            color,
            roughness: DEFAULT_ROUGHNESS,
            metalness: DEFAULT_METALNESS,
            opacity: 1.0,
            emissive: Vec3::ZERO,
            emissive_intensity: 0.0,
            wireframe: snapshot.wireframe_enabled(),
        }
    }

    /// A clone of this material with the hover color and emissive applied.
    #[must_use]
    pub fn highlighted(self, highlight_color: Vec3, emissive_intensity: f32) -> Self {
        Self {
            color: highlight_color,
            emissive: highlight_color,
            emissive_intensity,
            ..self
        }
    }
}

/// What the live mesh currently carries: one material, or six.
#[derive(Debug, Clone, PartialEq)]
pub enum MaterialAssignment {
    /// Single base material (idle, or the whole-surface emissive).
    Single(MaterialParams),
    /// One material per canonical face id; exactly one entry is highlighted.
    PerFace([MaterialParams; 6]),
}

impl MaterialAssignment {
    /// Builds the assignment matching a highlight state.
    ///
    /// - `Idle`: the base material alone.
    /// - `Hovering(face)`: six clones of the base with the hovered entry
    ///   recolored and made emissive.
    /// - `WholeSurface`: one emissive material covering the object.
    #[must_use]
    pub fn for_state(
        state: FaceHighlightState,
        base: MaterialParams,
        options: &EngineOptions,
    ) -> Self {
        match state {
            FaceHighlightState::Idle => Self::Single(base),
            FaceHighlightState::Hovering(face) => {
                let mut faces = [base; 6];
                faces[face.index()] = base.highlighted(
                    options.highlight_color,
                    options.highlight_emissive_intensity,
                );
                Self::PerFace(faces)
            }
            FaceHighlightState::WholeSurface => Self::Single(base.highlighted(
                options.highlight_color,
                options.highlight_emissive_intensity,
            )),
        }
    }

    /// The material shown on a given face under this assignment.
    #[must_use]
    pub fn face_material(&self, face: FaceId) -> &MaterialParams {
        match self {
            Self::Single(mat) => mat,
            Self::PerFace(faces) => &faces[face.index()],
        }
    }
}
