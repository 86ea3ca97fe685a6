//! Hover highlight state.

use crate::face::{FaceHit, FaceId};

/// What the pointer is currently highlighting.
///
/// The state is owned by the mesh wrapper and replaced atomically together
/// with its material assignment. The only exits from the non-idle states
/// are pointer-out and a geometry rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaceHighlightState {
    /// Nothing hovered; the single base material applies.
    #[default]
    Idle,
    /// One face hovered; a six-material array applies.
    Hovering(FaceId),
    /// Near-sphere case; one emissive material covers the object.
    WholeSurface,
}

impl FaceHighlightState {
    /// Whether no highlight is active.
    #[must_use]
    pub fn is_idle(self) -> bool {
        self == Self::Idle
    }
}

impl From<FaceHit> for FaceHighlightState {
    fn from(hit: FaceHit) -> Self {
        match hit {
            FaceHit::Face(face) => Self::Hovering(face),
            FaceHit::WholeSurface => Self::WholeSurface,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hit() {
        assert_eq!(
            FaceHighlightState::from(FaceHit::Face(FaceId::NegZ)),
            FaceHighlightState::Hovering(FaceId::NegZ)
        );
        assert_eq!(
            FaceHighlightState::from(FaceHit::WholeSurface),
            FaceHighlightState::WholeSurface
        );
        assert!(FaceHighlightState::default().is_idle());
    }
}
