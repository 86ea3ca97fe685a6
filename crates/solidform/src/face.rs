//! Face classification for pointer hover.
//!
//! A pointer intersection arrives already in object-local space; the face
//! under the cursor is the one whose axis dominates the point. Once the
//! rounding is high enough that discrete faces stop being meaningful, the
//! whole surface is treated as a single highlightable region.

use glam::Vec3;

/// One of the six canonical cube faces.
///
/// The discriminants are the canonical face ids used by the material array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceId {
    PosX = 0,
    NegX = 1,
    PosY = 2,
    NegY = 3,
    PosZ = 4,
    NegZ = 5,
}

impl FaceId {
    /// All six faces, in canonical id order.
    pub const ALL: [Self; 6] = [
        Self::PosX,
        Self::NegX,
        Self::PosY,
        Self::NegY,
        Self::PosZ,
        Self::NegZ,
    ];

    /// Canonical id, `0..=5`.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Outward normal of this face.
    #[must_use]
    pub fn normal(self) -> Vec3 {
        match self {
            Self::PosX => Vec3::X,
            Self::NegX => Vec3::NEG_X,
            Self::PosY => Vec3::Y,
            Self::NegY => Vec3::NEG_Y,
            Self::PosZ => Vec3::Z,
            Self::NegZ => Vec3::NEG_Z,
        }
    }
}

/// Result of classifying a pointer intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceHit {
    /// One discrete face.
    Face(FaceId),
    /// Near-sphere case: the entire surface is one region.
    WholeSurface,
}

/// Classifies a local-space intersection point against the current solid.
///
/// At or above the near-sphere threshold the hit is [`FaceHit::WholeSurface`];
/// otherwise the dominant axis of the point picks the face, with ties
/// resolved in X, Y, Z order.
#[must_use]
pub fn classify(local_point: Vec3, radius_percent: f32, near_sphere_threshold: f32) -> FaceHit {
    if radius_percent >= near_sphere_threshold {
        return FaceHit::WholeSurface;
    }

    let a = local_point.abs();
    let face = if a.x >= a.y && a.x >= a.z {
        if local_point.x > 0.0 {
            FaceId::PosX
        } else {
            FaceId::NegX
        }
    } else if a.y >= a.x && a.y >= a.z {
        if local_point.y > 0.0 {
            FaceId::PosY
        } else {
            FaceId::NegY
        }
    } else if local_point.z > 0.0 {
        FaceId::PosZ
    } else {
        FaceId::NegZ
    };
    FaceHit::Face(face)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_canonical_ids() {
        assert_eq!(FaceId::PosX.index(), 0);
        assert_eq!(FaceId::NegX.index(), 1);
        assert_eq!(FaceId::PosY.index(), 2);
        assert_eq!(FaceId::NegY.index(), 3);
        assert_eq!(FaceId::PosZ.index(), 4);
        assert_eq!(FaceId::NegZ.index(), 5);
    }

    #[test]
    fn test_classify_reference_points() {
        // Points on a 10x10x10 box.
        assert_eq!(
            classify(Vec3::new(6.0, 1.0, 1.0), 0.0, 90.0),
            FaceHit::Face(FaceId::PosX)
        );
        assert_eq!(
            classify(Vec3::new(1.0, 1.0, -6.0), 0.0, 90.0),
            FaceHit::Face(FaceId::NegZ)
        );
        assert_eq!(
            classify(Vec3::new(-1.0, 5.5, 2.0), 0.0, 90.0),
            FaceHit::Face(FaceId::PosY)
        );
        assert_eq!(
            classify(Vec3::new(0.0, -4.0, 1.0), 0.0, 90.0),
            FaceHit::Face(FaceId::NegY)
        );
    }

    #[test]
    fn test_ties_resolve_in_axis_order() {
        assert_eq!(
            classify(Vec3::new(5.0, 5.0, 0.0), 0.0, 90.0),
            FaceHit::Face(FaceId::PosX)
        );
        assert_eq!(
            classify(Vec3::new(0.0, 5.0, 5.0), 0.0, 90.0),
            FaceHit::Face(FaceId::PosY)
        );
    }

    #[test]
    fn test_near_sphere_threshold() {
        let p = Vec3::new(6.0, 1.0, 1.0);
        assert_eq!(classify(p, 90.0, 90.0), FaceHit::WholeSurface);
        assert_eq!(classify(p, 95.0, 90.0), FaceHit::WholeSurface);
        assert_eq!(classify(p, 89.9, 90.0), FaceHit::Face(FaceId::PosX));
    }

    proptest! {
        /// A strictly dominant axis always wins the classification.
        #[test]
        fn prop_dominant_axis_wins(
            major in 1.0f32..10.0,
            minor_a in -0.9f32..0.9,
            minor_b in -0.9f32..0.9,
            sign in proptest::bool::ANY,
        ) {
            let x = if sign { major } else { -major };
            let hit = classify(Vec3::new(x, minor_a, minor_b), 0.0, 90.0);
            let expected = if sign { FaceId::PosX } else { FaceId::NegX };
            prop_assert_eq!(hit, FaceHit::Face(expected));
        }
    }
}
