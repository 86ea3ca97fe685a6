//! The geometry synthesizer: pure mapping from a clamped parameter
//! snapshot to a mesh descriptor.
//!
//! Two independent segment-density policies exist because the viewer shows
//! two different boxes: a fixed high-tessellation one for display quality,
//! and a coarse level-driven one while the wireframe grid is visible.

use solidform_core::{EngineOptions, ParameterSnapshot};

use crate::descriptor::MeshDescriptor;
use crate::shape::{build_box, build_rounded_box, build_sphere};

/// Segment count for wireframe level 1; each further level adds
/// [`WIREFRAME_SEGMENT_STEP`].
pub const WIREFRAME_BASE_SEGMENTS: u32 = 8;
/// Per-level segment increment under the wireframe-density policy.
pub const WIREFRAME_SEGMENT_STEP: u32 = 6;

/// Which tessellation policy drives the segment count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentPolicy {
    /// Fixed high segment count for display quality.
    Quality,
    /// Coarse, level-driven count for the wireframe grid.
    WireframeDensity,
}

impl SegmentPolicy {
    /// The policy the viewer uses for this snapshot: wireframe density
    /// whenever the wireframe is on, display quality otherwise.
    #[must_use]
    pub fn for_snapshot(snapshot: &ParameterSnapshot) -> Self {
        if snapshot.wireframe_enabled() {
            Self::WireframeDensity
        } else {
            Self::Quality
        }
    }
}

/// Per-axis segment count for the given policy and wireframe level.
///
/// Under [`SegmentPolicy::WireframeDensity`], levels 1..=5 map to
/// 8, 14, 20, 26, 32; level 0 yields a flat, unsubdivided solid.
#[must_use]
pub fn segment_count(policy: SegmentPolicy, wireframe_level: u8, quality_segments: u32) -> u32 {
    match policy {
        SegmentPolicy::Quality => quality_segments,
        SegmentPolicy::WireframeDensity => match wireframe_level {
            0 => 1,
            level => WIREFRAME_BASE_SEGMENTS + u32::from(level - 1) * WIREFRAME_SEGMENT_STEP,
        },
    }
}

/// Builds the mesh for a snapshot under the policy the snapshot selects.
#[must_use]
pub fn build(snapshot: &ParameterSnapshot, options: &EngineOptions) -> MeshDescriptor {
    build_with_policy(snapshot, SegmentPolicy::for_snapshot(snapshot), options)
}

/// Builds the mesh for a snapshot under an explicit policy.
///
/// At or above the near-sphere threshold a high-resolution sphere is
/// substituted for display; the snapshot itself is untouched. The store's
/// clamping guarantees the inputs are valid, so there is no error path.
#[must_use]
pub fn build_with_policy(
    snapshot: &ParameterSnapshot,
    policy: SegmentPolicy,
    options: &EngineOptions,
) -> MeshDescriptor {
    if snapshot.radius_percent >= options.near_sphere_threshold {
        let radius = snapshot.min_dimension() / 2.0;
        log::debug!("near-sphere substitution, radius {radius}");
        return build_sphere(radius, options.sphere_segments);
    }

    let segments = segment_count(policy, snapshot.wireframe_level, options.quality_segments);
    log::debug!("rebuild with {segments} segments under {policy:?}");

    if snapshot.radius_percent > 0.0 {
        build_rounded_box(
            snapshot.width,
            snapshot.height,
            snapshot.depth,
            snapshot.effective_radius(),
            segments,
        )
    } else {
        build_box(snapshot.width, snapshot.height, snapshot.depth, segments)
    }
}
