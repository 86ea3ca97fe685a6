//! Engine configuration options.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Tunables for the synthesis/highlight engine.
///
/// Defaults reproduce the observed behavior of the reference viewer; tests
/// pin individual fields (notably the restore guard window) instead of
/// relying on wall-clock timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineOptions {
    /// Length of the post-restore suppression window, in milliseconds.
    ///
    /// Re-entrant `set` calls inside this window (synchronized controls
    /// reacting to an undo/reset) are dropped so a restore is never recorded
    /// as a fresh edit.
    pub restore_guard_ms: u64,

    /// `radius_percent` at or above which the solid is displayed and
    /// hover-classified as a single near-sphere surface.
    pub near_sphere_threshold: f32,

    /// Per-axis segment count under the display-quality policy.
    pub quality_segments: u32,

    /// Longitudinal segment count of the near-sphere substitute.
    pub sphere_segments: u32,

    /// Color applied to the hovered face.
    pub highlight_color: Vec3,

    /// Emissive intensity applied to the hovered face.
    pub highlight_emissive_intensity: f32,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            restore_guard_ms: 100,
            // The reference viewer disagreed with itself (90 vs 94); one
            // threshold is used everywhere so display and hover cannot
            // diverge.
            near_sphere_threshold: 90.0,
            quality_segments: 32,
            sphere_segments: 64,
            highlight_color: Vec3::new(1.0, 0.647, 0.0),
            highlight_emissive_intensity: 0.4,
        }
    }
}
