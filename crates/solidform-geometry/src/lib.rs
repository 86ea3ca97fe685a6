//! Geometry synthesis for solidform.
//!
//! Pure, deterministic mesh construction from clamped parameter snapshots:
//! - [`descriptor`]: the [`MeshDescriptor`] buffers handed to the bridge
//! - [`shape`]: segmented box, rounded box, and UV sphere builders
//! - [`synthesizer`]: the snapshot-to-mesh mapping and its segment policies

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod descriptor;
pub mod shape;
pub mod synthesizer;

pub use descriptor::{MeshDescriptor, SolidKind, Vertex};
pub use shape::{build_box, build_rounded_box, build_sphere};
pub use synthesizer::{
    build, build_with_policy, segment_count, SegmentPolicy, WIREFRAME_BASE_SEGMENTS,
    WIREFRAME_SEGMENT_STEP,
};
