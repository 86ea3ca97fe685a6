//! solidform: parametric solid synthesis and edit-history engine.
//!
//! Turns a small set of named shape parameters into a renderable mesh,
//! keeps an undo-capable history of parameter snapshots, and classifies
//! pointer hits against the solid to drive per-face hover highlighting.
//! The rendering surface (camera, controls, GPU upload) is external and
//! attaches through [`ViewerBridge`].
//!
//! ```
//! use solidform::{Engine, ParamValue, Vec3};
//!
//! let mut engine = Engine::new();
//! engine.on_parameter_change("radius", &ParamValue::Number(50.0));
//! engine.on_pointer_move(Vec3::new(6.0, 1.0, 1.0));
//! assert!(engine.can_undo());
//! ```

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod bridge;
pub mod engine;
pub mod face;
pub mod highlight;
pub mod history_controller;
pub mod material;
pub mod mesh;

pub use bridge::ViewerBridge;
pub use engine::Engine;
pub use face::{classify, FaceHit, FaceId};
pub use highlight::FaceHighlightState;
pub use history_controller::{HistoryController, HistoryOutcome};
pub use material::{MaterialAssignment, MaterialParams, DEFAULT_METALNESS, DEFAULT_ROUGHNESS};
pub use mesh::SolidMesh;

pub use solidform_core::{
    EngineOptions, ParamKey, ParamValue, ParameterSnapshot, ParameterStore, Result, SetOutcome,
    SolidformError,
};
pub use solidform_geometry::{
    build, build_with_policy, segment_count, MeshDescriptor, SegmentPolicy, SolidKind, Vertex,
};

// Re-export glam types for convenience
pub use glam::{Vec2, Vec3};

/// Installs the logging backend and announces the engine.
///
/// Call once at startup; harmless if logging was already configured by the
/// host application.
pub fn init() {
    let _ = env_logger::Builder::from_default_env().try_init();
    log::info!("solidform initialized");
}
