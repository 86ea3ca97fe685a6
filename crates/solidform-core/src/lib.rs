//! Core parameter model for solidform.
//!
//! This crate owns the value side of the engine:
//! - [`ParameterSnapshot`]: one immutable, fully-clamped parameter set
//! - [`HistoryStack`]: append-only snapshot history with a cursor
//! - [`ParameterStore`]: the single validating writer over both
//! - [`EngineOptions`]: engine tunables

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod history;
pub mod options;
pub mod snapshot;
pub mod store;

pub use error::{Result, SolidformError};
pub use history::HistoryStack;
pub use options::EngineOptions;
pub use snapshot::{
    clamp_number, parse_hex_color, ParamKey, ParamValue, ParameterSnapshot, DEFAULT_COLOR,
    DIMENSION_RANGE, POSITION_RANGE, RADIUS_RANGE, ROTATION_RANGE, SCALE_RANGE, WIREFRAME_MAX,
};
pub use store::{ParameterStore, SetOutcome};

// Re-export glam types for convenience
pub use glam::{Vec2, Vec3};
