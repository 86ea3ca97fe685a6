//! Parameter snapshots: the immutable, fully-clamped state of the solid.
//!
//! A [`ParameterSnapshot`] is one entry in the edit history. Every numeric
//! field is clamped to its declared range at construction time, so consumers
//! (notably the geometry synthesizer) never see a degenerate value.

use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SolidformError};

/// Inclusive range for `width`/`height`/`depth` (mm-equivalent units).
pub const DIMENSION_RANGE: (f32, f32) = (0.1, 100.0);
/// Inclusive range for `radius_percent`.
pub const RADIUS_RANGE: (f32, f32) = (0.0, 100.0);
/// Maximum wireframe level.
pub const WIREFRAME_MAX: u8 = 5;
/// Per-axis rotation slider range, in degrees.
pub const ROTATION_RANGE: (f32, f32) = (-180.0, 180.0);
/// Per-axis position slider range.
pub const POSITION_RANGE: (f32, f32) = (-50.0, 50.0);
/// Per-axis scale slider range.
pub const SCALE_RANGE: (f32, f32) = (0.1, 10.0);

/// Default surface color.
pub const DEFAULT_COLOR: &str = "#D73D57";

/// Identifies one editable parameter of the solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamKey {
    Width,
    Height,
    Depth,
    RadiusPercent,
    WireframeLevel,
    Color,
    RotationX,
    RotationY,
    RotationZ,
    PositionX,
    PositionY,
    PositionZ,
    ScaleX,
    ScaleY,
    ScaleZ,
}

impl ParamKey {
    /// Whether editing this parameter changes the generated mesh
    /// (as opposed to only the material or the model transform).
    #[must_use]
    pub fn is_geometry_affecting(self) -> bool {
        matches!(
            self,
            Self::Width | Self::Height | Self::Depth | Self::RadiusPercent | Self::WireframeLevel
        )
    }
}

impl FromStr for ParamKey {
    type Err = SolidformError;

    fn from_str(s: &str) -> Result<Self> {
        // UI control names; "radius" and "wireframe" are the short forms the
        // sliders report.
        match s {
            "width" => Ok(Self::Width),
            "height" => Ok(Self::Height),
            "depth" => Ok(Self::Depth),
            "radius" | "radius_percent" => Ok(Self::RadiusPercent),
            "wireframe" | "wireframe_level" => Ok(Self::WireframeLevel),
            "color" => Ok(Self::Color),
            "rotation_x" => Ok(Self::RotationX),
            "rotation_y" => Ok(Self::RotationY),
            "rotation_z" => Ok(Self::RotationZ),
            "position_x" => Ok(Self::PositionX),
            "position_y" => Ok(Self::PositionY),
            "position_z" => Ok(Self::PositionZ),
            "scale_x" => Ok(Self::ScaleX),
            "scale_y" => Ok(Self::ScaleY),
            "scale_z" => Ok(Self::ScaleZ),
            _ => Err(SolidformError::UnknownParameter(s.to_string())),
        }
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Width => "width",
            Self::Height => "height",
            Self::Depth => "depth",
            Self::RadiusPercent => "radius",
            Self::WireframeLevel => "wireframe",
            Self::Color => "color",
            Self::RotationX => "rotation_x",
            Self::RotationY => "rotation_y",
            Self::RotationZ => "rotation_z",
            Self::PositionX => "position_x",
            Self::PositionY => "position_y",
            Self::PositionZ => "position_z",
            Self::ScaleX => "scale_x",
            Self::ScaleY => "scale_y",
            Self::ScaleZ => "scale_z",
        };
        f.write_str(name)
    }
}

/// The raw value carried by a parameter-change event.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Numeric control (slider / number input).
    Number(f64),
    /// Hex color string from the color picker.
    Color(String),
}

/// One immutable, fully-clamped parameter set.
///
/// Snapshots are cheap to clone and compare; the edit history is a plain
/// vector of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSnapshot {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    /// Rounding, as a percentage of the smallest-dimension half-extent.
    pub radius_percent: f32,
    /// 0 disables the wireframe; 1..=5 select the grid density.
    pub wireframe_level: u8,
    /// Surface color, `#rrggbb`.
    pub color: String,
    /// Rotation in degrees, per axis.
    pub rotation: Vec3,
    pub position: Vec3,
    pub scale: Vec3,
}

impl Default for ParameterSnapshot {
    fn default() -> Self {
        Self {
            width: 10.0,
            height: 10.0,
            depth: 10.0,
            radius_percent: 0.0,
            wireframe_level: 0,
            color: DEFAULT_COLOR.to_string(),
            rotation: Vec3::ZERO,
            position: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl ParameterSnapshot {
    /// The smallest of the three dimensions.
    #[must_use]
    pub fn min_dimension(&self) -> f32 {
        self.width.min(self.height).min(self.depth)
    }

    /// Absolute rounding radius derived from `radius_percent`.
    ///
    /// Always `<= min_dimension() / 2`, with equality only at 100%.
    #[must_use]
    pub fn effective_radius(&self) -> f32 {
        (self.radius_percent / 100.0) * self.min_dimension() / 2.0
    }

    /// Whether the wireframe display (and its density policy) is active.
    #[must_use]
    pub fn wireframe_enabled(&self) -> bool {
        self.wireframe_level > 0
    }

    /// Reads the current value of a numeric parameter.
    ///
    /// Returns `None` for [`ParamKey::Color`].
    #[must_use]
    pub fn number(&self, key: ParamKey) -> Option<f32> {
        match key {
            ParamKey::Width => Some(self.width),
            ParamKey::Height => Some(self.height),
            ParamKey::Depth => Some(self.depth),
            ParamKey::RadiusPercent => Some(self.radius_percent),
            ParamKey::WireframeLevel => Some(f32::from(self.wireframe_level)),
            ParamKey::Color => None,
            ParamKey::RotationX => Some(self.rotation.x),
            ParamKey::RotationY => Some(self.rotation.y),
            ParamKey::RotationZ => Some(self.rotation.z),
            ParamKey::PositionX => Some(self.position.x),
            ParamKey::PositionY => Some(self.position.y),
            ParamKey::PositionZ => Some(self.position.z),
            ParamKey::ScaleX => Some(self.scale.x),
            ParamKey::ScaleY => Some(self.scale.y),
            ParamKey::ScaleZ => Some(self.scale.z),
        }
    }

    /// Returns a copy with `key` set to the (already clamped) value.
    #[must_use]
    pub fn with_number(&self, key: ParamKey, value: f32) -> Self {
        let mut next = self.clone();
        match key {
            ParamKey::Width => next.width = value,
            ParamKey::Height => next.height = value,
            ParamKey::Depth => next.depth = value,
            ParamKey::RadiusPercent => next.radius_percent = value,
            // Value has been rounded and clamped to 0..=5 by `clamp_number`.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            ParamKey::WireframeLevel => next.wireframe_level = value as u8,
            ParamKey::Color => {}
            ParamKey::RotationX => next.rotation.x = value,
            ParamKey::RotationY => next.rotation.y = value,
            ParamKey::RotationZ => next.rotation.z = value,
            ParamKey::PositionX => next.position.x = value,
            ParamKey::PositionY => next.position.y = value,
            ParamKey::PositionZ => next.position.z = value,
            ParamKey::ScaleX => next.scale.x = value,
            ParamKey::ScaleY => next.scale.y = value,
            ParamKey::ScaleZ => next.scale.z = value,
        }
        next
    }

    /// Returns a copy with the given color.
    #[must_use]
    pub fn with_color(&self, color: String) -> Self {
        let mut next = self.clone();
        next.color = color;
        next
    }

    /// Serializes the snapshot to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserializes a snapshot from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Coerces and clamps a raw numeric input for the given parameter.
///
/// The wireframe level is rounded to the nearest integer before clamping;
/// every other field is clamped to its declared range unchanged.
#[must_use]
pub fn clamp_number(key: ParamKey, raw: f32) -> f32 {
    let (lo, hi) = match key {
        ParamKey::Width | ParamKey::Height | ParamKey::Depth => DIMENSION_RANGE,
        ParamKey::RadiusPercent => RADIUS_RANGE,
        ParamKey::WireframeLevel => {
            return raw.round().clamp(0.0, f32::from(WIREFRAME_MAX));
        }
        ParamKey::Color => return raw,
        ParamKey::RotationX | ParamKey::RotationY | ParamKey::RotationZ => ROTATION_RANGE,
        ParamKey::PositionX | ParamKey::PositionY | ParamKey::PositionZ => POSITION_RANGE,
        ParamKey::ScaleX | ParamKey::ScaleY | ParamKey::ScaleZ => SCALE_RANGE,
    };
    raw.clamp(lo, hi)
}

/// Parses a `#rrggbb` hex color into linear RGB components in `[0, 1]`.
pub fn parse_hex_color(hex: &str) -> Result<Vec3> {
    let digits = hex
        .strip_prefix('#')
        .ok_or_else(|| SolidformError::InvalidColor(hex.to_string()))?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(SolidformError::InvalidColor(hex.to_string()));
    }
    let channel = |range: std::ops::Range<usize>| -> f32 {
        // Validated above; the parse cannot fail.
        let v = u8::from_str_radix(&digits[range], 16).unwrap_or(0);
        f32::from(v) / 255.0
    };
    Ok(Vec3::new(channel(0..2), channel(2..4), channel(4..6)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults() {
        let snap = ParameterSnapshot::default();
        assert_eq!(snap.width, 10.0);
        assert_eq!(snap.height, 10.0);
        assert_eq!(snap.depth, 10.0);
        assert_eq!(snap.radius_percent, 0.0);
        assert_eq!(snap.wireframe_level, 0);
        assert_eq!(snap.color, "#D73D57");
        assert_eq!(snap.rotation, Vec3::ZERO);
        assert_eq!(snap.position, Vec3::ZERO);
        assert_eq!(snap.scale, Vec3::ONE);
    }

    #[test]
    fn test_effective_radius() {
        let snap = ParameterSnapshot {
            radius_percent: 50.0,
            ..ParameterSnapshot::default()
        };
        assert_eq!(snap.effective_radius(), 2.5);

        let full = ParameterSnapshot {
            radius_percent: 100.0,
            width: 4.0,
            ..ParameterSnapshot::default()
        };
        assert_eq!(full.effective_radius(), 2.0);
    }

    #[test]
    fn test_wireframe_rounds_to_nearest() {
        assert_eq!(clamp_number(ParamKey::WireframeLevel, 2.7), 3.0);
        assert_eq!(clamp_number(ParamKey::WireframeLevel, 2.2), 2.0);
        assert_eq!(clamp_number(ParamKey::WireframeLevel, -1.0), 0.0);
        assert_eq!(clamp_number(ParamKey::WireframeLevel, 9.0), 5.0);
    }

    #[test]
    fn test_dimension_clamp() {
        assert_eq!(clamp_number(ParamKey::Width, 0.0), 0.1);
        assert_eq!(clamp_number(ParamKey::Width, -5.0), 0.1);
        assert_eq!(clamp_number(ParamKey::Depth, 250.0), 100.0);
        assert_eq!(clamp_number(ParamKey::Height, 42.0), 42.0);
    }

    #[test]
    fn test_param_key_parsing() {
        assert_eq!("width".parse::<ParamKey>().unwrap(), ParamKey::Width);
        assert_eq!(
            "radius".parse::<ParamKey>().unwrap(),
            ParamKey::RadiusPercent
        );
        assert_eq!(
            "wireframe".parse::<ParamKey>().unwrap(),
            ParamKey::WireframeLevel
        );
        assert_eq!(
            "rotation_y".parse::<ParamKey>().unwrap(),
            ParamKey::RotationY
        );
        assert!("bevel".parse::<ParamKey>().is_err());
    }

    #[test]
    fn test_hex_color_parsing() {
        let c = parse_hex_color("#ff0000").unwrap();
        assert_eq!(c, Vec3::new(1.0, 0.0, 0.0));

        let c = parse_hex_color("#D73D57").unwrap();
        assert!((c.x - 215.0 / 255.0).abs() < 1e-6);

        assert!(parse_hex_color("ff0000").is_err());
        assert!(parse_hex_color("#f00").is_err());
        assert!(parse_hex_color("#gg0000").is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let snap = ParameterSnapshot {
            width: 3.5,
            wireframe_level: 2,
            ..ParameterSnapshot::default()
        };
        let json = snap.to_json().unwrap();
        let back = ParameterSnapshot::from_json(&json).unwrap();
        assert_eq!(snap, back);
    }

    proptest! {
        /// The stored wireframe level is always an integer in 0..=5.
        #[test]
        fn prop_wireframe_integer_invariant(raw in -100.0f32..100.0) {
            let clamped = clamp_number(ParamKey::WireframeLevel, raw);
            prop_assert_eq!(clamped, clamped.round());
            prop_assert!((0.0..=5.0).contains(&clamped));
        }

        /// The effective radius never exceeds half the smallest dimension.
        #[test]
        fn prop_radius_bound(
            w in 0.1f32..100.0,
            h in 0.1f32..100.0,
            d in 0.1f32..100.0,
            pct in 0.0f32..=100.0,
        ) {
            let snap = ParameterSnapshot {
                width: w,
                height: h,
                depth: d,
                radius_percent: pct,
                ..ParameterSnapshot::default()
            };
            prop_assert!(snap.effective_radius() <= snap.min_dimension() / 2.0 + 1e-6);
        }

        /// Clamping is idempotent for every numeric key.
        #[test]
        fn prop_clamp_idempotent(raw in -1000.0f32..1000.0) {
            for key in [
                ParamKey::Width,
                ParamKey::RadiusPercent,
                ParamKey::WireframeLevel,
                ParamKey::RotationX,
                ParamKey::PositionY,
                ParamKey::ScaleZ,
            ] {
                let once = clamp_number(key, raw);
                prop_assert_eq!(once, clamp_number(key, once));
            }
        }
    }
}
