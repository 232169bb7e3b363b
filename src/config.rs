//! Configuration - the user's intent for a patio structure
//!
//! A `Configuration` is an immutable value created by the UI layer (or a
//! stored project revision, or a test fixture). `validate()` clamps it into
//! the supported ranges; the pipeline only ever sees validated values.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;

/// Supported width range in metres
pub const WIDTH_RANGE: (f64, f64) = (2.0, 12.0);
/// Supported depth range in metres
pub const DEPTH_RANGE: (f64, f64) = (2.0, 8.0);
/// Supported height range in metres
pub const HEIGHT_RANGE: (f64, f64) = (2.4, 4.5);

/// Roofing material family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoofMaterial {
    /// Insulated sandwich panel (flat underside, single catalog entry)
    Insulated,
    /// Single-skin steel sheeting, profile chosen by `SheetProfile`
    Colorbond,
}

/// Sheet profile sub-type for single-skin roofing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SheetProfile {
    /// Corrugated profile with raised ribs
    Corrugated,
    /// Flat interlocking profile
    Flat,
}

/// Overall roof shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoofShape {
    /// Single plane falling toward the front edge
    Flat,
    /// Two planes rising to a central ridge
    Gable,
}

/// Structural style of the patio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StructureStyle {
    /// Self-supporting on posts, no wall attachment
    Freestanding,
    /// Fixed to the house wall at roof level
    Attached,
    /// Attached above the existing eave line
    FlyOver,
    /// Attached with a steep single fall
    Skillion,
}

impl StructureStyle {
    /// Whether this style carries no wall attachment at all
    pub fn is_freestanding(&self) -> bool {
        matches!(self, StructureStyle::Freestanding)
    }
}

/// The set of edges fixed to an existing wall
///
/// The front edge can never attach; it is always the open face.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachedSides {
    pub back: bool,
    pub left: bool,
    pub right: bool,
}

impl AttachedSides {
    /// No attached edges
    pub fn none() -> Self {
        Self::default()
    }

    /// Back edge only - the default for attached styles
    pub fn back_only() -> Self {
        Self {
            back: true,
            left: false,
            right: false,
        }
    }

    /// True if no edge is attached
    pub fn is_empty(&self) -> bool {
        !self.back && !self.left && !self.right
    }

    /// Number of attached edges
    pub fn count(&self) -> usize {
        usize::from(self.back) + usize::from(self.left) + usize::from(self.right)
    }
}

/// Frame powder-coat colour (fixed catalog palette)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameColor {
    Monument,
    Basalt,
    WoodlandGrey,
    Surfmist,
    ClassicCream,
    NightSky,
}

impl FrameColor {
    /// Linear RGB of the powder-coat finish
    pub fn rgb(&self) -> [f64; 3] {
        match self {
            FrameColor::Monument => [0.196, 0.204, 0.212],
            FrameColor::Basalt => [0.353, 0.365, 0.380],
            FrameColor::WoodlandGrey => [0.302, 0.310, 0.294],
            FrameColor::Surfmist => [0.898, 0.890, 0.851],
            FrameColor::ClassicCream => [0.906, 0.859, 0.725],
            FrameColor::NightSky => [0.094, 0.094, 0.102],
        }
    }
}

/// The immutable user intent for one structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Width in metres (the axis along the open front edge)
    pub width: f64,
    /// Depth in metres (the span axis, wall to front)
    pub depth: f64,
    /// Height to the underside of the roof in metres
    pub height: f64,
    /// Roofing material family
    pub material: RoofMaterial,
    /// Sheet profile for single-skin roofing (ignored for insulated panels)
    pub sheet_profile: SheetProfile,
    /// Overall roof shape
    pub roof_shape: RoofShape,
    /// Structural style
    pub style: StructureStyle,
    /// Edges fixed to an existing wall
    #[serde(default)]
    pub attached_sides: AttachedSides,
    /// Down lights under the roof
    #[serde(default)]
    pub lighting: bool,
    /// Ceiling fan at the centre
    #[serde(default)]
    pub fan: bool,
    /// Gutter and downpipe run
    #[serde(default)]
    pub gutters: bool,
    /// Decorative feature beam under the roof
    #[serde(default)]
    pub designer_beam: bool,
    /// Decorative sleeves over the structural posts
    #[serde(default)]
    pub decorative_columns: bool,
    /// Frame powder-coat colour
    pub frame_color: FrameColor,
}

impl Configuration {
    /// Clamp this configuration into the supported ranges and normalise
    /// derived fields. Total and idempotent; the input is unmodified.
    ///
    /// Freestanding styles always carry an empty attached-side set; any
    /// other style with no side chosen defaults to the back edge.
    pub fn validate(&self) -> Configuration {
        let mut config = self.clone();

        config.width = config.width.clamp(WIDTH_RANGE.0, WIDTH_RANGE.1);
        config.depth = config.depth.clamp(DEPTH_RANGE.0, DEPTH_RANGE.1);
        config.height = config.height.clamp(HEIGHT_RANGE.0, HEIGHT_RANGE.1);

        if config.style.is_freestanding() {
            config.attached_sides = AttachedSides::none();
        } else if config.attached_sides.is_empty() {
            config.attached_sides = AttachedSides::back_only();
        }

        config
    }

    /// Load a configuration from a JSON string
    pub fn from_json(json: &str) -> EngineResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file (stored project revision)
    pub fn from_json_file(path: &std::path::Path) -> EngineResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialise to JSON
    pub fn to_json(&self) -> EngineResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            width: 4.0,
            depth: 3.0,
            height: 2.7,
            material: RoofMaterial::Colorbond,
            sheet_profile: SheetProfile::Corrugated,
            roof_shape: RoofShape::Flat,
            style: StructureStyle::Attached,
            attached_sides: AttachedSides::back_only(),
            lighting: false,
            fan: false,
            gutters: false,
            designer_beam: false,
            decorative_columns: false,
            frame_color: FrameColor::Monument,
        }
    }
}
