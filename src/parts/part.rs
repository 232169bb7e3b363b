//! Part - one structural or decorative element of the generated layout

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::parts::surface::Surface;

/// Kind of a generated part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PartKind {
    Ground,
    Wall,
    BasePlate,
    Column,
    PostCap,
    WallBracket,
    Beam,
    BeamBracket,
    Purlin,
    RoofSheet,
    Rib,
    UndersidePanel,
    GableInfill,
    Gutter,
    Downpipe,
    DesignerBeam,
    Light,
    FanRod,
    FanMotor,
    FanBlade,
    DecorativeColumn,
}

impl PartKind {
    /// Canonical kebab-case name, matching the serialised form
    pub fn as_str(&self) -> &'static str {
        match self {
            PartKind::Ground => "ground",
            PartKind::Wall => "wall",
            PartKind::BasePlate => "base-plate",
            PartKind::Column => "column",
            PartKind::PostCap => "post-cap",
            PartKind::WallBracket => "wall-bracket",
            PartKind::Beam => "beam",
            PartKind::BeamBracket => "beam-bracket",
            PartKind::Purlin => "purlin",
            PartKind::RoofSheet => "roof-sheet",
            PartKind::Rib => "rib",
            PartKind::UndersidePanel => "underside-panel",
            PartKind::GableInfill => "gable-infill",
            PartKind::Gutter => "gutter",
            PartKind::Downpipe => "downpipe",
            PartKind::DesignerBeam => "designer-beam",
            PartKind::Light => "light",
            PartKind::FanRod => "fan-rod",
            PartKind::FanMotor => "fan-motor",
            PartKind::FanBlade => "fan-blade",
            PartKind::DecorativeColumn => "decorative-column",
        }
    }

    /// Every kind, in assembly order
    pub fn all() -> &'static [PartKind] {
        &[
            PartKind::Ground,
            PartKind::Wall,
            PartKind::BasePlate,
            PartKind::Column,
            PartKind::PostCap,
            PartKind::WallBracket,
            PartKind::Beam,
            PartKind::BeamBracket,
            PartKind::Purlin,
            PartKind::RoofSheet,
            PartKind::Rib,
            PartKind::UndersidePanel,
            PartKind::GableInfill,
            PartKind::Gutter,
            PartKind::Downpipe,
            PartKind::DesignerBeam,
            PartKind::Light,
            PartKind::FanRod,
            PartKind::FanMotor,
            PartKind::FanBlade,
            PartKind::DecorativeColumn,
        ]
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PartKind::all()
            .iter()
            .find(|kind| kind.as_str() == s)
            .copied()
            .ok_or_else(|| EngineError::UnknownPartKind(s.to_string()))
    }
}

/// Stable part identifier: kind plus index within that kind.
///
/// Derived per generation call, never from shared process state, so
/// concurrent pipeline invocations cannot leak identity across calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartId {
    pub kind: PartKind,
    pub index: usize,
}

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind, self.index)
    }
}

/// Geometry primitive the renderer instantiates for a part
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Primitive {
    /// Axis-aligned box of the part's bounding dimensions
    Box,
    /// Cylinder along the local y axis
    Cylinder { radius: f64 },
    /// Flat plane spanning the x/z bounding dimensions
    Plane,
}

/// One structural or decorative element
///
/// Parts are value types produced fresh on every pipeline call and owned
/// solely by the caller; the pipeline keeps no reference after returning.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Part {
    /// Stable identifier (kind + index within kind)
    pub id: PartId,
    /// Display label for the debug/QA overlay
    pub label: String,
    /// Centre position in structure-local metres
    pub position: [f64; 3],
    /// Euler rotation in radians
    pub rotation: [f64; 3],
    /// Bounding-box dimensions in metres
    pub dimensions: [f64; 3],
    /// Visual surface attributes
    pub surface: Surface,
    /// Geometry primitive
    pub primitive: Primitive,
}

impl Part {
    /// Create a part of a kind with a display label.
    ///
    /// The index is assigned by the generator once the full list is known.
    pub fn new(kind: PartKind, label: impl Into<String>) -> Self {
        Self {
            id: PartId { kind, index: 0 },
            label: label.into(),
            position: [0.0; 3],
            rotation: [0.0; 3],
            dimensions: [1.0; 3],
            surface: Surface::default(),
            primitive: Primitive::Box,
        }
    }

    /// Kind of this part
    pub fn kind(&self) -> PartKind {
        self.id.kind
    }

    /// Set the centre position
    pub fn with_position(mut self, x: f64, y: f64, z: f64) -> Self {
        self.position = [x, y, z];
        self
    }

    /// Set the Euler rotation in radians
    pub fn with_rotation(mut self, rx: f64, ry: f64, rz: f64) -> Self {
        self.rotation = [rx, ry, rz];
        self
    }

    /// Set the bounding-box dimensions
    pub fn with_size(mut self, dx: f64, dy: f64, dz: f64) -> Self {
        self.dimensions = [dx, dy, dz];
        self
    }

    /// Set the surface attributes
    pub fn with_surface(mut self, surface: Surface) -> Self {
        self.surface = surface;
        self
    }

    /// Set the geometry primitive
    pub fn with_primitive(mut self, primitive: Primitive) -> Self {
        self.primitive = primitive;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip() {
        for kind in PartKind::all() {
            assert_eq!(kind.as_str().parse::<PartKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn test_unknown_kind() {
        assert!("flux-capacitor".parse::<PartKind>().is_err());
    }

    #[test]
    fn test_id_display() {
        let id = PartId {
            kind: PartKind::BasePlate,
            index: 2,
        };
        assert_eq!(id.to_string(), "base-plate-2");
    }
}
