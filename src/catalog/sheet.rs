//! Roof sheet profiles and material-driven selection

use serde::Serialize;

use crate::config::{RoofMaterial, SheetProfile};

/// Geometry and span rating of a roof sheet profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetSpec {
    /// Catalog identifier
    pub id: &'static str,
    /// Panel thickness in mm
    pub thickness_mm: f64,
    /// Effective cover width per sheet in mm
    pub cover_width_mm: f64,
    /// Maximum unsupported span in mm
    pub max_span_mm: f64,
    /// Insulated sandwich panel with a flat underside
    pub insulated: bool,
    /// Rib height in mm (0 = no raised ribs)
    pub rib_height_mm: f64,
    /// Rib centre spacing in mm
    pub rib_spacing_mm: f64,
}

/// Insulated sandwich panel
pub const SHEET_SOLARSPAN_75: SheetSpec = SheetSpec {
    id: "SolarSpan75",
    thickness_mm: 75.0,
    cover_width_mm: 1000.0,
    max_span_mm: 6000.0,
    insulated: true,
    rib_height_mm: 0.0,
    rib_spacing_mm: 0.0,
};

/// Corrugated single-skin sheet
pub const SHEET_CORRODEK: SheetSpec = SheetSpec {
    id: "Corrodek",
    thickness_mm: 0.42,
    cover_width_mm: 762.0,
    max_span_mm: 3000.0,
    insulated: false,
    rib_height_mm: 17.0,
    rib_spacing_mm: 76.0,
};

/// Flat interlocking single-skin sheet
pub const SHEET_FLATDEK: SheetSpec = SheetSpec {
    id: "Flatdek",
    thickness_mm: 0.42,
    cover_width_mm: 700.0,
    max_span_mm: 2700.0,
    insulated: false,
    rib_height_mm: 0.0,
    rib_spacing_mm: 0.0,
};

impl SheetSpec {
    /// Select the sheet for a material and profile choice.
    ///
    /// Insulated material always maps to the single insulated panel; the
    /// profile sub-type only distinguishes single-skin sheets.
    pub fn select(material: RoofMaterial, profile: SheetProfile) -> &'static SheetSpec {
        match material {
            RoofMaterial::Insulated => &SHEET_SOLARSPAN_75,
            RoofMaterial::Colorbond => match profile {
                SheetProfile::Corrugated => &SHEET_CORRODEK,
                SheetProfile::Flat => &SHEET_FLATDEK,
            },
        }
    }

    /// Panel thickness in metres
    pub fn thickness_m(&self) -> f64 {
        self.thickness_mm / 1000.0
    }

    /// Effective cover width in metres
    pub fn cover_width_m(&self) -> f64 {
        self.cover_width_mm / 1000.0
    }

    /// Maximum unsupported span in metres
    pub fn max_span_m(&self) -> f64 {
        self.max_span_mm / 1000.0
    }

    /// Whether the profile carries raised ribs
    pub fn has_ribs(&self) -> bool {
        self.rib_height_mm > 0.0
    }
}
