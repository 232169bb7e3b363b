//! Beam profiles and span-driven selection

use serde::Serialize;

/// Cross-section and span rating of a fluted patio beam
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BeamSpec {
    /// Catalog identifier
    pub id: &'static str,
    /// Profile height in mm
    pub height_mm: f64,
    /// Profile width in mm
    pub width_mm: f64,
    /// Wall thickness in mm
    pub thickness_mm: f64,
    /// Mass per metre in kg/m
    pub mass_per_metre: f64,
    /// Maximum unsupported span in mm
    pub max_span_mm: f64,
    /// Fluted (ribbed) face profile
    pub fluted: bool,
}

/// Smaller beam profile, rated to 4.5 m
pub const BEAM_110: BeamSpec = BeamSpec {
    id: "B110",
    height_mm: 110.0,
    width_mm: 55.0,
    thickness_mm: 2.5,
    mass_per_metre: 3.2,
    max_span_mm: 4500.0,
    fluted: true,
};

/// Larger beam profile, rated to 6.5 m
pub const BEAM_150: BeamSpec = BeamSpec {
    id: "B150",
    height_mm: 150.0,
    width_mm: 55.0,
    thickness_mm: 3.0,
    mass_per_metre: 4.6,
    max_span_mm: 6500.0,
    fluted: true,
};

impl BeamSpec {
    /// Select the beam for an unsupported span in mm.
    ///
    /// Pure and total: spans at or below the small beam's rating take the
    /// small profile, everything else the large one. Width overruns beyond
    /// the large profile are resolved by mid-support insertion during post
    /// placement, never by further upsizing.
    pub fn select_for_span(span_mm: f64) -> &'static BeamSpec {
        if span_mm <= BEAM_110.max_span_mm {
            &BEAM_110
        } else {
            &BEAM_150
        }
    }

    /// Profile height in metres
    pub fn height_m(&self) -> f64 {
        self.height_mm / 1000.0
    }

    /// Profile width in metres
    pub fn width_m(&self) -> f64 {
        self.width_mm / 1000.0
    }

    /// Maximum unsupported span in metres
    pub fn max_span_m(&self) -> f64 {
        self.max_span_mm / 1000.0
    }
}
