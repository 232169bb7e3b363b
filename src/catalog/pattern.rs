//! Structural patterns ("patio types") and span-driven classification

use serde::Serialize;

use super::beam::{BeamSpec, BEAM_110, BEAM_150};

/// Named structural pattern a structure is classified into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PatioType {
    Type1,
    Type2,
    Type3,
    Type4,
}

impl PatioType {
    /// Human-readable catalog label
    pub fn label(&self) -> &'static str {
        match self {
            PatioType::Type1 => "Type 1",
            PatioType::Type2 => "Type 2",
            PatioType::Type3 => "Type 3",
            PatioType::Type4 => "Type 4",
        }
    }
}

/// Direction roof sheets run relative to the span axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SheetRun {
    /// Sheets run along the depth axis, bearing on the front and back beams
    Lengthwise,
    /// Sheets run along the width axis, bearing on purlins
    Crosswise,
}

/// Span capability, overhang and purlin requirements of one pattern
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuralPattern {
    /// Pattern identifier
    pub id: PatioType,
    /// Maximum depth span in mm
    pub max_span_mm: f64,
    /// Roof projection beyond the front support line in mm (0 = none)
    pub overhang_mm: f64,
    /// Secondary supports spaced along the depth axis
    pub has_purlins: bool,
    /// Heavier purlin at the mid-span line
    pub has_mid_purlin: bool,
    /// Sheet run direction
    pub sheet_run: SheetRun,
    /// Beam profile this pattern is normally built with
    pub default_beam: &'static BeamSpec,
}

pub const PATTERN_TYPE_1: StructuralPattern = StructuralPattern {
    id: PatioType::Type1,
    max_span_mm: 4500.0,
    overhang_mm: 0.0,
    has_purlins: false,
    has_mid_purlin: false,
    sheet_run: SheetRun::Lengthwise,
    default_beam: &BEAM_110,
};

pub const PATTERN_TYPE_2: StructuralPattern = StructuralPattern {
    id: PatioType::Type2,
    max_span_mm: 5400.0,
    overhang_mm: 300.0,
    has_purlins: false,
    has_mid_purlin: false,
    sheet_run: SheetRun::Lengthwise,
    default_beam: &BEAM_150,
};

pub const PATTERN_TYPE_3: StructuralPattern = StructuralPattern {
    id: PatioType::Type3,
    max_span_mm: 6000.0,
    overhang_mm: 0.0,
    has_purlins: true,
    has_mid_purlin: false,
    sheet_run: SheetRun::Crosswise,
    default_beam: &BEAM_150,
};

pub const PATTERN_TYPE_4: StructuralPattern = StructuralPattern {
    id: PatioType::Type4,
    max_span_mm: 8000.0,
    overhang_mm: 0.0,
    has_purlins: true,
    has_mid_purlin: true,
    sheet_run: SheetRun::Crosswise,
    default_beam: &BEAM_150,
};

impl StructuralPattern {
    /// Classify a depth span in mm into a structural pattern.
    ///
    /// Boundaries are inclusive on the lower pattern: a span exactly at a
    /// threshold selects the smaller-capacity pattern. The overhang pattern
    /// (Type 2) is only selectable for attached structures; a freestanding
    /// span in the same band falls through to Type 3.
    pub fn select(span_mm: f64, freestanding: bool) -> &'static StructuralPattern {
        if span_mm <= PATTERN_TYPE_1.max_span_mm {
            &PATTERN_TYPE_1
        } else if !freestanding && span_mm <= PATTERN_TYPE_2.max_span_mm {
            &PATTERN_TYPE_2
        } else if span_mm <= PATTERN_TYPE_3.max_span_mm {
            &PATTERN_TYPE_3
        } else {
            &PATTERN_TYPE_4
        }
    }

    /// Whether the roof projects beyond the front support line
    pub fn has_overhang(&self) -> bool {
        self.overhang_mm > 0.0
    }

    /// Overhang distance in metres
    pub fn overhang_m(&self) -> f64 {
        self.overhang_mm / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_inclusive() {
        assert_eq!(StructuralPattern::select(4500.0, false).id, PatioType::Type1);
        assert_eq!(StructuralPattern::select(4500.0, true).id, PatioType::Type1);
        assert_eq!(StructuralPattern::select(5400.0, false).id, PatioType::Type2);
        assert_eq!(StructuralPattern::select(6000.0, true).id, PatioType::Type3);
        assert_eq!(StructuralPattern::select(6000.1, false).id, PatioType::Type4);
    }

    #[test]
    fn test_overhang_band_is_attached_only() {
        let attached = StructuralPattern::select(5000.0, false);
        let freestanding = StructuralPattern::select(5000.0, true);
        assert_eq!(attached.id, PatioType::Type2);
        assert!(attached.has_overhang());
        assert_eq!(freestanding.id, PatioType::Type3);
        assert!(!freestanding.has_overhang());
    }

    #[test]
    fn test_capability_monotonic() {
        for freestanding in [false, true] {
            let mut last_rating = 0.0;
            for span in (2000..8000).step_by(250) {
                let pattern = StructuralPattern::select(span as f64, freestanding);
                assert!(
                    pattern.max_span_mm >= last_rating,
                    "capability regressed at span {span}"
                );
                last_rating = pattern.max_span_mm;
            }
        }
    }
}
