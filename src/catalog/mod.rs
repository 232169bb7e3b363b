//! Static catalog data and pure selection functions
//!
//! The catalog is versionless reference data: beam profiles, roof sheet
//! profiles and the named structural patterns a configuration is classified
//! into. All three selection functions are pure and total; boundaries are
//! inclusive on the lower entry.

mod beam;
mod pattern;
mod sheet;

pub use beam::{BeamSpec, BEAM_110, BEAM_150};
pub use pattern::{
    PatioType, SheetRun, StructuralPattern, PATTERN_TYPE_1, PATTERN_TYPE_2, PATTERN_TYPE_3,
    PATTERN_TYPE_4,
};
pub use sheet::{SheetSpec, SHEET_CORRODEK, SHEET_FLATDEK, SHEET_SOLARSPAN_75};
