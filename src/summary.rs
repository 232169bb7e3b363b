//! Layout summary for the pricing and document-export collaborators

use std::collections::BTreeMap;

use serde::Serialize;

use crate::parts::PartKind;
use crate::pipeline::PipelineOutput;

/// Mass per metre of a structural post in kg/m
const POST_MASS_PER_METRE: f64 = 2.4;

/// Condensed view of a generated layout.
///
/// Everything the estimator and the export document need: resolved catalog
/// labels, member counts and the coarse quantities the pricing tables are
/// keyed on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutSummary {
    /// Resolved structural pattern label
    pub patio_type: String,
    /// Resolved beam catalog id
    pub beam_id: String,
    /// Resolved sheet catalog id
    pub sheet_id: String,
    /// Number of support posts
    pub post_count: usize,
    /// Number of main beams
    pub beam_count: usize,
    /// Number of purlins (including any mid purlin)
    pub purlin_count: usize,
    /// Number of roof sheets
    pub sheet_count: usize,
    /// Covered plan area in m²
    pub roof_area_m2: f64,
    /// Steel frame mass estimate in kg (beams and columns)
    pub frame_mass_kg: f64,
    /// Total parts emitted
    pub total_parts: usize,
    /// Part count per kind, keyed by the canonical kind name
    pub counts_by_kind: BTreeMap<String, usize>,
}

impl LayoutSummary {
    /// Summarise one pipeline output
    pub fn from_output(output: &PipelineOutput) -> Self {
        let layout = &output.layout;

        let mut counts_by_kind: BTreeMap<String, usize> = BTreeMap::new();
        for part in &output.parts {
            *counts_by_kind.entry(part.kind().to_string()).or_insert(0) += 1;
        }

        let beam_count = output.count_of_kind(PartKind::Beam);
        let column_count = output.count_of_kind(PartKind::Column);
        let column_height = layout.height - layout.beam.height_m();

        let frame_mass_kg = beam_count as f64 * layout.width * layout.beam.mass_per_metre
            + column_count as f64 * column_height * POST_MASS_PER_METRE;

        Self {
            patio_type: layout.pattern.id.label().to_string(),
            beam_id: layout.beam.id.to_string(),
            sheet_id: layout.sheet.id.to_string(),
            post_count: layout.posts.len(),
            beam_count,
            purlin_count: output.count_of_kind(PartKind::Purlin),
            sheet_count: output.count_of_kind(PartKind::RoofSheet),
            roof_area_m2: layout.width * layout.total_depth,
            frame_mass_kg,
            total_parts: output.parts.len(),
            counts_by_kind,
        }
    }
}
