//! Parts generation - expands a resolved layout into the flat, ordered
//! list of structural and decorative elements
//!
//! Emission follows the assembly order of the real product: ground and
//! walls, footings, columns, wall brackets, beams, purlins, roof covering,
//! rainwater goods, then accessories. Every branch is a pure predicate over
//! the configuration and layout; re-running generation on the same input
//! yields an identical list.

mod accessories;
mod frame;
mod part;
mod roof;
mod surface;

pub use part::{Part, PartId, PartKind, Primitive};
pub use surface::{Surface, SurfaceCache};

use std::collections::HashMap;

use crate::config::Configuration;
use crate::layout::DerivedLayout;

/// Purlin section height in metres
pub(crate) const PURLIN_HEIGHT: f64 = 0.065;
/// Gable roof pitch in degrees
pub(crate) const GABLE_PITCH_DEG: f64 = 20.0;

/// Underside height of the roof covering at a plan z coordinate.
///
/// Sheets bear directly on the beams, or on purlins when the pattern
/// requires them; a flat roof falls toward the open front edge, a gable
/// rises to the ridge on the mid line.
pub(crate) fn roof_surface_y(layout: &DerivedLayout, z: f64) -> f64 {
    let bearing = if layout.pattern.has_purlins {
        layout.height + PURLIN_HEIGHT
    } else {
        layout.height
    };
    let centre = layout.roof_centre_z();

    if layout.gable {
        let half = layout.total_depth / 2.0;
        let pitch = GABLE_PITCH_DEG.to_radians();
        bearing + (half - (z - centre).abs()).max(0.0) * pitch.tan()
    } else {
        bearing + (centre - z) * layout.slope.tan()
    }
}

/// Expand a configuration and its derived layout into the ordered parts
/// list. Deterministic: identical input produces an identical list, field
/// for field, in the same order.
pub fn generate_parts(config: &Configuration, layout: &DerivedLayout) -> Vec<Part> {
    let mut parts = Vec::new();

    frame::emit_site(layout, &mut parts);
    frame::emit_base_plates(config, layout, &mut parts);
    frame::emit_columns(config, layout, &mut parts);
    frame::emit_wall_brackets(config, layout, &mut parts);
    frame::emit_beams(config, layout, &mut parts);
    frame::emit_purlins(config, layout, &mut parts);
    roof::emit_roof(layout, &mut parts);
    roof::emit_rainwater(config, layout, &mut parts);
    accessories::emit_designer_beam(config, layout, &mut parts);
    accessories::emit_lights(config, layout, &mut parts);
    accessories::emit_fan(config, layout, &mut parts);
    accessories::emit_decorative_columns(config, layout, &mut parts);

    assign_ids(&mut parts);
    parts
}

/// Number each part within its kind, in emission order.
///
/// Ids are derived per call from the list itself - no shared counter, so
/// concurrent pipeline invocations stay independent.
fn assign_ids(parts: &mut [Part]) {
    let mut counters: HashMap<PartKind, usize> = HashMap::new();
    for part in parts.iter_mut() {
        let counter = counters.entry(part.id.kind).or_insert(0);
        part.id.index = *counter;
        *counter += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Configuration, RoofMaterial, RoofShape, StructureStyle};
    use crate::layout::derive_layout;

    fn generate(config: &Configuration) -> Vec<Part> {
        let validated = config.validate();
        let layout = derive_layout(&validated);
        generate_parts(&validated, &layout)
    }

    #[test]
    fn test_ids_are_per_kind() {
        let parts = generate(&Configuration::default());
        let columns: Vec<_> = parts
            .iter()
            .filter(|p| p.kind() == PartKind::Column)
            .collect();
        for (i, column) in columns.iter().enumerate() {
            assert_eq!(column.id.index, i);
        }
    }

    #[test]
    fn test_generation_deterministic() {
        let config = Configuration {
            width: 9.5,
            depth: 6.5,
            style: StructureStyle::Freestanding,
            roof_shape: RoofShape::Gable,
            lighting: true,
            fan: true,
            gutters: true,
            ..Configuration::default()
        };
        assert_eq!(generate(&config), generate(&config));
    }

    #[test]
    fn test_insulated_roof_has_underside_no_ribs() {
        let config = Configuration {
            material: RoofMaterial::Insulated,
            ..Configuration::default()
        };
        let parts = generate(&config);
        assert!(parts.iter().any(|p| p.kind() == PartKind::UndersidePanel));
        assert!(!parts.iter().any(|p| p.kind() == PartKind::Rib));
    }

    #[test]
    fn test_corrugated_roof_has_ribs() {
        let parts = generate(&Configuration::default());
        assert!(parts.iter().any(|p| p.kind() == PartKind::Rib));
        assert!(!parts.iter().any(|p| p.kind() == PartKind::UndersidePanel));
    }

    #[test]
    fn test_gable_bypasses_flat_emission() {
        let flat = generate(&Configuration::default());
        let gable = generate(&Configuration {
            roof_shape: RoofShape::Gable,
            ..Configuration::default()
        });
        assert!(!flat.iter().any(|p| p.kind() == PartKind::GableInfill));
        assert_eq!(
            gable
                .iter()
                .filter(|p| p.kind() == PartKind::GableInfill)
                .count(),
            2
        );
        // Two pitched planes double the sheet count
        let flat_sheets = flat.iter().filter(|p| p.kind() == PartKind::RoofSheet).count();
        let gable_sheets = gable
            .iter()
            .filter(|p| p.kind() == PartKind::RoofSheet)
            .count();
        assert_eq!(gable_sheets, flat_sheets * 2);
    }

    #[test]
    fn test_purlins_only_for_wide_spans() {
        let narrow = generate(&Configuration::default());
        let wide = generate(&Configuration {
            depth: 7.0,
            ..Configuration::default()
        });
        assert!(!narrow.iter().any(|p| p.kind() == PartKind::Purlin));
        assert!(wide.iter().any(|p| p.kind() == PartKind::Purlin));
    }
}
