//! Layout derivation - resolves a validated configuration against the
//! catalog into a read-only structural snapshot

mod posts;

pub use posts::PostPosition;

use log::debug;
use serde::Serialize;

use crate::catalog::{BeamSpec, SheetSpec, StructuralPattern};
use crate::config::{AttachedSides, Configuration, RoofShape, StructureStyle};

/// Roof fall for standard styles in degrees
pub const STANDARD_SLOPE_DEG: f64 = 2.0;
/// Roof fall for the skillion style in degrees
pub const SKILLION_SLOPE_DEG: f64 = 10.0;

/// Fully resolved structural layout for one configuration
///
/// A value snapshot regenerated wholesale on every pipeline call; nothing
/// here is mutated after derivation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedLayout {
    /// Structure width in metres
    pub width: f64,
    /// Structure depth (span axis) in metres
    pub depth: f64,
    /// Height to the roof underside in metres
    pub height: f64,
    /// Resolved structural pattern
    pub pattern: &'static StructuralPattern,
    /// Resolved beam profile
    pub beam: &'static BeamSpec,
    /// Resolved roof sheet profile
    pub sheet: &'static SheetSpec,
    /// Roof projection beyond the front support line in metres
    pub overhang: f64,
    /// Depth plus overhang in metres
    pub total_depth: f64,
    /// Roof fall in radians
    pub slope: f64,
    /// No wall attachment anywhere
    pub freestanding: bool,
    /// Gable roof shape
    pub gable: bool,
    /// Edges fixed to an existing wall
    pub attached: AttachedSides,
    /// Support positions, perimeter and mid-span
    pub posts: Vec<PostPosition>,
}

impl DerivedLayout {
    /// Half the structure width
    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    /// Half the structure depth
    pub fn half_depth(&self) -> f64 {
        self.depth / 2.0
    }

    /// Plan-centre z of the roof envelope (posts are centred on the
    /// structure origin; the overhang shifts the roof forward)
    pub fn roof_centre_z(&self) -> f64 {
        self.overhang / 2.0
    }
}

/// Derive the structural layout for a validated configuration.
///
/// Pure over the configuration and catalog data; two calls with the same
/// input produce identical layouts including post order.
pub fn derive_layout(config: &Configuration) -> DerivedLayout {
    let freestanding = config.style.is_freestanding();
    let span_mm = config.depth * 1000.0;

    let pattern = StructuralPattern::select(span_mm, freestanding);
    let beam = BeamSpec::select_for_span(span_mm);
    let sheet = SheetSpec::select(config.material, config.sheet_profile);

    let overhang = pattern.overhang_m();
    let total_depth = config.depth + overhang;

    let slope_deg = match config.style {
        StructureStyle::Skillion => SKILLION_SLOPE_DEG,
        _ => STANDARD_SLOPE_DEG,
    };

    let posts = posts::place_posts(
        config.width,
        config.depth,
        beam,
        freestanding,
        &config.attached_sides,
    );

    debug!(
        "layout: {} span {:.0}mm -> {}, beam {}, sheet {}, {} posts",
        if freestanding { "freestanding" } else { "attached" },
        span_mm,
        pattern.id.label(),
        beam.id,
        sheet.id,
        posts.len()
    );

    // Attached edges must never retain a support; the wall carries the roof.
    #[cfg(debug_assertions)]
    for post in &posts {
        if config.attached_sides.back {
            debug_assert!(post.z > -config.depth / 2.0 + 1e-9);
        }
        if config.attached_sides.left {
            debug_assert!(post.x > -config.width / 2.0 + 1e-9);
        }
        if config.attached_sides.right {
            debug_assert!(post.x < config.width / 2.0 - 1e-9);
        }
    }

    DerivedLayout {
        width: config.width,
        depth: config.depth,
        height: config.height,
        pattern,
        beam,
        sheet,
        overhang,
        total_depth,
        slope: slope_deg.to_radians(),
        freestanding,
        gable: config.roof_shape == RoofShape::Gable,
        attached: config.attached_sides,
        posts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PatioType;
    use approx::assert_relative_eq;

    #[test]
    fn test_type_2_adds_overhang() {
        let config = Configuration {
            depth: 5.0,
            ..Configuration::default()
        }
        .validate();
        let layout = derive_layout(&config);
        assert_eq!(layout.pattern.id, PatioType::Type2);
        assert_relative_eq!(layout.overhang, 0.3, epsilon = 1e-9);
        assert_relative_eq!(layout.total_depth, 5.3, epsilon = 1e-9);
    }

    #[test]
    fn test_freestanding_wide_span_is_type_3() {
        let config = Configuration {
            depth: 4.6,
            style: StructureStyle::Freestanding,
            ..Configuration::default()
        }
        .validate();
        let layout = derive_layout(&config);
        assert_eq!(layout.pattern.id, PatioType::Type3);
        assert_eq!(layout.beam.id, "B150");
        assert!(layout.pattern.has_purlins);
        assert_relative_eq!(layout.overhang, 0.0);
    }

    #[test]
    fn test_skillion_slope_is_steeper() {
        let standard = derive_layout(&Configuration::default().validate());
        let skillion = derive_layout(
            &Configuration {
                style: StructureStyle::Skillion,
                ..Configuration::default()
            }
            .validate(),
        );
        assert!(skillion.slope > standard.slope);
    }

    #[test]
    fn test_deterministic() {
        let config = Configuration {
            width: 7.2,
            depth: 5.9,
            style: StructureStyle::Freestanding,
            ..Configuration::default()
        }
        .validate();
        assert_eq!(derive_layout(&config), derive_layout(&config));
    }
}
