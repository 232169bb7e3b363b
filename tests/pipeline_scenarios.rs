//! End-to-end pipeline scenarios and invariants

use approx::assert_relative_eq;
use patio_engine::prelude::*;

fn freestanding(width: f64, depth: f64) -> Configuration {
    Configuration {
        width,
        depth,
        style: StructureStyle::Freestanding,
        ..Configuration::default()
    }
}

#[test]
fn mid_post_pair_inserted_when_width_exceeds_beam_span() {
    // depth 3.5 m selects the small beam (4.5 m rating); a 5 m width
    // therefore needs one mid post on the front and back edges
    let output = Pipeline::run(&freestanding(5.0, 3.5));
    let layout = &output.layout;

    assert_eq!(layout.beam.id, "B110");
    assert_eq!(layout.posts.len(), 6);

    let mids: Vec<&PostPosition> = layout.posts.iter().filter(|p| p.x.abs() < 1e-9).collect();
    assert_eq!(mids.len(), 2);
    assert!(mids.iter().any(|p| p.z > 0.0));
    assert!(mids.iter().any(|p| p.z < 0.0));
}

#[test]
fn attached_fly_over_drops_back_corners() {
    let config = Configuration {
        width: 3.0,
        depth: 3.0,
        style: StructureStyle::FlyOver,
        attached_sides: AttachedSides::back_only(),
        ..Configuration::default()
    };
    let output = Pipeline::run(&config);

    // Only the two front corners remain
    assert_eq!(output.layout.posts.len(), 2);
    assert!(output.layout.posts.iter().all(|p| p.z > 0.0));

    // One bracket row along the back edge substitutes for the posts
    let brackets: Vec<&Part> = output.parts_of_kind(PartKind::WallBracket).collect();
    assert!(!brackets.is_empty());
    assert!(brackets.iter().all(|b| (b.position[2] + 1.5).abs() < 1e-9));
}

#[test]
fn span_4600_resolves_type_3_on_large_beam() {
    let output = Pipeline::run(&freestanding(4.0, 4.6));
    let layout = &output.layout;

    assert_eq!(layout.pattern.id, PatioType::Type3);
    assert_eq!(layout.pattern.sheet_run, SheetRun::Crosswise);
    assert!(layout.pattern.has_purlins);
    assert!(!layout.pattern.has_overhang());
    assert_eq!(layout.beam.id, "B150");
    assert!(output.count_of_kind(PartKind::Purlin) > 0);
}

#[test]
fn insulated_material_ignores_profile_sub_type() {
    for profile in [SheetProfile::Corrugated, SheetProfile::Flat] {
        let config = Configuration {
            material: RoofMaterial::Insulated,
            sheet_profile: profile,
            ..Configuration::default()
        };
        let output = Pipeline::run(&config);
        assert_eq!(output.layout.sheet.id, "SolarSpan75");
        assert!(output.layout.sheet.insulated);
    }
}

#[test]
fn no_accessories_means_no_accessory_parts() {
    let output = Pipeline::run(&Configuration::default());
    for kind in [
        PartKind::Light,
        PartKind::FanRod,
        PartKind::FanMotor,
        PartKind::FanBlade,
        PartKind::Gutter,
        PartKind::Downpipe,
        PartKind::DesignerBeam,
        PartKind::DecorativeColumn,
    ] {
        assert_eq!(output.count_of_kind(kind), 0, "unexpected {kind} part");
    }
}

#[test]
fn pipeline_output_is_byte_identical_across_runs() {
    let config = Configuration {
        width: 11.4,
        depth: 6.2,
        style: StructureStyle::Freestanding,
        roof_shape: RoofShape::Gable,
        material: RoofMaterial::Colorbond,
        lighting: true,
        fan: true,
        gutters: true,
        designer_beam: true,
        decorative_columns: true,
        ..Configuration::default()
    };

    let first = serde_json::to_string(&Pipeline::run(&config)).unwrap();
    let second = serde_json::to_string(&Pipeline::run(&config)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn validation_is_idempotent_and_in_range() {
    let raw_values = [-10.0, 0.0, 2.0, 3.7, 8.0, 12.0, 99.0];
    for &width in &raw_values {
        for &depth in &raw_values {
            let config = Configuration {
                width,
                depth,
                height: width + depth,
                ..Configuration::default()
            };
            let once = config.validate();
            assert_eq!(once, once.validate());
            assert!((2.0..=12.0).contains(&once.width));
            assert!((2.0..=8.0).contains(&once.depth));
            assert!((2.4..=4.5).contains(&once.height));
        }
    }
}

#[test]
fn no_post_ever_sits_on_an_attached_edge() {
    let sides = [
        AttachedSides { back: true, left: false, right: false },
        AttachedSides { back: false, left: true, right: false },
        AttachedSides { back: true, left: true, right: false },
        AttachedSides { back: true, left: false, right: true },
        AttachedSides { back: true, left: true, right: true },
    ];
    for attached in sides {
        let config = Configuration {
            width: 10.0,
            depth: 4.0,
            style: StructureStyle::Attached,
            attached_sides: attached,
            ..Configuration::default()
        };
        let output = Pipeline::run(&config);
        let half_width = output.layout.half_width();
        let half_depth = output.layout.half_depth();

        for post in &output.layout.posts {
            if attached.back {
                assert!(post.z > -half_depth + 1e-9);
            }
            if attached.left {
                assert!(post.x > -half_width + 1e-9);
            }
            if attached.right {
                assert!(post.x < half_width - 1e-9);
            }
        }
    }
}

#[test]
fn fully_attached_structure_keeps_only_mandatory_mid_posts() {
    let config = Configuration {
        width: 5.0,
        depth: 3.5,
        style: StructureStyle::Attached,
        attached_sides: AttachedSides { back: true, left: true, right: true },
        ..Configuration::default()
    };
    let output = Pipeline::run(&config);

    // Every corner is gone; the single front mid post must survive
    assert_eq!(output.layout.posts.len(), 1);
    let post = &output.layout.posts[0];
    assert!(post.x.abs() < 1e-9);
    assert!(post.z > 0.0);
}

#[test]
fn mid_post_count_and_spacing_cover_the_width() {
    for width in [4.6, 5.0, 7.3, 9.0, 10.1, 12.0] {
        let output = Pipeline::run(&freestanding(width, 3.0));
        let layout = &output.layout;
        let max_span = layout.beam.max_span_m();
        let expected_mids = if width > max_span {
            (width / max_span).ceil() as usize - 1
        } else {
            0
        };

        let mut front_xs: Vec<f64> = layout
            .posts
            .iter()
            .filter(|p| p.z > 0.0)
            .map(|p| p.x)
            .collect();
        front_xs.sort_by(|a, b| a.partial_cmp(b).unwrap());

        assert_eq!(front_xs.len(), expected_mids + 2, "width {width}");

        let spacing = width / (expected_mids + 1) as f64;
        for pair in front_xs.windows(2) {
            assert_relative_eq!(pair[1] - pair[0], spacing, epsilon = 1e-9);
        }
    }
}

#[test]
fn selection_capability_never_decreases_with_span() {
    let mut last_beam_span = 0.0;
    let mut last_pattern_span = 0.0;
    for span_mm in (2000..8000).step_by(100) {
        let beam = BeamSpec::select_for_span(span_mm as f64);
        let pattern = StructuralPattern::select(span_mm as f64, true);
        assert!(beam.max_span_mm >= last_beam_span);
        assert!(pattern.max_span_mm >= last_pattern_span);
        last_beam_span = beam.max_span_mm;
        last_pattern_span = pattern.max_span_mm;
    }
}

#[test]
fn accessory_toggle_changes_only_that_accessory() {
    let accessory_kinds: [(&str, Vec<PartKind>); 5] = [
        ("lighting", vec![PartKind::Light]),
        (
            "fan",
            vec![PartKind::FanRod, PartKind::FanMotor, PartKind::FanBlade],
        ),
        ("gutters", vec![PartKind::Gutter, PartKind::Downpipe]),
        ("designer_beam", vec![PartKind::DesignerBeam]),
        ("decorative_columns", vec![PartKind::DecorativeColumn]),
    ];

    let base = Configuration {
        width: 6.0,
        depth: 4.0,
        ..Configuration::default()
    };
    let without = Pipeline::run(&base);

    for (name, kinds) in accessory_kinds {
        let mut config = base.clone();
        match name {
            "lighting" => config.lighting = true,
            "fan" => config.fan = true,
            "gutters" => config.gutters = true,
            "designer_beam" => config.designer_beam = true,
            "decorative_columns" => config.decorative_columns = true,
            _ => unreachable!(),
        }
        let with = Pipeline::run(&config);

        assert!(
            kinds.iter().all(|k| with.count_of_kind(*k) > 0),
            "{name} emitted nothing"
        );

        // Removing the accessory's kinds must restore the baseline exactly
        let stripped: Vec<&Part> = with
            .parts
            .iter()
            .filter(|p| !kinds.contains(&p.kind()))
            .collect();
        let baseline: Vec<&Part> = without.parts.iter().collect();
        assert_eq!(stripped, baseline, "{name} disturbed unrelated parts");
    }
}

#[test]
fn assembly_order_starts_with_site_and_footings() {
    let output = Pipeline::run(&Configuration::default());
    assert_eq!(output.parts[0].kind(), PartKind::Ground);

    let first_plate = output
        .parts
        .iter()
        .position(|p| p.kind() == PartKind::BasePlate)
        .unwrap();
    let first_column = output
        .parts
        .iter()
        .position(|p| p.kind() == PartKind::Column)
        .unwrap();
    let first_beam = output
        .parts
        .iter()
        .position(|p| p.kind() == PartKind::Beam)
        .unwrap();
    let first_sheet = output
        .parts
        .iter()
        .position(|p| p.kind() == PartKind::RoofSheet)
        .unwrap();

    assert!(first_plate < first_column);
    assert!(first_column < first_beam);
    assert!(first_beam < first_sheet);
}
