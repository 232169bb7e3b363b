//! Frame part emission: site context, footings, columns, brackets, beams
//! and purlins

use crate::config::Configuration;
use crate::layout::DerivedLayout;
use crate::parts::part::{Part, PartKind, Primitive};
use crate::parts::surface::Surface;
use crate::parts::{roof_surface_y, PURLIN_HEIGHT};

/// Square post size in metres (75 mm SHS)
pub(crate) const POST_SIZE: f64 = 0.075;

const BASE_PLATE_SIZE: f64 = 0.14;
const BASE_PLATE_THICKNESS: f64 = 0.005;
const POST_CAP_HEIGHT: f64 = 0.02;
const WALL_BRACKET_SPACING: f64 = 0.9;
const WALL_THICKNESS: f64 = 0.09;
const GROUND_MARGIN: f64 = 1.5;

const PURLIN_WIDTH: f64 = 0.042;
const MID_PURLIN_HEIGHT: f64 = 0.1;
const MID_PURLIN_WIDTH: f64 = 0.05;

const GROUND_COLOR: [f64; 3] = [0.42, 0.48, 0.36];
const WALL_COLOR: [f64; 3] = [0.88, 0.86, 0.82];

/// Ground plane and a wall slab per attached edge
pub(crate) fn emit_site(layout: &DerivedLayout, out: &mut Vec<Part>) {
    let ground_width = layout.width + 2.0 * GROUND_MARGIN;
    let ground_depth = layout.total_depth + 2.0 * GROUND_MARGIN;

    out.push(
        Part::new(PartKind::Ground, "Ground")
            .with_position(0.0, -0.005, layout.roof_centre_z())
            .with_size(ground_width, 0.01, ground_depth)
            .with_surface(Surface::matte(GROUND_COLOR))
            .with_primitive(Primitive::Plane),
    );

    let wall_height = layout.height + 0.9;
    let wall_surface = Surface::matte(WALL_COLOR);

    if layout.attached.back {
        out.push(
            Part::new(PartKind::Wall, "Back wall")
                .with_position(
                    0.0,
                    wall_height / 2.0,
                    -layout.half_depth() - WALL_THICKNESS / 2.0,
                )
                .with_size(layout.width + 1.2, wall_height, WALL_THICKNESS)
                .with_surface(wall_surface.clone()),
        );
    }
    if layout.attached.left {
        out.push(
            Part::new(PartKind::Wall, "Left wall")
                .with_position(
                    -layout.half_width() - WALL_THICKNESS / 2.0,
                    wall_height / 2.0,
                    0.0,
                )
                .with_size(WALL_THICKNESS, wall_height, layout.depth + 1.2)
                .with_surface(wall_surface.clone()),
        );
    }
    if layout.attached.right {
        out.push(
            Part::new(PartKind::Wall, "Right wall")
                .with_position(
                    layout.half_width() + WALL_THICKNESS / 2.0,
                    wall_height / 2.0,
                    0.0,
                )
                .with_size(WALL_THICKNESS, wall_height, layout.depth + 1.2)
                .with_surface(wall_surface),
        );
    }
}

/// One base plate per post
pub(crate) fn emit_base_plates(config: &Configuration, layout: &DerivedLayout, out: &mut Vec<Part>) {
    let surface = Surface::powder_coat(config.frame_color.rgb());
    for post in &layout.posts {
        out.push(
            Part::new(PartKind::BasePlate, "Base plate")
                .with_position(post.x, BASE_PLATE_THICKNESS / 2.0, post.z)
                .with_size(BASE_PLATE_SIZE, BASE_PLATE_THICKNESS, BASE_PLATE_SIZE)
                .with_surface(surface.clone()),
        );
    }
}

/// Columns from the slab to the beam underside, capped where they meet the
/// beam
pub(crate) fn emit_columns(config: &Configuration, layout: &DerivedLayout, out: &mut Vec<Part>) {
    let surface = Surface::powder_coat(config.frame_color.rgb());
    let column_height = layout.height - layout.beam.height_m();

    for (i, post) in layout.posts.iter().enumerate() {
        out.push(
            Part::new(PartKind::Column, format!("Column {}", i + 1))
                .with_position(post.x, column_height / 2.0, post.z)
                .with_size(POST_SIZE, column_height, POST_SIZE)
                .with_surface(surface.clone()),
        );
    }

    for post in &layout.posts {
        out.push(
            Part::new(PartKind::PostCap, "Post cap")
                .with_position(post.x, column_height + POST_CAP_HEIGHT / 2.0, post.z)
                .with_size(POST_SIZE + 0.02, POST_CAP_HEIGHT, POST_SIZE + 0.02)
                .with_surface(surface.clone()),
        );
    }
}

/// A bracket row along every attached edge, at the beam line
pub(crate) fn emit_wall_brackets(
    config: &Configuration,
    layout: &DerivedLayout,
    out: &mut Vec<Part>,
) {
    let surface = Surface::powder_coat(config.frame_color.rgb());
    let bracket_y = layout.height - layout.beam.height_m() / 2.0;

    if layout.attached.back {
        let count = bracket_count(layout.width);
        let step = layout.width / (count - 1) as f64;
        for i in 0..count {
            let x = -layout.half_width() + step * i as f64;
            out.push(wall_bracket(
                "Wall bracket (back)",
                x,
                bracket_y,
                -layout.half_depth(),
                0.0,
                &surface,
            ));
        }
    }
    if layout.attached.left {
        let count = bracket_count(layout.depth);
        let step = layout.depth / (count - 1) as f64;
        for i in 0..count {
            let z = -layout.half_depth() + step * i as f64;
            out.push(wall_bracket(
                "Wall bracket (left)",
                -layout.half_width(),
                bracket_y,
                z,
                std::f64::consts::FRAC_PI_2,
                &surface,
            ));
        }
    }
    if layout.attached.right {
        let count = bracket_count(layout.depth);
        let step = layout.depth / (count - 1) as f64;
        for i in 0..count {
            let z = -layout.half_depth() + step * i as f64;
            out.push(wall_bracket(
                "Wall bracket (right)",
                layout.half_width(),
                bracket_y,
                z,
                std::f64::consts::FRAC_PI_2,
                &surface,
            ));
        }
    }
}

fn wall_bracket(label: &str, x: f64, y: f64, z: f64, ry: f64, surface: &Surface) -> Part {
    Part::new(PartKind::WallBracket, label)
        .with_position(x, y, z)
        .with_rotation(0.0, ry, 0.0)
        .with_size(0.18, 0.12, 0.06)
        .with_surface(surface.clone())
}

fn bracket_count(edge_length: f64) -> usize {
    (edge_length / WALL_BRACKET_SPACING).ceil() as usize + 1
}

/// Front and back beams with a bracket at every supporting post
pub(crate) fn emit_beams(config: &Configuration, layout: &DerivedLayout, out: &mut Vec<Part>) {
    let surface = Surface::powder_coat(config.frame_color.rgb());
    let beam_height = layout.beam.height_m();
    let beam_width = layout.beam.width_m();
    let beam_y = layout.height - beam_height / 2.0;

    out.push(
        Part::new(PartKind::Beam, "Front beam")
            .with_position(0.0, beam_y, layout.half_depth())
            .with_size(layout.width, beam_height, beam_width)
            .with_surface(surface.clone()),
    );

    if layout.freestanding || !layout.attached.back {
        out.push(
            Part::new(PartKind::Beam, "Back beam")
                .with_position(0.0, beam_y, -layout.half_depth())
                .with_size(layout.width, beam_height, beam_width)
                .with_surface(surface.clone()),
        );
    }

    for post in &layout.posts {
        out.push(
            Part::new(PartKind::BeamBracket, "Beam bracket")
                .with_position(post.x, beam_y, post.z)
                .with_size(0.06, 0.12, 0.06)
                .with_surface(surface.clone()),
        );
    }
}

/// Purlins across the width, spaced along the span so no sheet run exceeds
/// its rated span; patterns with a mid purlin get a heavier member on the
/// mid-span line
pub(crate) fn emit_purlins(config: &Configuration, layout: &DerivedLayout, out: &mut Vec<Part>) {
    if !layout.pattern.has_purlins {
        return;
    }

    let surface = Surface::powder_coat(config.frame_color.rgb());
    let bays = (layout.total_depth / layout.sheet.max_span_m()).ceil().max(1.0) as usize;
    let spacing = layout.total_depth / bays as f64;
    let back_z = -layout.half_depth();

    for i in 1..bays {
        let z = back_z + spacing * i as f64;
        // The heavier mid purlin takes over a line that falls on the centre
        if layout.pattern.has_mid_purlin && (z - layout.roof_centre_z()).abs() < 1e-9 {
            continue;
        }
        let y = roof_surface_y(layout, z) - PURLIN_HEIGHT / 2.0;
        out.push(
            Part::new(PartKind::Purlin, "Purlin")
                .with_position(0.0, y, z)
                .with_size(layout.width, PURLIN_HEIGHT, PURLIN_WIDTH)
                .with_surface(surface.clone()),
        );
    }

    if layout.pattern.has_mid_purlin {
        let z = layout.roof_centre_z();
        let y = roof_surface_y(layout, z) - MID_PURLIN_HEIGHT / 2.0;
        out.push(
            Part::new(PartKind::Purlin, "Mid purlin")
                .with_position(0.0, y, z)
                .with_size(layout.width, MID_PURLIN_HEIGHT, MID_PURLIN_WIDTH)
                .with_surface(surface),
        );
    }
}
