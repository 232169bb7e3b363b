//! Roof part emission: sheets, ribs, underside panels, gable elements and
//! rainwater goods

use nalgebra::{Rotation3, Vector3};

use crate::catalog::SheetRun;
use crate::config::Configuration;
use crate::layout::DerivedLayout;
use crate::parts::part::{Part, PartKind, Primitive};
use crate::parts::surface::Surface;
use crate::parts::{roof_surface_y, GABLE_PITCH_DEG};

const ROOF_COLOR: [f64; 3] = [0.898, 0.89, 0.851];
const UNDERSIDE_COLOR: [f64; 3] = [0.95, 0.94, 0.9];
const RIB_WIDTH: f64 = 0.02;
const UNDERSIDE_THICKNESS: f64 = 0.012;

const GUTTER_HEIGHT: f64 = 0.115;
const GUTTER_DEPTH: f64 = 0.125;
const DOWNPIPE_RADIUS: f64 = 0.045;

/// Roof covering for the whole structure.
///
/// A flat roof is a single tilted plane falling toward the open front
/// edge; a gable bypasses the flat emission entirely and builds two
/// pitched planes plus the triangular end infills.
pub(crate) fn emit_roof(layout: &DerivedLayout, out: &mut Vec<Part>) {
    if layout.gable {
        let half = layout.total_depth / 2.0;
        let pitch = GABLE_PITCH_DEG.to_radians();
        let centre = layout.roof_centre_z();

        // Front slope falls toward +z, back slope toward -z
        emit_sheet_plane(layout, out, centre + half / 2.0, half, pitch);
        emit_sheet_plane(layout, out, centre - half / 2.0, half, -pitch);
        emit_gable_infill(layout, out);
    } else {
        emit_sheet_plane(
            layout,
            out,
            layout.roof_centre_z(),
            layout.total_depth,
            layout.slope,
        );
    }
}

/// One roof plane: a run of sheets, ribs when the profile carries them and
/// an underside panel for insulated material.
///
/// Sheets run lengthwise (along the span axis, bearing on the front and
/// back beams) or crosswise (along the width axis, bearing on purlins),
/// per the resolved pattern.
fn emit_sheet_plane(
    layout: &DerivedLayout,
    out: &mut Vec<Part>,
    centre_z: f64,
    plan_length: f64,
    tilt: f64,
) {
    let sheet = layout.sheet;
    let cover = sheet.cover_width_m();
    let thickness = sheet.thickness_m();

    let plane_y = roof_surface_y(layout, centre_z) + thickness / 2.0;
    let rotation = Rotation3::from_euler_angles(tilt, 0.0, 0.0);
    let surface = Surface::roofing(ROOF_COLOR);

    match layout.pattern.sheet_run {
        SheetRun::Lengthwise => {
            let length = plan_length / tilt.cos();
            let count = (layout.width / cover).ceil() as usize;

            for i in 0..count {
                let x = -layout.half_width() + cover * (i as f64 + 0.5);
                out.push(
                    Part::new(PartKind::RoofSheet, format!("Roof sheet {}", i + 1))
                        .with_position(x, plane_y, centre_z)
                        .with_rotation(tilt, 0.0, 0.0)
                        .with_size(cover, thickness, length)
                        .with_surface(surface.clone()),
                );
                if sheet.has_ribs() {
                    emit_lengthwise_ribs(layout, out, x, plane_y, centre_z, length, &rotation);
                }
            }
        }
        SheetRun::Crosswise => {
            // The tilt is about the sheet's long axis, so the plan cover
            // shortens instead of the sheet length
            let count = (plan_length / (cover * tilt.cos())).ceil() as usize;

            for i in 0..count {
                let local_z = -plan_length / 2.0 + cover * tilt.cos() * (i as f64 + 0.5);
                let offset = rotation * Vector3::new(0.0, 0.0, local_z / tilt.cos());
                out.push(
                    Part::new(PartKind::RoofSheet, format!("Roof sheet {}", i + 1))
                        .with_position(0.0, plane_y + offset.y, centre_z + offset.z)
                        .with_rotation(tilt, 0.0, 0.0)
                        .with_size(layout.width, thickness, cover)
                        .with_surface(surface.clone()),
                );
                if sheet.has_ribs() {
                    emit_crosswise_ribs(
                        layout,
                        out,
                        plane_y + offset.y,
                        centre_z + offset.z,
                        &rotation,
                    );
                }
            }
        }
    }

    if sheet.insulated {
        let offset = rotation * Vector3::new(0.0, -(thickness + UNDERSIDE_THICKNESS) / 2.0, 0.0);
        out.push(
            Part::new(PartKind::UndersidePanel, "Underside panel")
                .with_position(offset.x, plane_y + offset.y, centre_z + offset.z)
                .with_rotation(tilt, 0.0, 0.0)
                .with_size(layout.width, UNDERSIDE_THICKNESS, plan_length / tilt.cos())
                .with_surface(Surface::matte(UNDERSIDE_COLOR)),
        );
    }
}

/// Ribs along a lengthwise sheet, spaced on the profile's rib centres
fn emit_lengthwise_ribs(
    layout: &DerivedLayout,
    out: &mut Vec<Part>,
    sheet_x: f64,
    plane_y: f64,
    centre_z: f64,
    length: f64,
    rotation: &Rotation3<f64>,
) {
    let sheet = layout.sheet;
    let cover = sheet.cover_width_m();
    let spacing = sheet.rib_spacing_mm / 1000.0;
    let rib_height = sheet.rib_height_mm / 1000.0;
    let lift = (sheet.thickness_m() + rib_height) / 2.0;

    let count = (cover / spacing).floor() as usize + 1;
    let margin = (cover - spacing * (count - 1) as f64) / 2.0;
    let surface = Surface::roofing(ROOF_COLOR);

    for j in 0..count {
        let local_x = -cover / 2.0 + margin + spacing * j as f64;
        let offset = rotation * Vector3::new(local_x, lift, 0.0);
        out.push(
            Part::new(PartKind::Rib, "Rib")
                .with_position(sheet_x + offset.x, plane_y + offset.y, centre_z + offset.z)
                .with_rotation(rotation.euler_angles().0, 0.0, 0.0)
                .with_size(RIB_WIDTH, rib_height, length)
                .with_surface(surface.clone()),
        );
    }
}

/// Ribs along a crosswise sheet, running the full width
fn emit_crosswise_ribs(
    layout: &DerivedLayout,
    out: &mut Vec<Part>,
    sheet_y: f64,
    sheet_z: f64,
    rotation: &Rotation3<f64>,
) {
    let sheet = layout.sheet;
    let cover = sheet.cover_width_m();
    let spacing = sheet.rib_spacing_mm / 1000.0;
    let rib_height = sheet.rib_height_mm / 1000.0;
    let lift = (sheet.thickness_m() + rib_height) / 2.0;

    let count = (cover / spacing).floor() as usize + 1;
    let margin = (cover - spacing * (count - 1) as f64) / 2.0;
    let surface = Surface::roofing(ROOF_COLOR);

    for j in 0..count {
        let local_z = -cover / 2.0 + margin + spacing * j as f64;
        let offset = rotation * Vector3::new(0.0, lift, local_z);
        out.push(
            Part::new(PartKind::Rib, "Rib")
                .with_position(offset.x, sheet_y + offset.y, sheet_z + offset.z)
                .with_rotation(rotation.euler_angles().0, 0.0, 0.0)
                .with_size(layout.width, rib_height, RIB_WIDTH)
                .with_surface(surface.clone()),
        );
    }
}

/// Triangular infill closing each gable end
fn emit_gable_infill(layout: &DerivedLayout, out: &mut Vec<Part>) {
    let half = layout.total_depth / 2.0;
    let rise = half * GABLE_PITCH_DEG.to_radians().tan();
    let centre = layout.roof_centre_z();
    let base_y = roof_surface_y(layout, centre + half);
    let surface = Surface::matte(UNDERSIDE_COLOR);

    for (x, label) in [
        (-layout.half_width(), "Gable infill (left)"),
        (layout.half_width(), "Gable infill (right)"),
    ] {
        out.push(
            Part::new(PartKind::GableInfill, label)
                .with_position(x, base_y + rise / 2.0, centre)
                .with_size(0.02, rise, layout.total_depth)
                .with_surface(surface.clone())
                .with_primitive(Primitive::Plane),
        );
    }
}

/// Gutter run and downpipe on each low eave
pub(crate) fn emit_rainwater(config: &Configuration, layout: &DerivedLayout, out: &mut Vec<Part>) {
    if !config.gutters {
        return;
    }

    let surface = Surface::powder_coat(config.frame_color.rgb());
    let front_z = layout.roof_centre_z() + layout.total_depth / 2.0;
    let back_z = layout.roof_centre_z() - layout.total_depth / 2.0;

    emit_gutter_run(
        layout,
        out,
        &surface,
        "Gutter (front)",
        front_z + GUTTER_DEPTH / 2.0,
        layout.half_width() - 0.1,
    );

    // A gable sheds both ways; the back eave only drains when it is open
    if layout.gable && !layout.attached.back {
        emit_gutter_run(
            layout,
            out,
            &surface,
            "Gutter (back)",
            back_z - GUTTER_DEPTH / 2.0,
            -layout.half_width() + 0.1,
        );
    }
}

fn emit_gutter_run(
    layout: &DerivedLayout,
    out: &mut Vec<Part>,
    surface: &Surface,
    label: &str,
    z: f64,
    downpipe_x: f64,
) {
    let eave_y = roof_surface_y(layout, z);
    let gutter_y = eave_y - GUTTER_HEIGHT / 2.0;

    out.push(
        Part::new(PartKind::Gutter, label)
            .with_position(0.0, gutter_y, z)
            .with_size(layout.width + 0.1, GUTTER_HEIGHT, GUTTER_DEPTH)
            .with_surface(surface.clone()),
    );

    let pipe_length = eave_y - GUTTER_HEIGHT;
    out.push(
        Part::new(PartKind::Downpipe, "Downpipe")
            .with_position(downpipe_x, pipe_length / 2.0, z)
            .with_size(DOWNPIPE_RADIUS * 2.0, pipe_length, DOWNPIPE_RADIUS * 2.0)
            .with_surface(Surface::fitting(surface.color))
            .with_primitive(Primitive::Cylinder {
                radius: DOWNPIPE_RADIUS,
            }),
    );
}
