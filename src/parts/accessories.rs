//! Accessory part emission: designer beam, lighting, fan, decorative
//! column sleeves

use std::f64::consts::FRAC_PI_2;

use crate::config::Configuration;
use crate::layout::DerivedLayout;
use crate::parts::frame::POST_SIZE;
use crate::parts::part::{Part, PartKind, Primitive};
use crate::parts::surface::Surface;

const LIGHT_RADIUS: f64 = 0.06;
const LIGHT_HEIGHT: f64 = 0.12;
const LIGHT_COLOR: [f64; 3] = [0.98, 0.97, 0.9];

const FAN_DROP: f64 = 0.3;
const FAN_BLADE_COUNT: usize = 4;
const FAN_BLADE_REACH: f64 = 0.33;
const FAN_COLOR: [f64; 3] = [0.12, 0.12, 0.13];

/// Feature beam across the underside of the roof
pub(crate) fn emit_designer_beam(
    config: &Configuration,
    layout: &DerivedLayout,
    out: &mut Vec<Part>,
) {
    if !config.designer_beam {
        return;
    }
    out.push(
        Part::new(PartKind::DesignerBeam, "Designer beam")
            .with_position(0.0, layout.height - 0.2, layout.roof_centre_z())
            .with_size(layout.width, 0.09, 0.045)
            .with_surface(Surface::powder_coat(config.frame_color.rgb())),
    );
}

/// Down lights along the centre line, one per three metres of width
pub(crate) fn emit_lights(config: &Configuration, layout: &DerivedLayout, out: &mut Vec<Part>) {
    if !config.lighting {
        return;
    }
    let count = (layout.width / 3.0).ceil() as usize;
    let step = layout.width / (count + 1) as f64;
    let z = layout.roof_centre_z();

    for i in 0..count {
        let x = -layout.half_width() + step * (i + 1) as f64;
        out.push(
            Part::new(PartKind::Light, format!("Light {}", i + 1))
                .with_position(x, layout.height - LIGHT_HEIGHT / 2.0, z)
                .with_size(LIGHT_RADIUS * 2.0, LIGHT_HEIGHT, LIGHT_RADIUS * 2.0)
                .with_surface(Surface::fitting(LIGHT_COLOR))
                .with_primitive(Primitive::Cylinder {
                    radius: LIGHT_RADIUS,
                }),
        );
    }
}

/// Ceiling fan at the roof centre: drop rod, motor and blades
pub(crate) fn emit_fan(config: &Configuration, layout: &DerivedLayout, out: &mut Vec<Part>) {
    if !config.fan {
        return;
    }
    let z = layout.roof_centre_z();
    let surface = Surface::fitting(FAN_COLOR);

    out.push(
        Part::new(PartKind::FanRod, "Fan rod")
            .with_position(0.0, layout.height - FAN_DROP / 2.0, z)
            .with_size(0.024, FAN_DROP, 0.024)
            .with_surface(surface.clone())
            .with_primitive(Primitive::Cylinder { radius: 0.012 }),
    );

    let motor_y = layout.height - FAN_DROP - 0.04;
    out.push(
        Part::new(PartKind::FanMotor, "Fan motor")
            .with_position(0.0, motor_y, z)
            .with_size(0.18, 0.08, 0.18)
            .with_surface(surface.clone())
            .with_primitive(Primitive::Cylinder { radius: 0.09 }),
    );

    let blade_y = motor_y - 0.05;
    for i in 0..FAN_BLADE_COUNT {
        let angle = FRAC_PI_2 * i as f64;
        out.push(
            Part::new(PartKind::FanBlade, format!("Fan blade {}", i + 1))
                .with_position(
                    FAN_BLADE_REACH * angle.cos(),
                    blade_y,
                    z + FAN_BLADE_REACH * angle.sin(),
                )
                .with_rotation(0.0, -angle, 0.0)
                .with_size(0.55, 0.012, 0.14)
                .with_surface(surface.clone()),
        );
    }
}

/// Decorative sleeve over every structural post
pub(crate) fn emit_decorative_columns(
    config: &Configuration,
    layout: &DerivedLayout,
    out: &mut Vec<Part>,
) {
    if !config.decorative_columns {
        return;
    }
    let surface = Surface::powder_coat(config.frame_color.rgb());
    let sleeve = POST_SIZE + 0.04;
    let column_height = layout.height - layout.beam.height_m();

    for post in &layout.posts {
        out.push(
            Part::new(PartKind::DecorativeColumn, "Column sleeve")
                .with_position(post.x, column_height / 2.0, post.z)
                .with_size(sleeve, column_height, sleeve)
                .with_surface(surface.clone()),
        );
    }
}
