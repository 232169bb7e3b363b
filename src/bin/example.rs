//! Patio Engine Example - attached patio walk-through

use anyhow::Result;
use patio_engine::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    println!("=== Patio Engine Example: Attached Patio ===\n");

    // A 6 x 5 m patio attached to the back wall, with the common extras
    let config = Configuration {
        width: 6.0,
        depth: 5.0,
        height: 2.7,
        material: RoofMaterial::Insulated,
        style: StructureStyle::Attached,
        attached_sides: AttachedSides::back_only(),
        lighting: true,
        gutters: true,
        frame_color: FrameColor::Monument,
        ..Configuration::default()
    };

    let output = Pipeline::run(&config);
    let layout = &output.layout;

    println!("Pattern:  {}", layout.pattern.id.label());
    println!("Beam:     {} (max span {:.1} m)", layout.beam.id, layout.beam.max_span_m());
    println!("Sheet:    {}", layout.sheet.id);
    println!("Overhang: {:.2} m", layout.overhang);
    println!("Posts:");
    for post in &layout.posts {
        println!("  ({:+.2}, {:+.2})", post.x, post.z);
    }

    let summary = LayoutSummary::from_output(&output);
    println!("\nParts ({} total):", summary.total_parts);
    for (kind, count) in &summary.counts_by_kind {
        println!("  {:>3} x {}", count, kind);
    }
    println!(
        "\nRoof area {:.1} m², frame mass ~{:.0} kg",
        summary.roof_area_m2, summary.frame_mass_kg
    );

    println!("\n{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
