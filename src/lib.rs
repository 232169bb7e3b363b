//! Patio Engine - parametric structural layout and parts-list generation
//!
//! This library turns a small set of user choices (dimensions, material,
//! mounting style, accessories) into a catalog-consistent structural
//! layout for a modular outdoor structure:
//! - Configuration validation and clamping
//! - Catalog-driven selection (beam size, roof sheet, structural pattern)
//! - Post placement with span subdivision and attachment exclusion
//! - Deterministic expansion into an ordered list of typed parts
//!
//! The pipeline is synchronous, free of I/O and shared mutable state, and
//! reproducible: identical input yields an identical layout and parts
//! list, which the rendering, pricing, export and QA collaborators all
//! rely on.
//!
//! ## Example
//! ```rust
//! use patio_engine::prelude::*;
//!
//! let config = Configuration {
//!     width: 4.0,
//!     depth: 3.0,
//!     style: StructureStyle::Freestanding,
//!     ..Configuration::default()
//! };
//!
//! let output = Pipeline::run(&config);
//! assert_eq!(output.layout.posts.len(), 4);
//!
//! let summary = LayoutSummary::from_output(&output);
//! println!("{} on beam {}", summary.patio_type, summary.beam_id);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod layout;
pub mod parts;
pub mod pipeline;
pub mod summary;

// Re-export common types
pub mod prelude {
    pub use crate::catalog::{BeamSpec, PatioType, SheetRun, SheetSpec, StructuralPattern};
    pub use crate::config::{
        AttachedSides, Configuration, FrameColor, RoofMaterial, RoofShape, SheetProfile,
        StructureStyle,
    };
    pub use crate::error::{EngineError, EngineResult};
    pub use crate::layout::{derive_layout, DerivedLayout, PostPosition};
    pub use crate::parts::{
        generate_parts, Part, PartId, PartKind, Primitive, Surface, SurfaceCache,
    };
    pub use crate::pipeline::{Pipeline, PipelineOutput};
    pub use crate::summary::LayoutSummary;
}
