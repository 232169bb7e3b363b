//! Pipeline façade - validate, derive and generate in one synchronous call

use serde::Serialize;

use crate::config::Configuration;
use crate::layout::{derive_layout, DerivedLayout};
use crate::parts::{generate_parts, Part, PartKind};

/// Everything a pipeline invocation produces.
///
/// `parts` feeds the rendering and debug/QA collaborators; `layout` feeds
/// pricing and document export. All of it is value-typed and regenerated
/// wholesale on each call - the pipeline keeps no reference after
/// returning.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineOutput {
    /// The validated configuration the rest of the output was derived from
    pub config: Configuration,
    /// Resolved structural layout
    pub layout: DerivedLayout,
    /// Ordered parts list
    pub parts: Vec<Part>,
}

impl PipelineOutput {
    /// Iterate the parts of one kind, in emission order
    pub fn parts_of_kind(&self, kind: PartKind) -> impl Iterator<Item = &Part> + '_ {
        self.parts.iter().filter(move |p| p.kind() == kind)
    }

    /// Number of parts of one kind
    pub fn count_of_kind(&self, kind: PartKind) -> usize {
        self.parts_of_kind(kind).count()
    }
}

/// The structural layout pipeline
pub struct Pipeline;

impl Pipeline {
    /// Run the full pipeline on a raw configuration.
    ///
    /// Total over the input domain: out-of-range numerics are clamped, not
    /// rejected. Each invocation is an independent pure computation, safe
    /// to call concurrently from a request-handler host.
    pub fn run(raw: &Configuration) -> PipelineOutput {
        let config = raw.validate();
        let layout = derive_layout(&config);
        let parts = generate_parts(&config, &layout);
        PipelineOutput {
            config,
            layout,
            parts,
        }
    }
}
