//! Sources of diagram, graph and analysis data.
//!
//! Rendering never fetches anything itself: a [`ResourceProvider`] hands over already-parsed
//! values and maps its own failures onto the [`crate::RasterError`] taxonomy.

pub mod json;
pub mod memory;

use crate::{
    foundation::error::RasterResult,
    model::{analysis::AnalysisResult, diagram::Diagram, graph::Graph},
};

pub use json::JsonDirectory;
pub use memory::MemoryResources;

/// Loader seam between the renderer and wherever diagrams live.
pub trait ResourceProvider {
    /// Layout for a stable id. Missing is `ResourceNotFound`, unparsable is `MalformedInput`.
    fn diagram(&self, st_id: &str) -> RasterResult<Diagram>;

    /// Entity graph for a stable id, with the same error mapping as [`Self::diagram`].
    fn graph(&self, st_id: &str) -> RasterResult<Graph>;

    /// Analysis result for a token. Backend failures are `ExternalServiceError`, invalid
    /// payloads `MalformedAnalysis`.
    fn analysis(&self, token: &str) -> RasterResult<AnalysisResult>;
}

impl<P: ResourceProvider + ?Sized> ResourceProvider for &P {
    fn diagram(&self, st_id: &str) -> RasterResult<Diagram> {
        (**self).diagram(st_id)
    }

    fn graph(&self, st_id: &str) -> RasterResult<Graph> {
        (**self).graph(st_id)
    }

    fn analysis(&self, token: &str) -> RasterResult<AnalysisResult> {
        (**self).analysis(token)
    }
}
