use std::collections::HashMap;

use crate::{
    foundation::error::{RasterError, RasterResult},
    model::{analysis::AnalysisResult, diagram::Diagram, graph::Graph},
    resources::ResourceProvider,
};

/// In-memory provider for callers that already hold parsed data.
#[derive(Clone, Debug, Default)]
pub struct MemoryResources {
    diagrams: HashMap<String, Diagram>,
    graphs: HashMap<String, Graph>,
    analyses: HashMap<String, AnalysisResult>,
}

impl MemoryResources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a diagram under its own stable id, with an optional graph.
    pub fn with_diagram(mut self, diagram: Diagram, graph: Option<Graph>) -> Self {
        let st_id = diagram.stable_id.clone();
        if let Some(graph) = graph {
            self.graphs.insert(st_id.clone(), graph);
        }
        self.diagrams.insert(st_id, diagram);
        self
    }

    pub fn with_analysis(mut self, token: impl Into<String>, analysis: AnalysisResult) -> Self {
        self.analyses.insert(token.into(), analysis);
        self
    }
}

impl ResourceProvider for MemoryResources {
    fn diagram(&self, st_id: &str) -> RasterResult<Diagram> {
        self.diagrams
            .get(st_id)
            .cloned()
            .ok_or_else(|| RasterError::resource_not_found(format!("diagram '{st_id}'")))
    }

    /// A registered diagram without a graph gets an empty one.
    fn graph(&self, st_id: &str) -> RasterResult<Graph> {
        match self.graphs.get(st_id) {
            Some(g) => Ok(g.clone()),
            None if self.diagrams.contains_key(st_id) => Ok(Graph::default()),
            None => Err(RasterError::resource_not_found(format!("graph '{st_id}'"))),
        }
    }

    fn analysis(&self, token: &str) -> RasterResult<AnalysisResult> {
        self.analyses.get(token).cloned().ok_or_else(|| {
            RasterError::external_service(format!("unknown analysis token '{token}'"))
        })
    }
}
