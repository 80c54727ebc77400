use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{
    foundation::error::{RasterError, RasterResult},
    model::{analysis::AnalysisResult, diagram::Diagram, graph::Graph},
    resources::ResourceProvider,
};

/// Reads `<root>/<stId>.json`, `<root>/<stId>.graph.json` and
/// `<analysis_dir>/<token>.json`.
#[derive(Clone, Debug)]
pub struct JsonDirectory {
    root: PathBuf,
    analysis_dir: Option<PathBuf>,
}

impl JsonDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            analysis_dir: None,
        }
    }

    pub fn with_analysis_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.analysis_dir = Some(dir.into());
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_layout_file(&self, file_name: &str) -> RasterResult<Vec<u8>> {
        let path = self.root.join(file_name);
        match std::fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(
                RasterError::resource_not_found(format!("'{}' does not exist", path.display())),
            ),
            Err(e) => Err(RasterError::from(
                anyhow::Error::new(e).context(format!("read '{}'", path.display())),
            )),
        }
    }
}

/// Reject ids that would escape the resource directory.
fn checked_file_stem(id: &str) -> RasterResult<&str> {
    let ok = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        && !id.starts_with('.');
    if ok {
        Ok(id)
    } else {
        Err(RasterError::resource_not_found(format!(
            "invalid resource id '{id}'"
        )))
    }
}

/// Parse diagram JSON. Structural failures are `MalformedInput`.
pub fn parse_diagram(bytes: &[u8]) -> RasterResult<Diagram> {
    serde_json::from_slice(bytes)
        .map_err(|e| RasterError::malformed_input(format!("diagram json: {e}")))
}

/// Parse graph JSON. Structural failures are `MalformedInput`.
pub fn parse_graph(bytes: &[u8]) -> RasterResult<Graph> {
    serde_json::from_slice(bytes)
        .map_err(|e| RasterError::malformed_input(format!("graph json: {e}")))
}

/// Parse analysis JSON. Structural failures are `MalformedAnalysis`.
pub fn parse_analysis(bytes: &[u8]) -> RasterResult<AnalysisResult> {
    serde_json::from_slice(bytes)
        .map_err(|e| RasterError::malformed_analysis(format!("analysis json: {e}")))
}

impl ResourceProvider for JsonDirectory {
    fn diagram(&self, st_id: &str) -> RasterResult<Diagram> {
        let stem = checked_file_stem(st_id)?;
        let bytes = self.read_layout_file(&format!("{stem}.json"))?;
        parse_diagram(&bytes)
    }

    fn graph(&self, st_id: &str) -> RasterResult<Graph> {
        let stem = checked_file_stem(st_id)?;
        let bytes = self.read_layout_file(&format!("{stem}.graph.json"))?;
        parse_graph(&bytes)
    }

    fn analysis(&self, token: &str) -> RasterResult<AnalysisResult> {
        let dir = self
            .analysis_dir
            .as_ref()
            .ok_or_else(|| RasterError::external_service("no analysis source configured"))?;
        let stem = checked_file_stem(token)
            .map_err(|_| RasterError::external_service(format!("invalid token '{token}'")))?;
        let path = dir.join(format!("{stem}.json"));
        let bytes = std::fs::read(&path)
            .with_context(|| format!("read analysis '{}'", path.display()))
            .map_err(|e| RasterError::external_service(format!("{e:#}")))?;
        parse_analysis(&bytes)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/resources/json.rs"]
mod tests;
