use std::collections::{HashMap, HashSet};

use crate::{
    config::args::RasterArgs,
    foundation::error::{RasterError, RasterResult},
    model::{
        analysis::{AnalysisResult, AnalysisType},
        diagram::Diagram,
        graph::{Graph, GraphNode},
    },
};

/// Analysis values resolved for one diagram node.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeAnalysis {
    /// One value per expression column; empty for enrichment analyses.
    pub exp: Vec<f64>,
    /// Share of the entity's leaf components that were hit, in `[0, 1]`.
    pub hit_fraction: f64,
}

/// Read-only correlation of diagram objects with entity identity and analysis data.
///
/// Built once per render session. Nodes that point at the same graph entity share values.
#[derive(Clone, Debug, Default)]
pub struct DiagramIndex {
    analysis_type: AnalysisType,
    columns: Vec<String>,
    min: f64,
    max: f64,
    nodes: HashMap<i64, NodeAnalysis>,
    selected: HashSet<i64>,
    haloed: HashSet<i64>,
    flagged: HashSet<i64>,
}

impl DiagramIndex {
    #[tracing::instrument(skip_all, fields(diagram = %diagram.stable_id))]
    pub fn new(
        diagram: &Diagram,
        graph: &Graph,
        analysis: Option<&AnalysisResult>,
        args: &RasterArgs,
    ) -> RasterResult<Self> {
        let entities = EntityGraph::new(graph);
        let mut out = Self::default();

        if let Some(analysis) = analysis {
            out.analysis_type = analysis.analysis_type;
            if analysis.analysis_type == AnalysisType::Expression {
                let (columns, min, max) = expression_summary(analysis)?;
                out.columns = columns;
                out.min = min;
                out.max = max;
            }
            if analysis.analysis_type != AnalysisType::None {
                out.nodes = resolve_node_values(diagram, &entities, analysis);
            }
        }

        out.selected = resolve_selection(diagram, &entities, &args.selected);
        for edge in &diagram.edges {
            if out.selected.contains(&edge.id) {
                out.haloed.extend(edge.participants());
            }
        }
        out.flagged = resolve_flags(diagram, &entities, &args.flags);

        tracing::debug!(
            analysis = ?out.analysis_type,
            columns = out.columns.len(),
            hit_nodes = out.nodes.len(),
            selected = out.selected.len(),
            flagged = out.flagged.len(),
            "diagram index built"
        );
        Ok(out)
    }

    pub fn analysis_type(&self) -> AnalysisType {
        self.analysis_type
    }

    /// Ordered expression column names; empty unless the analysis is EXPRESSION.
    pub fn expression_columns(&self) -> &[String] {
        &self.columns
    }

    /// `(min, max)` of the expression values.
    pub fn expression_range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Position of `value` inside the expression range, in `[0, 1]`.
    pub fn normalized(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 || !span.is_finite() {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }

    pub fn node_analysis(&self, node_id: i64) -> Option<&NodeAnalysis> {
        self.nodes.get(&node_id)
    }

    /// Expression value of a node for one column.
    pub fn value(&self, node_id: i64, column: usize) -> Option<f64> {
        self.nodes.get(&node_id)?.exp.get(column).copied()
    }

    pub fn is_hit(&self, node_id: i64) -> bool {
        self.nodes.contains_key(&node_id)
    }

    pub fn is_selected(&self, object_id: i64) -> bool {
        self.selected.contains(&object_id)
    }

    pub fn is_haloed(&self, object_id: i64) -> bool {
        self.haloed.contains(&object_id)
    }

    pub fn is_flagged(&self, object_id: i64) -> bool {
        self.flagged.contains(&object_id)
    }
}

fn expression_summary(analysis: &AnalysisResult) -> RasterResult<(Vec<String>, f64, f64)> {
    let summary = analysis
        .expression
        .as_ref()
        .ok_or_else(|| RasterError::malformed_analysis("expression analysis without summary"))?;
    let columns = summary.column_names.clone();
    if columns.is_empty() {
        return Err(RasterError::malformed_analysis(
            "expression analysis without columns",
        ));
    }

    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for entity in &analysis.entities {
        if entity.exp.len() != columns.len() {
            return Err(RasterError::malformed_analysis(format!(
                "entity '{}' has {} values for {} columns",
                entity.id,
                entity.exp.len(),
                columns.len()
            )));
        }
        for &v in &entity.exp {
            if !v.is_finite() {
                return Err(RasterError::malformed_analysis(format!(
                    "entity '{}' has a non-finite value",
                    entity.id
                )));
            }
            lo = lo.min(v);
            hi = hi.max(v);
        }
    }
    if !lo.is_finite() {
        lo = 0.0;
        hi = 0.0;
    }

    let min = summary.min.unwrap_or(lo);
    let max = summary.max.unwrap_or(hi);
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(RasterError::malformed_analysis(format!(
            "invalid expression range [{min}, {max}]"
        )));
    }
    Ok((columns, min, max))
}

/// Graph lookups by database id, stable id and external identifier.
struct EntityGraph<'a> {
    by_db_id: HashMap<i64, &'a GraphNode>,
    by_name: HashMap<&'a str, Vec<i64>>,
}

impl<'a> EntityGraph<'a> {
    fn new(graph: &'a Graph) -> Self {
        let mut by_db_id = HashMap::with_capacity(graph.nodes.len());
        let mut by_name: HashMap<&str, Vec<i64>> = HashMap::new();
        for node in &graph.nodes {
            by_db_id.insert(node.db_id, node);
            by_name.entry(node.st_id.as_str()).or_default().push(node.db_id);
            if let Some(identifier) = node.identifier.as_deref() {
                by_name.entry(identifier).or_default().push(node.db_id);
            }
        }
        Self { by_db_id, by_name }
    }

    fn ids_named(&self, name: &str) -> &[i64] {
        self.by_name.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    fn children(&self, db_id: i64) -> &[i64] {
        self.by_db_id
            .get(&db_id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Leaf descendants of `db_id` (itself when it has no children). Cycles are cut.
    fn leaves(&self, db_id: i64) -> Vec<i64> {
        let mut out = Vec::new();
        let mut seen = HashSet::new();
        let mut stack = vec![db_id];
        while let Some(id) = stack.pop() {
            if !seen.insert(id) {
                continue;
            }
            let children = self.children(id);
            if children.is_empty() {
                out.push(id);
            } else {
                stack.extend(children.iter().rev());
            }
        }
        out
    }

    /// `db_id` and all of its descendants. Cycles are cut.
    fn closure(&self, db_id: i64) -> HashSet<i64> {
        let mut seen = HashSet::new();
        let mut stack = vec![db_id];
        while let Some(id) = stack.pop() {
            if seen.insert(id) {
                stack.extend_from_slice(self.children(id));
            }
        }
        seen
    }
}

fn resolve_node_values(
    diagram: &Diagram,
    entities: &EntityGraph<'_>,
    analysis: &AnalysisResult,
) -> HashMap<i64, NodeAnalysis> {
    let mut hits: HashMap<i64, &[f64]> = HashMap::new();
    for found in &analysis.entities {
        for &db_id in entities.ids_named(&found.id) {
            hits.entry(db_id).or_insert(found.exp.as_slice());
        }
    }

    let mut per_entity: HashMap<i64, Option<NodeAnalysis>> = HashMap::new();
    let mut out = HashMap::new();
    for node in &diagram.nodes {
        let Some(db_id) = node.reactome_id else {
            continue;
        };
        let resolved = per_entity
            .entry(db_id)
            .or_insert_with(|| entity_values(db_id, entities, &hits));
        if let Some(values) = resolved {
            out.insert(node.id, values.clone());
        }
    }
    out
}

/// Values of an entity: its own when directly hit, otherwise the per-column mean over hit leaf
/// components.
fn entity_values(
    db_id: i64,
    entities: &EntityGraph<'_>,
    hits: &HashMap<i64, &[f64]>,
) -> Option<NodeAnalysis> {
    if let Some(exp) = hits.get(&db_id) {
        return Some(NodeAnalysis {
            exp: exp.to_vec(),
            hit_fraction: 1.0,
        });
    }

    let leaves = entities.leaves(db_id);
    let hit: Vec<&[f64]> = leaves.iter().filter_map(|id| hits.get(id).copied()).collect();
    if hit.is_empty() {
        return None;
    }

    let columns = hit.iter().map(|v| v.len()).min().unwrap_or(0);
    let exp = (0..columns)
        .map(|c| hit.iter().map(|v| v[c]).sum::<f64>() / hit.len() as f64)
        .collect();
    Some(NodeAnalysis {
        exp,
        hit_fraction: hit.len() as f64 / leaves.len() as f64,
    })
}

/// Selected ids are database ids (numeric) or stable ids.
fn resolve_selection(
    diagram: &Diagram,
    entities: &EntityGraph<'_>,
    selected: &[String],
) -> HashSet<i64> {
    let mut wanted: HashSet<i64> = HashSet::new();
    for id in selected {
        match id.trim().parse::<i64>() {
            Ok(db_id) => {
                wanted.insert(db_id);
            }
            Err(_) => wanted.extend(entities.ids_named(id.trim())),
        }
    }
    if wanted.is_empty() {
        return HashSet::new();
    }

    let nodes = diagram.nodes.iter().map(|n| (n.id, n.reactome_id));
    let edges = diagram.edges.iter().map(|e| (e.id, e.reactome_id));
    nodes
        .chain(edges)
        .filter(|(_, reactome_id)| reactome_id.is_some_and(|r| wanted.contains(&r)))
        .map(|(id, _)| id)
        .collect()
}

/// A node is flagged when its entity, or any entity below it, carries a flagged identifier.
fn resolve_flags(
    diagram: &Diagram,
    entities: &EntityGraph<'_>,
    flags: &[String],
) -> HashSet<i64> {
    let flagged: HashSet<i64> = flags
        .iter()
        .flat_map(|f| entities.ids_named(f.trim()).iter().copied())
        .collect();
    if flagged.is_empty() {
        return HashSet::new();
    }

    diagram
        .nodes
        .iter()
        .filter(|n| {
            n.reactome_id
                .is_some_and(|r| entities.closure(r).iter().any(|id| flagged.contains(id)))
        })
        .map(|n| n.id)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/index/diagram_index.rs"]
mod tests;
