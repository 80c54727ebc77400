use crate::{
    foundation::core::{BezPath, Rect, Rgba8},
    index::diagram_index::DiagramIndex,
    model::{analysis::AnalysisType, diagram::Node, kind::RenderableKind},
    profiles::{
        color::ColorProfiles,
        stroke::{StrokeSpec, StrokeStyle},
    },
    renderers::renderer_for,
};

/// Alpha factor applied to faded-out objects.
pub const FADE_OUT: f32 = 0.5;

/// Per-node paint decisions for one frame. Rebuilt every frame, never cached.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeRenderInfo {
    pub node_id: i64,
    pub kind: RenderableKind,
    pub rect: Rect,
    /// Fillable outline as produced by the kind's renderer.
    pub shape: BezPath,
    pub fill: Rgba8,
    pub border: Rgba8,
    pub text: Rgba8,
    pub border_stroke: StrokeSpec,
    pub selected: bool,
    pub haloed: bool,
    pub flagged: bool,
    pub crossed: bool,
    /// Value for the frame's expression column, if the node was hit.
    pub value: Option<f64>,
    /// Share of hit components; `None` when the node was not hit.
    pub hit_fraction: Option<f64>,
}

impl NodeRenderInfo {
    pub fn new(
        node: &Node,
        kind: RenderableKind,
        index: &DiagramIndex,
        profiles: &ColorProfiles,
        column: Option<usize>,
    ) -> Self {
        let renderer = renderer_for(kind);
        let object = crate::model::diagram::DiagramObject::Node(node);
        let base = profiles.diagram.colors(kind);
        let analysis = index.node_analysis(node.id);
        let with_analysis = index.analysis_type() != AnalysisType::None;

        let (mut fill, mut text) = match (with_analysis, analysis.is_some()) {
            (false, _) => (base.fill, base.text),
            (true, true) => (base.lighter_fill, profiles.analysis.hit_text),
            (true, false) => (base.lighter_fill, base.lighter_text),
        };
        let mut border = base.stroke;
        if node.disease() {
            border = profiles.diagram.disease;
            text = profiles.diagram.disease;
        }
        if node.fade_out() {
            fill = fill.fade(FADE_OUT);
            border = border.fade(FADE_OUT);
            text = text.fade(FADE_OUT);
        }

        Self {
            node_id: node.id,
            kind,
            rect: node.prop.rect(),
            shape: (renderer.shape)(&object),
            fill,
            border,
            text,
            border_stroke: StrokeSpec::dashed(StrokeStyle::Border, node.dashed()),
            selected: index.is_selected(node.id),
            haloed: index.is_haloed(node.id),
            flagged: index.is_flagged(node.id),
            crossed: node.crossed(),
            value: column.and_then(|c| index.value(node.id, c)),
            hit_fraction: analysis.map(|a| a.hit_fraction),
        }
    }

    /// Nodes with equal style keys can share one batched paint call.
    pub fn style_key(&self) -> (Rgba8, Rgba8, Rgba8, StrokeSpec) {
        (self.fill, self.border, self.text, self.border_stroke)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/index/render_info.rs"]
mod tests;
