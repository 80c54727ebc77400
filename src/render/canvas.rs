use crate::{
    foundation::core::{Affine, BezPath, Rect, Rgba8, union_rect},
    profiles::stroke::StrokeSpec,
    render::cpu::CpuSurface,
};

/// Paint layers, listed bottom to top.
///
/// Everything is static except [`Layer::NodeAnalysis`] and [`Layer::LegendMarker`], which are
/// rebuilt for every animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    CompartmentFill,
    CompartmentBorder,
    CompartmentText,
    LinkBorder,
    LinkEndFill,
    Halo,
    Flag,
    NodeFill,
    NodeAnalysis,
    NodeBorder,
    AttachmentFill,
    AttachmentBorder,
    NodeText,
    Cross,
    Selection,
    NoteText,
    EdgeFlag,
    EdgeSegment,
    EdgeShapeFill,
    EdgeShapeBorder,
    EdgeText,
    Legend,
    LegendMarker,
}

impl Layer {
    pub const COUNT: usize = 23;

    pub const ALL: [Layer; Self::COUNT] = [
        Self::CompartmentFill,
        Self::CompartmentBorder,
        Self::CompartmentText,
        Self::LinkBorder,
        Self::LinkEndFill,
        Self::Halo,
        Self::Flag,
        Self::NodeFill,
        Self::NodeAnalysis,
        Self::NodeBorder,
        Self::AttachmentFill,
        Self::AttachmentBorder,
        Self::NodeText,
        Self::Cross,
        Self::Selection,
        Self::NoteText,
        Self::EdgeFlag,
        Self::EdgeSegment,
        Self::EdgeShapeFill,
        Self::EdgeShapeBorder,
        Self::EdgeText,
        Self::Legend,
        Self::LegendMarker,
    ];

    pub fn is_dynamic(self) -> bool {
        matches!(self, Self::NodeAnalysis | Self::LegendMarker)
    }
}

/// Horizontal placement of a label inside its box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Start,
    Center,
}

/// One recorded paint instruction, in diagram coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Fill {
        path: BezPath,
        color: Rgba8,
        /// Restricts the fill to this region when set.
        clip: Option<BezPath>,
    },
    Stroke {
        path: BezPath,
        color: Rgba8,
        stroke: StrokeSpec,
    },
    Text {
        text: String,
        bounds: Rect,
        color: Rgba8,
        /// Font size in diagram units; the painter scales it with the transform.
        size: f64,
        align: TextAlign,
    },
}

impl DrawOp {
    pub fn bounds(&self) -> Rect {
        use kurbo::Shape;

        match self {
            Self::Fill { path, .. } | Self::Stroke { path, .. } => path.bounding_box(),
            Self::Text { bounds, .. } => *bounds,
        }
    }
}

/// Layered instruction list filled by one layout pass.
///
/// The bounding box is the union of every op ever added, including ops later dropped by
/// [`DiagramCanvas::clear_dynamic`].
#[derive(Clone, Debug, Default)]
pub struct DiagramCanvas {
    layers: [Vec<DrawOp>; Layer::COUNT],
    bounds: Option<Rect>,
}

impl DiagramCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, layer: Layer, op: DrawOp) {
        self.bounds = Some(union_rect(self.bounds, op.bounds()));
        self.layers[layer as usize].push(op);
    }

    pub fn fill(&mut self, layer: Layer, path: BezPath, color: Rgba8) {
        self.add(
            layer,
            DrawOp::Fill {
                path,
                color,
                clip: None,
            },
        );
    }

    pub fn fill_clipped(&mut self, layer: Layer, path: BezPath, color: Rgba8, clip: BezPath) {
        self.add(
            layer,
            DrawOp::Fill {
                path,
                color,
                clip: Some(clip),
            },
        );
    }

    pub fn stroke(&mut self, layer: Layer, path: BezPath, color: Rgba8, stroke: StrokeSpec) {
        self.add(
            layer,
            DrawOp::Stroke {
                path,
                color,
                stroke,
            },
        );
    }

    pub fn text(
        &mut self,
        layer: Layer,
        text: impl Into<String>,
        bounds: Rect,
        color: Rgba8,
        size: f64,
    ) {
        self.text_aligned(layer, text, bounds, color, size, TextAlign::Center);
    }

    pub fn text_aligned(
        &mut self,
        layer: Layer,
        text: impl Into<String>,
        bounds: Rect,
        color: Rgba8,
        size: f64,
        align: TextAlign,
    ) {
        self.add(
            layer,
            DrawOp::Text {
                text: text.into(),
                bounds,
                color,
                size,
                align,
            },
        );
    }

    /// Union of all submitted primitives; `None` until something is added.
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    pub fn ops(&self, layer: Layer) -> &[DrawOp] {
        &self.layers[layer as usize]
    }

    pub fn op_count(&self) -> usize {
        self.layers.iter().map(Vec::len).sum()
    }

    /// Drop every op of one layer. Bounds are kept.
    pub fn clear_layer(&mut self, layer: Layer) {
        self.layers[layer as usize].clear();
    }

    /// Drop the per-frame layers; static layers and bounds are kept.
    pub fn clear_dynamic(&mut self) {
        for layer in Layer::ALL.into_iter().filter(|l| l.is_dynamic()) {
            self.clear_layer(layer);
        }
    }

    /// Replay every layer bottom to top under `transform`.
    pub fn render(&self, surface: &mut CpuSurface, transform: Affine) {
        for op in self.layers.iter().flatten() {
            surface.draw(op, transform);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
