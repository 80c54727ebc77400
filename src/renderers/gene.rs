//! Genes draw a body under a header band, plus a baseline and a directional arrow.

use crate::{
    foundation::core::{BezPath, Rect, Rgba8},
    model::diagram::DiagramObject,
    profiles::stroke::StrokeSpec,
    render::{
        canvas::{DiagramCanvas, Layer},
        shapes,
        text::DEFAULT_FONT_SIZE,
    },
    renderers::{
        Renderer, merged,
        node::{self, rect_of},
    },
};

pub static GENE: Renderer = Renderer {
    shape,
    fill,
    border,
    text,
    expression: node::expression,
    draw: node::draw,
};

fn shape(object: &DiagramObject<'_>) -> BezPath {
    shapes::gene_fill(rect_of(object))
}

fn fill(canvas: &mut DiagramCanvas, layer: Layer, color: Rgba8, batch: &[DiagramObject<'_>]) {
    node::fill_shapes(canvas, layer, color, batch, shape);
}

fn border(
    canvas: &mut DiagramCanvas,
    layer: Layer,
    color: Rgba8,
    stroke: StrokeSpec,
    batch: &[DiagramObject<'_>],
) {
    if batch.is_empty() {
        return;
    }
    let lines = merged(batch.iter().map(|o| shapes::gene_line(rect_of(o))));
    canvas.stroke(layer, lines, color, stroke);
    let arrows = merged(batch.iter().map(|o| shapes::gene_arrow(rect_of(o))));
    canvas.fill(layer, arrows, color);
}

/// Labels sit below the header band.
fn text(canvas: &mut DiagramCanvas, color: Rgba8, batch: &[DiagramObject<'_>]) {
    for object in batch {
        let r = rect_of(object);
        let label = Rect::new(r.x0, (r.y0 + shapes::GENE_HEADER).min(r.y1), r.x1, r.y1);
        canvas.text(
            Layer::NodeText,
            object.display_name(),
            label,
            color,
            DEFAULT_FONT_SIZE,
        );
    }
}
