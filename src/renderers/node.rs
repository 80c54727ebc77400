use crate::{
    foundation::core::{BezPath, Rect, Rgba8},
    foundation::error::{RasterError, RasterResult},
    index::{diagram_index::DiagramIndex, render_info::NodeRenderInfo},
    model::{analysis::AnalysisType, diagram::DiagramObject},
    profiles::{
        color::ColorProfiles,
        stroke::{StrokeSpec, StrokeStyle},
    },
    render::{
        canvas::{DiagramCanvas, Layer},
        shapes,
        text::DEFAULT_FONT_SIZE,
    },
    renderers::{LayoutContext, Renderer, ShapeFn, merged, renderer_for},
};

const ATTACHMENT_FONT_SIZE: f64 = 6.0;
const DRUG_MARKER: &str = "Rx";

/// Outline family of a boxed node kind.
pub(crate) trait NodeShape {
    fn outline(r: Rect) -> BezPath;

    /// Second outline stroked with the border, such as the inner ring of a set.
    fn inner(_r: Rect) -> Option<BezPath> {
        None
    }
}

pub(crate) struct Protein;
pub(crate) struct Rna;
pub(crate) struct Chemical;
pub(crate) struct Complex;
pub(crate) struct Entity;
pub(crate) struct EntitySet;
pub(crate) struct ProcessNode;
pub(crate) struct EncapsulatedNode;
pub(crate) struct Cell;

impl NodeShape for Protein {
    fn outline(r: Rect) -> BezPath {
        shapes::rounded_rectangle(r, shapes::ROUND_RECT_ARC)
    }
}

impl NodeShape for Rna {
    fn outline(r: Rect) -> BezPath {
        shapes::rna(r)
    }
}

impl NodeShape for Chemical {
    fn outline(r: Rect) -> BezPath {
        shapes::corridor(r)
    }
}

impl NodeShape for Complex {
    fn outline(r: Rect) -> BezPath {
        shapes::octagon(r, shapes::COMPLEX_CORNER)
    }
}

impl NodeShape for Entity {
    fn outline(r: Rect) -> BezPath {
        shapes::rectangle(r)
    }
}

impl NodeShape for EntitySet {
    fn outline(r: Rect) -> BezPath {
        shapes::rounded_rectangle(r, shapes::ROUND_RECT_ARC)
    }

    fn inner(r: Rect) -> Option<BezPath> {
        Some(shapes::inner_rounded_rectangle(
            r,
            shapes::ENTITY_SET_PADDING,
            shapes::ROUND_RECT_ARC,
        ))
    }
}

impl NodeShape for ProcessNode {
    fn outline(r: Rect) -> BezPath {
        shapes::rectangle(r)
    }

    fn inner(r: Rect) -> Option<BezPath> {
        Some(shapes::rectangle(r.inset(-shapes::PROCESS_NODE_PADDING)))
    }
}

impl NodeShape for EncapsulatedNode {
    fn outline(r: Rect) -> BezPath {
        shapes::hexagon(r)
    }
}

impl NodeShape for Cell {
    fn outline(r: Rect) -> BezPath {
        shapes::rounded_rectangle(r, r.width().min(r.height()) / 4.0)
    }

    fn inner(r: Rect) -> Option<BezPath> {
        let pad = r.width().min(r.height()) / 6.0;
        Some(shapes::inner_rounded_rectangle(r, pad, pad))
    }
}

const fn node_renderer<S: NodeShape>() -> Renderer {
    Renderer {
        shape: shape::<S>,
        fill: fill::<S>,
        border: border::<S>,
        text,
        expression,
        draw,
    }
}

pub static PROTEIN: Renderer = node_renderer::<Protein>();
pub static RNA: Renderer = node_renderer::<Rna>();
pub static CHEMICAL: Renderer = node_renderer::<Chemical>();
pub static COMPLEX: Renderer = node_renderer::<Complex>();
pub static ENTITY: Renderer = node_renderer::<Entity>();
pub static ENTITY_SET: Renderer = node_renderer::<EntitySet>();
pub static PROCESS_NODE: Renderer = node_renderer::<ProcessNode>();
pub static ENCAPSULATED_NODE: Renderer = node_renderer::<EncapsulatedNode>();
pub static CELL: Renderer = node_renderer::<Cell>();

/// Box of a boxed object; line-like objects have none.
pub(crate) fn rect_of(object: &DiagramObject<'_>) -> Rect {
    object.prop().map(|p| p.rect()).unwrap_or(Rect::ZERO)
}

fn shape<S: NodeShape>(object: &DiagramObject<'_>) -> BezPath {
    S::outline(rect_of(object))
}

fn fill<S: NodeShape>(
    canvas: &mut DiagramCanvas,
    layer: Layer,
    color: Rgba8,
    batch: &[DiagramObject<'_>],
) {
    fill_shapes(canvas, layer, color, batch, shape::<S>);
}

fn border<S: NodeShape>(
    canvas: &mut DiagramCanvas,
    layer: Layer,
    color: Rgba8,
    stroke: StrokeSpec,
    batch: &[DiagramObject<'_>],
) {
    let outlines = merged(batch.iter().map(|o| {
        let r = rect_of(o);
        let mut path = S::outline(r);
        if let Some(inner) = S::inner(r) {
            path.extend(inner.elements().iter().copied());
        }
        path
    }));
    canvas.stroke(layer, outlines, color, stroke);
}

pub(crate) fn fill_shapes(
    canvas: &mut DiagramCanvas,
    layer: Layer,
    color: Rgba8,
    batch: &[DiagramObject<'_>],
    shape: ShapeFn,
) {
    if batch.is_empty() {
        return;
    }
    canvas.fill(layer, merged(batch.iter().map(shape)), color);
}

fn text(canvas: &mut DiagramCanvas, color: Rgba8, batch: &[DiagramObject<'_>]) {
    for object in batch {
        canvas.text(
            Layer::NodeText,
            object.display_name(),
            rect_of(object),
            color,
            DEFAULT_FONT_SIZE,
        );
    }
}

/// Analysis overlay for one node and column.
///
/// Expression paints the gradient color of the column value; enrichment paints the hit color.
/// Partially hit complexes and sets are filled from the left in proportion to their hit share;
/// every other kind is filled completely.
pub(crate) fn expression(
    profiles: &ColorProfiles,
    index: &DiagramIndex,
    info: &NodeRenderInfo,
    column: usize,
    canvas: &mut DiagramCanvas,
) {
    let Some(fraction) = info.hit_fraction else {
        return;
    };
    let color = match index.analysis_type() {
        AnalysisType::Expression => match index.value(info.node_id, column) {
            Some(v) => profiles.analysis.expression.color_at(index.normalized(v)),
            None => return,
        },
        AnalysisType::Overrepresentation | AnalysisType::SpeciesComparison => {
            profiles.analysis.enrichment
        }
        AnalysisType::None => return,
    };

    if fraction >= 1.0 || !info.kind.is_aggregate() {
        canvas.fill(Layer::NodeAnalysis, info.shape.clone(), color);
    } else {
        let r = info.rect;
        let clip = shapes::rectangle(Rect::new(r.x0, r.y0, r.x0 + r.width() * fraction, r.y1));
        canvas.fill_clipped(Layer::NodeAnalysis, info.shape.clone(), color, clip);
    }
}

/// Lay out a run of nodes: decorations under the body, batched body paint, then overlays.
pub(crate) fn draw(ctx: &mut LayoutContext<'_>, batch: &[DiagramObject<'_>]) -> RasterResult<()> {
    let mut nodes = Vec::with_capacity(batch.len());
    for object in batch {
        let DiagramObject::Node(node) = object else {
            return Err(RasterError::invalid_operation(format!(
                "object {} is not a node",
                object.id()
            )));
        };
        let info = NodeRenderInfo::new(node, object.kind()?, ctx.index, ctx.profiles, ctx.column);
        nodes.push((*node, info));
    }

    let palette = ctx.profiles.diagram;
    for (_, info) in &nodes {
        if info.haloed {
            let halo = StrokeSpec::solid(StrokeStyle::Halo);
            ctx.canvas.stroke(Layer::Halo, info.shape.clone(), palette.halo, halo);
        }
        if info.flagged {
            let flag = StrokeSpec::solid(StrokeStyle::Flag);
            ctx.canvas.stroke(Layer::Flag, info.shape.clone(), palette.flag, flag);
        }
    }

    for run in nodes.chunk_by(|a, b| a.1.kind == b.1.kind && a.1.style_key() == b.1.style_key()) {
        let style = &run[0].1;
        let renderer = renderer_for(style.kind);
        let objects: Vec<DiagramObject<'_>> =
            run.iter().map(|(n, _)| DiagramObject::Node(*n)).collect();
        (renderer.fill)(ctx.canvas, Layer::NodeFill, style.fill, &objects);
        (renderer.border)(
            ctx.canvas,
            Layer::NodeBorder,
            style.border,
            style.border_stroke,
            &objects,
        );
        (renderer.text)(ctx.canvas, style.text, &objects);
    }

    let column = ctx.column.unwrap_or(0);
    for (node, info) in &nodes {
        let renderer = renderer_for(info.kind);
        (renderer.expression)(ctx.profiles, ctx.index, info, column, ctx.canvas);

        let colors = &palette.attachment;
        for attachment in &node.node_attachments {
            let path = shapes::decorator(&attachment.shape);
            ctx.canvas
                .fill(Layer::AttachmentFill, path.clone(), colors.fill);
            ctx.canvas.stroke(
                Layer::AttachmentBorder,
                path,
                info.border,
                StrokeSpec::solid(StrokeStyle::Segment),
            );
            if let Some(label) = attachment.label.as_deref().filter(|l| !l.is_empty()) {
                ctx.canvas.text(
                    Layer::NodeText,
                    label,
                    shapes::decorator_bounds(&attachment.shape),
                    colors.text,
                    ATTACHMENT_FONT_SIZE,
                );
            }
        }

        if info.kind.is_drug() {
            let r = info.rect;
            let marker = Rect::new(r.x1 - 14.0, r.y1 - 9.0, r.x1 - 2.0, r.y1 - 1.0);
            ctx.canvas
                .text(Layer::NodeText, DRUG_MARKER, marker, info.text, ATTACHMENT_FONT_SIZE);
        }
        if info.crossed {
            ctx.canvas.stroke(
                Layer::Cross,
                shapes::cross(info.rect),
                palette.disease,
                StrokeSpec::solid(StrokeStyle::Border),
            );
        }
        if info.selected {
            ctx.canvas.stroke(
                Layer::Selection,
                info.shape.clone(),
                palette.selection,
                StrokeSpec::solid(StrokeStyle::Selection),
            );
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/renderers/node.rs"]
mod tests;
