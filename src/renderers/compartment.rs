use crate::{
    foundation::core::{BezPath, Rect, Rgba8},
    foundation::error::RasterResult,
    index::render_info::FADE_OUT,
    model::diagram::DiagramObject,
    profiles::stroke::{StrokeSpec, StrokeStyle},
    render::{
        canvas::{DiagramCanvas, Layer, TextAlign},
        shapes,
        text::DEFAULT_FONT_SIZE,
    },
    renderers::{LayoutContext, Renderer, merged, no_expression, node},
};

const LABEL_PADDING: f64 = 4.0;

pub static COMPARTMENT: Renderer = Renderer {
    shape,
    fill,
    border,
    text,
    expression: no_expression,
    draw,
};

fn shape(object: &DiagramObject<'_>) -> BezPath {
    shapes::rounded_rectangle(node::rect_of(object), shapes::COMPARTMENT_ARC)
}

fn fill(canvas: &mut DiagramCanvas, layer: Layer, color: Rgba8, batch: &[DiagramObject<'_>]) {
    node::fill_shapes(canvas, layer, color, batch, shape);
}

/// Outer outline plus the inset outline when the compartment has one.
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
    canvas.stroke(layer, merged(batch.iter().map(shape)), color, stroke);
    let insets = merged(batch.iter().filter_map(|o| match o {
        DiagramObject::Compartment(c) => c
            .insets
            .map(|i| shapes::rounded_rectangle(i.rect(), shapes::COMPARTMENT_ARC)),
        _ => None,
    }));
    if !insets.elements().is_empty() {
        let inner = StrokeSpec::dashed(StrokeStyle::Segment, stroke.dashed);
        canvas.stroke(layer, insets, color, inner);
    }
}

/// Labels start at the stored text position, or inside the top-left corner.
fn text(canvas: &mut DiagramCanvas, color: Rgba8, batch: &[DiagramObject<'_>]) {
    for object in batch {
        let DiagramObject::Compartment(c) = object else {
            continue;
        };
        if c.display_name.is_empty() {
            continue;
        }
        let r = c.prop.rect();
        let origin = c
            .text_position
            .map(|p| p.point())
            .unwrap_or_else(|| (r.x0 + LABEL_PADDING, r.y0 + LABEL_PADDING).into());
        let right = r.x1.max(origin.x + 1.0);
        let label = Rect::new(origin.x, origin.y, right, origin.y + DEFAULT_FONT_SIZE * 2.0);
        canvas.text_aligned(
            Layer::CompartmentText,
            c.display_name.clone(),
            label,
            color,
            DEFAULT_FONT_SIZE,
            TextAlign::Start,
        );
    }
}

fn draw(ctx: &mut LayoutContext<'_>, batch: &[DiagramObject<'_>]) -> RasterResult<()> {
    let colors = ctx.profiles.diagram.compartment;
    for run in batch.chunk_by(|a, b| faded(a) == faded(b)) {
        let alpha = if faded(&run[0]) { FADE_OUT } else { 1.0 };
        fill(ctx.canvas, Layer::CompartmentFill, colors.fill.fade(alpha), run);
        border(
            ctx.canvas,
            Layer::CompartmentBorder,
            colors.stroke.fade(alpha),
            StrokeSpec::solid(StrokeStyle::Border),
            run,
        );
        text(ctx.canvas, colors.text.fade(alpha), run);
    }
    Ok(())
}

fn faded(object: &DiagramObject<'_>) -> bool {
    matches!(object, DiagramObject::Compartment(c) if c.fade_out())
}
