use crate::{
    foundation::error::{RasterError, RasterResult},
    model::{diagram::DiagramObject, kind::RenderableKind},
    profiles::stroke::{StrokeSpec, StrokeStyle},
    render::canvas::Layer,
    renderers::{
        LayoutContext, Renderer,
        edge::{self, LineColors, decorate},
        no_expression, no_fill, no_text,
    },
};

/// Links reuse the reaction line geometry without a reaction center.
pub static LINK: Renderer = Renderer {
    shape: edge::shape,
    fill: no_fill,
    border: edge::border,
    text: no_text,
    expression: no_expression,
    draw,
};

fn is_dashed(kind: RenderableKind) -> bool {
    matches!(
        kind,
        RenderableKind::EntitySetAndMemberLink | RenderableKind::EntitySetAndEntitySetLink
    )
}

fn draw(ctx: &mut LayoutContext<'_>, batch: &[DiagramObject<'_>]) -> RasterResult<()> {
    let base = ctx.profiles.diagram.link;
    for object in batch {
        let DiagramObject::Link(link) = object else {
            return Err(RasterError::invalid_operation(format!(
                "object {} is not a link",
                object.id()
            )));
        };
        let colors = LineColors {
            stroke: base.stroke,
            fill: base.fill,
            text: base.text,
        }
        .faded(link.fade_out());
        let stroke = StrokeSpec::dashed(StrokeStyle::Segment, is_dashed(object.kind()?));
        edge::border(
            ctx.canvas,
            Layer::LinkBorder,
            colors.stroke,
            stroke,
            std::slice::from_ref(object),
        );
        if let Some(end) = &link.end_shape {
            decorate(ctx.canvas, end, colors, Layer::LinkEndFill, Layer::LinkBorder);
        }
    }
    Ok(())
}
