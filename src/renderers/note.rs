use crate::{
    foundation::core::{BezPath, Rgba8},
    foundation::error::RasterResult,
    index::render_info::FADE_OUT,
    model::diagram::DiagramObject,
    render::{
        canvas::{DiagramCanvas, Layer},
        shapes,
        text::DEFAULT_FONT_SIZE,
    },
    renderers::{LayoutContext, Renderer, no_border, no_expression, no_fill, node},
};

/// Notes are free text; they have no outline or fill.
pub static NOTE: Renderer = Renderer {
    shape,
    fill: no_fill,
    border: no_border,
    text,
    expression: no_expression,
    draw,
};

fn shape(object: &DiagramObject<'_>) -> BezPath {
    shapes::rectangle(node::rect_of(object))
}

fn text(canvas: &mut DiagramCanvas, color: Rgba8, batch: &[DiagramObject<'_>]) {
    for object in batch {
        canvas.text(
            Layer::NoteText,
            object.display_name(),
            node::rect_of(object),
            color,
            DEFAULT_FONT_SIZE,
        );
    }
}

fn draw(ctx: &mut LayoutContext<'_>, batch: &[DiagramObject<'_>]) -> RasterResult<()> {
    let color = ctx.profiles.diagram.note.text;
    for object in batch {
        let faded = matches!(object, DiagramObject::Note(n) if n.fade_out());
        let color = if faded { color.fade(FADE_OUT) } else { color };
        text(ctx.canvas, color, std::slice::from_ref(object));
    }
    Ok(())
}
