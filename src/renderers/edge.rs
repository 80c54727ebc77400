use std::collections::HashMap;

use crate::{
    foundation::core::{BezPath, Rgba8},
    foundation::error::{RasterError, RasterResult},
    index::render_info::FADE_OUT,
    model::diagram::{Connector, Diagram, DiagramObject, ShapeDef},
    profiles::stroke::{StrokeSpec, StrokeStyle},
    render::{
        canvas::{DiagramCanvas, Layer},
        shapes,
    },
    renderers::{LayoutContext, Renderer, merged, no_expression, no_fill, no_text},
};

const SYMBOL_FONT_SIZE: f64 = 6.0;

pub static REACTION: Renderer = Renderer {
    shape,
    fill: no_fill,
    border,
    text: no_text,
    expression: no_expression,
    draw,
};

pub(crate) fn shape(object: &DiagramObject<'_>) -> BezPath {
    shapes::segments(object.segments())
}

pub(crate) fn border(
    canvas: &mut DiagramCanvas,
    layer: Layer,
    color: Rgba8,
    stroke: StrokeSpec,
    batch: &[DiagramObject<'_>],
) {
    let path = merged(batch.iter().map(shape));
    if !path.elements().is_empty() {
        canvas.stroke(layer, path, color, stroke);
    }
}

/// Node connectors grouped by the reaction they lead to.
fn connectors_by_edge(diagram: &Diagram) -> HashMap<i64, Vec<&Connector>> {
    let mut out: HashMap<i64, Vec<&Connector>> = HashMap::new();
    for node in &diagram.nodes {
        for connector in &node.connectors {
            out.entry(connector.edge_id).or_default().push(connector);
        }
    }
    out
}

/// Colors used to paint one reaction.
#[derive(Clone, Copy)]
pub(crate) struct LineColors {
    pub stroke: Rgba8,
    pub fill: Rgba8,
    pub text: Rgba8,
}

impl LineColors {
    pub(crate) fn faded(self, fade: bool) -> Self {
        if !fade {
            return self;
        }
        Self {
            stroke: self.stroke.fade(FADE_OUT),
            fill: self.fill.fade(FADE_OUT),
            text: self.text.fade(FADE_OUT),
        }
    }
}

/// Paint a decorator: hollow shapes take the background fill, the rest the line color.
pub(crate) fn decorate(
    canvas: &mut DiagramCanvas,
    shape: &ShapeDef,
    colors: LineColors,
    fill_layer: Layer,
    border_layer: Layer,
) {
    let path = shapes::decorator(shape);
    if path.elements().is_empty() {
        return;
    }
    if shapes::is_fillable(shape) {
        let fill = if shape.is_empty() {
            colors.fill
        } else {
            colors.stroke
        };
        canvas.fill(fill_layer, path.clone(), fill);
    }
    canvas.stroke(
        border_layer,
        path,
        colors.stroke,
        StrokeSpec::solid(StrokeStyle::Segment),
    );
    if let Some(symbol) = shape.s.as_deref().filter(|s| !s.is_empty()) {
        canvas.text(
            Layer::EdgeText,
            symbol,
            shapes::decorator_bounds(shape),
            colors.text,
            SYMBOL_FONT_SIZE,
        );
    }
}

fn draw(ctx: &mut LayoutContext<'_>, batch: &[DiagramObject<'_>]) -> RasterResult<()> {
    let connectors = connectors_by_edge(ctx.diagram);
    let palette = ctx.profiles.diagram;
    let segment = StrokeSpec::solid(StrokeStyle::Segment);

    for object in batch {
        let DiagramObject::Edge(edge) = object else {
            return Err(RasterError::invalid_operation(format!(
                "object {} is not a reaction",
                object.id()
            )));
        };
        let selected = ctx.index.is_selected(edge.id);
        let base = palette.reaction;
        let mut colors = LineColors {
            stroke: if edge.disease() {
                palette.disease
            } else {
                base.stroke
            },
            fill: base.fill,
            text: base.text,
        }
        .faded(edge.fade_out());
        if selected {
            colors.stroke = palette.selection;
        }

        let own = connectors.get(&edge.id).map(Vec::as_slice).unwrap_or(&[]);
        let lines = merged(
            std::iter::once(shape(object)).chain(own.iter().map(|c| shapes::segments(&c.segments))),
        );
        if lines.elements().is_empty() {
            continue;
        }
        if selected {
            let halo = StrokeSpec::solid(StrokeStyle::Halo);
            ctx.canvas.stroke(Layer::EdgeFlag, lines.clone(), palette.halo, halo);
        }
        ctx.canvas.stroke(Layer::EdgeSegment, lines, colors.stroke, segment);

        for connector in own {
            if let Some(end) = &connector.end_shape {
                decorate(
                    ctx.canvas,
                    end,
                    colors,
                    Layer::EdgeShapeFill,
                    Layer::EdgeShapeBorder,
                );
            }
            if let Some(st) = connector.stoichiometry.as_ref().filter(|s| s.value > 1) {
                let mut shape = st.shape.clone();
                shape.s = Some(st.value.to_string());
                shape.empty = Some(true);
                let boxed = LineColors {
                    stroke: colors.stroke,
                    fill: palette.stoichiometry.fill,
                    text: palette.stoichiometry.text,
                }
                .faded(edge.fade_out());
                decorate(
                    ctx.canvas,
                    &shape,
                    boxed,
                    Layer::EdgeShapeFill,
                    Layer::EdgeShapeBorder,
                );
            }
        }
        if let Some(end) = &edge.end_shape {
            decorate(
                ctx.canvas,
                end,
                colors,
                Layer::EdgeShapeFill,
                Layer::EdgeShapeBorder,
            );
        }
        if let Some(center) = &edge.reaction_shape {
            decorate(
                ctx.canvas,
                center,
                colors,
                Layer::EdgeShapeFill,
                Layer::EdgeShapeBorder,
            );
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/renderers/edge.rs"]
mod tests;
