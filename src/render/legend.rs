use kurbo::{Circle, Shape};

use crate::{
    foundation::core::{Rect, Rgba8},
    index::diagram_index::DiagramIndex,
    model::analysis::AnalysisType,
    profiles::{
        color::ColorProfiles,
        stroke::{StrokeSpec, StrokeStyle},
    },
    render::{
        canvas::{DiagramCanvas, Layer},
        shapes,
    },
};

const GAP: f64 = 20.0;
const WIDTH: f64 = 20.0;
const HEIGHT: f64 = 200.0;
const STRIPS: usize = 100;
const LABEL_HEIGHT: f64 = 12.0;
const LABEL_FONT_SIZE: f64 = 8.0;
/// Horizontal room given to labels on each side of the gradient bar.
const LABEL_OVERHANG: f64 = 30.0;
const TICK_RADIUS: f64 = 2.0;

/// Color-scale key for expression analyses, placed to the right of the diagram.
///
/// The gradient and its range labels are static. The caption and the column ticks live on
/// [`Layer::LegendMarker`] and are replaced by [`LegendRenderer::set_column`].
#[derive(Clone, Debug)]
pub struct LegendRenderer {
    bar: Rect,
    columns: Vec<String>,
    text: Rgba8,
    border: Rgba8,
}

impl LegendRenderer {
    /// Add the legend to `canvas`. `None` unless the analysis is an expression analysis.
    pub fn new(
        canvas: &mut DiagramCanvas,
        index: &DiagramIndex,
        profiles: &ColorProfiles,
    ) -> Option<Self> {
        if index.analysis_type() != AnalysisType::Expression {
            return None;
        }
        let bounds = canvas.bounds().unwrap_or(Rect::ZERO);
        let top = bounds.y0 + ((bounds.height() - HEIGHT) / 2.0).max(0.0) + LABEL_HEIGHT;
        let bar = Rect::new(
            bounds.x1 + GAP + LABEL_OVERHANG,
            top,
            bounds.x1 + GAP + LABEL_OVERHANG + WIDTH,
            top + HEIGHT,
        );

        let palette = profiles.analysis;
        let strip = HEIGHT / STRIPS as f64;
        for i in 0..STRIPS {
            // Highest values at the top.
            let t = 1.0 - (i as f64 + 0.5) / STRIPS as f64;
            let y0 = bar.y0 + i as f64 * strip;
            canvas.fill(
                Layer::Legend,
                shapes::rectangle(Rect::new(bar.x0, y0, bar.x1, y0 + strip)),
                palette.expression.color_at(t),
            );
        }
        canvas.stroke(
            Layer::Legend,
            shapes::rectangle(bar),
            palette.legend_border,
            StrokeSpec::solid(StrokeStyle::Segment),
        );

        let (min, max) = index.expression_range();
        let label = |y0: f64| {
            Rect::new(
                bar.x0 - LABEL_OVERHANG,
                y0,
                bar.x1 + LABEL_OVERHANG,
                y0 + LABEL_HEIGHT,
            )
        };
        canvas.text(
            Layer::Legend,
            format_value(max),
            label(bar.y0 - LABEL_HEIGHT),
            palette.legend_text,
            LABEL_FONT_SIZE,
        );
        canvas.text(
            Layer::Legend,
            format_value(min),
            label(bar.y1),
            palette.legend_text,
            LABEL_FONT_SIZE,
        );

        Some(Self {
            bar,
            columns: index.expression_columns().to_vec(),
            text: palette.legend_text,
            border: palette.legend_border,
        })
    }

    /// Gradient bar in diagram units.
    pub fn bar(&self) -> Rect {
        self.bar
    }

    /// Replace the caption and column ticks. Out-of-range columns only clear the marker.
    pub fn set_column(&self, canvas: &mut DiagramCanvas, column: usize) {
        canvas.clear_layer(Layer::LegendMarker);
        let Some(name) = self.columns.get(column) else {
            return;
        };

        let caption = Rect::new(
            self.bar.x0 - LABEL_OVERHANG,
            self.bar.y1 + LABEL_HEIGHT,
            self.bar.x1 + LABEL_OVERHANG,
            self.bar.y1 + 2.0 * LABEL_HEIGHT,
        );
        canvas.text(
            Layer::LegendMarker,
            name.as_str(),
            caption,
            self.text,
            LABEL_FONT_SIZE,
        );

        let track_y = caption.y1 + LABEL_HEIGHT / 2.0;
        let n = self.columns.len();
        let step = caption.width() / n as f64;
        for i in 0..n {
            let center = (caption.x0 + step * (i as f64 + 0.5), track_y);
            let tick = Circle::new(center, TICK_RADIUS).to_path(0.1);
            if i == column {
                canvas.fill(Layer::LegendMarker, tick, self.border);
            } else {
                canvas.stroke(
                    Layer::LegendMarker,
                    tick,
                    self.border,
                    StrokeSpec::solid(StrokeStyle::Segment),
                );
            }
        }
    }
}

/// Compact label for a range endpoint: at most two decimals, trailing zeros dropped.
fn format_value(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

#[cfg(test)]
#[path = "../../tests/unit/render/legend.rs"]
mod tests;
