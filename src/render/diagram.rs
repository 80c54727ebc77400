//! Render session orchestration: layout once, size under a pixel budget, paint one or many
//! frames.

use std::io::Write;

use crate::{
    config::args::{ImageFormat, RasterArgs},
    encode::{
        gif::{FRAME_DELAY_MS, GifSink},
        sink::{FrameSink, SinkConfig},
        still,
    },
    foundation::{
        core::{Affine, PixelSize, Rect, Rgba8},
        error::{RasterError, RasterResult},
    },
    index::{diagram_index::DiagramIndex, render_info::NodeRenderInfo},
    model::{
        analysis::{AnalysisResult, AnalysisType},
        diagram::{Diagram, DiagramObject},
        graph::Graph,
    },
    profiles::color::ColorProfiles,
    render::{
        FrameRGBA,
        canvas::DiagramCanvas,
        composite::flatten_onto,
        cpu::CpuSurface,
        legend::LegendRenderer,
        text::{FontProperties, system_font},
    },
    renderers::{LayoutContext, draw_all, renderer_for},
    resources::ResourceProvider,
};

/// Largest side the CPU rasterizer can address.
pub const MAX_SIDE: u32 = u16::MAX as u32;

/// Output size and placement of the diagram inside it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameGeometry {
    pub size: PixelSize,
    /// Effective scale factor; never above the requested one.
    pub factor: f64,
    /// Maps diagram units to pixels.
    pub transform: Affine,
}

/// Scale factor that keeps `factor² · (margin + w) · (margin + h)` within `budget`.
///
/// Returns `factor` unchanged when it already fits. The result is never larger than `factor`.
pub fn limit_factor(bounds: Rect, margin: f64, factor: f64, budget: f64) -> f64 {
    let w = margin + bounds.width();
    let h = margin + bounds.height();
    let area = factor * factor * w * h;
    if area <= budget || w * h <= 0.0 {
        return factor;
    }
    (budget / (w * h)).sqrt().min(factor)
}

/// Pixel size and transform for `bounds` at `factor`, reduced to fit `budget` and the
/// rasterizer's side limit.
///
/// `margin` is the total padding per axis, split evenly between both sides.
pub fn frame_geometry(
    st_id: &str,
    bounds: Rect,
    margin: f64,
    factor: f64,
    budget: f64,
) -> FrameGeometry {
    let w = margin + bounds.width();
    let h = margin + bounds.height();
    let mut effective = limit_factor(bounds, margin, factor, budget);
    let side = w.max(h);
    if side * effective > f64::from(MAX_SIDE) {
        effective = f64::from(MAX_SIDE) / side;
    }
    if effective < factor {
        tracing::warn!(
            diagram = st_id,
            requested = factor,
            effective,
            width = (bounds.width() * effective) as u64,
            height = (bounds.height() * effective) as u64,
            "diagram too large, reducing quality"
        );
    }

    let px = |len: f64| ((len * effective).floor() as u32).clamp(1, MAX_SIDE);
    let size = PixelSize {
        width: px(w),
        height: px(h),
    };
    let offset = (
        (margin / 2.0 - bounds.x0) * effective,
        (margin / 2.0 - bounds.y0) * effective,
    );
    FrameGeometry {
        size,
        factor: effective,
        transform: Affine::translate(offset) * Affine::scale(effective),
    }
}

/// Encoded-ready still produced by [`DiagramRenderer::render`].
#[derive(Clone, Debug)]
pub struct RasterImage {
    pub format: ImageFormat,
    pub frame: FrameRGBA,
    /// Effective scale factor used.
    pub factor: f64,
}

impl RasterImage {
    pub fn size(&self) -> PixelSize {
        PixelSize {
            width: self.frame.width,
            height: self.frame.height,
        }
    }

    pub fn encode<W: Write>(&self, out: W) -> RasterResult<()> {
        still::encode_still(&self.frame, self.format, out)
    }

    pub fn encode_to_vec(&self) -> RasterResult<Vec<u8>> {
        still::encode_to_vec(&self.frame, self.format)
    }
}

/// One render session over a diagram.
///
/// Layout happens once at construction. Stills paint the canvas once; animations paint the
/// static layers every frame and rebuild only node analysis fills and the legend marker.
pub struct DiagramRenderer {
    args: RasterArgs,
    format: ImageFormat,
    background: Rgba8,
    /// Column shown by stills; animations restore it when they finish.
    column: Option<usize>,
    diagram: Diagram,
    index: DiagramIndex,
    profiles: ColorProfiles,
    canvas: DiagramCanvas,
    legend: Option<LegendRenderer>,
    font: Option<&'static FontProperties>,
}

impl std::fmt::Debug for DiagramRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagramRenderer")
            .field("diagram", &self.diagram.stable_id)
            .field("format", &self.format)
            .field("ops", &self.canvas.op_count())
            .finish_non_exhaustive()
    }
}

impl DiagramRenderer {
    /// Load the diagram, its graph and the optional analysis from `resources`, then lay out.
    #[tracing::instrument(skip_all, fields(diagram = %args.st_id))]
    pub fn new(args: RasterArgs, resources: &dyn ResourceProvider) -> RasterResult<Self> {
        args.validate()?;
        let diagram = resources.diagram(&args.st_id)?;
        let graph = resources.graph(&args.st_id)?;
        let analysis = match args.token.as_deref() {
            Some(token) => Some(resources.analysis(token)?),
            None => None,
        };
        Self::from_parts(args, diagram, graph, analysis)
    }

    /// Lay out already-loaded inputs.
    pub fn from_parts(
        args: RasterArgs,
        diagram: Diagram,
        graph: Graph,
        analysis: Option<AnalysisResult>,
    ) -> RasterResult<Self> {
        args.validate()?;
        let format = args.image_format()?;
        // Opaque formats never keep a translucent background.
        let background = args.background_color()?.with_alpha(255);
        diagram.validate()?;

        let index = DiagramIndex::new(&diagram, &graph, analysis.as_ref(), &args)?;
        let profiles = ColorProfiles::resolve(&args.profiles);
        let column = initial_column(&args, &index)?;

        let mut canvas = DiagramCanvas::new();
        let objects: Vec<DiagramObject<'_>> = diagram.objects().collect();
        {
            let mut ctx = LayoutContext {
                canvas: &mut canvas,
                diagram: &diagram,
                index: &index,
                profiles: &profiles,
                column,
            };
            draw_all(&mut ctx, &objects)?;
        }
        let legend = LegendRenderer::new(&mut canvas, &index, &profiles);
        if let Some(legend) = &legend {
            legend.set_column(&mut canvas, column.unwrap_or(0));
        }
        tracing::debug!(
            objects = objects.len(),
            ops = canvas.op_count(),
            bounds = ?canvas.bounds(),
            "diagram laid out"
        );

        Ok(Self {
            args,
            format,
            background,
            column,
            diagram,
            index,
            profiles,
            canvas,
            legend,
            font: system_font(),
        })
    }

    /// Replace the label font; `None` renders without text.
    pub fn with_font(mut self, font: Option<&'static FontProperties>) -> Self {
        self.font = font;
        self
    }

    pub fn index(&self) -> &DiagramIndex {
        &self.index
    }

    pub fn canvas(&self) -> &DiagramCanvas {
        &self.canvas
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Geometry of the output for `budget` pixels.
    pub fn geometry(&self, budget: f64) -> FrameGeometry {
        let bounds = self.canvas.bounds().unwrap_or(Rect::ZERO);
        frame_geometry(
            &self.diagram.stable_id,
            bounds,
            self.args.limits.margin,
            self.args.factor,
            budget,
        )
    }

    /// Paint a still image within the still budget.
    #[tracing::instrument(skip(self), fields(diagram = %self.diagram.stable_id))]
    pub fn render(&self) -> RasterResult<RasterImage> {
        let geometry = self.geometry(self.args.limits.still_pixels);
        let mut surface = CpuSurface::with_font(geometry.size, self.font)?;
        let frame = self.paint(&mut surface, geometry.transform, !self.format.has_alpha());
        Ok(RasterImage {
            format: self.format,
            frame,
            factor: geometry.factor,
        })
    }

    /// Push one frame per expression column into `sink`, within the animation budget.
    ///
    /// Fails with `InvalidOperation` before touching the sink unless the analysis is an
    /// expression analysis.
    #[tracing::instrument(skip_all, fields(diagram = %self.diagram.stable_id))]
    pub fn render_to_sink(&mut self, sink: &mut dyn FrameSink) -> RasterResult<()> {
        if self.index.analysis_type() != AnalysisType::Expression {
            return Err(RasterError::invalid_operation(format!(
                "only EXPRESSION analyses can be animated, got {:?}",
                self.index.analysis_type()
            )));
        }
        let columns = self.index.expression_columns().len();
        let geometry = self.geometry(self.args.limits.animated_pixels);
        let result = self.push_columns(sink, geometry, columns);
        // Stills painted after an animation must show the configured column again.
        self.relayout_column(self.column.unwrap_or(0));
        result
    }

    fn push_columns(
        &mut self,
        sink: &mut dyn FrameSink,
        geometry: FrameGeometry,
        columns: usize,
    ) -> RasterResult<()> {
        let mut surface = CpuSurface::with_font(geometry.size, self.font)?;
        sink.begin(SinkConfig {
            width: geometry.size.width,
            height: geometry.size.height,
            frame_delay_ms: FRAME_DELAY_MS,
            frames: columns,
        })?;
        for column in 0..columns {
            self.relayout_column(column);
            let frame = self.paint(&mut surface, geometry.transform, true);
            sink.push_frame(column, &frame)?;
            tracing::debug!(column, of = columns, "frame rendered");
        }
        sink.end()
    }

    /// Animated GIF with one frame per expression column, 1000 ms apart, looping forever.
    ///
    /// Nothing is written to `out` when the analysis is not an expression analysis.
    pub fn render_to_animated_gif<W: Write>(&mut self, out: W) -> RasterResult<()> {
        let mut sink = GifSink::new(out);
        self.render_to_sink(&mut sink)
    }

    /// Rebuild the per-frame layers for `column` from fresh render info.
    fn relayout_column(&mut self, column: usize) {
        self.canvas.clear_dynamic();
        for node in &self.diagram.nodes {
            // Kinds were checked by `Diagram::validate`.
            let Ok(kind) = node.kind() else {
                continue;
            };
            let info =
                NodeRenderInfo::new(node, kind, &self.index, &self.profiles, Some(column));
            (renderer_for(kind).expression)(
                &self.profiles,
                &self.index,
                &info,
                column,
                &mut self.canvas,
            );
        }
        if let Some(legend) = &self.legend {
            legend.set_column(&mut self.canvas, column);
        }
    }

    fn paint(&self, surface: &mut CpuSurface, transform: Affine, opaque: bool) -> FrameRGBA {
        self.canvas.render(surface, transform);
        let mut frame = surface.finish();
        if opaque {
            flatten_onto(&mut frame.data, self.background);
        }
        frame
    }
}

/// Column painted by stills and the first layout. Out-of-range columns are caller errors.
fn initial_column(args: &RasterArgs, index: &DiagramIndex) -> RasterResult<Option<usize>> {
    let columns = index.expression_columns().len();
    match args.column {
        Some(c) if columns > 0 && c >= columns => Err(RasterError::malformed_input(format!(
            "column {c} out of range, analysis has {columns} columns"
        ))),
        Some(c) if columns > 0 => Ok(Some(c)),
        _ if columns > 0 => Ok(Some(0)),
        _ => Ok(None),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/diagram.rs"]
mod tests;
