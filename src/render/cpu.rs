use crate::{
    foundation::{
        core::{Affine, BezPath, PixelSize, Rgba8},
        error::{RasterError, RasterResult},
    },
    profiles::stroke::DASH_PATTERN,
    render::{
        FrameRGBA,
        canvas::{DrawOp, TextAlign},
        text::{FontProperties, TextLayoutEngine},
    },
};

/// Raster target for one render session, reused across animation frames.
pub struct CpuSurface {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    text: Option<(TextLayoutEngine, &'static FontProperties)>,
}

impl CpuSurface {
    /// Surface with an explicit font; `None` skips every text op.
    pub fn with_font(size: PixelSize, font: Option<&'static FontProperties>) -> RasterResult<Self> {
        let width: u16 = size
            .width
            .try_into()
            .map_err(|_| RasterError::invalid_operation("surface width exceeds u16"))?;
        let height: u16 = size
            .height
            .try_into()
            .map_err(|_| RasterError::invalid_operation("surface height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(RasterError::invalid_operation("surface must not be empty"));
        }

        let text = font.and_then(|font| match TextLayoutEngine::new(font) {
            Ok(engine) => Some((engine, font)),
            Err(e) => {
                tracing::warn!(error = %e, "font unusable, labels will not be drawn");
                None
            }
        });

        Ok(Self {
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
            text,
        })
    }

    pub fn size(&self) -> PixelSize {
        PixelSize {
            width: u32::from(self.width),
            height: u32::from(self.height),
        }
    }

    pub fn draw(&mut self, op: &DrawOp, transform: Affine) {
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        match op {
            DrawOp::Fill { path, color, clip } => {
                self.ctx.set_transform(affine_to_cpu(transform));
                self.ctx.set_paint(color_to_cpu(*color));
                if let Some(clip) = clip {
                    self.ctx.push_clip_layer(&bezpath_to_cpu(clip));
                }
                self.ctx.fill_path(&bezpath_to_cpu(path));
                if clip.is_some() {
                    self.ctx.pop_layer();
                }
            }
            DrawOp::Stroke {
                path,
                color,
                stroke,
            } => {
                // Strokes are built in pixel space so widths ignore the scale factor.
                let mut device = path.clone();
                device.apply_affine(transform);
                if stroke.dashed {
                    device = kurbo::dash(device.iter(), 0.0, &DASH_PATTERN).collect();
                }
                self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
                self.ctx.set_stroke(
                    vello_cpu::kurbo::Stroke::new(stroke.width())
                        .with_caps(vello_cpu::kurbo::Cap::Butt)
                        .with_join(vello_cpu::kurbo::Join::Miter),
                );
                self.ctx.set_paint(color_to_cpu(*color));
                self.ctx.stroke_path(&bezpath_to_cpu(&device));
            }
            DrawOp::Text {
                text,
                bounds,
                color,
                size,
                align,
            } => self.draw_text(text, *bounds, *color, *size, *align, transform),
        }
    }

    fn draw_text(
        &mut self,
        text: &str,
        bounds: kurbo::Rect,
        color: Rgba8,
        size: f64,
        align: TextAlign,
        transform: Affine,
    ) {
        let Some((engine, font)) = self.text.as_mut() else {
            return;
        };
        let rect = transform.transform_rect_bbox(bounds);
        let size_px = (size * transform_scale(transform)) as f32;
        if text.trim().is_empty() || rect.width() < 1.0 || !(size_px.is_finite() && size_px > 0.0)
        {
            return;
        }

        let layout = engine.fit(
            text,
            size_px,
            color,
            rect.width() as f32,
            rect.height() as f32,
        );
        let top = match align {
            TextAlign::Center => rect.y0 + (rect.height() - f64::from(layout.height())) / 2.0,
            TextAlign::Start => rect.y0,
        };
        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::translate((rect.x0, top)));

        for line in layout.lines() {
            let dx = match align {
                TextAlign::Center => {
                    ((rect.width() as f32 - line.metrics().advance) / 2.0).max(0.0)
                }
                TextAlign::Start => 0.0,
            };
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let brush = run.style().brush;
                self.ctx.set_paint(color_to_cpu(brush));
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x + dx,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(font.font_data())
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
    }

    /// Rasterize everything drawn since the last call into a premultiplied frame.
    pub fn finish(&mut self) -> FrameRGBA {
        self.ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.render_to_pixmap(&mut pixmap);
        self.ctx.reset();
        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }
}

fn transform_scale(a: Affine) -> f64 {
    let [a, b, c, d, _, _] = a.as_coeffs();
    (a * d - b * c).abs().sqrt()
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
