use std::sync::{Arc, OnceLock};

use crate::foundation::{
    core::Rgba8,
    error::{RasterError, RasterResult},
};

/// Default label size in diagram units.
pub const DEFAULT_FONT_SIZE: f64 = 8.0;
/// Labels never shrink below this many output pixels.
pub const MIN_FONT_PX: f32 = 3.0;
const SHRINK_STEP: f32 = 0.8;

/// Font shared by every render in the process.
#[derive(Clone)]
pub struct FontProperties {
    bytes: Arc<Vec<u8>>,
    font: vello_cpu::peniko::FontData,
    family: String,
}

impl std::fmt::Debug for FontProperties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontProperties")
            .field("bytes_len", &self.bytes.len())
            .field("family", &self.family)
            .finish()
    }
}

impl FontProperties {
    pub fn from_bytes(bytes: Vec<u8>, index: u32, family: impl Into<String>) -> Self {
        let font =
            vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes.clone()), index);
        Self {
            bytes: Arc::new(bytes),
            font,
            family: family.into(),
        }
    }

    pub fn font_data(&self) -> &vello_cpu::peniko::FontData {
        &self.font
    }
}

static SYSTEM_FONT: OnceLock<Option<FontProperties>> = OnceLock::new();

/// Sans-serif system font, loaded once. `None` when the host has no usable font, in which case
/// labels are skipped.
pub fn system_font() -> Option<&'static FontProperties> {
    SYSTEM_FONT.get_or_init(load_system_font).as_ref()
}

fn load_system_font() -> Option<FontProperties> {
    use usvg::fontdb::{Database, Family, Query};

    let mut db = Database::new();
    db.load_system_fonts();
    let families = [
        Family::SansSerif,
        Family::Name("DejaVu Sans"),
        Family::Name("Liberation Sans"),
        Family::Name("Helvetica"),
    ];
    let query = Query {
        families: &families,
        ..Query::default()
    };
    let id = db.query(&query).or_else(|| db.faces().next().map(|f| f.id));
    let Some(id) = id else {
        tracing::warn!("no system font found, labels will not be drawn");
        return None;
    };

    let family = db
        .face(id)
        .and_then(|f| f.families.first().map(|(name, _)| name.clone()))
        .unwrap_or_else(|| "unknown".to_string());
    let (bytes, index) = db.with_face_data(id, |data, index| (data.to_vec(), index))?;
    tracing::debug!(%family, "system font loaded");
    Some(FontProperties::from_bytes(bytes, index, family))
}

/// Parley layout engine bound to one font.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<Rgba8>,
    family: String,
}

impl TextLayoutEngine {
    pub fn new(font: &FontProperties) -> RasterResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx.collection.register_fonts(
            parley::fontique::Blob::from(font.bytes.as_ref().clone()),
            None,
        );
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| RasterError::invalid_operation("font bytes contain no family"))?;
        let family = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| RasterError::invalid_operation("registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family,
        })
    }

    /// Shape `text`, wrapping at `max_width` pixels when given.
    pub fn layout(
        &mut self,
        text: &str,
        size_px: f32,
        color: Rgba8,
        max_width: Option<f32>,
    ) -> parley::Layout<Rgba8> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(color));

        let mut layout: parley::Layout<Rgba8> = builder.build(text);
        layout.break_all_lines(max_width);
        layout.align(
            max_width,
            parley::Alignment::Start,
            parley::AlignmentOptions::default(),
        );
        layout
    }

    /// Wrap to `width` and shrink until the block fits `height` or reaches [`MIN_FONT_PX`].
    pub fn fit(
        &mut self,
        text: &str,
        size_px: f32,
        color: Rgba8,
        width: f32,
        height: f32,
    ) -> parley::Layout<Rgba8> {
        let width = width.max(1.0);
        let mut size = size_px.max(MIN_FONT_PX);
        loop {
            let layout = self.layout(text, size, color, Some(width));
            let fits = layout.height() <= height && layout.width() <= width;
            let next = size * SHRINK_STEP;
            if fits || next < MIN_FONT_PX {
                return layout;
            }
            size = next;
        }
    }
}
