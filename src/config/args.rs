use serde::{Deserialize, Serialize};

use crate::{
    foundation::core::Rgba8,
    foundation::error::{RasterError, RasterResult},
};

/// Output encodings accepted by the raster exporter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
}

impl ImageFormat {
    /// Resolve a file extension (case-insensitive). Anything outside png, jpg, jpeg and gif is
    /// rejected.
    pub fn from_ext(ext: &str) -> RasterResult<Self> {
        match ext.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "gif" => Ok(Self::Gif),
            other => Err(RasterError::unsupported_format(format!(
                "unsupported file extension '{other}'"
            ))),
        }
    }

    /// PNG keeps an alpha channel; JPEG and GIF are flattened over the background.
    pub fn has_alpha(self) -> bool {
        matches!(self, Self::Png)
    }
}

/// Pixel budgets and margin applied when sizing the output bitmap.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderLimits {
    /// Maximum pixel count of a still image.
    pub still_pixels: f64,
    /// Maximum pixel count of each animated frame; the encoder may hold several frames.
    pub animated_pixels: f64,
    /// Logical units of padding around the diagram content.
    pub margin: f64,
}

impl RenderLimits {
    pub const MAX_IMAGE_PIXELS: f64 = 1e8;
    pub const MAX_GIF_PIXELS: f64 = 5e7;
    pub const MARGIN: f64 = 15.0;
}

impl Default for RenderLimits {
    fn default() -> Self {
        Self {
            still_pixels: Self::MAX_IMAGE_PIXELS,
            animated_pixels: Self::MAX_GIF_PIXELS,
            margin: Self::MARGIN,
        }
    }
}

/// Palette names, resolved once per render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileNames {
    pub diagram: String,
    pub analysis: String,
}

impl Default for ProfileNames {
    fn default() -> Self {
        Self {
            diagram: "standard".to_string(),
            analysis: "standard".to_string(),
        }
    }
}

/// Arguments of a single raster export.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RasterArgs {
    /// Stable id of the diagram to render.
    pub st_id: String,
    /// Output extension: png, jpg, jpeg or gif.
    pub format: String,
    /// Requested scale factor; the effective one is never larger.
    #[serde(default = "default_factor")]
    pub factor: f64,
    /// `#RRGGBB` background for opaque formats. White when absent.
    #[serde(default)]
    pub background: Option<String>,
    /// Expression column shown by still renders.
    #[serde(default)]
    pub column: Option<usize>,
    #[serde(default)]
    pub profiles: ProfileNames,
    /// Stable ids or database ids of objects to highlight.
    #[serde(default)]
    pub selected: Vec<String>,
    /// Identifiers whose entities should be flagged.
    #[serde(default)]
    pub flags: Vec<String>,
    /// Analysis token to overlay.
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub limits: RenderLimits,
}

fn default_factor() -> f64 {
    1.0
}

impl RasterArgs {
    pub fn new(st_id: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            st_id: st_id.into(),
            format: format.into(),
            factor: default_factor(),
            background: None,
            column: None,
            profiles: ProfileNames::default(),
            selected: Vec::new(),
            flags: Vec::new(),
            token: None,
            limits: RenderLimits::default(),
        }
    }

    pub fn with_factor(mut self, factor: f64) -> Self {
        self.factor = factor;
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self
    }

    pub fn image_format(&self) -> RasterResult<ImageFormat> {
        ImageFormat::from_ext(&self.format)
    }

    pub fn background_color(&self) -> RasterResult<Rgba8> {
        match &self.background {
            Some(s) => Rgba8::parse(s),
            None => Ok(Rgba8::WHITE),
        }
    }

    /// Reject caller errors before any resource is loaded or buffer allocated.
    pub fn validate(&self) -> RasterResult<()> {
        self.image_format()?;
        if !self.factor.is_finite() || self.factor <= 0.0 {
            return Err(RasterError::malformed_input(format!(
                "scale factor must be finite and > 0, got {}",
                self.factor
            )));
        }
        self.background_color()?;
        let l = self.limits;
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(l.still_pixels) || !positive(l.animated_pixels) {
            return Err(RasterError::malformed_input("pixel budgets must be > 0"));
        }
        if !l.margin.is_finite() || l.margin < 0.0 {
            return Err(RasterError::malformed_input("margin must be >= 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/args.rs"]
mod tests;
