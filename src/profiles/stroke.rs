/// Semantic stroke widths. Widths are in output pixels and never follow the scale factor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StrokeStyle {
    Flag,
    Halo,
    Selection,
    Segment,
    Border,
}

/// Dash pattern (on, off) in pixels for dashed strokes.
pub const DASH_PATTERN: [f64; 2] = [5.0, 5.0];

impl StrokeStyle {
    pub const fn width(self) -> f64 {
        match self {
            Self::Flag => 8.0,
            Self::Halo => 5.0,
            Self::Selection => 3.0,
            Self::Segment => 1.0,
            Self::Border => 2.0,
        }
    }
}

/// A stroke style with its dash flag, as stored in canvas instructions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StrokeSpec {
    pub style: StrokeStyle,
    pub dashed: bool,
}

impl StrokeSpec {
    pub const fn solid(style: StrokeStyle) -> Self {
        Self {
            style,
            dashed: false,
        }
    }

    pub const fn dashed(style: StrokeStyle, dashed: bool) -> Self {
        Self { style, dashed }
    }

    pub const fn width(self) -> f64 {
        self.style.width()
    }
}
