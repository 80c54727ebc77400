//! Raster exporter for pathway diagrams.
//!
//! A render session takes a pre-laid-out diagram, its entity graph and an optional analysis
//! result and turns them into pixels:
//!
//! - Build a [`DiagramRenderer`] from [`RasterArgs`] and a [`ResourceProvider`]
//! - [`DiagramRenderer::render`] a PNG, JPEG or GIF still within the pixel budget
//! - Or stream one frame per expression column into a [`FrameSink`], typically an animated GIF
#![forbid(unsafe_code)]

mod foundation;

/// Render arguments and limits.
pub mod config;
/// Image encoders and frame sinks.
pub mod encode;
/// Per-session lookups derived from the diagram, graph and analysis.
pub mod index;
/// Diagram, graph and analysis data model.
pub mod model;
/// Color palettes and stroke styles.
pub mod profiles;
/// Layered canvas, CPU painting and session orchestration.
pub mod render;
/// Per-kind renderer registry.
pub mod renderers;
/// Diagram, graph and analysis loaders.
pub mod resources;

pub use crate::foundation::core::{Affine, BezPath, PixelSize, Point, Rect, Rgba8};
pub use crate::foundation::error::{RasterError, RasterResult};

pub use crate::config::args::{ImageFormat, ProfileNames, RasterArgs, RenderLimits};
pub use crate::encode::gif::GifSink;
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::index::diagram_index::DiagramIndex;
pub use crate::model::analysis::{AnalysisResult, AnalysisType};
pub use crate::model::diagram::Diagram;
pub use crate::model::graph::Graph;
pub use crate::model::kind::RenderableKind;
pub use crate::render::FrameRGBA;
pub use crate::render::diagram::{DiagramRenderer, FrameGeometry, RasterImage, limit_factor};
pub use crate::render::text::FontProperties;
pub use crate::resources::{JsonDirectory, MemoryResources, ResourceProvider};
