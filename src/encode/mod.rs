//! Image encoders.
//!
//! Stills are encoded in one call; animations go through a [`sink::FrameSink`] that consumes
//! frames in column order.

/// Animated GIF sink backed by the `image` crate.
pub mod gif;
/// Generic frame sink trait and built-in sinks.
pub mod sink;
/// Single-image encoders.
pub mod still;
