use super::*;
use crate::profiles::stroke::{StrokeSpec, StrokeStyle};

fn surface(w: u32, h: u32) -> CpuSurface {
    CpuSurface::with_font(PixelSize { width: w, height: h }, None).unwrap()
}

fn rect_path(x0: f64, y0: f64, x1: f64, y1: f64) -> BezPath {
    use kurbo::Shape;
    kurbo::Rect::new(x0, y0, x1, y1).to_path(0.1)
}

fn pixel(frame: &FrameRGBA, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * frame.width + x) * 4) as usize;
    [frame.data[i], frame.data[i + 1], frame.data[i + 2], frame.data[i + 3]]
}

#[test]
fn fill_is_scaled_by_the_transform() {
    let mut s = surface(40, 40);
    let op = DrawOp::Fill {
        path: rect_path(0.0, 0.0, 10.0, 10.0),
        color: Rgba8::rgb(255, 0, 0),
        clip: None,
    };
    s.draw(&op, Affine::scale(2.0));
    let frame = s.finish();
    assert!(frame.premultiplied);
    assert_eq!(pixel(&frame, 10, 10), [255, 0, 0, 255]);
    assert_eq!(pixel(&frame, 30, 30)[3], 0);
}

#[test]
fn surface_is_cleared_between_frames() {
    let mut s = surface(8, 8);
    let op = DrawOp::Fill {
        path: rect_path(0.0, 0.0, 8.0, 8.0),
        color: Rgba8::BLACK,
        clip: None,
    };
    s.draw(&op, Affine::IDENTITY);
    let first = s.finish();
    assert_eq!(pixel(&first, 4, 4)[3], 255);
    let second = s.finish();
    assert!(second.data.iter().all(|&b| b == 0));
}

#[test]
fn clip_limits_the_fill() {
    let mut s = surface(20, 10);
    let op = DrawOp::Fill {
        path: rect_path(0.0, 0.0, 20.0, 10.0),
        color: Rgba8::rgb(0, 0, 255),
        clip: Some(rect_path(0.0, 0.0, 10.0, 10.0)),
    };
    s.draw(&op, Affine::IDENTITY);
    let frame = s.finish();
    assert_eq!(pixel(&frame, 4, 5), [0, 0, 255, 255]);
    assert_eq!(pixel(&frame, 15, 5)[3], 0);
}

#[test]
fn stroke_width_does_not_follow_the_scale_factor() {
    let mut s = surface(100, 100);
    let mut line = BezPath::new();
    line.move_to((0.0, 10.0));
    line.line_to((50.0, 10.0));
    let op = DrawOp::Stroke {
        path: line,
        color: Rgba8::BLACK,
        stroke: StrokeSpec::solid(StrokeStyle::Border),
    };
    s.draw(&op, Affine::scale(4.0));
    let frame = s.finish();
    assert_eq!(pixel(&frame, 50, 40)[3], 255);
    assert_eq!(pixel(&frame, 50, 44)[3], 0);
    assert_eq!(pixel(&frame, 50, 36)[3], 0);
}

#[test]
fn text_without_font_is_skipped() {
    let mut s = surface(50, 20);
    let op = DrawOp::Text {
        text: "TP53".to_string(),
        bounds: kurbo::Rect::new(0.0, 0.0, 50.0, 20.0),
        color: Rgba8::BLACK,
        size: 8.0,
        align: TextAlign::Center,
    };
    s.draw(&op, Affine::IDENTITY);
    let frame = s.finish();
    assert!(frame.data.iter().all(|&b| b == 0));
}

#[test]
fn oversized_surfaces_are_rejected() {
    let too_wide = PixelSize {
        width: 70_000,
        height: 1,
    };
    assert!(CpuSurface::with_font(too_wide, None).is_err());
}
