use super::*;
use crate::model::diagram::Coordinate;

fn r() -> Rect {
    Rect::new(10.0, 20.0, 110.0, 60.0)
}

fn approx_rect(a: Rect, b: Rect) -> bool {
    (a.x0 - b.x0).abs() < 1e-6
        && (a.y0 - b.y0).abs() < 1e-6
        && (a.x1 - b.x1).abs() < 1e-6
        && (a.y1 - b.y1).abs() < 1e-6
}

#[test]
fn node_outlines_stay_inside_their_box() {
    for path in [
        rectangle(r()),
        rounded_rectangle(r(), ROUND_RECT_ARC),
        corridor(r()),
        octagon(r(), COMPLEX_CORNER),
        hexagon(r()),
        rna(r()),
    ] {
        assert!(approx_rect(path.bounding_box(), r()), "{path:?}");
    }
    let inner = inner_rounded_rectangle(r(), 3.0, 4.0).bounding_box();
    assert!(approx_rect(inner, Rect::new(13.0, 23.0, 107.0, 57.0)));
}

#[test]
fn oversized_arcs_are_clamped() {
    let tiny = Rect::new(0.0, 0.0, 4.0, 2.0);
    assert!(approx_rect(rounded_rectangle(tiny, 50.0).bounding_box(), tiny));
    assert!(approx_rect(octagon(tiny, 50.0).bounding_box(), tiny));
}

#[test]
fn gene_parts_share_the_header_band() {
    let fill = gene_fill(r()).bounding_box();
    assert_eq!(fill.y0, r().y0 + GENE_HEADER);
    assert_eq!(fill.y1, r().y1);
    let arrow = gene_arrow(r()).bounding_box();
    assert!(arrow.y1 <= r().y0 + GENE_HEADER);
    assert_eq!(arrow.x1, r().x1);
    let line = gene_line(r()).bounding_box();
    assert_eq!(line.x0, r().x0);
    assert_eq!(line.y1, r().y0 + GENE_HEADER);
}

#[test]
fn segments_join_into_one_polyline() {
    let seg = |x0: f64, y0: f64, x1: f64, y1: f64| Segment {
        from: Coordinate::new(x0, y0),
        to: Coordinate::new(x1, y1),
    };
    let p = segments(&[seg(0.0, 0.0, 10.0, 0.0), seg(10.0, 0.0, 10.0, 10.0)]);
    let moves = p
        .elements()
        .iter()
        .filter(|e| matches!(e, PathEl::MoveTo(_)))
        .count();
    assert_eq!(moves, 1);

    let p = segments(&[seg(0.0, 0.0, 10.0, 0.0), seg(20.0, 0.0, 30.0, 0.0)]);
    let moves = p
        .elements()
        .iter()
        .filter(|e| matches!(e, PathEl::MoveTo(_)))
        .count();
    assert_eq!(moves, 2);
}

#[test]
fn decorators_follow_their_definition() {
    let def = |shape_type, a: Option<(f64, f64)>, b: Option<(f64, f64)>| ShapeDef {
        shape_type,
        a: a.map(|(x, y)| Coordinate::new(x, y)),
        b: b.map(|(x, y)| Coordinate::new(x, y)),
        c: Some(Coordinate::new(5.0, 5.0)),
        r: Some(2.0),
        r1: Some(1.0),
        s: None,
        empty: None,
    };
    let boxed = def(ShapeType::Box, Some((0.0, 0.0)), Some((8.0, 6.0)));
    assert!(approx_rect(decorator_bounds(&boxed), Rect::new(0.0, 0.0, 8.0, 6.0)));

    let circle = def(ShapeType::Circle, None, None);
    assert!(approx_rect(decorator_bounds(&circle), Rect::new(3.0, 3.0, 7.0, 7.0)));

    let stop = def(ShapeType::Stop, Some((0.0, 0.0)), Some((0.0, 4.0)));
    assert!(!is_fillable(&stop));

    let broken = def(ShapeType::Arrow, None, None);
    assert!(decorator(&broken).elements().is_empty());
}
