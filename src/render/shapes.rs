//! Geometry constructors for every diagram shape.
//!
//! All functions are pure and work in diagram units; scaling happens when the canvas is
//! replayed under the output transform.

use kurbo::{Circle, Line, PathEl, RoundedRect, Shape};

use crate::{
    foundation::core::{BezPath, Point, Rect},
    model::diagram::{Segment, ShapeDef, ShapeType},
};

const TOLERANCE: f64 = 0.1;

pub const ROUND_RECT_ARC: f64 = 8.0;
pub const COMPLEX_CORNER: f64 = 6.0;
pub const COMPARTMENT_ARC: f64 = 20.0;
pub const ENTITY_SET_PADDING: f64 = 3.0;
pub const PROCESS_NODE_PADDING: f64 = 5.0;
/// Height of the band above a gene label that holds the gene symbol.
pub const GENE_HEADER: f64 = 8.0;
const GENE_ARROW_LENGTH: f64 = 8.0;
const GENE_ARROW_HALF: f64 = 3.0;
const RNA_ARC: f64 = 8.0;

pub fn rectangle(r: Rect) -> BezPath {
    r.to_path(TOLERANCE)
}

/// Rounded rectangle; the radius is clamped to half the short side.
pub fn rounded_rectangle(r: Rect, arc: f64) -> BezPath {
    let radius = arc.min(r.width() / 2.0).min(r.height() / 2.0).max(0.0);
    RoundedRect::from_rect(r, radius).to_path(TOLERANCE)
}

/// Stadium with fully rounded ends, used for small molecules.
pub fn corridor(r: Rect) -> BezPath {
    let radius = r.width().min(r.height()) / 2.0;
    RoundedRect::from_rect(r, radius).to_path(TOLERANCE)
}

/// Rectangle with cut corners, used for complexes.
pub fn octagon(r: Rect, corner: f64) -> BezPath {
    let c = corner.min(r.width() / 2.0).min(r.height() / 2.0).max(0.0);
    polygon(&[
        Point::new(r.x0 + c, r.y0),
        Point::new(r.x1 - c, r.y0),
        Point::new(r.x1, r.y0 + c),
        Point::new(r.x1, r.y1 - c),
        Point::new(r.x1 - c, r.y1),
        Point::new(r.x0 + c, r.y1),
        Point::new(r.x0, r.y1 - c),
        Point::new(r.x0, r.y0 + c),
    ])
}

/// Hexagon with pointed left and right sides, used for encapsulated pathways.
pub fn hexagon(r: Rect) -> BezPath {
    let c = (r.height() / 2.0).min(r.width() / 4.0);
    let mid = r.center().y;
    polygon(&[
        Point::new(r.x0 + c, r.y0),
        Point::new(r.x1 - c, r.y0),
        Point::new(r.x1, mid),
        Point::new(r.x1 - c, r.y1),
        Point::new(r.x0 + c, r.y1),
        Point::new(r.x0, mid),
    ])
}

/// Rectangle with a straight top and rounded bottom corners, used for RNA.
pub fn rna(r: Rect) -> BezPath {
    let a = RNA_ARC.min(r.width() / 2.0).min(r.height() / 2.0);
    let mut p = BezPath::new();
    p.move_to((r.x0, r.y0));
    p.line_to((r.x1, r.y0));
    p.line_to((r.x1, r.y1 - a));
    p.quad_to((r.x1, r.y1), (r.x1 - a, r.y1));
    p.line_to((r.x0 + a, r.y1));
    p.quad_to((r.x0, r.y1), (r.x0, r.y1 - a));
    p.close_path();
    p
}

/// Rounded rectangle inset by `padding`, drawn inside sets and cells.
pub fn inner_rounded_rectangle(r: Rect, padding: f64, arc: f64) -> BezPath {
    rounded_rectangle(r.inset(-padding), arc)
}

/// Gene body: the area under the header baseline with rounded bottom corners.
pub fn gene_fill(r: Rect) -> BezPath {
    let y = (r.y0 + GENE_HEADER).min(r.y1);
    let a = ROUND_RECT_ARC.min((r.y1 - y) / 2.0).min(r.width() / 2.0);
    let mut p = BezPath::new();
    p.move_to((r.x0, y));
    p.line_to((r.x1, y));
    p.line_to((r.x1, r.y1 - a));
    p.quad_to((r.x1, r.y1), (r.x1 - a, r.y1));
    p.line_to((r.x0 + a, r.y1));
    p.quad_to((r.x0, r.y1), (r.x0, r.y1 - a));
    p.close_path();
    p
}

/// Gene baseline plus the vertical tick that carries the arrow.
pub fn gene_line(r: Rect) -> BezPath {
    let y = (r.y0 + GENE_HEADER).min(r.y1);
    let tick_x = r.x1 - GENE_ARROW_LENGTH.min(r.width() / 2.0);
    let mut p = BezPath::new();
    p.move_to((r.x0, y));
    p.line_to((r.x1, y));
    p.move_to((tick_x, y));
    p.line_to((tick_x, r.y0 + GENE_HEADER / 2.0));
    p.line_to((r.x1 - GENE_ARROW_HALF, r.y0 + GENE_HEADER / 2.0));
    p
}

/// Filled arrow head at the end of the gene tick, pointing right.
pub fn gene_arrow(r: Rect) -> BezPath {
    let cy = r.y0 + GENE_HEADER / 2.0;
    polygon(&[
        Point::new(r.x1, cy),
        Point::new(r.x1 - GENE_ARROW_HALF * 2.0, cy - GENE_ARROW_HALF),
        Point::new(r.x1 - GENE_ARROW_HALF * 2.0, cy + GENE_ARROW_HALF),
    ])
}

/// Two diagonals across `r`.
pub fn cross(r: Rect) -> BezPath {
    let mut p = BezPath::new();
    p.move_to((r.x0, r.y0));
    p.line_to((r.x1, r.y1));
    p.move_to((r.x1, r.y0));
    p.line_to((r.x0, r.y1));
    p
}

/// Open polyline through consecutive segments; gaps start a new subpath.
pub fn segments(segments: &[Segment]) -> BezPath {
    let mut p = BezPath::new();
    let mut last: Option<Point> = None;
    for s in segments {
        let from = s.from.point();
        if last != Some(from) {
            p.move_to(from);
        }
        p.line_to(s.to.point());
        last = Some(s.to.point());
    }
    p
}

/// Outline of a decorator shape. Missing points collapse to an empty path.
pub fn decorator(shape: &ShapeDef) -> BezPath {
    let pt = |c: Option<crate::model::diagram::Coordinate>| c.map(|c| c.point());
    match shape.shape_type {
        ShapeType::Arrow => match (pt(shape.a), pt(shape.b), pt(shape.c)) {
            (Some(a), Some(b), Some(c)) => polygon(&[a, b, c]),
            _ => BezPath::new(),
        },
        ShapeType::Box => match (pt(shape.a), pt(shape.b)) {
            (Some(a), Some(b)) => rectangle(Rect::from_points(a, b)),
            _ => BezPath::new(),
        },
        ShapeType::Circle => match (pt(shape.c), shape.r) {
            (Some(c), Some(r)) => Circle::new(c, r).to_path(TOLERANCE),
            _ => BezPath::new(),
        },
        ShapeType::DoubleCircle => match (pt(shape.c), shape.r) {
            (Some(c), Some(r)) => {
                let mut p = Circle::new(c, r).to_path(TOLERANCE);
                if let Some(r1) = shape.r1 {
                    p.extend(Circle::new(c, r1).path_elements(TOLERANCE));
                }
                p
            }
            _ => BezPath::new(),
        },
        ShapeType::Stop => match (pt(shape.a), pt(shape.b)) {
            (Some(a), Some(b)) => Line::new(a, b).to_path(TOLERANCE),
            _ => BezPath::new(),
        },
    }
}

/// Whether a decorator is a closed region that can be filled.
pub fn is_fillable(shape: &ShapeDef) -> bool {
    !matches!(shape.shape_type, ShapeType::Stop)
}

/// Bounding box of a decorator, used to place its symbol text.
pub fn decorator_bounds(shape: &ShapeDef) -> Rect {
    decorator(shape).bounding_box()
}

fn polygon(points: &[Point]) -> BezPath {
    let mut p = BezPath::new();
    let mut it = points.iter();
    if let Some(first) = it.next() {
        p.move_to(*first);
        for pt in it {
            p.push(PathEl::LineTo(*pt));
        }
        p.close_path();
    }
    p
}

#[cfg(test)]
#[path = "../../tests/unit/render/shapes.rs"]
mod tests;
