use super::*;
use crate::{
    config::args::RasterArgs, index::diagram_index::DiagramIndex, model::graph::Graph,
    profiles::color::ColorProfiles, renderers::draw_all,
};

fn diagram() -> Diagram {
    serde_json::from_str(
        r#"{
        "stableId": "R-HSA-EDGE",
        "nodes": [{
            "id": 1, "renderableClass": "Protein",
            "prop": {"x": 0, "y": 0, "width": 20, "height": 10},
            "connectors": [{"edgeId": 5, "type": "INPUT",
                "segments": [{"from": {"x": 20, "y": 5}, "to": {"x": 40, "y": 5}}],
                "stoichiometry": {"value": 2, "shape": {"type": "BOX",
                    "a": {"x": 25, "y": 0}, "b": {"x": 31, "y": 6}}}}]
        }],
        "edges": [{
            "id": 5, "reactomeId": 50, "renderableClass": "Reaction",
            "position": {"x": 43, "y": 5},
            "segments": [{"from": {"x": 46, "y": 5}, "to": {"x": 80, "y": 5}}],
            "reactionShape": {"type": "BOX", "a": {"x": 40, "y": 2}, "b": {"x": 46, "y": 8}},
            "endShape": {"type": "ARROW", "a": {"x": 80, "y": 2}, "b": {"x": 86, "y": 5},
                "c": {"x": 80, "y": 8}},
            "inputs": [{"id": 1}]
        }]
    }"#,
    )
    .unwrap()
}

#[test]
fn reactions_join_connectors_and_decorators() {
    let d = diagram();
    let mut args = RasterArgs::new("R-HSA-EDGE", "png");
    args.selected = vec!["50".to_string()];
    let graph = Graph::default();
    let index = DiagramIndex::new(&d, &graph, None, &args).unwrap();
    let profiles = ColorProfiles::default();
    let mut canvas = DiagramCanvas::new();
    let objects: Vec<_> = d.edges.iter().map(DiagramObject::Edge).collect();
    let mut ctx = LayoutContext {
        canvas: &mut canvas,
        diagram: &d,
        index: &index,
        profiles: &profiles,
        column: None,
    };
    draw_all(&mut ctx, &objects).unwrap();

    let segments = canvas.ops(Layer::EdgeSegment);
    assert_eq!(segments.len(), 1);
    let crate::render::canvas::DrawOp::Stroke { path, color, .. } = &segments[0] else {
        panic!("expected a stroke");
    };
    assert_eq!(*color, profiles.diagram.selection);
    {
        use kurbo::Shape;
        let b = path.bounding_box();
        assert_eq!((b.x0, b.x1), (20.0, 80.0));
    }
    assert_eq!(canvas.ops(Layer::EdgeFlag).len(), 1);
    // Stoichiometry box, end arrow and reaction center.
    let fills = canvas.ops(Layer::EdgeShapeFill);
    assert_eq!(fills.len(), 3);
    let crate::render::canvas::DrawOp::Fill { color, .. } = &fills[0] else {
        panic!("expected the stoichiometry box fill");
    };
    assert_eq!(*color, profiles.diagram.stoichiometry.fill);
    assert_eq!(canvas.ops(Layer::EdgeShapeBorder).len(), 3);
    assert_eq!(canvas.ops(Layer::EdgeText).len(), 1);
}
