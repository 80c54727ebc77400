use super::*;
use crate::{config::args::RasterArgs, model::graph::Graph};

#[test]
fn every_kind_resolves_to_a_renderer() {
    for kind in RenderableKind::ALL {
        let renderer = renderer_for(kind);
        assert!(std::ptr::eq(renderer, renderer_for(kind)));
    }
    assert!(std::ptr::eq(
        renderer_for(RenderableKind::Protein),
        renderer_for(RenderableKind::ProteinDrug)
    ));
    assert!(!std::ptr::eq(
        renderer_for(RenderableKind::Protein),
        renderer_for(RenderableKind::Gene)
    ));
}

#[test]
fn draw_all_batches_consecutive_kinds() {
    let diagram: Diagram = serde_json::from_str(
        r#"{
        "stableId": "R-HSA-BATCH",
        "nodes": [
            {"id": 1, "renderableClass": "Protein",
                "prop": {"x": 0, "y": 0, "width": 10, "height": 10}},
            {"id": 2, "renderableClass": "Protein",
                "prop": {"x": 20, "y": 0, "width": 10, "height": 10}},
            {"id": 3, "renderableClass": "Chemical",
                "prop": {"x": 40, "y": 0, "width": 10, "height": 10}}
        ]
    }"#,
    )
    .unwrap();
    let args = RasterArgs::new("R-HSA-BATCH", "png");
    let index = DiagramIndex::new(&diagram, &Graph::default(), None, &args).unwrap();
    let profiles = ColorProfiles::default();
    let mut canvas = DiagramCanvas::new();
    let objects: Vec<_> = diagram.nodes.iter().map(DiagramObject::Node).collect();
    let mut ctx = LayoutContext {
        canvas: &mut canvas,
        diagram: &diagram,
        index: &index,
        profiles: &profiles,
        column: None,
    };
    draw_all(&mut ctx, &objects).unwrap();

    // Two proteins share one fill op; the chemical gets its own.
    assert_eq!(canvas.ops(Layer::NodeFill).len(), 2);
    assert_eq!(canvas.ops(Layer::NodeBorder).len(), 2);
    assert_eq!(canvas.ops(Layer::NodeText).len(), 3);
}

#[test]
fn draw_all_rejects_unknown_kinds() {
    let diagram: Diagram = serde_json::from_str(
        r#"{"stableId": "X", "nodes": [
            {"id": 1, "renderableClass": "Blob", "prop": {"x": 0, "y": 0, "width": 1, "height": 1}}
        ]}"#,
    )
    .unwrap();
    let index = DiagramIndex::default();
    let profiles = ColorProfiles::default();
    let mut canvas = DiagramCanvas::new();
    let objects: Vec<_> = diagram.nodes.iter().map(DiagramObject::Node).collect();
    let mut ctx = LayoutContext {
        canvas: &mut canvas,
        diagram: &diagram,
        index: &index,
        profiles: &profiles,
        column: None,
    };
    let err = draw_all(&mut ctx, &objects).unwrap_err();
    assert!(matches!(err, crate::RasterError::UnknownKind(_)));
}
