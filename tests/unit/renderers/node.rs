use super::*;
use crate::{
    config::args::RasterArgs,
    model::{analysis::AnalysisResult, diagram::Diagram, graph::Graph},
    render::canvas::DrawOp,
    renderers::draw_all,
};

fn diagram() -> Diagram {
    serde_json::from_str(
        r#"{
        "stableId": "R-HSA-NODE",
        "nodes": [
            {"id": 1, "reactomeId": 10, "displayName": "A", "renderableClass": "Complex",
             "prop": {"x": 0, "y": 0, "width": 100, "height": 20}},
            {"id": 2, "reactomeId": 20, "displayName": "B", "renderableClass": "ProteinDrug",
             "isCrossed": true,
             "prop": {"x": 0, "y": 40, "width": 60, "height": 20},
             "nodeAttachments": [{"label": "P", "shape": {"type": "BOX",
                "a": {"x": 55, "y": 38}, "b": {"x": 65, "y": 46}}}]}
        ]
    }"#,
    )
    .unwrap()
}

fn graph() -> Graph {
    serde_json::from_str(
        r#"{"nodes": [
            {"dbId": 10, "stId": "R-HSA-10", "children": [11, 12]},
            {"dbId": 11, "stId": "R-HSA-11"},
            {"dbId": 12, "stId": "R-HSA-12"},
            {"dbId": 20, "stId": "R-HSA-20"}
        ]}"#,
    )
    .unwrap()
}

fn layout(diagram: &Diagram, index: &DiagramIndex, column: Option<usize>) -> DiagramCanvas {
    let profiles = ColorProfiles::default();
    let mut canvas = DiagramCanvas::new();
    let objects: Vec<_> = diagram.nodes.iter().map(DiagramObject::Node).collect();
    let mut ctx = LayoutContext {
        canvas: &mut canvas,
        diagram,
        index,
        profiles: &profiles,
        column,
    };
    draw_all(&mut ctx, &objects).unwrap();
    canvas
}

#[test]
fn decorations_land_on_their_layers() {
    let d = diagram();
    let mut args = RasterArgs::new("R-HSA-NODE", "png");
    args.selected = vec!["R-HSA-10".to_string()];
    let index = DiagramIndex::new(&d, &graph(), None, &args).unwrap();
    let canvas = layout(&d, &index, None);

    assert_eq!(canvas.ops(Layer::Selection).len(), 1);
    assert_eq!(canvas.ops(Layer::Cross).len(), 1);
    assert_eq!(canvas.ops(Layer::AttachmentFill).len(), 1);
    assert_eq!(canvas.ops(Layer::AttachmentBorder).len(), 1);
    // Two labels, the attachment label and the drug marker.
    assert_eq!(canvas.ops(Layer::NodeText).len(), 4);
    assert!(canvas.ops(Layer::NodeAnalysis).is_empty());
}

#[test]
fn partial_hits_are_clipped_to_their_share() {
    let d = diagram();
    let analysis: AnalysisResult = serde_json::from_str(
        r#"{"type": "EXPRESSION", "expression": {"columnNames": ["t0", "t1"]},
            "entities": [{"id": "R-HSA-11", "exp": [0.0, 10.0]},
                {"id": "R-HSA-20", "exp": [5.0, 5.0]}]}"#,
    )
    .unwrap();
    let args = RasterArgs::new("R-HSA-NODE", "png");
    let index = DiagramIndex::new(&d, &graph(), Some(&analysis), &args).unwrap();
    let canvas = layout(&d, &index, Some(1));

    let ops = canvas.ops(Layer::NodeAnalysis);
    assert_eq!(ops.len(), 2);
    let DrawOp::Fill { clip, color, .. } = &ops[0] else {
        panic!("expected a fill");
    };
    let clip = clip.as_ref().expect("complex is half hit");
    {
        use kurbo::Shape;
        assert_eq!(clip.bounding_box(), Rect::new(0.0, 0.0, 50.0, 20.0));
    }
    let profiles = ColorProfiles::default();
    assert_eq!(*color, profiles.analysis.expression.max);
    let DrawOp::Fill { clip, .. } = &ops[1] else {
        panic!("expected a fill");
    };
    assert!(clip.is_none());
}

#[test]
fn partially_hit_proteins_are_filled_completely() {
    let d: Diagram = serde_json::from_str(
        r#"{"stableId": "R-HSA-ISO", "nodes": [
            {"id": 1, "reactomeId": 40, "renderableClass": "Protein",
             "prop": {"x": 0, "y": 0, "width": 80, "height": 20}}]}"#,
    )
    .unwrap();
    let graph: Graph = serde_json::from_str(
        r#"{"nodes": [
            {"dbId": 40, "stId": "R-HSA-40", "children": [41, 42]},
            {"dbId": 41, "stId": "R-HSA-41"},
            {"dbId": 42, "stId": "R-HSA-42"}
        ]}"#,
    )
    .unwrap();
    let analysis: AnalysisResult = serde_json::from_str(
        r#"{"type": "EXPRESSION", "expression": {"columnNames": ["t0"]},
            "entities": [{"id": "R-HSA-41", "exp": [3.0]}]}"#,
    )
    .unwrap();
    let index =
        DiagramIndex::new(&d, &graph, Some(&analysis), &RasterArgs::new("R-HSA-ISO", "png"))
            .unwrap();
    let canvas = layout(&d, &index, Some(0));

    let ops = canvas.ops(Layer::NodeAnalysis);
    assert_eq!(ops.len(), 1);
    let DrawOp::Fill { clip, .. } = &ops[0] else {
        panic!("expected a fill");
    };
    assert!(clip.is_none());
}
