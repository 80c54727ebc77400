use super::*;
use crate::{
    config::args::RasterArgs,
    model::{analysis::AnalysisResult, diagram::Diagram, graph::Graph},
};

fn diagram() -> Diagram {
    serde_json::from_str(
        r#"{
        "stableId": "R-HSA-INFO",
        "nodes": [
            {"id": 1, "reactomeId": 10, "renderableClass": "Protein",
             "prop": {"x": 0, "y": 0, "width": 40, "height": 20}},
            {"id": 2, "reactomeId": 20, "renderableClass": "Gene", "isDisease": true,
             "isFadeOut": true, "needsDashedBorder": true,
             "prop": {"x": 50, "y": 0, "width": 40, "height": 30}}
        ]
    }"#,
    )
    .unwrap()
}

fn graph() -> Graph {
    serde_json::from_str(
        r#"{"nodes": [{"dbId": 10, "stId": "R-HSA-10"}, {"dbId": 20, "stId": "R-HSA-20"}]}"#,
    )
    .unwrap()
}

#[test]
fn plain_render_uses_profile_colors() {
    let d = diagram();
    let index = DiagramIndex::new(&d, &graph(), None, &RasterArgs::new("x", "png")).unwrap();
    let profiles = ColorProfiles::default();
    let info = NodeRenderInfo::new(&d.nodes[0], RenderableKind::Protein, &index, &profiles, None);
    let base = profiles.diagram.colors(RenderableKind::Protein);
    assert_eq!(info.fill, base.fill);
    assert_eq!(info.border, base.stroke);
    assert!(!info.border_stroke.dashed);
    assert_eq!(info.value, None);
    assert_eq!(info.rect, Rect::new(0.0, 0.0, 40.0, 20.0));
}

#[test]
fn decorations_change_border_and_alpha() {
    let d = diagram();
    let index = DiagramIndex::new(&d, &graph(), None, &RasterArgs::new("x", "png")).unwrap();
    let profiles = ColorProfiles::default();
    let info = NodeRenderInfo::new(&d.nodes[1], RenderableKind::Gene, &index, &profiles, None);
    assert_eq!(info.border, profiles.diagram.disease.fade(FADE_OUT));
    assert!(info.fill.a < 255);
    assert!(info.border_stroke.dashed);
    assert_eq!(
        info.shape,
        crate::render::shapes::gene_fill(Rect::new(50.0, 0.0, 90.0, 30.0))
    );
}

#[test]
fn expression_value_follows_the_column() {
    let d = diagram();
    let analysis: AnalysisResult = serde_json::from_str(
        r#"{"type": "EXPRESSION", "expression": {"columnNames": ["a", "b"]},
            "entities": [{"id": "R-HSA-10", "exp": [1.5, 7.0]}]}"#,
    )
    .unwrap();
    let index =
        DiagramIndex::new(&d, &graph(), Some(&analysis), &RasterArgs::new("x", "png")).unwrap();
    let profiles = ColorProfiles::default();
    let info =
        NodeRenderInfo::new(&d.nodes[0], RenderableKind::Protein, &index, &profiles, Some(1));
    assert_eq!(info.value, Some(7.0));
    assert_eq!(info.hit_fraction, Some(1.0));
    assert_eq!(info.text, profiles.analysis.hit_text);

    let miss = NodeRenderInfo::new(&d.nodes[1], RenderableKind::Gene, &index, &profiles, Some(1));
    assert_eq!(miss.value, None);
    assert_eq!(miss.hit_fraction, None);
}
