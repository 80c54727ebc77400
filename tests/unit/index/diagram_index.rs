use super::*;

fn diagram() -> Diagram {
    serde_json::from_str(
        r#"{
        "stableId": "R-HSA-IDX",
        "nodes": [
            {"id": 1, "reactomeId": 10, "renderableClass": "Protein",
             "prop": {"x": 0, "y": 0, "width": 10, "height": 10}},
            {"id": 2, "reactomeId": 10, "renderableClass": "Protein",
             "prop": {"x": 20, "y": 0, "width": 10, "height": 10}},
            {"id": 3, "reactomeId": 30, "renderableClass": "Complex",
             "prop": {"x": 40, "y": 0, "width": 10, "height": 10}},
            {"id": 4, "reactomeId": 40, "renderableClass": "Chemical",
             "prop": {"x": 60, "y": 0, "width": 10, "height": 10}}
        ],
        "edges": [
            {"id": 9, "reactomeId": 90, "renderableClass": "Reaction",
             "position": {"x": 5, "y": 30}, "inputs": [{"id": 1}], "outputs": [{"id": 4}]}
        ]
    }"#,
    )
    .unwrap()
}

fn graph() -> Graph {
    serde_json::from_str(
        r#"{"nodes": [
            {"dbId": 10, "stId": "R-HSA-10", "identifier": "P1"},
            {"dbId": 11, "stId": "R-HSA-11", "identifier": "P2"},
            {"dbId": 30, "stId": "R-HSA-30", "children": [10, 11, 30]},
            {"dbId": 40, "stId": "R-HSA-40", "identifier": "CHEBI:1"},
            {"dbId": 90, "stId": "R-HSA-90"}
        ]}"#,
    )
    .unwrap()
}

fn expression(entities: &str) -> AnalysisResult {
    serde_json::from_str(&format!(
        r#"{{"type": "EXPRESSION",
            "expression": {{"columnNames": ["a", "b", "c"]}},
            "entities": {entities}}}"#
    ))
    .unwrap()
}

fn args() -> RasterArgs {
    RasterArgs::new("R-HSA-IDX", "png")
}

#[test]
fn no_analysis_means_type_none() {
    let idx = DiagramIndex::new(&diagram(), &graph(), None, &args()).unwrap();
    assert_eq!(idx.analysis_type(), AnalysisType::None);
    assert!(idx.expression_columns().is_empty());
    assert!(!idx.is_hit(1));
}

#[test]
fn nodes_sharing_an_entity_share_values() {
    let a = expression(r#"[{"id": "P1", "exp": [1.0, 2.0, 3.0]}]"#);
    let idx = DiagramIndex::new(&diagram(), &graph(), Some(&a), &args()).unwrap();
    assert_eq!(idx.expression_columns().len(), 3);
    assert_eq!(idx.value(1, 2), Some(3.0));
    assert_eq!(idx.node_analysis(1), idx.node_analysis(2));
    assert_eq!(idx.value(4, 0), None);
    assert_eq!(idx.expression_range(), (1.0, 3.0));
    assert_eq!(idx.normalized(2.0), 0.5);
}

#[test]
fn complexes_average_their_hit_components() {
    let a = expression(
        r#"[{"id": "P1", "exp": [2.0, 2.0, 2.0]}, {"id": "R-HSA-11", "exp": [4.0, 0.0, 6.0]}]"#,
    );
    let idx = DiagramIndex::new(&diagram(), &graph(), Some(&a), &args()).unwrap();
    let complex = idx.node_analysis(3).unwrap();
    assert_eq!(complex.exp, vec![3.0, 1.0, 4.0]);
    assert_eq!(complex.hit_fraction, 1.0);

    let a = expression(r#"[{"id": "P2", "exp": [1.0, 1.0, 1.0]}]"#);
    let idx = DiagramIndex::new(&diagram(), &graph(), Some(&a), &args()).unwrap();
    assert_eq!(idx.node_analysis(3).unwrap().hit_fraction, 0.5);
}

#[test]
fn malformed_expression_payloads_are_rejected() {
    let short = expression(r#"[{"id": "P1", "exp": [1.0]}]"#);
    let err = DiagramIndex::new(&diagram(), &graph(), Some(&short), &args()).unwrap_err();
    assert!(matches!(err, RasterError::MalformedAnalysis(_)));

    let no_columns: AnalysisResult =
        serde_json::from_str(r#"{"type": "EXPRESSION", "expression": {"columnNames": []}}"#)
            .unwrap();
    let err = DiagramIndex::new(&diagram(), &graph(), Some(&no_columns), &args()).unwrap_err();
    assert!(matches!(err, RasterError::MalformedAnalysis(_)));
}

#[test]
fn enrichment_marks_hits_without_columns() {
    let a: AnalysisResult = serde_json::from_str(
        r#"{"type": "OVERREPRESENTATION", "entities": [{"id": "CHEBI:1"}]}"#,
    )
    .unwrap();
    let idx = DiagramIndex::new(&diagram(), &graph(), Some(&a), &args()).unwrap();
    assert!(idx.is_hit(4));
    assert!(!idx.is_hit(1));
    assert!(idx.expression_columns().is_empty());
}

#[test]
fn selecting_a_reaction_halos_its_participants() {
    let mut args = args();
    args.selected = vec!["R-HSA-90".to_string()];
    let idx = DiagramIndex::new(&diagram(), &graph(), None, &args).unwrap();
    assert!(idx.is_selected(9));
    assert!(idx.is_haloed(1));
    assert!(idx.is_haloed(4));
    assert!(!idx.is_haloed(3));

    args.selected = vec!["10".to_string()];
    let idx = DiagramIndex::new(&diagram(), &graph(), None, &args).unwrap();
    assert!(idx.is_selected(1) && idx.is_selected(2));
}

#[test]
fn flags_propagate_from_components() {
    let mut args = args();
    args.flags = vec!["P2".to_string()];
    let idx = DiagramIndex::new(&diagram(), &graph(), None, &args).unwrap();
    assert!(idx.is_flagged(3));
    assert!(!idx.is_flagged(1));
}
