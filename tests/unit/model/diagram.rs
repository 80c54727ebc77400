use super::*;

fn node(id: i64, class: &str) -> Node {
    Node {
        id,
        reactome_id: None,
        display_name: format!("n{id}"),
        renderable_class: class.to_string(),
        prop: NodeProperties::new(0.0, 0.0, 10.0, 10.0),
        is_disease: None,
        is_crossed: None,
        is_fade_out: None,
        needs_dashed_border: None,
        connectors: vec![],
        node_attachments: vec![],
    }
}

fn diagram(nodes: Vec<Node>) -> Diagram {
    Diagram {
        stable_id: "R-HSA-TEST".to_string(),
        nodes,
        ..Diagram::default()
    }
}

#[test]
fn deserializes_schema_json() {
    let json = r#"{
        "stableId": "R-HSA-1",
        "nodes": [{
            "id": 1, "reactomeId": 100, "displayName": "TP53",
            "renderableClass": "Protein",
            "prop": {"x": 10, "y": 20, "width": 60, "height": 25},
            "isDisease": null,
            "connectors": [{"edgeId": 5, "type": "INPUT",
                "segments": [{"from": {"x": 1, "y": 2}, "to": {"x": 3, "y": 4}}]}]
        }],
        "edges": [{
            "id": 5, "renderableClass": "Reaction", "position": {"x": 3, "y": 4},
            "reactionShape": {"type": "BOX", "a": {"x": 0, "y": 0}, "b": {"x": 6, "y": 6}},
            "inputs": [{"id": 1}]
        }]
    }"#;
    let d: Diagram = serde_json::from_str(json).unwrap();
    assert_eq!(d.nodes[0].kind().unwrap(), RenderableKind::Protein);
    assert!(!d.nodes[0].disease());
    assert_eq!(d.nodes[0].connectors[0].edge_id, 5);
    assert_eq!(
        d.edges[0].reaction_shape.as_ref().unwrap().shape_type,
        ShapeType::Box
    );
    assert_eq!(d.edges[0].participants().collect::<Vec<_>>(), vec![1]);
    d.validate().unwrap();
}

#[test]
fn validate_rejects_unknown_kind() {
    let err = diagram(vec![node(1, "Spaceship")]).validate().unwrap_err();
    assert!(matches!(err, RasterError::UnknownKind(_)));
}

#[test]
fn validate_rejects_kind_in_wrong_collection() {
    let err = diagram(vec![node(1, "Reaction")]).validate().unwrap_err();
    assert!(matches!(err, RasterError::MalformedInput(_)));
}

#[test]
fn validate_rejects_bad_geometry_and_duplicates() {
    let mut n = node(1, "Protein");
    n.prop.width = -3.0;
    assert!(matches!(
        diagram(vec![n]).validate(),
        Err(RasterError::MalformedInput(_))
    ));

    let mut n = node(1, "Protein");
    n.prop.x = f64::NAN;
    assert!(diagram(vec![n]).validate().is_err());

    let err = diagram(vec![node(1, "Protein"), node(1, "Gene")])
        .validate()
        .unwrap_err();
    assert!(err.to_string().contains("duplicate node id"));
}

#[test]
fn objects_are_listed_in_family_order() {
    let mut d = diagram(vec![node(1, "Protein")]);
    d.compartments.push(Compartment {
        id: 9,
        reactome_id: None,
        display_name: "cytosol".to_string(),
        renderable_class: "Compartment".to_string(),
        prop: NodeProperties::new(0.0, 0.0, 100.0, 100.0),
        text_position: None,
        insets: None,
        is_fade_out: None,
    });
    let ids: Vec<i64> = d.objects().map(|o| o.id()).collect();
    assert_eq!(ids, vec![9, 1]);
}
