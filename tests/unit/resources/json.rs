use super::*;

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "pathway_raster_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

const DIAGRAM: &str = r#"{
    "stableId": "R-HSA-100",
    "nodes": [{
        "id": 1, "reactomeId": 10, "displayName": "TP53", "renderableClass": "Protein",
        "prop": {"x": 10, "y": 10, "width": 80, "height": 30}
    }]
}"#;

#[test]
fn reads_diagram_and_graph_files() {
    let dir = temp_dir("json_reads");
    std::fs::write(dir.join("R-HSA-100.json"), DIAGRAM).unwrap();
    std::fs::write(
        dir.join("R-HSA-100.graph.json"),
        r#"{"nodes": [{"dbId": 10, "stId": "R-HSA-10", "identifier": "P04637"}]}"#,
    )
    .unwrap();

    let res = JsonDirectory::new(&dir);
    let d = res.diagram("R-HSA-100").unwrap();
    assert_eq!(d.nodes.len(), 1);
    assert_eq!(d.nodes[0].display_name, "TP53");
    let g = res.graph("R-HSA-100").unwrap();
    assert_eq!(g.nodes[0].identifier.as_deref(), Some("P04637"));
}

#[test]
fn missing_file_is_resource_not_found() {
    let dir = temp_dir("json_missing");
    let res = JsonDirectory::new(&dir);
    assert!(matches!(
        res.diagram("R-HSA-404"),
        Err(RasterError::ResourceNotFound(_))
    ));
    assert!(matches!(
        res.diagram("../etc/passwd"),
        Err(RasterError::ResourceNotFound(_))
    ));
}

#[test]
fn broken_json_is_malformed_input() {
    let dir = temp_dir("json_broken");
    std::fs::write(dir.join("R-HSA-1.json"), "{\"nodes\": 3}").unwrap();
    let res = JsonDirectory::new(&dir);
    assert!(matches!(
        res.diagram("R-HSA-1"),
        Err(RasterError::MalformedInput(_))
    ));
}

#[test]
fn analysis_errors_split_service_and_payload() {
    let dir = temp_dir("json_analysis");
    std::fs::write(dir.join("bad.json"), "{\"type\": \"NOPE\"}").unwrap();
    std::fs::write(
        dir.join("ok.json"),
        r#"{"type": "EXPRESSION", "expression": {"columnNames": ["t0"]}, "entities": []}"#,
    )
    .unwrap();

    let no_source = JsonDirectory::new(&dir);
    assert!(matches!(
        no_source.analysis("ok"),
        Err(RasterError::ExternalServiceError(_))
    ));

    let res = JsonDirectory::new(&dir).with_analysis_dir(&dir);
    assert!(res.analysis("ok").is_ok());
    assert!(matches!(
        res.analysis("missing"),
        Err(RasterError::ExternalServiceError(_))
    ));
    assert!(matches!(
        res.analysis("bad"),
        Err(RasterError::MalformedAnalysis(_))
    ));
}
