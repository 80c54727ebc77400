use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RasterError::resource_not_found("x")
            .to_string()
            .contains("resource not found:")
    );
    assert!(
        RasterError::malformed_input("x")
            .to_string()
            .contains("malformed input:")
    );
    assert!(
        RasterError::external_service("x")
            .to_string()
            .contains("analysis service error:")
    );
    assert!(
        RasterError::malformed_analysis("x")
            .to_string()
            .contains("malformed analysis:")
    );
    assert!(
        RasterError::unsupported_format("bmp")
            .to_string()
            .contains("unsupported format: bmp")
    );
    assert!(
        RasterError::invalid_operation("x")
            .to_string()
            .contains("invalid operation:")
    );
    assert!(
        RasterError::unknown_kind("Spaceship")
            .to_string()
            .contains("unknown renderable kind: Spaceship")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = RasterError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
