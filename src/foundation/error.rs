/// Convenience result type used across the exporter.
pub type RasterResult<T> = Result<T, RasterError>;

/// Top-level error taxonomy surfaced by the rendering APIs.
///
/// The pixel-budget downscale is not part of this taxonomy: it is a logged degradation and never
/// fails a render.
#[derive(thiserror::Error, Debug)]
pub enum RasterError {
    /// The diagram or graph for a stable id could not be located.
    #[error("resource not found: {0}")]
    ResourceNotFound(String),

    /// Diagram or graph content exists but is structurally invalid.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// The analysis backend is unreachable or answered with an error.
    #[error("analysis service error: {0}")]
    ExternalServiceError(String),

    /// The analysis payload is structurally invalid.
    #[error("malformed analysis: {0}")]
    MalformedAnalysis(String),

    /// Requested output extension is not one of png, jpg, jpeg, gif.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Operation is not valid for the current render session.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// A diagram object carries a kind tag outside the closed schema.
    #[error("unknown renderable kind: {0}")]
    UnknownKind(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RasterError {
    /// Build a [`RasterError::ResourceNotFound`] value.
    pub fn resource_not_found(msg: impl Into<String>) -> Self {
        Self::ResourceNotFound(msg.into())
    }

    /// Build a [`RasterError::MalformedInput`] value.
    pub fn malformed_input(msg: impl Into<String>) -> Self {
        Self::MalformedInput(msg.into())
    }

    /// Build a [`RasterError::ExternalServiceError`] value.
    pub fn external_service(msg: impl Into<String>) -> Self {
        Self::ExternalServiceError(msg.into())
    }

    /// Build a [`RasterError::MalformedAnalysis`] value.
    pub fn malformed_analysis(msg: impl Into<String>) -> Self {
        Self::MalformedAnalysis(msg.into())
    }

    /// Build a [`RasterError::UnsupportedFormat`] value.
    pub fn unsupported_format(msg: impl Into<String>) -> Self {
        Self::UnsupportedFormat(msg.into())
    }

    /// Build a [`RasterError::InvalidOperation`] value.
    pub fn invalid_operation(msg: impl Into<String>) -> Self {
        Self::InvalidOperation(msg.into())
    }

    /// Build a [`RasterError::UnknownKind`] value.
    pub fn unknown_kind(tag: impl Into<String>) -> Self {
        Self::UnknownKind(tag.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
