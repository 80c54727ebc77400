use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnalysisType {
    #[default]
    None,
    Expression,
    Overrepresentation,
    SpeciesComparison,
}

/// Column metadata and value range of an expression analysis.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionSummary {
    #[serde(default)]
    pub column_names: Vec<String>,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

/// One identifier found by the analysis, with one value per expression column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoundEntity {
    /// Stable id or external identifier of the matched entity.
    pub id: String,
    #[serde(default)]
    pub exp: Vec<f64>,
}

/// Result of an analysis run, already fetched by the caller or a resource provider.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(rename = "type")]
    pub analysis_type: AnalysisType,
    #[serde(default)]
    pub expression: Option<ExpressionSummary>,
    #[serde(default)]
    pub entities: Vec<FoundEntity>,
}
