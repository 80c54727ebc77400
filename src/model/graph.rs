use serde::{Deserialize, Serialize};

/// A physical entity or event in the knowledge base behind a diagram.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub db_id: i64,
    pub st_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    /// External reference (UniProt, ChEBI, ...) used to match analysis identifiers.
    #[serde(default)]
    pub identifier: Option<String>,
    /// Components of complexes and members of sets.
    #[serde(default)]
    pub children: Vec<i64>,
}

/// Entity-identity relationships for one diagram.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Graph {
    #[serde(default)]
    pub db_id: Option<i64>,
    #[serde(default)]
    pub st_id: Option<String>,
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
}
