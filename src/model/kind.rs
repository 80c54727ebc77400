use crate::foundation::error::{RasterError, RasterResult};

/// Closed set of visual kinds a diagram object can carry.
///
/// The tag strings are the `renderableClass` values of the diagram schema. Adding a kind means
/// adding a variant here and an entry in [`crate::renderers::renderer_for`]; the exhaustive
/// `match` there makes a missing entry a build error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RenderableKind {
    Protein,
    ProteinDrug,
    Gene,
    Rna,
    RnaDrug,
    Chemical,
    ChemicalDrug,
    Complex,
    ComplexDrug,
    Entity,
    EntitySet,
    EntitySetDrug,
    ProcessNode,
    EncapsulatedNode,
    Cell,
    Compartment,
    Note,
    Reaction,
    EntitySetAndMemberLink,
    EntitySetAndEntitySetLink,
    Interaction,
    FlowLine,
}

/// Which diagram collection a kind belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KindRole {
    Node,
    Compartment,
    Note,
    Edge,
    Link,
}

impl RenderableKind {
    pub const ALL: [RenderableKind; 22] = [
        Self::Protein,
        Self::ProteinDrug,
        Self::Gene,
        Self::Rna,
        Self::RnaDrug,
        Self::Chemical,
        Self::ChemicalDrug,
        Self::Complex,
        Self::ComplexDrug,
        Self::Entity,
        Self::EntitySet,
        Self::EntitySetDrug,
        Self::ProcessNode,
        Self::EncapsulatedNode,
        Self::Cell,
        Self::Compartment,
        Self::Note,
        Self::Reaction,
        Self::EntitySetAndMemberLink,
        Self::EntitySetAndEntitySetLink,
        Self::Interaction,
        Self::FlowLine,
    ];

    /// Resolve a schema tag. Unknown tags are a contract violation, never skipped.
    pub fn from_tag(tag: &str) -> RasterResult<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_tag() == tag)
            .ok_or_else(|| RasterError::unknown_kind(tag))
    }

    pub fn as_tag(self) -> &'static str {
        match self {
            Self::Protein => "Protein",
            Self::ProteinDrug => "ProteinDrug",
            Self::Gene => "Gene",
            Self::Rna => "RNA",
            Self::RnaDrug => "RNADrug",
            Self::Chemical => "Chemical",
            Self::ChemicalDrug => "ChemicalDrug",
            Self::Complex => "Complex",
            Self::ComplexDrug => "ComplexDrug",
            Self::Entity => "Entity",
            Self::EntitySet => "EntitySet",
            Self::EntitySetDrug => "EntitySetDrug",
            Self::ProcessNode => "ProcessNode",
            Self::EncapsulatedNode => "EncapsulatedNode",
            Self::Cell => "Cell",
            Self::Compartment => "Compartment",
            Self::Note => "Note",
            Self::Reaction => "Reaction",
            Self::EntitySetAndMemberLink => "EntitySetAndMemberLink",
            Self::EntitySetAndEntitySetLink => "EntitySetAndEntitySetLink",
            Self::Interaction => "Interaction",
            Self::FlowLine => "FlowLine",
        }
    }

    pub fn role(self) -> KindRole {
        match self {
            Self::Compartment => KindRole::Compartment,
            Self::Note => KindRole::Note,
            Self::Reaction => KindRole::Edge,
            Self::EntitySetAndMemberLink
            | Self::EntitySetAndEntitySetLink
            | Self::Interaction
            | Self::FlowLine => KindRole::Link,
            _ => KindRole::Node,
        }
    }

    pub fn is_drug(self) -> bool {
        matches!(
            self,
            Self::ProteinDrug
                | Self::RnaDrug
                | Self::ChemicalDrug
                | Self::ComplexDrug
                | Self::EntitySetDrug
        )
    }

    /// Kinds whose analysis value aggregates several participants.
    pub fn is_aggregate(self) -> bool {
        matches!(
            self,
            Self::Complex | Self::ComplexDrug | Self::EntitySet | Self::EntitySetDrug
        )
    }
}

impl std::fmt::Display for RenderableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}
