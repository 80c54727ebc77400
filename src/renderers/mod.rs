//! Per-kind rendering capabilities.
//!
//! Every [`RenderableKind`] maps to exactly one [`Renderer`] through [`renderer_for`]. The match
//! is exhaustive, so a new kind cannot compile without an entry.

pub mod compartment;
pub mod edge;
pub mod gene;
pub mod link;
pub mod node;
pub mod note;

use crate::{
    foundation::core::{BezPath, Rgba8},
    foundation::error::RasterResult,
    index::{diagram_index::DiagramIndex, render_info::NodeRenderInfo},
    model::{
        diagram::{Diagram, DiagramObject},
        kind::RenderableKind,
    },
    profiles::{color::ColorProfiles, stroke::StrokeSpec},
    render::canvas::{DiagramCanvas, Layer},
};

/// Shared state handed to renderers during one layout pass.
pub struct LayoutContext<'a> {
    pub canvas: &'a mut DiagramCanvas,
    pub diagram: &'a Diagram,
    pub index: &'a DiagramIndex,
    pub profiles: &'a ColorProfiles,
    /// Expression column painted by the initial layout.
    pub column: Option<usize>,
}

pub type ShapeFn = fn(&DiagramObject<'_>) -> BezPath;
pub type FillFn = fn(&mut DiagramCanvas, Layer, Rgba8, &[DiagramObject<'_>]);
pub type BorderFn = fn(&mut DiagramCanvas, Layer, Rgba8, StrokeSpec, &[DiagramObject<'_>]);
pub type TextFn = fn(&mut DiagramCanvas, Rgba8, &[DiagramObject<'_>]);
pub type ExpressionFn =
    fn(&ColorProfiles, &DiagramIndex, &NodeRenderInfo, usize, &mut DiagramCanvas);
pub type DrawFn = fn(&mut LayoutContext<'_>, &[DiagramObject<'_>]) -> RasterResult<()>;

/// Capability record for one kind.
pub struct Renderer {
    /// Primary outline in diagram units.
    pub shape: ShapeFn,
    /// Paint interiors of a same-kind batch.
    pub fill: FillFn,
    /// Paint outlines of a batch, including auxiliary sub-shapes.
    pub border: BorderFn,
    /// Paint labels of a batch.
    pub text: TextFn,
    /// Recolor one node for an analysis column; the only per-frame operation.
    pub expression: ExpressionFn,
    /// Lay out a batch of consecutive same-kind objects.
    pub draw: DrawFn,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer").finish_non_exhaustive()
    }
}

pub fn renderer_for(kind: RenderableKind) -> &'static Renderer {
    use RenderableKind as K;
    match kind {
        K::Protein | K::ProteinDrug => &node::PROTEIN,
        K::Gene => &gene::GENE,
        K::Rna | K::RnaDrug => &node::RNA,
        K::Chemical | K::ChemicalDrug => &node::CHEMICAL,
        K::Complex | K::ComplexDrug => &node::COMPLEX,
        K::Entity => &node::ENTITY,
        K::EntitySet | K::EntitySetDrug => &node::ENTITY_SET,
        K::ProcessNode => &node::PROCESS_NODE,
        K::EncapsulatedNode => &node::ENCAPSULATED_NODE,
        K::Cell => &node::CELL,
        K::Compartment => &compartment::COMPARTMENT,
        K::Note => &note::NOTE,
        K::Reaction => &edge::REACTION,
        K::EntitySetAndMemberLink
        | K::EntitySetAndEntitySetLink
        | K::Interaction
        | K::FlowLine => &link::LINK,
    }
}

/// Split `objects` into runs of consecutive same-kind objects and hand each run to its renderer.
pub fn draw_all(ctx: &mut LayoutContext<'_>, objects: &[DiagramObject<'_>]) -> RasterResult<()> {
    let mut kinds = Vec::with_capacity(objects.len());
    for object in objects {
        kinds.push(object.kind()?);
    }
    let mut start = 0;
    while start < objects.len() {
        let kind = kinds[start];
        let len = kinds[start..].iter().take_while(|k| **k == kind).count();
        (renderer_for(kind).draw)(ctx, &objects[start..start + len])?;
        start += len;
    }
    Ok(())
}

/// Merge many outlines into one path so a batch costs a single paint op.
pub(crate) fn merged(paths: impl IntoIterator<Item = BezPath>) -> BezPath {
    let mut out = BezPath::new();
    for p in paths {
        out.extend(p.elements().iter().copied());
    }
    out
}

/// Paint nothing; for kinds without that capability.
pub(crate) fn no_fill(_: &mut DiagramCanvas, _: Layer, _: Rgba8, _: &[DiagramObject<'_>]) {}

pub(crate) fn no_border(
    _: &mut DiagramCanvas,
    _: Layer,
    _: Rgba8,
    _: StrokeSpec,
    _: &[DiagramObject<'_>],
) {
}

pub(crate) fn no_text(_: &mut DiagramCanvas, _: Rgba8, _: &[DiagramObject<'_>]) {}

pub(crate) fn no_expression(
    _: &ColorProfiles,
    _: &DiagramIndex,
    _: &NodeRenderInfo,
    _: usize,
    _: &mut DiagramCanvas,
) {
}

#[cfg(test)]
#[path = "../../tests/unit/renderers/registry.rs"]
mod tests;
