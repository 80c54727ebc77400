use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    foundation::core::{Point, Rect},
    foundation::error::{RasterError, RasterResult},
    model::kind::{KindRole, RenderableKind},
};

/// A point in diagram (logical) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn point(self) -> Point {
        Point::new(self.x, self.y)
    }

    fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Position and size of a boxed diagram object.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeProperties {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl NodeProperties {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn rect(self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    fn validate(self, what: &str) -> RasterResult<()> {
        let finite = [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite());
        if !finite || self.width < 0.0 || self.height < 0.0 {
            return Err(RasterError::malformed_input(format!(
                "{what} has invalid geometry {self:?}"
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Coordinate,
    pub to: Coordinate,
}

/// Decorator shapes used for reaction centers, line ends and attachments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShapeType {
    Arrow,
    Box,
    Circle,
    DoubleCircle,
    Stop,
}

/// Geometric decorator as stored in the diagram.
///
/// `ARROW` and `STOP` use `a`, `b` (and `c` for arrows); `BOX` spans `a`..`b`; circles are
/// centered at `c` with radius `r` (and inner radius `r1`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeDef {
    #[serde(rename = "type")]
    pub shape_type: ShapeType,
    #[serde(default)]
    pub a: Option<Coordinate>,
    #[serde(default)]
    pub b: Option<Coordinate>,
    #[serde(default)]
    pub c: Option<Coordinate>,
    #[serde(default)]
    pub r: Option<f64>,
    #[serde(default)]
    pub r1: Option<f64>,
    /// Symbol drawn inside the shape (for example a stoichiometry count).
    #[serde(default)]
    pub s: Option<String>,
    #[serde(default)]
    pub empty: Option<bool>,
}

impl ShapeDef {
    pub fn is_empty(&self) -> bool {
        self.empty.unwrap_or(false)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stoichiometry {
    pub value: i32,
    pub shape: ShapeDef,
}

/// Line from a node to a reaction center.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connector {
    pub edge_id: i64,
    #[serde(rename = "type", default)]
    pub connector_type: Option<String>,
    #[serde(default)]
    pub segments: Vec<Segment>,
    #[serde(default)]
    pub end_shape: Option<ShapeDef>,
    #[serde(default)]
    pub stoichiometry: Option<Stoichiometry>,
}

/// Small labelled box on a node border (post-translational modifications and similar).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeAttachment {
    #[serde(default)]
    pub reactome_id: Option<i64>,
    #[serde(default)]
    pub label: Option<String>,
    pub shape: ShapeDef,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: i64,
    #[serde(default)]
    pub reactome_id: Option<i64>,
    #[serde(default)]
    pub display_name: String,
    pub renderable_class: String,
    pub prop: NodeProperties,
    #[serde(default)]
    pub is_disease: Option<bool>,
    #[serde(default)]
    pub is_crossed: Option<bool>,
    #[serde(default)]
    pub is_fade_out: Option<bool>,
    #[serde(default)]
    pub needs_dashed_border: Option<bool>,
    #[serde(default)]
    pub connectors: Vec<Connector>,
    #[serde(default)]
    pub node_attachments: Vec<NodeAttachment>,
}

impl Node {
    pub fn kind(&self) -> RasterResult<RenderableKind> {
        RenderableKind::from_tag(&self.renderable_class)
    }

    pub fn disease(&self) -> bool {
        self.is_disease.unwrap_or(false)
    }

    pub fn crossed(&self) -> bool {
        self.is_crossed.unwrap_or(false)
    }

    pub fn fade_out(&self) -> bool {
        self.is_fade_out.unwrap_or(false)
    }

    pub fn dashed(&self) -> bool {
        self.needs_dashed_border.unwrap_or(false)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionPart {
    pub id: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: i64,
    #[serde(default)]
    pub reactome_id: Option<i64>,
    #[serde(default)]
    pub display_name: String,
    pub renderable_class: String,
    #[serde(default)]
    pub reaction_type: Option<String>,
    pub position: Coordinate,
    #[serde(default)]
    pub segments: Vec<Segment>,
    #[serde(default)]
    pub reaction_shape: Option<ShapeDef>,
    #[serde(default)]
    pub end_shape: Option<ShapeDef>,
    #[serde(default)]
    pub is_disease: Option<bool>,
    #[serde(default)]
    pub is_fade_out: Option<bool>,
    #[serde(default)]
    pub inputs: Vec<ReactionPart>,
    #[serde(default)]
    pub outputs: Vec<ReactionPart>,
    #[serde(default)]
    pub catalysts: Vec<ReactionPart>,
    #[serde(default)]
    pub activators: Vec<ReactionPart>,
    #[serde(default)]
    pub inhibitors: Vec<ReactionPart>,
}

impl Edge {
    pub fn kind(&self) -> RasterResult<RenderableKind> {
        RenderableKind::from_tag(&self.renderable_class)
    }

    pub fn disease(&self) -> bool {
        self.is_disease.unwrap_or(false)
    }

    pub fn fade_out(&self) -> bool {
        self.is_fade_out.unwrap_or(false)
    }

    /// Ids of every diagram node taking part in this reaction.
    pub fn participants(&self) -> impl Iterator<Item = i64> + '_ {
        self.inputs
            .iter()
            .chain(&self.outputs)
            .chain(&self.catalysts)
            .chain(&self.activators)
            .chain(&self.inhibitors)
            .map(|p| p.id)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: i64,
    #[serde(default)]
    pub reactome_id: Option<i64>,
    pub renderable_class: String,
    #[serde(default)]
    pub segments: Vec<Segment>,
    #[serde(default)]
    pub end_shape: Option<ShapeDef>,
    #[serde(default)]
    pub is_fade_out: Option<bool>,
}

impl Link {
    pub fn kind(&self) -> RasterResult<RenderableKind> {
        RenderableKind::from_tag(&self.renderable_class)
    }

    pub fn fade_out(&self) -> bool {
        self.is_fade_out.unwrap_or(false)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Compartment {
    pub id: i64,
    #[serde(default)]
    pub reactome_id: Option<i64>,
    #[serde(default)]
    pub display_name: String,
    pub renderable_class: String,
    pub prop: NodeProperties,
    #[serde(default)]
    pub text_position: Option<Coordinate>,
    #[serde(default)]
    pub insets: Option<NodeProperties>,
    #[serde(default)]
    pub is_fade_out: Option<bool>,
}

impl Compartment {
    pub fn kind(&self) -> RasterResult<RenderableKind> {
        RenderableKind::from_tag(&self.renderable_class)
    }

    pub fn fade_out(&self) -> bool {
        self.is_fade_out.unwrap_or(false)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: i64,
    #[serde(default)]
    pub display_name: String,
    pub renderable_class: String,
    pub prop: NodeProperties,
    #[serde(default)]
    pub text_position: Option<Coordinate>,
    #[serde(default)]
    pub is_fade_out: Option<bool>,
}

impl Note {
    pub fn kind(&self) -> RasterResult<RenderableKind> {
        RenderableKind::from_tag(&self.renderable_class)
    }

    pub fn fade_out(&self) -> bool {
        self.is_fade_out.unwrap_or(false)
    }
}

/// Static diagram layout. Coordinates are supplied upstream and never recomputed here.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagram {
    #[serde(default)]
    pub db_id: Option<i64>,
    pub stable_id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub compartments: Vec<Compartment>,
    #[serde(default)]
    pub notes: Vec<Note>,
}

/// Borrowed view over any diagram object, used for kind-polymorphic rendering.
#[derive(Clone, Copy, Debug)]
pub enum DiagramObject<'a> {
    Node(&'a Node),
    Edge(&'a Edge),
    Link(&'a Link),
    Compartment(&'a Compartment),
    Note(&'a Note),
}

impl DiagramObject<'_> {
    pub fn id(&self) -> i64 {
        match self {
            Self::Node(n) => n.id,
            Self::Edge(e) => e.id,
            Self::Link(l) => l.id,
            Self::Compartment(c) => c.id,
            Self::Note(n) => n.id,
        }
    }

    pub fn kind(&self) -> RasterResult<RenderableKind> {
        match self {
            Self::Node(n) => n.kind(),
            Self::Edge(e) => e.kind(),
            Self::Link(l) => l.kind(),
            Self::Compartment(c) => c.kind(),
            Self::Note(n) => n.kind(),
        }
    }

    fn role(&self) -> KindRole {
        match self {
            Self::Node(_) => KindRole::Node,
            Self::Edge(_) => KindRole::Edge,
            Self::Link(_) => KindRole::Link,
            Self::Compartment(_) => KindRole::Compartment,
            Self::Note(_) => KindRole::Note,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Self::Node(n) => &n.display_name,
            Self::Edge(e) => &e.display_name,
            Self::Link(_) => "",
            Self::Compartment(c) => &c.display_name,
            Self::Note(n) => &n.display_name,
        }
    }

    /// Box of boxed objects; `None` for line-like objects.
    pub fn prop(&self) -> Option<NodeProperties> {
        match self {
            Self::Node(n) => Some(n.prop),
            Self::Compartment(c) => Some(c.prop),
            Self::Note(n) => Some(n.prop),
            Self::Edge(_) | Self::Link(_) => None,
        }
    }

    pub fn segments(&self) -> &[Segment] {
        match self {
            Self::Edge(e) => &e.segments,
            Self::Link(l) => &l.segments,
            _ => &[],
        }
    }
}

impl Diagram {
    /// Every object in paint-family order: compartments, links, nodes, notes, edges.
    pub fn objects(&self) -> impl Iterator<Item = DiagramObject<'_>> {
        self.compartments
            .iter()
            .map(DiagramObject::Compartment)
            .chain(self.links.iter().map(DiagramObject::Link))
            .chain(self.nodes.iter().map(DiagramObject::Node))
            .chain(self.notes.iter().map(DiagramObject::Note))
            .chain(self.edges.iter().map(DiagramObject::Edge))
    }

    /// Structural checks performed once before any rendering work.
    ///
    /// Geometry and duplicate ids are `MalformedInput`; an unrecognized kind tag is
    /// `UnknownKind`; a known tag in the wrong collection is `MalformedInput`.
    pub fn validate(&self) -> RasterResult<()> {
        let mut node_ids = HashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if !node_ids.insert(node.id) {
                return Err(RasterError::malformed_input(format!(
                    "duplicate node id {} in diagram {}",
                    node.id, self.stable_id
                )));
            }
        }

        for object in self.objects() {
            let kind = object.kind()?;
            if kind.role() != object.role() {
                return Err(RasterError::malformed_input(format!(
                    "object {} has kind {kind} which does not belong to {:?} objects",
                    object.id(),
                    object.role()
                )));
            }
            if let Some(prop) = object.prop() {
                prop.validate(&format!("object {}", object.id()))?;
            }
            let segments_ok = object
                .segments()
                .iter()
                .all(|s| s.from.is_finite() && s.to.is_finite());
            if !segments_ok {
                return Err(RasterError::malformed_input(format!(
                    "object {} has non-finite segment coordinates",
                    object.id()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/diagram.rs"]
mod tests;
