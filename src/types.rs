//! Core data types for the flowchart editor.
//!
//! This module defines the data model shared by the stores and the geometry
//! helpers: positions, node and connection records, the flowchart document,
//! and the transient UI state documents (drag, grid, canvas).

use crate::constants::{DEFAULT_ZOOM, GRID_SIZE, NODE_HEIGHT, NODE_WIDTH};
use serde::{Deserialize, Serialize};

/// Unique identifier for flowchart nodes and connections.
///
/// Ids are opaque strings; see [`crate::id::generate_id`] for the generator
/// used by the editor. Uniqueness across a document is a caller obligation,
/// not something the store enforces.
pub type ElementId = String;

/// A point in world coordinates.
///
/// Used for node origins, connection endpoints, pan offsets, and drag offsets.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate in world units
    pub x: f32,
    /// Vertical coordinate in world units
    pub y: f32,
}

impl Position {
    /// Creates a position from x/y coordinates.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Width and height of a node's bounding box, in world units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeSize {
    /// Box width, non-negative
    pub width: f32,
    /// Box height, non-negative
    pub height: f32,
}

impl NodeSize {
    /// Creates a size from width/height.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for NodeSize {
    fn default() -> Self {
        Self {
            width: NODE_WIDTH,
            height: NODE_HEIGHT,
        }
    }
}

/// The kind of flowchart box a node renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    /// A processing step (rectangle)
    Process,
    /// A branching decision (diamond)
    Decision,
    /// An input step (parallelogram)
    Input,
    /// An output step (parallelogram)
    Output,
}

/// A single node in the flowchart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowchartNode {
    /// Unique identifier for this node
    pub id: ElementId,
    /// The visual kind of this node
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// Top-left corner of the node's bounding box
    pub position: Position,
    /// Bounding box dimensions
    pub size: NodeSize,
    /// Label text displayed inside the node
    pub text: String,
    /// Whether the node is currently part of the selection
    pub selected: bool,
}

impl FlowchartNode {
    /// Creates a new unselected node with the default size.
    ///
    /// # Arguments
    ///
    /// * `id` - Pre-generated unique id (see [`crate::id::generate_id`])
    /// * `node_type` - The visual kind of the node
    /// * `position` - Top-left corner in world coordinates
    /// * `text` - Label text
    pub fn new(
        id: impl Into<ElementId>,
        node_type: NodeType,
        position: Position,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            node_type,
            position,
            size: NodeSize::default(),
            text: text.into(),
            selected: false,
        }
    }
}

/// A directed link between two nodes' anchor points.
///
/// `from_node_id`/`to_node_id` should reference nodes present in the same
/// document; the store does not validate this (dangling references are the
/// caller's problem until the referenced node is added or the connection is
/// removed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    /// Unique identifier for this connection
    pub id: ElementId,
    /// Id of the source node
    pub from_node_id: ElementId,
    /// Id of the destination node
    pub to_node_id: ElementId,
    /// Anchor point on the source node
    pub from_point: Position,
    /// Anchor point on the destination node
    pub to_point: Position,
}

impl Connection {
    /// Creates a new connection between two nodes with explicit anchor points.
    ///
    /// Anchor points are usually computed with
    /// [`crate::geometry::connection_points`].
    pub fn new(
        id: impl Into<ElementId>,
        from_node_id: impl Into<ElementId>,
        to_node_id: impl Into<ElementId>,
        from_point: Position,
        to_point: Position,
    ) -> Self {
        Self {
            id: id.into(),
            from_node_id: from_node_id.into(),
            to_node_id: to_node_id.into(),
            from_point,
            to_point,
        }
    }
}

/// The flowchart document: all nodes and connections.
///
/// Node and connection sequences preserve insertion order; new elements are
/// appended at the end. This is the single authoritative document and the
/// exact shape produced by [`crate::export::export_to_json`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FlowchartData {
    /// All nodes, in insertion order
    pub nodes: Vec<FlowchartNode>,
    /// All connections, in insertion order
    pub connections: Vec<Connection>,
}

impl FlowchartData {
    /// Creates an empty flowchart document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes the document to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a document from JSON produced by [`Self::to_json`].
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Partial update applied to a node by the store's `update_node` operation.
///
/// Every field is optional; `None` leaves the node's existing value in place.
/// Construct with struct-update syntax over [`NodeUpdate::default`].
#[derive(Debug, Clone, Default)]
pub struct NodeUpdate {
    /// Replacement node kind
    pub node_type: Option<NodeType>,
    /// Replacement position
    pub position: Option<Position>,
    /// Replacement size
    pub size: Option<NodeSize>,
    /// Replacement label text
    pub text: Option<String>,
    /// Replacement selection flag
    pub selected: Option<bool>,
}

impl NodeUpdate {
    /// Merges this update over an existing node, field by field.
    pub fn apply(&self, node: &mut FlowchartNode) {
        if let Some(node_type) = self.node_type {
            node.node_type = node_type;
        }
        if let Some(position) = self.position {
            node.position = position;
        }
        if let Some(size) = self.size {
            node.size = size;
        }
        if let Some(text) = &self.text {
            node.text = text.clone();
        }
        if let Some(selected) = self.selected {
            node.selected = selected;
        }
    }
}

/// Transient drag interaction state. Never persisted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragState {
    /// Whether a drag is currently in progress
    pub is_dragging: bool,
    /// Id of the node being dragged, if any
    pub dragged_node_id: Option<ElementId>,
    /// Pointer position where the drag started
    pub start_position: Position,
    /// Offset from the pointer to the dragged node's origin
    pub offset: Position,
}

/// Grid configuration affecting snapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSettings {
    /// Grid cell size in world units, positive
    pub size: f32,
    /// Whether snapping is active
    pub enabled: bool,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            size: GRID_SIZE,
            enabled: true,
        }
    }
}

/// Canvas navigation and selection state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasState {
    /// Current zoom factor (1.0 = normal), positive
    pub zoom: f32,
    /// Current pan offset in world units
    pub pan: Position,
    /// Ids of selected nodes, in selection order.
    ///
    /// Additive selection appends without deduplicating, so the same id can
    /// appear twice if it is selected twice while additive.
    pub selection: Vec<ElementId>,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            pan: Position::default(),
            selection: Vec::new(),
        }
    }
}
