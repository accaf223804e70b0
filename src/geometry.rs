//! Pure geometry helpers for canvas interactions.
//!
//! Grid snapping, distances, connection anchor points, and hit-testing. All
//! functions here are total over their inputs and free of side effects; the
//! stores never call them, callers compute geometry first and then mutate.

use crate::types::{FlowchartNode, GridSettings, Position};

/// The two anchor points of a connection, as computed by
/// [`connection_points`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectionPoints {
    /// Exit point on the source node
    pub from: Position,
    /// Entry point on the destination node
    pub to: Position,
}

/// Snaps a position to the nearest grid intersection.
///
/// Returns the position unchanged when the grid is disabled; otherwise each
/// coordinate is rounded to the nearest multiple of `grid.size` (halves round
/// away from zero). Snapping an already-snapped position is a no-op.
pub fn snap_to_grid(position: Position, grid: GridSettings) -> Position {
    if !grid.enabled {
        return position;
    }

    Position {
        x: (position.x / grid.size).round() * grid.size,
        y: (position.y / grid.size).round() * grid.size,
    }
}

/// Euclidean distance between two points.
pub fn distance(p1: Position, p2: Position) -> f32 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    (dx * dx + dy * dy).sqrt()
}

/// Computes the anchor points for a connection between two nodes.
///
/// Connections always exit the source node at its right-edge midpoint and
/// enter the destination node at its left-edge midpoint, regardless of where
/// the nodes sit relative to each other. Adapting the anchors to node layout
/// is a known limitation, not a bug.
pub fn connection_points(from_node: &FlowchartNode, to_node: &FlowchartNode) -> ConnectionPoints {
    ConnectionPoints {
        from: Position {
            x: from_node.position.x + from_node.size.width,
            y: from_node.position.y + from_node.size.height / 2.0,
        },
        to: Position {
            x: to_node.position.x,
            y: to_node.position.y + to_node.size.height / 2.0,
        },
    }
}

/// Tests whether a point lies inside a node's bounding box.
///
/// The test is inclusive: points exactly on the box edges count as inside.
pub fn is_point_in_node(point: Position, node: &FlowchartNode) -> bool {
    point.x >= node.position.x
        && point.x <= node.position.x + node.size.width
        && point.y >= node.position.y
        && point.y <= node.position.y + node.size.height
}
