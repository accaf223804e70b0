//! # Flowchart Editor
//!
//! Client-side state and geometry layer for an interactive flowchart editor.
//! Tracks nodes, connections, selection, drag state, grid settings, and
//! canvas pan/zoom, and provides the geometric helpers the UI needs to drive
//! those stores (grid snapping, distances, connection anchor points,
//! hit-testing) plus JSON export.
//!
//! ## Features
//! - Observable stores with synchronous, ordered subscriber notification
//! - Node and connection editing with cascade delete
//! - Single and additive multi-node selection
//! - Grid snapping and bounding-box hit-testing
//! - Pretty-printed JSON export of the document
//!
//! Rendering, event wiring, and file download mechanics are deliberately not
//! part of this crate; a UI layer subscribes to the stores and paints from
//! the published snapshots.
//!
//! ## Example
//!
//! ```
//! use flowchart_editor::{
//!     generate_id, snap_to_grid, EditorStores, FlowchartNode, NodeType, Position,
//! };
//!
//! let mut stores = EditorStores::new();
//!
//! let grid = stores.grid.get();
//! let position = snap_to_grid(Position::new(53.0, 22.0), grid);
//! stores.add_node(FlowchartNode::new(generate_id(), NodeType::Process, position, "Start"));
//!
//! assert_eq!(stores.flowchart.get().nodes[0].position, Position::new(60.0, 20.0));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod constants;
mod export;
mod geometry;
mod id;
mod store;
mod types;

pub use constants::*;
pub use export::export_to_json;
pub use geometry::{connection_points, distance, is_point_in_node, snap_to_grid, ConnectionPoints};
pub use id::generate_id;
pub use store::{EditorStores, Store, SubscriberId};
pub use types::*;
