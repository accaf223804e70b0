//! Shared application-wide constants.
//! Centralizes tweakable defaults used by the data model and the stores.

/// Default grid cell size in world units.
pub const GRID_SIZE: f32 = 20.0;

/// Default node width in world units.
pub const NODE_WIDTH: f32 = 100.0;
/// Default node height in world units.
pub const NODE_HEIGHT: f32 = 60.0;

/// Default canvas zoom factor (1.0 = normal).
pub const DEFAULT_ZOOM: f32 = 1.0;
