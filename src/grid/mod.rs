//! Grid collaborator surface.
//!
//! The planner never owns terrain data. It consumes a read-only capability
//! surface ([`PathingGrid`]) that resolves world positions to node ids and
//! reports per-cell walkability and terrain penalty. [`GridMap`] is the
//! bundled implementation: a bounded rectangle of cells with a uniform
//! resolution.

mod map;

pub use map::GridMap;

use crate::core::{GridCoord, WorldPoint};

/// Identifier of one grid cell, dense in `0..node_count()`.
///
/// Ids size the planner's open list and scratch arena, so implementations
/// must keep them below `node_count()`.
pub type NodeId = usize;

/// Read-only grid capabilities consumed by the planner.
pub trait PathingGrid {
    /// Upper bound on node ids (total cell count).
    fn node_count(&self) -> usize;

    /// Resolve a world position to the node covering it, or `None` when the
    /// position falls outside the grid.
    fn node_at(&self, point: WorldPoint) -> Option<NodeId>;

    /// Adjacent nodes, up to 8 for a square grid. Walkability is not
    /// filtered here; the planner skips blocked neighbors itself.
    fn neighbors(&self, node: NodeId) -> Vec<NodeId>;

    /// Whether an agent may occupy this cell.
    fn is_walkable(&self, node: NodeId) -> bool;

    /// Terrain cost added when entering this cell, `>= 0`.
    fn movement_penalty(&self, node: NodeId) -> u32;

    /// Integer cell coordinates of a node.
    fn coord(&self, node: NodeId) -> GridCoord;

    /// World position of the cell center, used for output waypoints.
    fn world_position(&self, node: NodeId) -> WorldPoint;
}
