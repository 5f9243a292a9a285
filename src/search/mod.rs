//! A* search engine.
//!
//! Implements informed search over a [`PathingGrid`](crate::grid::PathingGrid):
//!
//! - **Open list**: indexed binary min-heap with O(log n) priority decrease
//! - **Cost model**: integer octile distance (orthogonal 10, diagonal 14)
//!   plus per-cell terrain penalties, used for both edge costs and the
//!   heuristic
//! - **Waypoints**: routes collapse to direction-change points
//!
//! ```rust
//! use marga::{find_path, GridMap, WorldPoint};
//!
//! let map = GridMap::new(10, 10, 1.0, WorldPoint::ZERO);
//! let result = find_path(&map, WorldPoint::new(0.5, 0.5), WorldPoint::new(9.5, 9.5));
//! assert!(result.success);
//! ```

mod heap;
mod path;
mod planner;
mod types;

pub use heap::{OpenList, Priority};
pub use planner::PathPlanner;
pub use types::{PathFailure, PathResult, SearchConfig};

use crate::core::WorldPoint;
use crate::grid::PathingGrid;

/// Quick path finding with default configuration
pub fn find_path<G: PathingGrid>(grid: &G, start: WorldPoint, goal: WorldPoint) -> PathResult {
    PathPlanner::with_defaults(grid).find_path(start, goal)
}

/// Check whether any route exists between two positions
pub fn route_exists<G: PathingGrid>(grid: &G, start: WorldPoint, goal: WorldPoint) -> bool {
    find_path(grid, start, goal).success
}
