//! # Marga: Grid A* Path Planning
//!
//! A small path-planning library for agent movement on discretized 2D
//! grids. Routes are found with A* over an 8-connected grid and returned
//! as a minimal sequence of directional waypoints an agent can steer by.
//!
//! ## Quick Start
//!
//! ```rust
//! use marga::{find_path, GridCoord, GridMap, WorldPoint};
//!
//! let mut map = GridMap::new(10, 10, 1.0, WorldPoint::ZERO);
//! map.set_walkable(GridCoord::new(5, 5), false);
//!
//! let result = find_path(&map, WorldPoint::new(0.5, 0.5), WorldPoint::new(9.5, 9.5));
//! if result.success {
//!     println!("route with {} waypoints, cost {}", result.waypoints.len(), result.cost);
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: fundamental value types ([`GridCoord`], [`WorldPoint`])
//! - [`grid`]: the terrain surface: the [`PathingGrid`] capability trait
//!   consumed by the planner, and [`GridMap`], the bundled rectangular
//!   implementation with per-cell walkability and terrain penalties
//! - [`search`]: the engine: open list, planner, waypoint simplification
//!
//! The planner is a pure function of (grid, start, goal, config): all
//! search state lives in per-call scratch storage, so concurrent searches
//! over one shared grid need no serialization.
//!
//! ## Cost Model
//!
//! Distances are integer-scaled octile: orthogonal steps cost 10, diagonal
//! steps 14. The same metric is the heuristic, which never overestimates
//! the true remaining cost while terrain penalties are non-negative, so
//! returned routes are optimal under the model.

pub mod core;
pub mod error;
pub mod grid;
pub mod search;

pub use crate::core::{GridCoord, WorldPoint};
pub use error::GridError;
pub use grid::{GridMap, NodeId, PathingGrid};
pub use search::{
    find_path, route_exists, PathFailure, PathPlanner, PathResult, SearchConfig,
};
