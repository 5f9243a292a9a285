//! Search configuration, per-search node state, and result types.

use serde::{Deserialize, Serialize};

use crate::core::{GridCoord, WorldPoint};
use crate::grid::NodeId;

/// Transient per-node search state.
///
/// One record per grid cell, allocated fresh for every search so no cost,
/// parent link, or membership flag ever leaks between invocations. Heap
/// slots live inside the open list itself.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeState {
    /// Accumulated cost from the start along the best known route
    pub g_cost: u32,
    /// Heuristic estimate towards the goal, set on discovery
    pub h_cost: u32,
    /// Predecessor on the best known route (non-owning)
    pub parent: Option<NodeId>,
    /// Finalized nodes are never reconsidered
    pub closed: bool,
}

impl NodeState {
    /// State of a cell the search has not touched yet; `g_cost` acts as +∞.
    pub const UNVISITED: NodeState = NodeState {
        g_cost: u32::MAX,
        h_cost: 0,
        parent: None,
        closed: false,
    };
}

/// Search settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum nodes to expand before giving up
    #[serde(default = "defaults::max_expansions")]
    pub max_expansions: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_expansions: defaults::max_expansions(),
        }
    }
}

mod defaults {
    pub fn max_expansions() -> usize {
        100_000
    }
}

/// Reason a search produced no route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathFailure {
    /// Start or goal lies outside the grid
    OutOfBounds,
    /// Start cell is not walkable
    StartBlocked,
    /// Goal cell is not walkable
    GoalBlocked,
    /// Open set exhausted without reaching the goal
    NoRoute,
    /// Expansion limit reached before the goal
    LimitExceeded,
}

/// Result of a path search.
#[derive(Clone, Debug)]
pub struct PathResult {
    /// Direction-change waypoints, start exclusive, goal inclusive.
    /// Empty when the search failed or start and goal share a cell.
    pub waypoints: Vec<WorldPoint>,
    /// Whether a route was found
    pub success: bool,
    /// Full per-cell route including the start cell (empty on failure)
    pub cells: Vec<GridCoord>,
    /// Total route cost under the octile step model plus terrain penalties
    pub cost: u32,
    /// Number of nodes expanded during the search
    pub expanded: usize,
    /// Reason for failure, `None` on success
    pub failure: Option<PathFailure>,
}

impl PathResult {
    /// Create a failed result
    pub(crate) fn failed(failure: PathFailure, expanded: usize) -> Self {
        Self {
            waypoints: Vec::new(),
            success: false,
            cells: Vec::new(),
            cost: 0,
            expanded,
            failure: Some(failure),
        }
    }

    /// Route length in cells
    pub fn length_cells(&self) -> usize {
        self.cells.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unvisited_is_infinite() {
        let state = NodeState::UNVISITED;
        assert_eq!(state.g_cost, u32::MAX);
        assert!(state.parent.is_none());
        assert!(!state.closed);
    }

    #[test]
    fn test_config_default_matches_serde_default() {
        let from_empty: SearchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(from_empty.max_expansions, SearchConfig::default().max_expansions);
    }

    #[test]
    fn test_failed_result_is_empty() {
        let result = PathResult::failed(PathFailure::NoRoute, 17);
        assert!(!result.success);
        assert!(result.waypoints.is_empty());
        assert!(result.cells.is_empty());
        assert_eq!(result.expanded, 17);
        assert_eq!(result.failure, Some(PathFailure::NoRoute));
    }
}
