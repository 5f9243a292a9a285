//! A* planner implementation.

use log::{debug, trace};

use crate::core::WorldPoint;
use crate::grid::{NodeId, PathingGrid};

use super::heap::{OpenList, Priority};
use super::path;
use super::types::{NodeState, PathFailure, PathResult, SearchConfig};

/// A* path planner over a borrowed grid.
pub struct PathPlanner<'a, G: PathingGrid> {
    grid: &'a G,
    config: SearchConfig,
}

impl<'a, G: PathingGrid> PathPlanner<'a, G> {
    /// Create a new planner
    pub fn new(grid: &'a G, config: SearchConfig) -> Self {
        Self { grid, config }
    }

    /// Create with default configuration
    pub fn with_defaults(grid: &'a G) -> Self {
        Self::new(grid, SearchConfig::default())
    }

    /// Find a route between two world positions.
    ///
    /// Unreachable or blocked endpoints are the expected negative outcome,
    /// reported through `success`/`failure`, never as a panic.
    pub fn find_path(&self, start: WorldPoint, goal: WorldPoint) -> PathResult {
        trace!(
            "[AStar] find_path: start=({:.2},{:.2}) goal=({:.2},{:.2})",
            start.x, start.y, goal.x, goal.y
        );

        let (Some(start_node), Some(goal_node)) =
            (self.grid.node_at(start), self.grid.node_at(goal))
        else {
            debug!("[AStar] FAILED: OutOfBounds - start or goal outside grid");
            return PathResult::failed(PathFailure::OutOfBounds, 0);
        };

        self.find_path_nodes(start_node, goal_node)
    }

    /// Find a route between two already-resolved nodes.
    pub fn find_path_nodes(&self, start: NodeId, goal: NodeId) -> PathResult {
        if !self.grid.is_walkable(start) {
            debug!("[AStar] FAILED: StartBlocked at node {}", start);
            return PathResult::failed(PathFailure::StartBlocked, 0);
        }
        if !self.grid.is_walkable(goal) {
            debug!("[AStar] FAILED: GoalBlocked at node {}", goal);
            return PathResult::failed(PathFailure::GoalBlocked, 0);
        }

        // Zero-length route: the agent already stands on the goal cell.
        if start == goal {
            trace!("[AStar] start and goal share a cell, empty route");
            return PathResult {
                waypoints: Vec::new(),
                success: true,
                cells: vec![self.grid.coord(start)],
                cost: 0,
                expanded: 0,
                failure: None,
            };
        }

        let goal_coord = self.grid.coord(goal);
        let mut states = vec![NodeState::UNVISITED; self.grid.node_count()];
        let mut open = OpenList::with_capacity(self.grid.node_count());

        let start_h = self.grid.coord(start).octile_distance(&goal_coord);
        states[start] = NodeState {
            g_cost: 0,
            h_cost: start_h,
            parent: None,
            closed: false,
        };
        open.push(
            start,
            Priority {
                f_cost: start_h,
                h_cost: start_h,
            },
        );

        let mut expanded = 0;

        while let Some((current, _)) = open.pop() {
            states[current].closed = true;

            if current == goal {
                return self.finish(&states, start, goal, expanded);
            }

            expanded += 1;
            if expanded > self.config.max_expansions {
                debug!(
                    "[AStar] FAILED: LimitExceeded after {} expansions",
                    expanded
                );
                return PathResult::failed(PathFailure::LimitExceeded, expanded);
            }

            let current_g = states[current].g_cost;
            let current_coord = self.grid.coord(current);

            for neighbor in self.grid.neighbors(current) {
                if !self.grid.is_walkable(neighbor) || states[neighbor].closed {
                    continue;
                }

                let neighbor_coord = self.grid.coord(neighbor);
                let step = current_coord.octile_distance(&neighbor_coord);
                let tentative = current_g + step + self.grid.movement_penalty(neighbor);

                let queued = open.contains(neighbor);
                if tentative < states[neighbor].g_cost || !queued {
                    let h_cost = neighbor_coord.octile_distance(&goal_coord);
                    states[neighbor] = NodeState {
                        g_cost: tentative,
                        h_cost,
                        parent: Some(current),
                        closed: false,
                    };

                    let priority = Priority {
                        f_cost: tentative + h_cost,
                        h_cost,
                    };
                    if queued {
                        open.decrease(neighbor, priority);
                    } else {
                        open.push(neighbor, priority);
                    }
                }
            }
        }

        debug!("[AStar] FAILED: NoRoute after {} expansions", expanded);
        PathResult::failed(PathFailure::NoRoute, expanded)
    }

    /// Retrace and simplify after the goal was popped from the open set.
    fn finish(
        &self,
        states: &[NodeState],
        start: NodeId,
        goal: NodeId,
        expanded: usize,
    ) -> PathResult {
        let route = path::retrace(states, start, goal);
        let waypoints = path::simplify(self.grid, start, &route);

        // A raw route with no usable waypoints is reported as a failure,
        // not as a successful empty route.
        if waypoints.is_empty() {
            debug!("[AStar] FAILED: route simplified to zero waypoints");
            return PathResult::failed(PathFailure::NoRoute, expanded);
        }

        let cells = std::iter::once(self.grid.coord(start))
            .chain(route.iter().map(|&node| self.grid.coord(node)))
            .collect();
        let cost = states[goal].g_cost;

        trace!(
            "[AStar] SUCCESS: {} cells, {} waypoints, cost={}, expanded={}",
            route.len() + 1,
            waypoints.len(),
            cost,
            expanded
        );

        PathResult {
            waypoints,
            success: true,
            cells,
            cost,
            expanded,
            failure: None,
        }
    }
}
