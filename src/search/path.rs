//! Route reconstruction and waypoint simplification.
//!
//! After the search reaches the goal, the parent chain is retraced into a
//! start→goal cell sequence, then collapsed to the points where the route
//! changes direction. Agents steer towards waypoints, so colinear runs of
//! cells carry no information for them.

use crate::core::{GridCoord, WorldPoint};
use crate::grid::{NodeId, PathingGrid};

use super::types::NodeState;

/// Walk parent links from `goal` back to `start` and return the route in
/// start→goal order. The start cell itself is not part of the route.
///
/// # Panics
/// Panics if the parent chain does not lead back to `start`; the search
/// only retraces after reaching the goal, so a broken chain is a logic
/// defect.
pub(crate) fn retrace(states: &[NodeState], start: NodeId, goal: NodeId) -> Vec<NodeId> {
    let mut route = Vec::new();
    let mut current = goal;

    while current != start {
        route.push(current);
        current = states[current]
            .parent
            .expect("parent chain broken before reaching the start");
    }
    route.reverse();
    route
}

/// Collapse a cell route into direction-change waypoints.
///
/// Walks the route with the start cell as the implicit predecessor; each
/// step's discrete direction is compared with the previous step's, and
/// every turn emits the corner cell's world position. The goal is always
/// emitted last, so a straight route yields exactly one waypoint.
pub(crate) fn simplify<G: PathingGrid>(
    grid: &G,
    start: NodeId,
    route: &[NodeId],
) -> Vec<WorldPoint> {
    let Some(&goal) = route.last() else {
        return Vec::new();
    };

    let mut waypoints = Vec::new();
    let mut prev = start;
    let mut prev_dir: Option<GridCoord> = None;

    for &node in route {
        let dir = grid.coord(prev).direction_to(&grid.coord(node));
        if let Some(last_dir) = prev_dir {
            if dir != last_dir {
                waypoints.push(grid.world_position(prev));
            }
        }
        prev_dir = Some(dir);
        prev = node;
    }

    waypoints.push(grid.world_position(goal));
    waypoints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridMap;

    fn map_5x5() -> GridMap {
        GridMap::new(5, 5, 1.0, WorldPoint::ZERO)
    }

    fn node(map: &GridMap, x: i32, y: i32) -> NodeId {
        map.coord_to_index(GridCoord::new(x, y)).unwrap()
    }

    #[test]
    fn test_retrace_reverses_parent_chain() {
        let map = map_5x5();
        let mut states = vec![NodeState::UNVISITED; 25];

        let a = node(&map, 0, 0);
        let b = node(&map, 1, 1);
        let c = node(&map, 2, 2);
        states[b].parent = Some(a);
        states[c].parent = Some(b);

        assert_eq!(retrace(&states, a, c), vec![b, c]);
    }

    #[test]
    fn test_retrace_same_node_is_empty() {
        let map = map_5x5();
        let states = vec![NodeState::UNVISITED; 25];
        let a = node(&map, 3, 3);
        assert!(retrace(&states, a, a).is_empty());
    }

    #[test]
    fn test_simplify_straight_run_emits_goal_only() {
        let map = map_5x5();
        let route = vec![node(&map, 1, 1), node(&map, 2, 2), node(&map, 3, 3)];

        let waypoints = simplify(&map, node(&map, 0, 0), &route);
        assert_eq!(waypoints, vec![map.grid_to_world(GridCoord::new(3, 3))]);
    }

    #[test]
    fn test_simplify_emits_corner_and_goal() {
        let map = map_5x5();
        // East, east, then north, north: one turn at (2, 0).
        let route = vec![
            node(&map, 1, 0),
            node(&map, 2, 0),
            node(&map, 2, 1),
            node(&map, 2, 2),
        ];

        let waypoints = simplify(&map, node(&map, 0, 0), &route);
        assert_eq!(
            waypoints,
            vec![
                map.grid_to_world(GridCoord::new(2, 0)),
                map.grid_to_world(GridCoord::new(2, 2)),
            ]
        );
    }

    #[test]
    fn test_simplify_single_step_route() {
        let map = map_5x5();
        let route = vec![node(&map, 1, 0)];

        let waypoints = simplify(&map, node(&map, 0, 0), &route);
        assert_eq!(waypoints, vec![map.grid_to_world(GridCoord::new(1, 0))]);
    }

    #[test]
    fn test_simplify_empty_route() {
        let map = map_5x5();
        assert!(simplify(&map, node(&map, 0, 0), &[]).is_empty());
    }

    #[test]
    fn test_simplify_zigzag_emits_every_corner() {
        let map = map_5x5();
        // E, N, E, N staircase: corners at every direction change.
        let route = vec![
            node(&map, 1, 0),
            node(&map, 1, 1),
            node(&map, 2, 1),
            node(&map, 2, 2),
        ];

        let waypoints = simplify(&map, node(&map, 0, 0), &route);
        assert_eq!(
            waypoints,
            vec![
                map.grid_to_world(GridCoord::new(1, 0)),
                map.grid_to_world(GridCoord::new(1, 1)),
                map.grid_to_world(GridCoord::new(2, 1)),
                map.grid_to_world(GridCoord::new(2, 2)),
            ]
        );
    }
}
