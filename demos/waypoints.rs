//! Plans a route through a small room with a doorway and prints the
//! simplified waypoints an agent would steer by.
//!
//! Run with: `cargo run --example waypoints`

use marga::{GridCoord, GridMap, PathPlanner, SearchConfig, WorldPoint};

fn main() {
    // 12x8 room at 0.5 m resolution with an interior wall and a doorway.
    let mut map = GridMap::new(12, 8, 0.5, WorldPoint::ZERO);
    for y in 0..8 {
        if y != 5 {
            map.set_walkable(GridCoord::new(6, y), false);
        }
    }
    // Rough ground in front of the doorway.
    map.set_penalty(GridCoord::new(5, 5), 20);
    map.set_penalty(GridCoord::new(7, 5), 20);

    let planner = PathPlanner::new(&map, SearchConfig::default());
    let start = map.grid_to_world(GridCoord::new(1, 1));
    let goal = map.grid_to_world(GridCoord::new(10, 2));

    let result = planner.find_path(start, goal);
    if !result.success {
        println!("no route: {:?}", result.failure);
        return;
    }

    println!(
        "route: {} cells, cost {}, {} nodes expanded",
        result.length_cells(),
        result.cost,
        result.expanded
    );
    for (i, waypoint) in result.waypoints.iter().enumerate() {
        println!("  waypoint {}: ({:.2}, {:.2})", i + 1, waypoint.x, waypoint.y);
    }
}
