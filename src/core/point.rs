//! Point and coordinate types shared by the grid and the planner.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Grid coordinates (integer cell indices)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// X coordinate (column index)
    pub x: i32,
    /// Y coordinate (row index)
    pub y: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Get the 8 neighbors (including diagonals)
    #[inline]
    pub fn neighbors_8(&self) -> [GridCoord; 8] {
        [
            GridCoord::new(self.x, self.y + 1),     // N
            GridCoord::new(self.x + 1, self.y + 1), // NE
            GridCoord::new(self.x + 1, self.y),     // E
            GridCoord::new(self.x + 1, self.y - 1), // SE
            GridCoord::new(self.x, self.y - 1),     // S
            GridCoord::new(self.x - 1, self.y - 1), // SW
            GridCoord::new(self.x - 1, self.y),     // W
            GridCoord::new(self.x - 1, self.y + 1), // NW
        ]
    }

    /// Discrete step direction towards another coordinate: each component
    /// is the sign of the delta, so adjacent cells map to one of the 8
    /// unit directions.
    #[inline]
    pub fn direction_to(&self, other: &GridCoord) -> GridCoord {
        GridCoord::new((other.x - self.x).signum(), (other.y - self.y).signum())
    }

    /// Octile distance to another coordinate, scaled to integers:
    /// orthogonal steps cost 10, diagonal steps cost 14 (10·√2 rounded).
    ///
    /// This is both the per-step edge cost between adjacent cells and the
    /// admissible heuristic towards a goal cell.
    #[inline]
    pub fn octile_distance(&self, other: &GridCoord) -> u32 {
        let dx = (self.x - other.x).unsigned_abs();
        let dy = (self.y - other.y).unsigned_abs();
        let (min, max) = if dx < dy { (dx, dy) } else { (dy, dx) };
        14 * min + 10 * (max - min)
    }
}

impl Add for GridCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GridCoord::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for GridCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridCoord::new(self.x - other.x, self.y - other.y)
    }
}

/// World coordinates (meters, f32)
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPoint {
    /// X coordinate in meters
    pub x: f32,
    /// Y coordinate in meters
    pub y: f32,
}

impl WorldPoint {
    /// Create a new world point
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Zero point (origin)
    pub const ZERO: WorldPoint = WorldPoint { x: 0.0, y: 0.0 };

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &WorldPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Add for WorldPoint {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        WorldPoint::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for WorldPoint {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        WorldPoint::new(self.x - other.x, self.y - other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_8() {
        let c = GridCoord::new(2, 2);
        let n = c.neighbors_8();
        assert_eq!(n.len(), 8);
        for nb in n {
            assert!((nb.x - c.x).abs() <= 1 && (nb.y - c.y).abs() <= 1);
            assert_ne!(nb, c);
        }
    }

    #[test]
    fn test_direction_to_signum() {
        let a = GridCoord::new(3, 3);
        assert_eq!(a.direction_to(&GridCoord::new(7, 3)), GridCoord::new(1, 0));
        assert_eq!(a.direction_to(&GridCoord::new(0, 0)), GridCoord::new(-1, -1));
        assert_eq!(a.direction_to(&GridCoord::new(3, 3)), GridCoord::new(0, 0));
    }

    #[test]
    fn test_octile_distance() {
        let a = GridCoord::new(0, 0);
        // Pure orthogonal run
        assert_eq!(a.octile_distance(&GridCoord::new(5, 0)), 50);
        // Pure diagonal run
        assert_eq!(a.octile_distance(&GridCoord::new(4, 4)), 56);
        // Mixed: 3 diagonal + 2 orthogonal
        assert_eq!(a.octile_distance(&GridCoord::new(5, 3)), 3 * 14 + 2 * 10);
        // Symmetric
        let b = GridCoord::new(-2, 7);
        assert_eq!(a.octile_distance(&b), b.octile_distance(&a));
    }

    #[test]
    fn test_world_point_distance() {
        let a = WorldPoint::new(0.0, 0.0);
        let b = WorldPoint::new(3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-6);
    }
}
