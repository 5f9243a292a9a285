//! Rectangular grid map implementation.

use crate::core::{GridCoord, WorldPoint};
use crate::error::GridError;

use super::{NodeId, PathingGrid};

/// Bounded rectangular grid with per-cell walkability and terrain penalty.
///
/// The grid uses a coordinate system where:
/// - (0, 0) is at `origin` in world coordinates
/// - Positive X is to the right, positive Y is up
/// - Cell (x, y) covers the square from `origin + (x, y) * resolution` to
///   `origin + (x + 1, y + 1) * resolution`
#[derive(Clone, Debug)]
pub struct GridMap {
    /// Grid width in cells
    width: usize,
    /// Grid height in cells
    height: usize,
    /// Resolution in meters per cell
    resolution: f32,
    /// World coordinates of the lower-left corner of cell (0, 0)
    origin: WorldPoint,
    /// Per-cell obstacle flags, row-major
    walkable: Vec<bool>,
    /// Per-cell terrain penalties, row-major
    penalties: Vec<u32>,
}

impl GridMap {
    /// Create a fully walkable, zero-penalty grid.
    pub fn new(width: usize, height: usize, resolution: f32, origin: WorldPoint) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            resolution,
            origin,
            walkable: vec![true; size],
            penalties: vec![0; size],
        }
    }

    /// Create a grid centered at the world origin.
    pub fn centered(width: usize, height: usize, resolution: f32) -> Self {
        let half_width = (width as f32 * resolution) / 2.0;
        let half_height = (height as f32 * resolution) / 2.0;
        let origin = WorldPoint::new(-half_width, -half_height);
        Self::new(width, height, resolution, origin)
    }

    /// Create a grid from pre-built row-major cell buffers.
    ///
    /// Buffer lengths must match `width * height`.
    pub fn with_cells(
        width: usize,
        height: usize,
        resolution: f32,
        origin: WorldPoint,
        walkable: Vec<bool>,
        penalties: Vec<u32>,
    ) -> Result<Self, GridError> {
        let expected = width * height;
        if expected == 0 {
            return Err(GridError::EmptyGrid { width, height });
        }
        if walkable.len() != expected {
            return Err(GridError::WalkableSizeMismatch {
                width,
                height,
                expected,
                got: walkable.len(),
            });
        }
        if penalties.len() != expected {
            return Err(GridError::PenaltySizeMismatch {
                width,
                height,
                expected,
                got: penalties.len(),
            });
        }
        Ok(Self {
            width,
            height,
            resolution,
            origin,
            walkable,
            penalties,
        })
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Resolution in meters per cell
    #[inline]
    pub fn resolution(&self) -> f32 {
        self.resolution
    }

    /// World coordinates of the grid origin
    #[inline]
    pub fn origin(&self) -> WorldPoint {
        self.origin
    }

    /// Mark a cell walkable or blocked. Out-of-bounds coordinates are ignored.
    pub fn set_walkable(&mut self, coord: GridCoord, walkable: bool) {
        if let Some(index) = self.coord_to_index(coord) {
            self.walkable[index] = walkable;
        }
    }

    /// Set the terrain penalty of a cell. Out-of-bounds coordinates are ignored.
    pub fn set_penalty(&mut self, coord: GridCoord, penalty: u32) {
        if let Some(index) = self.coord_to_index(coord) {
            self.penalties[index] = penalty;
        }
    }

    /// Convert a world position to the grid cell containing it.
    ///
    /// The result may lie outside the grid; pair with [`Self::is_valid_coord`]
    /// or use [`PathingGrid::node_at`] for a checked lookup.
    pub fn world_to_grid(&self, point: WorldPoint) -> GridCoord {
        let x = ((point.x - self.origin.x) / self.resolution).floor() as i32;
        let y = ((point.y - self.origin.y) / self.resolution).floor() as i32;
        GridCoord::new(x, y)
    }

    /// World position of a cell center.
    pub fn grid_to_world(&self, coord: GridCoord) -> WorldPoint {
        WorldPoint::new(
            self.origin.x + (coord.x as f32 + 0.5) * self.resolution,
            self.origin.y + (coord.y as f32 + 0.5) * self.resolution,
        )
    }

    /// Whether a coordinate lies inside the grid bounds.
    #[inline]
    pub fn is_valid_coord(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// Row-major index of a coordinate, or `None` when out of bounds.
    #[inline]
    pub fn coord_to_index(&self, coord: GridCoord) -> Option<usize> {
        if self.is_valid_coord(coord) {
            Some(coord.y as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }

    /// Coordinate of a row-major index.
    #[inline]
    pub fn index_to_coord(&self, index: usize) -> GridCoord {
        GridCoord::new((index % self.width) as i32, (index / self.width) as i32)
    }
}

impl PathingGrid for GridMap {
    #[inline]
    fn node_count(&self) -> usize {
        self.width * self.height
    }

    fn node_at(&self, point: WorldPoint) -> Option<NodeId> {
        self.coord_to_index(self.world_to_grid(point))
    }

    fn neighbors(&self, node: NodeId) -> Vec<NodeId> {
        self.index_to_coord(node)
            .neighbors_8()
            .iter()
            .filter_map(|c| self.coord_to_index(*c))
            .collect()
    }

    #[inline]
    fn is_walkable(&self, node: NodeId) -> bool {
        self.walkable[node]
    }

    #[inline]
    fn movement_penalty(&self, node: NodeId) -> u32 {
        self.penalties[node]
    }

    #[inline]
    fn coord(&self, node: NodeId) -> GridCoord {
        self.index_to_coord(node)
    }

    #[inline]
    fn world_position(&self, node: NodeId) -> WorldPoint {
        self.grid_to_world(self.index_to_coord(node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_index_roundtrip() {
        let map = GridMap::new(7, 5, 0.5, WorldPoint::ZERO);
        for index in 0..map.node_count() {
            let coord = map.index_to_coord(index);
            assert_eq!(map.coord_to_index(coord), Some(index));
        }
    }

    #[test]
    fn test_world_grid_conversion() {
        let map = GridMap::new(10, 10, 1.0, WorldPoint::ZERO);
        assert_eq!(map.world_to_grid(WorldPoint::new(3.2, 7.9)), GridCoord::new(3, 7));

        // Cell centers convert back to the same cell
        let center = map.grid_to_world(GridCoord::new(4, 4));
        assert_eq!(center, WorldPoint::new(4.5, 4.5));
        assert_eq!(map.world_to_grid(center), GridCoord::new(4, 4));
    }

    #[test]
    fn test_centered_origin() {
        let map = GridMap::centered(10, 10, 0.1);
        assert_eq!(map.origin(), WorldPoint::new(-0.5, -0.5));
        assert_eq!(map.node_at(WorldPoint::ZERO), Some(5 * 10 + 5));
    }

    #[test]
    fn test_node_at_out_of_bounds() {
        let map = GridMap::new(4, 4, 1.0, WorldPoint::ZERO);
        assert_eq!(map.node_at(WorldPoint::new(-0.1, 2.0)), None);
        assert_eq!(map.node_at(WorldPoint::new(2.0, 4.1)), None);
        assert!(map.node_at(WorldPoint::new(3.9, 3.9)).is_some());
    }

    #[test]
    fn test_neighbors_clipped_at_border() {
        let map = GridMap::new(4, 4, 1.0, WorldPoint::ZERO);
        let corner = map.coord_to_index(GridCoord::new(0, 0)).unwrap();
        assert_eq!(map.neighbors(corner).len(), 3);

        let interior = map.coord_to_index(GridCoord::new(2, 2)).unwrap();
        assert_eq!(map.neighbors(interior).len(), 8);
    }

    #[test]
    fn test_with_cells_rejects_bad_sizes() {
        let err = GridMap::with_cells(3, 3, 1.0, WorldPoint::ZERO, vec![true; 8], vec![0; 9]);
        assert!(matches!(err, Err(GridError::WalkableSizeMismatch { expected: 9, got: 8, .. })));

        let err = GridMap::with_cells(3, 3, 1.0, WorldPoint::ZERO, vec![true; 9], vec![0; 2]);
        assert!(matches!(err, Err(GridError::PenaltySizeMismatch { .. })));

        let err = GridMap::with_cells(0, 3, 1.0, WorldPoint::ZERO, vec![], vec![]);
        assert!(matches!(err, Err(GridError::EmptyGrid { .. })));
    }

    #[test]
    fn test_walkable_and_penalty_flags() {
        let mut map = GridMap::new(4, 4, 1.0, WorldPoint::ZERO);
        map.set_walkable(GridCoord::new(1, 2), false);
        map.set_penalty(GridCoord::new(2, 1), 30);

        let blocked = map.coord_to_index(GridCoord::new(1, 2)).unwrap();
        let heavy = map.coord_to_index(GridCoord::new(2, 1)).unwrap();
        assert!(!map.is_walkable(blocked));
        assert_eq!(map.movement_penalty(heavy), 30);

        // Out-of-bounds writes are ignored
        map.set_walkable(GridCoord::new(-1, 0), false);
        map.set_penalty(GridCoord::new(9, 9), 5);
    }
}
