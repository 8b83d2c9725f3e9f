use std::collections::VecDeque;

use crate::config::{validate_dims, DEFAULT_DIMS};
use crate::error::MazeError;
use crate::grids::tile::Tile;
use crate::grids::{Coords, Dimensions, Direction, Neighborhood};

/// Fixed size matrix of [`Tile`]s, stored row major. All wall edits go
/// through here so a passage is always open from both sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallGrid {
    dims: Dimensions,

    tiles: Vec<Tile>,

    start: Option<Coords>,
    end: Option<Coords>,
}

impl WallGrid {
    pub fn new() -> Self {
        Self {
            dims: Dimensions {
                rows: DEFAULT_DIMS.0,
                columns: DEFAULT_DIMS.1,
            },
            tiles: vec![Tile::default(); DEFAULT_DIMS.0 * DEFAULT_DIMS.1],
            start: None,
            end: None,
        }
    }

    pub fn with_dims(rows: usize, columns: usize) -> Result<Self, MazeError> {
        validate_dims(rows, columns)?;
        Ok(Self {
            tiles: vec![Tile::default(); rows * columns],
            dims: Dimensions { rows, columns },
            start: None,
            end: None,
        })
    }

    #[inline]
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.dims.columns
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline]
    pub(crate) fn index_of(&self, row: usize, column: usize) -> usize {
        (self.dims.columns * row) + column
    }

    #[inline]
    pub fn contains(&self, row: usize, column: usize) -> bool {
        row < self.dims.rows && column < self.dims.columns
    }

    /// Panics when out of bounds, use [`get`](Self::get) for a checked lookup.
    #[inline]
    pub fn tile(&self, row: usize, column: usize) -> &Tile {
        assert!(
            self.contains(row, column),
            "({}, {}) is outside a {}x{} grid",
            row,
            column,
            self.dims.rows,
            self.dims.columns
        );
        &self.tiles[self.index_of(row, column)]
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&Tile> {
        if self.contains(row, column) {
            Some(&self.tiles[self.index_of(row, column)])
        } else {
            None
        }
    }

    fn tile_mut(&mut self, (row, column): Coords) -> &mut Tile {
        let index = self.index_of(row, column);
        &mut self.tiles[index]
    }

    /// Row major iteration over every tile with its coordinates.
    pub fn tiles(&self) -> impl Iterator<Item = (Coords, &Tile)> + '_ {
        let columns = self.dims.columns;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(index, tile)| ((index / columns, index % columns), tile))
    }

    pub fn start(&self) -> Option<Coords> {
        self.start
    }

    pub fn end(&self) -> Option<Coords> {
        self.end
    }

    pub fn neighbors(&self, row: usize, column: usize) -> Neighborhood {
        let mut neighbors = Neighborhood::new();

        neighbors.north = if row > 0 {
            Some((row - 1, column))
        } else {
            None
        };

        neighbors.south = if row + 1 < self.dims.rows {
            Some((row + 1, column))
        } else {
            None
        };

        neighbors.west = if column > 0 {
            Some((row, column - 1))
        } else {
            None
        };

        neighbors.east = if column + 1 < self.dims.columns {
            Some((row, column + 1))
        } else {
            None
        };

        neighbors
    }

    /// Neighbors reachable through a cleared wall.
    pub fn open_neighbors(&self, row: usize, column: usize) -> impl Iterator<Item = Coords> + '_ {
        let tile = *self.tile(row, column);
        self.neighbors(row, column)
            .filter(move |(_, dir)| !tile.has_wall(*dir))
            .map(|(coords, _)| coords)
    }

    pub fn is_boundary(&self, row: usize, column: usize) -> bool {
        let horizontal_edge = row == 0 || row == self.dims.rows - 1;
        let vertical_edge = column == 0 || column == self.dims.columns - 1;
        horizontal_edge || vertical_edge
    }

    /// Opens a single wall facing off the grid. Left beats right beats top
    /// beats bottom, so a corner only loses one wall. Returns the side that
    /// was opened, `None` for interior tiles.
    pub fn hide_boundary_wall(&mut self, row: usize, column: usize) -> Option<Direction> {
        let direction = if column == 0 {
            Direction::West
        } else if column == self.dims.columns - 1 {
            Direction::East
        } else if row == 0 {
            Direction::North
        } else if row == self.dims.rows - 1 {
            Direction::South
        } else {
            return None;
        };

        self.tile_mut((row, column)).connect(direction);
        Some(direction)
    }

    /// Number of cleared walls on this tile that face off the grid.
    pub fn outward_openings(&self, row: usize, column: usize) -> usize {
        let tile = self.tile(row, column);
        let neighbors = self.neighbors(row, column);
        Direction::ALL
            .iter()
            .filter(|dir| neighbors.get(**dir).is_none() && !tile.has_wall(**dir))
            .count()
    }

    /// Clears the wall pair between two adjacent tiles and returns the
    /// direction from `one` to `two`.
    ///
    /// Panics when the tiles are not exactly one cardinal step apart, that
    /// can only come from broken bookkeeping in the caller.
    pub fn carve(&mut self, one: Coords, two: Coords) -> Direction {
        assert!(
            self.contains(one.0, one.1) && self.contains(two.0, two.1),
            "carve outside the grid: {:?} -> {:?}",
            one,
            two
        );
        let direction = match Direction::between(one, two) {
            Some(direction) => direction,
            None => panic!("carve between non-adjacent tiles {:?} and {:?}", one, two),
        };

        self.tile_mut(one).connect(direction);
        self.tile_mut(two).connect(-direction);

        direction
    }

    pub(crate) fn mark_start(&mut self, row: usize, column: usize) {
        assert!(self.start.is_none(), "entrance already placed");
        self.tile_mut((row, column)).set_start();
        self.start = Some((row, column));
    }

    pub(crate) fn mark_end(&mut self, row: usize, column: usize) {
        assert!(self.end.is_none(), "exit already placed");
        self.tile_mut((row, column)).set_end();
        self.end = Some((row, column));
    }

    /// Every open wall pair between two tiles, each reported once
    /// (towards south or east).
    pub fn passages(&self) -> impl Iterator<Item = (Coords, Coords)> + '_ {
        self.tiles().flat_map(move |((row, column), tile)| {
            let south = if row + 1 < self.dims.rows && !tile.bottom_wall() {
                Some(((row, column), (row + 1, column)))
            } else {
                None
            };
            let east = if column + 1 < self.dims.columns && !tile.right_wall() {
                Some(((row, column), (row, column + 1)))
            } else {
                None
            };
            south.into_iter().chain(east)
        })
    }

    pub fn passage_count(&self) -> usize {
        self.passages().count()
    }

    /// True when no wall was ever cleared and no role was placed.
    pub fn is_blank(&self) -> bool {
        self.start.is_none()
            && self.end.is_none()
            && self.tiles.iter().all(|tile| *tile == Tile::default())
    }

    /// True when the passages connect every tile with no cycle.
    pub fn is_spanning_tree(&self) -> bool {
        if self.passage_count() + 1 != self.len() {
            return false;
        }

        // n - 1 edges plus connected means acyclic
        let mut seen = vec![false; self.len()];
        let mut open = VecDeque::new();
        seen[0] = true;
        open.push_back((0, 0));
        let mut reached = 1;

        while let Some((row, column)) = open.pop_front() {
            for (n_row, n_col) in self.open_neighbors(row, column) {
                let index = self.index_of(n_row, n_col);
                if !seen[index] {
                    seen[index] = true;
                    reached += 1;
                    open.push_back((n_row, n_col));
                }
            }
        }

        reached == self.len()
    }
}

impl Default for WallGrid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test_wall_grid {
    use super::*;

    #[test]
    fn new_grid_is_closed() {
        let grid = WallGrid::with_dims(3, 4).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.columns(), 4);
        assert_eq!(grid.len(), 12);
        assert!(grid.tiles().all(|(_, tile)| *tile == Tile::default()));
        assert_eq!(grid.passage_count(), 0);
        assert_eq!(grid.start(), None);
        assert_eq!(grid.end(), None);

        let default = WallGrid::new();
        assert_eq!((default.rows(), default.columns()), (40, 40));
    }

    #[test]
    fn rejects_empty_dims() {
        assert_eq!(
            WallGrid::with_dims(0, 3),
            Err(MazeError::EmptyGrid { rows: 0, cols: 3 })
        );
        assert!(WallGrid::with_dims(1, 1).is_ok());
    }

    #[test]
    fn rejects_dims_that_overflow() {
        assert_eq!(
            WallGrid::with_dims(usize::MAX, 2),
            Err(MazeError::TooLarge {
                rows: usize::MAX,
                cols: 2
            })
        );
        assert!(matches!(
            WallGrid::with_dims(2, usize::MAX / 2),
            Err(MazeError::TooLarge { .. })
        ));
    }

    #[test]
    fn blank_until_touched() {
        let mut grid = WallGrid::with_dims(3, 3).unwrap();
        assert!(grid.is_blank());
        grid.hide_boundary_wall(2, 1);
        assert!(!grid.is_blank());

        let mut grid = WallGrid::with_dims(3, 3).unwrap();
        grid.carve((0, 0), (0, 1));
        assert!(!grid.is_blank());

        let mut grid = WallGrid::with_dims(3, 3).unwrap();
        grid.mark_end(1, 2);
        assert!(!grid.is_blank());
    }

    #[test]
    fn tiles_are_row_major() {
        let grid = WallGrid::with_dims(2, 3).unwrap();
        let coords: Vec<Coords> = grid.tiles().map(|(coords, _)| coords).collect();
        assert_eq!(coords, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
        assert!(grid.get(2, 0).is_none());
        assert!(grid.get(1, 2).is_some());
    }

    #[test]
    fn neighbors_stay_in_bounds() {
        let grid = WallGrid::with_dims(3, 3).unwrap();

        let corner: Vec<Coords> = grid.neighbors(0, 0).map(|(c, _)| c).collect();
        assert_eq!(corner, vec![(1, 0), (0, 1)]);

        let center: Vec<Coords> = grid.neighbors(1, 1).map(|(c, _)| c).collect();
        assert_eq!(center, vec![(0, 1), (2, 1), (1, 0), (1, 2)]);

        let bottom_right: Vec<Coords> = grid.neighbors(2, 2).map(|(c, _)| c).collect();
        assert_eq!(bottom_right, vec![(1, 2), (2, 1)]);

        let single = WallGrid::with_dims(1, 1).unwrap();
        assert_eq!(single.neighbors(0, 0).count(), 0);
    }

    #[test]
    fn boundary_detection() {
        let grid = WallGrid::with_dims(4, 5).unwrap();
        assert!(grid.is_boundary(0, 2));
        assert!(grid.is_boundary(3, 2));
        assert!(grid.is_boundary(2, 0));
        assert!(grid.is_boundary(2, 4));
        assert!(!grid.is_boundary(1, 1));
        assert!(!grid.is_boundary(2, 3));
    }

    #[test]
    fn hide_boundary_wall_priority_on_corners() {
        let mut grid = WallGrid::with_dims(5, 5).unwrap();

        assert_eq!(grid.hide_boundary_wall(0, 0), Some(Direction::West));
        assert_eq!(grid.hide_boundary_wall(4, 0), Some(Direction::West));
        assert_eq!(grid.hide_boundary_wall(0, 4), Some(Direction::East));
        assert_eq!(grid.hide_boundary_wall(4, 4), Some(Direction::East));

        for &(row, col) in &[(0, 0), (4, 0), (0, 4), (4, 4)] {
            assert_eq!(grid.tile(row, col).wall_count(), 3);
            assert_eq!(grid.outward_openings(row, col), 1);
        }
        assert!(!grid.tile(0, 0).left_wall());
        assert!(!grid.tile(0, 4).right_wall());
    }

    #[test]
    fn hide_boundary_wall_on_edges() {
        let mut grid = WallGrid::with_dims(5, 5).unwrap();
        assert_eq!(grid.hide_boundary_wall(0, 2), Some(Direction::North));
        assert_eq!(grid.hide_boundary_wall(4, 2), Some(Direction::South));
        assert_eq!(grid.hide_boundary_wall(2, 2), None);

        assert!(!grid.tile(0, 2).top_wall());
        assert!(!grid.tile(4, 2).bottom_wall());
        assert_eq!(grid.tile(2, 2).wall_count(), 4);
    }

    #[test]
    fn carve_clears_both_sides() {
        let mut grid = WallGrid::with_dims(3, 3).unwrap();

        assert_eq!(grid.carve((0, 1), (1, 1)), Direction::South);
        assert!(!grid.tile(0, 1).bottom_wall());
        assert!(!grid.tile(1, 1).top_wall());

        assert_eq!(grid.carve((1, 1), (1, 0)), Direction::West);
        assert!(!grid.tile(1, 1).left_wall());
        assert!(!grid.tile(1, 0).right_wall());

        assert_eq!(grid.passage_count(), 2);
        let mut open: Vec<Coords> = grid.open_neighbors(1, 1).collect();
        open.sort();
        assert_eq!(open, vec![(0, 1), (1, 0)]);

        // open walls stay open
        grid.carve((1, 0), (1, 1));
        assert_eq!(grid.passage_count(), 2);
    }

    #[test]
    #[should_panic(expected = "non-adjacent")]
    fn carve_rejects_diagonals() {
        let mut grid = WallGrid::with_dims(3, 3).unwrap();
        grid.carve((0, 0), (1, 1));
    }

    #[test]
    #[should_panic(expected = "non-adjacent")]
    fn carve_rejects_same_tile() {
        let mut grid = WallGrid::with_dims(3, 3).unwrap();
        grid.carve((1, 1), (1, 1));
    }

    #[test]
    fn spanning_tree_detection() {
        let mut grid = WallGrid::with_dims(2, 2).unwrap();
        grid.carve((0, 0), (0, 1));
        grid.carve((0, 1), (1, 1));
        assert!(!grid.is_spanning_tree());

        grid.carve((1, 1), (1, 0));
        assert!(grid.is_spanning_tree());

        grid.carve((1, 0), (0, 0));
        assert_eq!(grid.passage_count(), 4);
        assert!(!grid.is_spanning_tree());
    }

    #[test]
    fn roles_are_tracked() {
        let mut grid = WallGrid::with_dims(2, 2).unwrap();
        grid.mark_start(0, 0);
        grid.mark_end(1, 1);
        assert_eq!(grid.start(), Some((0, 0)));
        assert_eq!(grid.end(), Some((1, 1)));
        assert!(grid.tile(0, 0).is_start());
        assert!(grid.tile(1, 1).is_end());
    }
}
