use crate::grids::Direction;

/// One cell of the maze: four walls plus the entrance/exit markers.
///
/// Walls are only ever cleared through [`WallGrid`](crate::grids::wall_grid::WallGrid),
/// which keeps the shared wall of two neighbors in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    top_wall: bool,
    bottom_wall: bool,
    left_wall: bool,
    right_wall: bool,

    is_start: bool,
    is_end: bool,
}

impl Default for Tile {
    fn default() -> Self {
        Self {
            top_wall: true,
            bottom_wall: true,
            left_wall: true,
            right_wall: true,
            is_start: false,
            is_end: false,
        }
    }
}

impl Tile {
    pub fn top_wall(&self) -> bool {
        self.top_wall
    }

    pub fn bottom_wall(&self) -> bool {
        self.bottom_wall
    }

    pub fn left_wall(&self) -> bool {
        self.left_wall
    }

    pub fn right_wall(&self) -> bool {
        self.right_wall
    }

    pub fn is_start(&self) -> bool {
        self.is_start
    }

    pub fn is_end(&self) -> bool {
        self.is_end
    }

    pub fn has_wall(&self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.top_wall,
            Direction::South => self.bottom_wall,
            Direction::West => self.left_wall,
            Direction::East => self.right_wall,
        }
    }

    pub fn wall_count(&self) -> usize {
        Direction::ALL
            .iter()
            .filter(|dir| self.has_wall(**dir))
            .count()
    }

    /// Clears the wall on one side. No check on the neighbor, the grid does that.
    pub(crate) fn connect(&mut self, direction: Direction) {
        match direction {
            Direction::North => self.top_wall = false,
            Direction::South => self.bottom_wall = false,
            Direction::West => self.left_wall = false,
            Direction::East => self.right_wall = false,
        }
    }

    pub(crate) fn set_start(&mut self) {
        assert!(!self.is_start, "tile is already the entrance");
        self.is_start = true;
    }

    pub(crate) fn set_end(&mut self) {
        assert!(!self.is_end, "tile is already the exit");
        self.is_end = true;
    }
}
