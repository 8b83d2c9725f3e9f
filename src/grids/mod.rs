pub mod tile;
pub mod wall_grid;

/// (row, column), row 0 is the top of the maze
pub type Coords = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North = 0,
    South = 1,
    West = 2,
    East = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Direction of the single cardinal step from `from` to `to`, if there is one.
    pub fn between(from: Coords, to: Coords) -> Option<Direction> {
        let (row, col) = from;
        match to {
            (r, c) if c == col && r + 1 == row => Some(Direction::North),
            (r, c) if c == col && r == row + 1 => Some(Direction::South),
            (r, c) if r == row && c + 1 == col => Some(Direction::West),
            (r, c) if r == row && c == col + 1 => Some(Direction::East),
            _ => None,
        }
    }
}

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

impl From<usize> for Direction {
    fn from(dir: usize) -> Self {
        match dir {
            0 => Direction::North,
            1 => Direction::South,
            2 => Direction::West,
            3 => Direction::East,
            _ => unreachable!(),
        }
    }
}

pub type Neighbor = (Coords, Direction);

/// In-bounds neighbors of one tile. Iterates north, south, west, east, which
/// keeps random picks reproducible for a fixed seed.
#[derive(Debug, Clone, Copy)]
pub struct Neighborhood {
    pub north: Option<Coords>,
    pub south: Option<Coords>,
    pub west: Option<Coords>,
    pub east: Option<Coords>,

    counter: usize,
}

impl Neighborhood {
    pub fn new() -> Self {
        Self {
            north: None,
            south: None,
            west: None,
            east: None,
            counter: 0,
        }
    }

    pub fn get(&self, direction: Direction) -> Option<Coords> {
        match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::West => self.west,
            Direction::East => self.east,
        }
    }
}

impl Default for Neighborhood {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Neighborhood {
    type Item = Neighbor;

    fn next(&mut self) -> Option<Self::Item> {
        while self.counter < Direction::ALL.len() {
            let direction = Direction::from(self.counter);
            self.counter += 1;
            if let Some(coords) = self.get(direction) {
                return Some((coords, direction));
            }
        }
        None
    }
}
