use std::collections::VecDeque;

use log::{debug, info, trace};

use crate::config::{validate_generation, GeneratorConfig};
use crate::error::MazeError;
use crate::generators::random::{source_for, RandomSource};
use crate::generators::Generator;
use crate::grids::wall_grid::WallGrid;
use crate::grids::Coords;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    /// Continuation of the current branch, its passage is already carved.
    Next(Coords),
    /// Side branch found from `from`, carved only if still unvisited when popped.
    Branch { at: Coords, from: Coords },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkState {
    Walking,
    Exhausted,
}

/// Depth first biased walk that opens an entrance on the left or right edge
/// and places the exit on the first boundary tile it processes once
/// `min_path_length` tiles have gone by.
///
/// The frontier is a deque: the chosen neighbor goes to the front so the
/// current branch continues, the other unvisited neighbors go to the back
/// and become side branches once the exit exists. `path_length` counts
/// processed tiles, not the distance between entrance and exit, so the final
/// entrance to exit path can be shorter than `min_path_length`.
pub struct ExitWalk {
    grid: WallGrid,
    rng: Box<dyn RandomSource>,
    min_path_length: usize,

    frontier: VecDeque<Pending>,
    visited: Vec<bool>,
    visited_count: usize,
    start: Coords,

    reached_end: bool,
    path_length: usize,
    steps: usize,
    state: WalkState,
}

impl ExitWalk {
    pub fn new(config: &GeneratorConfig) -> Result<Self, MazeError> {
        config.validate()?;
        let grid = WallGrid::with_dims(config.rows, config.cols)?;
        Self::with_source(grid, config.min_path_length, source_for(config.seed))
    }

    /// Takes ownership of a blank grid and places the entrance.
    pub fn with_source(
        mut grid: WallGrid,
        min_path_length: usize,
        mut rng: Box<dyn RandomSource>,
    ) -> Result<Self, MazeError> {
        validate_generation(grid.rows(), grid.columns(), min_path_length)?;
        if !grid.is_blank() {
            return Err(MazeError::GridNotBlank);
        }

        let start_col = if rng.pick_far_edge() {
            grid.columns() - 1
        } else {
            0
        };
        let start_row = rng.pick_index(grid.rows());
        let start = (start_row, start_col);

        grid.mark_start(start_row, start_col);
        let opened = grid.hide_boundary_wall(start_row, start_col);
        debug!("entrance at {:?}, open towards {:?}", start, opened);

        let mut frontier = VecDeque::new();
        frontier.push_back(Pending::Next(start));

        Ok(Self {
            visited: vec![false; grid.len()],
            grid,
            rng,
            min_path_length,
            frontier,
            visited_count: 0,
            start,
            reached_end: false,
            path_length: 1,
            steps: 0,
            state: WalkState::Walking,
        })
    }

    /// Pops and processes one frontier entry. Returns false once the frontier
    /// is empty, and keeps returning false without touching the grid after.
    pub fn step(&mut self) -> bool {
        if self.state == WalkState::Exhausted {
            return false;
        }

        let pending = match self.frontier.pop_front() {
            Some(pending) => pending,
            None => {
                self.finish();
                return false;
            }
        };
        self.steps += 1;

        let current = match pending {
            Pending::Next(at) => at,
            Pending::Branch { at, from } => {
                self.grid.carve(from, at);
                at
            }
        };
        trace!(
            "step {}: {:?} (path length {}, frontier {})",
            self.steps,
            current,
            self.path_length,
            self.frontier.len()
        );
        self.visit(current);

        let (row, col) = current;
        if !self.reached_end
            && current != self.start
            && self.grid.is_boundary(row, col)
            && self.path_length >= self.min_path_length
        {
            self.place_exit(current);
        } else {
            self.advance_from(current);
        }

        if !self.reached_end {
            self.path_length += 1;
        }

        self.drop_stale();
        if self.frontier.is_empty() {
            self.finish();
            false
        } else {
            true
        }
    }

    fn visit(&mut self, (row, col): Coords) {
        let index = self.grid.index_of(row, col);
        if !self.visited[index] {
            self.visited[index] = true;
            self.visited_count += 1;
        }
    }

    fn is_visited(&self, (row, col): Coords) -> bool {
        self.visited[self.grid.index_of(row, col)]
    }

    fn unvisited_neighbors(&self, (row, col): Coords) -> Vec<Coords> {
        self.grid
            .neighbors(row, col)
            .map(|(coords, _)| coords)
            .filter(|coords| !self.is_visited(*coords))
            .collect()
    }

    fn place_exit(&mut self, current: Coords) {
        let (row, col) = current;
        self.grid.mark_end(row, col);
        let opened = self.grid.hide_boundary_wall(row, col);
        self.reached_end = true;
        debug!(
            "exit at {:?}, open towards {:?}, after {} tiles",
            current, opened, self.path_length
        );

        // no passage from the exit now, but anything only reachable through
        // it still has to be reached later
        for at in self.unvisited_neighbors(current) {
            self.frontier.push_back(Pending::Branch { at, from: current });
        }
    }

    fn advance_from(&mut self, current: Coords) {
        let (row, col) = current;
        let unvisited = self.unvisited_neighbors(current);

        let chosen = if !unvisited.is_empty() {
            unvisited[self.rng.pick_index(unvisited.len())]
        } else if !self.reached_end {
            // dead end before the exit: back up along an existing passage
            let open: Vec<Coords> = self.grid.open_neighbors(row, col).collect();
            debug_assert!(!open.is_empty(), "no passage to back up through at {:?}", current);
            let back = open[self.rng.pick_index(open.len())];
            debug!("dead end at {:?}, backing up to {:?}", current, back);
            back
        } else {
            trace!("abandoning {:?}", current);
            return;
        };

        self.grid.carve(current, chosen);
        self.frontier.push_front(Pending::Next(chosen));
        for at in unvisited.into_iter().filter(|at| *at != chosen) {
            self.frontier.push_back(Pending::Branch { at, from: current });
        }
    }

    /// Discards side branches at the front whose tile was reached another way.
    fn drop_stale(&mut self) {
        while let Some(&Pending::Branch { at, .. }) = self.frontier.front() {
            if !self.is_visited(at) {
                break;
            }
            self.frontier.pop_front();
        }
    }

    fn finish(&mut self) {
        if self.state != WalkState::Exhausted {
            self.state = WalkState::Exhausted;
            info!(
                "maze of {}x{} finished in {} steps, exit after {} tiles",
                self.grid.rows(),
                self.grid.columns(),
                self.steps,
                self.path_length
            );
        }
    }

    pub fn state(&self) -> WalkState {
        self.state
    }

    pub fn min_path_length(&self) -> usize {
        self.min_path_length
    }

    pub fn path_length(&self) -> usize {
        self.path_length
    }

    pub fn reached_end(&self) -> bool {
        self.reached_end
    }

    pub fn visited_count(&self) -> usize {
        self.visited_count
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn into_grid(self) -> WallGrid {
        self.grid
    }
}

impl Generator for ExitWalk {
    fn step_generation(&mut self) -> bool {
        self.step()
    }

    fn grid(&self) -> &WallGrid {
        &self.grid
    }

    fn is_done(&self) -> bool {
        self.state == WalkState::Exhausted
    }
}
