use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use log::{info, trace};

use crate::error::MazeError;
use crate::grids::wall_grid::WallGrid;
use crate::grids::Coords;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SolverKind {
    DFS,
    BFS,
    AStar,
    /// Walks the maze like a person would: keeps a trail of the current
    /// guess at the solution and retraces it from dead ends.
    Backtracking,
}

/// Open set, shaped by the search kind.
enum Open {
    Stack(Vec<Coords>),
    Queue(VecDeque<Coords>),
    /// (estimated total cost, insertion order, tile), lowest first
    Heap(BinaryHeap<Reverse<(usize, usize, Coords)>>),
    /// backtracking keeps no open set, only its trail
    Trail,
}

/// Searches a finished maze from entrance to exit through open passages,
/// one tile per step.
pub struct Solver<'a> {
    grid: &'a WallGrid,
    kind: SolverKind,
    goal: Coords,

    open: Open,
    inserted: usize,
    came_from: Vec<Option<Coords>>,
    cost: Vec<Option<usize>>,
    explored: Vec<bool>,
    explored_count: usize,

    cursor: Coords,
    backtracking: bool,
    trail: Vec<Coords>,
    on_trail: Vec<bool>,

    path: Option<Vec<Coords>>,
    done: bool,
}

impl<'a> Solver<'a> {
    pub fn new(grid: &'a WallGrid, kind: SolverKind) -> Result<Self, MazeError> {
        let start = grid.start().ok_or(MazeError::MissingStart)?;
        let goal = grid.end().ok_or(MazeError::MissingEnd)?;

        let open = match kind {
            SolverKind::DFS => Open::Stack(Vec::new()),
            SolverKind::BFS => Open::Queue(VecDeque::new()),
            SolverKind::AStar => Open::Heap(BinaryHeap::new()),
            SolverKind::Backtracking => Open::Trail,
        };

        let mut solver = Self {
            grid,
            kind,
            goal,
            open,
            inserted: 0,
            came_from: vec![None; grid.len()],
            cost: vec![None; grid.len()],
            explored: vec![false; grid.len()],
            explored_count: 0,
            cursor: start,
            backtracking: false,
            trail: Vec::new(),
            on_trail: vec![false; grid.len()],
            path: None,
            done: false,
        };
        solver.cost[grid.index_of(start.0, start.1)] = Some(0);
        solver.push(start, 0);
        Ok(solver)
    }

    fn manhattan(&self, (row, col): Coords) -> usize {
        let (goal_row, goal_col) = self.goal;
        (row as isize - goal_row as isize).abs() as usize
            + (col as isize - goal_col as isize).abs() as usize
    }

    fn push(&mut self, coords: Coords, cost: usize) {
        let estimate = cost + self.manhattan(coords);
        let order = self.inserted;
        self.inserted += 1;
        match &mut self.open {
            Open::Stack(stack) => stack.push(coords),
            Open::Queue(queue) => queue.push_back(coords),
            Open::Heap(heap) => heap.push(Reverse((estimate, order, coords))),
            Open::Trail => {}
        }
    }

    fn pop(&mut self) -> Option<Coords> {
        match &mut self.open {
            Open::Stack(stack) => stack.pop(),
            Open::Queue(queue) => queue.pop_front(),
            Open::Heap(heap) => heap.pop().map(|Reverse((_, _, coords))| coords),
            Open::Trail => None,
        }
    }

    /// Expands one tile. Returns whether the search still has work to do.
    pub fn step_search(&mut self) -> bool {
        if self.done {
            return false;
        }
        if self.kind == SolverKind::Backtracking {
            return self.step_backtracking();
        }

        let current = loop {
            match self.pop() {
                Some(coords) if self.explored[self.grid.index_of(coords.0, coords.1)] => continue,
                Some(coords) => break coords,
                None => {
                    info!("{:?} search exhausted without reaching the exit", self.kind);
                    self.done = true;
                    return false;
                }
            }
        };

        let index = self.grid.index_of(current.0, current.1);
        self.explored[index] = true;
        self.explored_count += 1;
        trace!("{:?} explored {:?}", self.kind, current);

        if current == self.goal {
            let path = self.backtrack(current);
            self.found(path);
            return false;
        }

        let current_cost = self.cost[index].unwrap_or(0);
        let grid = self.grid;
        for next in grid.open_neighbors(current.0, current.1) {
            let next_index = grid.index_of(next.0, next.1);
            if self.explored[next_index] {
                continue;
            }
            let next_cost = current_cost + 1;
            let better = match self.cost[next_index] {
                Some(known) => next_cost < known,
                None => true,
            };
            // dfs always follows the latest discovery
            if better || self.kind == SolverKind::DFS {
                self.cost[next_index] = Some(next_cost);
                self.came_from[next_index] = Some(current);
                self.push(next, next_cost);
            }
        }

        true
    }

    /// One move of the backtracking walk: either steps forward onto the first
    /// unexplored open neighbor, or retreats one tile along the trail.
    fn step_backtracking(&mut self) -> bool {
        let current = self.cursor;

        if self.backtracking {
            if self.first_unexplored(current).is_some() {
                self.backtracking = false;
                return true;
            }
            self.trail.pop();
            self.on_trail[self.grid.index_of(current.0, current.1)] = false;
            return match self.trail.last() {
                Some(&prev) => {
                    trace!("retreating from {:?} to {:?}", current, prev);
                    self.cursor = prev;
                    true
                }
                None => {
                    info!("{:?} walked back past the entrance", self.kind);
                    self.done = true;
                    false
                }
            };
        }

        let index = self.grid.index_of(current.0, current.1);
        if !self.explored[index] {
            self.explored[index] = true;
            self.explored_count += 1;
        }
        if self.trail.last() != Some(&current) {
            self.trail.push(current);
            self.on_trail[index] = true;
        }
        trace!("{:?} at {:?}, trail of {}", self.kind, current, self.trail.len());

        if current == self.goal {
            let path = self.trail.clone();
            self.found(path);
            return false;
        }

        match self.first_unexplored(current) {
            Some(next) => self.cursor = next,
            None => self.backtracking = true,
        }
        true
    }

    fn first_unexplored(&self, (row, col): Coords) -> Option<Coords> {
        self.grid
            .open_neighbors(row, col)
            .find(|&(r, c)| !self.explored[self.grid.index_of(r, c)])
    }

    fn found(&mut self, path: Vec<Coords>) {
        info!(
            "{:?} found a path of {} tiles after exploring {}",
            self.kind,
            path.len(),
            self.explored_count
        );
        self.path = Some(path);
        self.done = true;
    }

    fn backtrack(&self, goal: Coords) -> Vec<Coords> {
        let mut path = vec![goal];
        let mut current = goal;
        while let Some(prev) = self.came_from[self.grid.index_of(current.0, current.1)] {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        path
    }

    /// Runs the search to the end, returns the path from entrance to exit.
    pub fn solve(&mut self) -> Option<&[Coords]> {
        while self.step_search() {}
        self.path()
    }

    pub fn path(&self) -> Option<&[Coords]> {
        self.path.as_deref()
    }

    pub fn explored(&self) -> usize {
        self.explored_count
    }

    pub fn is_explored(&self, row: usize, column: usize) -> bool {
        self.explored[self.grid.index_of(row, column)]
    }

    /// Tiles on the backtracking walk's current guess at the solution.
    pub fn trail(&self) -> &[Coords] {
        &self.trail
    }

    pub fn is_on_trail(&self, row: usize, column: usize) -> bool {
        self.on_trail[self.grid.index_of(row, column)]
    }

    pub fn kind(&self) -> SolverKind {
        self.kind
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}
