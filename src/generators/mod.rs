pub mod exit_walk;
pub mod random;

use crate::grids::wall_grid::WallGrid;

/// A maze generator that advances one unit of work per call, so the caller
/// can draw every intermediate grid.
pub trait Generator {
    /// Does one step, returns whether more steps remain.
    fn step_generation(&mut self) -> bool;
    fn grid(&self) -> &WallGrid;
    fn is_done(&self) -> bool;

    fn next_step(&mut self) -> &WallGrid {
        self.step_generation();
        self.grid()
    }

    fn generate_maze(&mut self) -> &WallGrid {
        while self.step_generation() {}
        self.grid()
    }
}
