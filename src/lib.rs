//! Step-wise generation of rectangular mazes with one entrance and one exit
//! on the border.
//!
//! ```no_run
//! use maze_walk::{ExitWalk, Generator, GeneratorConfig};
//!
//! let config = GeneratorConfig::with_dims(10, 10).min_path_length(15).seed(7);
//! let mut walk = ExitWalk::new(&config).unwrap();
//! while walk.step() {
//!     // draw walk.grid() here
//! }
//! println!("{}", walk.grid());
//! ```

pub mod config;
pub mod error;
pub mod generators;
pub mod grids;
pub mod renderer;
pub mod solvers;

pub use config::GeneratorConfig;
pub use error::MazeError;
pub use generators::exit_walk::{ExitWalk, WalkState};
pub use generators::random::{RandomSource, RngSource};
pub use generators::Generator;
pub use grids::tile::Tile;
pub use grids::wall_grid::WallGrid;
pub use grids::{Coords, Direction};
pub use solvers::{Solver, SolverKind};
