use anyhow::Context;
use clap::{Parser, ValueEnum};

use maze_walk::config::{DEFAULT_DIMS, DEFAULT_MIN_PATH_LENGTH};
use maze_walk::renderer::render_with_path;
use maze_walk::{ExitWalk, Generator, GeneratorConfig, Solver, SolverKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SolverArg {
    Dfs,
    Bfs,
    Astar,
    Backtracking,
}

impl From<SolverArg> for SolverKind {
    fn from(arg: SolverArg) -> Self {
        match arg {
            SolverArg::Dfs => SolverKind::DFS,
            SolverArg::Bfs => SolverKind::BFS,
            SolverArg::Astar => SolverKind::AStar,
            SolverArg::Backtracking => SolverKind::Backtracking,
        }
    }
}

/// Generate a maze one step at a time and print it
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = DEFAULT_DIMS.0)]
    rows: usize,

    #[arg(long, default_value_t = DEFAULT_DIMS.1)]
    cols: usize,

    /// Tiles the walk has to process before it may place the exit
    #[arg(long, default_value_t = DEFAULT_MIN_PATH_LENGTH)]
    min_path_length: usize,

    /// Random seed, omit for a different maze every run
    #[arg(long)]
    seed: Option<u64>,

    /// Search used to trace the finished maze
    #[arg(long, value_enum, default_value_t = SolverArg::Bfs)]
    solver: SolverArg,

    /// Print the grid after every step
    #[arg(long)]
    frames: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = GeneratorConfig {
        rows: args.rows,
        cols: args.cols,
        min_path_length: args.min_path_length,
        seed: args.seed,
    };
    let mut walk = ExitWalk::new(&config).context("invalid maze configuration")?;

    if args.frames {
        println!("{}", walk.grid());
        while !walk.is_done() {
            println!("{}", walk.next_step());
        }
    } else {
        walk.generate_maze();
    }
    log::info!("generated in {} steps", walk.steps());

    let grid = walk.grid();
    let mut solver = Solver::new(grid, args.solver.into()).context("maze is incomplete")?;
    let path = solver.solve().map(<[_]>::to_vec).unwrap_or_default();

    println!("{}", render_with_path(grid, &path));
    println!(
        "{:?}: path of {} tiles, {} explored, minimum path length {}",
        solver.kind(),
        path.len(),
        solver.explored(),
        walk.min_path_length()
    );

    Ok(())
}
