use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("grid needs at least one row and one column, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("a {rows}x{cols} grid has no room for an exit apart from the entrance")]
    TooSmall { rows: usize, cols: usize },

    #[error("a {rows}x{cols} grid does not fit in memory")]
    TooLarge { rows: usize, cols: usize },

    #[error("maze needs a blank grid, this one already has passages, openings or roles")]
    GridNotBlank,

    #[error("minimum path length must be at least 1")]
    ZeroPathLength,

    #[error("maze has no entrance")]
    MissingStart,

    #[error("maze has no exit")]
    MissingEnd,
}
