use crate::error::MazeError;
use crate::grids::tile::Tile;

pub const DEFAULT_DIMS: (usize, usize) = (40, 40);
pub const DEFAULT_MIN_PATH_LENGTH: usize = 20;

/// Everything a generator needs to know before the first step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub rows: usize,
    pub cols: usize,
    /// number of tiles the walk must process before it may place the exit
    pub min_path_length: usize,
    /// `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_DIMS.0,
            cols: DEFAULT_DIMS.1,
            min_path_length: DEFAULT_MIN_PATH_LENGTH,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn with_dims(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    pub fn min_path_length(mut self, min_path_length: usize) -> Self {
        self.min_path_length = min_path_length;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), MazeError> {
        validate_generation(self.rows, self.cols, self.min_path_length)
    }
}

/// Checks the dimensions and returns the tile count.
pub(crate) fn validate_dims(rows: usize, cols: usize) -> Result<usize, MazeError> {
    if rows == 0 || cols == 0 {
        return Err(MazeError::EmptyGrid { rows, cols });
    }
    // the tile vector itself must stay under isize::MAX bytes
    rows.checked_mul(cols)
        .filter(|tiles| {
            tiles
                .checked_mul(std::mem::size_of::<Tile>())
                .map_or(false, |bytes| bytes <= isize::MAX as usize)
        })
        .ok_or(MazeError::TooLarge { rows, cols })
}

pub(crate) fn validate_generation(
    rows: usize,
    cols: usize,
    min_path_length: usize,
) -> Result<(), MazeError> {
    if validate_dims(rows, cols)? < 2 {
        return Err(MazeError::TooSmall { rows, cols });
    }
    if min_path_length == 0 {
        return Err(MazeError::ZeroPathLength);
    }
    Ok(())
}
