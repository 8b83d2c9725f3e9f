use rand::prelude::*;
use rand::rngs::StdRng;

/// Every random decision a generator makes goes through here, so a seeded
/// source replays the same maze.
pub trait RandomSource {
    /// Uniform index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Coin flip between the near (first row/column) and far (last) edge.
    fn pick_far_edge(&mut self) -> bool;
}

/// [`RandomSource`] backed by any `rand` generator.
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        self.rng.gen_range(0, len)
    }

    fn pick_far_edge(&mut self) -> bool {
        self.rng.gen_range(0, 2) == 1
    }
}

pub fn source_for(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(RngSource::seeded(seed)),
        None => Box::new(RngSource::from_entropy()),
    }
}
