pub mod engine;
pub mod types;

pub use self::types::ScoreDetails;
use crate::config::ScoringWeights;
use crate::core_types::{Difficulty, GridSize};
use crate::error::{BfResult, BoardForgeError};

/// Balance scorer for one grid shape. Width and height are always explicit,
/// so rectangular boards score the same way square ones do.
#[derive(Debug, Clone)]
pub struct Scorer {
    pub width: usize,
    pub height: usize,
    pub weights: ScoringWeights,
}

impl Scorer {
    pub fn new(grid: GridSize, weights: ScoringWeights) -> Self {
        Self {
            width: grid.width,
            height: grid.height,
            weights,
        }
    }

    #[inline(always)]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Fast score for the search loop. `seq` must hold exactly
    /// `width * height` values.
    #[inline(always)]
    pub fn score(&self, seq: &[Difficulty]) -> f32 {
        engine::score_full(self, seq)
    }

    pub fn score_details(&self, seq: &[Difficulty]) -> ScoreDetails {
        engine::score_details(self, seq)
    }

    /// Length-checked scoring for layouts that come from outside the search.
    pub fn try_score(&self, seq: &[Difficulty]) -> BfResult<ScoreDetails> {
        if seq.len() != self.cell_count() {
            return Err(BoardForgeError::LayoutMismatch {
                expected: self.cell_count(),
                actual: seq.len(),
            });
        }
        Ok(self.score_details(seq))
    }

    #[inline(always)]
    pub fn idx(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }
}
