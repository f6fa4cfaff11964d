pub mod pool;
pub mod retainer;
pub mod runner;

pub use self::pool::build_pool;
pub use self::retainer::TopK;
pub use self::runner::{
    NoProgress, OptimizationOptions, OptimizationResult, Optimizer, ProgressCallback, StopFlag,
};

use crate::core_types::Difficulty;
use serde::{Deserialize, Serialize};

/// One trial arrangement of difficulty labels and its balance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub sequence: Vec<Difficulty>,
    pub score: f32,
}
