pub mod batch;
pub mod generate;
pub mod score;

use boardforge::optimizer::ProgressCallback;
use fastrand::Rng;
use tracing::debug;

/// Logs search progress at debug level, every `every` trials.
pub struct CliLogger {
    pub every: usize,
}

impl ProgressCallback for CliLogger {
    fn on_progress(&self, trial: usize, best_score: f32, retained: usize) -> bool {
        if trial > 0 && trial % self.every.max(1) == 0 {
            debug!(
                "Trial {:7} | Best: {:.4} | Retained: {}",
                trial, best_score, retained
            );
        }
        true
    }
}

pub fn make_rng(seed: Option<u64>) -> Rng {
    match seed {
        Some(s) => Rng::with_seed(s),
        None => Rng::new(),
    }
}
