use super::{Candidate, TopK};
use crate::config::Config;
use crate::core_types::Difficulty;
use crate::error::{BfResult, BoardForgeError};
use crate::scorer::Scorer;
use fastrand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, trace};

#[derive(Debug, Clone)]
pub struct OptimizationOptions {
    pub trials: usize,
    pub retain: usize,
    pub report_interval: usize,
}

impl From<&Config> for OptimizationOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            trials: cfg.search.trials,
            retain: cfg.search.retain,
            report_interval: cfg.search.report_interval,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OptimizationResult {
    /// Uniform pick among the retained candidates.
    pub selected: Candidate,
    /// Scores of every retained candidate, best first.
    pub retained_scores: Vec<f32>,
    /// Index of `selected` within `retained_scores`.
    pub selected_rank: usize,
    pub trials_run: usize,
}

/// A trait for receiving updates during the search.
/// Boolean return value indicates if the search should continue (true) or abort (false).
pub trait ProgressCallback: Send + Sync {
    fn on_progress(&self, trial: usize, best_score: f32, retained: usize) -> bool;
}

/// Runs to completion and reports nothing.
pub struct NoProgress;

impl ProgressCallback for NoProgress {
    fn on_progress(&self, _trial: usize, _best_score: f32, _retained: usize) -> bool {
        true
    }
}

/// Shared cancellation flag. Clone it, hand one copy to the search and call
/// `stop` on another from any thread.
#[derive(Debug, Clone, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl ProgressCallback for StopFlag {
    fn on_progress(&self, _trial: usize, _best_score: f32, _retained: usize) -> bool {
        !self.is_stopped()
    }
}

pub struct Optimizer {
    scorer: Scorer,
    options: OptimizationOptions,
}

impl Optimizer {
    pub fn new(scorer: Scorer, options: OptimizationOptions) -> Self {
        Self { scorer, options }
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// Shuffles the whole pool each trial (Fisher-Yates), scores the leading
    /// `width * height` labels and keeps the best few. The callback is polled
    /// every `report_interval` trials, starting before the first one.
    pub fn run<CB: ProgressCallback>(
        &self,
        pool: &[Difficulty],
        rng: &mut Rng,
        callback: &CB,
    ) -> BfResult<OptimizationResult> {
        let opts = &self.options;
        let n = self.scorer.cell_count();

        if n == 0 {
            return Ok(OptimizationResult {
                selected: Candidate {
                    sequence: Vec::new(),
                    score: 0.0,
                },
                retained_scores: Vec::new(),
                selected_rank: 0,
                trials_run: 0,
            });
        }

        if opts.retain == 0 {
            return Err(BoardForgeError::Config(
                "retain must be at least 1".to_string(),
            ));
        }

        if pool.len() < n {
            return Err(BoardForgeError::Validation(format!(
                "pool holds {} labels but the grid needs {}",
                pool.len(),
                n
            )));
        }

        let interval = opts.report_interval.max(1);
        let mut work = pool.to_vec();
        let mut top = TopK::new(opts.retain);
        let start_time = Instant::now();

        for trial in 0..opts.trials {
            if trial % interval == 0 {
                let best = top.best().map(|c| c.score).unwrap_or(f32::NEG_INFINITY);
                if !callback.on_progress(trial, best, top.len()) {
                    info!("Search cancelled after {} trials", trial);
                    return Err(BoardForgeError::Cancelled);
                }
            }

            rng.shuffle(&mut work);
            let head = &work[..n];
            let score = self.scorer.score(head);

            if top.would_accept(score) {
                top.offer(head, score);
                trace!("Trial {:6} retained with score {:.4}", trial, score);
            }
        }

        let elapsed = start_time.elapsed().as_secs_f32();
        let (selected_rank, selected) = top
            .choose(rng)
            .map(|(rank, c)| (rank, c.clone()))
            .ok_or_else(|| {
                BoardForgeError::Config("trials must be at least 1".to_string())
            })?;

        debug!(
            "Search done: {} trials in {:.2}s | kept {} | picked {:.4} (best {:.4})",
            opts.trials,
            elapsed,
            top.len(),
            selected.score,
            top.best().map(|c| c.score).unwrap_or(selected.score)
        );

        Ok(OptimizationResult {
            selected,
            retained_scores: top.scores(),
            selected_rank,
            trials_run: opts.trials,
        })
    }
}
