use crate::config::{Config, ScoringWeights};
use crate::core_types::{supplies_from, total_count, Board, Difficulty, GridSize, Item};
use crate::error::{BfResult, BoardForgeError};
use crate::materializer::materialize;
use crate::optimizer::{build_pool, Candidate, OptimizationOptions, Optimizer, ProgressCallback};
use crate::scorer::{ScoreDetails, Scorer};
use fastrand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Everything one generation produces. Only `board` is meant to outlive the
/// call; the rest is kept for reporting.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Generation {
    pub board: Board,
    pub selected: Candidate,
    pub details: ScoreDetails,
    pub retained_scores: Vec<f32>,
    /// Index of `selected` within `retained_scores`.
    pub selected_rank: usize,
    pub trials: usize,
}

/// Picks the grid: both sides given means explicit, neither means the square
/// default `floor(sqrt(total supply))`.
pub fn resolve_grid(
    items: &[Item],
    width: Option<usize>,
    height: Option<usize>,
) -> BfResult<GridSize> {
    match (width, height) {
        (Some(w), Some(h)) => GridSize::new(w, h),
        (None, None) => GridSize::square_for(items),
        _ => Err(BoardForgeError::Config(
            "--width and --height must be given together".to_string(),
        )),
    }
}

/// Service: run the full pipeline once.
///
/// Inputs are validated before any work starts. A cancelled search returns
/// `BoardForgeError::Cancelled` and no board.
pub fn generate_board<CB: ProgressCallback>(
    items: &[Item],
    grid: GridSize,
    config: &Config,
    rng: &mut Rng,
    progress: &CB,
) -> BfResult<Generation> {
    let grid = GridSize::new(grid.width, grid.height)?;
    config.validate()?;
    let supplies = supplies_from(items)?;

    let cells = grid.cells();
    let supplied = total_count(items);
    if supplied < cells as u64 {
        warn!(
            "Supply {} below grid size {}; expect at least {} empty cells",
            supplied,
            cells,
            cells as u64 - supplied
        );
    }

    let pool = build_pool(&supplies, cells);
    let scorer = Scorer::new(grid, config.weights.clone());
    let optimizer = Optimizer::new(scorer, OptimizationOptions::from(config));

    let result = optimizer.run(&pool, rng, progress)?;
    let details = optimizer.scorer().score_details(&result.selected.sequence);
    let board = materialize(&result.selected.sequence, &supplies, grid, rng);

    Ok(Generation {
        board,
        selected: result.selected,
        details,
        retained_scores: result.retained_scores,
        selected_rank: result.selected_rank,
        trials: result.trials_run,
    })
}

/// Service: generate `boards` independent boards in parallel.
///
/// Each board gets its own generator (`seed + index` when seeded), so no
/// random state is shared between threads. Results keep index order.
pub fn generate_batch<CB: ProgressCallback>(
    items: &[Item],
    grid: GridSize,
    config: &Config,
    boards: usize,
    seed: Option<u64>,
    progress: &CB,
) -> BfResult<Vec<Generation>> {
    info!("🎲 Generating {} boards ({}x{})", boards, grid.width, grid.height);

    (0..boards)
        .into_par_iter()
        .map(|i| {
            let mut rng = match seed {
                Some(s) => Rng::with_seed(s.wrapping_add(i as u64)),
                None => Rng::new(),
            };
            generate_board(items, grid, config, &mut rng, progress)
        })
        .collect()
}

/// Parses a layout such as `"1,2,3,4"`, `"1 2 3 4"` or `"1234"` into labels.
pub fn parse_layout(layout: &str) -> BfResult<Vec<Difficulty>> {
    let tokens: Vec<&str> = if layout.contains(',') || layout.contains(char::is_whitespace) {
        layout
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .collect()
    } else {
        layout
            .char_indices()
            .map(|(i, c)| &layout[i..i + c.len_utf8()])
            .collect()
    };

    tokens
        .iter()
        .map(|t| {
            let v: u8 = t.parse().map_err(|_| {
                BoardForgeError::Validation(format!("'{}' is not a difficulty ordinal", t))
            })?;
            Difficulty::try_from(v).map_err(BoardForgeError::Validation)
        })
        .collect()
}

/// Service: score an explicit layout without searching.
pub fn score_layout(
    layout: &[Difficulty],
    grid: GridSize,
    weights: &ScoringWeights,
) -> BfResult<ScoreDetails> {
    let grid = GridSize::new(grid.width, grid.height)?;
    weights.validate()?;
    Scorer::new(grid, weights.clone()).try_score(layout)
}
