use boardforge::config::ScoringWeights;
use boardforge::core_types::{Difficulty, GridSize};
use boardforge::error::BoardForgeError;
use boardforge::optimizer::{NoProgress, OptimizationOptions, Optimizer};
use boardforge::scorer::Scorer;
use fastrand::Rng;

fn options(trials: usize, retain: usize) -> OptimizationOptions {
    OptimizationOptions {
        trials,
        retain,
        report_interval: 100,
    }
}

fn optimizer(width: usize, height: usize, opts: OptimizationOptions) -> Optimizer {
    let scorer = Scorer::new(GridSize::new(width, height).unwrap(), ScoringWeights::default());
    Optimizer::new(scorer, opts)
}

fn mixed_pool(len: usize) -> Vec<Difficulty> {
    (0..len)
        .map(|i| Difficulty::try_from((i % 5) as u8 + 1).unwrap())
        .collect()
}

#[test]
fn test_zero_cells_returns_empty_candidate_without_work() {
    let scorer = Scorer {
        width: 0,
        height: 3,
        weights: ScoringWeights::default(),
    };
    let opt = Optimizer::new(scorer, options(1_000, 10));
    let mut rng = Rng::with_seed(1);

    let result = opt.run(&mixed_pool(4), &mut rng, &NoProgress).unwrap();

    assert!(result.selected.sequence.is_empty());
    assert_eq!(result.selected.score, 0.0);
    assert_eq!(result.trials_run, 0);
    assert!(result.retained_scores.is_empty());
}

#[test]
fn test_short_pool_is_rejected() {
    let opt = optimizer(3, 3, options(100, 10));
    let mut rng = Rng::with_seed(1);

    let result = opt.run(&mixed_pool(8), &mut rng, &NoProgress);
    assert!(matches!(result, Err(BoardForgeError::Validation(_))));
}

#[test]
fn test_retain_larger_than_trials_keeps_every_trial() {
    let opt = optimizer(2, 2, options(3, 10));
    let mut rng = Rng::with_seed(5);

    let result = opt.run(&mixed_pool(6), &mut rng, &NoProgress).unwrap();

    assert_eq!(result.trials_run, 3);
    assert_eq!(result.retained_scores.len(), 3);
    assert_eq!(result.selected.sequence.len(), 4);
    assert_eq!(
        result.retained_scores[result.selected_rank],
        result.selected.score
    );
}

#[test]
fn test_zero_retain_is_a_config_error() {
    let opt = optimizer(2, 2, options(100, 0));
    let mut rng = Rng::with_seed(1);

    match opt.run(&mixed_pool(4), &mut rng, &NoProgress) {
        Err(BoardForgeError::Config(msg)) => assert!(msg.contains("retain"), "{}", msg),
        other => panic!("expected Config error, got {:?}", other.map(|r| r.trials_run)),
    }
}

#[test]
fn test_zero_trials_is_a_config_error() {
    let opt = optimizer(2, 2, options(0, 10));
    let mut rng = Rng::with_seed(1);

    match opt.run(&mixed_pool(4), &mut rng, &NoProgress) {
        Err(BoardForgeError::Config(msg)) => assert!(msg.contains("trials"), "{}", msg),
        other => panic!("expected Config error, got {:?}", other.map(|r| r.trials_run)),
    }
}

#[test]
fn test_selected_sequence_is_drawn_from_pool() {
    let opt = optimizer(3, 2, options(500, 5));
    let pool = mixed_pool(9);
    let mut rng = Rng::with_seed(42);

    let result = opt.run(&pool, &mut rng, &NoProgress).unwrap();

    let mut remaining = pool.clone();
    for d in &result.selected.sequence {
        let pos = remaining
            .iter()
            .position(|p| p == d)
            .expect("selected label not available in pool");
        remaining.swap_remove(pos);
    }
    assert!(result.retained_scores.windows(2).all(|w| w[0] >= w[1]));
}
