/// Number of shuffle-and-score trials per generation.
pub const DEFAULT_TRIALS: usize = 100_000;

/// Capacity of the top-K candidate retainer.
pub const DEFAULT_RETAIN: usize = 10;

/// How many trials run between two progress/cancellation checks.
pub const DEFAULT_REPORT_INTERVAL: usize = 1_000;

/// Deducted once per equal right neighbour and once per equal bottom neighbour.
/// Empirically tuned; do not derive.
pub const ADJACENCY_PENALTY: f32 = 0.75;

/// Population variance the scorer steers boards towards.
/// Empirically tuned; do not derive.
pub const TARGET_VARIANCE: f32 = 1.25;

/// Lowest and highest difficulty ordinal.
pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 5;
