use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetails {
    // Top-line Score (higher is better, never positive)
    pub total: f32,

    // Distribution
    pub mean: f32,
    pub variance: f32,

    // Penalty Breakdown (all non-negative, subtracted from total)
    pub row_penalty: f32,
    pub col_penalty: f32,
    pub adjacency_penalty: f32,
    pub variance_penalty: f32,

    // Counters
    pub adjacent_repeats: usize,
}
