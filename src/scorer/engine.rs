use super::{ScoreDetails, Scorer};
use crate::core_types::Difficulty;

/// Hot-path score used by the search loop.
#[inline(always)]
pub fn score_full(scorer: &Scorer, seq: &[Difficulty]) -> f32 {
    score_details(scorer, seq).total
}

pub fn score_details(scorer: &Scorer, seq: &[Difficulty]) -> ScoreDetails {
    let mut d = ScoreDetails::default();
    if seq.is_empty() {
        return d;
    }

    let w = scorer.width;
    let h = scorer.height;
    debug_assert_eq!(seq.len(), w * h, "sequence does not fill the grid");

    let n = seq.len() as f32;
    d.mean = seq.iter().map(|v| v.as_f32()).sum::<f32>() / n;

    // 1. Row Balance
    for r in 0..h {
        let row = &seq[r * w..(r + 1) * w];
        let row_mean = row.iter().map(|v| v.as_f32()).sum::<f32>() / w as f32;
        d.row_penalty += (row_mean - d.mean).abs();
    }

    // 2. Column Balance
    for c in 0..w {
        let mut sum = 0.0;
        for r in 0..h {
            sum += seq[scorer.idx(r, c)].as_f32();
        }
        d.col_penalty += (sum / h as f32 - d.mean).abs();
    }

    // 3. Local Clusters (right and bottom neighbours)
    for (i, &v) in seq.iter().enumerate() {
        let r = i / w;
        let c = i % w;
        if c + 1 < w && seq[i + 1] == v {
            d.adjacent_repeats += 1;
        }
        if r + 1 < h && seq[i + w] == v {
            d.adjacent_repeats += 1;
        }
    }
    d.adjacency_penalty = d.adjacent_repeats as f32 * scorer.weights.adjacency_penalty;

    // 4. Global Spread
    d.variance = seq
        .iter()
        .map(|v| {
            let diff = v.as_f32() - d.mean;
            diff * diff
        })
        .sum::<f32>()
        / n;
    d.variance_penalty = (d.variance - scorer.weights.target_variance).abs();

    d.total = -(d.row_penalty + d.col_penalty + d.adjacency_penalty + d.variance_penalty);
    d
}
