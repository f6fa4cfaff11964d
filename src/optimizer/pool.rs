use crate::core_types::{Difficulty, Supply};
use tracing::debug;

/// Expands supplies into a flat multiset of difficulty labels, one entry per
/// unit, in supply order. Pads with `Difficulty::FILLER` until the pool covers
/// `cells` slots.
///
/// Filler entries are not backed by any item, so they always materialize as
/// empty cells even though they take part in scoring.
pub fn build_pool(supplies: &[Supply], cells: usize) -> Vec<Difficulty> {
    let supplied: usize = supplies.iter().map(|s| s.remaining as usize).sum();
    let mut pool = Vec::with_capacity(supplied.max(cells));

    for s in supplies {
        pool.extend(std::iter::repeat(s.difficulty).take(s.remaining as usize));
    }

    if pool.len() < cells {
        debug!(
            "Pool short by {} units, padding with {}",
            cells - pool.len(),
            Difficulty::FILLER
        );
        pool.resize(cells, Difficulty::FILLER);
    }

    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supply(id: u32, difficulty: Difficulty, remaining: u32) -> Supply {
        Supply {
            item_id: id,
            name: format!("item{}", id),
            difficulty,
            remaining,
        }
    }

    #[test]
    fn test_pool_preserves_supply_order() {
        let supplies = vec![
            supply(0, Difficulty::Hard, 2),
            supply(1, Difficulty::Easy, 1),
        ];
        let pool = build_pool(&supplies, 2);
        assert_eq!(
            pool,
            vec![Difficulty::Hard, Difficulty::Hard, Difficulty::Easy]
        );
    }

    #[test]
    fn test_pool_pads_with_filler() {
        let supplies = vec![supply(0, Difficulty::Extreme, 1)];
        let pool = build_pool(&supplies, 4);
        assert_eq!(
            pool,
            vec![
                Difficulty::Extreme,
                Difficulty::Trivial,
                Difficulty::Trivial,
                Difficulty::Trivial
            ]
        );
    }

    #[test]
    fn test_empty_supplies_yield_all_filler() {
        let pool = build_pool(&[], 3);
        assert_eq!(pool, vec![Difficulty::FILLER; 3]);
        assert!(build_pool(&[], 0).is_empty());
    }
}
