use super::Candidate;
use crate::core_types::Difficulty;
use fastrand::Rng;
use std::cmp::Ordering;

/// Bounded best-of-N cache of candidates.
///
/// Eviction scans linearly for the current minimum; at the default
/// capacity of 10 this beats a heap.
#[derive(Debug, Clone)]
pub struct TopK {
    capacity: usize,
    entries: Vec<Candidate>,
}

impl TopK {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn min_index(&self) -> Option<usize> {
        let mut min_idx = None;
        let mut min_score = f32::INFINITY;
        for (i, c) in self.entries.iter().enumerate() {
            if min_idx.is_none() || c.score < min_score {
                min_idx = Some(i);
                min_score = c.score;
            }
        }
        min_idx
    }

    /// True if `offer` with this score would change the retained set.
    #[inline(always)]
    pub fn would_accept(&self, score: f32) -> bool {
        if self.entries.len() < self.capacity {
            return true;
        }
        match self.min_index() {
            Some(i) => score > self.entries[i].score,
            None => false,
        }
    }

    /// Inserts while below capacity, otherwise replaces the weakest entry
    /// only on a strictly greater score. Ties keep the incumbent.
    pub fn offer(&mut self, sequence: &[Difficulty], score: f32) -> bool {
        if self.entries.len() < self.capacity {
            self.entries.push(Candidate {
                sequence: sequence.to_vec(),
                score,
            });
            return true;
        }

        if let Some(i) = self.min_index() {
            if score > self.entries[i].score {
                let slot = &mut self.entries[i];
                slot.sequence.clear();
                slot.sequence.extend_from_slice(sequence);
                slot.score = score;
                return true;
            }
        }
        false
    }

    /// Uniform pick among the survivors, not the single best. Returns the
    /// pick together with its position in `scores()`.
    pub fn choose(&self, rng: &mut Rng) -> Option<(usize, &Candidate)> {
        if self.entries.is_empty() {
            return None;
        }
        let i = rng.usize(0..self.entries.len());
        Some((self.rank_of(i), &self.entries[i]))
    }

    // Position of entry `i` in the stable best-first order used by `scores`.
    fn rank_of(&self, i: usize) -> usize {
        let s = self.entries[i].score;
        self.entries
            .iter()
            .enumerate()
            .filter(|&(j, c)| match c.score.total_cmp(&s) {
                Ordering::Greater => true,
                Ordering::Equal => j < i,
                Ordering::Less => false,
            })
            .count()
    }

    pub fn best(&self) -> Option<&Candidate> {
        self.entries
            .iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
    }

    /// Retained scores, best first.
    pub fn scores(&self) -> Vec<f32> {
        let mut s: Vec<f32> = self.entries.iter().map(|c| c.score).collect();
        s.sort_by(|a, b| b.total_cmp(a));
        s
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.entries
    }
}
