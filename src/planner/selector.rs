//! Diversity-aware greedy budget fill.
//!
//! # Algorithm
//!
//! While budget remains and candidates are left:
//! 1. Compute each candidate's effective score:
//!    `score × Π_tag topic_decay^count[tag] × difficulty_decay^count[difficulty]`.
//! 2. Pick the strictly greatest (first in pool order on ties).
//! 3. Adjust its duration for experience (`ceil(duration × multiplier)`).
//! 4. Accept it if it still fits the budget, updating the repetition counts.
//! 5. Swap-remove it from the candidates whether accepted or not.
//!
//! Penalties change after every accepted pick, so scores are recomputed
//! each round: O(n²) in the pool size.

use std::collections::HashMap;

use tracing::trace;

use crate::models::{Difficulty, ScoredItem};

use super::profile::ExperienceProfile;

/// Exponential decay factors for repeated topics and difficulties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayRates {
    /// Per-occurrence factor for each already-selected tag.
    pub topic: f64,
    /// Per-occurrence factor for the already-selected difficulty.
    pub difficulty: f64,
}

impl Default for DecayRates {
    fn default() -> Self {
        Self {
            topic: 0.96,
            difficulty: 0.95,
        }
    }
}

impl DecayRates {
    /// Sets the topic decay factor.
    pub fn with_topic(mut self, factor: f64) -> Self {
        self.topic = factor;
        self
    }

    /// Sets the difficulty decay factor.
    pub fn with_difficulty(mut self, factor: f64) -> Self {
        self.difficulty = factor;
        self
    }
}

/// Repetition counts accumulated during one selection run.
#[derive(Debug, Default)]
struct RepetitionCounts {
    tags: HashMap<String, i32>,
    difficulties: HashMap<Difficulty, i32>,
}

impl RepetitionCounts {
    fn penalty(&self, candidate: &ScoredItem, decay: &DecayRates) -> f64 {
        let topic_penalty: f64 = candidate
            .item
            .tag_names()
            .map(|tag| decay.topic.powi(self.tags.get(tag).copied().unwrap_or(0)))
            .product();
        let difficulty_count = self
            .difficulties
            .get(&candidate.item.difficulty)
            .copied()
            .unwrap_or(0);

        topic_penalty * decay.difficulty.powi(difficulty_count)
    }

    fn record(&mut self, picked: &ScoredItem) {
        for tag in picked.item.tag_names() {
            *self.tags.entry(tag.to_string()).or_insert(0) += 1;
        }
        *self.difficulties.entry(picked.item.difficulty).or_insert(0) += 1;
    }
}

/// Result of a selection run.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Accepted items in pick order, durations adjusted.
    pub items: Vec<ScoredItem>,
    /// Sum of accepted durations (minutes).
    pub elapsed_minutes: u64,
    /// Number of picks rejected for exceeding the budget.
    pub rejected: usize,
}

/// Greedily selects items under `budget_minutes`.
///
/// `candidates` is consumed as the working set; its initial order
/// defines tie-breaking.
pub fn select(
    mut candidates: Vec<ScoredItem>,
    budget_minutes: f64,
    profile: &ExperienceProfile,
    decay: &DecayRates,
) -> Selection {
    let mut counts = RepetitionCounts::default();
    let mut items = Vec::new();
    let mut elapsed: u64 = 0;
    let mut rejected = 0;

    while (elapsed as f64) < budget_minutes && !candidates.is_empty() {
        let Some(best_idx) = best_candidate(&candidates, &counts, decay) else {
            break;
        };

        let picked = candidates.swap_remove(best_idx);
        let adjusted = profile.adjust_duration(picked.item.duration);
        let total = elapsed + u64::from(adjusted);

        if total as f64 <= budget_minutes {
            trace!(item = %picked.item.id, adjusted, elapsed, "accepted");
            counts.record(&picked);
            elapsed = total;

            let mut accepted = picked;
            accepted.item.duration = adjusted;
            items.push(accepted);
        } else {
            trace!(item = %picked.item.id, adjusted, elapsed, "rejected: over budget");
            rejected += 1;
        }
    }

    Selection {
        items,
        elapsed_minutes: elapsed,
        rejected,
    }
}

/// Index of the candidate with the strictly greatest effective score.
fn best_candidate(
    candidates: &[ScoredItem],
    counts: &RepetitionCounts,
    decay: &DecayRates,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (idx, candidate) in candidates.iter().enumerate() {
        let effective = candidate.score * counts.penalty(candidate, decay);
        match best {
            Some((_, best_score)) if effective <= best_score => {}
            _ => best = Some((idx, effective)),
        }
    }

    best.map(|(idx, _)| idx)
}
