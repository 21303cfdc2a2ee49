//! Multi-factor item scoring.
//!
//! # Formula
//!
//! ```text
//! norm_company = company_count / max(company_count over pool, 1)
//! norm_likes   = likes / max(likes over pool, 1)
//! base         = w_company * norm_company + w_likes * norm_likes
//! base        *= curated_boost            (curated items only)
//! score        = base * bias[level][difficulty]
//! ```
//!
//! Normalization is relative to the filtered pool, so scores are only
//! comparable within one run. Denominators are floored at 1 so an
//! all-zero pool scores 0 rather than NaN.

use std::cmp::Ordering;

use crate::models::{ExperienceLevel, Item, ScoredItem};

/// Weights of the base score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    /// Weight of the normalized company frequency.
    pub company: f64,
    /// Weight of the normalized likes.
    pub likes: f64,
    /// Multiplier for curated items.
    pub curated_boost: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            company: 0.7,
            likes: 0.3,
            curated_boost: 1.2,
        }
    }
}

impl ScoringWeights {
    /// Sets the company weight.
    pub fn with_company(mut self, weight: f64) -> Self {
        self.company = weight;
        self
    }

    /// Sets the likes weight.
    pub fn with_likes(mut self, weight: f64) -> Self {
        self.likes = weight;
        self
    }

    /// Sets the curated boost.
    pub fn with_curated_boost(mut self, boost: f64) -> Self {
        self.curated_boost = boost;
        self
    }
}

/// Pool-wide normalization denominators.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Normalizer {
    max_company_count: f64,
    max_likes: f64,
}

impl Normalizer {
    fn from_pool(pool: &[&Item]) -> Self {
        let max_company_count = pool.iter().map(|i| i.company_count).max().unwrap_or(0).max(1);
        let max_likes = pool.iter().map(|i| i.likes).max().unwrap_or(0).max(1);
        Self {
            max_company_count: f64::from(max_company_count),
            max_likes: f64::from(max_likes),
        }
    }
}

/// Scores one item against precomputed pool maxima.
fn score_item(
    item: &Item,
    norm: &Normalizer,
    level: ExperienceLevel,
    weights: &ScoringWeights,
) -> f64 {
    let norm_company = f64::from(item.company_count) / norm.max_company_count;
    let norm_likes = f64::from(item.likes) / norm.max_likes;

    let mut base = weights.company * norm_company + weights.likes * norm_likes;
    if item.is_curated {
        base *= weights.curated_boost;
    }

    base * level.profile().bias.weight(item.difficulty)
}

/// Scores the pool and returns it ordered by score, highest first.
///
/// The sort is stable: equal scores keep pool (catalog) order, which is
/// the tie-break order the selector relies on.
pub fn score_pool(
    pool: &[&Item],
    level: ExperienceLevel,
    weights: &ScoringWeights,
) -> Vec<ScoredItem> {
    let norm = Normalizer::from_pool(pool);

    let mut scored: Vec<ScoredItem> = pool
        .iter()
        .map(|&item| ScoredItem::new(item.clone(), score_item(item, &norm, level, weights)))
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    fn score_of(scored: &[ScoredItem], id: &str) -> f64 {
        scored.iter().find(|s| s.id() == id).unwrap().score
    }

    #[test]
    fn test_company_normalization() {
        let a = Item::new("a", Difficulty::Easy, 10).with_company_count(50);
        let b = Item::new("b", Difficulty::Medium, 10).with_company_count(30);
        let scored = score_pool(&[&a, &b], ExperienceLevel::Intermediate, &ScoringWeights::default());

        // likes all zero → floored denominator, contributes nothing
        assert!((score_of(&scored, "a") - 0.7).abs() < 1e-10);
        assert!((score_of(&scored, "b") - 0.42).abs() < 1e-10);
    }

    #[test]
    fn test_likes_component() {
        let a = Item::new("a", Difficulty::Easy, 10).with_company_count(10).with_likes(100);
        let b = Item::new("b", Difficulty::Easy, 10).with_company_count(10).with_likes(50);
        let scored = score_pool(&[&a, &b], ExperienceLevel::Intermediate, &ScoringWeights::default());

        assert!((score_of(&scored, "a") - 1.0).abs() < 1e-10);
        assert!((score_of(&scored, "b") - 0.85).abs() < 1e-10);
    }

    #[test]
    fn test_curated_boost() {
        let a = Item::new("a", Difficulty::Easy, 10).with_company_count(10).curated();
        let scored = score_pool(&[&a], ExperienceLevel::Intermediate, &ScoringWeights::default());
        assert!((scored[0].score - 0.84).abs() < 1e-10);
    }

    #[test]
    fn test_all_zero_signals() {
        let a = Item::new("a", Difficulty::Easy, 10);
        let b = Item::new("b", Difficulty::Hard, 10).curated();
        let scored = score_pool(&[&a, &b], ExperienceLevel::Expert, &ScoringWeights::default());

        for s in &scored {
            assert!(s.score.is_finite());
            assert_eq!(s.score, 0.0);
        }
        // Equal scores keep pool order
        assert_eq!(scored[0].id(), "a");
    }

    #[test]
    fn test_experience_bias_applied() {
        let easy = Item::new("easy", Difficulty::Easy, 10).with_company_count(10);
        let hard = Item::new("hard", Difficulty::Hard, 10).with_company_count(10);
        let pool = [&easy, &hard];

        let beginner = score_pool(&pool, ExperienceLevel::Beginner, &ScoringWeights::default());
        assert!((score_of(&beginner, "easy") - 2.1).abs() < 1e-10);
        assert!((score_of(&beginner, "hard") - 0.07).abs() < 1e-10);

        let expert = score_pool(&pool, ExperienceLevel::Expert, &ScoringWeights::default());
        assert_eq!(expert[0].id(), "hard");
        assert!((score_of(&expert, "hard") - 1.4).abs() < 1e-10);
        assert!((score_of(&expert, "easy") - 0.35).abs() < 1e-10);
    }

    #[test]
    fn test_sorted_descending() {
        let items: Vec<Item> = [5u32, 40, 20, 40]
            .iter()
            .enumerate()
            .map(|(i, &c)| Item::new(format!("i{i}"), Difficulty::Medium, 10).with_company_count(c))
            .collect();
        let pool: Vec<&Item> = items.iter().collect();
        let scored = score_pool(&pool, ExperienceLevel::Intermediate, &ScoringWeights::default());

        let order: Vec<&str> = scored.iter().map(|s| s.id()).collect();
        assert_eq!(order, vec!["i1", "i3", "i2", "i0"]);
    }

    #[test]
    fn test_custom_weights() {
        let a = Item::new("a", Difficulty::Easy, 10).with_company_count(10).with_likes(10);
        let weights = ScoringWeights::default().with_company(0.0).with_likes(1.0);
        let scored = score_pool(&[&a], ExperienceLevel::Intermediate, &weights);
        assert!((scored[0].score - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_pool() {
        let scored = score_pool(&[], ExperienceLevel::Beginner, &ScoringWeights::default());
        assert!(scored.is_empty());
    }
}
