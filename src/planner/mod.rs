//! Study-plan generation pipeline.
//!
//! Four stages, each consuming only the previous stage's output:
//!
//! 1. **Filter** ([`filter`]): catalog → eligible pool.
//! 2. **Score** ([`scoring`]): normalized multi-factor value, biased by
//!    experience level.
//! 3. **Select** ([`selector`]): greedy budget fill with diminishing-returns
//!    decay on repeated topics and difficulties.
//! 4. **Pack** ([`packer`]): easy-to-hard ordering, distributed into
//!    fixed-capacity weeks.
//!
//! The pipeline is pure and deterministic: identical inputs always yield
//! an identical plan. It is a heuristic; it guarantees neither maximum
//! value nor full use of the budget.
//!
//! # Complexity
//! O(n²) in the filtered pool size (selector re-scan per round).

pub mod filter;
pub mod packer;
pub mod profile;
pub mod scoring;
pub mod selector;

pub use profile::{DifficultyBias, ExperienceProfile};
pub use scoring::ScoringWeights;
pub use selector::DecayRates;

use tracing::debug;

use crate::models::{Item, StudyConfig, StudyPlan};

/// Study planner with tunable scoring and decay.
///
/// [`StudyPlanner::default`] reproduces the standard weights; use the
/// builders to experiment with alternatives.
///
/// # Example
///
/// ```
/// use u_studyplan::models::{Difficulty, ExperienceLevel, Item, StudyConfig};
/// use u_studyplan::planner::StudyPlanner;
///
/// let items = vec![
///     Item::new("1", Difficulty::Easy, 20).with_company_count(50).with_tag("Array"),
///     Item::new("2", Difficulty::Hard, 45).with_company_count(10).with_tag("Graph"),
/// ];
/// let config = StudyConfig::new(2, 5.0)
///     .with_difficulties([Difficulty::Easy, Difficulty::Hard])
///     .with_experience(ExperienceLevel::Intermediate);
///
/// let plan = StudyPlanner::new().plan(&items, &config);
/// assert_eq!(plan.week_count(), 2);
/// assert_eq!(plan.item_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StudyPlanner {
    weights: ScoringWeights,
    decay: DecayRates,
}

impl StudyPlanner {
    /// Creates a planner with the standard weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scoring weights.
    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Sets the decay rates.
    pub fn with_decay(mut self, decay: DecayRates) -> Self {
        self.decay = decay;
        self
    }

    /// Scoring weights in use.
    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Decay rates in use.
    pub fn decay(&self) -> &DecayRates {
        &self.decay
    }

    /// Generates a plan for `items` under `config`.
    ///
    /// Never fails: an empty pool yields `config.weeks` empty weeks.
    pub fn plan(&self, items: &[Item], config: &StudyConfig) -> StudyPlan {
        let profile = config.experience_level.profile();

        let pool = filter::filter_pool(items, config);
        debug!(
            catalog = items.len(),
            pool = pool.len(),
            level = %config.experience_level,
            "filtered candidate pool"
        );

        let scored = scoring::score_pool(&pool, config.experience_level, &self.weights);

        let budget = config.budget_minutes();
        let selection = selector::select(scored, budget, profile, &self.decay);
        debug!(
            selected = selection.items.len(),
            rejected = selection.rejected,
            elapsed = selection.elapsed_minutes,
            budget,
            "selection complete"
        );

        let packing = packer::pack(selection.items, config.weeks, config.week_limit_minutes());
        if !packing.unplaced.is_empty() {
            debug!(
                unplaced = packing.unplaced.len(),
                "selected items did not fit remaining weekly capacity"
            );
        }

        StudyPlan::new(packing.weeks)
    }
}

/// Generates a plan with the standard weights.
///
/// Shorthand for `StudyPlanner::new().plan(items, config)`.
pub fn generate_plan(items: &[Item], config: &StudyConfig) -> StudyPlan {
    StudyPlanner::new().plan(items, config)
}
