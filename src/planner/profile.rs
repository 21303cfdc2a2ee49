//! Experience-level tables.
//!
//! Each [`ExperienceLevel`] maps to a fixed [`ExperienceProfile`]: a
//! duration multiplier and a multiplicative difficulty bias.
//!
//! | Level | Time × | Very Easy/Easy | Medium | Hard/Very Hard |
//! |-------|--------|----------------|--------|----------------|
//! | Beginner | 1.5 | 3.0 | 0.5 | 0.1 |
//! | Intermediate | 1.0 | 1.0 | 1.0 | 1.0 |
//! | Expert | 0.7 | 0.5 | 1.0 | 2.0 |
//!
//! The bias never excludes an item; it only scales its score.

use crate::models::{Difficulty, ExperienceLevel};

/// Score multipliers per difficulty band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyBias {
    /// Applied to Very Easy and Easy.
    pub easy: f64,
    /// Applied to Medium.
    pub medium: f64,
    /// Applied to Hard and Very Hard.
    pub hard: f64,
}

impl DifficultyBias {
    /// Multiplier for a difficulty.
    pub fn weight(&self, difficulty: Difficulty) -> f64 {
        match difficulty {
            Difficulty::VeryEasy | Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard | Difficulty::VeryHard => self.hard,
        }
    }
}

/// Per-level planning parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperienceProfile {
    /// Multiplier applied to every item's estimated duration.
    pub time_multiplier: f64,
    /// Difficulty bias applied to scores.
    pub bias: DifficultyBias,
}

const BEGINNER: ExperienceProfile = ExperienceProfile {
    time_multiplier: 1.5,
    bias: DifficultyBias {
        easy: 3.0,
        medium: 0.5,
        hard: 0.1,
    },
};

const INTERMEDIATE: ExperienceProfile = ExperienceProfile {
    time_multiplier: 1.0,
    bias: DifficultyBias {
        easy: 1.0,
        medium: 1.0,
        hard: 1.0,
    },
};

const EXPERT: ExperienceProfile = ExperienceProfile {
    time_multiplier: 0.7,
    bias: DifficultyBias {
        easy: 0.5,
        medium: 1.0,
        hard: 2.0,
    },
};

impl ExperienceProfile {
    /// Returns the fixed profile for a level.
    pub fn for_level(level: ExperienceLevel) -> &'static ExperienceProfile {
        match level {
            ExperienceLevel::Beginner => &BEGINNER,
            ExperienceLevel::Intermediate => &INTERMEDIATE,
            ExperienceLevel::Expert => &EXPERT,
        }
    }

    /// Experience-adjusted duration: `ceil(duration × time_multiplier)`,
    /// saturating at `u32::MAX`.
    #[inline]
    pub fn adjust_duration(&self, duration: u32) -> u32 {
        (f64::from(duration) * self.time_multiplier).ceil() as u32
    }
}

impl ExperienceLevel {
    /// Shorthand for [`ExperienceProfile::for_level`].
    pub fn profile(self) -> &'static ExperienceProfile {
        ExperienceProfile::for_level(self)
    }
}
