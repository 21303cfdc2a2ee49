//! Study configuration model.
//!
//! [`StudyConfig`] holds the time budget, the experience level, and the
//! inclusion filters for a single planning run.
//!
//! # Defaults
//!
//! ```
//! use u_studyplan::models::{Difficulty, ExperienceLevel, StudyConfig};
//!
//! let config = StudyConfig::default();
//! assert_eq!(config.weeks, 4);
//! assert_eq!(config.hours_per_week, 6.0);
//! assert!(config.selected_difficulties.contains(&Difficulty::Medium));
//! assert_eq!(config.experience_level, ExperienceLevel::Intermediate);
//! ```
//!
//! # Record Format
//! Deserializes from the persisted configuration shape (`hoursPerWeek`,
//! `selectedDifficulties`, ...). Missing fields fall back to the defaults.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Difficulty;

/// Self-reported experience level of the learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Beginner,
    #[default]
    Intermediate,
    Expert,
}

impl ExperienceLevel {
    /// All levels.
    pub const ALL: [ExperienceLevel; 3] = [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Expert,
    ];
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Expert => "Expert",
        };
        f.write_str(s)
    }
}

/// Configuration for one planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudyConfig {
    /// Number of weekly periods.
    pub weeks: u32,
    /// Capacity of each week, in hours.
    pub hours_per_week: f64,
    /// Difficulties eligible for the plan. Empty = nothing qualifies.
    pub selected_difficulties: BTreeSet<Difficulty>,
    /// Company filter. Empty = no filter.
    pub selected_companies: BTreeSet<String>,
    /// Topic-tag filter. Empty = no filter.
    pub selected_topics: BTreeSet<String>,
    /// Experience level driving duration and difficulty bias.
    pub experience_level: ExperienceLevel,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            weeks: 4,
            hours_per_week: 6.0,
            selected_difficulties: BTreeSet::from([Difficulty::Medium]),
            selected_companies: BTreeSet::new(),
            selected_topics: BTreeSet::new(),
            experience_level: ExperienceLevel::Intermediate,
        }
    }
}

impl StudyConfig {
    /// Creates a config with the given budget and no difficulty selected.
    pub fn new(weeks: u32, hours_per_week: f64) -> Self {
        Self {
            weeks,
            hours_per_week,
            selected_difficulties: BTreeSet::new(),
            ..Self::default()
        }
    }

    /// Sets the number of weeks.
    pub fn with_weeks(mut self, weeks: u32) -> Self {
        self.weeks = weeks;
        self
    }

    /// Sets the weekly capacity in hours.
    pub fn with_hours_per_week(mut self, hours: f64) -> Self {
        self.hours_per_week = hours;
        self
    }

    /// Replaces the difficulty selection.
    pub fn with_difficulties(mut self, difficulties: impl IntoIterator<Item = Difficulty>) -> Self {
        self.selected_difficulties = difficulties.into_iter().collect();
        self
    }

    /// Adds a company to the company filter.
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.selected_companies.insert(company.into());
        self
    }

    /// Adds a tag to the topic filter.
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.selected_topics.insert(topic.into());
        self
    }

    /// Sets the experience level.
    pub fn with_experience(mut self, level: ExperienceLevel) -> Self {
        self.experience_level = level;
        self
    }

    /// Capacity of one week in minutes.
    #[inline]
    pub fn week_limit_minutes(&self) -> f64 {
        self.hours_per_week * 60.0
    }

    /// Global budget across all weeks in minutes.
    #[inline]
    pub fn budget_minutes(&self) -> f64 {
        f64::from(self.weeks) * self.week_limit_minutes()
    }
}
