//! Study-planning domain models.
//!
//! Provides the input records (catalog items and configuration) and the
//! output plan produced by the planner.
//!
//! # Domain Mappings
//!
//! | u-studyplan | Scheduling analogue |
//! |-------------|---------------------|
//! | Item | Task |
//! | Week | Fixed-capacity period / bin |
//! | StudyConfig | Horizon + eligibility rules |
//! | StudyPlan | Schedule |

mod config;
mod item;
mod plan;

pub use config::{ExperienceLevel, StudyConfig};
pub use item::{Difficulty, Item, TopicTag};
pub use plan::{ScoredItem, StudyPlan, Week};
