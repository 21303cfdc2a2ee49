//! Study-plan generation for the U-Engine ecosystem.
//!
//! Turns a catalog of practice items and a study configuration into a
//! week-by-week plan that respects a hard time budget, favors high-value
//! items, and spreads effort across topics and difficulty tiers.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Item`, `Difficulty`, `StudyConfig`,
//!   `ExperienceLevel`, `ScoredItem`, `Week`, `StudyPlan`
//! - **`planner`**: The filter → score → select → pack pipeline
//! - **`catalog`**: Item store, JSON loading, facet counts
//! - **`progress`**: Completion metrics over a generated plan
//! - **`validation`**: Input integrity checks (duplicate IDs, empty budgets)
//!
//! # Example
//!
//! ```
//! use u_studyplan::models::{Difficulty, ExperienceLevel, Item, StudyConfig};
//! use u_studyplan::generate_plan;
//!
//! let items = vec![
//!     Item::new("two-sum", Difficulty::Easy, 20).with_company_count(50).with_tag("Array"),
//!     Item::new("easy-string", Difficulty::Easy, 15).with_company_count(20).with_tag("String"),
//! ];
//! let config = StudyConfig::new(1, 5.0)
//!     .with_difficulties([Difficulty::Easy])
//!     .with_experience(ExperienceLevel::Beginner);
//!
//! let plan = generate_plan(&items, &config);
//! assert_eq!(plan.week_count(), 1);
//! assert_eq!(plan.total_minutes(), 30 + 23);
//! ```
//!
//! # References
//!
//! - Martello & Toth (1990), "Knapsack Problems: Algorithms and Computer
//!   Implementations" (greedy heuristics)
//! - Coffman et al. (1996), "Approximation Algorithms for Bin Packing"

pub mod catalog;
pub mod error;
pub mod models;
pub mod planner;
pub mod progress;
pub mod validation;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use planner::{generate_plan, StudyPlanner};
