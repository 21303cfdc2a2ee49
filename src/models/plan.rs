//! Study plan (output) model.
//!
//! A plan is the full list of weeks produced by one planning run. Every
//! week from 1 to `config.weeks` is present, including empty ones.

use serde::{Deserialize, Serialize};

use super::Item;

/// An item annotated with its value score.
///
/// Scores are transient: they only order candidates within one run and
/// are not comparable across runs with different pools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredItem {
    /// The item. Inside a plan its `duration` is experience-adjusted.
    #[serde(flatten)]
    pub item: Item,
    /// Normalized, bias-weighted value score.
    pub score: f64,
}

impl ScoredItem {
    /// Creates a scored item.
    pub fn new(item: Item, score: f64) -> Self {
        Self { item, score }
    }

    /// Item identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.item.id
    }

    /// Duration in minutes.
    #[inline]
    pub fn duration(&self) -> u32 {
        self.item.duration
    }
}

/// One weekly period of a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Week {
    /// 1-based week number.
    pub week_number: u32,
    /// Assigned items, easiest first.
    pub items: Vec<ScoredItem>,
    /// Sum of assigned durations (minutes).
    pub total_minutes: u64,
}

impl Week {
    /// Creates an empty week.
    pub fn new(week_number: u32) -> Self {
        Self {
            week_number,
            items: Vec::new(),
            total_minutes: 0,
        }
    }

    /// Appends an item and accounts for its duration.
    pub fn push(&mut self, item: ScoredItem) {
        self.total_minutes += u64::from(item.duration());
        self.items.push(item);
    }

    /// Whether no item was assigned.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of assigned items.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// A complete study plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudyPlan {
    /// Weeks in order, numbered from 1.
    pub weeks: Vec<Week>,
}

impl StudyPlan {
    /// Creates a plan from weeks.
    pub fn new(weeks: Vec<Week>) -> Self {
        Self { weeks }
    }

    /// Number of weeks.
    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    /// Looks up a week by its 1-based number.
    pub fn week(&self, week_number: u32) -> Option<&Week> {
        self.weeks.iter().find(|w| w.week_number == week_number)
    }

    /// Iterates over every scheduled item, week by week.
    pub fn items(&self) -> impl Iterator<Item = &ScoredItem> {
        self.weeks.iter().flat_map(|w| w.items.iter())
    }

    /// Total number of scheduled items.
    pub fn item_count(&self) -> usize {
        self.weeks.iter().map(Week::len).sum()
    }

    /// Total scheduled time (minutes).
    pub fn total_minutes(&self) -> u64 {
        self.weeks.iter().map(|w| w.total_minutes).sum()
    }

    /// Whether the item is scheduled in any week.
    pub fn contains(&self, item_id: &str) -> bool {
        self.items().any(|s| s.id() == item_id)
    }

    /// Week number holding the given item.
    pub fn week_of(&self, item_id: &str) -> Option<u32> {
        self.weeks
            .iter()
            .find(|w| w.items.iter().any(|s| s.id() == item_id))
            .map(|w| w.week_number)
    }

    /// Whether nothing was scheduled.
    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    fn scored(id: &str, duration: u32) -> ScoredItem {
        ScoredItem::new(Item::new(id, Difficulty::Easy, duration), 1.0)
    }

    fn sample_plan() -> StudyPlan {
        let mut w1 = Week::new(1);
        w1.push(scored("a", 20));
        w1.push(scored("b", 30));
        let mut w2 = Week::new(2);
        w2.push(scored("c", 45));
        StudyPlan::new(vec![w1, w2, Week::new(3)])
    }

    #[test]
    fn test_week_push_tracks_time() {
        let mut week = Week::new(1);
        assert!(week.is_empty());
        week.push(scored("a", 20));
        week.push(scored("b", 15));
        assert_eq!(week.total_minutes, 35);
        assert_eq!(week.len(), 2);
    }

    #[test]
    fn test_week_total_exceeds_u32() {
        let mut week = Week::new(1);
        week.push(scored("a", 3_000_000_000));
        week.push(scored("b", 3_000_000_000));
        assert_eq!(week.total_minutes, 6_000_000_000);

        let plan = StudyPlan::new(vec![week]);
        assert_eq!(plan.total_minutes(), 6_000_000_000);
    }

    #[test]
    fn test_plan_queries() {
        let plan = sample_plan();
        assert_eq!(plan.week_count(), 3);
        assert_eq!(plan.item_count(), 3);
        assert_eq!(plan.total_minutes(), 95);
        assert!(plan.contains("c"));
        assert!(!plan.contains("z"));
        assert_eq!(plan.week_of("b"), Some(1));
        assert_eq!(plan.week_of("c"), Some(2));
        assert!(plan.week(3).unwrap().is_empty());
        assert!(plan.week(4).is_none());
    }

    #[test]
    fn test_empty_plan() {
        let plan = StudyPlan::default();
        assert!(plan.is_empty());
        assert_eq!(plan.total_minutes(), 0);
    }

    #[test]
    fn test_scored_item_serializes_flat() {
        let value = serde_json::to_value(scored("a", 20)).unwrap();
        assert_eq!(value["id"], "a");
        assert_eq!(value["duration"], 20);
        assert_eq!(value["score"], 1.0);
    }
}
