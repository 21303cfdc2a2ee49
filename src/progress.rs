//! Plan progress metrics.
//!
//! Computes completion indicators from a generated plan and the set of
//! item IDs the learner has marked complete. How completion state is
//! stored is up to the caller.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Items | Items scheduled across all weeks |
//! | Completed Items | Scheduled items marked complete |
//! | Completion Rate | completed / total (1.0 for an empty plan) |
//! | Remaining Minutes | Sum of durations of uncompleted items |
//! | Week Progress | Per-week completed / total / remaining |
//!
//! Completed IDs that are not part of the plan are ignored.

use std::collections::{HashMap, HashSet};

use crate::models::{StudyPlan, Week};

/// Completion state of one week.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekProgress {
    /// 1-based week number.
    pub week_number: u32,
    /// Completed items in this week.
    pub completed: usize,
    /// Items scheduled in this week.
    pub total: usize,
    /// Minutes left in this week.
    pub remaining_minutes: u64,
}

impl WeekProgress {
    fn calculate(week: &Week, completed: &HashSet<String>) -> Self {
        let mut done = 0;
        let mut remaining_minutes = 0;
        for scored in &week.items {
            if completed.contains(scored.id()) {
                done += 1;
            } else {
                remaining_minutes += u64::from(scored.duration());
            }
        }

        Self {
            week_number: week.week_number,
            completed: done,
            total: week.items.len(),
            remaining_minutes,
        }
    }

    /// Whether the week has items and all of them are done.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

/// Progress indicators for a plan.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanProgress {
    /// Items scheduled across all weeks.
    pub total_items: usize,
    /// Scheduled items marked complete.
    pub completed_items: usize,
    /// Fraction complete (0.0..=1.0).
    pub completion_rate: f64,
    /// Minutes of uncompleted work left.
    pub remaining_minutes: u64,
    /// Per-week breakdown, in plan order.
    pub weeks: Vec<WeekProgress>,
}

impl PlanProgress {
    /// Computes progress from a plan and the completed item IDs.
    pub fn calculate(plan: &StudyPlan, completed: &HashSet<String>) -> Self {
        let weeks: Vec<WeekProgress> = plan
            .weeks
            .iter()
            .map(|w| WeekProgress::calculate(w, completed))
            .collect();

        let total_items: usize = weeks.iter().map(|w| w.total).sum();
        let completed_items: usize = weeks.iter().map(|w| w.completed).sum();
        let remaining_minutes: u64 = weeks.iter().map(|w| w.remaining_minutes).sum();

        let completion_rate = if total_items == 0 {
            1.0
        } else {
            completed_items as f64 / total_items as f64
        };

        Self {
            total_items,
            completed_items,
            completion_rate,
            remaining_minutes,
            weeks,
        }
    }

    /// Remaining time split into whole hours and leftover minutes.
    pub fn remaining_hours_minutes(&self) -> (u64, u64) {
        (self.remaining_minutes / 60, self.remaining_minutes % 60)
    }

    /// Whether every scheduled item is done (false for an empty plan).
    pub fn is_finished(&self) -> bool {
        self.total_items > 0 && self.completed_items == self.total_items
    }

    /// Week numbers that are fully complete.
    pub fn completed_weeks(&self) -> Vec<u32> {
        self.weeks
            .iter()
            .filter(|w| w.is_complete())
            .map(|w| w.week_number)
            .collect()
    }
}

/// Default number of entries shown in a topic breakdown.
pub const TOPIC_BREAKDOWN_LIMIT: usize = 15;

/// Counts topic tags across all scheduled items.
///
/// Items without tags count toward their primary topic, or `"Misc"` when
/// that is empty too. Sorted by count descending, then name, and truncated
/// to `limit` entries when given (see [`TOPIC_BREAKDOWN_LIMIT`]).
pub fn topic_breakdown(plan: &StudyPlan, limit: Option<usize>) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for scored in plan.items() {
        let item = &scored.item;
        if item.related_topics.is_empty() {
            let topic = if item.topic.is_empty() {
                "Misc"
            } else {
                item.topic.as_str()
            };
            *counts.entry(topic).or_insert(0) += 1;
        } else {
            for tag in item.tag_names() {
                *counts.entry(tag).or_insert(0) += 1;
            }
        }
    }

    let mut breakdown: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect();
    breakdown.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    if let Some(limit) = limit {
        breakdown.truncate(limit);
    }
    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, Item, ScoredItem};

    fn scored(item: Item) -> ScoredItem {
        ScoredItem::new(item, 1.0)
    }

    fn sample_plan() -> StudyPlan {
        let mut w1 = Week::new(1);
        w1.push(scored(Item::new("a", Difficulty::Easy, 20).with_tag("Array")));
        w1.push(scored(
            Item::new("b", Difficulty::Easy, 30).with_tag("Array").with_tag("Hash Table"),
        ));
        let mut w2 = Week::new(2);
        w2.push(scored(Item::new("c", Difficulty::Hard, 75).with_topic("Graph")));
        w2.push(scored(Item::new("d", Difficulty::Hard, 10)));
        StudyPlan::new(vec![w1, w2, Week::new(3)])
    }

    fn done(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_progress_basic() {
        let progress = PlanProgress::calculate(&sample_plan(), &done(&["a", "c"]));
        assert_eq!(progress.total_items, 4);
        assert_eq!(progress.completed_items, 2);
        assert!((progress.completion_rate - 0.5).abs() < 1e-10);
        assert_eq!(progress.remaining_minutes, 40);
        assert_eq!(progress.remaining_hours_minutes(), (0, 40));
        assert!(!progress.is_finished());
    }

    #[test]
    fn test_week_completion() {
        let progress = PlanProgress::calculate(&sample_plan(), &done(&["a", "b", "c"]));
        assert!(progress.weeks[0].is_complete());
        assert!(!progress.weeks[1].is_complete());
        // Empty weeks never count as complete
        assert!(!progress.weeks[2].is_complete());
        assert_eq!(progress.completed_weeks(), vec![1]);
        assert_eq!(progress.weeks[1].remaining_minutes, 10);
    }

    #[test]
    fn test_unknown_ids_ignored() {
        let progress = PlanProgress::calculate(&sample_plan(), &done(&["zzz"]));
        assert_eq!(progress.completed_items, 0);
        assert_eq!(progress.remaining_minutes, 135);
        assert_eq!(progress.remaining_hours_minutes(), (2, 15));
    }

    #[test]
    fn test_finished() {
        let progress = PlanProgress::calculate(&sample_plan(), &done(&["a", "b", "c", "d"]));
        assert!(progress.is_finished());
        assert_eq!(progress.remaining_minutes, 0);
        assert!((progress.completion_rate - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_plan() {
        let progress = PlanProgress::calculate(&StudyPlan::default(), &HashSet::new());
        assert_eq!(progress.total_items, 0);
        assert!((progress.completion_rate - 1.0).abs() < 1e-10);
        assert!(!progress.is_finished());
    }

    #[test]
    fn test_topic_breakdown() {
        let breakdown = topic_breakdown(&sample_plan(), None);
        assert_eq!(
            breakdown,
            vec![
                ("Array".to_string(), 2),
                ("Graph".to_string(), 1),
                ("Hash Table".to_string(), 1),
                ("Misc".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_topic_breakdown_limit() {
        let breakdown = topic_breakdown(&sample_plan(), Some(2));
        assert_eq!(
            breakdown,
            vec![("Array".to_string(), 2), ("Graph".to_string(), 1)]
        );
        assert_eq!(topic_breakdown(&sample_plan(), Some(TOPIC_BREAKDOWN_LIMIT)).len(), 4);
    }
}
