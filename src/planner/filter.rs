//! Candidate filtering.
//!
//! Reduces the catalog to the items eligible under a [`StudyConfig`].
//! Each criterion is a separate predicate so that facet counts can apply
//! every filter except one.

use crate::models::{Item, StudyConfig};

/// Whether the item's difficulty is selected.
#[inline]
pub fn matches_difficulty(item: &Item, config: &StudyConfig) -> bool {
    config.selected_difficulties.contains(&item.difficulty)
}

/// Whether the item passes the company filter (empty filter passes all).
pub fn matches_companies(item: &Item, config: &StudyConfig) -> bool {
    config.selected_companies.is_empty()
        || item
            .companies
            .iter()
            .any(|c| config.selected_companies.contains(c))
}

/// Whether the item passes the topic filter (empty filter passes all).
pub fn matches_topics(item: &Item, config: &StudyConfig) -> bool {
    config.selected_topics.is_empty()
        || item
            .tag_names()
            .any(|t| config.selected_topics.contains(t))
}

/// Whether the item passes every criterion.
pub fn is_eligible(item: &Item, config: &StudyConfig) -> bool {
    matches_difficulty(item, config)
        && matches_companies(item, config)
        && matches_topics(item, config)
}

/// Returns the eligible items in catalog order.
pub fn filter_pool<'a>(items: &'a [Item], config: &StudyConfig) -> Vec<&'a Item> {
    items.iter().filter(|item| is_eligible(item, config)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    fn sample_items() -> Vec<Item> {
        vec![
            Item::new("1", Difficulty::Easy, 20)
                .with_company("Google")
                .with_company("Amazon")
                .with_tag("Array"),
            Item::new("2", Difficulty::Medium, 30)
                .with_company("Facebook")
                .with_tag("Array"),
            Item::new("3", Difficulty::Hard, 45)
                .with_company("Google")
                .with_tag("Graph"),
            Item::new("4", Difficulty::Easy, 15)
                .with_company("Microsoft")
                .with_tag("String"),
        ]
    }

    fn ids(pool: &[&Item]) -> Vec<String> {
        pool.iter().map(|i| i.id.clone()).collect()
    }

    #[test]
    fn test_difficulty_filter() {
        let items = sample_items();
        let config = StudyConfig::new(1, 1.0).with_difficulties([Difficulty::Easy]);
        assert_eq!(ids(&filter_pool(&items, &config)), vec!["1", "4"]);
    }

    #[test]
    fn test_empty_difficulty_selection_yields_empty_pool() {
        let items = sample_items();
        let config = StudyConfig::new(1, 1.0);
        assert!(filter_pool(&items, &config).is_empty());
    }

    #[test]
    fn test_company_filter() {
        let items = sample_items();
        let config = StudyConfig::new(1, 1.0)
            .with_difficulties(Difficulty::ALL)
            .with_company("Google");
        assert_eq!(ids(&filter_pool(&items, &config)), vec!["1", "3"]);
    }

    #[test]
    fn test_topic_filter() {
        let items = sample_items();
        let config = StudyConfig::new(1, 1.0)
            .with_difficulties(Difficulty::ALL)
            .with_topic("Array")
            .with_topic("String");
        assert_eq!(ids(&filter_pool(&items, &config)), vec!["1", "2", "4"]);
    }

    #[test]
    fn test_combined_filters() {
        let items = sample_items();
        let config = StudyConfig::new(1, 1.0)
            .with_difficulties([Difficulty::Easy, Difficulty::Medium])
            .with_company("Google")
            .with_topic("Array");
        assert_eq!(ids(&filter_pool(&items, &config)), vec!["1"]);
    }

    #[test]
    fn test_untagged_item_fails_topic_filter() {
        let items = vec![Item::new("x", Difficulty::Easy, 10)];
        let config = StudyConfig::new(1, 1.0)
            .with_difficulties([Difficulty::Easy])
            .with_topic("Array");
        assert!(filter_pool(&items, &config).is_empty());

        let open = StudyConfig::new(1, 1.0).with_difficulties([Difficulty::Easy]);
        assert_eq!(filter_pool(&items, &open).len(), 1);
    }
}
