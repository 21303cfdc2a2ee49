//! Facet counts for configuration screens.
//!
//! Each facet counts catalog items under every filter *except* its own, so
//! a user sees how many items each option would contribute if toggled.

use std::collections::{BTreeMap, HashMap};

use super::Catalog;
use crate::models::{Difficulty, StudyConfig};
use crate::planner::filter::{matches_companies, matches_difficulty, matches_topics};

impl Catalog {
    /// Items per difficulty, applying the company and topic filters.
    ///
    /// Every difficulty has an entry, zero when nothing matches.
    pub fn difficulty_counts(&self, config: &StudyConfig) -> BTreeMap<Difficulty, usize> {
        let mut counts: BTreeMap<Difficulty, usize> =
            Difficulty::ALL.iter().map(|&d| (d, 0)).collect();

        for item in self.items() {
            if matches_companies(item, config) && matches_topics(item, config) {
                *counts.entry(item.difficulty).or_insert(0) += 1;
            }
        }

        counts
    }

    /// Items per company, applying the difficulty and topic filters.
    ///
    /// Every company in the catalog has an entry, zero when nothing matches.
    pub fn company_counts(&self, config: &StudyConfig) -> HashMap<String, usize> {
        let mut counts: HashMap<String, usize> = self
            .items()
            .iter()
            .flat_map(|item| item.companies.iter())
            .map(|company| (company.clone(), 0))
            .collect();

        for item in self.items() {
            if !(matches_difficulty(item, config) && matches_topics(item, config)) {
                continue;
            }
            for company in &item.companies {
                *counts.entry(company.clone()).or_insert(0) += 1;
            }
        }

        counts
    }

    /// Items per topic tag, applying the difficulty and company filters.
    ///
    /// Every tag in the catalog has an entry, zero when nothing matches.
    pub fn topic_counts(&self, config: &StudyConfig) -> HashMap<String, usize> {
        let mut counts: HashMap<String, usize> = self
            .items()
            .iter()
            .flat_map(|item| item.tag_names())
            .map(|tag| (tag.to_string(), 0))
            .collect();

        for item in self.items() {
            if !(matches_difficulty(item, config) && matches_companies(item, config)) {
                continue;
            }
            for tag in item.tag_names() {
                *counts.entry(tag.to_string()).or_insert(0) += 1;
            }
        }

        counts
    }
}
