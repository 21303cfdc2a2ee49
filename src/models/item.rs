//! Practice item model.
//!
//! An item is a single practice problem in the catalog. Items are immutable
//! inputs: the planner copies them into the plan and only the duration of
//! the copy is adjusted for experience level.
//!
//! # Record Format
//! Items deserialize from the catalog record shape:
//!
//! ```json
//! {
//!   "id": 1,
//!   "title": "Two Sum",
//!   "difficulty": "Easy",
//!   "duration": 20,
//!   "companies": ["Google", "Amazon"],
//!   "company_count": 50,
//!   "topic": "Array",
//!   "relatedTopics": [{ "name": "Array" }, { "name": "Hash Table" }],
//!   "isGrind75": true,
//!   "likes": 1200
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Difficulty tier of a practice item.
///
/// Variants are declared in ascending order so the derived `Ord`
/// agrees with [`Difficulty::rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "Very Easy")]
    VeryEasy,
    Easy,
    Medium,
    Hard,
    #[serde(rename = "Very Hard")]
    VeryHard,
}

impl Difficulty {
    /// All tiers, easiest first.
    pub const ALL: [Difficulty; 5] = [
        Difficulty::VeryEasy,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::VeryHard,
    ];

    /// Fixed progression rank (Very Easy = 1 … Very Hard = 5).
    #[inline]
    pub fn rank(self) -> u8 {
        match self {
            Difficulty::VeryEasy => 1,
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
            Difficulty::VeryHard => 5,
        }
    }

    /// Display label as used in catalog records.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::VeryEasy => "Very Easy",
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::VeryHard => "Very Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A topical tag attached to an item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TopicTag {
    /// Tag name (e.g., "Array", "Dynamic Programming").
    pub name: String,
}

impl TopicTag {
    /// Creates a tag.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A practice item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique item identifier.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Human-readable title.
    #[serde(default)]
    pub title: String,
    /// Difficulty tier.
    pub difficulty: Difficulty,
    /// Estimated completion time in minutes.
    pub duration: u32,
    /// Companies known to ask this item.
    #[serde(default)]
    pub companies: Vec<String>,
    /// Frequency signal: how many companies ask this item.
    #[serde(default)]
    pub company_count: u32,
    /// Primary topic name.
    #[serde(default)]
    pub topic: String,
    /// Topic tags, in catalog order.
    #[serde(rename = "relatedTopics", default)]
    pub related_topics: Vec<TopicTag>,
    /// Member of the curated high-signal list.
    #[serde(rename = "isGrind75", alias = "is_curated", default)]
    pub is_curated: bool,
    /// Popularity signal.
    #[serde(default)]
    pub likes: u32,
}

impl Item {
    /// Creates an item with the given ID, difficulty and duration (minutes).
    pub fn new(id: impl Into<String>, difficulty: Difficulty, duration: u32) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            difficulty,
            duration,
            companies: Vec::new(),
            company_count: 0,
            topic: String::new(),
            related_topics: Vec::new(),
            is_curated: false,
            likes: 0,
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Adds a company.
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.companies.push(company.into());
        self
    }

    /// Sets the company frequency signal.
    pub fn with_company_count(mut self, count: u32) -> Self {
        self.company_count = count;
        self
    }

    /// Sets the primary topic.
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    /// Adds a topic tag.
    pub fn with_tag(mut self, name: impl Into<String>) -> Self {
        self.related_topics.push(TopicTag::new(name));
        self
    }

    /// Marks the item as curated.
    pub fn curated(mut self) -> Self {
        self.is_curated = true;
        self
    }

    /// Sets the popularity signal.
    pub fn with_likes(mut self, likes: u32) -> Self {
        self.likes = likes;
        self
    }

    /// Iterates over tag names.
    pub fn tag_names(&self) -> impl Iterator<Item = &str> {
        self.related_topics.iter().map(|t| t.name.as_str())
    }

    /// Whether the item carries the given tag.
    pub fn has_tag(&self, name: &str) -> bool {
        self.tag_names().any(|t| t == name)
    }

    /// Whether the item is asked by the given company.
    pub fn has_company(&self, company: &str) -> bool {
        self.companies.iter().any(|c| c == company)
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
    })
}
