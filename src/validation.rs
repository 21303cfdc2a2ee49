//! Input validation for study planning.
//!
//! The planner tolerates degenerate input (it returns empty weeks rather
//! than failing), so these checks are opt-in. They detect:
//! - Duplicate or empty item IDs
//! - Items with zero duration
//! - Configurations with no weeks, no capacity, or no difficulty selected
//!
//! All issues are collected; validation never stops at the first one.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{Item, StudyConfig};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two items share the same ID.
    DuplicateId,
    /// An item has an empty ID.
    EmptyId,
    /// An item has a zero duration.
    ZeroDuration,
    /// The configuration has zero weeks.
    NoWeeks,
    /// Weekly capacity is not a positive finite number.
    InvalidCapacity,
    /// No difficulty is selected, so nothing can qualify.
    NoDifficulties,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates catalog records.
///
/// Checks:
/// 1. No empty item IDs
/// 2. No duplicate item IDs
/// 3. Every item has a positive duration
pub fn validate_catalog(items: &[Item]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (idx, item) in items.iter().enumerate() {
        if item.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Item at position {idx} has an empty ID"),
            ));
        } else if !seen.insert(item.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate item ID: {}", item.id),
            ));
        }

        if item.duration == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroDuration,
                format!("Item '{}' has zero duration", item.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a study configuration.
///
/// Checks:
/// 1. At least one week
/// 2. Positive, finite weekly hours
/// 3. At least one difficulty selected
pub fn validate_config(config: &StudyConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.weeks == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoWeeks,
            "Plan must span at least one week",
        ));
    }

    if !config.hours_per_week.is_finite() || config.hours_per_week <= 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidCapacity,
            format!(
                "Hours per week must be positive, got {}",
                config.hours_per_week
            ),
        ));
    }

    if config.selected_difficulties.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoDifficulties,
            "No difficulty selected; no item can qualify",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
