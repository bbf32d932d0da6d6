use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::category::Category;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResultError {
    #[error("{category}: correct count {correct} exceeds total {total}")]
    CorrectExceedsTotal {
        category: Category,
        correct: usize,
        total: usize,
    },

    #[error("{category}: required count {required} exceeds total {total}")]
    RequiredExceedsTotal {
        category: Category,
        required: usize,
        total: usize,
    },

    #[error("result has no category scores")]
    Empty,
}

/// Outcome of one exam section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    correct: usize,
    total: usize,
    required: usize,
}

impl CategoryScore {
    /// Build a section score from raw tallies.
    ///
    /// # Errors
    ///
    /// Returns `ResultError` if `correct` or `required` exceeds `total`.
    pub fn new(
        category: Category,
        correct: usize,
        total: usize,
        required: usize,
    ) -> Result<Self, ResultError> {
        if correct > total {
            return Err(ResultError::CorrectExceedsTotal {
                category,
                correct,
                total,
            });
        }
        if required > total {
            return Err(ResultError::RequiredExceedsTotal {
                category,
                required,
                total,
            });
        }
        Ok(Self {
            correct,
            total,
            required,
        })
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Minimum correct answers needed to pass this section.
    #[must_use]
    pub fn required(&self) -> usize {
        self.required
    }

    /// Scoring exactly at the required mark passes.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.correct >= self.required
    }
}

/// Final outcome of a completed exam session.
///
/// Immutable once computed. Only categories that actually appeared in the
/// session are present; the overall verdict is the conjunction of every
/// section verdict (no weighting, no partial credit).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamResult {
    categories: BTreeMap<Category, CategoryScore>,
    passed: bool,
}

impl ExamResult {
    /// Build a result from per-category tallies.
    ///
    /// # Errors
    ///
    /// Returns `ResultError` if the map is empty or any score is
    /// internally inconsistent (already validated by [`CategoryScore::new`]
    /// when built through the scorer).
    pub fn new(categories: BTreeMap<Category, CategoryScore>) -> Result<Self, ResultError> {
        if categories.is_empty() {
            return Err(ResultError::Empty);
        }
        let passed = categories.values().all(CategoryScore::passed);
        Ok(Self { categories, passed })
    }

    /// Overall verdict: every section must pass.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.passed
    }

    #[must_use]
    pub fn category(&self, category: Category) -> Option<&CategoryScore> {
        self.categories.get(&category)
    }

    /// Section scores in canonical category order.
    pub fn categories(&self) -> impl Iterator<Item = (Category, &CategoryScore)> {
        self.categories.iter().map(|(c, s)| (*c, s))
    }

    /// Total correct answers across all sections.
    #[must_use]
    pub fn total_correct(&self) -> usize {
        self.categories.values().map(CategoryScore::correct).sum()
    }

    /// Total items across all sections.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.categories.values().map(CategoryScore::total).sum()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
