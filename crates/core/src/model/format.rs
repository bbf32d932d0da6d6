use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::category::Category;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Errors that make an exam format unusable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormatError {
    #[error("exam format has no quotas")]
    NoQuotas,

    #[error("quota for {category} must be > 0")]
    ZeroQuota { category: Category },

    #[error("no pass threshold defined for {category}")]
    MissingThreshold { category: Category },

    #[error("threshold for {category} ({threshold}) exceeds its quota ({quota})")]
    ThresholdExceedsQuota {
        category: Category,
        threshold: usize,
        quota: usize,
    },
}

//
// ─── QUOTAS AND THRESHOLDS ─────────────────────────────────────────────────────
//

/// Category → number of items to draw for a session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryQuotas(BTreeMap<Category, usize>);

impl CategoryQuotas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the quota for a category, replacing any previous value.
    #[must_use]
    pub fn with(mut self, category: Category, count: usize) -> Self {
        self.0.insert(category, count);
        self
    }

    #[must_use]
    pub fn get(&self, category: Category) -> Option<usize> {
        self.0.get(&category).copied()
    }

    /// Iterate quota entries in canonical category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        self.0.iter().map(|(c, n)| (*c, *n))
    }

    /// Total session length implied by these quotas.
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Category → minimum correct answers required to pass that section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryThresholds(BTreeMap<Category, usize>);

impl CategoryThresholds {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the threshold for a category, replacing any previous value.
    #[must_use]
    pub fn with(mut self, category: Category, required: usize) -> Self {
        self.0.insert(category, required);
        self
    }

    #[must_use]
    pub fn get(&self, category: Category) -> Option<usize> {
        self.0.get(&category).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        self.0.iter().map(|(c, n)| (*c, *n))
    }
}

//
// ─── EXAM FORMAT ───────────────────────────────────────────────────────────────
//

/// One session type: how many items to draw per category and how many correct
/// answers each category needs to pass.
///
/// Thresholds belong to the format, not to the item pool; the same pool can
/// back both the official exam and a short practice round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamFormat {
    quotas: CategoryQuotas,
    thresholds: CategoryThresholds,
}

impl ExamFormat {
    /// Build a format from quota and threshold maps.
    ///
    /// # Errors
    ///
    /// Returns `FormatError` if there are no quotas, any quota is zero, a
    /// quota category has no threshold, or a threshold exceeds its quota.
    pub fn new(
        quotas: CategoryQuotas,
        thresholds: CategoryThresholds,
    ) -> Result<Self, FormatError> {
        if quotas.is_empty() {
            return Err(FormatError::NoQuotas);
        }
        for (category, quota) in quotas.iter() {
            if quota == 0 {
                return Err(FormatError::ZeroQuota { category });
            }
            let threshold = thresholds
                .get(category)
                .ok_or(FormatError::MissingThreshold { category })?;
            if threshold > quota {
                return Err(FormatError::ThresholdExceedsQuota {
                    category,
                    threshold,
                    quota,
                });
            }
        }

        Ok(Self { quotas, thresholds })
    }

    /// The official full exam: 8 controls, 28 signs, 28 rules; pass marks
    /// 6/8, 23/28 and 22/28, matching the real multi-section test.
    #[must_use]
    pub fn full_exam() -> Self {
        let quotas = CategoryQuotas::new()
            .with(Category::Controls, 8)
            .with(Category::Signs, 28)
            .with(Category::Rules, 28);
        let thresholds = CategoryThresholds::new()
            .with(Category::Controls, 6)
            .with(Category::Signs, 23)
            .with(Category::Rules, 22);
        Self { quotas, thresholds }
    }

    /// A short practice round: 2 controls, 5 signs, 5 rules, with the full
    /// exam's pass marks scaled down proportionally (rounded to nearest).
    #[must_use]
    pub fn quick_practice() -> Self {
        let quotas = CategoryQuotas::new()
            .with(Category::Controls, 2)
            .with(Category::Signs, 5)
            .with(Category::Rules, 5);
        let thresholds = CategoryThresholds::new()
            .with(Category::Controls, 2)
            .with(Category::Signs, 4)
            .with(Category::Rules, 4);
        Self { quotas, thresholds }
    }

    #[must_use]
    pub fn quotas(&self) -> &CategoryQuotas {
        &self.quotas
    }

    #[must_use]
    pub fn thresholds(&self) -> &CategoryThresholds {
        &self.thresholds
    }

    /// Total number of items a session of this format contains.
    #[must_use]
    pub fn session_len(&self) -> usize {
        self.quotas.total()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
