use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::category::Category;
use crate::model::ids::ItemId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Errors that make an authored item unusable.
///
/// These are data-integrity problems and must be rejected when the pool is
/// loaded, never discovered mid-scoring.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ItemError {
    #[error("item {id}: prompt cannot be blank")]
    BlankPrompt { id: ItemId },

    #[error("item {id}: needs at least 2 options, got {len}")]
    TooFewOptions { id: ItemId, len: usize },

    #[error("item {id}: option {index} cannot be blank")]
    BlankOption { id: ItemId, index: usize },

    #[error("item {id}: correct index {index} out of range for {len} options")]
    CorrectIndexOutOfRange {
        id: ItemId,
        index: usize,
        len: usize,
    },
}

//
// ─── ITEM TYPES ────────────────────────────────────────────────────────────────
//

/// Authoring difficulty grade. Informational only; selection in extended
/// practice modes may filter on it, scoring never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Raw authored item, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub id: ItemId,
    pub category: Category,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub explanation: String,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub context: Option<String>,
}

impl ItemDraft {
    /// Validate the draft into an [`Item`].
    ///
    /// # Errors
    ///
    /// Returns `ItemError` if the prompt or any option is blank, fewer than
    /// two options are given, or `correct_index` does not address an option.
    pub fn validate(self) -> Result<Item, ItemError> {
        if self.prompt.trim().is_empty() {
            return Err(ItemError::BlankPrompt { id: self.id });
        }
        if self.options.len() < 2 {
            return Err(ItemError::TooFewOptions {
                id: self.id,
                len: self.options.len(),
            });
        }
        if let Some(index) = self.options.iter().position(|o| o.trim().is_empty()) {
            return Err(ItemError::BlankOption { id: self.id, index });
        }
        if self.correct_index >= self.options.len() {
            return Err(ItemError::CorrectIndexOutOfRange {
                id: self.id,
                index: self.correct_index,
                len: self.options.len(),
            });
        }

        Ok(Item {
            id: self.id,
            category: self.category,
            prompt: self.prompt,
            options: self.options,
            correct_index: self.correct_index,
            explanation: self.explanation,
            difficulty: self.difficulty,
            context: self.context,
        })
    }
}

/// One validated question or scenario with a fixed correct answer.
///
/// Items are immutable once validated; the candidate-facing fields are read
/// through accessors so the invariants from [`ItemDraft::validate`] hold for
/// the lifetime of the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    category: Category,
    prompt: String,
    options: Vec<String>,
    correct_index: usize,
    explanation: String,
    difficulty: Option<Difficulty>,
    context: Option<String>,
}

impl Item {
    #[must_use]
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Candidate-facing answer options, in presentation order.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// 0-based index of the correct entry in [`Item::options`].
    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    #[must_use]
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// Returns true if `option_index` picks the correct option.
    #[must_use]
    pub fn is_correct(&self, option_index: usize) -> bool {
        option_index == self.correct_index
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
