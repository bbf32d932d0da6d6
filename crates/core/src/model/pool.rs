use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::category::Category;
use crate::model::ids::ItemId;
use crate::model::item::{Item, ItemDraft, ItemError};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Errors raised while assembling an item pool.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PoolError {
    #[error("pool contains no items")]
    Empty,

    #[error("duplicate item id in pool: {id}")]
    DuplicateId { id: ItemId },

    #[error(transparent)]
    Item(#[from] ItemError),
}

//
// ─── ITEM POOL ─────────────────────────────────────────────────────────────────
//

/// Immutable catalog of validated assessment items.
///
/// Loaded once at application start from whatever backing store the caller
/// uses; the engine only ever reads it. Sampling copies out of the pool and
/// never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPool {
    items: Vec<Item>,
}

impl ItemPool {
    /// Build a pool from already-validated items.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Empty` for an empty list and
    /// `PoolError::DuplicateId` if two items share an id.
    pub fn new(items: Vec<Item>) -> Result<Self, PoolError> {
        if items.is_empty() {
            return Err(PoolError::Empty);
        }

        let mut seen: HashSet<&ItemId> = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id()) {
                return Err(PoolError::DuplicateId {
                    id: item.id().clone(),
                });
            }
        }

        Ok(Self { items })
    }

    /// Validate authored drafts and build a pool from them.
    ///
    /// # Errors
    ///
    /// Propagates the first `ItemError` from draft validation, then applies
    /// the same checks as [`ItemPool::new`].
    pub fn from_drafts(drafts: Vec<ItemDraft>) -> Result<Self, PoolError> {
        let items = drafts
            .into_iter()
            .map(ItemDraft::validate)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(items)
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the items tagged with `category`, in pool order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(move |i| i.category() == category)
    }

    /// Number of items available for `category`.
    #[must_use]
    pub fn category_len(&self, category: Category) -> usize {
        self.in_category(category).count()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
