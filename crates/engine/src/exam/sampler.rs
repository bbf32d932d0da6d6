use rand::Rng;
use rand::seq::SliceRandom;

use exam_core::model::{Category, Item, ItemPool};

use crate::error::ComposeError;

/// Draw `count` items of one category from the pool, without replacement.
///
/// The candidate list is copied out of the pool and Fisher–Yates shuffled
/// (via [`SliceRandom::shuffle`]), then truncated to `count`; the pool itself
/// is never touched. Repeated calls deliberately return different subsets so
/// repeated test attempts are not identical.
///
/// # Errors
///
/// Returns `ComposeError::QuotaExceedsPool` when the pool holds fewer items
/// of `category` than requested. Capping silently would weaken the exam, so
/// an oversized quota refuses to sample at all.
pub fn sample_with_rng<R: Rng + ?Sized>(
    pool: &ItemPool,
    category: Category,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Item>, ComposeError> {
    let mut candidates: Vec<&Item> = pool.in_category(category).collect();
    if count > candidates.len() {
        return Err(ComposeError::QuotaExceedsPool {
            category,
            requested: count,
            available: candidates.len(),
        });
    }

    candidates.shuffle(rng);
    Ok(candidates.into_iter().take(count).cloned().collect())
}

/// [`sample_with_rng`] using the thread-local generator.
///
/// # Errors
///
/// See [`sample_with_rng`].
pub fn sample(pool: &ItemPool, category: Category, count: usize) -> Result<Vec<Item>, ComposeError> {
    sample_with_rng(pool, category, count, &mut rand::rng())
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
