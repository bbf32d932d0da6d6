use rand::Rng;
use rand::seq::SliceRandom;

use exam_core::model::{CategoryQuotas, Item, ItemPool};

use crate::error::ComposeError;
use super::sampler;

/// Compose one fixed-order test from the pool according to the quotas.
///
/// Each quota category is sampled independently, then the concatenated
/// sequence gets one final shuffle so category identity is not inferable from
/// position. The returned order is meant to become the immutable item list of
/// a session and must not be reshuffled mid-session. Every item keeps its
/// category tag, which the scorer relies on.
///
/// # Errors
///
/// Returns `ComposeError::EmptyQuotas` for an empty quota map and propagates
/// `ComposeError::QuotaExceedsPool` from sampling.
pub fn compose_with_rng<R: Rng + ?Sized>(
    pool: &ItemPool,
    quotas: &CategoryQuotas,
    rng: &mut R,
) -> Result<Vec<Item>, ComposeError> {
    if quotas.is_empty() {
        return Err(ComposeError::EmptyQuotas);
    }

    let mut items = Vec::with_capacity(quotas.total());
    for (category, count) in quotas.iter() {
        items.extend(sampler::sample_with_rng(pool, category, count, rng)?);
    }

    items.shuffle(rng);
    Ok(items)
}

/// [`compose_with_rng`] using the thread-local generator.
///
/// # Errors
///
/// See [`compose_with_rng`].
pub fn compose(pool: &ItemPool, quotas: &CategoryQuotas) -> Result<Vec<Item>, ComposeError> {
    compose_with_rng(pool, quotas, &mut rand::rng())
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use exam_core::model::{Category, ItemDraft, ItemId};

    fn build_item(id: &str, category: Category) -> Item {
        ItemDraft {
            id: ItemId::new(id),
            category,
            prompt: format!("Prompt {id}"),
            options: vec!["A".to_string(), "B".to_string()],
            correct_index: 0,
            explanation: String::new(),
            difficulty: None,
            context: None,
        }
        .validate()
        .unwrap()
    }

    fn build_pool() -> ItemPool {
        let mut items = Vec::new();
        for i in 0..6 {
            items.push(build_item(&format!("c-{i}"), Category::Controls));
        }
        for i in 0..10 {
            items.push(build_item(&format!("s-{i}"), Category::Signs));
        }
        for i in 0..10 {
            items.push(build_item(&format!("r-{i}"), Category::Rules));
        }
        ItemPool::new(items).unwrap()
    }

    #[test]
    fn composed_length_is_sum_of_quotas() {
        let pool = build_pool();
        let quotas = CategoryQuotas::new()
            .with(Category::Controls, 2)
            .with(Category::Signs, 5)
            .with(Category::Rules, 5);
        let mut rng = StdRng::seed_from_u64(42);

        let items = compose_with_rng(&pool, &quotas, &mut rng).unwrap();
        assert_eq!(items.len(), quotas.total());

        let ids: HashSet<_> = items.iter().map(|i| i.id().clone()).collect();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn composed_test_honors_per_category_quotas() {
        let pool = build_pool();
        let quotas = CategoryQuotas::new()
            .with(Category::Controls, 3)
            .with(Category::Rules, 4);
        let mut rng = StdRng::seed_from_u64(9);

        let items = compose_with_rng(&pool, &quotas, &mut rng).unwrap();
        let controls = items
            .iter()
            .filter(|i| i.category() == Category::Controls)
            .count();
        let rules = items
            .iter()
            .filter(|i| i.category() == Category::Rules)
            .count();
        assert_eq!(controls, 3);
        assert_eq!(rules, 4);
    }

    #[test]
    fn empty_quotas_are_rejected() {
        let pool = build_pool();
        let mut rng = StdRng::seed_from_u64(1);

        let err = compose_with_rng(&pool, &CategoryQuotas::new(), &mut rng).unwrap_err();
        assert_eq!(err, ComposeError::EmptyQuotas);
    }

    #[test]
    fn oversized_quota_fails_the_whole_compose() {
        let pool = build_pool();
        let quotas = CategoryQuotas::new()
            .with(Category::Controls, 2)
            .with(Category::Signs, 11);
        let mut rng = StdRng::seed_from_u64(1);

        let err = compose_with_rng(&pool, &quotas, &mut rng).unwrap_err();
        assert!(matches!(err, ComposeError::QuotaExceedsPool { .. }));
    }
}
